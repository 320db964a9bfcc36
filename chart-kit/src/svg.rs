//! SVG output for scenes.

use std::fmt::Write;

use crate::scene::{arc_path, Primitive, Scene};

/// Sink for scene primitives. Scenes are replayed in order, so later
/// primitives paint over earlier ones.
pub trait RendererBackend {
    fn begin_frame(&mut self, width: f64, height: f64);
    fn draw(&mut self, primitive: &Primitive);
    fn end_frame(&mut self) {}
}

pub fn replay<B: RendererBackend>(scene: &Scene, backend: &mut B) {
    backend.begin_frame(scene.width, scene.height);
    for p in &scene.primitives {
        backend.draw(p);
    }
    backend.end_frame();
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Writes markup for an inline `<svg>` element.
#[derive(Debug, Default)]
pub struct SvgBackend {
    out: String,
}

impl SvgBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl RendererBackend for SvgBackend {
    fn begin_frame(&mut self, width: f64, height: f64) {
        self.out.clear();
        let _ = write!(
            self.out,
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width:.0} {height:.0}" width="100%" preserveAspectRatio="xMidYMid meet" class="chart-svg">"##
        );
    }

    fn draw(&mut self, primitive: &Primitive) {
        // fmt::Write into a String cannot fail.
        let _ = match primitive {
            Primitive::Rect { x, y, w, h, fill, title } => write!(
                self.out,
                r##"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{}" rx="2"><title>{}</title></rect>"##,
                escape(fill),
                escape(title)
            ),
            Primitive::Polyline { points, stroke, width } => {
                let pts: Vec<String> = points.iter().map(|(x, y)| format!("{x:.2},{y:.2}")).collect();
                write!(
                    self.out,
                    r##"<polyline points="{}" fill="none" stroke="{}" stroke-width="{width}"/>"##,
                    pts.join(" "),
                    escape(stroke)
                )
            }
            Primitive::Dot { x, y, r, fill, title } => write!(
                self.out,
                r##"<circle cx="{x:.2}" cy="{y:.2}" r="{r}" fill="{}"><title>{}</title></circle>"##,
                escape(fill),
                escape(title)
            ),
            Primitive::Arc { cx, cy, outer, inner, start, end, fill, title } => write!(
                self.out,
                r##"<path d="{}" fill="{}" fill-rule="evenodd" stroke="#fff" stroke-width="1"><title>{}</title></path>"##,
                arc_path(*cx, *cy, *outer, *inner, *start, *end),
                escape(fill),
                escape(title)
            ),
            Primitive::Segment { x1, y1, x2, y2, role } => write!(
                self.out,
                r##"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" class="{}"/>"##,
                role.class()
            ),
            Primitive::Text { x, y, text, anchor, role, rotate } => {
                let transform = if *rotate != 0.0 {
                    format!(r##" transform="rotate({rotate} {x:.2} {y:.2})""##)
                } else {
                    String::new()
                };
                write!(
                    self.out,
                    r##"<text x="{x:.2}" y="{y:.2}" text-anchor="{}" class="{}"{transform}>{}</text>"##,
                    anchor.as_str(),
                    role.class(),
                    escape(text)
                )
            }
        };
    }

    fn end_frame(&mut self) {
        self.out.push_str("</svg>");
    }
}

/// Renders `scene` as a standalone `<svg>` string.
pub fn to_svg(scene: &Scene) -> String {
    let mut backend = SvgBackend::new();
    replay(scene, &mut backend);
    backend.into_string()
}
