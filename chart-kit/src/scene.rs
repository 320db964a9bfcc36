//! Drawing primitives produced by the layouts.
//!
//! Coordinates are in viewport pixels with the origin at the top left, so a
//! scene can be emitted as SVG or replayed on a canvas without conversion.

use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Role of a line or label, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Grid,
    Axis,
    TickLabel,
    CategoryLabel,
    SliceLabel,
}

impl Role {
    pub fn class(&self) -> &'static str {
        match self {
            Role::Grid => "chart-gridline",
            Role::Axis => "chart-axis",
            Role::TickLabel => "chart-tick",
            Role::CategoryLabel => "chart-category",
            Role::SliceLabel => "chart-slice-label",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: String,
        title: String,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: String,
        width: f64,
    },
    Dot {
        x: f64,
        y: f64,
        r: f64,
        fill: String,
        title: String,
    },
    /// Annular sector between `start` and `end` radians, clockwise from
    /// twelve o'clock. `inner == 0` draws a pie slice.
    Arc {
        cx: f64,
        cy: f64,
        outer: f64,
        inner: f64,
        start: f64,
        end: f64,
        fill: String,
        title: String,
    },
    Segment {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        role: Role,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        anchor: Anchor,
        role: Role,
        /// Degrees, around `(x, y)`.
        rotate: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
    pub legend: Vec<LegendEntry>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }

    /// True when there is nothing data-bearing to draw.
    pub fn is_empty(&self) -> bool {
        !self.primitives.iter().any(|p| {
            matches!(
                p,
                Primitive::Rect { .. } | Primitive::Polyline { .. } | Primitive::Dot { .. } | Primitive::Arc { .. }
            )
        })
    }

    pub fn count(&self, pred: impl Fn(&Primitive) -> bool) -> usize {
        self.primitives.iter().filter(|p| pred(p)).count()
    }
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let a = angle - FRAC_PI_2;
    (cx + r * a.cos(), cy + r * a.sin())
}

fn fmt_xy((x, y): (f64, f64)) -> String {
    format!("{x:.2} {y:.2}")
}

/// SVG path data for an annular sector. Full circles are split in two arcs
/// since a single arc with identical endpoints renders nothing.
pub fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let sweep = (end - start).clamp(0.0, TAU);
    if sweep >= TAU - 1e-9 {
        let mid = start + TAU / 2.0;
        let mut d = format!(
            "M {} A {outer:.2} {outer:.2} 0 1 1 {} A {outer:.2} {outer:.2} 0 1 1 {} Z",
            fmt_xy(polar(cx, cy, outer, start)),
            fmt_xy(polar(cx, cy, outer, mid)),
            fmt_xy(polar(cx, cy, outer, start)),
        );
        if inner > 0.0 {
            d.push_str(&format!(
                " M {} A {inner:.2} {inner:.2} 0 1 0 {} A {inner:.2} {inner:.2} 0 1 0 {} Z",
                fmt_xy(polar(cx, cy, inner, start)),
                fmt_xy(polar(cx, cy, inner, mid)),
                fmt_xy(polar(cx, cy, inner, start)),
            ));
        }
        return d;
    }

    let large = if sweep > TAU / 2.0 { 1 } else { 0 };
    let end = start + sweep;
    let outer_start = polar(cx, cy, outer, start);
    let outer_end = polar(cx, cy, outer, end);
    if inner > 0.0 {
        format!(
            "M {} A {outer:.2} {outer:.2} 0 {large} 1 {} L {} A {inner:.2} {inner:.2} 0 {large} 0 {} Z",
            fmt_xy(outer_start),
            fmt_xy(outer_end),
            fmt_xy(polar(cx, cy, inner, end)),
            fmt_xy(polar(cx, cy, inner, start)),
        )
    } else {
        format!(
            "M {} L {} A {outer:.2} {outer:.2} 0 {large} 1 {} Z",
            fmt_xy((cx, cy)),
            fmt_xy(outer_start),
            fmt_xy(outer_end),
        )
    }
}
