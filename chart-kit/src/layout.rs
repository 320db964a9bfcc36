//! Table + spec → scene.

use std::f64::consts::TAU;

use bi_core::Table;

use crate::scale::{nice_ticks, ticks_within, BandScale, LinearScale};
use crate::scene::{Anchor, LegendEntry, Primitive, Role, Scene};
use crate::spec::{ChartSpec, Domain, Kind, Series};

const TICKS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 320.0,
        }
    }
}

/// Plot area inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Plot {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Plot {
    fn for_spec(spec: &ChartSpec, vp: Viewport, categories: usize) -> Self {
        let (horizontal, composed) = match spec.kind {
            Kind::Bars { horizontal, .. } => (horizontal, false),
            Kind::Composed => (false, true),
            _ => (false, false),
        };
        let left = if horizontal { 130.0 } else { 52.0 };
        let right = if composed { 52.0 } else { 20.0 };
        let rotated = !horizontal && spec.show_categories && categories > 8;
        let bottom = match (spec.show_categories, rotated) {
            (false, _) => 16.0,
            (true, true) => 72.0,
            (true, false) => 36.0,
        };
        Self {
            left,
            right: (vp.width - right).max(left + 1.0),
            top: 12.0,
            bottom: (vp.height - bottom).max(13.0),
        }
    }
}

/// Lays out `table` as described by `spec`. Empty tables give a scene
/// without data primitives, which callers can show as "no data".
pub fn layout(spec: &ChartSpec, table: &Table, vp: Viewport) -> Scene {
    match spec.kind {
        Kind::Pie { inner } => pie(spec, table, vp, inner),
        _ => cartesian(spec, table, vp),
    }
}

fn fmt_value(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    format!("{rounded}")
}

fn extent(table: &Table, series: &[Series], stacked: bool) -> (f64, f64) {
    let mut lo = 0.0_f64;
    let mut hi = 0.0_f64;
    for row in &table.rows {
        if stacked {
            let (mut pos, mut neg) = (0.0, 0.0);
            for s in series {
                let v = row.value(&s.key);
                if v >= 0.0 {
                    pos += v;
                } else {
                    neg += v;
                }
            }
            hi = hi.max(pos);
            lo = lo.min(neg);
        } else {
            for s in series {
                let v = row.value(&s.key);
                hi = hi.max(v);
                lo = lo.min(v);
            }
        }
    }
    (lo, hi)
}

fn value_axis(domain: Domain, lo: f64, hi: f64) -> ((f64, f64), Vec<f64>) {
    match domain {
        Domain::Auto => {
            let ticks = nice_ticks(lo, hi, TICKS);
            let d = match (ticks.first(), ticks.last()) {
                (Some(a), Some(b)) => (*a, *b),
                _ => (0.0, 1.0),
            };
            (d, ticks)
        }
        Domain::Fixed(a, b) => ((a, b), ticks_within(a, b, TICKS)),
    }
}

fn cartesian(spec: &ChartSpec, table: &Table, vp: Viewport) -> Scene {
    let mut scene = Scene::new(vp.width, vp.height);
    let series = spec.resolve(table);
    if table.is_empty() || series.is_empty() {
        return scene;
    }
    let (stacked, horizontal) = match spec.kind {
        Kind::Bars { stacked, horizontal } => (stacked, horizontal),
        _ => (false, false),
    };
    let composed = spec.kind == Kind::Composed;
    let plot = Plot::for_spec(spec, vp, table.len());

    // Composed charts put the first series on the left axis, the rest right.
    let (left_series, right_series) = if composed {
        series.split_at(1)
    } else {
        (&series[..], &series[..0])
    };

    let (lo, hi) = extent(table, left_series, stacked);
    let (domain, ticks) = value_axis(spec.domain, lo, hi);
    let value = if horizontal {
        LinearScale::new(domain, (plot.left, plot.right))
    } else {
        LinearScale::new(domain, (plot.bottom, plot.top))
    };
    let band = if horizontal {
        BandScale::new(table.len(), (plot.top, plot.bottom))
    } else {
        BandScale::new(table.len(), (plot.left, plot.right))
    };

    value_grid(&mut scene, &plot, &value, &ticks, spec.suffix, horizontal, Anchor::End);
    if spec.show_categories {
        category_labels(&mut scene, &plot, &band, table, horizontal);
    }

    match spec.kind {
        Kind::Lines => {
            for s in left_series {
                line(&mut scene, table, s, &band, &value);
            }
        }
        _ => bars(&mut scene, table, left_series, &band, &value, stacked, horizontal),
    }

    if !right_series.is_empty() {
        let (rlo, rhi) = extent(table, right_series, false);
        let (rdomain, rticks) = value_axis(Domain::Auto, rlo, rhi);
        let right = LinearScale::new(rdomain, (plot.bottom, plot.top));
        for t in &rticks {
            scene.push(Primitive::Text {
                x: plot.right + 6.0,
                y: right.map(*t) + 4.0,
                text: fmt_value(*t),
                anchor: Anchor::Start,
                role: Role::TickLabel,
                rotate: 0.0,
            });
        }
        for s in right_series {
            line(&mut scene, table, s, &band, &right);
        }
    }

    scene.legend = series
        .iter()
        .map(|s| LegendEntry {
            label: s.name.clone(),
            color: s.color.unwrap_or_default().to_string(),
        })
        .collect();
    scene
}

fn value_grid(
    scene: &mut Scene,
    plot: &Plot,
    value: &LinearScale,
    ticks: &[f64],
    suffix: &str,
    horizontal: bool,
    anchor: Anchor,
) {
    for t in ticks {
        let p = value.map(*t);
        let text = format!("{}{suffix}", fmt_value(*t));
        if horizontal {
            scene.push(Primitive::Segment { x1: p, y1: plot.top, x2: p, y2: plot.bottom, role: Role::Grid });
            scene.push(Primitive::Text {
                x: p,
                y: plot.bottom + 16.0,
                text,
                anchor: Anchor::Middle,
                role: Role::TickLabel,
                rotate: 0.0,
            });
        } else {
            scene.push(Primitive::Segment { x1: plot.left, y1: p, x2: plot.right, y2: p, role: Role::Grid });
            scene.push(Primitive::Text {
                x: plot.left - 6.0,
                y: p + 4.0,
                text,
                anchor,
                role: Role::TickLabel,
                rotate: 0.0,
            });
        }
    }
    let (x2, y1) = if horizontal { (plot.left, plot.top) } else { (plot.right, plot.bottom) };
    scene.push(Primitive::Segment { x1: plot.left, y1, x2, y2: plot.bottom, role: Role::Axis });
}

fn category_labels(scene: &mut Scene, plot: &Plot, band: &BandScale, table: &Table, horizontal: bool) {
    let rotated = !horizontal && table.len() > 8;
    for (i, row) in table.rows.iter().enumerate() {
        let c = band.center(i);
        let (x, y, anchor, rotate) = if horizontal {
            (plot.left - 6.0, c + 4.0, Anchor::End, 0.0)
        } else if rotated {
            (c, plot.bottom + 12.0, Anchor::End, -30.0)
        } else {
            (c, plot.bottom + 16.0, Anchor::Middle, 0.0)
        };
        scene.push(Primitive::Text {
            x,
            y,
            text: row.label.clone(),
            anchor,
            role: Role::CategoryLabel,
            rotate,
        });
    }
}

fn bars(
    scene: &mut Scene,
    table: &Table,
    series: &[Series],
    band: &BandScale,
    value: &LinearScale,
    stacked: bool,
    horizontal: bool,
) {
    let k = series.len().max(1) as f64;
    for (i, row) in table.rows.iter().enumerate() {
        let (mut pos, mut neg) = (0.0_f64, 0.0_f64);
        for (j, s) in series.iter().enumerate() {
            let v = row.value(&s.key);
            let (from, to) = if stacked {
                let acc = if v >= 0.0 { &mut pos } else { &mut neg };
                let from = *acc;
                *acc += v;
                (from, *acc)
            } else {
                (0.0, v)
            };
            let (band_start, band_size) = if stacked {
                (band.start(i), band.bandwidth())
            } else {
                let sub = band.bandwidth() / k;
                (band.start(i) + sub * j as f64, sub)
            };
            let (a, b) = (value.map(from), value.map(to));
            let (x, y, w, h) = if horizontal {
                (a.min(b), band_start, (a - b).abs(), band_size)
            } else {
                (band_start, a.min(b), band_size, (a - b).abs())
            };
            scene.push(Primitive::Rect {
                x,
                y,
                w,
                h,
                fill: s.color.unwrap_or_default().to_string(),
                title: format!("{}\n{}: {}", row.label, s.name, fmt_value(v)),
            });
        }
    }
}

fn line(scene: &mut Scene, table: &Table, s: &Series, band: &BandScale, value: &LinearScale) {
    let color = s.color.unwrap_or_default().to_string();
    let points: Vec<(f64, f64)> = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| (band.center(i), value.map(row.value(&s.key))))
        .collect();
    for ((x, y), row) in points.iter().zip(&table.rows) {
        scene.push(Primitive::Dot {
            x: *x,
            y: *y,
            r: 3.0,
            fill: color.clone(),
            title: format!("{}\n{}: {}", row.label, s.name, fmt_value(row.value(&s.key))),
        });
    }
    scene.push(Primitive::Polyline {
        points,
        stroke: color,
        width: 2.5,
    });
}

fn pie(spec: &ChartSpec, table: &Table, vp: Viewport, inner_ratio: f64) -> Scene {
    let mut scene = Scene::new(vp.width, vp.height);
    let Some(key) = spec.resolve(table).into_iter().next().map(|s| s.key) else {
        return scene;
    };
    let slices: Vec<(&str, f64, Option<f64>)> = table
        .rows
        .iter()
        .map(|r| {
            let pct = spec.percent_key.as_deref().and_then(|k| r.get(k));
            (r.label.as_str(), r.value(&key).max(0.0), pct)
        })
        .collect();
    let total: f64 = slices.iter().map(|s| s.1).sum();
    if total <= 0.0 {
        return scene;
    }

    let cx = vp.width / 2.0;
    let cy = vp.height / 2.0;
    let outer = (vp.width.min(vp.height) / 2.0 - 24.0).max(8.0);
    let inner = outer * inner_ratio;
    let mut angle = 0.0;
    for (i, (label, v, pct)) in slices.iter().enumerate() {
        let color = spec.palette_color(i).to_string();
        scene.legend.push(LegendEntry {
            label: label.to_string(),
            color: color.clone(),
        });
        if *v <= 0.0 {
            continue;
        }
        let sweep = v / total * TAU;
        let title = match pct {
            Some(p) => format!("{label}: {} ({}%)", fmt_value(*v), fmt_value(*p)),
            None => format!("{label}: {}", fmt_value(*v)),
        };
        scene.push(Primitive::Arc {
            cx,
            cy,
            outer,
            inner,
            start: angle,
            end: angle + sweep,
            fill: color,
            title,
        });
        if inner_ratio == 0.0 {
            let mid = angle + sweep / 2.0 - TAU / 4.0;
            let r = outer + 12.0;
            scene.push(Primitive::Text {
                x: cx + r * mid.cos(),
                y: cy + r * mid.sin() + 4.0,
                text: fmt_value(*v),
                anchor: if mid.cos() >= 0.0 { Anchor::Start } else { Anchor::End },
                role: Role::SliceLabel,
                rotate: 0.0,
            });
        }
        angle += sweep;
    }
    scene
}
