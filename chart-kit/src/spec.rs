//! Declarative chart description.

use bi_core::Table;

use crate::palette::PALETTE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    /// Nice ticks around the data, always including zero.
    Auto,
    /// Exactly `[min, max]`.
    Fixed(f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    /// One bar per series side by side, or stacked on one another.
    Bars { stacked: bool, horizontal: bool },
    Lines,
    /// First series as bars on the left axis, the rest as lines on a right axis.
    Composed,
    /// `inner` is the hole radius as a fraction of the outer radius.
    Pie { inner: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub key: String,
    pub name: String,
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: Kind,
    /// Empty means every series key found in the table, in table order.
    pub series: Vec<Series>,
    pub domain: Domain,
    /// Appended to value-axis tick labels (`"%"`).
    pub suffix: &'static str,
    pub palette: &'static [&'static str],
    pub palette_offset: usize,
    /// Pie only: series holding a percentage shown in slice tooltips.
    pub percent_key: Option<String>,
    pub show_categories: bool,
}

impl ChartSpec {
    fn new(kind: Kind) -> Self {
        Self {
            kind,
            series: Vec::new(),
            domain: Domain::Auto,
            suffix: "",
            palette: &PALETTE,
            palette_offset: 0,
            percent_key: None,
            show_categories: true,
        }
    }

    pub fn bars() -> Self {
        Self::new(Kind::Bars { stacked: false, horizontal: false })
    }

    pub fn stacked() -> Self {
        Self::new(Kind::Bars { stacked: true, horizontal: false })
    }

    pub fn horizontal() -> Self {
        Self::new(Kind::Bars { stacked: false, horizontal: true })
    }

    pub fn lines() -> Self {
        Self::new(Kind::Lines)
    }

    pub fn composed() -> Self {
        Self::new(Kind::Composed)
    }

    pub fn pie() -> Self {
        Self::new(Kind::Pie { inner: 0.0 })
    }

    pub fn donut(inner: f64) -> Self {
        Self::new(Kind::Pie { inner: inner.clamp(0.0, 0.95) })
    }

    pub fn series(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.series.push(Series {
            key: key.into(),
            name: name.into(),
            color: None,
        });
        self
    }

    /// Colour of the most recently added series.
    pub fn color(mut self, color: &'static str) -> Self {
        if let Some(last) = self.series.last_mut() {
            last.color = Some(color);
        }
        self
    }

    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn palette(mut self, palette: &'static [&'static str]) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette_offset(mut self, offset: usize) -> Self {
        self.palette_offset = offset;
        self
    }

    pub fn percent_key(mut self, key: impl Into<String>) -> Self {
        self.percent_key = Some(key.into());
        self
    }

    pub fn hide_categories(mut self) -> Self {
        self.show_categories = false;
        self
    }

    pub(crate) fn palette_color(&self, i: usize) -> &'static str {
        if self.palette.is_empty() {
            return PALETTE[i % PALETTE.len()];
        }
        self.palette[(i + self.palette_offset) % self.palette.len()]
    }

    /// Series to draw against `table`, with colours assigned.
    pub fn resolve(&self, table: &Table) -> Vec<Series> {
        let declared: Vec<Series> = if self.series.is_empty() {
            table
                .keys()
                .into_iter()
                .map(|k| Series {
                    name: k.clone(),
                    key: k,
                    color: None,
                })
                .collect()
        } else {
            self.series.clone()
        };
        declared
            .into_iter()
            .enumerate()
            .map(|(i, s)| Series {
                color: Some(s.color.unwrap_or_else(|| self.palette_color(i))),
                ..s
            })
            .collect()
    }
}
