//! Value and category scales.

/// Step between ticks rounded to 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_step(span: f64, count: usize) -> f64 {
    let raw = span.abs() / count.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

fn round_to_step(v: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).max(0.0) as i32 + 1;
    let f = 10f64.powi(decimals);
    (v * f).round() / f
}

/// Evenly spaced "nice" ticks covering `[min, max]`, roughly `count` of
/// them. The first and last tick enclose the input range.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let (min, max) = if max > min { (min, max) } else { (min, min + 1.0) };
    let step = nice_step(max - min, count);
    let first = (min / step).floor() as i64;
    let last = (max / step).ceil() as i64;
    (first..=last).map(|i| round_to_step(i as f64 * step, step)).collect()
}

/// Ticks inside a fixed `[min, max]`, always including both ends.
pub fn ticks_within(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !(max > min) {
        return vec![min];
    }
    let step = nice_step(max - min, count);
    let mut ticks = vec![min];
    let mut i = (min / step).floor() as i64 + 1;
    loop {
        let v = round_to_step(i as f64 * step, step);
        if v >= max - step * 1e-9 {
            break;
        }
        if v > min {
            ticks.push(v);
        }
        i += 1;
    }
    ticks.push(max);
    ticks
}

/// Maps a continuous domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < f64::EPSILON {
            return r0;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }
}

/// Splits a pixel range into `count` equal bands with inner padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    pub count: usize,
    pub range: (f64, f64),
    /// Fraction of each step left empty, split on both sides of the band.
    pub padding: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64)) -> Self {
        Self {
            count,
            range,
            padding: 0.2,
        }
    }

    pub fn step(&self) -> f64 {
        (self.range.1 - self.range.0) / self.count.max(1) as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    pub fn start(&self, i: usize) -> f64 {
        self.range.0 + self.step() * i as f64 + self.step() * self.padding / 2.0
    }

    pub fn center(&self, i: usize) -> f64 {
        self.range.0 + self.step() * (i as f64 + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ticks_cover_the_range() {
        assert_eq!(nice_ticks(0.0, 36.0, 5), vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(nice_ticks(0.0, 5.0, 5), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(nice_ticks(0.0, 2.5, 5), vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn nice_ticks_avoid_float_noise() {
        let ticks = nice_ticks(0.0, 0.3, 3);
        assert_eq!(ticks, vec![0.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn degenerate_range_still_ticks() {
        let ticks = nice_ticks(0.0, 0.0, 5);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&1.0));
        assert!(nice_ticks(f64::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn fixed_domain_ticks_keep_both_ends() {
        assert_eq!(ticks_within(0.0, 5.0, 5), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(ticks_within(0.0, 2.3, 4), vec![0.0, 1.0, 2.0, 2.3]);
    }

    #[test]
    fn linear_scale_inverts_for_svg_y() {
        let s = LinearScale::new((0.0, 10.0), (300.0, 0.0));
        assert_eq!(s.map(0.0), 300.0);
        assert_eq!(s.map(5.0), 150.0);
        assert_eq!(LinearScale::new((1.0, 1.0), (5.0, 9.0)).map(3.0), 5.0);
    }

    #[test]
    fn band_scale_partitions_range() {
        let b = BandScale::new(4, (0.0, 400.0));
        assert_eq!(b.step(), 100.0);
        assert!((b.bandwidth() - 80.0).abs() < 1e-9);
        assert!((b.start(1) - 110.0).abs() < 1e-9);
        assert_eq!(b.center(3), 350.0);
    }
}
