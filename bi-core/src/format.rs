//! Display fallbacks for KPI values.

/// Shown for a missing value.
pub const PLACEHOLDER: &str = "—";
/// Shown while a page is still loading.
pub const LOADING: &str = "…";

fn present(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

/// Shortest decimal form (`3` not `3.0`), or the placeholder.
pub fn fmt_plain(v: Option<f64>) -> String {
    match present(v) {
        Some(x) => format!("{x}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Grouped thousands with at most three fraction digits (`12345.5` → `12,345.5`).
pub fn fmt_grouped(v: Option<f64>) -> String {
    let Some(x) = present(v) else {
        return PLACEHOLDER.to_string();
    };
    let fixed = format!("{:.3}", x.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = x < 0.0 && (int_part != "0" || !frac.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// `42.1` → `42.1%`, or the placeholder.
pub fn fmt_percent(v: Option<f64>) -> String {
    match present(v) {
        Some(x) => format!("{x}%"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Fixed number of decimals, or the placeholder.
pub fn fmt_fixed(v: Option<f64>, digits: usize) -> String {
    match present(v) {
        Some(x) => format!("{x:.digits$}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// The loading marker while `loading`, otherwise `text`.
pub fn loading_or(loading: bool, text: impl FnOnce() -> String) -> String {
    if loading {
        LOADING.to_string()
    } else {
        text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_render_placeholder() {
        assert_eq!(fmt_plain(None), "—");
        assert_eq!(fmt_grouped(None), "—");
        assert_eq!(fmt_percent(None), "—");
        assert_eq!(fmt_fixed(Some(f64::NAN), 2), "—");
    }

    #[test]
    fn plain_drops_trailing_zero_fraction() {
        assert_eq!(fmt_plain(Some(3.0)), "3");
        assert_eq!(fmt_plain(Some(1.1993)), "1.1993");
        assert_eq!(fmt_plain(Some(0.0)), "0");
    }

    #[test]
    fn grouped_inserts_separators() {
        assert_eq!(fmt_grouped(Some(1161.0)), "1,161");
        assert_eq!(fmt_grouped(Some(1234567.891)), "1,234,567.891");
        assert_eq!(fmt_grouped(Some(12.34567)), "12.346");
        assert_eq!(fmt_grouped(Some(-1500.5)), "-1,500.5");
        assert_eq!(fmt_grouped(Some(999.0)), "999");
        assert_eq!(fmt_grouped(Some(-0.0001)), "0");
    }

    #[test]
    fn percent_and_fixed() {
        assert_eq!(fmt_percent(Some(27.3)), "27.3%");
        assert_eq!(fmt_fixed(Some(1.19934), 2), "1.20");
        assert_eq!(fmt_fixed(Some(0.41234567), 4), "0.4123");
    }

    #[test]
    fn loading_wins_over_value() {
        assert_eq!(loading_or(true, || "12".into()), "…");
        assert_eq!(loading_or(false, || "12".into()), "12");
    }
}
