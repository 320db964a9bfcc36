//! Reshaping of label/value payloads into chart rows.
//!
//! A [`Table`] is what every chart consumes: one [`Row`] per category on the
//! dimension axis, each row carrying its series values keyed by series name
//! in column order.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub label: String,
    pub cells: Vec<(String, f64)>,
}

impl Row {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            cells: Vec::new(),
        }
    }

    /// Sets `key`, replacing an earlier cell with the same key in place.
    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        let key = key.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    /// Value for `key`, 0 when the row has no such series.
    pub fn value(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }
}

/// Rows sharing a dimension key (`"city"`, `"occupation"`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub dim: String,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(dim: impl Into<String>) -> Self {
        Self {
            dim: dim.into(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(dim: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            dim: dim.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Series keys across all rows, in first-seen order.
    pub fn keys(&self) -> Vec<String> {
        stack_keys(&self.rows)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }

    /// Keeps the first `n` rows.
    pub fn truncated(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    /// Only the row labelled `label`; empty when there is none.
    pub fn select(&self, label: &str) -> Table {
        Table {
            dim: self.dim.clone(),
            rows: self
                .rows
                .iter()
                .filter(|r| r.label == label)
                .take(1)
                .cloned()
                .collect(),
        }
    }
}

/// Pivots a `(row labels, column labels, matrix)` triple into one row per
/// row label. Cells missing from a short or ragged matrix are 0.
pub fn pivot(row_labels: &[String], col_labels: &[String], matrix: &[Vec<f64>], dim: &str) -> Table {
    let rows = row_labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let line = matrix.get(i).map(Vec::as_slice).unwrap_or(&[]);
            let mut row = Row::new(label.clone());
            for (j, col) in col_labels.iter().enumerate() {
                row.set(col.clone(), line.get(j).copied().unwrap_or(0.0));
            }
            row
        })
        .collect();
    Table::with_rows(dim, rows)
}

/// Like [`pivot`] for fractional matrices: cells become percentages rounded
/// to one decimal.
pub fn percent_table(
    row_labels: &[String],
    col_labels: &[String],
    fractions: &[Vec<f64>],
    dim: &str,
) -> Table {
    let mut table = pivot(row_labels, col_labels, fractions, dim);
    for row in &mut table.rows {
        for cell in &mut row.cells {
            cell.1 = (cell.1 * 1000.0).round() / 10.0;
        }
    }
    table
}

/// Parallel labels/values into a single-series table keyed `key`.
pub fn zip(labels: &[String], values: &[f64], dim: &str, key: &str) -> Table {
    let rows = labels
        .iter()
        .enumerate()
        .map(|(i, label)| Row::new(label.clone()).with(key, values.get(i).copied().unwrap_or(0.0)))
        .collect();
    Table::with_rows(dim, rows)
}

/// Named series over shared labels; series absent from `series` read as 0.
pub fn series_table(
    labels: &[String],
    series: &BTreeMap<String, Vec<f64>>,
    keys: &[&str],
    dim: &str,
) -> Table {
    let rows = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut row = Row::new(label.clone());
            for key in keys {
                let v = series.get(*key).and_then(|s| s.get(i)).copied().unwrap_or(0.0);
                row.set(*key, v);
            }
            row
        })
        .collect();
    Table::with_rows(dim, rows)
}

/// Union of series keys across `rows`, in first-seen order.
pub fn stack_keys(rows: &[Row]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for row in rows {
        for (k, _) in &row.cells {
            if !keys.iter().any(|seen| seen == k) {
                keys.push(k.clone());
            }
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn pivot_builds_one_row_per_label() {
        let t = pivot(
            &s(&["San Luis Potosi", "Cuernavaca"]),
            &s(&["Low", "Medium", "High"]),
            &[vec![10.0, 5.0, 1.0], vec![2.0, 3.0, 4.0]],
            "city",
        );
        assert_eq!(t.dim, "city");
        assert_eq!(t.labels(), vec!["San Luis Potosi", "Cuernavaca"]);
        assert_eq!(t.rows[0].value("Medium"), 5.0);
        assert_eq!(t.rows[1].value("High"), 4.0);
        assert_eq!(t.keys(), s(&["Low", "Medium", "High"]));
    }

    #[test]
    fn pivot_is_total_over_ragged_matrices() {
        let t = pivot(&s(&["a", "b", "c"]), &s(&["x", "y"]), &[vec![1.0]], "row");
        assert_eq!(t.len(), 3);
        assert_eq!(t.rows[0].cells, vec![("x".to_string(), 1.0), ("y".to_string(), 0.0)]);
        assert_eq!(t.rows[2].cells, vec![("x".to_string(), 0.0), ("y".to_string(), 0.0)]);
    }

    #[test]
    fn pivot_is_idempotent() {
        let rows = s(&["a", "b"]);
        let cols = s(&["x", "y"]);
        let m = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(pivot(&rows, &cols, &m, "k"), pivot(&rows, &cols, &m, "k"));
    }

    #[test]
    fn pivot_of_empty_inputs_is_empty() {
        assert!(pivot(&[], &s(&["x"]), &[], "k").is_empty());
        let t = pivot(&s(&["a"]), &[], &[vec![1.0]], "k");
        assert!(t.rows[0].cells.is_empty());
    }

    #[test]
    fn duplicate_column_labels_keep_last_value() {
        let t = pivot(&s(&["a"]), &s(&["x", "x"]), &[vec![1.0, 2.0]], "k");
        assert_eq!(t.rows[0].cells, vec![("x".to_string(), 2.0)]);
    }

    #[test]
    fn percent_table_rounds_to_one_decimal() {
        let t = percent_table(&s(&["Mexican"]), &s(&["Low", "High"]), &[vec![0.1234, 0.8766]], "cuisine");
        assert_eq!(t.rows[0].value("Low"), 12.3);
        assert_eq!(t.rows[0].value("High"), 87.7);
    }

    #[test]
    fn zip_fills_missing_values_with_zero() {
        let t = zip(&s(&["a", "b"]), &[5.0], "name", "value");
        assert_eq!(t.rows[1].value("value"), 0.0);
        assert_eq!(t.keys(), s(&["value"]));
    }

    #[test]
    fn series_table_reads_named_series() {
        let mut series = BTreeMap::new();
        series.insert("High".to_string(), vec![1.0, 2.0]);
        series.insert("Low".to_string(), vec![7.0]);
        let t = series_table(&s(&["20-29", "30-39"]), &series, &["High", "Medium", "Low"], "age");
        assert_eq!(t.rows[0].cells, vec![
            ("High".to_string(), 1.0),
            ("Medium".to_string(), 0.0),
            ("Low".to_string(), 7.0)
        ]);
        assert_eq!(t.rows[1].value("Low"), 0.0);
    }

    #[test]
    fn stack_keys_preserves_first_seen_order() {
        let rows = vec![
            Row::new("a").with("b", 1.0).with("a", 1.0),
            Row::new("b").with("c", 1.0).with("b", 2.0),
        ];
        assert_eq!(stack_keys(&rows), s(&["b", "a", "c"]));
        assert!(stack_keys(&[]).is_empty());
    }

    #[test]
    fn select_and_truncate() {
        let t = zip(&s(&["a", "b", "c"]), &[1.0, 2.0, 3.0], "k", "v");
        assert_eq!(t.select("b").labels(), vec!["b"]);
        assert!(t.select("zz").is_empty());
        assert_eq!(t.clone().truncated(2).len(), 2);
        assert_eq!(t.truncated(10).len(), 3);
    }
}
