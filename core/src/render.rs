//! Console rendering of result tables using the [`tabled`] crate.

use tabled::{builder::Builder, Table, Tabled};

pub const EMPTY_RESULT: &str = "(no matching rows)";

/// Two decimals; NaN stays visible as `NaN`.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Four decimals, for return rates.
pub fn format_rate(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.4}")
    }
}

/// Compact currency for chart axes ($2.1M, $450K, $50).
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{sign}${:.1}M", abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{sign}${:.0}K", abs_value / 1_000.0)
    } else {
        format!("{sign}${abs_value:.0}")
    }
}

fn with_title(title: &str, body: &str) -> String {
    format!("{}\n{}\n{}", title, "=".repeat(title.len()), body)
}

/// Titled ASCII table of typed rows. An empty slice renders a placeholder line.
pub fn titled_table<T: Tabled>(title: &str, rows: &[T]) -> String {
    if rows.is_empty() {
        return with_title(title, EMPTY_RESULT);
    }
    with_title(title, &Table::new(rows).to_string())
}

/// Titled ASCII table from a header row and string records.
pub fn titled_matrix(title: &str, header: Vec<String>, records: Vec<Vec<String>>) -> String {
    if records.is_empty() {
        return with_title(title, EMPTY_RESULT);
    }
    let mut builder = Builder::default();
    builder.push_record(header);
    for record in records {
        builder.push_record(record);
    }
    with_title(title, &builder.build().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Name")]
        name: &'static str,
        #[tabled(rename = "Value")]
        value: String,
    }

    #[test]
    fn titled_table_has_title_and_headers() {
        let rows = [Row { name: "a", value: format_amount(1.5) }];
        let out = titled_table("Things", &rows);
        assert!(out.starts_with("Things\n======\n"));
        assert!(out.contains("Name"));
        assert!(out.contains("1.50"));
    }

    #[test]
    fn empty_rows_render_placeholder() {
        let rows: [Row; 0] = [];
        assert_eq!(titled_table("Empty", &rows), format!("Empty\n=====\n{EMPTY_RESULT}"));
    }

    #[test]
    fn matrix_renders_every_cell() {
        let out = titled_matrix(
            "M",
            vec!["".into(), "x".into()],
            vec![vec!["count".into(), "3".into()]],
        );
        assert!(out.contains("count"));
        assert!(out.contains('3'));
    }

    #[test]
    fn formats() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_rate(0.05), "0.0500");
        assert_eq!(format_compact_currency(2_100_000.0), "$2.1M");
        assert_eq!(format_compact_currency(450_000.0), "$450K");
        assert_eq!(format_compact_currency(-50.0), "-$50");
    }
}
