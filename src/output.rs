//! Terminal and JSON rendering for command results.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shopify_admin::admin::Connection;

/// How command results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Output {
    json: bool,
    pretty: bool,
}

impl Output {
    /// JSON is used when requested or when stdout is not a terminal.
    pub fn new(json: bool, pretty: bool) -> Self {
        Self {
            json: json || pretty || !io::stdout().is_terminal(),
            pretty,
        }
    }

    pub const fn is_json(self) -> bool {
        self.json
    }

    /// Prints `value` as JSON, indented with `--pretty`.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<()> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{text}");
        Ok(())
    }

    /// Prints one page of a command that accepts `--after`.
    pub fn page<T, F>(
        self,
        page: &Connection<T>,
        empty: &str,
        headers: &[&str],
        row: F,
    ) -> Result<()>
    where
        T: Serialize,
        F: Fn(&T) -> Vec<String>,
    {
        self.page_with(page, Continuation::After, empty, headers, row)
    }

    /// Prints one page: the nodes as a JSON array, or a table followed by
    /// the `continuation` hint when more results exist.
    pub fn page_with<T, F>(
        self,
        page: &Connection<T>,
        continuation: Continuation,
        empty: &str,
        headers: &[&str],
        row: F,
    ) -> Result<()>
    where
        T: Serialize,
        F: Fn(&T) -> Vec<String>,
    {
        if self.json {
            let nodes: Vec<&T> = page.nodes().collect();
            return self.json(&nodes);
        }
        if page.is_empty() {
            println!("{empty}");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = page.nodes().map(row).collect();
        print_table(headers, &rows)?;
        if let Some(hint) = continuation.hint(page) {
            println!("\n{hint}");
        }
        Ok(())
    }
}

/// What a table says when the page is not the last one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    /// Name the `--after` cursor to pass next.
    After,
    /// Only say that more results exist.
    Available,
    /// Say nothing.
    Silent,
}

impl Continuation {
    fn hint<T>(self, page: &Connection<T>) -> Option<String> {
        let cursor = page.next_cursor()?;
        match self {
            Self::After => Some(format!("(more results, use --after {cursor})")),
            Self::Available => Some("(more results available)".to_string()),
            Self::Silent => None,
        }
    }
}

/// Prints aligned columns with a header row.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render_table(headers, rows).as_bytes())?;
    Ok(())
}

/// Prints `label: value` lines with aligned values.
pub fn print_key_value(pairs: &[(&str, String)]) -> Result<()> {
    let width = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0) + 1;
    let mut stdout = io::stdout().lock();
    for (key, value) in pairs {
        writeln!(stdout, "{:<width$} {value}", format!("{key}:"))?;
    }
    Ok(())
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    for cells in std::iter::once(&header_cells).chain(rows) {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Shortens `value` to at most `max` characters, ending in `…` when cut.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM`, or `-` when absent.
pub fn format_time(time: Option<&DateTime<Utc>>) -> String {
    time.map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}

pub fn format_bool(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

/// Joins labels with commas, or `-` when there are none.
pub fn format_labels(labels: &[String]) -> String {
    if labels.is_empty() {
        "-".to_string()
    } else {
        labels.join(", ")
    }
}

/// Returns the value or `-`.
pub fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_table_pads_columns() {
        let rendered = render_table(
            &["ID", "TITLE"],
            &[
                vec!["1".to_string(), "Socks".to_string()],
                vec!["22".to_string(), "Hat".to_string()],
            ],
        );
        assert_eq!(rendered, "ID  TITLE\n1   Socks\n22  Hat\n");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Wool Socks Deluxe", 8), "Wool So…");
        assert_eq!(truncate("éééé", 3), "éé…");
    }

    #[test]
    fn test_format_time() {
        let time = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 59).unwrap();
        assert_eq!(format_time(Some(&time)), "2024-01-15 10:30");
        assert_eq!(format_time(None), "-");
    }

    fn page_of(has_next_page: bool) -> Connection<u32> {
        serde_json::from_value(serde_json::json!({
            "edges": [{ "node": 1, "cursor": "c1" }],
            "pageInfo": { "hasNextPage": has_next_page, "endCursor": "c1" }
        }))
        .unwrap()
    }

    #[test]
    fn test_continuation_hint_follows_command_flags() {
        let more = page_of(true);
        assert_eq!(
            Continuation::After.hint(&more).as_deref(),
            Some("(more results, use --after c1)")
        );
        assert_eq!(
            Continuation::Available.hint(&more).as_deref(),
            Some("(more results available)")
        );
        assert_eq!(Continuation::Silent.hint(&more), None);
    }

    #[test]
    fn test_continuation_hint_absent_on_last_page() {
        let last = page_of(false);
        assert_eq!(Continuation::After.hint(&last), None);
        assert_eq!(Continuation::Available.hint(&last), None);
    }

    #[test]
    fn test_format_labels_and_dash() {
        assert_eq!(format_labels(&[]), "-");
        assert_eq!(
            format_labels(&["a".to_string(), "b".to_string()]),
            "a, b"
        );
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("x")), "x");
    }
}
