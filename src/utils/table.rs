//! Table rendering utilities for CLI outputs.

use regex::Regex;
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

/// Visible width of a string, ignoring ANSI colour codes.
pub fn visible_len(s: &str) -> usize {
    ANSI.replace_all(s, "").chars().count()
}

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_len(c))
                    .chain(std::iter::once(visible_len(h)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render with columns padded to the widest cell; the separator line uses `sep`.
    pub fn render(&self, sep: char) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let push_row = |out: &mut String, cells: &[String]| {
            for (i, w) in widths.iter().enumerate() {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = w.saturating_sub(visible_len(cell));
                out.push_str(cell);
                out.push_str(&" ".repeat(pad + 2));
            }
            let trimmed = out.trim_end_matches(' ').len();
            out.truncate(trimmed);
            out.push('\n');
        };

        push_row(&mut out, &self.headers);

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&sep.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            push_row(&mut out, row);
        }

        out
    }
}
