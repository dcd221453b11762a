//! Table rendering for CLI listings. Widths follow the widest cell per column.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(cell));
    format!("{cell}{}", " ".repeat(fill))
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(h.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let line = |cells: &[String]| -> String {
            widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad(cells.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = String::new();
        out.push_str(&line(self.headers.as_slice()));
        out.push('\n');
        out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&line(row.as_slice()));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_wide_characters() {
        let mut t = Table::new(vec!["#", "Name"]);
        t.add_row(vec!["1".into(), "日本".into()]);
        t.add_row(vec!["2".into(), "abcd".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "#  Name");
        assert_eq!(lines[1], "-------");
        assert_eq!(lines[2], "1  日本");
        assert_eq!(lines[3], "2  abcd");
    }
}
