//! Styled terminal output utilities.

use owo_colors::OwoColorize;

/// Print a header/title
pub fn header(text: &str) {
    println!();
    println!("{}", text.bold().cyan());
    println!("{}", "─".repeat(text.chars().count()).dimmed());
}

/// Print a section header
pub fn section(text: &str) {
    println!("{}", text.bold().white());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print an info message
pub fn info(text: &str) {
    println!("{} {}", "ℹ".blue().bold(), text);
}

/// Print a warning message
pub fn warn(text: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), text.yellow());
}

/// Print an error message
pub fn error(text: &str) {
    eprintln!("{} {}", "✖".red().bold(), text.red());
}

/// Print a newline
pub fn newline() {
    println!();
}

/// Print dimmed text
pub fn dim(text: &str) {
    println!("{}", text.dimmed());
}

/// A fixed-width text table.
///
/// Each column is left-aligned and padded to its width; a width of zero
/// means the column is not padded. Trailing whitespace is trimmed from
/// every rendered line.
#[derive(Debug, Clone)]
pub struct TextTable {
    columns: Vec<(&'static str, usize)>,
    rule: usize,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Create a table with `(title, width)` columns and a rule of `rule` dashes.
    pub fn new(columns: &[(&'static str, usize)], rule: usize) -> Self {
        Self {
            columns: columns.to_vec(),
            rule,
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty, extra cells are ignored.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the header, rule and rows, one line each.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let titles: Vec<&str> = self.columns.iter().map(|(title, _)| *title).collect();
        out.push_str(&self.line(&titles));
        out.push('\n');
        out.push_str(&"-".repeat(self.rule));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push_str(&self.line(&cells));
            out.push('\n');
        }

        out
    }

    fn line(&self, cells: &[&str]) -> String {
        let line = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, (_, width))| {
                let cell = cells.get(i).copied().unwrap_or("");
                format!("{:<width$}", cell, width = *width)
            })
            .collect::<Vec<_>>()
            .join(" ");
        line.trim_end().to_string()
    }
}

/// Render a titled listing: title, underline, table and a footer.
///
/// An empty table is followed by `empty` instead of the total line.
pub fn listing(title: &str, table: &TextTable, empty: &str, total_label: &str) -> String {
    let heading = format!("{}:", title);
    let mut out = String::new();

    out.push('\n');
    out.push_str(&heading);
    out.push('\n');
    out.push_str(&"-".repeat(heading.chars().count()));
    out.push('\n');
    out.push_str(&table.render());

    if table.is_empty() {
        out.push_str(empty);
        out.push('\n');
    } else {
        out.push_str(&format!("\n{}: {}\n", total_label, table.len()));
    }

    out
}
