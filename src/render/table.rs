//! Plain-text table output.
//!
//! On a terminal, columns are aligned and shrunk to fit the terminal width.
//! When output is redirected, fields are written tab-separated and untouched
//! so they stay easy to `cut` and `awk`.

use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEPARATOR: &str = "  ";
const ELLIPSIS: char = '…';

/// Accumulates rows and renders them in one go.
#[derive(Debug, Clone)]
pub struct TablePrinter {
    width: Option<usize>,
    rows: Vec<Vec<String>>,
}

impl TablePrinter {
    /// `width` is the terminal width, or `None` for redirected output.
    pub fn new(width: Option<usize>) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, fields: Vec<String>) {
        self.rows.push(fields.into_iter().map(|f| flatten(&f)).collect());
    }

    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        match self.width {
            None => {
                for row in &self.rows {
                    writeln!(out, "{}", row.join("\t"))?;
                }
            }
            Some(width) => {
                let widths = fit_columns(&self.natural_widths(), width);
                for row in &self.rows {
                    let last = row.len().saturating_sub(1);
                    let mut line = String::new();
                    for (i, field) in row.iter().enumerate() {
                        if i > 0 {
                            line.push_str(SEPARATOR);
                        }
                        let cell = truncate(field, widths[i]);
                        line.push_str(&cell);
                        if i < last {
                            let pad = widths[i].saturating_sub(cell.width());
                            line.push_str(&" ".repeat(pad));
                        }
                    }
                    writeln!(out, "{}", line.trim_end())?;
                }
            }
        }
        Ok(())
    }

    fn natural_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0; columns];
        for row in &self.rows {
            for (i, field) in row.iter().enumerate() {
                widths[i] = widths[i].max(field.width());
            }
        }
        widths
    }
}

/// Shrink column widths so a full row fits in `total` cells.
///
/// Columns narrower than an even share of the remaining space keep their
/// natural width; the rest split what is left.
fn fit_columns(natural: &[usize], total: usize) -> Vec<usize> {
    let separators = SEPARATOR.len() * natural.len().saturating_sub(1);
    let available = total.saturating_sub(separators);
    if natural.iter().sum::<usize>() <= available {
        return natural.to_vec();
    }

    let mut widths = vec![0; natural.len()];
    let mut pending: Vec<usize> = (0..natural.len()).collect();
    let mut remaining = available;

    loop {
        let share = remaining / pending.len().max(1);
        let (fits, wide): (Vec<usize>, Vec<usize>) =
            pending.iter().partition(|&&i| natural[i] <= share);
        if fits.is_empty() {
            break;
        }
        for i in fits {
            widths[i] = natural[i];
            remaining -= natural[i];
        }
        pending = wide;
        if pending.is_empty() {
            return widths;
        }
    }

    let share = remaining / pending.len();
    let mut extra = remaining % pending.len();
    for i in pending {
        widths[i] = share + usize::from(extra > 0);
        extra = extra.saturating_sub(1);
    }
    widths
}

/// Cut `text` to at most `width` display cells, marking the cut with `…`.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Table cells are single-line.
fn flatten(field: &str) -> String {
    field
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
