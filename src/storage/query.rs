//! Parameterized query construction for the history database.

use rusqlite::types::Value;

/// Chromium stores visit times as microseconds since 1601-01-01 UTC.
const LAST_VISITED_AT: &str = "datetime(MAX(last_visit_time) / 1000000 + strftime('%s', '1601-01-01'), 'unixepoch', 'localtime')";

/// Filters for a history search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Substring matched against the address or the title
    pub text: Option<String>,
    /// Maximum number of rows; zero or negative means unbounded
    pub limit: i64,
}

/// SQL text plus the values bound to its `?` placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

impl HistoryQuery {
    pub fn new(text: Option<String>, limit: i64) -> Self {
        Self { text, limit }
    }

    /// Compile into a single parameterized statement.
    ///
    /// Rows are grouped by address, each group represented by its most recent
    /// visit, most recent group first. User text is only ever bound.
    pub fn compile(&self) -> CompiledQuery {
        let mut sql = format!(
            "SELECT id, url, title, {} AS lastVisitedAt FROM urls",
            LAST_VISITED_AT
        );
        let mut params = Vec::new();

        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            let pattern = format!("%{}%", escape_like(text));
            sql.push_str(" WHERE (url LIKE ? ESCAPE '\\' OR title LIKE ? ESCAPE '\\')");
            params.push(Value::Text(pattern.clone()));
            params.push(Value::Text(pattern));
        }

        sql.push_str(" GROUP BY url ORDER BY MAX(last_visit_time) DESC");

        if self.limit > 0 {
            sql.push_str(" LIMIT ?");
            params.push(Value::Integer(self.limit));
        }

        CompiledQuery { sql, params }
    }
}

/// Escape LIKE wildcards so the text matches literally.
fn escape_like(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
