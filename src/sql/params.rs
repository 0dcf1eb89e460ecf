//! Parameter values bound to PostgreSQL queries.

use chrono::NaiveDate;

/// A value bound to a `$n` placeholder. Typed so sqlx sends the matching PostgreSQL type.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl SqlValue {
    /// Text value, or None when absent or blank.
    pub fn text(s: Option<String>) -> Option<Self> {
        s.filter(|s| !s.trim().is_empty()).map(SqlValue::Text)
    }

    pub fn int(n: Option<i64>) -> Option<Self> {
        n.map(SqlValue::Int)
    }

    pub fn float(n: Option<f64>) -> Option<Self> {
        n.map(SqlValue::Float)
    }

    pub fn date(d: Option<NaiveDate>) -> Option<Self> {
        d.map(SqlValue::Date)
    }

    /// Null, blank text and numeric zero. A required column holding one of these is missing.
    pub fn is_falsy(&self) -> bool {
        match self {
            SqlValue::Null => true,
            SqlValue::Int(n) => *n == 0,
            SqlValue::Float(f) => *f == 0.0 || f.is_nan(),
            SqlValue::Text(s) => s.trim().is_empty(),
            SqlValue::Date(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}
