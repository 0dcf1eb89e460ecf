//! Builds parameterized SELECT, COUNT, INSERT, UPDATE, DELETE from a resource descriptor.

use crate::config::{Role, ResourceDescriptor};
use crate::sql::SqlValue;
use std::fmt::Write;

/// Quote identifier for PostgreSQL (safe: only from descriptors).
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlValue) -> usize {
        self.params.push(v);
        self.params.len()
    }

    /// Pushes a parameter and returns its placeholder, with a cast when given.
    fn placeholder(&mut self, v: SqlValue, cast: Option<&str>) -> String {
        let n = self.push_param(v);
        match cast {
            Some(t) => format!("${}::{}", n, t),
            None => format!("${}", n),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Case-insensitive LIKE; the value carries its own wildcards.
    Like,
    Eq,
}

impl Op {
    fn sql(&self) -> &'static str {
        match self {
            Op::Like => "ILIKE",
            Op::Eq => "=",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Predicate {
    pub column: &'static str,
    pub op: Op,
    pub value: SqlValue,
}

/// Conjunction of predicates. The page query and its count query render the same
/// `Filter`, so their filter parameters are identical by construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(&mut self, column: &'static str, value: SqlValue) -> &mut Self {
        self.predicates.push(Predicate {
            column,
            op: Op::Eq,
            value,
        });
        self
    }

    /// Substring match; LIKE wildcards in `needle` are matched literally.
    pub fn contains(&mut self, column: &'static str, needle: &str) -> &mut Self {
        self.predicates.push(Predicate {
            column,
            op: Op::Like,
            value: SqlValue::Text(format!("%{}%", escape_like(needle))),
        });
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    fn write_where(&self, q: &mut QueryBuf) {
        q.sql.push_str(" WHERE 1=1");
        for p in &self.predicates {
            let ph = q.placeholder(p.value.clone(), None);
            let _ = write!(q.sql, " AND {} {} {}", quoted(p.column), p.op.sql(), ph);
        }
    }
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// SELECT list: key first, then every column; NUMERIC columns read back as float8.
fn select_column_list(d: &ResourceDescriptor) -> String {
    std::iter::once(quoted(d.key))
        .chain(d.columns.iter().map(|c| {
            let q = quoted(c.name);
            match c.sql_type.select_cast() {
                Some(t) => format!("{}::{} AS {}", q, t, q),
                None => q,
            }
        }))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One page of rows matching `filter`, ordered by key. LIMIT and OFFSET are the last two params.
pub fn select_page(d: &ResourceDescriptor, filter: &Filter, limit: i64, offset: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {}", select_column_list(d), quoted(d.table));
    filter.write_where(&mut q);
    let limit_ph = q.placeholder(SqlValue::Int(limit), None);
    let offset_ph = q.placeholder(SqlValue::Int(offset), None);
    let _ = write!(
        q.sql,
        " ORDER BY {} LIMIT {} OFFSET {}",
        quoted(d.key),
        limit_ph,
        offset_ph
    );
    q
}

/// COUNT(*) AS total over the rows matching `filter`.
pub fn count(d: &ResourceDescriptor, filter: &Filter) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT COUNT(*) AS total FROM {}", quoted(d.table));
    filter.write_where(&mut q);
    q
}

/// SELECT by primary key.
pub fn select_by_id(d: &ResourceDescriptor, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.placeholder(SqlValue::Int(id), None);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        select_column_list(d),
        quoted(d.table),
        quoted(d.key),
        ph
    );
    q
}

/// INSERT of the writable columns (values in descriptor order), created-at stamp set to NOW().
/// Returns the generated key.
pub fn insert(d: &ResourceDescriptor, values: Vec<SqlValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (c, v) in d.writable_columns().zip(values) {
        cols.push(quoted(c.name));
        placeholders.push(q.placeholder(v, c.sql_type.param_cast()));
    }
    if let Some(c) = d.stamp(Role::CreatedAt) {
        cols.push(quoted(c.name));
        placeholders.push("NOW()".to_string());
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(d.table),
        cols.join(", "),
        placeholders.join(", "),
        quoted(d.key)
    );
    q
}

/// Full-replacement UPDATE by key; updated-at stamp set to NOW(). The key is the last param.
pub fn update(d: &ResourceDescriptor, id: i64, values: Vec<SqlValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (c, v) in d.writable_columns().zip(values) {
        let ph = q.placeholder(v, c.sql_type.param_cast());
        sets.push(format!("{} = {}", quoted(c.name), ph));
    }
    if let Some(c) = d.stamp(Role::UpdatedAt) {
        sets.push(format!("{} = NOW()", quoted(c.name)));
    }
    let id_ph = q.placeholder(SqlValue::Int(id), None);
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {}",
        quoted(d.table),
        sets.join(", "),
        quoted(d.key),
        id_ph
    );
    q
}

/// DELETE by key.
pub fn delete(d: &ResourceDescriptor, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.placeholder(SqlValue::Int(id), None);
    q.sql = format!("DELETE FROM {} WHERE {} = {}", quoted(d.table), quoted(d.key), ph);
    q
}
