//! Resource descriptors: declarative table, key, column and filter definitions for runtime use.

/// Column type. Drives DDL, SELECT casts and parameter casts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SqlType {
    BigInt,
    Integer,
    Numeric,
    Text,
    Date,
    Timestamp,
}

impl SqlType {
    pub fn ddl(&self) -> &'static str {
        match self {
            SqlType::BigInt => "BIGINT",
            SqlType::Integer => "INTEGER",
            SqlType::Numeric => "NUMERIC(12, 2)",
            SqlType::Text => "TEXT",
            SqlType::Date => "DATE",
            SqlType::Timestamp => "TIMESTAMPTZ",
        }
    }

    /// Cast applied to a bound parameter so i64/f64 values land in narrower columns.
    pub fn param_cast(&self) -> Option<&'static str> {
        match self {
            SqlType::Integer => Some("integer"),
            SqlType::Numeric => Some("numeric"),
            _ => None,
        }
    }

    /// Cast applied in SELECT lists; NUMERIC is read back as float8 so rows decode to JSON numbers.
    pub fn select_cast(&self) -> Option<&'static str> {
        match self {
            SqlType::Numeric => Some("float8"),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Required,
    Optional,
    /// Set to NOW() on insert.
    CreatedAt,
    /// Set to NOW() on update.
    UpdatedAt,
}

/// Extra format check applied to a writable column's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Email,
}

#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub role: Role,
    pub format: Option<Format>,
    /// (table, column) this column references.
    pub references: Option<(&'static str, &'static str)>,
}

impl Column {
    pub const fn required(name: &'static str, sql_type: SqlType) -> Self {
        Column {
            name,
            sql_type,
            role: Role::Required,
            format: None,
            references: None,
        }
    }

    pub const fn optional(name: &'static str, sql_type: SqlType) -> Self {
        Column {
            name,
            sql_type,
            role: Role::Optional,
            format: None,
            references: None,
        }
    }

    pub const fn created_at() -> Self {
        Column {
            name: "created_at",
            sql_type: SqlType::Timestamp,
            role: Role::CreatedAt,
            format: None,
            references: None,
        }
    }

    pub const fn updated_at() -> Self {
        Column {
            name: "updated_at",
            sql_type: SqlType::Timestamp,
            role: Role::UpdatedAt,
            format: None,
            references: None,
        }
    }

    pub const fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub const fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.references = Some((table, column));
        self
    }

    pub fn is_writable(&self) -> bool {
        matches!(self.role, Role::Required | Role::Optional)
    }
}

/// How a filter field is compared against its column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Match {
    /// Case-insensitive substring match.
    Contains,
    Exact,
}

/// How the raw query-string value of a filter is parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    Integer,
    Date,
}

#[derive(Clone, Copy, Debug)]
pub struct FilterField {
    pub name: &'static str,
    pub matcher: Match,
    pub kind: FilterKind,
}

impl FilterField {
    pub const fn contains(name: &'static str) -> Self {
        FilterField {
            name,
            matcher: Match::Contains,
            kind: FilterKind::Text,
        }
    }

    pub const fn exact(name: &'static str, kind: FilterKind) -> Self {
        FilterField {
            name,
            matcher: Match::Exact,
            kind,
        }
    }
}

/// Confirmation and not-found messages returned to clients.
#[derive(Clone, Copy, Debug)]
pub struct Messages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub not_found: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ResourceDescriptor {
    /// URL segment, e.g. "productos".
    pub path: &'static str,
    pub table: &'static str,
    /// Server-assigned BIGSERIAL primary key; never part of a payload.
    pub key: &'static str,
    pub columns: &'static [Column],
    /// Applied in this order, which fixes clause and parameter order.
    pub filters: &'static [FilterField],
    pub messages: Messages,
}

impl ResourceDescriptor {
    pub fn writable_columns(&self) -> impl Iterator<Item = &'static Column> {
        self.columns.iter().filter(|c| c.is_writable())
    }

    pub fn required_columns(&self) -> impl Iterator<Item = &'static Column> {
        self.columns.iter().filter(|c| c.role == Role::Required)
    }

    pub fn stamp(&self, role: Role) -> Option<&'static Column> {
        self.columns.iter().find(|c| c.role == role)
    }
}
