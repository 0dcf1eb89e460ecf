//! Idempotent DDL for the resource tables, generated from their descriptors.
//! Tables are created in the order given, so referenced tables must come first.

use crate::config::{ResourceDescriptor, Role};
use crate::error::AppError;
use crate::sql::quoted;
use sqlx::PgPool;

/// CREATE TABLE IF NOT EXISTS for one resource.
pub fn create_table_sql(d: &ResourceDescriptor) -> String {
    let mut defs = vec![format!("{} BIGSERIAL PRIMARY KEY", quoted(d.key))];
    for c in d.columns {
        let mut def = format!("{} {}", quoted(c.name), c.sql_type.ddl());
        if c.role == Role::Required {
            def.push_str(" NOT NULL");
        }
        if let Some((table, column)) = c.references {
            def.push_str(&format!(" REFERENCES {} ({})", quoted(table), quoted(column)));
        }
        defs.push(def);
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        quoted(d.table),
        defs.join(",\n    ")
    )
}

pub async fn ensure_schema(pool: &PgPool, descriptors: &[&ResourceDescriptor]) -> Result<(), AppError> {
    for d in descriptors {
        sqlx::query(&create_table_sql(d)).execute(pool).await?;
        tracing::info!(table = d.table, "table ready");
    }
    Ok(())
}
