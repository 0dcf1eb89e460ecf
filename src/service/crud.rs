//! Generic CRUD execution through the database gateway.

use crate::config::ResourceDescriptor;
use crate::error::AppError;
use crate::response::{Paginated, Pagination};
use crate::service::Page;
use crate::sql::{count, delete, insert, select_by_id, select_page, update, Filter, SqlValue};
use crate::store::Gateway;
use serde_json::Value;

pub struct CrudService;

impl CrudService {
    /// One page of rows matching `filter` plus the total match count. The two queries are
    /// not run in a transaction, so a concurrent write can skew the total against the page.
    pub async fn list(
        gw: &dyn Gateway,
        d: &ResourceDescriptor,
        filter: &Filter,
        page: Page,
    ) -> Result<Paginated<Value>, AppError> {
        let q = select_page(d, filter, page.limit, page.offset());
        let rows = gw.fetch_all(&q).await?;
        let total = Self::count(gw, d, filter).await?;
        Ok(Paginated {
            data: rows,
            pagination: Pagination::new(page, total),
        })
    }

    pub async fn count(gw: &dyn Gateway, d: &ResourceDescriptor, filter: &Filter) -> Result<i64, AppError> {
        let rows = gw.fetch_all(&count(d, filter)).await?;
        rows.first()
            .and_then(|r| r.get("total"))
            .and_then(Value::as_i64)
            .ok_or_else(|| AppError::Db(sqlx::Error::Protocol(format!("count over {} returned no total", d.table))))
    }

    /// Fetch one row by primary key. Returns JSON object or None.
    pub async fn read(gw: &dyn Gateway, d: &ResourceDescriptor, id: i64) -> Result<Option<Value>, AppError> {
        let rows = gw.fetch_all(&select_by_id(d, id)).await?;
        Ok(rows.into_iter().next())
    }

    /// Insert one row from validated values; returns the generated key.
    pub async fn create(gw: &dyn Gateway, d: &ResourceDescriptor, values: Vec<SqlValue>) -> Result<i64, AppError> {
        let rows = gw.fetch_all(&insert(d, values)).await?;
        rows.first()
            .and_then(|r| r.get(d.key))
            .and_then(Value::as_i64)
            .ok_or_else(|| AppError::Db(sqlx::Error::Protocol(format!("insert into {} returned no key", d.table))))
    }

    /// Replace one row by id. False when no row matched.
    pub async fn update(
        gw: &dyn Gateway,
        d: &ResourceDescriptor,
        id: i64,
        values: Vec<SqlValue>,
    ) -> Result<bool, AppError> {
        Ok(gw.execute(&update(d, id, values)).await? > 0)
    }

    /// Delete one row by id. False when no row matched.
    pub async fn delete(gw: &dyn Gateway, d: &ResourceDescriptor, id: i64) -> Result<bool, AppError> {
        Ok(gw.execute(&delete(d, id)).await? > 0)
    }
}
