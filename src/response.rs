//! Standard response envelope helpers.

use crate::service::Page;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total_records: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: Page, total_records: i64) -> Self {
        Pagination {
            page: page.page,
            limit: page.limit,
            total_records,
            total_pages: page.total_pages(total_records),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
    pub message: &'static str,
    pub inserted_id: i64,
}

#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub message: &'static str,
}

pub fn created(message: &'static str, inserted_id: i64) -> (StatusCode, Json<Created>) {
    (
        StatusCode::CREATED,
        Json(Created {
            message,
            inserted_id,
        }),
    )
}

pub fn confirmed(message: &'static str) -> (StatusCode, Json<Confirmation>) {
    (StatusCode::OK, Json(Confirmation { message }))
}
