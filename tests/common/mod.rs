//! In-memory gateway that records every query and replays scripted results.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tienda_api::sql::QueryBuf;
use tienda_api::{app, AppError, AppState, Gateway};
use tower::ServiceExt;

#[derive(Default)]
struct Script {
    rows: VecDeque<Vec<Value>>,
    affected: VecDeque<u64>,
    failing: bool,
    queries: Vec<QueryBuf>,
}

#[derive(Clone, Default)]
pub struct RecordingGateway {
    script: Arc<Mutex<Script>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the database were unreachable.
    pub fn failing() -> Self {
        let gw = Self::default();
        gw.script.lock().unwrap().failing = true;
        gw
    }

    /// Queue the result of the next `fetch_all`.
    pub fn with_rows(self, rows: Vec<Value>) -> Self {
        self.script.lock().unwrap().rows.push_back(rows);
        self
    }

    /// Queue the result of the next `execute`.
    pub fn with_affected(self, n: u64) -> Self {
        self.script.lock().unwrap().affected.push_back(n);
        self
    }

    pub fn queries(&self) -> Vec<QueryBuf> {
        self.script.lock().unwrap().queries.clone()
    }

    fn record(&self, q: &QueryBuf) -> Result<(), AppError> {
        let mut script = self.script.lock().unwrap();
        script.queries.push(q.clone());
        if script.failing {
            return Err(AppError::Db(sqlx::Error::Protocol("connection refused".into())));
        }
        Ok(())
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn fetch_all(&self, q: &QueryBuf) -> Result<Vec<Value>, AppError> {
        self.record(q)?;
        Ok(self.script.lock().unwrap().rows.pop_front().unwrap_or_default())
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, AppError> {
        self.record(q)?;
        Ok(self.script.lock().unwrap().affected.pop_front().unwrap_or(0))
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.script.lock().unwrap().failing {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

pub fn router(gw: &RecordingGateway) -> Router {
    app(AppState::new(gw.clone()), 64 * 1024)
}

pub async fn send(router: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap()
}

pub fn json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
