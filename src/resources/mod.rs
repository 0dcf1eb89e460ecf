//! The three exposed resources: descriptors and typed request payloads.

mod customer;
mod order;
mod product;

pub use customer::{CustomerPayload, Customers, CUSTOMERS};
pub use order::{OrderPayload, Orders, ORDERS};
pub use product::{ProductPayload, Products, PRODUCTS};

use crate::config::ResourceDescriptor;
use crate::sql::SqlValue;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// A resource served by the generic handlers.
pub trait Resource: Send + Sync + 'static {
    /// Body accepted by create and (full-replacement) update.
    type Payload: DeserializeOwned + Send;

    fn descriptor() -> &'static ResourceDescriptor;

    /// Present, non-blank payload values keyed by column name.
    fn fields(payload: Self::Payload) -> HashMap<&'static str, SqlValue>;
}

/// Every descriptor, in foreign-key dependency order.
pub fn all() -> [&'static ResourceDescriptor; 3] {
    [&CUSTOMERS, &ORDERS, &PRODUCTS]
}

fn collect<const N: usize>(pairs: [(&'static str, Option<SqlValue>); N]) -> HashMap<&'static str, SqlValue> {
    pairs
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
}
