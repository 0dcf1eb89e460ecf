use super::{collect, Resource};
use crate::config::{Column, FilterField, FilterKind, Messages, ResourceDescriptor, SqlType};
use crate::sql::SqlValue;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

pub static ORDERS: ResourceDescriptor = ResourceDescriptor {
    path: "ordenes",
    table: "ordenes",
    key: "id_orden",
    columns: &[
        Column::required("fecha", SqlType::Date),
        Column::required("total", SqlType::Numeric),
        Column::required("id_cliente", SqlType::BigInt).references("clientes", "id_cliente"),
    ],
    filters: &[
        FilterField::exact("id_cliente", FilterKind::Integer),
        FilterField::exact("fecha", FilterKind::Date),
    ],
    messages: Messages {
        created: "Orden creada",
        updated: "Orden actualizada",
        deleted: "Orden eliminada",
        not_found: "Orden no encontrada",
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct OrderPayload {
    /// ISO date, e.g. "2024-03-01".
    pub fecha: Option<NaiveDate>,
    pub total: Option<f64>,
    pub id_cliente: Option<i64>,
}

pub struct Orders;

impl Resource for Orders {
    type Payload = OrderPayload;

    fn descriptor() -> &'static ResourceDescriptor {
        &ORDERS
    }

    fn fields(p: OrderPayload) -> HashMap<&'static str, SqlValue> {
        collect([
            ("fecha", SqlValue::date(p.fecha)),
            ("total", SqlValue::float(p.total)),
            ("id_cliente", SqlValue::int(p.id_cliente)),
        ])
    }
}
