use super::{collect, Resource};
use crate::config::{Column, FilterField, FilterKind, Messages, ResourceDescriptor, SqlType};
use crate::sql::SqlValue;
use serde::Deserialize;
use std::collections::HashMap;

pub static PRODUCTS: ResourceDescriptor = ResourceDescriptor {
    path: "productos",
    table: "productos",
    key: "id_producto",
    columns: &[
        Column::required("nombre", SqlType::Text),
        Column::required("descripcion", SqlType::Text),
        Column::required("precio", SqlType::Numeric),
        Column::required("stock", SqlType::Integer),
        Column::required("categoria", SqlType::Text),
    ],
    filters: &[
        FilterField::contains("nombre"),
        FilterField::exact("categoria", FilterKind::Text),
    ],
    messages: Messages {
        created: "Producto creado",
        updated: "Producto actualizado",
        deleted: "Producto eliminado",
        not_found: "Producto no encontrado",
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio: Option<f64>,
    pub stock: Option<i64>,
    pub categoria: Option<String>,
}

pub struct Products;

impl Resource for Products {
    type Payload = ProductPayload;

    fn descriptor() -> &'static ResourceDescriptor {
        &PRODUCTS
    }

    fn fields(p: ProductPayload) -> HashMap<&'static str, SqlValue> {
        collect([
            ("nombre", SqlValue::text(p.nombre)),
            ("descripcion", SqlValue::text(p.descripcion)),
            ("precio", SqlValue::float(p.precio)),
            ("stock", SqlValue::int(p.stock)),
            ("categoria", SqlValue::text(p.categoria)),
        ])
    }
}
