use super::{collect, Resource};
use crate::config::{Column, FilterField, Format, Messages, ResourceDescriptor, SqlType};
use crate::sql::SqlValue;
use serde::Deserialize;
use std::collections::HashMap;

pub static CUSTOMERS: ResourceDescriptor = ResourceDescriptor {
    path: "clientes",
    table: "clientes",
    key: "id_cliente",
    columns: &[
        Column::required("nombre", SqlType::Text),
        Column::required("apellido", SqlType::Text),
        Column::required("email", SqlType::Text).with_format(Format::Email),
        Column::optional("telefono", SqlType::Text),
        Column::optional("direccion", SqlType::Text),
        Column::created_at(),
        Column::updated_at(),
    ],
    filters: &[
        FilterField::contains("nombre"),
        FilterField::contains("apellido"),
        FilterField::contains("telefono"),
        FilterField::contains("direccion"),
    ],
    messages: Messages {
        created: "Cliente creado",
        updated: "Cliente actualizado",
        deleted: "Cliente eliminado",
        not_found: "Cliente no encontrado",
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct CustomerPayload {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
}

pub struct Customers;

impl Resource for Customers {
    type Payload = CustomerPayload;

    fn descriptor() -> &'static ResourceDescriptor {
        &CUSTOMERS
    }

    fn fields(p: CustomerPayload) -> HashMap<&'static str, SqlValue> {
        collect([
            ("nombre", SqlValue::text(p.nombre)),
            ("apellido", SqlValue::text(p.apellido)),
            ("email", SqlValue::text(p.email)),
            ("telefono", SqlValue::text(p.telefono)),
            ("direccion", SqlValue::text(p.direccion)),
        ])
    }
}
