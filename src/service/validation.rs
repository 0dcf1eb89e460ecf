//! Request validation from descriptor rules: required fields, formats, list filters.

use crate::config::{FilterKind, Format, Match, ResourceDescriptor};
use crate::error::AppError;
use crate::sql::{Filter, SqlValue};
use chrono::NaiveDate;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap_or_else(|e| panic!("email pattern: {}", e))
});

pub struct RequestValidator;

impl RequestValidator {
    /// Check payload fields against the descriptor and order them as its writable columns.
    /// Every missing or falsy required field (null, blank, zero) is reported at once;
    /// absent optional fields become NULL.
    pub fn validate(
        d: &ResourceDescriptor,
        mut fields: HashMap<&'static str, SqlValue>,
    ) -> Result<Vec<SqlValue>, AppError> {
        let missing: Vec<&str> = d
            .required_columns()
            .filter(|c| fields.get(c.name).map_or(true, SqlValue::is_falsy))
            .map(|c| c.name)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        let mut values = Vec::new();
        for c in d.writable_columns() {
            let v = fields.remove(c.name).unwrap_or(SqlValue::Null);
            if let Some(format) = c.format {
                validate_format(c.name, &v, format)?;
            }
            values.push(v);
        }
        Ok(values)
    }

    /// Build the list filter from query params. Only descriptor fields are honoured, in
    /// descriptor order; empty values are skipped and unknown keys ignored.
    pub fn filters(d: &ResourceDescriptor, params: &HashMap<String, String>) -> Result<Filter, AppError> {
        let mut filter = Filter::new();
        for f in d.filters {
            let Some(raw) = params.get(f.name).filter(|s| !s.trim().is_empty()) else {
                continue;
            };
            match (f.matcher, f.kind) {
                (Match::Contains, _) => {
                    filter.contains(f.name, raw);
                }
                (Match::Exact, FilterKind::Text) => {
                    filter.equals(f.name, SqlValue::Text(raw.clone()));
                }
                (Match::Exact, FilterKind::Integer) => {
                    let n: i64 = raw
                        .trim()
                        .parse()
                        .map_err(|_| AppError::Validation(format!("{} must be an integer", f.name)))?;
                    filter.equals(f.name, SqlValue::Int(n));
                }
                (Match::Exact, FilterKind::Date) => {
                    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                        AppError::Validation(format!("{} must be a date (YYYY-MM-DD)", f.name))
                    })?;
                    filter.equals(f.name, SqlValue::Date(date));
                }
            }
        }
        Ok(filter)
    }
}

fn validate_format(col: &str, v: &SqlValue, format: Format) -> Result<(), AppError> {
    let Some(s) = v.as_text() else {
        return Ok(());
    };
    match format {
        Format::Email => {
            if !EMAIL.is_match(s.trim()) {
                return Err(AppError::Validation(format!("{} must be a valid email", col)));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Orders, Products, Resource, CUSTOMERS, ORDERS, PRODUCTS};

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn product(body: serde_json::Value) -> HashMap<&'static str, SqlValue> {
        Products::fields(serde_json::from_value(body).unwrap())
    }

    #[test]
    fn complete_product_is_ordered_by_column() {
        let values = RequestValidator::validate(
            &PRODUCTS,
            product(serde_json::json!({
                "categoria": "Z", "stock": 5, "precio": 10, "descripcion": "Y", "nombre": "X"
            })),
        )
        .unwrap();
        assert_eq!(
            values,
            vec![
                SqlValue::Text("X".into()),
                SqlValue::Text("Y".into()),
                SqlValue::Float(10.0),
                SqlValue::Int(5),
                SqlValue::Text("Z".into()),
            ]
        );
    }

    #[test]
    fn all_missing_fields_are_listed() {
        let err = RequestValidator::validate(
            &PRODUCTS,
            product(serde_json::json!({ "nombre": "X", "descripcion": "", "categoria": "Z" })),
        )
        .unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert_eq!(msg, "missing required fields: descripcion, precio, stock")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn null_counts_as_missing() {
        let fields = Orders::fields(
            serde_json::from_value(serde_json::json!({
                "fecha": "2024-03-01", "total": null, "id_cliente": 2
            }))
            .unwrap(),
        );
        assert!(RequestValidator::validate(&ORDERS, fields).is_err());
    }

    #[test]
    fn zero_in_a_required_number_counts_as_missing() {
        let err = RequestValidator::validate(
            &PRODUCTS,
            product(serde_json::json!({
                "nombre": "X", "descripcion": "Y", "precio": 0, "stock": 0, "categoria": "Z"
            })),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m == "missing required fields: precio, stock"));
    }

    #[test]
    fn optional_customer_fields_become_null() {
        let mut fields = HashMap::new();
        fields.insert("nombre", SqlValue::from("Ana"));
        fields.insert("apellido", SqlValue::from("Lopez"));
        fields.insert("email", SqlValue::from("ana@example.com"));
        let values = RequestValidator::validate(&CUSTOMERS, fields).unwrap();
        assert_eq!(values[3], SqlValue::Null);
        assert_eq!(values[4], SqlValue::Null);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut fields = HashMap::new();
        fields.insert("nombre", SqlValue::from("Ana"));
        fields.insert("apellido", SqlValue::from("Lopez"));
        fields.insert("email", SqlValue::from("not-an-email"));
        let err = RequestValidator::validate(&CUSTOMERS, fields).unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m.contains("email")));
    }

    #[test]
    fn filters_follow_descriptor_order_and_ignore_unknown_keys() {
        let filter = RequestValidator::filters(
            &CUSTOMERS,
            &params(&[("direccion", "Centro"), ("email", "x"), ("nombre", "Ana"), ("apellido", "")]),
        )
        .unwrap();
        let cols: Vec<_> = filter.predicates().iter().map(|p| p.column).collect();
        assert_eq!(cols, vec!["nombre", "direccion"]);
        assert_eq!(filter.predicates()[0].value, SqlValue::Text("%Ana%".into()));
    }

    #[test]
    fn substring_filter_keeps_surrounding_spaces() {
        let filter = RequestValidator::filters(
            &CUSTOMERS,
            &params(&[("nombre", " Ana"), ("apellido", "   ")]),
        )
        .unwrap();
        assert_eq!(filter.predicates().len(), 1);
        assert_eq!(filter.predicates()[0].value, SqlValue::Text("% Ana%".into()));
    }

    #[test]
    fn product_category_is_exact() {
        let filter =
            RequestValidator::filters(&PRODUCTS, &params(&[("categoria", "Bebidas")])).unwrap();
        assert_eq!(filter.predicates()[0].value, SqlValue::Text("Bebidas".into()));
    }

    #[test]
    fn order_filters_are_typed() {
        let filter = RequestValidator::filters(
            &ORDERS,
            &params(&[("fecha", "2024-03-01"), ("id_cliente", "7")]),
        )
        .unwrap();
        assert_eq!(filter.predicates()[0].value, SqlValue::Int(7));
        assert_eq!(
            filter.predicates()[1].value,
            SqlValue::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );

        assert!(RequestValidator::filters(&ORDERS, &params(&[("id_cliente", "abc")])).is_err());
        assert!(RequestValidator::filters(&ORDERS, &params(&[("fecha", "01/03/2024")])).is_err());
    }
}
