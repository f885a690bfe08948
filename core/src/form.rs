//! Coercion of raw HTML form input into typed payloads.
//!
//! Forms submit everything as strings. The parsers here turn those strings
//! into numbers and booleans explicitly and report what went wrong instead
//! of silently producing `NaN` or `false`.

use std::collections::HashMap;

use crate::error::FormError;
use crate::types::{DraftProduct, Product, ProductId};

/// Submitted form fields, keyed by input name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and callers assembling a form
    /// by hand.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    fn require(&self, key: &'static str) -> Result<&str, FormError> {
        self.get(key).ok_or(FormError::MissingField(key))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Parse a price field. Surrounding whitespace is ignored; empty, non-numeric
/// and non-finite input is rejected.
pub fn parse_price(raw: &str) -> Result<f64, FormError> {
    let invalid = || FormError::InvalidNumber {
        field: "price",
        value: raw.to_string(),
    };
    let price: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if price.is_finite() {
        Ok(price)
    } else {
        Err(invalid())
    }
}

/// Parse an availability field: `"true"` or `"false"`, case-insensitive.
pub fn parse_availability(raw: &str) -> Result<bool, FormError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FormError::InvalidBoolean {
            field: "availability",
            value: raw.to_string(),
        }),
    }
}

impl DraftProduct {
    pub fn from_form(form: &FormData) -> Result<Self, FormError> {
        Ok(Self {
            name: form.require("name")?.to_string(),
            price: parse_price(form.require("price")?)?,
        })
    }
}

impl Product {
    /// Build the full replacement payload for `id` from an edit form.
    pub fn from_form(id: ProductId, form: &FormData) -> Result<Self, FormError> {
        Ok(Self {
            id,
            name: form.require("name")?.to_string(),
            price: parse_price(form.require("price")?)?,
            availability: parse_availability(form.require("availability")?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_integers_and_decimals() {
        assert_eq!(parse_price("25"), Ok(25.0));
        assert_eq!(parse_price(" 19.99 "), Ok(19.99));
        assert_eq!(parse_price("-3"), Ok(-3.0));
    }

    #[test]
    fn price_rejects_garbage() {
        for raw in ["", "  ", "abc", "12abc", "NaN", "inf"] {
            assert_eq!(
                parse_price(raw),
                Err(FormError::InvalidNumber {
                    field: "price",
                    value: raw.to_string(),
                }),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn availability_parses_true_and_false() {
        assert_eq!(parse_availability("true"), Ok(true));
        assert_eq!(parse_availability("false"), Ok(false));
        assert_eq!(parse_availability("TRUE"), Ok(true));
        assert!(matches!(
            parse_availability("yes"),
            Err(FormError::InvalidBoolean { field: "availability", .. })
        ));
        assert!(parse_availability("").is_err());
    }

    #[test]
    fn draft_from_form() {
        let form = FormData::new().with("name", "Lamp").with("price", "25");
        let draft = DraftProduct::from_form(&form).unwrap();
        assert_eq!(
            draft,
            DraftProduct {
                name: "Lamp".to_string(),
                price: 25.0,
            }
        );
    }

    #[test]
    fn draft_from_form_missing_name() {
        let form: FormData = [("price", "25")].into_iter().collect();
        assert_eq!(DraftProduct::from_form(&form), Err(FormError::MissingField("name")));
    }

    #[test]
    fn product_from_form_coerces_every_field() {
        let form = FormData::new()
            .with("name", "Desk")
            .with("price", "120.5")
            .with("availability", "false");
        let product = Product::from_form(4, &form).unwrap();
        assert_eq!(product.id, 4);
        assert_eq!(product.price, 120.5);
        assert!(!product.availability);
    }

    #[test]
    fn product_from_form_requires_availability() {
        let form = FormData::new().with("name", "Desk").with("price", "1");
        assert_eq!(
            Product::from_form(4, &form),
            Err(FormError::MissingField("availability"))
        );
    }
}
