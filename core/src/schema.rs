//! Structural validation of untrusted JSON against the catalog schemas.
//!
//! Each entry point walks a `serde_json::Value` and either returns the typed
//! value or a [`ValidationError`] listing every issue found, each tagged with
//! the path of the offending value. Callers pass the root the value was
//! found under, so a list unwrapped from a response envelope reports
//! `data[1].price`. Keys the schema does not declare are ignored.

use std::fmt;

use serde_json::{Map, Value};

use crate::types::{DraftProduct, Product};

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Location of the value, empty for the root.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// All issues found while validating one value. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub(crate) fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue {
                path: path.into(),
                message: message.into(),
            }],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} schema issue(s): ", self.issues.len())?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Validate a single product found at `root` (empty for a top-level value).
pub fn product(value: &Value, root: &str) -> Result<Product, ValidationError> {
    let mut issues = Issues::default();
    let product = check_product(value, root, &mut issues);
    issues.finish(product)
}

/// Validate an array of products found at `root`.
pub fn products(value: &Value, root: &str) -> Result<Vec<Product>, ValidationError> {
    let mut issues = Issues::default();
    let products = match value.as_array() {
        Some(items) => {
            // Check every element before short-circuiting on the first failure.
            let checked: Vec<_> = items
                .iter()
                .enumerate()
                .map(|(i, item)| check_product(item, &format!("{root}[{i}]"), &mut issues))
                .collect();
            checked.into_iter().collect::<Option<Vec<_>>>()
        }
        None => {
            issues.push(root, format!("expected array, found {}", kind(value)));
            None
        }
    };
    issues.finish(products)
}

/// Validate a creation payload.
pub fn draft_product(value: &Value) -> Result<DraftProduct, ValidationError> {
    let mut issues = Issues::default();
    let draft = object(value, "", &mut issues).and_then(|fields| {
        let name = string_field(fields, "", "name", &mut issues);
        let price = number_field(fields, "", "price", &mut issues);
        Some(DraftProduct {
            name: name?,
            price: price?,
        })
    });
    issues.finish(draft)
}

#[derive(Default)]
struct Issues(Vec<Issue>);

impl Issues {
    fn push(&mut self, path: &str, message: String) {
        self.0.push(Issue {
            path: path.to_string(),
            message,
        });
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(value) if self.0.is_empty() => Ok(value),
            _ => Err(ValidationError { issues: self.0 }),
        }
    }
}

fn check_product(value: &Value, path: &str, issues: &mut Issues) -> Option<Product> {
    let fields = object(value, path, issues)?;
    // Evaluate every field before combining so all issues are recorded.
    let id = integer_field(fields, path, "id", issues);
    let name = string_field(fields, path, "name", issues);
    let price = number_field(fields, path, "price", issues);
    let availability = bool_field(fields, path, "availability", issues);
    Some(Product {
        id: id?,
        name: name?,
        price: price?,
        availability: availability?,
    })
}

fn object<'v>(value: &'v Value, path: &str, issues: &mut Issues) -> Option<&'v Map<String, Value>> {
    let fields = value.as_object();
    if fields.is_none() {
        issues.push(path, format!("expected object, found {}", kind(value)));
    }
    fields
}

fn field<'v>(
    fields: &'v Map<String, Value>,
    path: &str,
    key: &str,
    issues: &mut Issues,
) -> Option<(&'v Value, String)> {
    let path = join(path, key);
    match fields.get(key) {
        Some(value) => Some((value, path)),
        None => {
            issues.push(&path, "missing field".to_string());
            None
        }
    }
}

fn integer_field(fields: &Map<String, Value>, path: &str, key: &str, issues: &mut Issues) -> Option<i64> {
    let (value, path) = field(fields, path, key, issues)?;
    let n = value.as_i64();
    if n.is_none() {
        issues.push(&path, format!("expected integer, found {}", kind(value)));
    }
    n
}

fn number_field(fields: &Map<String, Value>, path: &str, key: &str, issues: &mut Issues) -> Option<f64> {
    let (value, path) = field(fields, path, key, issues)?;
    let n = value.as_f64().filter(|n| n.is_finite());
    if n.is_none() {
        issues.push(&path, format!("expected number, found {}", kind(value)));
    }
    n
}

fn string_field(fields: &Map<String, Value>, path: &str, key: &str, issues: &mut Issues) -> Option<String> {
    let (value, path) = field(fields, path, key, issues)?;
    let s = value.as_str().map(str::to_string);
    if s.is_none() {
        issues.push(&path, format!("expected string, found {}", kind(value)));
    }
    s
}

fn bool_field(fields: &Map<String, Value>, path: &str, key: &str, issues: &mut Issues) -> Option<bool> {
    let (value, path) = field(fields, path, key, issues)?;
    let b = value.as_bool();
    if b.is_none() {
        issues.push(&path, format!("expected boolean, found {}", kind(value)));
    }
    b
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
