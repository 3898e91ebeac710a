//! src/domain/new_client.rs

use crate::domain::{ClientEmail, ValidationError};
use serde_json::Value;

/// Request body of `POST /clients`.
///
/// Fields are kept as raw JSON values so that absent, `null`, `false`, `0`
/// and `""` all end up in the same presence check.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct ClientFormData {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub business_name: Option<Value>,
}

#[derive(Debug)]
pub struct NewClient {
    pub name: String,
    pub email: ClientEmail,
    pub business_name: String,
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn present(field: Option<Value>) -> Option<Value> {
    field.filter(is_truthy)
}

/// Text stored for a present field; non-string values keep their JSON form.
fn into_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl TryFrom<ClientFormData> for NewClient {
    type Error = ValidationError;

    fn try_from(value: ClientFormData) -> Result<Self, Self::Error> {
        // presence of all fields is checked before the email format
        let (Some(name), Some(email), Some(business_name)) = (
            present(value.name),
            present(value.email),
            present(value.business_name),
        ) else {
            return Err(ValidationError::MissingFields);
        };
        let email = match email {
            Value::String(email) => ClientEmail::parse(email)?,
            other => return Err(ValidationError::InvalidEmail(other.to_string())),
        };
        Ok(Self {
            name: into_text(name),
            email,
            business_name: into_text(business_name),
        })
    }
}
