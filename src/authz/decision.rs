//! Authorization decisions returned by the policy service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A policy decision, kept exactly as the policy service sent it.
///
/// Keycloak answers `{"result": true}` on grant; on denial it sends an
/// error object (`error`, `error_description`) without a truthy `result`.
/// Serializing a `Decision` gives back the received object in compact
/// form with its key order intact.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Decision(Value);

impl Decision {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Whether the `result` field is truthy.
    ///
    /// Missing or null `result`, `false`, `0`, and `""` deny. Any other
    /// value grants.
    pub fn is_allowed(&self) -> bool {
        match self.0.get("result") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Compact JSON text of the decision, used as the 403 body.
    pub fn to_json(&self) -> String {
        self.0.to_string()
    }
}
