use serde::{Deserialize, Serialize};

use crate::{evaluate_expression, interpreter::value::core::Value};

/// Message for a request without a usable expression.
pub const NO_EXPRESSION_MESSAGE: &str = "No expression provided.";
/// Message for results that JSON cannot represent.
pub const NON_FINITE_MESSAGE: &str = "Result is not a finite number.";

/// HTTP status of a successful evaluation.
pub const STATUS_OK: u16 = 200;
/// HTTP status of every rejected request.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// The body of a calculator request, `{"expression": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcRequest {
    /// The expression text.
    pub expression: String,
}

/// The body of a calculator response.
///
/// Successful responses carry `result`, failed ones carry `error`; the other
/// field is left out of the JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcResponse {
    /// Whether evaluation succeeded.
    pub ok:     bool,
    /// The result, with integers rendered in full.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Number>,
    /// One of the fixed public error messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:  Option<String>,
}

impl CalcResponse {
    /// A successful response carrying `result`.
    #[must_use]
    pub const fn success(result: serde_json::Number) -> Self {
        Self { ok:     true,
               result: Some(result),
               error:  None, }
    }

    /// A failed response carrying `message`.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { ok:     false,
               result: None,
               error:  Some(message.into()), }
    }
}

/// Handles one calculator request body.
///
/// The body is read as a JSON object with an `expression` string. Invalid
/// JSON, a missing or non-string `expression`, and blank text are all treated
/// as no expression at all. The expression is trimmed and evaluated; failures
/// are reported with their public message only.
///
/// # Returns
/// The HTTP status code and the response document.
///
/// # Example
/// ```
/// use sandcalc::api::respond;
///
/// let (status, response) = respond(br#"{"expression": "2 + 3 * 4"}"#);
/// assert_eq!(status, 200);
/// assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"ok":true,"result":14}"#);
///
/// let (status, response) = respond(br#"{"expression": "10 / 0"}"#);
/// assert_eq!(status, 400);
/// assert_eq!(response.error.as_deref(), Some("Division by zero."));
/// ```
#[must_use]
pub fn respond(body: &[u8]) -> (u16, CalcResponse) {
    let Some(expression) = extract_expression(body) else {
        return (STATUS_BAD_REQUEST, CalcResponse::failure(NO_EXPRESSION_MESSAGE));
    };

    match evaluate_expression(&expression) {
        Ok(value) => match to_json_number(&value) {
            Some(number) => (STATUS_OK, CalcResponse::success(number)),
            None => (STATUS_BAD_REQUEST, CalcResponse::failure(NON_FINITE_MESSAGE)),
        },
        Err(e) => (STATUS_BAD_REQUEST, CalcResponse::failure(e.public_message())),
    }
}

/// Pulls the trimmed, non-blank expression out of a request body.
fn extract_expression(body: &[u8]) -> Option<String> {
    let document = serde_json::from_slice::<serde_json::Value>(body).ok()?;
    let expression = document.get("expression")?.as_str()?.trim();

    (!expression.is_empty()).then(|| expression.to_string())
}

/// Renders a value as a JSON number.
///
/// Integers keep every digit. Returns `None` for infinities and NaN.
///
/// # Example
/// ```
/// use sandcalc::{api::to_json_number, interpreter::value::core::Value};
///
/// let big = Value::Integer("123456789012345678901234567890".parse().unwrap());
/// assert_eq!(to_json_number(&big).unwrap().to_string(), "123456789012345678901234567890");
///
/// assert_eq!(to_json_number(&Value::Real(0.5)).unwrap().to_string(), "0.5");
/// assert!(to_json_number(&Value::Real(f64::NAN)).is_none());
/// ```
#[must_use]
pub fn to_json_number(value: &Value) -> Option<serde_json::Number> {
    if !value.is_finite() {
        return None;
    }
    serde_json::from_str(&value.to_string()).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn request_round_trips_through_serde() {
        let request = CalcRequest { expression: "1 + 1".to_string() };
        let body = serde_json::to_vec(&request).unwrap();

        assert_eq!(respond(&body), (STATUS_OK, CalcResponse::success(2.into())));
    }

    #[test]
    fn blank_and_malformed_bodies_have_no_expression() {
        for body in ["{}", "not json", "[1, 2]", r#"{"expression": 12}"#, r#"{"expression": "   "}"#] {
            assert_eq!(respond(body.as_bytes()),
                       (STATUS_BAD_REQUEST, CalcResponse::failure(NO_EXPRESSION_MESSAGE)));
        }
    }

    #[test]
    fn failure_serializes_without_result() {
        let json = serde_json::to_string(&CalcResponse::failure("Division by zero.")).unwrap();
        assert_eq!(json, r#"{"ok":false,"error":"Division by zero."}"#);
    }
}
