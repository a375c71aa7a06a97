pub mod comment;
mod password;
pub mod review;

pub use password::Password;

use serde_json::Value;
use serde_valid::validation::Errors;

/// First message of a validation report, for the flat `errorMessage` body.
/// Falls back to the whole report when it holds no message.
pub fn error_message(errors: &Errors) -> String {
    serde_json::to_value(errors)
        .ok()
        .as_ref()
        .and_then(first_message)
        .unwrap_or_else(|| errors.to_string())
}

fn first_message(report: &Value) -> Option<String> {
    let report = report.as_object()?;
    let own = report
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.iter().find_map(Value::as_str))
        .map(str::to_string);

    own.or_else(|| {
        ["properties", "items"]
            .iter()
            .filter_map(|key| report.get(*key).and_then(Value::as_object))
            .flat_map(|nested| nested.values())
            .find_map(first_message)
    })
}
