use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;

/// Unwraps `{ "<key>": [ ... ] }` and deserializes each element.
///
/// A body that is not JSON, or lacks the array, is a schema failure. An
/// element that does not fit `R` fails the whole batch with a decode error
/// naming the element.
pub fn decode_envelope<R: DeserializeOwned>(body: &[u8], key: &str) -> Result<Vec<R>, FetchError> {
    let mut document: Value = serde_json::from_slice(body)
        .map_err(|e| FetchError::schema(format!("response body is not JSON: {e}")))?;

    let items = match document.get_mut(key).map(Value::take) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(FetchError::schema(format!(
                "`{key}` is {}, expected an array",
                value_kind(&other)
            )))
        }
        None => return Err(FetchError::schema(format!("missing `{key}` array"))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let item_id = record_id(&item, index);
            serde_json::from_value(item)
                .map_err(|e| FetchError::decode(item_id, "record", e.to_string()))
        })
        .collect()
}

/// Decodes a field that may arrive double-encoded.
///
/// `"[\"a.jpg\"]"` and `["a.jpg"]` both decode to the same value; absent,
/// `null` and an encoded `"null"` decode to `T::default()`. Anything else,
/// including malformed encoded text, is a decode error.
pub fn decode_embedded<T>(item_id: i64, field: &str, value: Option<Value>) -> Result<T, FetchError>
where
    T: DeserializeOwned + Default,
{
    match value {
        None | Some(Value::Null) => Ok(T::default()),
        Some(Value::String(encoded)) => serde_json::from_str::<Option<T>>(&encoded)
            .map(Option::unwrap_or_default)
            .map_err(|e| FetchError::decode(item_id, field, e.to_string())),
        Some(plain) => serde_json::from_value(plain)
            .map_err(|e| FetchError::decode(item_id, field, e.to_string())),
    }
}

fn record_id(item: &Value, index: usize) -> String {
    match item.get("id") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => format!("#{index}"),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Text fields that the API sometimes sends as numbers (fees, phones).
pub(crate) fn text_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(optional_text(d)?.unwrap_or_default())
}

pub(crate) fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected text or number, found {}",
            value_kind(&other)
        ))),
    }
}

/// 0/1 integer flags (also accepts booleans and `null`).
pub(crate) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(b),
        Some(Value::Number(n)) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        Some(Value::String(s)) => Ok(matches!(s.trim(), "1" | "true")),
        Some(other) => Err(D::Error::custom(format!(
            "expected a flag, found {}",
            value_kind(&other)
        ))),
    }
}
