use serde::{Deserialize, Deserializer};

/// A loosely-typed retrieved record, before normalization.
///
/// Every field is optional — the retrieval collaborator gives no guarantees
/// about record shape. `id` tolerates numeric values since models regularly
/// emit post IDs as JSON numbers. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPost {
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub text: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

/// Accept a JSON string or number for a field carried as `Option<String>`.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}
