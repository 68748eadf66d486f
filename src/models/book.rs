//! Book model and related types

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

/// Catalog entry.
///
/// Only `id` is mandatory. Missing fields are kept missing and are left out
/// of the serialized JSON, so a book comes back exactly as it was posted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Catalog identifier, compared as an exact string
    pub id: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Kept as a raw JSON number so `10` is not echoed back as `10.0`
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Number>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl Book {
    /// Shallow merge: fields present in the patch win, the rest are kept.
    pub fn merged(&self, patch: &BookPatch) -> Book {
        Book {
            id: patch.id.clone().unwrap_or_else(|| self.id.clone()),
            name: patch.name.clone().or_else(|| self.name.clone()),
            author: patch.author.clone().or_else(|| self.author.clone()),
            genre: patch.genre.clone().or_else(|| self.genre.clone()),
            price: patch.price.clone().or_else(|| self.price.clone()),
            publisher: patch.publisher.clone().or_else(|| self.publisher.clone()),
        }
    }
}

/// Partial book used by updates. An absent field leaves the book unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct BookPatch {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub publisher: Option<String>,
}

/// Update book request body
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<BookPatch>,
}

impl UpdateBook {
    pub fn into_patch(self) -> BookPatch {
        self.data.unwrap_or_default()
    }
}

/// Optional field that drops a value of the wrong type instead of rejecting the body
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).ok())
}
