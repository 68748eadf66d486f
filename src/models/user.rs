//! User model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Library member as found in the users seed file.
///
/// Users are read-only; `issued_book` holds the id of the book currently
/// lent to the member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_book: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_date: Option<String>,
}

impl User {
    /// Id of the issued book, if any. An empty string counts as none.
    pub fn issued_book_id(&self) -> Option<&str> {
        self.issued_book.as_deref().filter(|id| !id.is_empty())
    }
}
