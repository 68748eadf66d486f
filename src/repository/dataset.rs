//! Static seed data loaded once at startup

use std::path::Path;

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Book, User},
};

/// Initial catalog contents
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub books: Vec<Book>,
    pub users: Vec<User>,
}

#[derive(Deserialize)]
struct BooksFile {
    books: Vec<Book>,
}

#[derive(Deserialize)]
struct UsersFile {
    users: Vec<User>,
}

impl Dataset {
    pub fn new(books: Vec<Book>, users: Vec<User>) -> Self {
        Self { books, users }
    }

    /// Read `{ "books": [...] }` and `{ "users": [...] }` from the given files
    pub async fn load(books_path: &Path, users_path: &Path) -> AppResult<Self> {
        let books = read_file(books_path).await?;
        let users = read_file(users_path).await?;

        Self::from_json(&books, &users)
    }

    /// Parse both seed documents
    pub fn from_json(books: &str, users: &str) -> AppResult<Self> {
        let books: BooksFile = serde_json::from_str(books)
            .map_err(|e| AppError::Data(format!("Invalid books data: {}", e)))?;
        let users: UsersFile = serde_json::from_str(users)
            .map_err(|e| AppError::Data(format!("Invalid users data: {}", e)))?;

        Ok(Self::new(books.books, users.users))
    }
}

async fn read_file(path: &Path) -> AppResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::Data(format!("Failed to read {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let dataset = Dataset::from_json(
            r#"{ "books": [{ "id": "1", "name": "Dune" }, { "id": "2" }] }"#,
            r#"{ "users": [{ "name": "Ann", "issuedBook": "1" }] }"#,
        )
        .unwrap();

        assert_eq!(dataset.books.len(), 2);
        assert_eq!(dataset.books[0].name.as_deref(), Some("Dune"));
        assert_eq!(dataset.users[0].issued_book_id(), Some("1"));
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        let err = Dataset::from_json(r#"[{ "id": "1" }]"#, r#"{ "users": [] }"#).unwrap_err();
        assert!(matches!(err, AppError::Data(_)));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = Dataset::load(
            Path::new("does/not/exist/books.json"),
            Path::new("does/not/exist/users.json"),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Data(msg) if msg.contains("books.json")));
    }

    #[tokio::test]
    async fn test_load_bundled_seed() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let dataset = Dataset::load(
            &root.join("data/books.json"),
            &root.join("data/users.json"),
        )
        .await
        .unwrap();

        assert!(!dataset.books.is_empty());
        assert!(dataset.users.iter().any(|u| u.issued_book_id().is_some()));
    }
}
