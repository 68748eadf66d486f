//! Catalog management service

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::{Book, BookPatch},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(repository: Repository, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    /// List every book in the catalog
    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Get book by exact id
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await.inspect_err(|_| {
            tracing::debug!(%id, "Book lookup missed");
        })
    }

    /// Books currently issued to users, one entry per issuing user.
    ///
    /// A user pointing at an unknown book still gets an entry (`None`), so the
    /// result length always matches the number of issuing users.
    pub async fn list_issued_books(&self) -> AppResult<Vec<Option<Book>>> {
        let ids = self.repository.users.issued_book_ids();
        let issued = self.repository.books.find_each(&ids).await;

        for (id, book) in ids.iter().zip(&issued) {
            if book.is_none() {
                tracing::warn!(book_id = %id, "Issued book is missing from the catalog");
            }
        }

        if issued.is_empty() {
            return Err(AppError::NotFound("No book has been issued yet".to_string()));
        }

        Ok(issued)
    }

    /// Add a book, rejecting ids already in the catalog
    pub async fn create_book(&self, book: Book) -> AppResult<String> {
        let id = book.id.clone();

        self.repository
            .books
            .create(book)
            .await
            .map_err(|err| match err {
                AppError::Conflict(msg) if self.config.legacy_duplicate_status => {
                    AppError::NotFound(msg)
                }
                other => other,
            })?;

        tracing::info!(%id, "Book added");
        Ok(id)
    }

    /// Merge a patch into a book and return the whole catalog
    pub async fn update_book(&self, id: &str, patch: &BookPatch) -> AppResult<Vec<Book>> {
        let books = self.repository.books.update(id, patch).await?;

        tracing::info!(%id, "Book updated");
        Ok(books)
    }

    /// Delete a book and return the remaining catalog
    pub async fn delete_book(&self, id: &str) -> AppResult<Vec<Book>> {
        let books = self.repository.books.delete(id).await?;

        tracing::info!(%id, remaining = books.len(), "Book deleted");
        Ok(books)
    }

    /// Number of books currently in the catalog
    pub async fn count_books(&self) -> usize {
        self.repository.books.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Dataset;
    use serde_json::json;

    fn dataset(users: serde_json::Value) -> Dataset {
        Dataset::new(
            serde_json::from_value(json!([
                { "id": "1", "name": "Dune", "price": 10 },
                { "id": "2", "name": "Emma", "price": 7.5 }
            ]))
            .unwrap(),
            serde_json::from_value(users).unwrap(),
        )
    }

    fn service(users: serde_json::Value, legacy: bool) -> CatalogService {
        CatalogService::new(
            Repository::new(dataset(users)),
            CatalogConfig {
                legacy_duplicate_status: legacy,
            },
        )
    }

    #[tokio::test]
    async fn test_issued_books_keep_unresolved_entries() {
        let service = service(
            json!([
                { "name": "Ann", "issuedBook": "2" },
                { "name": "Bob" },
                { "name": "Cid", "issuedBook": "404" }
            ]),
            false,
        );

        let issued = service.list_issued_books().await.unwrap();
        assert_eq!(issued.len(), 2);
        assert_eq!(issued[0].as_ref().map(|b| b.id.as_str()), Some("2"));
        assert!(issued[1].is_none());
    }

    #[tokio::test]
    async fn test_issued_books_not_found_without_issuing_users() {
        let service = service(json!([{ "name": "Ann" }, { "name": "Bob", "issuedBook": "" }]), false);

        let err = service.list_issued_books().await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_create_is_conflict() {
        let service = service(json!([]), false);
        let book: Book = serde_json::from_value(json!({ "id": "1" })).unwrap();

        let err = service.create_book(book).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(msg) if msg.contains("1")));
        assert_eq!(service.count_books().await, 2);
    }

    #[tokio::test]
    async fn test_duplicate_create_legacy_status() {
        let service = service(json!([]), true);
        let book: Book = serde_json::from_value(json!({ "id": "2" })).unwrap();

        let err = service.create_book(book).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg.contains("already exists")));
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service(json!([]), false);
        let book: Book = serde_json::from_value(json!({ "id": "b99", "name": "X", "price": 10 })).unwrap();

        assert_eq!(service.create_book(book.clone()).await.unwrap(), "b99");
        assert_eq!(service.get_book("b99").await.unwrap(), book);
        assert_eq!(service.count_books().await, 3);
    }
}
