//! Books repository over the in-memory catalog

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPatch},
};

/// Ordered book list. Insertion order is the only ordering.
#[derive(Clone)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// All books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }

    /// Get the first book with the given id
    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("book with id {} not found", id)))
    }

    /// Resolve each id, keeping a `None` slot for ids with no matching book
    pub async fn find_each(&self, ids: &[&str]) -> Vec<Option<Book>> {
        let books = self.books.read().await;

        ids.iter()
            .map(|id| books.iter().find(|book| book.id == *id).cloned())
            .collect()
    }

    /// Append a book unless its id is already taken
    pub async fn create(&self, book: Book) -> AppResult<()> {
        let mut books = self.books.write().await;

        if books.iter().any(|existing| existing.id == book.id) {
            return Err(AppError::Conflict(format!(
                "book with id {} already exists",
                book.id
            )));
        }

        books.push(book);
        Ok(())
    }

    /// Merge the patch into every book with the given id and return the new list
    pub async fn update(&self, id: &str, patch: &BookPatch) -> AppResult<Vec<Book>> {
        let mut books = self.books.write().await;

        if !books.iter().any(|book| book.id == id) {
            return Err(does_not_exist(id));
        }

        let updated: Vec<Book> = books
            .iter()
            .map(|book| {
                if book.id == id {
                    book.merged(patch)
                } else {
                    book.clone()
                }
            })
            .collect();

        *books = updated.clone();
        Ok(updated)
    }

    /// Remove the first book with the given id and return the remaining list
    pub async fn delete(&self, id: &str) -> AppResult<Vec<Book>> {
        let mut books = self.books.write().await;

        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| does_not_exist(id))?;

        books.remove(index);
        Ok(books.clone())
    }
}

fn does_not_exist(id: &str) -> AppError {
    AppError::NotFound(format!("book with id {} does not exist", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, name: &str) -> Book {
        Book {
            id: id.to_string(),
            name: Some(name.to_string()),
            author: None,
            genre: None,
            price: None,
            publisher: None,
        }
    }

    fn repository() -> BooksRepository {
        BooksRepository::new(vec![book("1", "A"), book("2", "B"), book("3", "C")])
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let repo = repository();
        assert_eq!(repo.get_by_id("2").await.unwrap().name.as_deref(), Some("B"));

        let err = repo.get_by_id("02").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg.contains("02")));
    }

    #[tokio::test]
    async fn test_create_appends_and_rejects_duplicates() {
        let repo = repository();
        repo.create(book("4", "D")).await.unwrap();
        assert_eq!(ids(&repo.list().await), vec!["1", "2", "3", "4"]);

        let err = repo.create(book("1", "Other")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.count().await, 4);
        assert_eq!(repo.get_by_id("1").await.unwrap().name.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn test_update_touches_only_target() {
        let repo = repository();
        let patch = BookPatch {
            name: Some("B2".to_string()),
            ..Default::default()
        };

        let books = repo.update("2", &patch).await.unwrap();
        assert_eq!(books[1].name.as_deref(), Some("B2"));
        assert_eq!(books[0], book("1", "A"));
        assert_eq!(books[2], book("3", "C"));
        assert_eq!(repo.list().await, books);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let err = repository()
            .update("9", &BookPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg.contains("does not exist")));
    }

    #[tokio::test]
    async fn test_delete_first_match_only() {
        let repo = BooksRepository::new(vec![book("1", "A"), book("2", "B"), book("2", "B again")]);

        let books = repo.delete("2").await.unwrap();
        assert_eq!(ids(&books), vec!["1", "2"]);
        assert_eq!(books[1].name.as_deref(), Some("B again"));

        assert!(repo.delete("7").await.is_err());
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn test_find_each_keeps_gaps() {
        let found = repository().find_each(&["3", "missing", "1"]).await;
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].as_ref().map(|b| b.id.as_str()), Some("3"));
        assert!(found[1].is_none());
        assert_eq!(found[2].as_ref().map(|b| b.id.as_str()), Some("1"));
    }
}
