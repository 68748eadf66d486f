//! Read-only users repository

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::User,
};

#[derive(Clone)]
pub struct UsersRepository {
    users: Arc<[User]>,
}

impl UsersRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into(),
        }
    }

    pub fn list(&self) -> Vec<User> {
        self.users.to_vec()
    }

    /// Get the first user with the given id
    pub fn get_by_id(&self, id: &str) -> AppResult<User> {
        self.users
            .iter()
            .find(|user| user.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user with id {} not found", id)))
    }

    /// Issued book ids, in user order
    pub fn issued_book_ids(&self) -> Vec<&str> {
        self.users
            .iter()
            .filter_map(User::issued_book_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repository() -> UsersRepository {
        let users: Vec<User> = serde_json::from_value(json!([
            { "id": "u1", "name": "Ann", "issuedBook": "2" },
            { "id": "u2", "name": "Bob" },
            { "id": "u3", "name": "Cid", "issuedBook": "" },
            { "id": "u4", "name": "Dee", "issuedBook": "1" }
        ]))
        .unwrap();
        UsersRepository::new(users)
    }

    #[test]
    fn test_issued_book_ids_in_user_order() {
        assert_eq!(repository().issued_book_ids(), vec!["2", "1"]);
    }

    #[test]
    fn test_get_by_id() {
        let repo = repository();
        assert_eq!(repo.get_by_id("u2").unwrap().name, "Bob");
        assert!(matches!(repo.get_by_id("u9"), Err(AppError::NotFound(_))));
    }
}
