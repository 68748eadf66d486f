//! User lookup service

use crate::{error::AppResult, models::User, repository::Repository};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list_users(&self) -> Vec<User> {
        self.repository.users.list()
    }

    pub fn get_user(&self, id: &str) -> AppResult<User> {
        self.repository.users.get_by_id(id)
    }
}
