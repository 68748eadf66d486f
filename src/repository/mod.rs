//! Repository layer over the in-memory catalog

pub mod books;
pub mod dataset;
pub mod users;

pub use dataset::Dataset;

/// Single owned store, cloned cheaply into every service
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository seeded with the given dataset
    pub fn new(dataset: Dataset) -> Self {
        Self {
            books: books::BooksRepository::new(dataset.books),
            users: users::UsersRepository::new(dataset.users),
        }
    }
}
