//! Data models for the book catalog

pub mod book;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookPatch, UpdateBook};
pub use user::User;
