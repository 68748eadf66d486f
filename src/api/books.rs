//! Book (catalog) endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::{
    error::AppResult,
    models::{Book, UpdateBook},
    AppState,
};

use super::{ApiJson, ApiJsonOrDefault, ApiResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/", get(list_books).post(create_book))
        .route("/books/issued/by-user", get(list_issued_books))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Every book, in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> ApiResponse<Vec<Book>> {
    ApiResponse::data(state.services.catalog.list_books().await)
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Book>> {
    let book = state.services.catalog.get_book(&id).await?;
    Ok(ApiResponse::data(book))
}

/// List the books currently issued to users
///
/// One entry per issuing user; `null` when the user references a book the
/// catalog does not hold.
#[utoipa::path(
    get,
    path = "/books/issued/by-user",
    tag = "books",
    responses(
        (status = 200, description = "Issued books, `null` for unresolved references", body = Vec<Book>),
        (status = 404, description = "No book has been issued", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_issued_books(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Option<Book>>>> {
    let books = state.services.catalog.list_issued_books().await?;
    Ok(ApiResponse::data(books))
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book added"),
        (status = 400, description = "Malformed body or missing id", body = crate::error::ErrorResponse),
        (status = 409, description = "Book already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(book): ApiJson<Book>,
) -> AppResult<ApiResponse<()>> {
    let id = state.services.catalog.create_book(book).await?;
    Ok(ApiResponse::message(format!(
        "book with id {} added successfully",
        id
    )))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Whole catalog after the update", body = Vec<Book>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJsonOrDefault(update): ApiJsonOrDefault<UpdateBook>,
) -> AppResult<ApiResponse<Vec<Book>>> {
    let books = state
        .services
        .catalog
        .update_book(&id, &update.into_patch())
        .await?;
    Ok(ApiResponse::data(books))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Remaining catalog", body = Vec<Book>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Vec<Book>>> {
    let books = state.services.catalog.delete_book(&id).await?;
    Ok(ApiResponse::with_data(
        format!("book with id {} deleted successfully", id),
        books,
    ))
}
