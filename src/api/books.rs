//! Book endpoints

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPatch},
};

/// Unwrap a decoded JSON body, turning decode failures into a 400 whose body
/// carries the error text (store untouched).
fn decoded<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Mapping of ID to book")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<HashMap<i64, Book>>> {
    let books = state.services.books.list()?;
    Ok(Json(books))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "The book, or the zero-valued book for an unknown ID", body = Book),
        (status = 400, description = "Non-integer ID")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    // An unknown ID answers 200 with the zero-valued book, as the reference
    // service did. Clients cannot tell absence from an empty record.
    let book = state.services.books.get(id)?.unwrap_or_default();
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book created; body echoes the submitted record", body = Book),
        (status = 400, description = "Malformed JSON body")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    payload: Result<Json<Book>, JsonRejection>,
) -> AppResult<Json<Book>> {
    let book = decoded(payload)?;
    let created = state.services.books.create(book)?;
    Ok(Json(created))
}

/// Replace the book at an ID (upsert)
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = Book,
    responses(
        (status = 200, description = "Stored book", body = Book),
        (status = 400, description = "Malformed JSON body or non-integer ID")
    )
)]
pub async fn replace_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<Book>, JsonRejection>,
) -> AppResult<Json<Book>> {
    let book = decoded(payload)?;
    let stored = state.services.books.replace(id, book)?;
    Ok(Json(stored))
}

/// Partially update the book at an ID
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = BookPatch,
    responses(
        (status = 200, description = "Book after the merge", body = Book),
        (status = 400, description = "Malformed JSON body or non-integer ID")
    )
)]
pub async fn patch_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<BookPatch>, JsonRejection>,
) -> AppResult<Json<Book>> {
    let patch = decoded(payload)?;
    let merged = state.services.books.patch(id, patch)?;
    Ok(Json(merged))
}

/// Delete the book at an ID
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Deleted (or nothing to delete); empty body either way"),
        (status = 400, description = "Non-integer ID")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id)?;
    Ok(StatusCode::OK)
}
