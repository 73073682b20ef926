//! Books service

use std::collections::HashMap;

use crate::{
    error::AppResult,
    models::book::{Book, BookPatch},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books keyed by ID
    pub fn list(&self) -> AppResult<HashMap<i64, Book>> {
        self.repository.books.list()
    }

    /// Get a book by ID
    pub fn get(&self, id: i64) -> AppResult<Option<Book>> {
        tracing::debug!("Getting book id: {}", id);
        self.repository.books.get(id)
    }

    /// Create a book under a generated key, echoing the submitted record
    pub fn create(&self, book: Book) -> AppResult<Book> {
        let (id, created) = self.repository.books.create(book)?;
        tracing::info!("Created book under key: {}", id);
        Ok(created)
    }

    /// Replace (or insert) the book at `id`
    pub fn replace(&self, id: i64, book: Book) -> AppResult<Book> {
        tracing::info!("Updating book id: {}", id);
        self.repository.books.replace(id, book)
    }

    /// Partially update the book at `id`
    pub fn patch(&self, id: i64, patch: BookPatch) -> AppResult<Book> {
        tracing::info!("Patching book id: {}", id);
        self.repository.books.patch(id, patch)
    }

    /// Delete the book at `id`; absent ids are a silent no-op
    pub fn delete(&self, id: i64) -> AppResult<()> {
        let removed = self.repository.books.delete(id)?;
        tracing::info!("Deleting book id: {} (existed: {})", id, removed);
        Ok(())
    }
}
