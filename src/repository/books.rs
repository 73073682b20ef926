//! In-memory book store

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPatch},
};

/// Stateful counter producing successive integers, starting above `init_value`
pub fn sequence(init_value: i64) -> impl FnMut() -> i64 {
    let mut i = init_value;
    move || {
        i += 1;
        i
    }
}

struct StoreInner {
    books: HashMap<i64, Book>,
    /// Last key handed out; create assigns `next_id + 1`. Shared with the
    /// seed sequence so keys stay unique even after deletions.
    next_id: i64,
}

/// Repository owning the ID → Book mapping
///
/// All access goes through one process-wide RwLock. The reference served
/// reads without synchronization; here reads take the shared guard, which
/// strengthens the contract rather than changing observable behavior.
#[derive(Clone)]
pub struct BooksRepository {
    inner: Arc<RwLock<StoreInner>>,
}

impl BooksRepository {
    /// Create a store seeded with the two stock records (IDs 1 and 2)
    pub fn new() -> Self {
        let mut next_id = sequence(0);
        let mut books = HashMap::new();
        for (title, author) in [("The C Book", "Dennis Ritchie"), ("C++", "Bjarne Stroustrop")] {
            let id = next_id();
            books.insert(
                id,
                Book {
                    id,
                    title: title.to_string(),
                    author: author.to_string(),
                    ..Default::default()
                },
            );
        }

        Self {
            inner: Arc::new(RwLock::new(StoreInner { books, next_id: next_id() - 1 })),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, StoreInner>> {
        self.inner
            .read()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, StoreInner>> {
        self.inner
            .write()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    /// Snapshot of the full mapping, in no particular order
    pub fn list(&self) -> AppResult<HashMap<i64, Book>> {
        Ok(self.read()?.books.clone())
    }

    /// Look up a book by ID, distinguishing absence from an empty record
    pub fn get(&self, id: i64) -> AppResult<Option<Book>> {
        Ok(self.read()?.books.get(&id).cloned())
    }

    /// Insert a book under a freshly generated key
    ///
    /// The key comes from the ID sequence, not the payload's `ID` field, so
    /// the stored record's `ID` attribute can diverge from its key. The
    /// reference used `len + 1` here, which collides with surviving keys
    /// after a delete; the sequence closes that hole.
    pub fn create(&self, book: Book) -> AppResult<(i64, Book)> {
        let mut inner = self.write()?;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.books.insert(id, book.clone());
        Ok((id, book))
    }

    /// Insert or overwrite the entry at `id` with the full record (upsert)
    pub fn replace(&self, id: i64, book: Book) -> AppResult<Book> {
        let mut inner = self.write()?;
        inner.books.insert(id, book.clone());
        Ok(book)
    }

    /// Overlay a partial payload onto the record at `id`
    ///
    /// The read of the existing record and the write of the merged one happen
    /// under a single write-lock acquisition. An absent id patches onto the
    /// zero-valued book, creating the entry.
    pub fn patch(&self, id: i64, patch: BookPatch) -> AppResult<Book> {
        let mut inner = self.write()?;
        let existing = inner.books.get(&id).cloned().unwrap_or_default();
        let merged = patch.apply_to(existing);
        inner.books.insert(id, merged.clone());
        Ok(merged)
    }

    /// Remove the entry at `id`; reports whether anything was there
    pub fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.write()?.books.remove(&id).is_some())
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}
