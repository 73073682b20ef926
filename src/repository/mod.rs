//! Repository layer for store operations

pub mod books;

/// Main repository struct holding the in-memory stores
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with freshly seeded stores
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
