//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single book record
///
/// Wire field names are capitalized to stay compatible with clients of the
/// original service (`{"ID":1,"Title":"...","Price":9.99}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Price")]
    pub price: f64,
}

/// Partial update payload for a book
///
/// Fields absent from the request body are `None` and leave the stored value
/// untouched; present fields overwrite it. This reproduces the
/// decode-onto-existing-value merge of the reference PATCH handler.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookPatch {
    #[serde(rename = "ID")]
    pub id: Option<i64>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Author")]
    pub author: Option<String>,
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Price")]
    pub price: Option<f64>,
}

impl BookPatch {
    /// Overlay this patch onto an existing book, returning the merged record
    pub fn apply_to(self, mut book: Book) -> Book {
        if let Some(id) = self.id {
            book.id = id;
        }
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(isbn) = self.isbn {
            book.isbn = isbn;
        }
        if let Some(description) = self.description {
            book.description = description;
        }
        if let Some(price) = self.price {
            book.price = price;
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_serializes_with_wire_field_names() {
        let book = Book {
            id: 1,
            title: "The C Book".to_string(),
            author: "Dennis Ritchie".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            json!({
                "ID": 1,
                "Title": "The C Book",
                "Author": "Dennis Ritchie",
                "ISBN": "",
                "Description": "",
                "Price": 0.0,
            })
        );
    }

    #[test]
    fn zero_value_book_has_empty_fields() {
        let value = serde_json::to_value(Book::default()).unwrap();
        assert_eq!(value["ID"], 0);
        assert_eq!(value["Title"], "");
        assert_eq!(value["Price"], 0.0);
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let existing = Book {
            id: 1,
            title: "The C Book".to_string(),
            author: "Dennis Ritchie".to_string(),
            isbn: "0131101633".to_string(),
            description: "Classic".to_string(),
            price: 19.99,
        };

        let patch: BookPatch = serde_json::from_value(json!({"Price": 9.99})).unwrap();
        let merged = patch.apply_to(existing.clone());

        assert_eq!(merged.price, 9.99);
        assert_eq!(merged.title, existing.title);
        assert_eq!(merged.author, existing.author);
        assert_eq!(merged.isbn, existing.isbn);
        assert_eq!(merged.description, existing.description);
        assert_eq!(merged.id, existing.id);
    }

    #[test]
    fn empty_patch_is_identity() {
        let existing = Book {
            id: 2,
            title: "C++".to_string(),
            author: "Bjarne Stroustrop".to_string(),
            ..Default::default()
        };

        let patch: BookPatch = serde_json::from_value(json!({})).unwrap();
        assert_eq!(patch.apply_to(existing.clone()), existing);
    }
}
