//! Relationship fields: values computed from a parent record and the store,
//! never stored on the record itself.
//!
//! Each field is a plain function bound in a constant table entry. The object
//! types in [`super::types`] look the entry up on every read, so a result
//! always reflects the store as it is at that moment.

use crate::model::{Author, Book};
use crate::storage::EntityStore;

pub type Resolver<P, T> = fn(&P, &EntityStore) -> T;

/// A field on `type_name` whose value is derived from the other collection.
pub struct Relation<P, T> {
    pub type_name: &'static str,
    pub field: &'static str,
    pub resolve: Resolver<P, T>,
}

impl<P, T> Relation<P, T> {
    pub fn resolve(&self, parent: &P, store: &EntityStore) -> T {
        (self.resolve)(parent, store)
    }
}

pub const BOOK_AUTHOR: Relation<Book, Option<Author>> = Relation {
    type_name: "Book",
    field: "author",
    resolve: book_author,
};

pub const AUTHOR_BOOKS: Relation<Author, Vec<Book>> = Relation {
    type_name: "Author",
    field: "books",
    resolve: author_books,
};

/// `(type, field)` of every relationship field in the schema.
pub const RELATIONSHIP_FIELDS: [(&str, &str); 2] = [
    (BOOK_AUTHOR.type_name, BOOK_AUTHOR.field),
    (AUTHOR_BOOKS.type_name, AUTHOR_BOOKS.field),
];

fn book_author(book: &Book, store: &EntityStore) -> Option<Author> {
    store.find_by_id::<Author>(book.author_id).cloned()
}

fn author_books(author: &Author, store: &EntityStore) -> Vec<Book> {
    store
        .filter::<Book>(|b| b.is_written_by(author.id))
        .into_iter()
        .cloned()
        .collect()
}
