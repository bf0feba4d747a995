//! Data models for bookql.
//!
//! - [`Author`]: a writer, identified by an integer id
//! - [`Book`]: a title linked to its author through `author_id`
//! - [`EntityKind`]: tag naming which collection a record belongs to
//! - [`Entity`]: what the store needs to know about either record

mod author;
mod book;
mod kind;

pub use author::Author;
pub use book::Book;
pub use kind::EntityKind;

/// A record held in one of the store's collections.
pub trait Entity: Clone {
    const KIND: EntityKind;

    fn id(&self) -> i32;

    /// Overwrites the id; only the store calls this, when appending.
    fn set_id(&mut self, id: i32);
}
