use async_graphql::{Context, Object};

use super::relations::{AUTHOR_BOOKS, BOOK_AUTHOR};
use super::schema::lock_store;
use crate::model;

pub struct Book(pub model::Book);

/// This represents a book
#[Object]
impl Book {
    /// The book ID
    async fn id(&self) -> i32 {
        self.0.id
    }

    /// The name of the book
    async fn name(&self) -> &str {
        &self.0.name
    }

    /// The author ID of the book
    async fn author_id(&self) -> i32 {
        self.0.author_id
    }

    /// The author of the book
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let store = lock_store(ctx)?;
        Ok(BOOK_AUTHOR.resolve(&self.0, &store).map(Author))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Book(b)
    }
}

pub struct Author(pub model::Author);

/// This represents an author of books
#[Object]
impl Author {
    /// The author ID
    async fn id(&self) -> i32 {
        self.0.id
    }

    /// The name of the author
    async fn name(&self) -> &str {
        &self.0.name
    }

    /// The books written by the author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = lock_store(ctx)?;
        Ok(AUTHOR_BOOKS
            .resolve(&self.0, &store)
            .into_iter()
            .map(Book)
            .collect())
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Author(a)
    }
}
