use std::sync::MutexGuard;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::error::BookqlError;
use crate::model::{self, Entity};
use crate::storage::{EntityStore, SharedStore, Stored};
use crate::validation;

use super::types::*;

pub type BookqlSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> BookqlSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub(crate) fn lock_store<'a>(
    ctx: &Context<'a>,
) -> async_graphql::Result<MutexGuard<'a, EntityStore>> {
    let store = ctx.data::<SharedStore>()?;
    store
        .lock()
        .map_err(|_| async_graphql::Error::new("Entity store lock poisoned"))
}

fn not_found<E: Entity>(id: i32) -> async_graphql::Error {
    BookqlError::NotFound { kind: E::KIND, id }.extend()
}

fn check(result: crate::error::Result<()>) -> async_graphql::Result<()> {
    result.map_err(|e| e.extend())
}

/// Reports a failed field at its own path and resolves it to `null`.
///
/// Returning `Err` from a resolver drops the field from `data` altogether,
/// and `data` itself becomes `null` when it was the only selection.
fn null_on_error<T>(ctx: &Context<'_>, result: async_graphql::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let err = ctx.set_error_path(err.into_server_error(ctx.item.pos));
            ctx.add_error(err);
            None
        }
    }
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A single Book
    async fn book(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The book ID")] id: Option<i32>,
    ) -> Option<Book> {
        let result = (|| -> async_graphql::Result<Option<Book>> {
            let id = validation::require_id(id).map_err(|e| e.extend())?;
            let store = lock_store(ctx)?;
            Ok(store.find_by_id::<model::Book>(id).cloned().map(Book))
        })();
        null_on_error(ctx, result).flatten()
    }

    /// A single Author
    async fn author(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The author ID")] id: Option<i32>,
    ) -> Option<Author> {
        let result = (|| -> async_graphql::Result<Option<Author>> {
            let id = validation::require_id(id).map_err(|e| e.extend())?;
            let store = lock_store(ctx)?;
            Ok(store.find_by_id::<model::Author>(id).cloned().map(Author))
        })();
        null_on_error(ctx, result).flatten()
    }

    /// List of books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = lock_store(ctx)?;
        Ok(store
            .all::<model::Book>()
            .iter()
            .cloned()
            .map(Book)
            .collect())
    }

    /// List of authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let store = lock_store(ctx)?;
        Ok(store
            .all::<model::Author>()
            .iter()
            .cloned()
            .map(Author)
            .collect())
    }
}

fn insert_book(
    ctx: &Context<'_>,
    name: String,
    author_id: i32,
) -> async_graphql::Result<Book> {
    check(validation::validate_name(&name))?;
    let mut store = lock_store(ctx)?;
    Ok(store.append(model::Book::new(0, name, author_id)).clone().into())
}

fn insert_author(ctx: &Context<'_>, name: String) -> async_graphql::Result<Author> {
    check(validation::validate_name(&name))?;
    let mut store = lock_store(ctx)?;
    Ok(store.append(model::Author::new(0, name)).clone().into())
}

fn remove<E: Stored>(ctx: &Context<'_>, id: i32) -> async_graphql::Result<E> {
    let mut store = lock_store(ctx)?;
    store
        .remove_first_matching::<E>(id)
        .ok_or_else(|| not_found::<E>(id))
}

fn apply_book_update(
    ctx: &Context<'_>,
    id: i32,
    name: String,
    author_id: i32,
) -> async_graphql::Result<Book> {
    check(validation::validate_name(&name))?;
    let mut store = lock_store(ctx)?;
    let book = store
        .find_by_id_mut::<model::Book>(id)
        .ok_or_else(|| not_found::<model::Book>(id))?;
    book.name = name;
    book.author_id = author_id;
    tracing::info!(id, name = %book.name, author_id, "Updated book");
    Ok(book.clone().into())
}

fn apply_author_update(
    ctx: &Context<'_>,
    id: i32,
    name: String,
) -> async_graphql::Result<Author> {
    check(validation::validate_name(&name))?;
    let mut store = lock_store(ctx)?;
    let author = store
        .find_by_id_mut::<model::Author>(id)
        .ok_or_else(|| not_found::<model::Author>(id))?;
    author.name = name;
    tracing::info!(id, name = %author.name, "Updated author");
    Ok(author.clone().into())
}

pub struct MutationRoot;

// Results are nullable so a failed mutation only nulls its own field.
/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The name of the book")] name: String,
        #[graphql(desc = "The author ID of the book")] author_id: i32,
    ) -> Option<Book> {
        null_on_error(ctx, insert_book(ctx, name, author_id))
    }

    /// Add an author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The name of the author")] name: String,
    ) -> Option<Author> {
        null_on_error(ctx, insert_author(ctx, name))
    }

    /// Delete a book
    async fn delete_book(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The book ID")] id: i32,
    ) -> Option<Book> {
        null_on_error(ctx, remove::<model::Book>(ctx, id)).map(Book)
    }

    /// Delete an author
    async fn delete_author(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The author ID")] id: i32,
    ) -> Option<Author> {
        null_on_error(ctx, remove::<model::Author>(ctx, id)).map(Author)
    }

    /// Update a book
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The book ID")] id: i32,
        #[graphql(desc = "The name of the book")] name: String,
        #[graphql(desc = "The author ID of the book")] author_id: i32,
    ) -> Option<Book> {
        null_on_error(ctx, apply_book_update(ctx, id, name, author_id))
    }

    /// Update an author
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The author ID")] id: i32,
        #[graphql(desc = "The name of the author")] name: String,
    ) -> Option<Author> {
        null_on_error(ctx, apply_author_update(ctx, id, name))
    }
}
