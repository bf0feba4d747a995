//! GraphQL schema and resolvers for bookql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on http://127.0.0.1:3000/graphql)
//! bookql serve --port 3000
//!
//! # Execute a query from the CLI
//! bookql query '{ book(id: 1) { name author { name } } }'
//!
//! # Execute a mutation from the CLI
//! bookql mutate 'addBook(name: "The Hobbit", authorId: 2) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Types**: `Book` (`id`, `name`, `authorId`, `author`), `Author` (`id`, `name`, `books`)
//! - **Queries**: `book`, `author`, `books`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`, `deleteBook`, `deleteAuthor`, `updateBook`, `updateAuthor`
//!
//! Every resolver takes the store lock for the duration of its own body only,
//! so one mutation completes before any other field can observe the store.

pub mod relations;
mod schema;
mod server;
mod types;

pub use schema::{BookqlSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{router, run_server};
pub use types::*;
