//! # bookql - an in-memory GraphQL service for books and their authors
//!
//! bookql keeps two ordered collections, authors and books, linked by each
//! book's `authorId`. It exposes them through a GraphQL schema with four
//! queries and six mutations, served over HTTP or run one document at a time
//! from the command line.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server with the built-in dataset
//! bookql serve
//!
//! # Run a single query
//! bookql query '{ authors { name books { name } } }'
//!
//! # Write a default config to tweak the id policy or seed file
//! bookql init
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and defaults
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (`Author`, `Book`)
//! - [`storage`]: The in-memory entity store
//! - [`validation`]: Argument validation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookql.yml` discovery and defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum transport.
pub mod graphql;

/// Data models for authors and books.
pub mod model;

/// In-memory storage layer.
pub mod storage;

/// Argument validation for queries and mutations.
pub mod validation;

/// Tracing subscriber setup for stderr and optional file logs.
pub mod logging;
