//! In-memory storage for authors and books.
//!
//! Nothing here touches disk except [`load_seed_file`], which reads an
//! optional YAML dataset once at startup. The store itself lives for the
//! lifetime of the process and is dropped with it.
//!
//! ## Seed file format
//!
//! ```yaml
//! authors:
//!   - id: 1
//!     name: J. K. Rowling
//! books:
//!   - id: 1
//!     name: Harry Potter and the Chamber of Secrets
//!     authorId: 1
//! ```
//!
//! ## Components
//!
//! - [`EntityStore`]: the two ordered collections and their primitive operations
//! - [`SharedStore`]: the store behind the single mutex used by the server
//! - [`IdPolicy`]: how `append` picks the id of a new record
//! - [`builtin_seed`] / [`parse_seed`]: initial datasets

mod id_policy;
mod seed;
mod store;

pub use id_policy::IdPolicy;
pub use seed::{Seed, builtin_seed, load_seed_file, parse_seed};
pub use store::{Collection, EntityStore, SharedStore, Stored};
