use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::model::EntityKind;

#[derive(Error, Debug)]
pub enum BookqlError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: i32 },

    #[error("{kind}.{field} is non-null but no value was provided")]
    Nullability { kind: EntityKind, field: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BookqlError {
    /// Machine-readable code reported in `extensions.code` of a GraphQL error.
    pub fn code(&self) -> &'static str {
        match self {
            BookqlError::Validation(_) => "VALIDATION",
            BookqlError::NotFound { .. } => "NOT_FOUND",
            BookqlError::Nullability { .. } => "NULLABILITY",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for BookqlError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let BookqlError::NotFound { kind, id } = self {
                e.set("kind", kind.as_str());
                e.set("id", *id);
            }
        })
    }
}

pub type Result<T> = std::result::Result<T, BookqlError>;
