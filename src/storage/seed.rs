use crate::{
    error::{BookqlError, Result},
    model::{Author, Book, EntityKind},
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Initial contents of the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Seed {
    pub authors: Vec<Author>,
    pub books: Vec<Book>,
}

pub fn builtin_seed() -> Seed {
    let authors = vec![
        Author::new(1, "J. K. Rowling"),
        Author::new(2, "J. R. R. Tolkien"),
        Author::new(3, "Brent Weeks"),
    ];
    let books = vec![
        Book::new(1, "Harry Potter and the Chamber of Secrets", 1),
        Book::new(2, "Harry Potter and the Prisoner of Azkaban", 1),
        Book::new(3, "Harry Potter and the Goblet of Fire", 1),
        Book::new(4, "The Fellowship of the Ring", 2),
        Book::new(5, "The Two Towers", 2),
        Book::new(6, "The Return of the King", 2),
        Book::new(7, "The Way of Shadows", 3),
        Book::new(8, "Beyond the Shadows", 3),
    ];
    Seed { authors, books }
}

// Every field is optional here so a missing one surfaces as a nullability
// error naming the field instead of a generic YAML error.
#[derive(Debug, Default, Deserialize)]
struct SeedFile {
    #[serde(default)]
    authors: Vec<AuthorRecord>,
    #[serde(default)]
    books: Vec<BookRecord>,
}

#[derive(Debug, Deserialize)]
struct AuthorRecord {
    id: Option<i32>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BookRecord {
    id: Option<i32>,
    name: Option<String>,
    #[serde(rename = "authorId", alias = "author_id")]
    author_id: Option<i32>,
}

fn required<T>(value: Option<T>, kind: EntityKind, field: &'static str) -> Result<T> {
    value.ok_or(BookqlError::Nullability { kind, field })
}

fn check_unique(ids: impl Iterator<Item = i32>, kind: EntityKind) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(BookqlError::Validation(format!(
                "Duplicate {} id {} in seed data",
                kind, id
            )));
        }
    }
    Ok(())
}

/// Parses a YAML seed document.
pub fn parse_seed(content: &str) -> Result<Seed> {
    let file: Option<SeedFile> = serde_yaml::from_str(content)?;
    let file = file.unwrap_or_default();

    let authors = file
        .authors
        .into_iter()
        .map(|r| -> Result<Author> {
            Ok(Author {
                id: required(r.id, EntityKind::Author, "id")?,
                name: required(r.name, EntityKind::Author, "name")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let books = file
        .books
        .into_iter()
        .map(|r| -> Result<Book> {
            Ok(Book {
                id: required(r.id, EntityKind::Book, "id")?,
                name: required(r.name, EntityKind::Book, "name")?,
                author_id: required(r.author_id, EntityKind::Book, "authorId")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    check_unique(authors.iter().map(|a| a.id), EntityKind::Author)?;
    check_unique(books.iter().map(|b| b.id), EntityKind::Book)?;

    Ok(Seed { authors, books })
}

pub fn load_seed_file(path: &Path) -> Result<Seed> {
    tracing::debug!(path = %path.display(), "Loading seed file");
    let content = std::fs::read_to_string(path)?;
    parse_seed(&content)
}
