use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub name: String,

    /// Not checked against the author collection; a book may point at nobody.
    pub author_id: i32,
}

impl Book {
    pub fn new(id: i32, name: impl Into<String>, author_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }

    pub fn is_written_by(&self, author_id: i32) -> bool {
        self.author_id == author_id
    }
}

impl Entity for Book {
    const KIND: EntityKind = EntityKind::Book;

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
