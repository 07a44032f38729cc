use std::collections::BTreeMap;

/// Row index into the source data. Stable across renders of the same rows.
pub type AuthorId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub fields: BTreeMap<String, String>,
    pub affiliation: Option<String>,
    pub removed: bool,
    pub duplicate: bool,
}

impl Author {
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn group(&self) -> Group {
        if self.removed {
            Group::Removed
        } else {
            Group::Included
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrangedAuthors {
    pub authors: Vec<Author>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Included,
    Removed,
}

impl Group {
    pub fn label(self) -> &'static str {
        match self {
            Group::Included => "Included",
            Group::Removed => "Removed",
        }
    }
}

/// A drag of one author into a group, optionally dropped at a position within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub author_id: AuthorId,
    pub from: Group,
    pub to: Group,
    pub index: Option<usize>,
}
