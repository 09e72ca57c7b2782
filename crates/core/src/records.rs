//! Indexed record types
//!
//! Callers push complete snapshots of these records into the engine. The
//! engine keeps its own copy and never mutates caller data.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// RecordKind
// ============================================================================

/// The two record kinds held by the engine
///
/// Each kind owns its own namespace in the inverted index, so a folder token
/// and a content token never collide even when spelled identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Content item (note, bookmark, todo)
    Content,
    /// Folder
    Folder,
}

impl RecordKind {
    /// All kinds, in index order
    pub const ALL: [RecordKind; 2] = [RecordKind::Content, RecordKind::Folder];

    /// Namespace name used in index keys
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Content => "content",
            RecordKind::Folder => "folder",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FolderRecord
// ============================================================================

/// A folder as seen by the search engine
///
/// Indexed fields: `name`, `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    /// Unique, stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FolderRecord {
    /// Create a folder with no description
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        FolderRecord {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ============================================================================
// ContentRecord
// ============================================================================

/// A content item as seen by the search engine
///
/// Indexed fields: `title`, `body`, and each tag.
/// `folder_id` is a foreign key that is never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// Unique identifier
    pub id: String,
    /// Owning folder
    pub folder_id: String,
    /// Title
    pub title: String,
    /// Long free text
    pub body: String,
    /// Short labels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ContentRecord {
    /// Create a content item with no tags
    pub fn new(
        id: impl Into<String>,
        folder_id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        ContentRecord {
            id: id.into(),
            folder_id: folder_id.into(),
            title: title.into(),
            body: body.into(),
            tags: vec![],
        }
    }

    /// Builder: set tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
