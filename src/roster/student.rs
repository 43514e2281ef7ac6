//! Student record types.

use serde::{Deserialize, Serialize};

/// A stored student record.
///
/// The `id` is assigned by the store and immutable for the lifetime of
/// the record. There is no public way to construct a `Student` from an
/// externally supplied id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub email: String,
}

/// Inbound student fields for create and update requests.
///
/// Deliberately carries no `id` field: any id a client sends in a request
/// body is dropped at deserialization, so store-assigned ids are enforced
/// structurally rather than by convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub age: u32,
    pub email: String,
}

impl Student {
    /// Attach a store-assigned id to a draft.
    pub(crate) fn from_draft(id: String, draft: StudentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            age: draft.age,
            email: draft.email,
        }
    }

    /// One-sentence description used by the summary endpoint.
    ///
    /// Placeholder for a future enrichment step; today it is a fixed
    /// template over the three client-visible fields.
    pub fn summary(&self) -> String {
        format!(
            "Student {}, aged {}, has email {}.",
            self.name, self.age, self.email
        )
    }
}
