//! # Record Store
//!
//! The authoritative set of student records and the sole piece of
//! mutable state in the process.
//!
//! The store is constructed once at startup, seeded with three fixed
//! records, and shared into every handler behind an `Arc`. The interior
//! `RwLock` makes each operation a single atomic step over the mapping,
//! so concurrent callers can never observe a torn intermediate state.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use super::errors::{RosterError, RosterResult};
use super::student::{Student, StudentDraft};

/// The three records every fresh store starts with.
const SEED_STUDENTS: [(&str, u32, &str); 3] = [
    ("Alice Johnson", 21, "alice.johnson@example.com"),
    ("Bob Smith", 19, "bob.smith@example.com"),
    ("Carol White", 22, "carol.white@example.com"),
];

/// In-memory store mapping student id to record.
pub struct RosterStore {
    students: RwLock<HashMap<String, Student>>,
}

impl RosterStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            students: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-populated with the seed records, each under a
    /// freshly generated id.
    pub fn with_seed_data() -> Self {
        let mut students = HashMap::new();
        for (name, age, email) in SEED_STUDENTS {
            let id = Self::generate_id();
            let student = Student::from_draft(
                id.clone(),
                StudentDraft {
                    name: name.to_string(),
                    age,
                    email: email.to_string(),
                },
            );
            students.insert(id, student);
        }
        Self {
            students: RwLock::new(students),
        }
    }

    /// Generate a unique record id.
    ///
    /// Randomized, no ordering guarantee; collision probability over a
    /// process lifetime is negligible.
    fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Insert a validated draft under a new server-assigned id and
    /// return the stored record.
    pub fn insert(&self, draft: StudentDraft) -> RosterResult<Student> {
        let mut students = self.write_lock()?;
        let id = Self::generate_id();
        let student = Student::from_draft(id.clone(), draft);
        students.insert(id, student.clone());
        Ok(student)
    }

    /// Materialize a snapshot of every stored record.
    ///
    /// Mapping iteration order; callers must not depend on it.
    pub fn list_all(&self) -> RosterResult<Vec<Student>> {
        let students = self.read_lock()?;
        Ok(students.values().cloned().collect())
    }

    /// Point lookup by id.
    pub fn get(&self, id: &str) -> RosterResult<Student> {
        let students = self.read_lock()?;
        students.get(id).cloned().ok_or(RosterError::NotFound)
    }

    /// Overwrite all fields of an existing record except its id and
    /// return the new stored value.
    pub fn replace(&self, id: &str, draft: StudentDraft) -> RosterResult<Student> {
        let mut students = self.write_lock()?;
        if !students.contains_key(id) {
            return Err(RosterError::NotFound);
        }
        // Brand-new record value; the existing id is re-attached here.
        let student = Student::from_draft(id.to_string(), draft);
        students.insert(id.to_string(), student.clone());
        Ok(student)
    }

    /// Remove a record by id.
    pub fn delete(&self, id: &str) -> RosterResult<()> {
        let mut students = self.write_lock()?;
        students.remove(id).map(|_| ()).ok_or(RosterError::NotFound)
    }

    /// Number of stored records.
    pub fn len(&self) -> RosterResult<usize> {
        let students = self.read_lock()?;
        Ok(students.len())
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> RosterResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read_lock(&self) -> RosterResult<std::sync::RwLockReadGuard<'_, HashMap<String, Student>>> {
        self.students
            .read()
            .map_err(|_| RosterError::Internal("lock poisoned".to_string()))
    }

    fn write_lock(
        &self,
    ) -> RosterResult<std::sync::RwLockWriteGuard<'_, HashMap<String, Student>>> {
        self.students
            .write()
            .map_err(|_| RosterError::Internal("lock poisoned".to_string()))
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}
