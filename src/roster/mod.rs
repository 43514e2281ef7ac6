//! # Student Roster Module
//!
//! The domain core: record types, the field-constraint validation
//! boundary, and the in-memory Record Store.
//!
//! Every record that reaches the store has already passed the validation
//! boundary; the store itself never re-validates.

pub mod errors;
pub mod store;
pub mod student;
pub mod validator;

pub use errors::{FieldViolation, RosterError, RosterResult};
pub use store::RosterStore;
pub use student::{Student, StudentDraft};
