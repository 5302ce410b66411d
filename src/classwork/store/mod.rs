//! # Storage Layer
//!
//! Roster persistence sits behind the [`RosterStore`] trait so the roster and
//! the commands never touch the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file holding the whole roster as an array
//!   (`students.db` by default). A missing file reads as an empty roster.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! Stores save and load the full list at once; the roster is small and the
//! order of students is part of its meaning.

use crate::error::Result;
use crate::students::Student;

pub mod fs;
pub mod memory;

/// Abstract interface for roster storage.
pub trait RosterStore {
    /// Replace the stored roster with `students`, keeping their order
    fn save_students(&mut self, students: &[Student]) -> Result<()>;

    /// Read the stored roster; empty when nothing was saved yet
    fn load_students(&self) -> Result<Vec<Student>>;
}
