//! # Student Roster
//!
//! [`Student`] is a plain record with chainable setters. [`StudentsList`]
//! keeps students in insertion order and persists through any
//! [`RosterStore`](crate::store::RosterStore): a JSON file in production,
//! memory in tests.

use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::RosterStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub surname: String,
    pub name: String,
    pub faculty: String,
    pub course: u8,
    pub group: String,
}

impl Student {
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        faculty: impl Into<String>,
        course: u8,
        group: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            faculty: faculty.into(),
            course,
            group: group.into(),
        }
    }

    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty = faculty.into();
        self
    }

    pub fn with_course(mut self, course: u8) -> Self {
        self.course = course;
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.surname, self.name)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Фамилия: {}", self.surname)?;
        writeln!(f, "Имя: {}", self.name)?;
        writeln!(f, "Факультет: {}", self.faculty)?;
        writeln!(f, "Курс: {}", self.course)?;
        writeln!(f, "Группа: {}", self.group)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentsList {
    students: Vec<Student>,
}

impl StudentsList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn count(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// 0-based lookup.
    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn store<S: RosterStore>(&self, store: &mut S) -> Result<()> {
        store.save_students(&self.students)?;
        debug!(count = self.students.len(), "stored roster");
        Ok(())
    }

    /// Replaces the current contents with whatever `store` holds.
    pub fn load<S: RosterStore>(&mut self, store: &S) -> Result<()> {
        self.students = store.load_students()?;
        debug!(count = self.students.len(), "loaded roster");
        Ok(())
    }

    pub fn store_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.store(&mut FileStore::new(path.as_ref()))
    }

    pub fn load_from<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.load(&FileStore::new(path.as_ref()))
    }
}

impl From<Vec<Student>> for StudentsList {
    fn from(students: Vec<Student>) -> Self {
        Self { students }
    }
}

impl<'a> IntoIterator for &'a StudentsList {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}
