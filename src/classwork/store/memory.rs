use super::RosterStore;
use crate::error::Result;
use crate::students::Student;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    students: Vec<Student>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the roster was saved.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl RosterStore for InMemoryStore {
    fn save_students(&mut self, students: &[Student]) -> Result<()> {
        self.students = students.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn load_students(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_students(mut self, count: usize) -> Self {
            let mut students = self.store.load_students().unwrap();
            for i in 0..count {
                students.push(Student::new(
                    format!("Студентов{}", i + 1),
                    "Тест",
                    "ФМиИТ",
                    1,
                    "101",
                ));
            }
            self.store.save_students(&students).unwrap();
            self
        }

        pub fn with_student(mut self, student: Student) -> Self {
            let mut students = self.store.load_students().unwrap();
            students.push(student);
            self.store.save_students(&students).unwrap();
            self
        }
    }
}
