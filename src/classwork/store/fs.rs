use super::RosterStore;
use crate::error::{ClassworkError, Result};
use crate::students::Student;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ClassworkError::Io)?;
            }
        }
        Ok(())
    }
}

impl RosterStore for FileStore {
    fn save_students(&mut self, students: &[Student]) -> Result<()> {
        self.ensure_parent()?;
        let content =
            serde_json::to_string_pretty(students).map_err(ClassworkError::Serialization)?;
        fs::write(&self.path, content).map_err(ClassworkError::Io)?;
        debug!(path = %self.path.display(), count = students.len(), "wrote roster file");
        Ok(())
    }

    fn load_students(&self) -> Result<Vec<Student>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no roster file yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(ClassworkError::Io)?;
        let students: Vec<Student> =
            serde_json::from_str(&content).map_err(ClassworkError::Serialization)?;
        Ok(students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(surname: &str) -> Student {
        Student::new(surname, "Иван", "ФМиИТ", 2, "201")
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("students.db"));
        assert!(store.load_students().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("students.db"));
        let students = vec![student("Петров"), student("Алексеев")];

        store.save_students(&students).unwrap();
        assert_eq!(store.load_students().unwrap(), students);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("students.db");
        let mut store = FileStore::new(&path);

        store.save_students(&[student("Петров")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_overwrites_previous_roster() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("students.db"));
        store
            .save_students(&[student("Петров"), student("Сидоров")])
            .unwrap();
        store.save_students(&[student("Козлов")]).unwrap();

        let loaded = store.load_students().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].surname, "Козлов");
    }

    #[test]
    fn corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.db");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::new(&path).load_students().unwrap_err();
        assert!(matches!(err, ClassworkError::Serialization(_)));
    }
}
