use crate::commands::{CmdMessage, CmdResult, DisplayStudent};
use crate::error::{ClassworkError, Result};
use crate::store::RosterStore;
use crate::students::{Student, StudentsList};

fn load_list<S: RosterStore>(store: &S) -> Result<StudentsList> {
    let mut list = StudentsList::new();
    list.load(store)?;
    Ok(list)
}

pub fn add<S: RosterStore>(store: &mut S, student: Student) -> Result<CmdResult> {
    let mut list = load_list(store)?;
    let message = format!("Added {}", student.full_name());
    list.add(student.clone());
    list.store(store)?;

    let mut result = CmdResult::default().with_listed_students(vec![DisplayStudent {
        index: list.count(),
        student,
    }]);
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

pub fn list<S: RosterStore>(store: &S) -> Result<CmdResult> {
    let list = load_list(store)?;
    let listed = list
        .iter()
        .enumerate()
        .map(|(i, student)| DisplayStudent {
            index: i + 1,
            student: student.clone(),
        })
        .collect::<Vec<_>>();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No students yet."));
    } else {
        result.add_message(CmdMessage::info(format!("Total students: {}", listed.len())));
    }
    Ok(result.with_listed_students(listed))
}

/// `index` is 1-based, as printed by [`list`].
pub fn show<S: RosterStore>(store: &S, index: usize) -> Result<CmdResult> {
    let list = load_list(store)?;
    let student = index
        .checked_sub(1)
        .and_then(|i| list.get(i))
        .cloned()
        .ok_or_else(|| {
            ClassworkError::Api(format!(
                "Student {} not found (roster has {})",
                index,
                list.count()
            ))
        })?;

    Ok(CmdResult::default().with_listed_students(vec![DisplayStudent { index, student }]))
}
