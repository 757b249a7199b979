use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTaskForm {
    pub titulo: String,
    pub descricao: Option<String>,
}

/// Payload of the edit form. `concluida` is an HTML checkbox, and browsers
/// omit unchecked checkboxes from the submitted body entirely, so the field
/// is meaningful by presence rather than by value.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskForm {
    pub titulo: String,
    pub descricao: Option<String>,
    pub concluida: Option<String>,
}

impl UpdateTaskForm {
    /// True iff the checkbox key was submitted, whatever its value.
    pub fn is_concluida(&self) -> bool {
        self.concluida.is_some()
    }
}
