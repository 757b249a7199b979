use askama::Template;

use super::model::Task;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub tarefas: Vec<Task>,
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub tarefa: Task,
}
