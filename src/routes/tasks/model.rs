use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A row of the `tarefas` table. Field names match the column names, which
/// are part of the form contract and kept in Portuguese.
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: i32,
    pub titulo: String,
    pub descricao: Option<String>,
    pub concluida: bool,
    pub data_criacao: NaiveDateTime,
}
