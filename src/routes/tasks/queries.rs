use sqlx::{Connection, PgConnection, Result};

use super::model::Task;

pub async fn list_tasks(conn: &mut PgConnection) -> Result<Vec<Task>> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, titulo, descricao, concluida, data_criacao
        FROM tarefas
        ORDER BY data_criacao DESC
        "#,
    )
    .fetch_all(conn)
    .await
}

pub async fn get_task(conn: &mut PgConnection, id: i32) -> Result<Option<Task>> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, titulo, descricao, concluida, data_criacao
        FROM tarefas
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

// Mutations run inside a transaction; an early return drops it uncommitted,
// which rolls back.
pub async fn insert_task(conn: &mut PgConnection, titulo: &str, descricao: Option<&str>) -> Result<()> {
    let mut tx = conn.begin().await?;

    sqlx::query("INSERT INTO tarefas (titulo, descricao) VALUES ($1, $2)")
        .bind(titulo)
        .bind(descricao)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}

pub async fn update_task(
    conn: &mut PgConnection,
    id: i32,
    titulo: &str,
    descricao: Option<&str>,
    concluida: bool,
) -> Result<()> {
    let mut tx = conn.begin().await?;

    sqlx::query(
        r#"
        UPDATE tarefas
        SET titulo = $1, descricao = $2, concluida = $3
        WHERE id = $4
        "#,
    )
    .bind(titulo)
    .bind(descricao)
    .bind(concluida)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await
}

pub async fn delete_task(conn: &mut PgConnection, id: i32) -> Result<()> {
    let mut tx = conn.begin().await?;

    sqlx::query("DELETE FROM tarefas WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}
