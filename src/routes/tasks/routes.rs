use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use sqlx::pool::PoolConnection;
use sqlx::Postgres;
use tracing::error;

use crate::state::AppState;

use super::dto::{CreateTaskForm, UpdateTaskForm};
use super::queries;
use super::views::{EditTemplate, IndexTemplate};

const DB_UNAVAILABLE: &str = "Failed to connect to the database.";

// Every handler checks out its own connection and the checkout is returned
// to the pool when it goes out of scope, on success and failure alike.
async fn checkout(state: &AppState) -> Result<PoolConnection<Postgres>, Response> {
    match state.db.acquire().await {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("could not check out a database connection: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, DB_UNAVAILABLE).into_response())
        }
    }
}

/// Render the task list, newest first.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut conn = match checkout(&state).await {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    let tarefas = match queries::list_tasks(&mut conn).await {
        Ok(tarefas) => tarefas,
        Err(e) => {
            error!("failed to list tasks: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load tasks.").into_response();
        }
    };

    render(IndexTemplate { tarefas })
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateTaskForm>,
) -> impl IntoResponse {
    let mut conn = match checkout(&state).await {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    // A failed insert is logged and swallowed; the browser is sent back to
    // the list either way.
    if let Err(e) = queries::insert_task(&mut conn, &form.titulo, form.descricao.as_deref()).await {
        error!("failed to insert task: {}", e);
    }

    Redirect::to("/").into_response()
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let mut conn = match checkout(&state).await {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    if let Err(e) = queries::delete_task(&mut conn, id).await {
        error!("failed to delete task {}: {}", id, e);
    }

    Redirect::to("/").into_response()
}

/// Show the edit form for one task; unknown ids go back to the list.
pub async fn edit_form(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let mut conn = match checkout(&state).await {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    match queries::get_task(&mut conn, id).await {
        Ok(Some(tarefa)) => render(EditTemplate { tarefa }),
        Ok(None) => Redirect::to("/").into_response(),
        Err(e) => {
            error!("failed to fetch task {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load the task.").into_response()
        }
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<UpdateTaskForm>,
) -> impl IntoResponse {
    let mut conn = match checkout(&state).await {
        Ok(conn) => conn,
        Err(response) => return response,
    };

    let result = queries::update_task(
        &mut conn,
        id,
        &form.titulo,
        form.descricao.as_deref(),
        form.is_concluida(),
    )
    .await;

    if let Err(e) = result {
        error!("failed to update task {}: {}", id, e);
    }

    Redirect::to("/").into_response()
}

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render the page.").into_response()
        }
    }
}
