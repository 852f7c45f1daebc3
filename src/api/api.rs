use actix_web::{get, post, web, HttpResponse};
use serde_json::json;

use crate::domain::command::{
    CompleteTodoCommand, CreateTodoCommand, DeleteTodoCommand, UpdateTodoCommand,
};
use crate::domain::readmodel::{FetchTodoDetailsReadModel, FetchUserTodosReadModel};
use crate::error::TodoError;
use crate::models::todo::{
    CompleteTodoRequest, CreateTodoRequest, DeleteTodoRequest, UpdateTodoRequest,
};
use crate::repository::database::Database;

#[post("/create-todo")]
pub async fn create_todo(
    db: web::Data<Database>,
    body: web::Json<CreateTodoRequest>,
) -> Result<HttpResponse, TodoError> {
    let todo = CreateTodoCommand::execute(db.get_ref(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(todo))
}

#[post("/update-todo")]
pub async fn update_todo(
    db: web::Data<Database>,
    body: web::Json<UpdateTodoRequest>,
) -> Result<HttpResponse, TodoError> {
    let todo = UpdateTodoCommand::execute(db.get_ref(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(todo))
}

#[post("/complete-todo")]
pub async fn complete_todo(
    db: web::Data<Database>,
    body: web::Json<CompleteTodoRequest>,
) -> Result<HttpResponse, TodoError> {
    let todo = CompleteTodoCommand::execute(db.get_ref(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(todo))
}

#[post("/delete-todo")]
pub async fn delete_todo(
    db: web::Data<Database>,
    body: web::Json<DeleteTodoRequest>,
) -> Result<HttpResponse, TodoError> {
    let body = body.into_inner();
    if body.deletion_reason.as_deref().map_or(true, str::is_empty) {
        return Err(TodoError::Validation("deletionReason is required.".to_string()));
    }

    if DeleteTodoCommand::execute(db.get_ref(), body)? {
        Ok(HttpResponse::Ok().json(json!({ "message": "Todo deleted successfully." })))
    } else {
        Err(TodoError::Validation("Failed to delete Todo.".to_string()))
    }
}

#[get("/fetch-user-todos")]
pub async fn fetch_user_todos(db: web::Data<Database>) -> Result<HttpResponse, TodoError> {
    let todos = FetchUserTodosReadModel::query(db.get_ref())?;
    Ok(HttpResponse::Ok().json(todos))
}

#[get("/fetch-todo-details")]
pub async fn fetch_todo_details(db: web::Data<Database>) -> Result<HttpResponse, TodoError> {
    let todos = FetchTodoDetailsReadModel::query(db.get_ref())?;
    Ok(HttpResponse::Ok().json(todos))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(create_todo)
            .service(update_todo)
            .service(complete_todo)
            .service(delete_todo)
            .service(fetch_user_todos)
            .service(fetch_todo_details),
    );
}
