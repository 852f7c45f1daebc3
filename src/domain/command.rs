use serde_json::Value;

use crate::error::TodoError;
use crate::models::todo::{
    CompleteTodoRequest, CreateTodoRequest, DeleteTodoRequest, Todo, TodoFields, UpdateTodoRequest,
};
use crate::repository::database::RecordStore;

/// Record kind all todos live under in the store.
pub const TODO_KIND: &str = "Todo";

fn load_todo(store: &dyn RecordStore, todo_id: &str) -> Result<Todo, TodoError> {
    let record = store
        .find_by_id(TODO_KIND, todo_id)?
        .ok_or_else(|| TodoError::NotFound(todo_id.to_string()))?;
    Todo::from_record(record)
}

/// Creates a todo with a freshly generated id. Completion fields are always
/// absent on a new todo, whatever the caller sends.
pub struct CreateTodoCommand;

impl CreateTodoCommand {
    pub fn execute(store: &dyn RecordStore, input: CreateTodoRequest) -> Result<Value, TodoError> {
        let todo = Todo::new(TodoFields {
            todo_title: input.todo_title,
            description: input.description,
            due_date: input.due_date,
            priority_level: input.priority_level,
            category: input.category,
            tags: input.tags,
            ..TodoFields::default()
        })?;

        let record = store.insert(TODO_KIND, todo.to_record())?;
        Ok(record)
    }
}

/// Partial update: only fields present in the request overwrite the stored
/// todo; everything else keeps its prior value.
pub struct UpdateTodoCommand;

impl UpdateTodoCommand {
    pub fn execute(store: &dyn RecordStore, input: UpdateTodoRequest) -> Result<Value, TodoError> {
        let mut todo = load_todo(store, &input.todo_id)?;

        if let Some(title) = input.new_title {
            todo.todo_title = title;
        }
        if let Some(description) = input.new_description {
            todo.description = description;
        }
        if let Some(due_date) = input.new_due_date {
            todo.due_date = due_date;
        }
        if let Some(priority_level) = input.new_priority_level {
            todo.priority_level = priority_level;
        }
        if let Some(category) = input.new_category {
            todo.category = category;
        }
        if let Some(tags) = input.new_tags {
            todo.tags = tags;
        }

        let record = store.update(TODO_KIND, &todo.todo_id, todo.to_record())?;
        Ok(record)
    }
}

/// Overwrites both completion fields with whatever was supplied. Omitted
/// values clear the field; there is no guard against re-completing and no
/// inverse operation at this layer.
pub struct CompleteTodoCommand;

impl CompleteTodoCommand {
    pub fn execute(store: &dyn RecordStore, input: CompleteTodoRequest) -> Result<Value, TodoError> {
        let mut todo = load_todo(store, &input.todo_id)?;

        todo.completion_date = input.completion_date;
        todo.completion_notes = input.completion_notes;

        let record = store.update(TODO_KIND, &todo.todo_id, todo.to_record())?;
        Ok(record)
    }
}

/// Removes a todo. The deletion reason is call context only; it is logged,
/// not persisted.
pub struct DeleteTodoCommand;

impl DeleteTodoCommand {
    pub fn execute(store: &dyn RecordStore, input: DeleteTodoRequest) -> Result<bool, TodoError> {
        store
            .find_by_id(TODO_KIND, &input.todo_id)?
            .ok_or_else(|| TodoError::NotFound(input.todo_id.clone()))?;

        if let Some(reason) = &input.deletion_reason {
            tracing::info!(todo_id = %input.todo_id, reason = %reason, "deleting todo");
        }

        Ok(store.remove(TODO_KIND, &input.todo_id)?)
    }
}
