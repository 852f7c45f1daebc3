use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{StoreError, TodoError};

/// A single todo item. Field names on the wire follow the public API
/// (`todoID`, `todoTitle`, ...); the storage representation is the same shape
/// plus an `id` key mirroring `todoID` as the store's primary key.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(rename = "todoID")]
    pub todo_id: String,
    pub todo_title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority_level: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub completion_notes: Option<String>,
}

/// Field set accepted by [`Todo::new`]. Everything defaults to absent; an
/// absent `todo_id` gets a freshly generated one.
#[derive(Debug, Default, Clone)]
pub struct TodoFields {
    pub todo_id: Option<String>,
    pub todo_title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority_level: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub completion_notes: Option<String>,
}

impl Todo {
    /// Builds a todo, enforcing the one construction invariant: a non-empty
    /// title.
    pub fn new(fields: TodoFields) -> Result<Self, TodoError> {
        let todo_title = match fields.todo_title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(TodoError::Validation("Todo Title is required".to_string())),
        };

        Ok(Todo {
            todo_id: fields
                .todo_id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            todo_title,
            description: fields.description,
            due_date: fields.due_date,
            priority_level: fields.priority_level,
            category: fields.category,
            tags: fields.tags,
            completion_date: fields.completion_date,
            completion_notes: fields.completion_notes,
        })
    }

    /// Completion is derived from the presence of a completion date, never
    /// stored as a separate flag.
    pub fn completed(&self) -> bool {
        self.completion_date.is_some()
    }

    /// Storage representation: every attribute plus the `id` primary key.
    /// Doubles as the HTTP response body.
    pub fn to_record(&self) -> Value {
        let mut record = serde_json::to_value(self).expect("Todo always serializes to JSON");
        if let Value::Object(map) = &mut record {
            map.insert("id".to_string(), Value::String(self.todo_id.clone()));
        }
        record
    }

    pub fn from_record(record: Value) -> Result<Self, TodoError> {
        serde_json::from_value(record)
            .map_err(|err| TodoError::Store(StoreError::Malformed(err.to_string())))
    }
}

/// Deserializes a field so that "absent", "null" and "value" stay
/// distinguishable: absent leaves the outer `Option` as `None` (via
/// `#[serde(default)]`), an explicit `null` becomes `Some(None)`, and a value
/// becomes `Some(Some(v))`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub todo_title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority_level: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
}

/// Partial update: only fields present in the request body are applied to the
/// stored todo. An explicit empty string sets a field to empty; an explicit
/// `null` clears it; omitting the field leaves it untouched.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(rename = "todoID")]
    pub todo_id: String,
    #[serde(default)]
    pub new_title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub new_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub new_due_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub new_priority_level: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub new_category: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub new_tags: Option<Option<String>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTodoRequest {
    #[serde(rename = "todoID")]
    pub todo_id: String,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub completion_notes: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTodoRequest {
    #[serde(rename = "todoID")]
    pub todo_id: String,
    #[serde(default)]
    pub deletion_reason: Option<String>,
}
