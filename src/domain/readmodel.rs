use serde_json::Value;

use crate::domain::command::TODO_KIND;
use crate::error::TodoError;
use crate::repository::database::RecordStore;

/// Lists every stored todo in full serialized form. An empty store yields an
/// empty list, never an error.
pub struct FetchUserTodosReadModel;

impl FetchUserTodosReadModel {
    pub fn query(store: &dyn RecordStore) -> Result<Vec<Value>, TodoError> {
        Ok(store.find_all(TODO_KIND)?)
    }
}

/// Same contract as [`FetchUserTodosReadModel`]: the details endpoint takes no
/// parameters, so it returns the full list rather than a single projection.
pub struct FetchTodoDetailsReadModel;

impl FetchTodoDetailsReadModel {
    pub fn query(store: &dyn RecordStore) -> Result<Vec<Value>, TodoError> {
        Ok(store.find_all(TODO_KIND)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::command::CreateTodoCommand;
    use crate::repository::database::Database;
    use serde_json::json;

    #[test]
    fn empty_store_yields_an_empty_list() {
        let db = Database::new();
        assert!(FetchUserTodosReadModel::query(&db).unwrap().is_empty());
        assert!(FetchTodoDetailsReadModel::query(&db).unwrap().is_empty());
    }

    #[test]
    fn every_created_todo_shows_up_in_full_form() {
        let db = Database::new();
        let created = CreateTodoCommand::execute(
            &db,
            serde_json::from_value(json!({"todoTitle": "Buy groceries", "dueDate": "2023-10-15"}))
                .unwrap(),
        )
        .unwrap();

        let todos = FetchUserTodosReadModel::query(&db).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0]["todoID"], created["todoID"]);
        assert_eq!(todos[0]["todoTitle"], "Buy groceries");
        assert_eq!(todos[0]["dueDate"], "2023-10-15");
        assert!(todos[0]["completionDate"].is_null());
    }

    #[test]
    fn both_read_models_agree() {
        let db = Database::new();
        CreateTodoCommand::execute(
            &db,
            serde_json::from_value(json!({"todoTitle": "Buy groceries"})).unwrap(),
        )
        .unwrap();

        let user_todos = FetchUserTodosReadModel::query(&db).unwrap();
        let details = FetchTodoDetailsReadModel::query(&db).unwrap();
        assert_eq!(user_todos, details);
    }
}
