//! Request normalization.
//!
//! Turns an arbitrary untyped payload into a canonical [`PlanRequest`].
//! Apart from the identity check, nothing here can fail: missing or
//! malformed fields degrade to defaults instead of rejecting the call.

use serde_json::Value;

use super::PlanError;
use crate::api::auth::AuthUser;

/// A single task, already coerced and trimmed. Identity is positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub title: String,
    pub description: String,
    pub status: String,
    pub deadline: String,
}

/// Canonical plan request, built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub tasks: Vec<TaskSpec>,
    pub date_label: String,
}

/// Normalize a raw payload into a [`PlanRequest`].
///
/// # Errors
///
/// `Unauthenticated` when no caller identity is present. This is the only
/// possible failure; field irregularities all degrade to defaults.
pub fn normalize_request(
    user: Option<&AuthUser>,
    payload: &Value,
) -> Result<PlanRequest, PlanError> {
    if user.is_none() {
        return Err(PlanError::unauthenticated("You must be signed in."));
    }

    let tasks = payload
        .get("tasks")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(task_from_value).collect())
        .unwrap_or_default();

    let date_label = payload
        .get("dateLabel")
        .and_then(Value::as_str)
        .unwrap_or("today")
        .to_string();

    Ok(PlanRequest { tasks, date_label })
}

/// A non-object element yields a task with every field empty.
fn task_from_value(value: &Value) -> TaskSpec {
    TaskSpec {
        title: field_string(value, "title"),
        description: field_string(value, "description"),
        status: field_string(value, "status"),
        deadline: field_string(value, "deadline"),
    }
}

/// Coerce a field to its string representation and trim it.
///
/// Missing and null both collapse to the empty string; strings pass through
/// verbatim, scalars via their display form, containers via their JSON text.
fn field_string(value: &Value, key: &str) -> String {
    let coerced = match value.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    };
    coerced.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> AuthUser {
        AuthUser {
            id: "tester".to_string(),
        }
    }

    #[test]
    fn test_missing_identity_is_unauthenticated() {
        let error = normalize_request(None, &json!({"tasks": []})).unwrap_err();
        assert_eq!(error.code(), "unauthenticated");
        assert_eq!(error.to_string(), "You must be signed in.");
    }

    #[test]
    fn test_missing_tasks_defaults_to_empty() {
        let request = normalize_request(Some(&user()), &json!({})).unwrap();
        assert!(request.tasks.is_empty());
        assert_eq!(request.date_label, "today");
    }

    #[test]
    fn test_non_array_tasks_defaults_to_empty() {
        for payload in [
            json!({"tasks": "gym"}),
            json!({"tasks": 7}),
            json!({"tasks": {"title": "gym"}}),
            Value::Null,
        ] {
            let request = normalize_request(Some(&user()), &payload).unwrap();
            assert!(request.tasks.is_empty(), "payload: {}", payload);
        }
    }

    #[test]
    fn test_non_string_date_label_defaults_to_today() {
        let request = normalize_request(Some(&user()), &json!({"dateLabel": 42})).unwrap();
        assert_eq!(request.date_label, "today");

        let request =
            normalize_request(Some(&user()), &json!({"dateLabel": "Monday"})).unwrap();
        assert_eq!(request.date_label, "Monday");
    }

    #[test]
    fn test_fields_are_coerced_and_trimmed() {
        let payload = json!({
            "tasks": [{
                "title": "  Gym  ",
                "description": 42,
                "status": true,
                "deadline": null,
            }]
        });
        let request = normalize_request(Some(&user()), &payload).unwrap();
        assert_eq!(
            request.tasks,
            vec![TaskSpec {
                title: "Gym".to_string(),
                description: "42".to_string(),
                status: "true".to_string(),
                deadline: String::new(),
            }]
        );
    }

    #[test]
    fn test_non_object_task_yields_empty_fields() {
        let request =
            normalize_request(Some(&user()), &json!({"tasks": ["gym", 3, null]})).unwrap();
        assert_eq!(request.tasks.len(), 3);
        for task in &request.tasks {
            assert!(task.title.is_empty());
            assert!(task.deadline.is_empty());
        }
    }

    #[test]
    fn test_input_order_is_preserved() {
        let payload = json!({
            "tasks": [{"title": "a"}, {"title": "b"}, {"title": "c"}]
        });
        let request = normalize_request(Some(&user()), &payload).unwrap();
        let titles: Vec<_> = request.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }
}
