//! Homework records and the validated API snapshot.

use serde_json::{Map, Value};

use crate::error::SchemaError;

/// One reviewed submission as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomeworkRecord {
    /// Submission name, usually the archive the student uploaded.
    pub name: String,

    /// Raw status string. See [`crate::HomeworkStatus`].
    pub status: String,

    /// Reviewer comment, empty when the API did not provide one.
    pub reviewer_comment: String,

    /// Lesson the submission belongs to, empty when unknown.
    pub lesson_name: String,
}

impl HomeworkRecord {
    /// Creates a record with only the required fields.
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    /// Sets the reviewer comment.
    pub fn with_reviewer_comment(mut self, comment: impl Into<String>) -> Self {
        self.reviewer_comment = comment.into();
        self
    }

    /// Sets the lesson name.
    pub fn with_lesson_name(mut self, lesson: impl Into<String>) -> Self {
        self.lesson_name = lesson.into();
        self
    }

    fn from_json(index: usize, value: &Value) -> Result<Self, SchemaError> {
        let object = value
            .as_object()
            .ok_or(SchemaError::HomeworkNotObject { index })?;

        let name = object
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(SchemaError::NameNotString { index })?;

        let status = object
            .get("status")
            .and_then(Value::as_str)
            .ok_or(SchemaError::StatusNotString { index })?;

        Ok(Self {
            name: name.to_string(),
            status: status.to_string(),
            reviewer_comment: optional_string(object, "reviewer_comment"),
            lesson_name: optional_string(object, "lesson_name"),
        })
    }
}

/// Optional fields fall back to an empty string when absent or mistyped.
fn optional_string(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// A validated `homework_statuses` response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusSnapshot {
    /// Records in the order the API returned them, newest first.
    pub homeworks: Vec<HomeworkRecord>,

    /// Server time to use as `from_date` for the next request.
    pub current_date: Option<i64>,
}

impl StatusSnapshot {
    /// Validates a decoded response body.
    pub fn from_json(response: &Map<String, Value>) -> Result<Self, SchemaError> {
        let items = response
            .get("homeworks")
            .and_then(Value::as_array)
            .ok_or(SchemaError::HomeworksNotList)?;

        let homeworks = items
            .iter()
            .enumerate()
            .map(|(index, item)| HomeworkRecord::from_json(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            homeworks,
            current_date: current_date(response),
        })
    }

    /// The tracked submission: the first record, if any.
    pub fn latest(&self) -> Option<&HomeworkRecord> {
        self.homeworks.first()
    }

    pub fn is_empty(&self) -> bool {
        self.homeworks.is_empty()
    }
}

/// Reads `current_date` from a raw response.
///
/// Integers are taken as is and floats are truncated. Anything else yields `None`.
pub fn current_date(response: &Map<String, Value>) -> Option<i64> {
    let value = response.get("current_date")?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_valid_response() {
        let response = object(json!({
            "homeworks": [
                {
                    "homework_name": "hw2.zip",
                    "status": "rejected",
                    "reviewer_comment": "Поправь тесты",
                    "lesson_name": "Спринт 2"
                },
                { "homework_name": "hw1.zip", "status": "approved" }
            ],
            "current_date": 1000
        }));

        let snapshot = StatusSnapshot::from_json(&response).unwrap();

        assert_eq!(snapshot.homeworks.len(), 2);
        assert_eq!(
            snapshot.homeworks[0],
            HomeworkRecord::new("hw2.zip", "rejected")
                .with_reviewer_comment("Поправь тесты")
                .with_lesson_name("Спринт 2")
        );
        assert_eq!(snapshot.homeworks[1], HomeworkRecord::new("hw1.zip", "approved"));
        assert_eq!(snapshot.current_date, Some(1000));
        assert_eq!(snapshot.latest().map(|r| r.name.as_str()), Some("hw2.zip"));
    }

    #[test]
    fn test_empty_list() {
        let response = object(json!({ "homeworks": [], "current_date": 2000 }));
        let snapshot = StatusSnapshot::from_json(&response).unwrap();

        assert!(snapshot.is_empty());
        assert!(snapshot.latest().is_none());
        assert_eq!(snapshot.current_date, Some(2000));
    }

    #[test]
    fn test_missing_homeworks() {
        let response = object(json!({ "current_date": 2000 }));
        assert_eq!(
            StatusSnapshot::from_json(&response),
            Err(SchemaError::HomeworksNotList)
        );
    }

    #[test]
    fn test_homeworks_not_a_list() {
        let response = object(json!({ "homeworks": { "homework_name": "hw1" } }));
        assert_eq!(
            StatusSnapshot::from_json(&response),
            Err(SchemaError::HomeworksNotList)
        );
    }

    #[test]
    fn test_element_not_an_object() {
        let response = object(json!({
            "homeworks": [{ "homework_name": "hw1", "status": "approved" }, "hw2"]
        }));
        assert_eq!(
            StatusSnapshot::from_json(&response),
            Err(SchemaError::HomeworkNotObject { index: 1 })
        );
    }

    #[test]
    fn test_name_not_a_string() {
        let response = object(json!({ "homeworks": [{ "homework_name": 7, "status": "approved" }] }));
        assert_eq!(
            StatusSnapshot::from_json(&response),
            Err(SchemaError::NameNotString { index: 0 })
        );
    }

    #[test]
    fn test_status_missing() {
        let response = object(json!({ "homeworks": [{ "homework_name": "hw1" }] }));
        assert_eq!(
            StatusSnapshot::from_json(&response),
            Err(SchemaError::StatusNotString { index: 0 })
        );
    }

    #[test]
    fn test_first_error_wins() {
        // Name is checked before status.
        let response = object(json!({ "homeworks": [{ "homework_name": null, "status": null }] }));
        assert_eq!(
            StatusSnapshot::from_json(&response),
            Err(SchemaError::NameNotString { index: 0 })
        );
    }

    #[test]
    fn test_mistyped_optional_fields_default_to_empty() {
        let response = object(json!({
            "homeworks": [{
                "homework_name": "hw1",
                "status": "reviewing",
                "reviewer_comment": 42,
                "lesson_name": ["not", "a", "string"]
            }]
        }));

        let snapshot = StatusSnapshot::from_json(&response).unwrap();
        assert_eq!(snapshot.homeworks[0], HomeworkRecord::new("hw1", "reviewing"));
    }

    #[test]
    fn test_current_date_variants() {
        assert_eq!(current_date(&object(json!({ "current_date": 1500 }))), Some(1500));
        assert_eq!(current_date(&object(json!({ "current_date": 1500.9 }))), Some(1500));
        assert_eq!(current_date(&object(json!({ "current_date": "1500" }))), None);
        assert_eq!(current_date(&object(json!({}))), None);
    }
}
