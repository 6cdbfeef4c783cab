//! Request body parsing for the POST endpoints.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::ApiError;
use crate::domain::{CategoryId, QuestionId, QuizCategory};
use crate::models::NewQuestion;

/// Body of `POST /questions`: a search whenever `searchTerm` is present,
/// otherwise a new question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionsRequest {
    Search { search_term: String },
    Create(NewQuestion),
}

impl QuestionsRequest {
    /// # Errors
    ///
    /// - [`ApiError::InternalError`] if the body is not a JSON object
    /// - [`ApiError::BadRequest`] if a field is missing, empty or mistyped
    pub fn from_json(body: Value) -> Result<Self, ApiError> {
        let Value::Object(fields) = body else {
            return Err(ApiError::internal("Request body must be a JSON object"));
        };

        if let Some(term) = fields.get("searchTerm") {
            return match term {
                Value::String(s) => Ok(Self::Search {
                    search_term: s.clone(),
                }),
                other => Err(ApiError::bad_request(format!(
                    "searchTerm must be a string, got {other}"
                ))),
            };
        }

        Ok(Self::Create(NewQuestion {
            question: required_text(&fields, "question")?,
            answer: required_text(&fields, "answer")?,
            difficulty: required_int(&fields, "difficulty")?,
            category: CategoryId::new(required_int(&fields, "category")?),
        }))
    }
}

fn required_text(fields: &Map<String, Value>, key: &str) -> Result<String, ApiError> {
    match fields.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Value::String(_)) => Err(ApiError::bad_request(format!("{key} cannot be empty"))),
        Some(other) => Err(ApiError::bad_request(format!(
            "{key} must be a string, got {other}"
        ))),
        None => Err(ApiError::bad_request(format!("{key} is required"))),
    }
}

/// Integers may arrive as JSON numbers or as numeric strings from form inputs.
fn required_int(fields: &Map<String, Value>, key: &str) -> Result<i32, ApiError> {
    let parsed = match fields.get(key) {
        None | Some(Value::Null) => return Err(ApiError::bad_request(format!("{key} is required"))),
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(ApiError::bad_request(format!("{key} cannot be empty")));
        }
        Some(value) => as_i32(value),
    };

    parsed.ok_or_else(|| ApiError::bad_request(format!("{key} must be an integer")))
}

fn as_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryPayload>,
    #[serde(default)]
    pub previous_questions: Option<Vec<QuestionId>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct QuizCategoryPayload {
    #[serde(default)]
    pub id: Value,
}

impl QuizRequest {
    /// Raw id as sent, echoed back in the response.
    #[must_use]
    pub fn raw_category_id(&self) -> Value {
        self.quiz_category
            .as_ref()
            .map_or(Value::Null, |c| c.id.clone())
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the id is missing, empty or not an integer.
    pub fn category(&self) -> Result<QuizCategory, ApiError> {
        let raw = self.raw_category_id();
        if raw.is_boolean() {
            return Err(ApiError::not_found("Quiz category", raw));
        }

        as_i32(&raw)
            .map(QuizCategory::from_id)
            .ok_or_else(|| ApiError::not_found("Quiz category", raw))
    }

    #[must_use]
    pub fn previous_questions(&self) -> &[QuestionId] {
        self.previous_questions.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_term_selects_search() {
        let request = QuestionsRequest::from_json(json!({"searchTerm": "title"})).unwrap();
        assert_eq!(
            request,
            QuestionsRequest::Search {
                search_term: "title".to_string()
            }
        );
    }

    #[test]
    fn search_term_must_be_a_string() {
        let err = QuestionsRequest::from_json(json!({"searchTerm": 5})).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn create_trims_text_and_accepts_numeric_strings() {
        let request = QuestionsRequest::from_json(json!({
            "question": "  Who invented the light bulb ",
            "answer": "Thomas Edison\n",
            "difficulty": "2",
            "category": 1
        }))
        .unwrap();

        assert_eq!(
            request,
            QuestionsRequest::Create(NewQuestion {
                question: "Who invented the light bulb".to_string(),
                answer: "Thomas Edison".to_string(),
                difficulty: 2,
                category: CategoryId::new(1),
            })
        );
    }

    #[test]
    fn create_rejects_empty_or_missing_fields() {
        let empty_answer = json!({
            "question": "Who invented trains",
            "answer": "   ",
            "difficulty": 2,
            "category": 1
        });
        assert!(matches!(
            QuestionsRequest::from_json(empty_answer),
            Err(ApiError::BadRequest(_))
        ));

        let missing_category = json!({
            "question": "Who invented trains",
            "answer": "Stephenson",
            "difficulty": 2
        });
        assert!(matches!(
            QuestionsRequest::from_json(missing_category),
            Err(ApiError::BadRequest(_))
        ));

        let empty_difficulty = json!({
            "question": "Who invented trains",
            "answer": "Stephenson",
            "difficulty": "",
            "category": 1
        });
        assert!(matches!(
            QuestionsRequest::from_json(empty_difficulty),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn non_object_body_is_internal_error() {
        assert!(matches!(
            QuestionsRequest::from_json(json!(["question"])),
            Err(ApiError::InternalError(_))
        ));
        assert!(matches!(
            QuestionsRequest::from_json(Value::Null),
            Err(ApiError::InternalError(_))
        ));
    }

    fn quiz(body: Value) -> QuizRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn quiz_category_ids() {
        let all = quiz(json!({"quiz_category": {"id": 0}, "previous_questions": []}));
        assert_eq!(all.category().unwrap(), QuizCategory::All);

        let science = quiz(json!({"quiz_category": {"type": "Science", "id": "1"}}));
        assert_eq!(
            science.category().unwrap(),
            QuizCategory::Only(CategoryId::new(1))
        );
        assert!(science.previous_questions().is_empty());
    }

    #[test]
    fn quiz_invalid_ids_are_not_found() {
        for body in [
            json!({"quiz_category": {"id": ""}, "previous_questions": []}),
            json!({"quiz_category": {"id": null}}),
            json!({"quiz_category": {"id": false}}),
            json!({"quiz_category": {}}),
            json!({"previous_questions": [1]}),
        ] {
            assert!(matches!(quiz(body).category(), Err(ApiError::NotFound(_))));
        }
    }

    #[test]
    fn quiz_previous_questions_parse_as_ids() {
        let request = quiz(json!({"quiz_category": {"id": 1}, "previous_questions": [20, 3]}));
        assert_eq!(
            request.previous_questions(),
            &[QuestionId::new(20), QuestionId::new(3)]
        );
    }
}
