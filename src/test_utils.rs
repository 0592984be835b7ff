#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    /// Provider reply with `count` Photosynthesis MCQ questions and a matching key.
    pub fn photosynthesis_mcq_json(count: usize) -> String {
        let questions: Vec<_> = (1..=count)
            .map(|n| {
                json!({
                    "type": "MCQ",
                    "topic": "Photosynthesis",
                    "question": format!("Q{n}: Which gas do plants release during photosynthesis?"),
                    "options": ["Oxygen", "Carbon dioxide", "Nitrogen", "Hydrogen"],
                    "answer": "Oxygen"
                })
            })
            .collect();
        let answer_key: Vec<_> = (1..=count)
            .map(|n| {
                json!({
                    "question": format!("Q{n}: Which gas do plants release during photosynthesis?"),
                    "answer": "Oxygen"
                })
            })
            .collect();

        json!({ "questions": questions, "answer_key": answer_key }).to_string()
    }

    /// Same reply wrapped the way chat models often answer.
    pub fn fenced(reply: &str) -> String {
        format!("Here is your quiz:\n```json\n{reply}\n```\nGood luck!")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::quiz_parser::QuizParser;

    #[test]
    fn fixture_parses_into_requested_count() {
        let quiz = QuizParser::parse(&photosynthesis_mcq_json(5)).unwrap();
        assert_eq!(quiz.len(), 5);
        assert_eq!(quiz.answer_key().len(), 5);
    }

    #[test]
    fn fenced_fixture_still_parses() {
        let quiz = QuizParser::parse(&fenced(&photosynthesis_mcq_json(2))).unwrap();
        assert_eq!(quiz.len(), 2);
    }
}
