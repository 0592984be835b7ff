use crate::constants::quiz_prompt::{QUIZ_OUTPUT_FORMAT, QUIZ_OUTPUT_RULES};
use crate::models::domain::QuizRequest;

/// Renders the quiz-generation prompt. Pure: the same request always yields
/// the same text.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(request: &QuizRequest) -> String {
        let audience = Self::join(request.class_levels().iter().map(|l| l.label()));
        let audience = if audience.is_empty() {
            "students".to_string()
        } else {
            format!("{audience} students")
        };
        let topics = Self::join(request.topics().iter().map(String::as_str));
        let question_types = Self::join(request.question_types().iter().map(|t| t.label()));

        format!(
            r#"You are a professional teacher creating a quiz for {audience}.

Topics: {topics}
Question Types: {question_types}
Difficulty: {difficulty}
Number of Questions: {count}

Write exactly {count} questions using only the question types listed above.

Return the quiz in the following JSON format:

{format}

{rules}
"#,
            difficulty = request.difficulty(),
            count = request.question_count(),
            format = QUIZ_OUTPUT_FORMAT,
            rules = QUIZ_OUTPUT_RULES,
        )
    }

    fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
        items.collect::<Vec<_>>().join(", ")
    }
}
