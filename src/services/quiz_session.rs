use std::sync::Arc;

use crate::models::domain::quiz::GeneratedQuiz;
use crate::models::domain::Quiz;
use crate::models::dto::response::QuizView;

/// State of the single quiz session: the current quiz, if any, and whether
/// its answers have been revealed.
///
/// `replace_quiz` and `reveal_answers` are the only mutators. A failed
/// generation never reaches the session, so the previous quiz stays intact.
#[derive(Debug, Default)]
pub struct QuizSession {
    current: Option<Arc<GeneratedQuiz>>,
    answers_revealed: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_quiz(&self) -> bool {
        self.current.is_some()
    }

    pub fn answers_revealed(&self) -> bool {
        self.answers_revealed
    }

    pub fn current(&self) -> Option<Arc<GeneratedQuiz>> {
        self.current.clone()
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.current.as_deref().map(|generated| &generated.quiz)
    }

    /// Installs a freshly generated quiz and hides its answers.
    pub fn replace_quiz(&mut self, quiz: Quiz) -> Arc<GeneratedQuiz> {
        let generated = Arc::new(GeneratedQuiz::new(quiz));
        self.current = Some(Arc::clone(&generated));
        self.answers_revealed = false;
        generated
    }

    /// Reveals the answer key. Returns `false`, leaving the session as it
    /// was, when there is no quiz yet.
    pub fn reveal_answers(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        self.answers_revealed = true;
        true
    }

    pub fn view(&self) -> Option<QuizView> {
        self.current
            .as_deref()
            .map(|generated| QuizView::new(generated, self.answers_revealed))
    }
}
