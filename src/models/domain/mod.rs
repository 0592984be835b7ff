pub mod quiz;
pub mod quiz_question;
pub mod quiz_request;
pub use quiz::Quiz;
pub use quiz_question::QuizQuestion;
pub use quiz_request::QuizRequest;
