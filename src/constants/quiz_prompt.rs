pub const QUIZ_SYSTEM_PROMPT: &str = "You are a professional teacher who writes clear, age-appropriate quizzes. You answer with a single JSON object and nothing else.";

/// Literal shape the provider must return. `options` appears only on MCQ questions.
pub const QUIZ_OUTPUT_FORMAT: &str = r#"{
  "questions": [
    {
      "type": "MCQ" | "Fill-in-the-blank" | "Open-ended",
      "topic": "The topic of the question",
      "question": "The question here",
      "options": ["A", "B", "C", "D"],
      "answer": "Correct answer"
    }
  ],
  "answer_key": [
    {
      "question": "The question here",
      "answer": "Correct answer"
    }
  ]
}"#;

pub const QUIZ_OUTPUT_RULES: &str = "Rules:
- Include \"options\" (four choices) only for MCQ questions and omit it for every other type.
- Give a correct answer for every question, including open-ended ones where answers may vary.
- Distribute the questions evenly across the topics.
- List the answer key in the same order as the questions, repeating each question text exactly.
- Return valid JSON only, with no markdown fences or commentary.";
