use crate::errors::MalformedQuizError;
use crate::models::domain::Quiz;
use crate::models::dto::quiz_dto::QuizDto;

/// Turns raw provider output into a validated [`Quiz`]. Either the whole
/// structure is accepted or the call fails; nothing partial is returned.
pub struct QuizParser;

impl QuizParser {
    pub fn parse(raw: &str) -> Result<Quiz, MalformedQuizError> {
        if raw.trim().is_empty() {
            return Err(MalformedQuizError::Empty);
        }

        let mut first_error = None;
        for candidate in json_objects(raw) {
            match serde_json::from_str::<QuizDto>(candidate) {
                Ok(dto) => return Quiz::try_from(dto),
                Err(e) => {
                    first_error
                        .get_or_insert_with(|| MalformedQuizError::InvalidJson(e.to_string()));
                }
            }
        }

        Err(first_error.unwrap_or(MalformedQuizError::NoJsonObject))
    }
}

/// Returns the first balanced `{ ... }` block in `text`, skipping prose and
/// markdown fences around it. Braces inside JSON strings are ignored.
pub fn extract_json_object(text: &str) -> Option<&str> {
    json_objects(text).next()
}

/// Balanced `{ ... }` blocks in `text`, left to right. After a block the scan
/// resumes past its end; an opening brace that never closes is skipped.
pub fn json_objects(text: &str) -> impl Iterator<Item = &str> {
    let mut from = 0;
    std::iter::from_fn(move || loop {
        let start = from + text[from..].find('{')?;
        match balanced_len(&text[start..]) {
            Some(len) => {
                from = start + len;
                return Some(&text[start..start + len]);
            }
            None => from = start + 1,
        }
    })
}

/// Byte length of the object opening at the start of `text`, if it closes.
fn balanced_len(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset + 1);
                }
            }
            _ => {}
        }
    }

    None
}
