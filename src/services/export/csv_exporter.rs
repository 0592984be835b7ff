use crate::errors::ExportError;
use crate::models::domain::Quiz;
use crate::services::export::Exporter;

pub const CSV_HEADER: [&str; 5] = ["Question", "Type", "Topic", "Options", "Answer"];

/// One row per question; MCQ options are joined into a single cell.
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn content_type(&self) -> &'static str {
        "text/csv"
    }

    fn file_name(&self) -> &'static str {
        "quiz.csv"
    }

    fn render(&self, quiz: &Quiz) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;

        for question in quiz.questions() {
            let options = question.options().join(", ");
            writer.write_record([
                question.question.as_str(),
                question.question_type().label(),
                question.topic.as_str(),
                options.as_str(),
                question.answer.as_str(),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| ExportError::Csv(e.into_error().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::quiz_question::{QuestionKind, QuizQuestion};

    fn quiz() -> Quiz {
        Quiz::from_questions(vec![
            QuizQuestion {
                kind: QuestionKind::MultipleChoice {
                    options: vec!["Oxygen".to_string(), "Carbon dioxide".to_string()],
                },
                topic: "Photosynthesis".to_string(),
                question: "Which gas is released, if any?".to_string(),
                answer: "Oxygen".to_string(),
            },
            QuizQuestion {
                kind: QuestionKind::FillInBlank,
                topic: "Respiration".to_string(),
                question: "The \"powerhouse\" of the cell is the ____.".to_string(),
                answer: "mitochondrion".to_string(),
            },
        ])
        .unwrap()
    }

    fn rows(bytes: &[u8]) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes);
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn writes_header_and_one_row_per_question() {
        let bytes = CsvExporter.render(&quiz()).unwrap();
        let rows = rows(&bytes);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], CSV_HEADER.map(str::to_string).to_vec());
    }

    #[test]
    fn joins_options_for_mcq_and_leaves_others_empty() {
        let rows = rows(&CsvExporter.render(&quiz()).unwrap());

        assert_eq!(
            rows[1],
            vec![
                "Which gas is released, if any?",
                "MCQ",
                "Photosynthesis",
                "Oxygen, Carbon dioxide",
                "Oxygen"
            ]
        );
        assert_eq!(rows[2][1], "Fill-in-the-blank");
        assert_eq!(rows[2][3], "");
    }

    #[test]
    fn quotes_embedded_commas_and_quotes() {
        let text = String::from_utf8(CsvExporter.render(&quiz()).unwrap()).unwrap();

        assert!(text.starts_with("Question,Type,Topic,Options,Answer"));
        assert!(text.contains("\"Which gas is released, if any?\""));
        assert!(text.contains("\"The \"\"powerhouse\"\" of the cell is the ____.\""));
    }
}
