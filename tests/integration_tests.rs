mod common;

use jesi_quiz_server::{
    errors::AppError,
    models::domain::{
        quiz_question::QuestionType,
        quiz_request::{ClassLevel, Difficulty},
        QuizRequest,
    },
    services::{export::ExportFormat, quiz_parser::QuizParser, quiz_service::QuizService},
};

use common::{mixed_reply, photosynthesis_reply, ScriptedQuizClient};

fn photosynthesis_request() -> QuizRequest {
    QuizRequest::new(
        vec![ClassLevel::JhsOne],
        vec!["Photosynthesis".to_string()],
        vec![QuestionType::Mcq],
        Difficulty::Mixed,
        5,
    )
    .unwrap()
}

#[actix_web::test]
async fn photosynthesis_quiz_end_to_end() {
    let client = ScriptedQuizClient::new(vec![Ok(photosynthesis_reply(5))]);
    let service = QuizService::new(client.clone());

    let view = service.generate(photosynthesis_request()).await.unwrap();
    assert_eq!(view.questions.len(), 5);
    assert!(view
        .questions
        .iter()
        .all(|q| q.question_type == QuestionType::Mcq && q.options.len() == 4));
    assert!(view.answer_key.is_none());

    let prompts = client.prompts().await;
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("JHS one"));
    assert!(prompts[0].contains("Topics: Photosynthesis"));
    assert!(prompts[0].contains("Number of Questions: 5"));

    let revealed = service.reveal_answers().await.unwrap();
    let key = revealed.answer_key.unwrap();
    assert_eq!(key.len(), 5);
    assert!(key.iter().all(|entry| entry.answer == "Glucose"));

    let csv = service.export(ExportFormat::Csv).await.unwrap();
    let text = String::from_utf8(csv.bytes).unwrap();
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(&rows[0][3], "Glucose, Protein, Fat, Salt");

    let pdf = service.export(ExportFormat::Pdf).await.unwrap();
    assert!(pdf.bytes.starts_with(b"%PDF"));
    assert_eq!(pdf.file_name, "quiz.pdf");
}

#[actix_web::test]
async fn json_export_parses_back_to_the_same_questions() {
    let client = ScriptedQuizClient::new(vec![Ok(mixed_reply())]);
    let service = QuizService::new(client);
    let view = service.generate(photosynthesis_request()).await.unwrap();

    let json = service.export(ExportFormat::Json).await.unwrap();
    let reparsed = QuizParser::parse(&String::from_utf8(json.bytes).unwrap()).unwrap();

    assert_eq!(reparsed.len(), view.questions.len());
    for (question, shown) in reparsed.questions().iter().zip(&view.questions) {
        assert_eq!(question.question, shown.question);
        assert_eq!(question.question_type(), shown.question_type);
        assert_eq!(question.options(), shown.options.as_slice());
    }
}

#[actix_web::test]
async fn mixed_types_keep_options_only_on_mcq() {
    let service = QuizService::new(ScriptedQuizClient::new(vec![Ok(mixed_reply())]));

    let view = service.generate(photosynthesis_request()).await.unwrap();

    let types: Vec<_> = view.questions.iter().map(|q| q.question_type).collect();
    assert_eq!(
        types,
        vec![QuestionType::Mcq, QuestionType::FillInBlank, QuestionType::OpenEnded]
    );
    assert!(view.questions[1].options.is_empty());
    assert!(view.questions[2].options.is_empty());
}

#[actix_web::test]
async fn non_json_reply_leaves_previous_quiz_untouched() {
    let client = ScriptedQuizClient::new(vec![
        Ok(photosynthesis_reply(5)),
        Ok("As an AI model I cannot write quizzes today.".to_string()),
    ]);
    let service = QuizService::new(client);
    let first = service.generate(photosynthesis_request()).await.unwrap();

    let err = service.generate(photosynthesis_request()).await.unwrap_err();
    assert!(matches!(err, AppError::Generation(_)));

    let current = service.current_view().await.unwrap();
    assert_eq!(current.id, first.id);
    assert_eq!(current.questions.len(), 5);
    let csv = service.export(ExportFormat::Csv).await.unwrap();
    assert_eq!(String::from_utf8(csv.bytes).unwrap().lines().count(), 6);
}

#[actix_web::test]
async fn fifty_question_quiz_exports_to_pdf() {
    let client = ScriptedQuizClient::new(vec![
        Ok(photosynthesis_reply(5)),
        Ok(photosynthesis_reply(50)),
    ]);
    let service = QuizService::new(client);
    let request = |count| {
        QuizRequest::new(
            vec![ClassLevel::ShsThree],
            vec!["Photosynthesis".to_string()],
            vec![QuestionType::Mcq],
            Difficulty::Hard,
            count,
        )
        .unwrap()
    };

    service.generate(request(5)).await.unwrap();
    let short = service.export(ExportFormat::Pdf).await.unwrap();
    service.generate(request(50)).await.unwrap();
    let long = service.export(ExportFormat::Pdf).await.unwrap();

    assert!(long.bytes.starts_with(b"%PDF"));
    assert!(long.bytes.len() > short.bytes.len());
}
