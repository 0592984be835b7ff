use actix_web::{get, post, web, HttpResponse};
use schemars::schema_for;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::QuizRequest,
        dto::{
            quiz_dto::QuizDto,
            request::GenerateQuizRequestDto,
            response::{ApiResponse, FormOptionsDto},
        },
    },
    services::{export::ExportFormat, http_helpers::attachment},
};

#[get("/api/quiz/options")]
pub async fn get_form_options() -> HttpResponse {
    HttpResponse::Ok().json(FormOptionsDto::default())
}

/// JSON Schema of the quiz document the provider is asked to return.
#[get("/api/quiz/schema")]
pub async fn get_quiz_schema() -> HttpResponse {
    HttpResponse::Ok().json(schema_for!(QuizDto))
}

#[post("/api/quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = QuizRequest::try_from(request.into_inner())?;
    let view = state.quiz_service.generate(request).await?;
    Ok(HttpResponse::Created().json(ApiResponse {
        data: view,
        message: "Quiz generated".to_string(),
    }))
}

#[get("/api/quiz")]
pub async fn get_quiz(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = state.quiz_service.current_view().await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/quiz/reveal")]
pub async fn reveal_answers(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = state.quiz_service.reveal_answers().await?;
    Ok(HttpResponse::Ok().json(view))
}

#[get("/api/quiz/export/{format}")]
pub async fn export_quiz(
    state: web::Data<AppState>,
    format: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let format: ExportFormat = format.parse().map_err(AppError::ValidationError)?;
    let file = state.quiz_service.export(format).await?;
    Ok(attachment(file))
}
