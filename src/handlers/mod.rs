pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::health_check;
pub use quiz_handler::{
    export_quiz, generate_quiz, get_form_options, get_quiz, get_quiz_schema, reveal_answers,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into());

    cfg.app_data(json_config)
        .service(health_check)
        .service(get_form_options)
        .service(get_quiz_schema)
        .service(generate_quiz)
        .service(get_quiz)
        .service(reveal_answers)
        .service(export_quiz);
}
