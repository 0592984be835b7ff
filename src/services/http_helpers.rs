use actix_web::http::header::{ContentDisposition, ContentType};
use actix_web::HttpResponse;

use crate::services::export::ExportedFile;

/// Builds a download response that saves under the exporter's file name.
pub fn attachment(file: ExportedFile) -> HttpResponse {
    let content_type = file
        .content_type
        .parse()
        .map(ContentType)
        .unwrap_or_else(|_| ContentType::octet_stream());

    HttpResponse::Ok()
        .insert_header(content_type)
        .insert_header(ContentDisposition::attachment(file.file_name))
        .body(file.bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};

    #[test]
    fn sets_disposition_and_content_type() {
        let response = attachment(ExportedFile {
            file_name: "quiz.csv",
            content_type: "text/csv",
            bytes: b"Question\n".to_vec(),
        });

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"quiz.csv\""
        );
    }
}
