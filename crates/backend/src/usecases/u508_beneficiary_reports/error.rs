use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use std::io;
use thiserror::Error;

/// Ошибки формирования архива отчётов. Любая ошибка прерывает запрос целиком
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No file uploaded")]
    MissingUpload,

    #[error("As seguintes colunas estão faltando no arquivo: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("workbook has no worksheets")]
    EmptyWorkbook,

    #[error("pdf error for '{beneficiary}': {source}")]
    Pdf {
        beneficiary: String,
        #[source]
        source: oxidize_pdf::PdfError,
    },

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("zip write error for '{entry}': {source}")]
    ZipIo {
        entry: String,
        #[source]
        source: io::Error,
    },

    #[error("task error: {0}")]
    TaskJoin(String),
}

impl ReportError {
    pub fn http_status(&self) -> StatusCode {
        match self {
            ReportError::MissingUpload | ReportError::MissingColumns(_) => StatusCode::BAD_REQUEST,
            ReportError::Multipart(e) => e.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }

    /// Текст для тела ответа. Детали серверных ошибок наружу не отдаются
    pub fn client_message(&self) -> String {
        match self {
            ReportError::Multipart(e) if e.status().is_client_error() => e.body_text(),
            e if e.is_client_error() => e.to_string(),
            _ => "Internal Server Error".to_string(),
        }
    }
}
