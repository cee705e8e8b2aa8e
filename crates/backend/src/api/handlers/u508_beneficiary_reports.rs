use axum::{
    body::Bytes,
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    http::header,
    response::{Html, IntoResponse, Response},
};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_beneficiary_reports::BeneficiaryReports;
use tracing::Instrument;
use uuid::Uuid;

use crate::routes::AppState;
use crate::shared::format::format_number;
use crate::usecases::u508_beneficiary_reports::{
    archive::ARCHIVE_FILENAME, generate_reports, ReportError, ReportOptions,
};

const UPLOAD_FORM: &str = include_str!("../../../static/upload.html");

/// Имя multipart-поля с таблицей
const FILE_FIELD: &str = "file";

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!("Report generation failed: {}", self);
        } else {
            tracing::warn!("Report request rejected: {}", self);
        }
        (status, self.client_message()).into_response()
    }
}

/// GET /
pub async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

/// POST /generate_pdfs
pub async fn generate_pdfs(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ReportError> {
    let span = tracing::info_span!("u508", request_id = %Uuid::new_v4());
    handle_generate(state, multipart).instrument(span).await
}

async fn handle_generate(
    state: AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ReportError> {
    let upload = read_upload(multipart).await?;
    tracing::info!(
        "{}: received '{}' ({} bytes)",
        BeneficiaryReports::full_name(),
        upload.file_name.as_deref().unwrap_or("-"),
        format_number(upload.bytes.len())
    );

    let options = ReportOptions {
        title_centering: state.config.report.title_centering,
    };

    // Разбор и отрисовка выполняются в blocking-пуле
    let span = tracing::Span::current();
    let bundle = tokio::task::spawn_blocking(move || {
        span.in_scope(|| generate_reports(&upload.bytes, &options))
    })
    .await
    .map_err(|join_err| {
        if join_err.is_panic() {
            ReportError::TaskJoin("task panicked during processing".to_string())
        } else {
            ReportError::TaskJoin(format!("task execution failed: {}", join_err))
        }
    })??;

    tracing::info!(
        "{}: {} rows -> {} documents",
        BeneficiaryReports::full_name(),
        bundle.rows,
        bundle.documents
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", ARCHIVE_FILENAME),
            ),
        ],
        bundle.archive,
    )
        .into_response())
}

struct Upload {
    file_name: Option<String>,
    bytes: Bytes,
}

/// Достает поле `file` из формы. Запрос без multipart-тела или с пустым
/// полем (браузер отправляет его, если файл не выбран) считается запросом без файла
async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Upload, ReportError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!("Request is not multipart: {}", rejection);
            return Err(ReportError::MissingUpload);
        }
    };

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?;

        if bytes.is_empty() && file_name.as_deref().map_or(true, str::is_empty) {
            return Err(ReportError::MissingUpload);
        }
        return Ok(Upload { file_name, bytes });
    }

    Err(ReportError::MissingUpload)
}
