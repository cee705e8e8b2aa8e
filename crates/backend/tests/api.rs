use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use beneficiary_reports::routes::{configure_routes, AppState};
use beneficiary_reports::shared::config::Config;
use http_body_util::BodyExt;
use rust_xlsxwriter::Workbook;
use std::io::Cursor;
use tower::ServiceExt;
use zip::ZipArchive;

const BOUNDARY: &str = "----reports-test-boundary";

fn app() -> Router {
    configure_routes(AppState::new(Config::default()))
}

fn spreadsheet(headers: &[&str], rows: &[(&str, &str, &str, f64)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for (i, (beneficiary, enterprise, unit, value)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *beneficiary).unwrap();
        sheet.write_string(row, 1, *enterprise).unwrap();
        sheet.write_string(row, 2, *unit).unwrap();
        sheet.write_number(row, 3, *value).unwrap();
    }
    workbook.save_to_buffer().unwrap()
}

/// Одна часть multipart-формы: (имя поля, имя файла, содержимое)
fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file_name, content) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match file_name {
            Some(file_name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n",
                    name, file_name
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
            ),
        }
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate_pdfs")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, headers, body)
}

const HEADERS: [&str; 4] = ["BENEFICIARIO", "EMPREENDIMENTO", "UNIDADE", "VALOR TOTAL"];

#[tokio::test]
async fn test_upload_form_is_served() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, headers, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("action=\"/generate_pdfs\""));
    assert!(html.contains("name=\"file\""));
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, _, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_form_without_file_field() {
    let body = multipart_body(&[("note", None, b"hello")]);
    let (status, _, body) = send(upload_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"No file uploaded");
}

#[tokio::test]
async fn test_empty_file_field() {
    let body = multipart_body(&[("file", Some(""), b"")]);
    let (status, _, body) = send(upload_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"No file uploaded");
}

#[tokio::test]
async fn test_non_multipart_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/generate_pdfs")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, _, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"No file uploaded");
}

#[tokio::test]
async fn test_missing_columns_are_listed() {
    let xlsx = spreadsheet(&["Beneficiario", "Unidade"], &[]);
    let body = multipart_body(&[("file", Some("dados.xlsx"), &xlsx)]);
    let (status, _, body) = send(upload_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "As seguintes colunas estão faltando no arquivo: EMPREENDIMENTO, VALOR TOTAL"
    );
}

#[tokio::test]
async fn test_generates_archive_per_beneficiary() {
    let xlsx = spreadsheet(
        &HEADERS,
        &[
            ("Ana Souza", "Residencial Sol", "Apto 101", 1500.0),
            ("Bruno Lima", "Torre Norte", "Sala 3", 980.5),
            ("Ana Souza", "Residencial Sol", "Total", 1500.0),
            ("Carla Dias", "Vila Verde", "Casa 7", 2300.0),
        ],
    );
    let body = multipart_body(&[("file", Some("dados.xlsx"), &xlsx)]);
    let (status, headers, body) = send(upload_request(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/zip");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"pdfs.zip\""
    );

    let zip = ZipArchive::new(Cursor::new(body)).unwrap();
    let mut names: Vec<&str> = zip.file_names().collect();
    names.sort();
    assert_eq!(names, vec!["Ana Souza.pdf", "Bruno Lima.pdf", "Carla Dias.pdf"]);
}

#[tokio::test]
async fn test_unreadable_workbook_is_server_error() {
    let body = multipart_body(&[("file", Some("dados.xlsx"), b"definitely not a spreadsheet")]);
    let (status, _, body) = send(upload_request(body)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, b"Internal Server Error");
}
