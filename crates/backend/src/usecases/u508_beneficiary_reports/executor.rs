use contracts::usecases::u508_beneficiary_reports::Group;

use super::archive::{build_archive, RenderedReport};
use super::error::ReportError;
use super::excel_reader::read_records;
use super::grouping::group_by_beneficiary;
use super::layout::TitleCentering;
use super::pdf_renderer::render_group;

/// Параметры оформления отчетов
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub title_centering: TitleCentering,
}

/// Результат: ZIP-архив и немного статистики для логов
#[derive(Debug, Clone)]
pub struct ReportBundle {
    pub archive: Vec<u8>,
    pub documents: usize,
    pub rows: usize,
}

/// Полный конвейер: таблица -> записи -> группы -> PDF -> ZIP.
/// Синхронный, вызывается из blocking-пула.
pub fn generate_reports(bytes: &[u8], options: &ReportOptions) -> Result<ReportBundle, ReportError> {
    let started_at = std::time::Instant::now();

    let records = read_records(bytes)?;
    let rows = records.len();
    tracing::info!("Spreadsheet parsed: {} data rows", rows);

    let groups = group_by_beneficiary(records);
    tracing::info!("Grouped into {} beneficiaries", groups.len());

    let reports = render_all(&groups, options)?;
    let documents = reports.len();

    let archive = build_archive(reports)?;

    tracing::info!(
        "Reports ready in {}ms: {} documents, {} bytes archive",
        started_at.elapsed().as_millis(),
        documents,
        archive.len()
    );

    Ok(ReportBundle {
        archive,
        documents,
        rows,
    })
}

/// Первая ошибка прерывает всю обработку, частичный архив не собирается
fn render_all(groups: &[Group], options: &ReportOptions) -> Result<Vec<RenderedReport>, ReportError> {
    groups
        .iter()
        .map(|group| {
            let bytes = render_group(group, options.title_centering)?;
            Ok(RenderedReport {
                beneficiary: group.beneficiary.clone(),
                bytes,
            })
        })
        .collect()
}
