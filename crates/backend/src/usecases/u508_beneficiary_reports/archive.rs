use std::collections::HashSet;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::error::ReportError;

pub const ARCHIVE_FILENAME: &str = "pdfs.zip";
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// Готовый документ одного получателя
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub beneficiary: String,
    pub bytes: Vec<u8>,
}

/// Имя файла внутри архива. Разделители путей заменяются,
/// чтобы архив оставался плоским
pub fn entry_name(beneficiary: &str) -> String {
    let safe: String = beneficiary
        .chars()
        .map(|ch| if ch == '/' || ch == '\\' { '_' } else { ch })
        .collect();
    format!("{}.{}", safe, DOCUMENT_EXTENSION)
}

/// Подбирает свободное имя: "Ana.pdf", "Ana (2).pdf", ...
fn unique_entry_name(beneficiary: &str, used: &mut HashSet<String>) -> String {
    let base = entry_name(beneficiary);
    if used.insert(base.clone()) {
        return base;
    }

    let stem = base.trim_end_matches(&format!(".{}", DOCUMENT_EXTENSION)).to_string();
    let mut n = 2;
    loop {
        let candidate = format!("{} ({}).{}", stem, n, DOCUMENT_EXTENSION);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Упаковывает все документы в один ZIP в памяти
pub fn build_archive(reports: Vec<RenderedReport>) -> Result<Vec<u8>, ReportError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut used = HashSet::with_capacity(reports.len());

    for report in reports {
        let name = unique_entry_name(&report.beneficiary, &mut used);
        zip.start_file(name.as_str(), options)?;
        zip.write_all(&report.bytes)
            .map_err(|source| ReportError::ZipIo {
                entry: name.clone(),
                source,
            })?;
    }

    Ok(zip.finish()?.into_inner())
}
