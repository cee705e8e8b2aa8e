use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use contracts::usecases::u508_beneficiary_reports::{
    CellValue, Record, RequiredColumn, REQUIRED_COLUMNS,
};
use std::io::Cursor;

use super::error::ReportError;

/// Индексы обязательных колонок в строке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub beneficiary: usize,
    pub enterprise: usize,
    pub unit: usize,
    pub total_value: usize,
}

impl ColumnMapping {
    /// Сопоставляет нормализованные заголовки с обязательными колонками.
    /// При повторе заголовка берется первое вхождение.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self, ReportError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| RequiredColumn::normalize_header(h.as_ref()))
            .collect();

        let mut indices = [0usize; 4];
        let mut missing = Vec::new();

        for (slot, column) in REQUIRED_COLUMNS.iter().enumerate() {
            match normalized.iter().position(|h| h == column.header()) {
                Some(idx) => indices[slot] = idx,
                None => missing.push(column.header().to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(ReportError::MissingColumns(missing));
        }

        Ok(Self {
            beneficiary: indices[0],
            enterprise: indices[1],
            unit: indices[2],
            total_value: indices[3],
        })
    }

    fn record(&self, row: &[Data]) -> Record {
        let cell = |idx: usize| row.get(idx).map(cell_value).unwrap_or_default();

        Record {
            beneficiary: cell(self.beneficiary).plain_text(),
            enterprise: cell(self.enterprise),
            unit: cell(self.unit),
            total_value: cell(self.total_value),
        }
    }
}

/// Читает первый лист книги (xlsx, xls, xlsb, ods) в список записей
pub fn read_records(bytes: &[u8]) -> Result<Vec<Record>, ReportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ReportError::EmptyWorkbook)??;

    records_from_range(&range)
}

/// Первая строка диапазона это заголовок, дальше данные.
/// Полностью пустые строки пропускаются.
pub fn records_from_range(range: &Range<Data>) -> Result<Vec<Record>, ReportError> {
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .map(|header| header.iter().map(|c| cell_value(c).plain_text()).collect())
        .unwrap_or_default();
    let mapping = ColumnMapping::from_headers(headers.as_slice())?;

    let records = rows
        .filter(|row| !row.iter().all(|c| matches!(c, Data::Empty)))
        .map(|row| mapping.record(row))
        .collect();

    Ok(records)
}

/// Приводит ячейку calamine к CellValue: числа остаются числами,
/// всё остальное превращается в текст
pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::text(if *b { "True" } else { "False" }),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => CellValue::Text(value.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => CellValue::Text(dt.as_f64().to_string()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
        Data::Empty => CellValue::default(),
    }
}
