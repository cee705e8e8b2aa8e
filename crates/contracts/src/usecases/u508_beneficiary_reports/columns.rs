use serde::{Deserialize, Serialize};

/// Обязательные колонки входной таблицы (после нормализации заголовков)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequiredColumn {
    Beneficiary,
    Enterprise,
    Unit,
    TotalValue,
}

/// Порядок важен: в этом порядке перечисляются недостающие колонки
pub const REQUIRED_COLUMNS: [RequiredColumn; 4] = [
    RequiredColumn::Beneficiary,
    RequiredColumn::Enterprise,
    RequiredColumn::Unit,
    RequiredColumn::TotalValue,
];

impl RequiredColumn {
    /// Имя колонки в файле после trim + upper-case
    pub fn header(&self) -> &'static str {
        match self {
            RequiredColumn::Beneficiary => "BENEFICIARIO",
            RequiredColumn::Enterprise => "EMPREENDIMENTO",
            RequiredColumn::Unit => "UNIDADE",
            RequiredColumn::TotalValue => "VALOR TOTAL",
        }
    }

    /// Приводит сырой заголовок к виду, в котором сравниваются колонки
    pub fn normalize_header(raw: &str) -> String {
        raw.trim().to_uppercase()
    }
}
