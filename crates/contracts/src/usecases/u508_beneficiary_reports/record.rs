use serde::{Deserialize, Serialize};

/// Значение ячейки: тип определяется один раз при чтении таблицы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Текстовое представление без денежного форматирования.
    /// Целые числа выводятся без дробной части: 123.0 -> "123"
    pub fn plain_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

/// Одна строка таблицы после сопоставления колонок
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub beneficiary: String,
    pub enterprise: CellValue,
    pub unit: CellValue,
    pub total_value: CellValue,
}

impl Record {
    /// Итоговая строка: в UNIDADE встречается "TOTAL" в любом регистре
    pub fn is_total_row(&self) -> bool {
        match &self.unit {
            CellValue::Text(s) => s.to_uppercase().contains("TOTAL"),
            CellValue::Number(_) => false,
        }
    }

    /// Значения колонок тела таблицы в порядке вывода
    pub fn body_values(&self) -> [&CellValue; 3] {
        [&self.enterprise, &self.unit, &self.total_value]
    }
}

/// Все строки одного получателя в исходном порядке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub beneficiary: String,
    pub records: Vec<Record>,
}
