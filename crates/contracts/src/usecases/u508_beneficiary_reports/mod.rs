pub mod columns;
pub mod record;

pub use columns::{RequiredColumn, REQUIRED_COLUMNS};
pub use record::{CellValue, Group, Record};

use crate::usecases::common::UseCaseMetadata;

pub struct BeneficiaryReports;

impl UseCaseMetadata for BeneficiaryReports {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "beneficiary_reports"
    }

    fn display_name() -> &'static str {
        "Relatórios por beneficiário"
    }

    fn description() -> &'static str {
        "Формирование PDF-отчёта по каждому получателю из загруженной таблицы и упаковка в ZIP"
    }
}
