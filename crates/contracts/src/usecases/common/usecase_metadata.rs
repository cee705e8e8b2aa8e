/// Метаданные UseCase: индекс, имя и описание для логов и UI
pub trait UseCaseMetadata {
    /// "u508"
    fn usecase_index() -> &'static str;

    /// Техническое имя, "beneficiary_reports"
    fn usecase_name() -> &'static str;

    /// Отображаемое имя на форме загрузки
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Идентификатор вида "u508_beneficiary_reports", им помечаются записи в логе
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
