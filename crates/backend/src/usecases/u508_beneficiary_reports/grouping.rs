use contracts::usecases::u508_beneficiary_reports::{Group, Record};
use std::collections::BTreeMap;

/// Группирует записи по точному совпадению получателя (с учетом регистра и пробелов).
/// Группы упорядочены по ключу, строки внутри группы в исходном порядке.
/// Записи без получателя в отчеты не попадают.
pub fn group_by_beneficiary(records: Vec<Record>) -> Vec<Group> {
    let mut groups: BTreeMap<String, Vec<Record>> = BTreeMap::new();

    for record in records {
        if record.beneficiary.is_empty() {
            continue;
        }
        groups
            .entry(record.beneficiary.clone())
            .or_default()
            .push(record);
    }

    groups
        .into_iter()
        .map(|(beneficiary, records)| Group {
            beneficiary,
            records,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u508_beneficiary_reports::CellValue;

    fn record(beneficiary: &str, unit: &str) -> Record {
        Record {
            beneficiary: beneficiary.to_string(),
            enterprise: CellValue::text("Residencial Sol"),
            unit: CellValue::text(unit),
            total_value: CellValue::Number(1.0),
        }
    }

    #[test]
    fn test_groups_sorted_rows_in_source_order() {
        let groups = group_by_beneficiary(vec![
            record("Bruno", "B1"),
            record("Ana", "A1"),
            record("Bruno", "B2"),
            record("Ana", "A2"),
            record("Bruno", "B3"),
        ]);

        let keys: Vec<&str> = groups.iter().map(|g| g.beneficiary.as_str()).collect();
        assert_eq!(keys, vec!["Ana", "Bruno"]);

        let bruno_units: Vec<String> = groups[1]
            .records
            .iter()
            .map(|r| r.unit.plain_text())
            .collect();
        assert_eq!(bruno_units, vec!["B1", "B2", "B3"]);
    }

    #[test]
    fn test_key_is_case_and_whitespace_sensitive() {
        let groups = group_by_beneficiary(vec![
            record("Ana", "1"),
            record("ana", "2"),
            record("Ana ", "3"),
        ]);
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_rows_without_beneficiary_are_dropped() {
        let groups = group_by_beneficiary(vec![record("", "1"), record("Ana", "2")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].records.len(), 1);
    }
}
