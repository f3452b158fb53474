//! Selecting one record from a batch by its code.

use crate::endpoint::Identifier;
use crate::record::Record;

/// Returns the first record whose identifier field equals `id`.
///
/// Matching is exact and case-sensitive. When several records match, the
/// first in upstream order wins; upstream order is not guaranteed stable.
pub fn locate<'a>(records: &'a [Record], id: &str, identifier: Identifier) -> Option<&'a Record> {
    locate_by_keys(records, id, identifier.keys())
}

/// Returns the first record where any of `keys` holds the string `id`.
pub fn locate_by_keys<'a>(records: &'a [Record], id: &str, keys: &[&str]) -> Option<&'a Record> {
    records
        .iter()
        .find(|record| keys.iter().any(|key| record.get_str(key) == Some(id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        Record::list_from_json(
            r#"[
                {"Code":"2330","Name":"TSMC"},
                {"Code":"2317","Name":"Hon Hai"},
                {"Code":"2330","Name":"duplicate"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let records = records();
        let found = locate(&records, "2330", Identifier::Code).unwrap();
        assert_eq!(found.get_str("Name"), Some("TSMC"));
    }

    #[test]
    fn test_not_found() {
        let records = records();
        assert!(locate(&records, "9999", Identifier::Code).is_none());
        assert!(locate(&[], "2330", Identifier::Code).is_none());
    }

    #[test]
    fn test_exact_match_only() {
        let records = records();
        assert!(locate(&records, " 2330", Identifier::Code).is_none());
        assert!(locate(&records, "233", Identifier::Code).is_none());
    }

    #[test]
    fn test_declared_identifier_ignores_other_fields() {
        let records = Record::list_from_json(r#"[{"公司代號":"1101","Code":"2330"}]"#).unwrap();
        assert!(locate(&records, "2330", Identifier::CompanyCode).is_none());
        assert!(locate(&records, "1101", Identifier::CompanyCode).is_some());
    }

    #[test]
    fn test_probe_tries_all_schemas() {
        let records = Record::list_from_json(
            r#"[{"權證代號":"030001"},{"股票代號":"0050"},{"證券代號":"2603"}]"#,
        )
        .unwrap();
        assert!(locate(&records, "030001", Identifier::Probe).is_some());
        assert!(locate(&records, "0050", Identifier::Probe).is_some());
        assert!(locate(&records, "2603", Identifier::Probe).is_some());
    }

    #[test]
    fn test_numeric_values_do_not_match() {
        let records = Record::list_from_json(r#"[{"Code":2330}]"#).unwrap();
        assert!(locate(&records, "2330", Identifier::Code).is_none());
    }
}
