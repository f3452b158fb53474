//! Property and scenario tests for lookup and formatting.

use proptest::prelude::*;
use serde_json::Value;

use twse_core::prelude::*;

fn record_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    // Distinct keys; values may be any text, including the absent sentinels.
    prop::collection::btree_map("[A-Za-z\u{4e00}-\u{4e10}]{1,6}", ".{0,8}", 0..8)
        .prop_map(|m| m.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn to_record(pairs: &[(String, String)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect()
}

proptest! {
    #[test]
    fn format_is_idempotent(pairs in record_strategy()) {
        let record = to_record(&pairs);
        prop_assert_eq!(format_record(&record), format_record(&record));
    }

    #[test]
    fn format_keeps_every_pair_in_order(pairs in record_strategy()) {
        let record = to_record(&pairs);
        let expected: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        prop_assert_eq!(format_record(&record), expected.join("\n"));
    }

    #[test]
    fn meaningful_drops_exactly_the_sentinels(pairs in record_strategy()) {
        let record = to_record(&pairs);
        let filtered = filter_meaningful(&record, &[]);
        let kept: Vec<&str> = filtered.iter().map(|(k, _)| k).collect();
        let expected: Vec<&str> = pairs
            .iter()
            .filter(|(_, v)| !["", "0", "0.000", "N/A"].contains(&v.as_str()))
            .map(|(k, _)| k.as_str())
            .collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn locate_returns_first_match(codes in prop::collection::vec("[0-9]{4}", 1..10)) {
        let records: Vec<Record> = codes
            .iter()
            .enumerate()
            .map(|(i, c)| [("Code", Value::from(c.as_str())), ("Row", Value::from(i))].into_iter().collect())
            .collect();
        let target = &codes[codes.len() / 2];
        let first = codes.iter().position(|c| c == target).unwrap();
        let found = locate(&records, target, Identifier::Code).unwrap();
        prop_assert_eq!(found.get("Row"), Some(&Value::from(first)));
    }
}

#[test]
fn test_tsmc_scenario() {
    let records = Fetched::from_body(r#"[{"Code":"2330","Name":"TSMC"},{"Code":"2317","Name":"Hon Hai"}]"#)
        .into_records();

    let tsmc = locate(&records, "2330", Identifier::Code).unwrap();
    assert_eq!(tsmc.get_str("Name"), Some("TSMC"));
    assert!(locate(&records, "9999", Identifier::Code).is_none());
    assert_eq!(format_record(tsmc), "Code: 2330\nName: TSMC");
}

#[test]
fn test_single_object_body_is_one_record() {
    let records = Fetched::from_body(r#"{"Date":"1130102","TAIEX":"17,853.76"}"#).into_records();
    assert_eq!(records.len(), 1);
    assert_eq!(format_record(&records[0]), "Date: 1130102\nTAIEX: 17,853.76");
}

#[test]
fn test_null_values_render_empty() {
    let records = Fetched::from_body(r#"[{"公司代號":"1101","備註":null}]"#).into_records();
    assert_eq!(format_record(&records[0]), "公司代號: 1101\n備註: ");
    assert_eq!(format_meaningful(&records[0], &[]), "公司代號: 1101");
}
