//! User-facing message templates.
//!
//! Tool output is read by an agent answering in Traditional Chinese, so the
//! texts follow the upstream data's language.

/// `目前沒有{data_type}資料。`
pub fn no_data(data_type: &str) -> String {
    format!("目前沒有{data_type}資料。")
}

/// `查詢失敗: {error}`
pub fn query_failed(error: impl std::fmt::Display) -> String {
    format!("查詢失敗: {error}")
}

/// `查無{target}的{data_type}`
pub fn no_data_for_code(target: &str, data_type: &str) -> String {
    format!("查無{target}的{data_type}")
}

/// `共有 {count} 筆{data_type}：`
pub fn total_records(count: usize, data_type: &str) -> String {
    format!("共有 {count} 筆{data_type}：")
}

/// `... 還有 {count} 筆資料`
pub fn more_records(count: usize) -> String {
    format!("... 還有 {count} 筆資料")
}

/// Reason text for a body that is not valid JSON.
pub fn malformed_body(reason: &str) -> String {
    format!("上游回傳的資料不是有效的 JSON ({reason})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        assert_eq!(no_data("券商業務別人員數"), "目前沒有券商業務別人員數資料。");
        assert_eq!(query_failed("timeout"), "查詢失敗: timeout");
        assert_eq!(
            no_data_for_code("股票代號 2330", "日成交資訊"),
            "查無股票代號 2330的日成交資訊"
        );
        assert_eq!(total_records(3, "基金基本資料"), "共有 3 筆基金基本資料：");
        assert_eq!(more_records(5), "... 還有 5 筆資料");
    }
}
