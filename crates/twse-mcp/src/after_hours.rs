//! After-hours fixed-price trading: single-stock view and paged list.

use twse_core::format::is_absent;
use twse_core::locate::locate;
use twse_core::{Identifier, Record};

const SUBJECT: &str = "盤後定價交易";

fn field(record: &Record, key: &str) -> String {
    record.text_or(key, "N/A").into_owned()
}

fn has_traded(record: &Record) -> bool {
    record.get("TradeVolume").is_some_and(|v| !is_absent(v))
}

/// Renders one stock's after-hours session.
pub fn render_stock(records: &[Record], code: &str) -> String {
    let Some(record) = locate(records, code, Identifier::Code) else {
        return format!("查無股票代碼 {code} 的{SUBJECT}資料。");
    };

    let mut out = format!("{} ({code}) {SUBJECT}資訊：\n\n", field(record, "Name"));
    out.push_str(&format!("成交價: {}\n", field(record, "TradePrice")));
    if has_traded(record) {
        out.push_str(&format!("成交量: {}\n", field(record, "TradeVolume")));
        out.push_str(&format!("成交金額: {}\n", field(record, "TradeValue")));
        out.push_str(&format!("成交筆數: {}\n", field(record, "Transaction")));
    } else {
        out.push_str("狀態: 無成交\n");
    }
    for (key, label) in [("BidVolume", "委買量"), ("AskVolume", "委賣量")] {
        if record.get(key).is_some_and(|v| !is_absent(v)) {
            out.push_str(&format!("{label}: {}\n", field(record, key)));
        }
    }
    out.trim_end().to_string()
}

/// Renders one page of the stocks that traded, `limit` per page, pages from 0.
///
/// `limit` must be positive.
pub fn render_page(records: &[Record], limit: usize, page_number: usize) -> String {
    let traded: Vec<&Record> = records.iter().filter(|r| has_traded(r)).collect();
    let total = traded.len();
    if total == 0 {
        return format!("目前沒有{SUBJECT}成交資料。");
    }

    let start = page_number.saturating_mul(limit);
    if start >= total {
        return format!(
            "頁碼超出範圍。共有 {total} 筆資料，每頁 {limit} 筆，最大頁碼為 {}。",
            (total - 1) / limit
        );
    }
    let end = start.saturating_add(limit).min(total);

    let mut out = format!(
        "集中市場{SUBJECT}資料（第 {} 頁，共 {total} 筆）：\n\n",
        page_number + 1
    );
    for record in &traded[start..end] {
        out.push_str(&format!(
            "- {} ({})\n  成交價: {} | 成交量: {} | 成交金額: {}\n",
            field(record, "Name"),
            field(record, "Code"),
            field(record, "TradePrice"),
            field(record, "TradeVolume"),
            field(record, "TradeValue"),
        ));
    }
    let remaining = total - end;
    if remaining > 0 {
        out.push_str(&format!(
            "\n還有 {remaining} 筆資料。使用 page_number={} 查看下一頁。",
            page_number + 1
        ));
    }
    out.trim_end().to_string()
}
