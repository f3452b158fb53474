//! Funds, bond interest and the trading calendar.

use twse_core::Endpoint;

use crate::tool::{Limit, Summary, ToolKind, ToolSpec};

pub(crate) fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new(
            "get_fund_basic_info",
            "Get basic information summary for all funds.",
            Endpoint::new("/opendata/t187ap47_L"),
            ToolKind::Summary(Summary::new("基金基本", "- {基金名稱} ({基金代號}): {基金類型}")),
        ),
        ToolSpec::new(
            "get_central_depository_bond_redemption",
            "Get central depository government bond interest compensation data.",
            Endpoint::new("/exchangeReport/BFI61U"),
            ToolKind::Summary(Summary::new("中央登錄公債補息", "- {Name} ({Code}): {StartingDate}")),
        ),
        ToolSpec::new(
            "get_market_holiday_schedule",
            "Get holiday schedule for securities centralized trading market.",
            Endpoint::new("/holidaySchedule/holidaySchedule"),
            ToolKind::Summary(
                Summary::new(
                    "有價證券集中交易市場開（休）市日期",
                    "- {Date} ({Weekday}) {Name}: {Description}",
                )
                .title("有價證券集中交易市場開（休）市日期")
                .limit(Limit::Holiday),
            ),
        ),
    ]
}
