//! Market indices, trading statistics and foreign holdings.

use twse_core::Endpoint;

use crate::tool::{ToolKind, ToolSpec, Window};

const HISTORY_DAYS: usize = 20;

const fn history(name: &'static str, description: &'static str, path: &'static str) -> ToolSpec {
    ToolSpec::new(
        name,
        description,
        Endpoint::new(path),
        ToolKind::Records(Window::Last(HISTORY_DAYS)),
    )
}

pub(crate) fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new(
            "get_market_index_info",
            "Get TWSE market index information. category: major (default), sector, esg, leverage, \
             return, thematic, dividend or all. count: indices to return (default 20, max 50 unless \
             category is all, 0 for no limit). format: detailed (default), summary or simple.",
            Endpoint::new("/exchangeReport/MI_INDEX"),
            ToolKind::MarketIndex,
        ),
        history(
            "get_market_historical_index",
            "Get the latest 20 days of TAIEX historical index data.",
            "/indicesReport/MI_5MINS_HIST",
        ),
        history(
            "get_taiwan_island_index_history",
            "Get the latest 20 days of FTSE TWSE Taiwan (寶島) index history.",
            "/indicesReport/FRMSA",
        ),
        history(
            "get_taiwan_50_index_history",
            "Get the latest 20 days of FTSE TWSE Taiwan 50 index history.",
            "/indicesReport/TAI50I",
        ),
        history(
            "get_taiwan_total_return_index",
            "Get the latest 20 days of TAIEX total return index history.",
            "/indicesReport/MFI94U",
        ),
        ToolSpec::new(
            "get_margin_trading_info",
            "Get margin trading summary (first 10 entries).",
            Endpoint::new("/exchangeReport/MI_MARGN"),
            ToolKind::Records(Window::First(10)),
        ),
        history(
            "get_real_time_trading_stats",
            "Get the latest 5-second order and trade statistics: accumulated bid, ask and trade counts, volumes and value.",
            "/exchangeReport/MI_5MINS",
        ),
        ToolSpec::new(
            "get_foreign_investment_by_industry",
            "Get foreign and mainland China investment holding ratios by industry category.",
            Endpoint::new("/fund/MI_QFIIS_cat"),
            ToolKind::Records(Window::All),
        ),
        ToolSpec::new(
            "get_top_foreign_holdings",
            "Get top 20 companies by foreign and mainland China investment holdings.",
            Endpoint::new("/fund/MI_QFIIS_sort_20"),
            ToolKind::Records(Window::All),
        ),
    ]
}
