//! Call and put warrants.

use twse_core::{Endpoint, Identifier};

use crate::tool::{ToolKind, ToolSpec, Window};

pub(crate) fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new(
            "get_warrant_basic_info",
            "Get basic information of listed warrants: type, exercise period, underlying, settlement \
             and exercise prices. Pass a warrant code to filter one warrant, or leave it empty to list all.",
            Endpoint::new("/opendata/t187ap37_L").keyed_by(Identifier::WarrantCode),
            ToolKind::LookupOrList,
        ),
        ToolSpec::new(
            "get_warrant_daily_trading",
            "Get daily trading volume and value for listed call/put warrants. \
             Pass a warrant code to filter one warrant, or leave it empty to list all. \
             May be empty on days without warrant trades.",
            Endpoint::new("/opendata/t187ap42_L").keyed_by(Identifier::WarrantCode),
            ToolKind::LookupOrList,
        ),
        ToolSpec::new(
            "get_warrant_trader_count",
            "Get daily number of warrant traders.",
            Endpoint::new("/opendata/t187ap43_L"),
            ToolKind::Records(Window::All),
        ),
        ToolSpec::new(
            "get_warrant_yearly_issuance_statistics",
            "Get yearly issuance statistics for listed call/put warrants.",
            Endpoint::new("/opendata/t187ap36_L"),
            ToolKind::Records(Window::All),
        ),
    ]
}
