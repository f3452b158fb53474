//! Listing applications, new listings and delistings.

use twse_core::{Endpoint, Identifier};

use crate::tool::{Summary, ToolKind, ToolSpec};

const fn listing(
    name: &'static str,
    description: &'static str,
    path: &'static str,
    summary: Summary,
) -> ToolSpec {
    ToolSpec::new(
        name,
        description,
        Endpoint::new(path).keyed_by(Identifier::Code),
        ToolKind::Summary(summary),
    )
}

const APPLICATION_LINE: &str =
    "- {Company} ({Code}): 申請日期 {ApplicationDate}, 核准日期 {ApprovedDate}, 上市日期 {ListingDate}";

pub(crate) fn tools() -> Vec<ToolSpec> {
    vec![
        listing(
            "get_foreign_companies_applying_for_listing",
            "Get foreign companies applying for first listing on TWSE.",
            "/company/applylistingForeign",
            Summary::new("外國公司申請第一上市", APPLICATION_LINE),
        ),
        listing(
            "get_local_companies_applying_for_listing",
            "Get local companies applying for listing.",
            "/company/applylistingLocal",
            Summary::new("申請上市之本國公司", APPLICATION_LINE),
        ),
        listing(
            "get_recently_listed_companies",
            "Get recently listed companies.",
            "/company/newlisting",
            Summary::new("最近上市公司", "- {Company} ({Code}): 上市日期 {ListingDate}"),
        ),
        listing(
            "get_suspended_listed_companies",
            "Get companies whose listing has been terminated.",
            "/company/suspendListingCsvAndHtml",
            Summary::new("終止上市公司", "- {Company} ({Code}): 終止日期 {DelistingDate}"),
        ),
    ]
}
