//! Material announcements and exchange news.

use twse_core::{Endpoint, Identifier};

use crate::tool::{ToolKind, ToolSpec, Window};

pub(crate) fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new(
            "get_company_major_news",
            "Get daily major announcements from listed companies: report date, announcement date and time, \
             company, subject, applicable regulation, event date and details. \
             Pass a company code to get one company's announcement, or leave it empty to list all.",
            Endpoint::new("/opendata/t187ap04_L").keyed_by(Identifier::CompanyCode),
            ToolKind::LookupOrList,
        ),
        ToolSpec::new(
            "get_twse_news",
            "Get latest news from Taiwan Stock Exchange: market updates, regulatory changes and maintenance notices.",
            Endpoint::new("/news/newsList"),
            ToolKind::Records(Window::All),
        ),
        ToolSpec::new(
            "get_twse_events",
            "Get Taiwan Stock Exchange event announcements: seminars, training sessions and other activities.",
            Endpoint::new("/news/eventList"),
            ToolKind::Records(Window::All),
        ),
    ]
}
