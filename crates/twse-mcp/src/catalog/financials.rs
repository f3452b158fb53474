//! Financial statements, general industry.

use twse_core::{Endpoint, Identifier};

use crate::tool::{ToolKind, ToolSpec};

pub(crate) fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new(
            "get_company_income_statement",
            "Obtain comprehensive income statement for a listed company based on its stock code (general industry).",
            Endpoint::new("/opendata/t187ap06_L_ci").keyed_by(Identifier::CompanyCode),
            ToolKind::Lookup,
        ),
        ToolSpec::new(
            "get_company_balance_sheet",
            "Obtain balance sheet for a listed company based on its stock code (general industry).",
            Endpoint::new("/opendata/t187ap07_L_ci").keyed_by(Identifier::CompanyCode),
            ToolKind::Lookup,
        ),
    ]
}
