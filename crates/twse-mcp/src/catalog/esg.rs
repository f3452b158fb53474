//! Sustainability (ESG) disclosures.

use twse_core::{Endpoint, Identifier};

use crate::tool::{ToolKind, ToolSpec};

const fn lookup(name: &'static str, description: &'static str, endpoint: Endpoint) -> ToolSpec {
    ToolSpec::new(name, description, endpoint.keyed_by(Identifier::CompanyCode), ToolKind::Lookup)
}

pub(crate) fn tools() -> Vec<ToolSpec> {
    vec![
        lookup(
            "get_company_governance_info",
            "Obtain corporate governance information for a listed company based on its stock code.",
            Endpoint::new("/opendata/t187ap46_L_9"),
        ),
        lookup(
            "get_company_climate_management",
            "Obtain climate-related management information for a listed company based on its stock code.",
            Endpoint::new("/opendata/t187ap46_L_8"),
        ),
        lookup(
            "get_company_risk_management",
            "Obtain risk management policy information for a listed company based on its stock code.",
            Endpoint::new("/opendata/t187ap46_L_19"),
        ),
        lookup(
            "get_company_supply_chain_management",
            "Obtain supply chain management information for a listed company based on its stock code.",
            Endpoint::new("/opendata/t187ap46_L_13"),
        ),
        lookup(
            "get_company_info_security",
            "Obtain information security data for a listed company based on its stock code.",
            Endpoint::new("/opendata/t187ap46_L_16"),
        ),
        // Food safety report; the upstream body is frequently not JSON.
        lookup(
            "get_company_food_safety",
            "Obtain food safety disclosures for a listed company based on its stock code.",
            Endpoint::new("/opendata/t187ap46_L_12").tolerate_malformed(),
        ),
    ]
}
