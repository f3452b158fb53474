//! Built-in tool catalogue, one provider per upstream area.

mod broker;
mod company;
mod esg;
mod financials;
mod listing;
mod market;
mod news;
mod other;
mod trading;
mod warrants;

use crate::registry::{ToolProvider, ToolRegistry};

/// Every built-in provider, in registration order.
pub static PROVIDERS: &[ToolProvider] = &[
    ToolProvider { name: "company", tools: company::tools },
    ToolProvider { name: "esg", tools: esg::tools },
    ToolProvider { name: "financials", tools: financials::tools },
    ToolProvider { name: "news", tools: news::tools },
    ToolProvider { name: "listing", tools: listing::tools },
    ToolProvider { name: "trading", tools: trading::tools },
    ToolProvider { name: "warrants", tools: warrants::tools },
    ToolProvider { name: "market", tools: market::tools },
    ToolProvider { name: "broker", tools: broker::tools },
    ToolProvider { name: "other", tools: other::tools },
];

/// Registry holding the whole catalogue.
pub fn registry() -> ToolRegistry {
    ToolRegistry::from_providers(PROVIDERS)
}
