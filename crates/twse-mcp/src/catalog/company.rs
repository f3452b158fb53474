//! Company disclosures: profiles, revenue, boards and governance.

use twse_core::{Endpoint, Identifier};

use crate::template::Template;
use crate::tool::{Limit, Meaningful, Summary, ToolKind, ToolSpec};

const fn disclosure(path: &'static str) -> Endpoint {
    Endpoint::new(path).keyed_by(Identifier::CompanyCode)
}

const fn lookup(name: &'static str, description: &'static str, path: &'static str) -> ToolSpec {
    ToolSpec::new(name, description, disclosure(path), ToolKind::Lookup)
}

const fn summary(
    name: &'static str,
    description: &'static str,
    path: &'static str,
    summary: Summary,
) -> ToolSpec {
    ToolSpec::new(name, description, disclosure(path), ToolKind::Summary(summary))
}

const MEETING_FIELDS: &[&str] = &[
    "公司代號",
    "公司名稱",
    "股東常(臨時)會日期-日期",
    "股東常(臨時)會日期-常或臨時",
];

const SHAREHOLDER_MEETINGS: Meaningful = Meaningful {
    subject: "股東會公告",
    heading: Template::new("{公司名稱} ({公司代號})"),
    require: MEETING_FIELDS,
    exclude: &["公司代號", "公司名稱", "出表日期"],
};

pub(crate) fn tools() -> Vec<ToolSpec> {
    vec![
        lookup(
            "get_company_profile",
            "Obtain the basic information of a listed company based on its stock code.",
            "/opendata/t187ap03_L",
        ),
        lookup(
            "get_public_company_profile",
            "Obtain basic information for a public company based on its stock code.",
            "/opendata/t187ap03_P",
        ),
        lookup(
            "get_company_dividend",
            "Obtain the dividend distribution information of a listed company based on its stock code.",
            "/opendata/t187ap45_L",
        ),
        lookup(
            "get_company_monthly_revenue",
            "Obtain monthly revenue information for a listed company based on its stock code.",
            "/opendata/t187ap05_L",
        ),
        lookup(
            "get_public_company_monthly_revenue",
            "Obtain monthly revenue summary for a public company based on its stock code.",
            "/opendata/t187ap05_P",
        ),
        lookup(
            "get_company_major_shareholders",
            "Obtain major shareholders (over 10% ownership) information for a listed company based on its stock code.",
            "/opendata/t187ap02_L",
        ),
        lookup(
            "get_company_eps_statistics",
            "Obtain EPS statistics by industry for a listed company based on its stock code.",
            "/opendata/t187ap14_L",
        ),
        lookup(
            "get_company_board_shareholdings",
            "Obtain board members' shareholding details for a listed company based on its stock code.",
            "/opendata/t187ap11_L",
        ),
        lookup(
            "get_company_daily_insider_trades_preannounced",
            "Obtain daily insider share transfer pre-announcements for a listed company based on its stock code.",
            "/opendata/t187ap12_L",
        ),
        lookup(
            "get_company_daily_insider_trades_untransferred",
            "Obtain daily insider share transfers that have not yet been executed for a listed company based on its stock code.",
            "/opendata/t187ap13_L",
        ),
        lookup(
            "get_company_sec_regulatory_penalties",
            "Obtain SEC regulatory penalty information for a listed company based on its stock code.",
            "/opendata/t187ap22_L",
        ),
        lookup(
            "get_company_director_compensation",
            "Obtain director compensation information for a listed company based on its stock code.",
            "/opendata/t187ap29_A_L",
        ),
        lookup(
            "get_company_supervisor_compensation",
            "Obtain supervisor compensation information for a listed company based on its stock code.",
            "/opendata/t187ap29_B_L",
        ),
        lookup(
            "get_company_consolidated_director_compensation",
            "Obtain consolidated director compensation information for a listed company based on its stock code.",
            "/opendata/t187ap29_C_L",
        ),
        lookup(
            "get_company_consolidated_supervisor_compensation",
            "Obtain consolidated supervisor compensation information for a listed company based on its stock code.",
            "/opendata/t187ap29_D_L",
        ),
        lookup(
            "get_company_information_disclosure_violations",
            "Obtain information disclosure and shareholder meeting regulation violations for a listed company based on its stock code.",
            "/opendata/t187ap23_L",
        ),
        lookup(
            "get_company_governance_regulations",
            "Obtain corporate governance regulations and rules for a listed company based on its stock code.",
            "/opendata/t187ap32_L",
        ),
        summary(
            "get_company_board_insufficient_shares",
            "Get all listed companies where board members hold insufficient shares as required by law.",
            "/opendata/t187ap08_L",
            Summary::new(
                "董監事持股不足法定成數",
                "- {公司名稱} ({公司代號}): {持股不足法定成數人數}/{董監事人數} 人持股不足",
            )
            .limit(Limit::All),
        ),
        summary(
            "get_company_board_insufficient_shares_consecutive",
            "Get companies where board members have held insufficient shares for 3 consecutive months or more.",
            "/opendata/t187ap10_L",
            Summary::new(
                "董監事持股不足法定成數連續達3個月以上",
                "- {公司名稱} ({公司代號}): 連續 {連續達3個月以上之月數} 個月",
            )
            .limit(Limit::All),
        ),
        summary(
            "get_companies_with_independent_directors",
            "Get all listed companies with information about independent directors.",
            "/opendata/t187ap30_L",
            Summary::new(
                "獨立董監事兼任情形",
                "- {公司名稱} ({公司代號}): {獨立董監事人數}/{董監事總人數} 位獨立董監事",
            )
            .limit(Limit::All),
        ),
        ToolSpec::new(
            "get_market_disposal_stocks",
            "Get stocks that have been disposed by the market.",
            Endpoint::new("/announcement/punish").keyed_by(Identifier::StockCode),
            ToolKind::Summary(
                Summary::new("處置股票", "- {證券名稱} ({證券代號}): {處置種類}").limit(Limit::All),
            ),
        ),
        summary(
            "get_companies_with_ownership_changes",
            "Get companies with changes in ownership structure.",
            "/opendata/t187ap24_L",
            Summary::new("經營權異動公司", "- {公司名稱} ({公司代號}): {異動日期}").limit(Limit::All),
        ),
        summary(
            "get_companies_with_business_scope_changes",
            "Get companies with major changes in business scope.",
            "/opendata/t187ap25_L",
            Summary::new("營業範圍重大變更公司", "- {公司名稱} ({公司代號}): {變更日期}")
                .limit(Limit::All),
        ),
        summary(
            "get_companies_ownership_changes_business_scope",
            "Get companies with ownership changes that also have major business scope changes and were suspended from trading.",
            "/opendata/t187ap26_L",
            Summary::new(
                "經營權異動且營業範圍重大變更停止買賣公司",
                "- {公司名稱} ({公司代號}): {停止買賣日期}",
            )
            .limit(Limit::All),
        ),
        summary(
            "get_companies_ownership_changes_business_scope_trading",
            "Get companies with ownership changes and major business scope changes that were changed to trading method.",
            "/opendata/t187ap27_L",
            Summary::new(
                "經營權異動且營業範圍重大變更列為變更交易公司",
                "- {公司名稱} ({公司代號}): {變更日期}",
            )
            .limit(Limit::All),
        ),
        summary(
            "get_company_ceo_dual_role",
            "Get information about whether company chairmen also serve as CEOs.",
            "/opendata/t187ap33_L",
            Summary::new(
                "董事長是否兼任總經理",
                "- {公司名稱} ({公司代號}): {董事長是否兼任總經理}",
            )
            .limit(Limit::All),
        ),
        summary(
            "get_company_board_pledged_shares",
            "Get board members' pledged shares as a percentage of their actual holdings.",
            "/opendata/t187ap09_L",
            Summary::new(
                "董監事質權設定占實際持有股數",
                "- {公司名稱} ({公司代號}): {質權設定占實際持有股數百分比}%",
            )
            .limit(Limit::All),
        ),
        summary(
            "get_companies_cumulative_voting",
            "Get companies that use cumulative voting, full roll-call voting, or nominee nomination systems for electing directors and supervisors.",
            "/opendata/t187ap34_L",
            Summary::new(
                "採累積投票制、全額連記法、候選人提名制選任董監事",
                "- {公司名稱} ({公司代號}): {選任方式}",
            )
            .limit(Limit::All),
        ),
        summary(
            "get_company_shareholder_proposal_exercise",
            "Get information about shareholder exercise of proposal rights.",
            "/opendata/t187ap35_L",
            Summary::new(
                "股東行使提案權情形",
                "- {公司名稱} ({公司代號}): {通過件數}/{提案總件數} 件通過",
            )
            .limit(Limit::All),
        ),
        summary(
            "get_company_shareholder_meeting_dates",
            "Get shareholder meeting dates, locations and electronic voting information.",
            "/opendata/t187ap41_L",
            Summary::new(
                "股東會日期、地點及電子投票",
                "- {公司名稱} ({公司代號}): {股東常(臨時)會} - {開會日期} at {開會地點}, 電子投票: {是否採電子投票}",
            )
            .require(&["公司代號", "公司名稱", "開會日期", "開會地點", "是否採電子投票"]),
        ),
        ToolSpec::new(
            "get_companies_with_csr_reports_103",
            "Get all companies required to prepare and submit CSR reports in 2014 (103 year).",
            Endpoint::new("/static/20151104/CSR103")
                .keyed_by(Identifier::CompanyCode)
                .tolerate_malformed(),
            ToolKind::Summary(
                Summary::new("103 年度 CSR 報告公司", "- {公司名稱} ({公司代號})")
                    .require(&["公司代號", "公司名稱"])
                    .limit(Limit::Fixed(50)),
            ),
        ),
        ToolSpec::new(
            "get_company_shareholder_meeting_announcements",
            "Get comprehensive shareholder meeting announcements with all available information (since 2008).",
            disclosure("/opendata/t187ap38_L"),
            ToolKind::MeaningfulList(SHAREHOLDER_MEETINGS),
        ),
        ToolSpec::new(
            "get_company_shareholder_meeting_announcements_by_code",
            "Get comprehensive shareholder meeting announcements for a specific company by stock code.",
            disclosure("/opendata/t187ap38_L"),
            ToolKind::MeaningfulLookup(SHAREHOLDER_MEETINGS),
        ),
    ]
}
