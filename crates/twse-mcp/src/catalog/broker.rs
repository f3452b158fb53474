//! Securities firms: personnel, statements, branches and services.

use twse_core::Endpoint;

use crate::tool::{Summary, ToolKind, ToolSpec};

const fn broker(
    name: &'static str,
    description: &'static str,
    path: &'static str,
    summary: Summary,
) -> ToolSpec {
    ToolSpec::new(name, description, Endpoint::new(path), ToolKind::Summary(summary))
}

pub(crate) fn tools() -> Vec<ToolSpec> {
    vec![
        broker(
            "get_broker_service_personnel",
            "Get personnel numbers by service type for brokers.",
            "/opendata/t187ap01",
            Summary::new("券商業務別人員數", "- {券商名稱} ({券商代號}): {總人數}"),
        ),
        broker(
            "get_broker_monthly_statements",
            "Get monthly statements for brokers.",
            "/opendata/t187ap20",
            Summary::new("券商每月月計表", "- {券商名稱} ({券商代號}): {月份}"),
        ),
        broker(
            "get_broker_income_expenditure",
            "Get income and expenditure overview for brokers.",
            "/opendata/t187ap21",
            Summary::new("券商收支概況表", "- {券商名稱} ({券商代號}): {期間}"),
        ),
        broker(
            "get_broker_basic_info",
            "Get basic information for brokers.",
            "/opendata/t187ap18",
            Summary::new("證券商基本", "- {券商名稱} ({券商代號}): {設立日期}"),
        ),
        broker(
            "get_broker_electronic_trading_statistics",
            "Get electronic trading statistics.",
            "/opendata/t187ap19",
            Summary::new(
                "電子式交易統計",
                "- {日期}: 總成交量 {總成交量}, 電子式成交量 {電子式成交量}",
            )
            .title("電子式交易統計資訊"),
        ),
        broker(
            "get_broker_gender_statistics",
            "Get broker personnel gender statistics.",
            "/opendata/OpenData_BRK01",
            Summary::new(
                "證券商營業員男女人數統計",
                "- {券商名稱} ({券商代號}): 男 {男營業員人數} 人, 女 {女營業員人數} 人",
            ),
        ),
        broker(
            "get_broker_branch_info",
            "Get broker branch office basic information.",
            "/opendata/OpenData_BRK02",
            Summary::new("證券商分公司基本", "- {分公司名稱} ({分公司代號}): {總公司名稱}"),
        ),
        broker(
            "get_brokers_offering_regular_investment",
            "Get list of brokers offering regular investment services.",
            "/brokerService/secRegData",
            Summary::new("開辦定期定額業務證券商名單", "- {券商名稱} ({券商代號}): {開辦日期}")
                .title("開辦定期定額業務證券商"),
        ),
        broker(
            "get_broker_headquarters_info",
            "Get basic information of broker headquarters.",
            "/brokerService/brokerList",
            Summary::new(
                "證券商總公司基本",
                "- {券商名稱} ({券商代號}): 設立日期 {設立日期}, 資本額 {資本額}",
            ),
        ),
    ]
}
