//! Trading reports: per-stock daily, monthly and yearly figures, dividends,
//! valuation and the exchange's daily market announcements.

use twse_core::{Endpoint, Identifier};

use crate::template::Template;
use crate::tool::{Detail, Limit, Ranking, Summary, ToolKind, ToolSpec, Window};

const fn report(path: &'static str) -> Endpoint {
    Endpoint::new(path).keyed_by(Identifier::Code)
}

const fn market_summary(
    name: &'static str,
    description: &'static str,
    path: &'static str,
    summary: Summary,
) -> ToolSpec {
    ToolSpec::new(
        name,
        description,
        Endpoint::new(path).keyed_by(Identifier::StockCode),
        ToolKind::Summary(summary),
    )
}

const DAILY: Detail = Detail {
    subject: "日成交資訊",
    title: "日成交資訊",
    lines: &[
        Template::new("日期: {Date}"),
        Template::new("開盤價: {OpeningPrice}"),
        Template::new("最高價: {HighestPrice}"),
        Template::new("最低價: {LowestPrice}"),
        Template::new("收盤價: {ClosingPrice}"),
        Template::new("漲跌: {Change}"),
        Template::new("成交股數: {TradeVolume}"),
        Template::new("成交金額: {TradeValue}"),
        Template::new("成交筆數: {Transaction}"),
    ],
};

const MONTHLY: Detail = Detail {
    subject: "月成交資訊",
    title: "月成交資訊",
    lines: &[
        Template::new("月份: {Month}"),
        Template::new("最高價: {HighestPrice}"),
        Template::new("最低價: {LowestPrice}"),
        Template::new("加權平均價: {WeightedAvgPriceAB}"),
        Template::new("成交筆數: {Transaction}"),
        Template::new("成交金額: {TradeValueA}"),
        Template::new("成交股數: {TradeVolumeB}"),
        Template::new("週轉率(%): {TurnoverRatio}"),
    ],
};

const YEARLY: Detail = Detail {
    subject: "年成交資訊",
    title: "年成交資訊",
    lines: &[
        Template::new("年度: {Year}"),
        Template::new("成交股數: {TradeVolume}"),
        Template::new("成交金額: {TradeValue}"),
        Template::new("成交筆數: {Transaction}"),
        Template::new("最高價: {HighestPrice} (日期: {HDate})"),
        Template::new("最低價: {LowestPrice} (日期: {LDate})"),
        Template::new("平均收盤價: {AvgClosingPrice}"),
    ],
};

const VALUATION: Detail = Detail {
    subject: "本益比等評價指標資料",
    title: "評價指標",
    lines: &[
        Template::new("日期: {Date}"),
        Template::new("本益比 (P/E): {PEratio}"),
        Template::new("殖利率 (%): {DividendYield}"),
        Template::new("股價淨值比 (P/B): {PBratio}"),
    ],
};

pub(crate) fn tools() -> Vec<ToolSpec> {
    let mut tools = stock_tools();
    tools.extend(market_tools());
    tools
}

fn stock_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new(
            "get_stock_daily_trading",
            "Obtain daily trading information for a listed company stock based on its stock code: \
             opening, highest, lowest and closing price, change, volume, value and transaction count.",
            report("/exchangeReport/STOCK_DAY_ALL"),
            ToolKind::Detail(DAILY),
        ),
        ToolSpec::new(
            "get_stock_monthly_average",
            "Obtain daily closing price and monthly average price for a listed company stock based on its stock code.",
            report("/exchangeReport/STOCK_DAY_AVG_ALL"),
            ToolKind::Lookup,
        ),
        ToolSpec::new(
            "get_stock_monthly_trading",
            "Obtain monthly trading information for a listed company stock based on its stock code: \
             price range, weighted average price, value, volume and turnover ratio.",
            report("/exchangeReport/FMSRFK_ALL"),
            ToolKind::Detail(MONTHLY),
        ),
        ToolSpec::new(
            "get_stock_yearly_trading",
            "Obtain yearly trading information for a listed company stock based on its stock code: \
             volume, value, highest and lowest price with their dates, and average closing price.",
            report("/exchangeReport/FMNPTK_ALL"),
            ToolKind::Detail(YEARLY),
        ),
        ToolSpec::new(
            "get_stock_valuation_ratios",
            "Obtain P/E ratio, dividend yield, and P/B ratio for a listed company stock based on its stock code.",
            report("/exchangeReport/BWIBBU_ALL"),
            ToolKind::Detail(VALUATION),
        ),
        ToolSpec::new(
            "get_dividend_rights_schedule",
            "Get ex-dividend and ex-rights schedule for listed stocks: dates, stock and cash dividends, \
             rights offerings. Pass a stock code to filter one company, or leave it empty to list all.",
            Endpoint::new("/exchangeReport/TWT48U_ALL").keyed_by(Identifier::StockNo),
            ToolKind::LookupOrList,
        ),
        ToolSpec::new(
            "get_etf_regular_investment_ranking",
            "Get top 10 stocks and ETFs by number of regular investment (定期定額) accounts.",
            Endpoint::new("/ETFReport/ETFRank"),
            ToolKind::Records(Window::All),
        ),
        ToolSpec::new(
            "get_after_hours_trading",
            "Get after-hours fixed-price trading. Pass a stock code for one stock, \
             or page through every stock that traded with limit and page_number.",
            report("/exchangeReport/BFT41U"),
            ToolKind::AfterHours,
        ),
    ]
}

fn market_tools() -> Vec<ToolSpec> {
    vec![
        market_summary(
            "get_stocks_no_price_change_first_five_days",
            "Get stocks with no price change limit in the first five trading days.",
            "/exchangeReport/TWT88U",
            Summary::new("上市個股首五日無漲跌幅", "- {證券名稱} ({證券代號}): 參考價 {參考價}"),
        ),
        market_summary(
            "get_financial_program_abnormal_recommendations",
            "Get stocks abnormally recommended on investment programs.",
            "/Announcement/BFZFZU_T",
            Summary::new("投資理財節目異常推介個股", "- {證券名稱} ({證券代號}): {節目名稱}"),
        ),
        market_summary(
            "get_daily_day_trading_targets",
            "Get daily day-trading targets and statistics for listed stocks.",
            "/exchangeReport/TWTB4U",
            Summary::new(
                "上市股票每日當日沖銷交易標的及統計",
                "- {證券名稱} ({證券代號}): 當日沖銷交易量 {當日沖銷交易量}",
            ),
        ),
        market_summary(
            "get_suspended_day_trading_announcement",
            "Get the advance notice of stocks suspended from sell-first day trading.",
            "/exchangeReport/TWTBAU1",
            Summary::new(
                "集中市場暫停先賣後買當日沖銷交易標的預告表",
                "- {證券名稱} ({證券代號}): 暫停日期 {暫停日期}",
            ),
        ),
        market_summary(
            "get_suspended_day_trading_history",
            "Get the history of stocks suspended from sell-first day trading.",
            "/exchangeReport/TWTBAU2",
            Summary::new(
                "集中市場暫停先賣後買當日沖銷交易歷史查詢",
                "- {證券名稱} ({證券代號}): 暫停日期 {暫停日期}",
            ),
        ),
        market_summary(
            "get_cross_market_trading_info",
            "Get daily cross-market trading information for listed and OTC stocks.",
            "/exchangeReport/MI_INDEX4",
            Summary::new("每日上市上櫃跨市場成交", "- {日期} {市場別}: 成交量 {成交量}")
                .title("每日上市上櫃跨市場成交資訊")
                .empty("目前沒有每日上市上櫃跨市場成交資訊。"),
        ),
        ToolSpec::new(
            "get_top_20_volume_stocks",
            "Get top 20 stocks by trading volume in the centralized market.",
            report("/exchangeReport/MI_INDEX20"),
            ToolKind::Ranking(Ranking {
                subject: "集中市場每日成交量前二十名證券",
                heading: Template::new("集中市場每日成交量前二十名證券 (日期: {Date})"),
                entry: Template::new(
                    "{Rank}. {Name} ({Code})\n   成交量: {TradeVolume} | 成交筆數: {Transaction}\n   收盤價: {ClosingPrice} | 漲跌: {Dir}{Change}",
                ),
                limit: 20,
            }),
        ),
        market_summary(
            "get_odd_lot_trading_quotes",
            "Get odd-lot trading quotes in the centralized market.",
            "/exchangeReport/TWT53U",
            Summary::new(
                "集中市場零股交易行情單",
                "- {證券名稱} ({證券代號}): 成交價 {成交價}, 成交量 {成交量}",
            ),
        ),
        market_summary(
            "get_suspended_trading_stocks",
            "Get securities whose trading is suspended in the centralized market.",
            "/exchangeReport/TWTAWU",
            Summary::new("集中市場暫停交易證券", "- {證券名稱} ({證券代號}): {暫停原因}"),
        ),
        market_summary(
            "get_margin_loan_restrictions_announcement",
            "Get the advance notice of margin purchase and short sale suspensions.",
            "/exchangeReport/BFI84U",
            Summary::new("集中市場停資停券預告表", "- {證券名稱} ({證券代號}): {限制類別}"),
        ),
        market_summary(
            "get_block_trades_daily",
            "Get daily block trade volume and value statistics.",
            "/block/BFIAUU_d",
            Summary::new(
                "集中市場鉅額交易日成交量值統計",
                "- {日期}: {交易筆數} 筆, 總成交金額 {總成交金額}",
            ),
        ),
        market_summary(
            "get_block_trades_monthly",
            "Get monthly block trade volume and value statistics.",
            "/block/BFIAUU_m",
            Summary::new(
                "集中市場鉅額交易月成交量值統計",
                "- {月份}: {交易筆數} 筆, 總成交金額 {總成交金額}",
            ),
        ),
        market_summary(
            "get_block_trades_yearly",
            "Get yearly block trade volume and value statistics.",
            "/block/BFIAUU_y",
            Summary::new(
                "集中市場鉅額交易年成交量值統計",
                "- {年度}: {交易筆數} 筆, 總成交金額 {總成交金額}",
            ),
        ),
        market_summary(
            "get_first_listed_foreign_stocks_daily",
            "Get daily volume and value of first-listed foreign stocks.",
            "/exchangeReport/STOCK_FIRST",
            Summary::new(
                "每日第一上市外國股票成交量值",
                "- {證券名稱} ({證券代號}): 成交量 {成交量}, 成交金額 {成交金額}",
            ),
        ),
        market_summary(
            "get_securities_trading_changes",
            "Get securities whose trading method was changed in the centralized market.",
            "/exchangeReport/TWT85U",
            Summary::new("集中市場證券變更交易", "- {證券名稱} ({證券代號}): {變更類別}"),
        ),
        market_summary(
            "get_valuation_ratios_by_date",
            "Get daily P/E ratio, dividend yield and P/B ratio of listed stocks by date.",
            "/exchangeReport/BWIBBU_d",
            Summary::new(
                "上市個股日本益比、殖利率及股價淨值比（依日期查詢）",
                "- {日期} {證券名稱} ({證券代號}): 本益比 {本益比}",
            ),
        ),
        market_summary(
            "get_stock_price_changes",
            "Get price change ranges of listed stocks.",
            "/exchangeReport/TWT84U",
            Summary::new("上市個股股價升降幅度", "- {證券名稱} ({證券代號}): 漲跌幅 {漲跌幅}%"),
        ),
        ToolSpec::new(
            "get_market_gain_loss_statistics",
            "Get market statistics of rising and falling securities.",
            Endpoint::new("/opendata/twtazu_od"),
            ToolKind::Summary(
                Summary::new(
                    "集中市場漲跌證券數統計表",
                    "【{類型}】 日期: {出表日期}\n  上漲: {上漲} 家 (漲停: {漲停})\n  下跌: {下跌} 家 (跌停: {跌停})\n  持平: {持平} 家\n  未成交: {未成交} 家\n  無比價: {無比價} 家",
                )
                .limit(Limit::All),
            ),
        ),
        ToolSpec::new(
            "get_abnormal_accumulated_notice_stocks",
            "Get stocks with abnormal accumulated attention notice counts.",
            report("/announcement/notetrans"),
            ToolKind::Summary(
                Summary::new(
                    "集中市場公布注意累計次數異常資訊",
                    "{Number}. {Name} ({Code})\n   符合注意標準: {RecentlyMetAttentionSecuritiesCriteria}",
                )
                .require(&["Code"]),
            ),
        ),
        ToolSpec::new(
            "get_today_notice_stocks",
            "Get stocks announced as attention stocks today.",
            report("/announcement/notice"),
            ToolKind::Summary(
                Summary::new(
                    "集中市場當日公布注意股票",
                    "{Number}. {Name} ({Code})\n   公布次數: {NumberOfAnnouncement} | 日期: {Date}\n   收盤價: {ClosingPrice} | 本益比: {PE}\n   注意事項: {TradingInfoForAttention}",
                )
                .require(&["Code"]),
            ),
        ),
        ToolSpec::new(
            "get_daily_market_trading_info",
            "Get daily market trading information: volume, value, transactions and TAIEX.",
            Endpoint::new("/exchangeReport/FMTQIK"),
            ToolKind::Summary(
                Summary::new(
                    "集中市場每日市場成交",
                    "- {Date}: 成交量 {TradeVolume}, 成交金額 {TradeValue}, 成交筆數 {Transaction}, 加權指數 {TAIEX}, 漲跌 {Change}",
                )
                .title("集中市場每日市場成交資訊")
                .empty("目前沒有集中市場每日市場成交資訊。"),
            ),
        ),
        ToolSpec::new(
            "get_daily_securities_lending_volume",
            "Get the daily number of listed shares available for securities lending sale.",
            Endpoint::new("/SBL/TWT96U"),
            ToolKind::Summary(
                Summary::new(
                    "上市股票當日可借券賣出股數",
                    "- 股票代號 {TWSECode}: 可借券賣出股數 {TWSEAvailableVolume}",
                )
                .require(&["TWSECode"]),
            ),
        ),
    ]
}
