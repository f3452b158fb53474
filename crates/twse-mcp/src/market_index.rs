//! Market index categories and render formats for the daily index report.
//!
//! The report lists every TWSE index under the `指數` field. Categories are
//! recognised by name patterns since the report carries no classification.

use twse_core::format::format_records;
use twse_core::Record;

const NAME: &str = "指數";
const CLOSE: &str = "收盤指數";
const DIRECTION: &str = "漲跌";
const CHANGE_PCT: &str = "漲跌百分比";

/// Most indices shown for any category other than [`IndexCategory::All`].
pub const CATEGORY_CAP: usize = 50;

/// Group of indices to show.
///
/// Any name outside the list below reads as [`IndexCategory::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexCategory {
    /// Core benchmarks: TAIEX, Taiwan 50, mid-cap 100 and similar.
    #[default]
    Major,
    /// Industry sector indices (`類指數`).
    Sector,
    /// ESG and sustainability indices.
    Esg,
    /// Leveraged and inverse indices.
    Leverage,
    /// Total return indices (`報酬指數`).
    Return,
    /// Thematic indices: AI, 5G, biotech, EV and similar.
    Thematic,
    /// High dividend indices.
    Dividend,
    /// Every index in the report.
    All,
}

/// Output layout. Unknown names read as [`IndexFormat::Detailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexFormat {
    /// Every field of every index.
    #[default]
    Detailed,
    /// `name: close 點 (±pct%)`.
    Summary,
    /// `name: ±pct%`.
    Simple,
}

impl From<&str> for IndexCategory {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "major" => Self::Major,
            "sector" => Self::Sector,
            "esg" => Self::Esg,
            "leverage" => Self::Leverage,
            "return" => Self::Return,
            "thematic" => Self::Thematic,
            "dividend" => Self::Dividend,
            _ => Self::All,
        }
    }
}

impl From<&str> for IndexFormat {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "summary" => Self::Summary,
            "simple" => Self::Simple,
            _ => Self::Detailed,
        }
    }
}

fn contains_any(name: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| name.contains(p))
}

impl IndexCategory {
    /// Lowercase name, as accepted in tool arguments.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Sector => "sector",
            Self::Esg => "esg",
            Self::Leverage => "leverage",
            Self::Return => "return",
            Self::Thematic => "thematic",
            Self::Dividend => "dividend",
            Self::All => "all",
        }
    }

    /// Returns true if an index with this name belongs to the category.
    pub fn matches(self, name: &str) -> bool {
        let is_return = name.contains("報酬指數");
        match self {
            Self::Major => {
                !contains_any(name, &["類指數", "報酬指數", "兩倍", "反向", "槓桿"])
                    && contains_any(
                        name,
                        &["發行量加權", "寶島", "臺灣50", "中型", "小型", "未含", "公司治理", "高股息"],
                    )
            }
            Self::Sector => name.contains("類指數") && !is_return,
            Self::Esg => contains_any(
                name,
                &["ESG", "永續", "公司治理", "社會責任", "環境", "綠能", "低碳", "友善"],
            ),
            Self::Leverage => contains_any(name, &["兩倍", "反向", "槓桿"]),
            Self::Return => is_return,
            Self::Thematic => {
                contains_any(name, &["AI", "5G", "生技", "電動車", "綠能", "半導體", "科技", "創新"])
                    && !is_return
            }
            Self::Dividend => {
                contains_any(name, &["高股息", "高息", "股息", "股利", "優息", "存股"]) && !is_return
            }
            Self::All => true,
        }
    }

    /// Effective number of indices to show for a requested `count`.
    ///
    /// A count of zero or less means "no limit". Positive counts are capped
    /// at [`CATEGORY_CAP`] outside `All`.
    pub fn effective_count(self, count: i64) -> Option<usize> {
        let requested = usize::try_from(count).ok().filter(|&n| n > 0)?;
        match self {
            Self::All => Some(requested),
            _ => Some(requested.min(CATEGORY_CAP)),
        }
    }
}

/// Selects the indices of `category`, keeping report order.
pub fn select(records: &[Record], category: IndexCategory, count: i64) -> Vec<&Record> {
    let matching = records
        .iter()
        .filter(|r| category.matches(r.get_str(NAME).unwrap_or_default()));
    match category.effective_count(count) {
        Some(n) => matching.take(n).collect(),
        None => matching.collect(),
    }
}

/// Renders selected indices.
pub fn render(indices: &[&Record], format: IndexFormat) -> String {
    let text = |r: &Record, key: &str| r.text_or(key, "").into_owned();
    match format {
        IndexFormat::Detailed => {
            let owned: Vec<Record> = indices.iter().map(|r| (*r).clone()).collect();
            format_records(&owned)
        }
        IndexFormat::Summary => indices
            .iter()
            .map(|r| {
                format!(
                    "{}: {} 點 ({}{}%)",
                    text(r, NAME),
                    text(r, CLOSE),
                    text(r, DIRECTION),
                    text(r, CHANGE_PCT)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        IndexFormat::Simple => indices
            .iter()
            .map(|r| format!("{}: {}{}%", text(r, NAME), text(r, DIRECTION), text(r, CHANGE_PCT)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Message for a category with no matching index.
pub fn no_indices(category: IndexCategory) -> String {
    format!("No indices found for category: {}", category.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn index(name: &str, close: &str, dir: &str, pct: &str) -> Record {
        [
            ("日期", json!("1140102")),
            (NAME, json!(name)),
            (CLOSE, json!(close)),
            (DIRECTION, json!(dir)),
            ("漲跌點數", json!("10.00")),
            (CHANGE_PCT, json!(pct)),
        ]
        .into_iter()
        .collect()
    }

    fn report() -> Vec<Record> {
        vec![
            index("發行量加權股價指數", "23000.00", "+", "0.50"),
            index("臺灣50指數", "17000.00", "-", "0.20"),
            index("電子類指數", "1200.00", "+", "1.00"),
            index("電子類報酬指數", "2400.00", "+", "1.00"),
            index("臺灣50兩倍槓桿指數", "50000.00", "-", "0.40"),
            index("臺灣高股息指數", "8000.00", "+", "0.10"),
            index("臺灣永續指數", "9000.00", "+", "0.30"),
            index("臺灣半導體指數", "7000.00", "+", "2.00"),
        ]
    }

    fn names(selected: &[&Record]) -> Vec<String> {
        selected
            .iter()
            .map(|r| r.get_str(NAME).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_categories() {
        let data = report();
        assert_eq!(
            names(&select(&data, IndexCategory::Major, 20)),
            ["發行量加權股價指數", "臺灣50指數", "臺灣高股息指數"]
        );
        assert_eq!(names(&select(&data, IndexCategory::Sector, 20)), ["電子類指數"]);
        assert_eq!(names(&select(&data, IndexCategory::Return, 20)), ["電子類報酬指數"]);
        assert_eq!(
            names(&select(&data, IndexCategory::Leverage, 20)),
            ["臺灣50兩倍槓桿指數"]
        );
        assert_eq!(names(&select(&data, IndexCategory::Dividend, 20)), ["臺灣高股息指數"]);
        assert_eq!(names(&select(&data, IndexCategory::Esg, 20)), ["臺灣永續指數"]);
        assert_eq!(names(&select(&data, IndexCategory::Thematic, 20)), ["臺灣半導體指數"]);
        assert_eq!(select(&data, IndexCategory::All, 0).len(), data.len());
    }

    #[test]
    fn test_effective_count() {
        assert_eq!(IndexCategory::Major.effective_count(20), Some(20));
        assert_eq!(IndexCategory::Major.effective_count(500), Some(CATEGORY_CAP));
        assert_eq!(IndexCategory::Major.effective_count(0), None);
        assert_eq!(IndexCategory::All.effective_count(500), Some(500));
        assert_eq!(IndexCategory::All.effective_count(-1), None);
    }

    #[test]
    fn test_render_formats() {
        let data = report();
        let selected = select(&data, IndexCategory::Major, 1);
        assert_eq!(
            render(&selected, IndexFormat::Summary),
            "發行量加權股價指數: 23000.00 點 (+0.50%)"
        );
        assert_eq!(render(&selected, IndexFormat::Simple), "發行量加權股價指數: +0.50%");
        assert!(render(&selected, IndexFormat::Detailed).starts_with("日期: 1140102\n指數: 發行量加權股價指數"));
    }

    #[test]
    fn test_names() {
        assert_eq!(IndexCategory::from("thematic"), IndexCategory::Thematic);
        assert_eq!(IndexCategory::from("ESG"), IndexCategory::Esg);
        assert_eq!(IndexCategory::from("crypto"), IndexCategory::All);
        assert_eq!(IndexCategory::from(""), IndexCategory::All);
        assert_eq!(IndexFormat::from("simple"), IndexFormat::Simple);
        assert_eq!(IndexFormat::from("table"), IndexFormat::Detailed);
    }
}
