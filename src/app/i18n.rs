use std::fmt::{Display, Formatter};

use clap::ValueEnum;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Zh => write!(f, "zh"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Text {
    Title,
    PrincipalLabel,
    RateLabel,
    DaysLabel,
    CalculateButton,
    LanguageButton,
    SuccessTitle,
    ErrorTitle,
    OkButton,
    SuccessMsg,
    SuccessMsgCsv,
    ErrorInvalid,
    ErrorPositive,
    ErrorOverflow,
    ErrorGeneral,
    ColumnDay,
    ColumnBalance,
    ColumnInterest,
    ColumnFormula,
}

pub fn text(lang: Language, key: Text) -> &'static str {
    match (lang, key) {
        (Language::En, Text::Title) => "Compound Interest Calculator (USD)",
        (Language::En, Text::PrincipalLabel) => "Principal Amount (USD):",
        (Language::En, Text::RateLabel) => "Daily Interest Rate (%):",
        (Language::En, Text::DaysLabel) => "Time Period (Days):",
        (Language::En, Text::CalculateButton) => "Calculate & Export",
        (Language::En, Text::LanguageButton) => "Switch to Chinese",
        (Language::En, Text::SuccessTitle) => "Success",
        (Language::En, Text::ErrorTitle) => "Error",
        (Language::En, Text::OkButton) => "OK",
        (Language::En, Text::SuccessMsg) => "Excel file '{}' generated successfully!",
        (Language::En, Text::SuccessMsgCsv) => "CSV file '{}' generated successfully!",
        (Language::En, Text::ErrorInvalid) => "Please enter valid numbers.",
        (Language::En, Text::ErrorPositive) => "Please enter valid positive numbers.",
        (Language::En, Text::ErrorOverflow) => "The balance grew too large to calculate.",
        (Language::En, Text::ErrorGeneral) => "An error occurred: {}",
        (Language::En, Text::ColumnDay) => "Day",
        (Language::En, Text::ColumnBalance) => "Balance (USD)",
        (Language::En, Text::ColumnInterest) => "Interest Earned (USD)",
        (Language::En, Text::ColumnFormula) => "Formula",

        (Language::Zh, Text::Title) => "复利计算器（美元）",
        (Language::Zh, Text::PrincipalLabel) => "本金（美元）：",
        (Language::Zh, Text::RateLabel) => "每日利率（%）：",
        (Language::Zh, Text::DaysLabel) => "时间（天）：",
        (Language::Zh, Text::CalculateButton) => "计算并导出",
        (Language::Zh, Text::LanguageButton) => "切换到英文",
        (Language::Zh, Text::SuccessTitle) => "成功",
        (Language::Zh, Text::ErrorTitle) => "错误",
        (Language::Zh, Text::OkButton) => "确定",
        (Language::Zh, Text::SuccessMsg) => "Excel文件 '{}' 生成成功！",
        (Language::Zh, Text::SuccessMsgCsv) => "CSV文件 '{}' 生成成功！",
        (Language::Zh, Text::ErrorInvalid) => "请输入有效的数字。",
        (Language::Zh, Text::ErrorPositive) => "请输入有效的正数。",
        (Language::Zh, Text::ErrorOverflow) => "余额过大，无法计算。",
        (Language::Zh, Text::ErrorGeneral) => "发生错误：{}",
        (Language::Zh, Text::ColumnDay) => "天",
        (Language::Zh, Text::ColumnBalance) => "余额（美元）",
        (Language::Zh, Text::ColumnInterest) => "利息（美元）",
        (Language::Zh, Text::ColumnFormula) => "公式",
    }
}

/// Substitutes `arg` for the `{}` placeholder of a message template.
pub fn fill(lang: Language, key: Text, arg: &str) -> String {
    text(lang, key).replacen("{}", arg, 1)
}

/// Spreadsheet column titles, in column order.
pub fn headers(lang: Language) -> [&'static str; 4] {
    [
        text(lang, Text::ColumnDay),
        text(lang, Text::ColumnBalance),
        text(lang, Text::ColumnInterest),
        text(lang, Text::ColumnFormula),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Text; 19] = [
        Text::Title,
        Text::PrincipalLabel,
        Text::RateLabel,
        Text::DaysLabel,
        Text::CalculateButton,
        Text::LanguageButton,
        Text::SuccessTitle,
        Text::ErrorTitle,
        Text::OkButton,
        Text::SuccessMsg,
        Text::SuccessMsgCsv,
        Text::ErrorInvalid,
        Text::ErrorPositive,
        Text::ErrorOverflow,
        Text::ErrorGeneral,
        Text::ColumnDay,
        Text::ColumnBalance,
        Text::ColumnInterest,
        Text::ColumnFormula,
    ];

    #[test]
    fn every_field_is_translated() {
        for key in ALL {
            assert!(!text(Language::En, key).is_empty(), "{key:?}");
            assert!(!text(Language::Zh, key).is_empty(), "{key:?}");
            assert_ne!(text(Language::En, key), text(Language::Zh, key), "{key:?}");
        }
    }

    #[test]
    fn toggle_switches_between_both_languages() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::En.toggle(), Language::Zh);
        assert_eq!(Language::En.toggle().toggle(), Language::En);
    }

    #[test]
    fn fill_replaces_placeholder() {
        assert_eq!(
            fill(Language::En, Text::SuccessMsg, "a.xlsx"),
            "Excel file 'a.xlsx' generated successfully!"
        );
        assert_eq!(fill(Language::Zh, Text::ErrorGeneral, "{}"), "发生错误：{}");
    }

    #[test]
    fn headers_follow_language() {
        assert_eq!(
            headers(Language::En),
            ["Day", "Balance (USD)", "Interest Earned (USD)", "Formula"]
        );
        assert_eq!(headers(Language::Zh), ["天", "余额（美元）", "利息（美元）", "公式"]);
    }
}
