use thiserror::Error;

use crate::app::calculator::Field;
use crate::app::i18n::{fill, text, Language, Text};

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{field} is not a number: {value:?}")]
    Parse { field: Field, value: String },

    #[error("{field} is out of range: {value}")]
    Range { field: Field, value: String },

    #[error("{field} is too large: {value}")]
    TooLarge { field: Field, value: String },

    #[error("balance overflowed on day {day}")]
    Overflow { day: u32 },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("number conversion error: {0}")]
    Number(#[from] rust_decimal::Error),

    #[error("timestamp error: {0}")]
    Time(#[from] time::error::Format),
}

/// Anything the calculate action can fail with.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl AppError {
    /// The notification text shown to the user in `lang`.
    pub fn localized(&self, lang: Language) -> String {
        match self {
            AppError::Calc(CalcError::Parse { .. }) => text(lang, Text::ErrorInvalid).to_owned(),
            AppError::Calc(CalcError::Range { .. }) => text(lang, Text::ErrorPositive).to_owned(),
            AppError::Calc(CalcError::TooLarge { .. } | CalcError::Overflow { .. }) => {
                text(lang, Text::ErrorOverflow).to_owned()
            }
            AppError::Export(e) => fill(lang, Text::ErrorGeneral, &e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_field_and_value() {
        let err = CalcError::Parse {
            field: Field::Days,
            value: "abc".to_owned(),
        };
        assert_eq!(err.to_string(), "days is not a number: \"abc\"");
    }

    #[test]
    fn each_kind_maps_to_its_own_message() {
        let parse = AppError::from(CalcError::Parse {
            field: Field::Principal,
            value: "x".to_owned(),
        });
        let range = AppError::from(CalcError::Range {
            field: Field::Principal,
            value: "0".to_owned(),
        });
        let overflow = AppError::from(CalcError::Overflow { day: 3 });
        let too_large = AppError::from(CalcError::TooLarge {
            field: Field::Principal,
            value: "1e30".to_owned(),
        });

        assert_eq!(parse.localized(Language::En), "Please enter valid numbers.");
        assert_eq!(
            range.localized(Language::En),
            "Please enter valid positive numbers."
        );
        assert_eq!(range.localized(Language::Zh), "请输入有效的正数。");
        assert_ne!(overflow.localized(Language::En), range.localized(Language::En));
        assert_eq!(
            too_large.localized(Language::En),
            "The balance grew too large to calculate."
        );
        assert_eq!(too_large.localized(Language::Zh), "余额过大，无法计算。");
    }

    #[test]
    fn export_error_carries_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = AppError::from(ExportError::from(io));
        assert_eq!(
            err.localized(Language::En),
            "An error occurred: io error: read-only"
        );
        assert_eq!(err.localized(Language::Zh), "发生错误：io error: read-only");
    }
}
