use std::path::PathBuf;

use clap::{Parser, Subcommand};
use time::UtcOffset;

use crate::app::calculator::RawInput;
use crate::app::config::Session;
use crate::app::export::Format;
use crate::app::i18n::Language;

#[derive(Parser)]
#[command(name = "compound-interest")]
#[command(
    version,
    about = "Daily compound interest calculator with spreadsheet export"
)]
pub struct Cli {
    /// Display language for labels, messages and column headers
    #[arg(long, value_enum, default_value_t = Language::En, global = true)]
    pub lang: Language,

    /// Spreadsheet format of the exported file
    #[arg(long, value_enum, default_value_t = Format::Xlsx, global = true)]
    pub format: Format,

    /// Directory the exported file is written to
    #[arg(long, default_value = ".", global = true)]
    pub output_dir: PathBuf,

    /// Font able to render Chinese text (window only)
    #[arg(long)]
    pub font: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate and write the table without opening a window
    Export {
        /// Principal amount
        #[arg(long, allow_hyphen_values = true)]
        principal: String,

        /// Daily interest rate in percent
        #[arg(long, allow_hyphen_values = true)]
        rate: String,

        /// Number of days
        #[arg(long, allow_hyphen_values = true)]
        days: String,
    },
}

impl Cli {
    pub fn session(&self, offset: UtcOffset) -> Session {
        Session {
            lang: self.lang,
            format: self.format,
            output_dir: self.output_dir.clone(),
            font: self.font.clone(),
            offset,
        }
    }
}

impl Commands {
    pub fn raw_input(self) -> RawInput {
        match self {
            Commands::Export {
                principal,
                rate,
                days,
            } => RawInput {
                principal,
                rate,
                days,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_the_default() {
        let cli = Cli::try_parse_from(["compound-interest"]).unwrap();
        assert!(cli.command.is_none());
        let session = cli.session(UtcOffset::UTC);
        assert_eq!(session.lang, Language::En);
        assert_eq!(session.format, Format::Xlsx);
        assert_eq!(session.output_dir, PathBuf::from("."));
    }

    #[test]
    fn export_takes_raw_values_including_negatives() {
        let cli = Cli::try_parse_from([
            "compound-interest",
            "export",
            "--principal",
            "-5",
            "--rate",
            "abc",
            "--days",
            "3",
            "--lang",
            "zh",
            "--format",
            "csv",
        ])
        .unwrap();
        let offset = UtcOffset::from_hms(-5, 0, 0).unwrap();
        let session = cli.session(offset);
        assert_eq!(session.offset, offset);
        assert_eq!(session.lang, Language::Zh);
        assert_eq!(session.format, Format::Csv);

        let raw = cli.command.unwrap().raw_input();
        assert_eq!(raw.principal, "-5");
        assert_eq!(raw.rate, "abc");
        assert_eq!(raw.days, "3");
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["compound-interest", "--lang", "fr"]).is_err());
    }
}
