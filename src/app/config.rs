use std::path::PathBuf;

use time::UtcOffset;

use crate::app::export::Format;
use crate::app::i18n::Language;

/// Settings for one run of the program. Nothing here outlives the process.
#[derive(Clone, Debug)]
pub struct Session {
    pub lang: Language,
    pub format: Format,
    pub output_dir: PathBuf,
    /// Font able to render Chinese; system fonts are probed when unset.
    pub font: Option<PathBuf>,
    /// Local offset captured at startup; used to stamp file names.
    pub offset: UtcOffset,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            lang: Language::default(),
            format: Format::default(),
            output_dir: PathBuf::from("."),
            font: None,
            offset: UtcOffset::UTC,
        }
    }
}

impl Session {
    pub fn toggle_language(&mut self) -> Language {
        self.lang = self.lang.toggle();
        self.lang
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english_xlsx_in_working_directory() {
        let session = Session::default();
        assert_eq!(session.lang, Language::En);
        assert_eq!(session.format, Format::Xlsx);
        assert_eq!(session.output_dir, PathBuf::from("."));
        assert!(session.font.is_none());
        assert_eq!(session.offset, UtcOffset::UTC);
    }

    #[test]
    fn toggle_language_returns_new_language() {
        let mut session = Session::default();
        assert_eq!(session.toggle_language(), Language::Zh);
        assert_eq!(session.lang, Language::Zh);
        assert_eq!(session.toggle_language(), Language::En);
    }
}
