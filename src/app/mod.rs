use std::fs;
use std::path::{Path, PathBuf};

use eframe::egui::{Align2, Color32, RichText};
use eframe::{egui, Frame};
use tracing::{debug, error, info, warn};

use calculator::RawInput;
use config::Session;
use error::AppError;
use export::Format;
use i18n::{fill, text, Language, Text};

pub mod calculator;
pub mod config;
pub mod error;
pub mod export;
pub mod i18n;

/// Fonts tried, in order, when no `--font` is given.
const CJK_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simkai.ttf",
    "C:\\Windows\\Fonts\\simsun.ttc",
];

/// Collects, computes and exports in one go. Nothing is written unless the
/// whole table was computed.
pub fn calculate_and_export(session: &Session, raw: &RawInput) -> Result<PathBuf, AppError> {
    let outcome = run(session, raw);
    match &outcome {
        Err(AppError::Calc(e)) => warn!("rejected input: {e}"),
        Err(AppError::Export(e)) => error!("export failed: {e}"),
        Ok(_) => {}
    }
    outcome
}

fn run(session: &Session, raw: &RawInput) -> Result<PathBuf, AppError> {
    let input = calculator::parse_input(raw)?;
    let table = calculator::compound(&input)?;
    let rows = table.records().len();
    let path = export::export(
        table,
        session.lang,
        session.format,
        &session.output_dir,
        export::now(session.offset),
    )?;
    info!(path = %path.display(), rows, "exported");
    Ok(path)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// What the user is told after pressing the calculate button.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn from_outcome(session: &Session, outcome: &Result<PathBuf, AppError>) -> Self {
        let lang = session.lang;
        match outcome {
            Ok(path) => {
                let name = path.file_name().unwrap_or(path.as_os_str());
                let template = match session.format {
                    Format::Xlsx => Text::SuccessMsg,
                    Format::Csv => Text::SuccessMsgCsv,
                };
                Self {
                    kind: NoticeKind::Success,
                    message: fill(lang, template, &name.to_string_lossy()),
                }
            }
            Err(e) => Self {
                kind: NoticeKind::Error,
                message: e.localized(lang),
            },
        }
    }

    pub fn title(&self, lang: Language) -> &'static str {
        match self.kind {
            NoticeKind::Success => text(lang, Text::SuccessTitle),
            NoticeKind::Error => text(lang, Text::ErrorTitle),
        }
    }
}

pub struct App {
    session: Session,
    form: RawInput,
    notice: Option<Notice>,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let lang = self.session.lang;
        let enabled = self.notice.is_none();
        let mut calculate = false;
        let mut switch = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.vertical_centered(|ui| {
                    let fields = [
                        (Text::PrincipalLabel, &mut self.form.principal),
                        (Text::RateLabel, &mut self.form.rate),
                        (Text::DaysLabel, &mut self.form.days),
                    ];
                    for (label, value) in fields {
                        ui.add_space(10.0);
                        ui.label(text(lang, label));
                        ui.text_edit_singleline(value);
                    }

                    ui.add_space(10.0);
                    calculate = ui.button(text(lang, Text::CalculateButton)).clicked();
                    ui.add_space(10.0);
                    switch = ui.button(text(lang, Text::LanguageButton)).clicked();
                });
            });
        });

        if calculate {
            let outcome = calculate_and_export(&self.session, &self.form);
            self.notice = Some(Notice::from_outcome(&self.session, &outcome));
        }
        if switch {
            let lang = self.session.toggle_language();
            info!(%lang, "language switched");
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(
                text(lang, Text::Title).to_owned(),
            ));
        }

        self.show_notice(ctx);
    }
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, session: Session) -> Self {
        setup_custom_fonts(&cc.egui_ctx, session.font.as_deref());

        Self {
            session,
            form: RawInput::default(),
            notice: None,
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let lang = self.session.lang;
        let mut close = false;

        egui::Window::new(notice.title(lang))
            .id(egui::Id::new("notice"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let message = RichText::from(notice.message.as_str());
                match notice.kind {
                    NoticeKind::Success => ui.label(message),
                    NoticeKind::Error => ui.label(message.color(Color32::RED)),
                };
                ui.vertical_centered(|ui| {
                    close = ui.button(text(lang, Text::OkButton)).clicked();
                });
            });

        if close {
            self.notice = None;
        }
    }
}

fn setup_custom_fonts(ctx: &egui::Context, font: Option<&Path>) {
    let mut candidates = font
        .map(Path::to_path_buf)
        .into_iter()
        .chain(CJK_FONTS.iter().map(PathBuf::from));
    let loaded = candidates.find_map(|path| match fs::read(&path) {
        Ok(bytes) => {
            debug!(path = %path.display(), "loaded CJK font");
            Some(bytes)
        }
        Err(e) => {
            debug!(path = %path.display(), "skipping font: {e}");
            None
        }
    });
    let Some(bytes) = loaded else {
        warn!("no CJK font found, Chinese text will not render");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), egui::FontData::from_owned(bytes));

    let entry = fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default();
    entry.push("cjk".to_owned());

    let entry = fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default();
    entry.push("cjk".to_owned());

    ctx.set_fonts(fonts);
}
