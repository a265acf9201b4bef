mod app;
mod cli;

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use eframe::egui;
use time::UtcOffset;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use app::config::Session;
use app::i18n::{text, Text};
use app::{Notice, NoticeKind};
use cli::Cli;

fn main() -> Result<()> {
    // Must run while the process is still single-threaded.
    let offset = UtcOffset::current_local_offset();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let offset = offset.unwrap_or_else(|e| {
        warn!("local offset unavailable, using UTC: {e}");
        UtcOffset::UTC
    });
    let session = cli.session(offset);
    info!(
        lang = %session.lang,
        format = ?session.format,
        output_dir = %session.output_dir.display(),
        %offset,
        "starting"
    );

    match cli.command {
        Some(command) => {
            let outcome = app::calculate_and_export(&session, &command.raw_input());
            let notice = Notice::from_outcome(&session, &outcome);
            match notice.kind {
                NoticeKind::Success => {
                    println!("{}", notice.message);
                    Ok(())
                }
                NoticeKind::Error => bail!(notice.message),
            }
        }
        None => run_window(session),
    }
}

fn run_window(session: Session) -> Result<()> {
    let title = text(session.lang, Text::Title);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, session)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
