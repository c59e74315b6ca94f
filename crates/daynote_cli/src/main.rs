//! Daily note viewer entry point.
//!
//! # Responsibility
//! - Provide a minimal executable over `daynote_core` for local viewing and
//!   smoke checks.
//! - Keep output deterministic: one view or one archive listing per run.

use daynote_core::{
    default_log_level, init_logging, DateKey, DirNoteStore, LoadApplied, LoadOutcome, NoteView,
    ResolveError, SystemClock, ViewerConfig, ViewerService,
};
use std::env;
use std::process::ExitCode;
use std::str::FromStr;

type Viewer = ViewerService<DirNoteStore, SystemClock>;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("daynote: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    if let Ok(log_dir) = env::var("DAYNOTE_LOG_DIR") {
        init_logging(default_log_level(), &log_dir)?;
    }

    let config = config_from_env()?;
    config.validate().map_err(|err| err.to_string())?;

    let root = env::var("DAYNOTE_ROOT").unwrap_or_else(|_| ".".to_string());
    let store = DirNoteStore::open(&root, &config).map_err(|err| err.to_string())?;
    let mut viewer = ViewerService::new(config, store, SystemClock);

    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "show".to_string());
    match command.as_str() {
        "show" => {
            let view = viewer.today();
            render(&mut viewer, view)
        }
        "back" => {
            let steps = match args.next() {
                Some(raw) => raw
                    .parse::<u32>()
                    .map_err(|_| format!("invalid step count `{raw}`"))?,
                None => 1,
            };
            let mut view = viewer.today();
            for _ in 0..steps {
                view = viewer.back();
            }
            render(&mut viewer, view)
        }
        "archive" => print_archive(&viewer),
        other => Err(format!("unknown command `{other}`; expected show|back|archive")),
    }
}

fn config_from_env() -> Result<ViewerConfig, String> {
    let start_raw = env::var("DAYNOTE_START").map_err(|_| {
        "DAYNOTE_START is not set; expected the earliest archive day as YYYY-MM-DD".to_string()
    })?;
    let start_date = DateKey::from_str(&start_raw).map_err(|err| err.to_string())?;

    let ext_raw = env::var("DAYNOTE_EXT").unwrap_or_else(|_| "jpg".to_string());
    let ext = daynote_core::parse_note_ext(&ext_raw)
        .ok_or_else(|| format!("unsupported DAYNOTE_EXT `{ext_raw}`; expected png|jpg"))?;

    Ok(ViewerConfig {
        start_date,
        notes_folder: env::var("DAYNOTE_FOLDER").unwrap_or_else(|_| "notes".to_string()),
        ext,
    })
}

/// Fetches and prints one resolved view, driving the load-result protocol on
/// fetch failures until a note renders or the start boundary reports missing.
fn render(viewer: &mut Viewer, view: Result<NoteView, ResolveError>) -> Result<(), String> {
    let mut view = match view {
        Ok(view) => view,
        Err(ResolveError::NoteMissing { key }) => {
            println!("No note uploaded for {key} yet.");
            return Ok(());
        }
        Err(other) => return Err(other.to_string()),
    };

    loop {
        match viewer.fetch(&view.reference) {
            Ok(asset) => {
                let badge = if view.is_today { "  [Today]" } else { "" };
                println!("{}{badge}", view.title);
                println!("{}  ({} bytes)", view.reference, asset.bytes.len());
                return Ok(());
            }
            Err(ResolveError::NoteMissing { .. }) => {
                match viewer.apply_load_result(view.key, LoadOutcome::Missing) {
                    Ok(LoadApplied::FellBack(next)) => view = next,
                    Ok(_) => return Ok(()),
                    Err(ResolveError::NoteMissing { key }) => {
                        println!("No note uploaded for {key} yet.");
                        return Ok(());
                    }
                    Err(other) => return Err(other.to_string()),
                }
            }
            Err(other) => return Err(other.to_string()),
        }
    }
}

fn print_archive(viewer: &Viewer) -> Result<(), String> {
    let entries = viewer.archive().map_err(|err| err.to_string())?;
    if entries.is_empty() {
        println!("archive is empty (start day is in the future)");
        return Ok(());
    }
    for entry in &entries {
        let marker = if entry.available { "x" } else { " " };
        println!("[{marker}] {}  {}", entry.key, entry.reference);
    }
    Ok(())
}
