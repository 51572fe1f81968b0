use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use dirpin::app::{App, SetFolderOptions};
use dirpin::app::selection::SelectTarget;
use dirpin::infra::fs::FsRepository;
use dirpin::infra::persist::{self, LastView};
use dirpin::infra::watcher::FolderWatcher;

/// Pinned-folder terminal file browser.
#[derive(Debug, Parser)]
#[command(name = "dirpin", version, about)]
struct Args {
    /// Folder (or file, pinning its parent) to open instead of the last view.
    path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    init_tracing()?;

    let args = Args::parse();
    let home = persist::dirpin_home();
    let last_view = persist::load(&home);

    let repo = Arc::new(FsRepository::new());
    let mut app = App::new(repo);

    // Precedence: explicit CLI path, then the persisted view, then the
    // current directory.
    if let Some(start_path) = args.path {
        let start_path = std::path::absolute(&start_path).unwrap_or(start_path);
        app.set_folder(&start_path.to_string_lossy(), SetFolderOptions::default());
    } else if let Some(folder) = last_view.folder {
        let options = match last_view.selected {
            Some(selected) => SetFolderOptions::select(SelectTarget::Id(selected)),
            None => SetFolderOptions::default(),
        };
        app.set_folder(&folder, options);
    } else if let Ok(current_dir) = std::env::current_dir() {
        app.set_folder(&current_dir.to_string_lossy(), SetFolderOptions::default());
    }

    let (change_tx, mut change_rx) = mpsc::unbounded_channel();
    let mut watcher = FolderWatcher::new(change_tx).map_err(io::Error::other)?;

    dirpin::runtime::run(&mut app, &mut watcher, &mut change_rx).await?;

    let view = LastView {
        folder: app.displayed_folder().map(str::to_string),
        selected: app.selected_id().map(str::to_string),
    };
    if let Err(error) = persist::save(&home, &view) {
        tracing::warn!(%error, "failed to save last view");
    }

    Ok(())
}

/// Writes logs to the file named by `DIRPIN_LOG`; logging is off otherwise.
/// Stdout belongs to the TUI, so there is no console fallback.
fn init_tracing() -> io::Result<()> {
    let Ok(log_path) = std::env::var("DIRPIN_LOG") else {
        return Ok(());
    };

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
