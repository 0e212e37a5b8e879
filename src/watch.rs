//! File system watcher for live rebuild.
//!
//! Watches the content directory, the posts subdirectory, the templates
//! directory, and the whole static tree. Every relevant event triggers a
//! full rebuild; the watcher sits in Idle between events and in
//! Rebuilding while the builder runs.
//!
//! The rebuild lock serializes rebuilds against each other so the
//! output tree is only ever mutated by one builder at a time; the HTTP
//! server thread only reads it. A failed rebuild is logged and the
//! watcher returns to Idle so the server keeps serving the last
//! successful build.

use crate::{build::build_site, config::SitePaths, error::Result, log};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use parking_lot::Mutex;

/// Exclusive lock around the destroy-rebuild-write sequence.
pub static REBUILD_LOCK: Mutex<()> = Mutex::new(());

const fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

/// Run one rebuild attempt under the rebuild lock.
pub fn rebuild(paths: &SitePaths) {
    let _guard = REBUILD_LOCK.lock();
    if let Err(err) = build_site(paths) {
        let err = anyhow::Error::from(err);
        log!("error"; "rebuild failed: {err:#}");
    }
}

/// Start a blocking file watcher that rebuilds the whole site on change.
///
/// Runs until the event channel disconnects (process termination).
pub fn watch_for_changes_blocking(paths: &'static SitePaths) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx)?;

    watcher.watch(&paths.content, RecursiveMode::NonRecursive)?;
    watcher.watch(&paths.posts, RecursiveMode::NonRecursive)?;
    watcher.watch(&paths.templates, RecursiveMode::NonRecursive)?;
    if paths.statics.is_dir() {
        watcher.watch(&paths.statics, RecursiveMode::Recursive)?;
    }

    log!("watch"; "watching for changes...");

    for result in rx {
        match result {
            Ok(event) if is_relevant(&event) => {
                log!("watch"; "change detected, regenerating site...");
                rebuild(paths);
            }
            Ok(_) => {}
            Err(err) => log!("watch"; "error: {err}"),
        }
    }

    Ok(())
}
