// src/watch.rs
use notify::{RecursiveMode, Watcher};
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::config::Config;
use crate::engine;
use crate::error::Result;
use crate::presentation;
use crate::registry::CounterRegistry;

/// 対象ファイルと設定ファイルを監視し、変更のたびに数え直す。
/// 設定スナップショットはサイクルごとに読み直す。
pub fn watch_loop(config: &Config, registry: &CounterRegistry) -> Result<()> {
    let (tx, rx) = channel();

    // The notification back-end is selected based on the platform.
    let mut watcher = notify::recommended_watcher(move |res| match res {
        Ok(event) => {
            let _ = tx.send(event);
        }
        Err(e) => eprintln!("watch error: {e:?}"),
    })?;

    for path in &config.paths {
        if path.exists() {
            watcher.watch(path, RecursiveMode::NonRecursive)?;
        }
    }
    if let Some(path) = &config.settings_path {
        if path.exists() {
            watcher.watch(path, RecursiveMode::NonRecursive)?;
        }
    }

    // Initial run
    println!("[count_words] Starting watch mode...");
    run_cycle(config, registry);

    loop {
        while rx.recv().is_ok() {
            // Debounce: consume all events in the queue until silence
            std::thread::sleep(Duration::from_millis(300));
            while rx.try_recv().is_ok() {}

            run_cycle(config, registry);
        }
    }
}

fn run_cycle(config: &Config, registry: &CounterRegistry) {
    match engine::run(config, registry) {
        Ok(result) => {
            for (path, err) in &result.errors {
                eprintln!("Error processing {}: {err}", path.display());
            }
            if let Err(e) = presentation::print_results(&result.reports, config) {
                eprintln!("Error in watch cycle: {e}");
            }
        }
        Err(e) => eprintln!("Error in watch cycle: {e}"),
    }
}
