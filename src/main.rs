//! AdTrace Core - CLI Driver
//!
//! Replays a JSONL stream of request events (one RequestEvent per
//! line, as emitted by the interceptor's debug tap) through the engine
//! and prints a per-tab report to stdout. Intended for offline
//! inspection of captured sessions.

use std::io::{BufRead, BufReader, Read};

use adtrace_core::constants::{APP_NAME, APP_VERSION};
use adtrace_core::logic::report;
use adtrace_core::logic::session::store::SessionStore;
use adtrace_core::{ingress, RequestEvent};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("{} v{} - session replay", APP_NAME, APP_VERSION);

    let args: Vec<String> = std::env::args().collect();
    let reader: Box<dyn Read> = match args.get(1) {
        Some(path) => match std::fs::File::open(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                log::error!("cannot open {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Box::new(std::io::stdin()),
    };

    let store = SessionStore::new();
    let mut parsed = 0u64;
    let mut skipped = 0u64;

    for line in BufReader::new(reader).lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("read error: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<RequestEvent>(&line) {
            Ok(event) => match ingress::ingest(&store, &event) {
                Ok(()) => parsed += 1,
                Err(e) => {
                    log::debug!("{}", e);
                    skipped += 1;
                }
            },
            Err(e) => {
                log::warn!("skipping malformed event: {}", e);
                skipped += 1;
            }
        }
    }

    log::info!("replayed {} events ({} skipped)", parsed, skipped);

    for tab_id in store.tab_ids() {
        let report = report::export_report(&store, tab_id);
        println!("{}", report::to_json(&report));
    }
}
