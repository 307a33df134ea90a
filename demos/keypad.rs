//! Keypad Demo
//!
//! Drives the calculator from stdin, one key per whitespace-separated token.
//!
//! Key concepts:
//! - Keys map to actions through the keypad, exactly as a browser adapter would
//! - A subscriber renders every state change; the engine never prints
//! - Matrix commands go through the client with the in-process transport
//!
//! Commands start with `:`:
//! - `:sqrt`, `:sin`, ... apply a function
//! - `:det [[1,2],[3,4]]`, `:inv ...`, `:T ...` run a matrix operation
//! - `:theme` toggles the saved theme
//! - `:history` prints the history
//!
//! Run with: RUST_LOG=lambdacalc=debug cargo run --example keypad

use lambdacalc::config::Config;
use lambdacalc::core::{Calculator, EngineEvent};
use lambdacalc::keypad::Action;
use lambdacalc::preferences::{FileStore, MemoryStore, PreferenceStore, ThemeStore};
use lambdacalc::remote::{LocalMath, MatrixOperation, MatrixRequest, RemoteMathClient};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

fn theme_store(config: &Config) -> ThemeStore<Box<dyn PreferenceStore>> {
    let store: Box<dyn PreferenceStore> = match config.preferences.resolve_directory() {
        Some(dir) => Box::new(FileStore::new(dir)),
        None => Box::new(MemoryStore::new()),
    };
    ThemeStore::new(store)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::var("LAMBDACALC_CONFIG") {
        Ok(path) => Config::load(path)?,
        Err(_) => Config::default(),
    };
    let themes = theme_store(&config);
    println!("=== Keypad Demo (theme: {}) ===\n", themes.load()?.name());

    let client = RemoteMathClient::new(LocalMath::new());
    let mut calc = Calculator::new();
    calc.subscribe(|event| match event {
        EngineEvent::StateChanged(snapshot) => {
            println!("{:>24} | {}", snapshot.expression, snapshot.display)
        }
        EngineEvent::HistoryRecorded(entry) => println!("  {} = {}", entry.label, entry.result),
    });

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();

        if let Some(command) = line.strip_prefix(':') {
            let (name, argument) = command.split_once(' ').unwrap_or((command, ""));
            let operation = match name {
                "det" => Some(MatrixOperation::Determinant),
                "inv" => Some(MatrixOperation::Inverse),
                "T" => Some(MatrixOperation::Transpose),
                _ => None,
            };

            match (name, operation) {
                (_, Some(op)) => {
                    let request = MatrixRequest::new(op, argument, "");
                    calc.record_outcome(client.run_matrix(&request).await);
                }
                ("theme", None) => println!("theme: {}", themes.toggle()?.name()),
                ("history", None) => {
                    for entry in calc.history().entries() {
                        println!(
                            "  [{}] {} = {}",
                            entry.timestamp.format("%H:%M:%S"),
                            entry.label,
                            entry.result
                        );
                    }
                }
                (function, None) => calc.dispatch(Action::from_button(function)),
            }
            continue;
        }

        for key in line.split_whitespace() {
            match Action::from_key(key) {
                Some(action) => calc.dispatch(action),
                None => println!("  (unmapped key {:?})", key),
            }
        }
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
