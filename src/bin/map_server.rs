use log::{error, info};
use parcel_map::rpc::{handle_line, ServerState};
use parcel_map::MapConfig;
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    // stdout carries the protocol, so logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1);
    let config = MapConfig::resolve(config_path.as_deref())?;
    let mut state = ServerState::new(config);
    info!(
        "Starting map server with {} zones in {:?} mode",
        state.session.zones().len(),
        state.session.mode()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("Error reading stdin: {}", e);
                continue;
            }
        };

        let Some(reply) = handle_line(&mut state, &line) else {
            continue;
        };

        if let Err(e) = writeln!(stdout, "{}", reply).and_then(|_| stdout.flush()) {
            error!("Error writing response, shutting down: {}", e);
            break;
        }

        if state.shutdown_requested {
            break;
        }
    }

    info!("Map server stopped");
    Ok(())
}
