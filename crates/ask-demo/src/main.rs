//! # Ask Demo
//!
//! Runs one blocking and one callback ask against each sample worker:
//!
//! 1.  [`Greeter`](ask_demo::workers::Greeter) answers.
//! 2.  [`Blackhole`](ask_demo::workers::Blackhole) never does, so the ask times out.
//! 3.  [`Grumpy`](ask_demo::workers::Grumpy) answers with a failure.
//!
//! Usage: `ask-demo [config.toml]`, with logs controlled by `RUST_LOG`.

use ask_bridge::tracing::setup_tracing;
use ask_bridge::{BridgeConfig, NamedThreads, Outcome, WorkerRef};
use ask_demo::lifecycle::DemoSystem;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{error, info, warn};

const ASK_TIMEOUT: Duration = Duration::from_millis(250);

fn report(worker: &str, outcome: &Outcome<String>) {
    match outcome {
        Ok(reply) => info!(worker, reply = %reply, "Reply received"),
        Err(e) if e.is_timeout() => warn!(worker, error = %e, "No reply"),
        Err(e) => error!(worker, error = %e, "Ask failed"),
    }
}

fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => BridgeConfig::load(&path).map_err(|e| e.to_string())?,
        None => BridgeConfig::default(),
    };
    info!(?config, "Starting ask demo");

    let system = DemoSystem::start(config).map_err(|e| e.to_string())?;
    let workers: [(&str, &WorkerRef<String, String>); 3] = [
        ("greeter", &system.greeter),
        ("blackhole", &system.blackhole),
        ("grumpy", &system.grumpy),
    ];

    // Blocking: this thread waits for each outcome in turn
    for (name, target) in workers {
        let outcome = system
            .bridge
            .ask_blocking(target, "Alice".to_string(), ASK_TIMEOUT);
        report(name, &outcome);
    }

    // Callbacks: all three in flight at once
    let (tx, rx) = mpsc::channel();
    for (name, target) in workers {
        let tx = tx.clone();
        system.bridge.ask_async(
            target,
            "Bob".to_string(),
            ASK_TIMEOUT,
            NamedThreads::new("callbacks"),
            move |outcome| {
                let _ = tx.send((name, outcome));
            },
        );
    }
    drop(tx);
    for (name, outcome) in rx {
        report(name, &outcome);
    }

    // Through the domain client, with the configured default timeout
    let client = system.greeter_client();
    match client.greet_blocking("Carol") {
        Ok(greeting) => info!(greeting = %greeting, "Client greeting"),
        Err(e) => error!(error = %e, "Client greeting failed"),
    }
    drop(client);

    system.shutdown()?;
    info!("Application completed successfully");
    Ok(())
}
