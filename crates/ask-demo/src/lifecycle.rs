//! # Demo Lifecycle
//!
//! [`DemoSystem`] owns the substrate runtime, starts the sample workers on it
//! and hands out their addresses. Callers stay on plain threads, so both
//! blocking and callback asks can be shown from `main`.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all addresses** - closes every mailbox
//! 2. **Workers detect closure** - their loops end and `on_stop` runs
//! 3. **Await completion** - the worker tasks are joined on the runtime

use crate::clients::GreeterClient;
use crate::workers::{Blackhole, Greeter, Grumpy};
use ask_bridge::{Bridge, BridgeConfig, WorkerActor, WorkerRef};
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Name of the substrate runtime's worker threads.
pub const SUBSTRATE_THREAD: &str = "substrate";

const GREETER_LATENCY: Duration = Duration::from_millis(20);

pub struct DemoSystem {
    pub bridge: Bridge,
    pub greeter: WorkerRef<String, String>,
    pub blackhole: WorkerRef<String, String>,
    pub grumpy: WorkerRef<String, String>,
    handles: Vec<JoinHandle<()>>,
    runtime: Runtime,
}

impl DemoSystem {
    /// Builds the substrate runtime and starts every worker on it.
    pub fn start(config: BridgeConfig) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name(SUBSTRATE_THREAD)
            .enable_all()
            .build()?;
        let handle = runtime.handle();

        let (greeter, greeter_task) =
            WorkerActor::spawn_with(Greeter::new(GREETER_LATENCY), &config, handle);
        let (blackhole, blackhole_task) = WorkerActor::spawn_with(Blackhole, &config, handle);
        let (grumpy, grumpy_task) = WorkerActor::spawn_with(Grumpy, &config, handle);

        let bridge = Bridge::with_config(handle.clone(), config);
        info!("Demo system started");

        Ok(Self {
            bridge,
            greeter,
            blackhole,
            grumpy,
            handles: vec![greeter_task, blackhole_task, grumpy_task],
            runtime,
        })
    }

    pub fn greeter_client(&self) -> GreeterClient {
        GreeterClient::new(self.bridge.clone(), self.greeter.clone())
    }

    /// The substrate runtime, e.g. to use it as a callback context.
    pub fn runtime(&self) -> &tokio::runtime::Handle {
        self.runtime.handle()
    }

    /// Closes every mailbox and waits for the workers to finish.
    ///
    /// Clients handed out by [`DemoSystem::greeter_client`] keep the greeter
    /// alive; drop them first.
    pub fn shutdown(self) -> Result<(), String> {
        info!("Shutting down demo system...");
        drop(self.greeter);
        drop(self.blackhole);
        drop(self.grumpy);

        for handle in self.handles {
            if let Err(e) = self.runtime.block_on(handle) {
                error!("Worker task failed: {:?}", e);
                return Err(format!("Worker task failed: {:?}", e));
            }
        }

        info!("Demo system shutdown complete.");
        Ok(())
    }
}
