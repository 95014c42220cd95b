//! Driver lifecycle supervision.
//!
//! [`DriverSupervisor`] is an idempotent lifecycle controller for one
//! named external process: probe its port to decide whether it is up,
//! launch it if not, and kill it by process-table scan on request.
//!
//! There is deliberately no lock here: the OS process table and the
//! driver's TCP listener are external, unsynchronized resources, and a
//! `start` can always race an externally launched driver instance. The
//! intended usage is one calling thread issuing one operation at a time.

use crate::clock::{Sleeper, SystemSleeper};
use crate::config::DriverConfig;
use crate::error::Result;
use crate::platform;
use crate::status::{StatusReporter, TracingReporter};
use tracing::{debug, warn};

use super::inspector::{ProcessInspector, SignalKind, SystemInspector};
use super::launcher::{DriverHandle, DriverSpawner, SystemSpawner};
use super::probe::{PortProbe, TcpProbe};

/// Point-in-time snapshot of the supervised driver.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DriverStatus {
    /// Whether the liveness probe succeeded.
    pub running: bool,
    /// PID of the first matching process-table entry, if any.
    pub pid: Option<u32>,
}

/// Supervisor for one external driver process.
pub struct DriverSupervisor {
    config: DriverConfig,
    probe: Box<dyn PortProbe>,
    inspector: Box<dyn ProcessInspector>,
    spawner: Box<dyn DriverSpawner>,
    reporter: Box<dyn StatusReporter>,
    sleeper: Box<dyn Sleeper>,
    /// Handle of the child we launched, if any. Held until program exit,
    /// never joined.
    handle: Option<DriverHandle>,
}

impl DriverSupervisor {
    /// Create a supervisor with production capabilities and the default
    /// `tracing`-backed reporter.
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            probe: Box::new(TcpProbe),
            inspector: Box::new(SystemInspector),
            spawner: Box::new(SystemSpawner),
            reporter: Box::new(TracingReporter),
            sleeper: Box::new(SystemSleeper),
            handle: None,
        }
    }

    /// Replace the port probe.
    pub fn with_probe(mut self, probe: impl PortProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Replace the process inspector.
    pub fn with_inspector(mut self, inspector: impl ProcessInspector + 'static) -> Self {
        self.inspector = Box::new(inspector);
        self
    }

    /// Replace the spawner.
    pub fn with_spawner(mut self, spawner: impl DriverSpawner + 'static) -> Self {
        self.spawner = Box::new(spawner);
        self
    }

    /// Replace the status reporter.
    pub fn with_reporter(mut self, reporter: impl StatusReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Replace the sleeper.
    pub fn with_sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Handle of the child this supervisor launched, if any.
    pub fn handle(&self) -> Option<&DriverHandle> {
        self.handle.as_ref()
    }

    /// Check whether the driver is accepting connections right now.
    ///
    /// A point-in-time TCP connect to the configured address; never
    /// cached.
    pub fn is_running(&self) -> bool {
        let running = self
            .probe
            .probe(self.config.probe_addr, self.config.probe_timeout);
        debug!(
            "is_running: {} (probed {})",
            running, self.config.probe_addr
        );
        running
    }

    /// Start the driver if it is not already running.
    ///
    /// Idempotent: if the liveness probe succeeds this is a no-op. When a
    /// launch does happen, the call blocks for the configured settle delay
    /// so the driver can finish initializing; there is no readiness
    /// re-check afterwards.
    ///
    /// # Errors
    ///
    /// [`DroverError::DriverNotFound`](crate::DroverError::DriverNotFound)
    /// when the binary is absent from the search path, or
    /// [`DroverError::Spawn`](crate::DroverError::Spawn) when the launch
    /// itself fails.
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            self.reporter
                .info(&format!("{} is already running", self.config.binary));
            return Ok(());
        }

        self.reporter
            .info(&format!("Starting {}...", self.config.binary));

        let binary = platform::resolve_executable(&self.config.binary).ok_or_else(|| {
            crate::DroverError::DriverNotFound {
                binary: self.config.binary.clone(),
            }
        })?;

        let handle = self.spawner.spawn(&binary, &self.config.args)?;
        debug!(
            "Spawned {} (PID {}), settling for {:?}",
            binary.display(),
            handle.pid(),
            self.config.settle_delay
        );
        self.handle = Some(handle);

        self.sleeper.sleep(self.config.settle_delay);
        Ok(())
    }

    /// Stop the driver found in the process table, if any.
    ///
    /// Scans the process table for the first command line containing the
    /// configured pattern and sends it a forceful kill. A driver that is
    /// not found is reported, not an error; the outcome of the kill
    /// itself is ignored.
    ///
    /// # Errors
    ///
    /// [`DroverError::ProcessTable`](crate::DroverError::ProcessTable)
    /// when the process table cannot be listed or parsed.
    pub fn stop(&mut self) -> Result<()> {
        let processes = self.inspector.list_processes()?;
        let Some(entry) = processes
            .iter()
            .find(|p| p.command.contains(&self.config.process_pattern))
        else {
            self.reporter
                .error(&format!("{} not found", self.config.process_pattern));
            return Ok(());
        };

        self.reporter.info(&format!(
            "Stopping {} (PID {})",
            self.config.process_pattern, entry.pid
        ));
        if let Err(e) = self.inspector.signal(entry.pid, SignalKind::Kill) {
            // The kill outcome is not part of the contract; the signal was
            // sent on a best-effort basis.
            warn!("Kill of PID {} failed: {}", entry.pid, e);
        }
        Ok(())
    }

    /// Snapshot the driver state: one probe plus one process-table scan.
    pub fn status(&self) -> Result<DriverStatus> {
        let running = self.is_running();
        let pid = self
            .inspector
            .list_processes()?
            .iter()
            .find(|p| p.command.contains(&self.config.process_pattern))
            .map(|p| p.pid);
        Ok(DriverStatus { running, pid })
    }
}
