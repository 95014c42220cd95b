//! Drover - Headless library for supervising a browser-automation driver
//! process.
//!
//! This crate manages the lifecycle of one external driver process
//! (chromedriver by default): detecting whether it is running via a TCP
//! liveness probe, starting it if not, and stopping it on request by
//! scanning the OS process table.
//!
//! # Example
//!
//! ```rust,no_run
//! use drover::{DriverConfig, DriverSupervisor};
//!
//! fn main() -> drover::Result<()> {
//!     let mut supervisor = DriverSupervisor::new(DriverConfig::new());
//!
//!     // Idempotent: no-op if the driver already answers on its port
//!     supervisor.start()?;
//!
//!     let status = supervisor.status()?;
//!     println!("running: {}, pid: {:?}", status.running, status.pid);
//!
//!     supervisor.stop()?;
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod platform;
pub mod process;
pub mod status;

// Re-export commonly used types
pub use clock::{Sleeper, SystemSleeper};
pub use config::DriverConfig;
pub use error::{DroverError, Result};
pub use process::{
    DriverHandle, DriverSpawner, DriverStatus, DriverSupervisor, PortProbe, ProcessEntry,
    ProcessInspector, SignalKind, SystemInspector, SystemSpawner, TcpProbe,
};
pub use status::{StatusReporter, TracingReporter};
