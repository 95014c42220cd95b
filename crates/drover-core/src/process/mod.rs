//! Driver process supervision.
//!
//! Handles liveness probing, launching, and stopping of the supervised
//! driver process (chromedriver by default).
//!
//! # Lifecycle Strategy
//!
//! The driver's own TCP listener is the source of truth for liveness:
//! 1. **Port probe** - a TCP connect to the driver's listen address
//! 2. **Process table scan** - how the driver is located for stopping
//!
//! Ambient OS state (the process table, the network port) sits behind
//! capability traits so tests drive the supervisor against fakes instead
//! of shelling out.
//!
//! # Example
//!
//! ```rust,no_run
//! use drover::{DriverConfig, DriverSupervisor};
//!
//! fn main() -> drover::Result<()> {
//!     let mut supervisor = DriverSupervisor::new(DriverConfig::new());
//!
//!     if !supervisor.is_running() {
//!         supervisor.start()?;
//!     }
//!
//!     Ok(())
//! }
//! ```

mod inspector;
mod launcher;
mod probe;
mod supervisor;

pub use inspector::{ProcessEntry, ProcessInspector, SignalKind, SystemInspector};
pub use launcher::{DriverHandle, DriverSpawner, SystemSpawner};
pub use probe::{PortProbe, TcpProbe};
pub use supervisor::{DriverStatus, DriverSupervisor};
