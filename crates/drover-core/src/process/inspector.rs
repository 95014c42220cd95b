//! Process-table inspection seam.
//!
//! The OS process table is ambient, unsynchronized state. Access goes
//! through [`ProcessInspector`] so the supervisor can be driven against a
//! scripted table in tests instead of shelling out to `ps`.

use crate::error::Result;
use crate::platform;

pub use crate::platform::ProcessEntry;

/// The signals the supervisor knows how to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// Forceful, non-catchable termination (SIGKILL equivalent).
    Kill,
}

/// Capability for observing and signalling OS processes.
pub trait ProcessInspector: Send + Sync {
    /// Snapshot the process table as (PID, command line) rows.
    fn list_processes(&self) -> Result<Vec<ProcessEntry>>;

    /// Send `signal` to `pid`. A PID that no longer exists is not an
    /// error.
    fn signal(&self, pid: u32, signal: SignalKind) -> Result<()>;
}

/// Real inspector backed by the platform layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInspector;

impl ProcessInspector for SystemInspector {
    fn list_processes(&self) -> Result<Vec<ProcessEntry>> {
        platform::list_processes()
    }

    fn signal(&self, pid: u32, signal: SignalKind) -> Result<()> {
        match signal {
            SignalKind::Kill => platform::kill_process(pid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes() {
        let entry = ProcessEntry {
            pid: 4242,
            command: "/usr/bin/chromedriver --foo".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["pid"], 4242);
        assert_eq!(json["command"], "/usr/bin/chromedriver --foo");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_inspector_sees_self() {
        let entries = SystemInspector.list_processes().unwrap();
        let pid = std::process::id();
        assert!(entries.iter().any(|e| e.pid == pid));
    }

    #[test]
    fn test_signal_nonexistent_pid_is_ok() {
        assert!(SystemInspector.signal(4_000_000_000, SignalKind::Kill).is_ok());
    }
}
