//! Driver process launching.
//!
//! Launching is fire-and-forget: the child and the threads forwarding its
//! output outlive the call that started them. The supervisor keeps the
//! returned [`DriverHandle`] but never joins or waits on it; when the
//! owning program exits, the driver is left to the OS.

use crate::error::{DroverError, Result};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread::JoinHandle;
use tracing::{debug, info};

/// Handle to a launched driver process.
///
/// Owns the child and its output-forwarder threads from launch until
/// process exit or program exit. No join/wait is ever performed.
#[derive(Debug)]
pub struct DriverHandle {
    pid: u32,
    child: Option<Child>,
    forwarders: Vec<JoinHandle<()>>,
}

impl DriverHandle {
    /// Handle for a process this supervisor did not actually spawn.
    /// Used by test doubles standing in for the real spawner.
    pub fn detached(pid: u32) -> Self {
        Self {
            pid,
            child: None,
            forwarders: Vec::new(),
        }
    }

    /// PID of the launched process.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Whether this handle owns a real child process.
    pub fn is_attached(&self) -> bool {
        self.child.is_some()
    }

    /// Number of background output-forwarder threads.
    pub fn forwarder_count(&self) -> usize {
        self.forwarders.len()
    }
}

/// Capability for launching the driver binary.
pub trait DriverSpawner: Send + Sync {
    /// Launch `binary` with `args`, forwarding its output in the
    /// background, and return a handle to the running child.
    fn spawn(&self, binary: &Path, args: &[String]) -> Result<DriverHandle>;
}

/// Real spawner backed by `std::process::Command`.
///
/// The child's stdout and stderr are piped and forwarded line-by-line to
/// the parent's stdout by two detached threads. No structured capture, no
/// exit-code handling.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl DriverSpawner for SystemSpawner {
    fn spawn(&self, binary: &Path, args: &[String]) -> Result<DriverHandle> {
        let mut cmd = Command::new(binary);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|e| DroverError::Spawn {
            binary: PathBuf::from(binary),
            source: e,
        })?;

        let pid = child.id();
        info!("Launched {} with PID {}", binary.display(), pid);

        let mut forwarders = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            forwarders.push(forward_lines(stdout));
        }
        if let Some(stderr) = child.stderr.take() {
            forwarders.push(forward_lines(stderr));
        }

        Ok(DriverHandle {
            pid,
            child: Some(child),
            forwarders,
        })
    }
}

/// Forward a child output stream line-by-line to our stdout until the
/// stream closes.
fn forward_lines(stream: impl Read + Send + 'static) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let reader = BufReader::new(stream);
        for line in reader.lines() {
            match line {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    debug!("Output forwarding stopped: {}", e);
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_handle() {
        let handle = DriverHandle::detached(4242);
        assert_eq!(handle.pid(), 4242);
        assert!(!handle.is_attached());
        assert_eq!(handle.forwarder_count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_forwards_and_detaches() {
        let handle = SystemSpawner
            .spawn(Path::new("echo"), &["hello".to_string()])
            .unwrap();

        assert!(handle.pid() > 0);
        assert!(handle.is_attached());
        assert_eq!(handle.forwarder_count(), 2);

        // The child exits on its own; the handle never waits for it.
        std::thread::sleep(std::time::Duration::from_millis(200));
    }

    #[test]
    fn test_spawn_missing_binary_errors() {
        let err = SystemSpawner
            .spawn(Path::new("/nonexistent/drover-test-binary"), &[])
            .unwrap_err();
        assert!(matches!(err, DroverError::Spawn { .. }));
    }
}
