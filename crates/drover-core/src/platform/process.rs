//! Platform-specific process management.
//!
//! This module provides cross-platform abstractions for enumerating the
//! OS process table, checking process liveness, and forcefully killing a
//! process by PID.

// This module owns the OS/FFI boundary for process control; every unsafe
// block below carries a SAFETY note.
#![allow(unsafe_code)]

use crate::error::{DroverError, Result};
use tracing::debug;

/// One row of the process table: PID plus full command line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProcessEntry {
    /// Process ID.
    pub pid: u32,
    /// Full command line, whitespace-trimmed.
    pub command: String,
}

/// Check if a process with the given PID is alive.
///
/// # Platform Behavior
/// - **Linux/macOS**: Uses `kill(pid, 0)` signal check
/// - **Windows**: Uses `OpenProcess` with `PROCESS_QUERY_LIMITED_INFORMATION`
pub fn is_process_alive(pid: u32) -> bool {
    #[cfg(unix)]
    {
        // Signal 0 doesn't actually send a signal, just checks if we can.
        // SAFETY: kill(2) with signal 0 only performs a permission/existence
        // check on the target PID; no process state is modified.
        unsafe { libc::kill(pid as i32, 0) == 0 }
    }

    #[cfg(windows)]
    {
        use windows_sys::Win32::Foundation::CloseHandle;
        use windows_sys::Win32::System::Threading::{
            OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION,
        };

        // SAFETY: OpenProcess/CloseHandle are called with a valid access
        // mask and the handle is closed before returning.
        unsafe {
            let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, pid);
            if !handle.is_null() {
                CloseHandle(handle);
                true
            } else {
                false
            }
        }
    }

    #[cfg(not(any(unix, windows)))]
    {
        tracing::warn!("Process alive check not implemented for this platform");
        true
    }
}

/// Forcefully kill a process by PID.
///
/// # Platform Behavior
/// - **Linux/macOS**: Sends SIGKILL (non-catchable)
/// - **Windows**: Uses `taskkill /PID {pid} /F`
///
/// A PID that no longer exists is treated as already killed.
pub fn kill_process(pid: u32) -> Result<()> {
    #[cfg(unix)]
    {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        debug!("Sending SIGKILL to process {}", pid);
        match kill(Pid::from_raw(pid as i32), Signal::SIGKILL) {
            Ok(()) => Ok(()),
            // Process already gone
            Err(nix::errno::Errno::ESRCH) => Ok(()),
            Err(e) => Err(DroverError::ProcessTable {
                message: format!("Failed to kill process {}: {}", pid, e),
            }),
        }
    }

    #[cfg(windows)]
    {
        use std::process::Command;

        debug!("Terminating process {} with taskkill", pid);
        let output = Command::new("taskkill")
            .args(["/PID", &pid.to_string(), "/F"])
            .output()
            .map_err(|e| DroverError::ProcessTable {
                message: format!("Failed to run taskkill: {}", e),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // "not found" errors are OK - process already dead
            if stderr.contains("not found") || stderr.contains("not running") {
                Ok(())
            } else {
                Err(DroverError::ProcessTable {
                    message: format!("taskkill failed for {}: {}", pid, stderr.trim()),
                })
            }
        }
    }

    #[cfg(not(any(unix, windows)))]
    {
        Err(DroverError::ProcessTable {
            message: "Process termination not implemented for this platform".to_string(),
        })
    }
}

/// List the OS process table as (PID, command line) rows.
///
/// # Platform Behavior
/// - **Linux/macOS**: Uses `ps -e -o pid,command`
/// - **Windows**: Uses `wmic process get processid,commandline`
pub fn list_processes() -> Result<Vec<ProcessEntry>> {
    #[cfg(unix)]
    {
        list_processes_unix()
    }

    #[cfg(windows)]
    {
        list_processes_windows()
    }

    #[cfg(not(any(unix, windows)))]
    {
        Ok(vec![])
    }
}

#[cfg(unix)]
fn list_processes_unix() -> Result<Vec<ProcessEntry>> {
    use std::process::Command;

    let output = Command::new("ps")
        .args(["-e", "-o", "pid,command"])
        .output()
        .map_err(|e| DroverError::ProcessTable {
            message: format!("Failed to run ps: {}", e),
        })?;

    if !output.status.success() {
        return Err(DroverError::ProcessTable {
            message: format!("ps exited with {}", output.status),
        });
    }

    parse_process_table(&String::from_utf8_lossy(&output.stdout))
}

/// Parse `ps -e -o pid,command` output: a header row followed by
/// `<pid> <command...>` rows.
///
/// Blank lines and rows with no command column are skipped; a PID token
/// that is not a valid integer is a hard error.
pub fn parse_process_table(listing: &str) -> Result<Vec<ProcessEntry>> {
    listing
        .lines()
        .skip(1) // header: "PID COMMAND"
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let mut parts = line.splitn(2, char::is_whitespace);
            let pid_token = parts.next()?;
            let command = parts.next()?.trim();
            if command.is_empty() {
                return None;
            }

            let entry = pid_token
                .parse::<u32>()
                .map(|pid| ProcessEntry {
                    pid,
                    command: command.to_string(),
                })
                .map_err(|e| DroverError::ProcessTable {
                    message: format!("Invalid PID token `{}`: {}", pid_token, e),
                });
            Some(entry)
        })
        .collect()
}

#[cfg(windows)]
fn list_processes_windows() -> Result<Vec<ProcessEntry>> {
    use std::process::Command;

    let output = Command::new("wmic")
        .args(["process", "get", "processid,commandline", "/format:csv"])
        .output()
        .map_err(|e| DroverError::ProcessTable {
            message: format!("Failed to run wmic: {}", e),
        })?;

    if !output.status.success() {
        return Err(DroverError::ProcessTable {
            message: format!("wmic exited with {}", output.status),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut entries = Vec::new();

    for line in stdout.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // CSV format: Node,CommandLine,ProcessId
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 3 {
            continue;
        }

        let command = parts[1].trim();
        let pid_token = parts[2].trim();
        if command.is_empty() {
            continue;
        }

        let pid = pid_token
            .parse::<u32>()
            .map_err(|e| DroverError::ProcessTable {
                message: format!("Invalid PID token `{}`: {}", pid_token, e),
            })?;

        entries.push(ProcessEntry {
            pid,
            command: command.to_string(),
        });
    }

    Ok(entries)
}
