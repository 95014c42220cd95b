//! Platform abstraction layer for cross-platform compatibility.
//!
//! This module centralizes all platform-specific code to make it easy to
//! find, maintain, and extend. All `#[cfg]` blocks for OS-specific
//! behavior should live in this module rather than scattered throughout
//! the codebase.
//!
//! # Architecture
//!
//! Each submodule handles a specific cross-platform concern:
//! - `paths` - Executable search-path resolution
//! - `process` - Process table enumeration, liveness, forceful kill

pub mod paths;
pub mod process;

// Re-export commonly used items
pub use paths::{resolve_executable, resolve_executable_in};
pub use process::{is_process_alive, kill_process, list_processes, ProcessEntry};
