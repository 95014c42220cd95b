//! TCP liveness probing.
//!
//! The driver is considered running iff a TCP connection to its listen
//! address can be established. Connection setup alone is the signal; no
//! payload is exchanged and the connection is dropped immediately.

use std::net::{SocketAddr, TcpStream};
use std::time::Duration;
use tracing::trace;

/// Capability for checking whether something is listening on a port.
pub trait PortProbe: Send + Sync {
    /// Returns `true` iff a TCP connection to `addr` can be established
    /// within `timeout`. All connection errors (refused, timeout, host
    /// unreachable) are identically `false`.
    fn probe(&self, addr: SocketAddr, timeout: Duration) -> bool;
}

/// Real probe backed by `TcpStream::connect_timeout`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpProbe;

impl PortProbe for TcpProbe {
    fn probe(&self, addr: SocketAddr, timeout: Duration) -> bool {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(_) => {
                trace!("Probe of {} succeeded", addr);
                true
            }
            Err(e) => {
                trace!("Probe of {} failed: {}", addr, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn test_probe_true_while_listener_is_bound() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        assert!(TcpProbe.probe(addr, Duration::from_millis(500)));
    }

    #[test]
    fn test_probe_false_after_listener_is_dropped() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        assert!(!TcpProbe.probe(addr, Duration::from_millis(500)));
    }
}
