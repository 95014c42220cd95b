//! Configuration for driver supervision.
//!
//! Production defaults match the constants the supervised driver has
//! always been run with; everything is overridable for tests and for
//! callers that run the driver on a non-default port.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Configuration for the driver supervisor.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Name of the driver binary to resolve on the executable search path.
    pub binary: String,
    /// Address the driver listens on; connecting here is the liveness signal.
    pub probe_addr: SocketAddr,
    /// Timeout for the liveness TCP connect.
    pub probe_timeout: Duration,
    /// Fixed wait after launch, a crude stand-in for a readiness probe.
    pub settle_delay: Duration,
    /// Arguments passed to the driver binary.
    pub args: Vec<String>,
    /// Substring matched against process-table command lines when stopping.
    pub process_pattern: String,
}

impl DriverConfig {
    /// Default driver binary name.
    pub const DEFAULT_BINARY: &'static str = "chromedriver";
    /// Default liveness probe address.
    pub const DEFAULT_PROBE_ADDR: SocketAddr =
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 9515);
    /// Default liveness connect timeout.
    pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);
    /// Default post-launch settle delay.
    pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(2000);

    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            binary: Self::DEFAULT_BINARY.to_string(),
            probe_addr: Self::DEFAULT_PROBE_ADDR,
            probe_timeout: Self::DEFAULT_PROBE_TIMEOUT,
            settle_delay: Self::DEFAULT_SETTLE_DELAY,
            args: vec![
                "--whitelisted-ips".to_string(),
                String::new(),
                "--allowed-origins".to_string(),
                "*".to_string(),
            ],
            process_pattern: Self::DEFAULT_BINARY.to_string(),
        }
    }

    /// Set the driver binary name.
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Set the liveness probe address.
    pub fn with_probe_addr(mut self, addr: SocketAddr) -> Self {
        self.probe_addr = addr;
        self
    }

    /// Set the liveness connect timeout.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Set the post-launch settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Replace the driver arguments.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Append a driver argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the command-line substring used to find the driver when stopping.
    pub fn with_process_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.process_pattern = pattern.into();
        self
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DriverConfig::new();

        assert_eq!(config.binary, "chromedriver");
        assert_eq!(config.probe_addr.port(), 9515);
        assert!(config.probe_addr.ip().is_loopback());
        assert_eq!(config.settle_delay, Duration::from_millis(2000));
        assert_eq!(
            config.args,
            vec!["--whitelisted-ips", "", "--allowed-origins", "*"]
        );
        assert_eq!(config.process_pattern, "chromedriver");
    }

    #[test]
    fn test_builder() {
        let config = DriverConfig::new()
            .with_binary("geckodriver")
            .with_probe_addr("127.0.0.1:4444".parse().unwrap())
            .with_settle_delay(Duration::from_millis(500))
            .with_args(vec![])
            .with_arg("--log=debug")
            .with_process_pattern("geckodriver");

        assert_eq!(config.binary, "geckodriver");
        assert_eq!(config.probe_addr.port(), 4444);
        assert_eq!(config.settle_delay, Duration::from_millis(500));
        assert_eq!(config.args, vec!["--log=debug"]);
        assert_eq!(config.process_pattern, "geckodriver");
    }
}
