//! Basic usage example - probe, start, inspect, and stop the driver

use drover::{DriverConfig, DriverSupervisor};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drover=debug".into()),
        )
        .init();

    // Get binary name from args or use the default driver
    let binary = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DriverConfig::DEFAULT_BINARY.to_string());

    println!("Supervising driver binary: {}", binary);

    let config = DriverConfig::new()
        .with_binary(binary.as_str())
        .with_process_pattern(binary.as_str());
    let mut supervisor = DriverSupervisor::new(config);

    println!("Driver running: {}", supervisor.is_running());

    supervisor.start()?;

    let status = supervisor.status()?;
    println!(
        "After start: running={}, pid={:?}",
        status.running, status.pid
    );

    supervisor.stop()?;

    Ok(())
}
