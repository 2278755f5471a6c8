use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. Logs go to stderr; stdout carries reports only.
///
/// `RUST_LOG` wins over the flags when set.
pub fn init_tracing(verbose: u8, quiet: bool, json: bool) -> anyhow::Result<()> {
    let default_level = if quiet {
        "off"
    } else {
        match verbose {
            0 => "error",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!("initialise logging: {e}"))
    } else {
        fmt()
            .compact()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("initialise logging: {e}"))
    }
}
