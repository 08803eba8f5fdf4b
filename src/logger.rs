use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the CLI subscriber. Logs go to stderr; stdout is reserved for
/// the progress lines scripts read.
pub fn init_cli_logger(verbose: bool) -> anyhow::Result<()> {
    let default_directive = if verbose {
        "ingredient_strip=debug"
    } else {
        "ingredient_strip=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}
