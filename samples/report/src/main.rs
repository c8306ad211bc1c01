//! report-lookup
//!
//! Runs every id from `REPORT_IDS` through the report lookup pipeline and
//! prints one line per id.
//!
//! ```bash
//! cargo run --bin report-lookup
//! REPORT_IDS=002,003 RUST_LOG=report_lookup_sample=debug cargo run --bin report-lookup
//! ```

use report_lookup_sample::{ConfigError, ReportCatalog, ReportConfig, render, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "report_lookup_sample=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ReportConfig::from_env()?;
    let catalog = ReportCatalog::sample();
    tracing::info!(count = config.report_ids.len(), "looking up reports");

    for raw in config.ids() {
        println!("{}", render(&run(&catalog, raw)));
    }
    Ok(())
}
