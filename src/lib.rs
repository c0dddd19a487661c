pub mod cli;
pub mod cmd;
pub mod config;
pub mod vendor;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use cmd::IntoCommand as _;
use shadow_rs::shadow;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub use vendor::aws::{detect, is_ec2, Detection, Ec2Detector};

shadow!(build);

pub async fn run() -> Result<ExitCode> {
    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let (filter, reload_handle) = tracing_subscriber::reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::Cli::parse();

    if args.verbose {
        reload_handle
            .modify(|filter| {
                *filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into())
            })
            .context("Failed to update log level to DEBUG")?;
    }

    tracing::debug!(
        "ec2probe version: v{}  commit: {}  buildtime: {}",
        build::PKG_VERSION,
        build::COMMIT_HASH,
        build::BUILD_TIME
    );

    let config = config::load_config(args.config.as_deref()).await?;
    tracing::debug!(?config, "Using config");

    // Handle the command
    args.command.into_command(config).run().await
}

#[cfg(test)]
mod tests {

    #[cfg(test)]
    #[ctor::ctor]
    fn init() {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "debug".into());
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
