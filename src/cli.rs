use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::build::CLAP_LONG_VERSION;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[clap(long_version = CLAP_LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Ec2ProbeSubcommand,

    /// Path to the configuration file. Built-in defaults are used if not specified.
    #[clap(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Print debug log to stderr.
    #[clap(long, short = 'v', global = true, default_value = "false")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Ec2ProbeSubcommand {
    /// Detect whether this host is an EC2 instance. Exits with 0 if it is, 1 otherwise.
    #[command(name = "detect")]
    Detect(DetectOptions),

    /// Check the hypervisor / DMI product UUID without accessing the network.
    #[command(name = "uuid")]
    Uuid(UuidOptions),

    /// Print the effective configuration.
    #[command(name = "config")]
    Config(ConfigOptions),
}

#[derive(Parser, Debug)]
pub struct DetectOptions {
    /// Output the detailed result as JSON instead of `true` / `false`.
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct UuidOptions {
    /// UUID to check. If not specified, it is read from the configured UUID files.
    pub uuid: Option<String>,

    /// Output as JSON format.
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigOptions {}
