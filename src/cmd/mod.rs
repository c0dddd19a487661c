use std::process::ExitCode;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;

pub mod detect;
pub mod dump_config;
pub mod uuid;

#[async_trait]
pub trait Command {
    async fn run(&self) -> Result<ExitCode>;
}

pub trait IntoCommand {
    fn into_command(self, config: Config) -> Box<dyn Command>;
}

impl IntoCommand for crate::cli::Ec2ProbeSubcommand {
    fn into_command(self, config: Config) -> Box<dyn Command> {
        match self {
            crate::cli::Ec2ProbeSubcommand::Detect(detect_options) => {
                Box::new(detect::DetectCommand {
                    detect_options,
                    config,
                })
            }
            crate::cli::Ec2ProbeSubcommand::Uuid(uuid_options) => Box::new(uuid::UuidCommand {
                uuid_options,
                config,
            }),
            crate::cli::Ec2ProbeSubcommand::Config(_) => {
                Box::new(dump_config::DumpConfigCommand { config })
            }
        }
    }
}
