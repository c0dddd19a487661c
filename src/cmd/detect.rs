use std::process::ExitCode;

use anyhow::Result;
use async_trait::async_trait;

use crate::{cli::DetectOptions, config::Config, vendor::aws::Ec2Detector};

pub struct DetectCommand {
    pub detect_options: DetectOptions,
    pub config: Config,
}

#[async_trait]
impl super::Command for DetectCommand {
    async fn run(&self) -> Result<ExitCode> {
        let detection = Ec2Detector::from_config(&self.config)?.detect().await;

        if self.detect_options.json {
            println!("{}", serde_json::to_string_pretty(&detection)?);
        } else {
            println!("{}", detection.is_ec2());
        }

        if !detection.is_conclusive() {
            tracing::warn!("Instance metadata is unreachable, the result may be inaccurate");
        }

        Ok(if detection.is_ec2() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
