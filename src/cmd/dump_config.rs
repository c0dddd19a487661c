use std::process::ExitCode;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;

pub struct DumpConfigCommand {
    pub config: Config,
}

#[async_trait]
impl super::Command for DumpConfigCommand {
    async fn run(&self) -> Result<ExitCode> {
        print!("{}", self.config.to_toml_string()?);
        Ok(ExitCode::SUCCESS)
    }
}
