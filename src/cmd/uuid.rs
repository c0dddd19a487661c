use std::process::ExitCode;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    cli::UuidOptions,
    config::Config,
    vendor::aws::uuid::{is_ec2_uuid, probe_uuid, time_low_as_little_endian_hex},
};

pub struct UuidCommand {
    pub uuid_options: UuidOptions,
    pub config: Config,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct UuidReport {
    pub uuid: String,
    pub time_low_little_endian: Option<String>,
    pub looks_like_ec2: bool,
}

impl UuidReport {
    pub fn new(uuid: String) -> Self {
        Self {
            time_low_little_endian: time_low_as_little_endian_hex(&uuid),
            looks_like_ec2: is_ec2_uuid(&uuid),
            uuid,
        }
    }
}

#[async_trait]
impl super::Command for UuidCommand {
    async fn run(&self) -> Result<ExitCode> {
        let uuid = match &self.uuid_options.uuid {
            Some(uuid) => uuid.to_owned(),
            None => match probe_uuid(&self.config.uuid.files).await {
                Some(uuid) => uuid,
                None => {
                    tracing::error!("No UUID found in {:?}", self.config.uuid.files);
                    return Ok(ExitCode::FAILURE);
                }
            },
        };

        let report = UuidReport::new(uuid);
        if self.uuid_options.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("UUID:                  {}", report.uuid);
            println!(
                "time_low (LE):         {}",
                report.time_low_little_endian.as_deref().unwrap_or("-")
            );
            println!("Looks like EC2:        {}", report.looks_like_ec2);
        }

        Ok(if report.looks_like_ec2 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

#[cfg(test)]
pub mod tests {

    use super::*;

    #[test]
    fn test_uuid_report() {
        assert_eq!(
            UuidReport::new("0020ec00-0000-0000-0000-000000000000".to_owned()),
            UuidReport {
                uuid: "0020ec00-0000-0000-0000-000000000000".to_owned(),
                time_low_little_endian: Some("ec2000".to_owned()),
                looks_like_ec2: true,
            }
        );

        let report = UuidReport::new("EC2-not-hex".to_owned());
        assert_eq!(report.time_low_little_endian, None);
        assert!(report.looks_like_ec2);
    }
}
