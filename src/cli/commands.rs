// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// CLI command definitions

use super::component::{DescribeCommand, PushCommand, StatusCommand, ValidateCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "odo",
    version,
    about = "Push devfile components to Kubernetes",
    long_about = "Reads a devfile, validates it and creates the matching Deployment on a Kubernetes cluster"
)]
pub struct CliArgs {
    /// Path to the odo configuration file (TOML)
    /// If not provided, ODO_CONFIG_FILE or ./.odo/config.toml are tried
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Create the component on the cluster unless it already exists
    Push(PushCommand),

    /// Validate the devfile without contacting the cluster
    Validate(ValidateCommand),

    /// Show the devfile components and how they are pushed
    Describe(DescribeCommand),

    /// Show the deployment status of the component
    Status(StatusCommand),
}

impl CliArgs {
    pub async fn execute(self) -> anyhow::Result<()> {
        let config = self.config.as_deref();
        match self.command {
            Commands::Push(cmd) => cmd.execute(config).await,
            Commands::Validate(cmd) => cmd.execute(config),
            Commands::Describe(cmd) => cmd.execute(config),
            Commands::Status(cmd) => cmd.execute(config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::component::OutputFormat;

    #[test]
    fn test_parse_push() {
        let args = CliArgs::try_parse_from([
            "odo",
            "push",
            "--name",
            "nodejs",
            "-n",
            "dev",
            "--dry-run",
        ])
        .unwrap();

        match args.command {
            Commands::Push(cmd) => {
                assert_eq!(cmd.name.as_deref(), Some("nodejs"));
                assert_eq!(cmd.cluster.namespace.as_deref(), Some("dev"));
                assert!(cmd.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let args =
            CliArgs::try_parse_from(["odo", "validate", "--config", "/tmp/odo.toml"]).unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/odo.toml"));
        assert!(matches!(args.command, Commands::Validate(_)));
    }

    #[test]
    fn test_describe_output_format() {
        let args = CliArgs::try_parse_from(["odo", "describe", "-o", "json"]).unwrap();
        match args.command {
            Commands::Describe(cmd) => assert_eq!(cmd.output, OutputFormat::Json),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(CliArgs::try_parse_from(["odo", "describe", "-o", "xml"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(CliArgs::try_parse_from(["odo", "delete"]).is_err());
    }
}
