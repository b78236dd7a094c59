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

//! Component commands

use super::display::{DeploymentStatus, TableRenderer};
use crate::adapters::{new_platform_adapter, render_deployment, AdapterContext};
use crate::domain::component::{is_valid_k8s_name, ComponentIdentity};
use crate::domain::config::OdoConfig;
use crate::domain::devfile::{self, DevfileObj};
use crate::infrastructure::kubernetes::{OdoKubeClient, OdoKubeClientImpl};
use crate::shared::error::OdoError;
use clap::{Args, Parser};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Cluster connection flags shared by commands that talk to Kubernetes.
#[derive(Args, Debug, Clone, Default)]
pub struct ClusterArgs {
    /// Kubernetes namespace
    /// If not provided, uses the config file value or "default"
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Path to kubeconfig file
    /// If not specified, uses default kubeconfig resolution (KUBECONFIG env or ~/.kube/config)
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Kubernetes context to use
    #[arg(long)]
    pub context: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PushCommand {
    /// Path to the devfile
    #[arg(long, value_name = "PATH")]
    pub devfile: Option<String>,

    /// Component name (must be a valid Kubernetes name)
    /// If not provided, uses component_name from config or the directory name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub cluster: ClusterArgs,

    /// Print the Deployment that would be created instead of creating it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ValidateCommand {
    /// Path to the devfile
    #[arg(long, value_name = "PATH")]
    pub devfile: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DescribeCommand {
    /// Path to the devfile
    #[arg(long, value_name = "PATH")]
    pub devfile: Option<String>,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value = "table")]
    pub output: OutputFormat,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug, Clone)]
pub struct StatusCommand {
    /// Component name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub cluster: ClusterArgs,
}

/// Settings after applying command line > config file > defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub devfile: PathBuf,
    pub namespace: String,
    pub kubeconfig: Option<String>,
    pub context: Option<String>,
    pub component: ComponentIdentity,
}

impl ResolvedSettings {
    pub fn resolve(
        conf: &OdoConfig,
        working_dir: &Path,
        devfile: Option<&str>,
        name: Option<&str>,
        cluster: &ClusterArgs,
    ) -> crate::Result<Self> {
        let devfile = working_dir.join(devfile.unwrap_or(&conf.devfile));

        let component = match name.or(conf.component_name.as_deref()) {
            Some(name) => {
                let component = ComponentIdentity::new(name);
                component.validate()?;
                component
            }
            None => ComponentIdentity::from_directory(working_dir)?,
        };

        let namespace = cluster
            .namespace
            .clone()
            .unwrap_or_else(|| conf.namespace.clone());
        if !is_valid_k8s_name(&namespace) {
            return Err(OdoError::config_error(format!(
                "Invalid namespace: {}",
                namespace
            )));
        }

        Ok(Self {
            devfile,
            namespace,
            kubeconfig: cluster.kubeconfig.clone().or_else(|| conf.kubeconfig.clone()),
            context: cluster.context.clone().or_else(|| conf.context.clone()),
            component,
        })
    }

    /// The Deployment a push would create, as YAML. Needs no cluster access.
    pub fn render_manifest(&self, devfile: DevfileObj) -> anyhow::Result<String> {
        let context = AdapterContext::new(self.component.clone(), devfile);
        let deployment = render_deployment(&context, &self.namespace)?;
        Ok(serde_yaml::to_string(&deployment)?)
    }

    async fn client(&self) -> crate::Result<OdoKubeClientImpl> {
        OdoKubeClientImpl::new_with_config(
            self.namespace.clone(),
            self.kubeconfig.clone(),
            self.context.clone(),
        )
        .await
    }
}

fn load_config(config: Option<&str>) -> anyhow::Result<(OdoConfig, PathBuf)> {
    let working_dir = std::env::current_dir()?;
    let conf = OdoConfig::load(config, &working_dir)?;
    debug!("using configuration {:?}", conf);
    Ok((conf, working_dir))
}

fn load_devfile(
    conf: &OdoConfig,
    working_dir: &Path,
    devfile: Option<&str>,
) -> anyhow::Result<DevfileObj> {
    let path = working_dir.join(devfile.unwrap_or(&conf.devfile));
    Ok(devfile::parse(path)?)
}

impl PushCommand {
    pub async fn execute(&self, config: Option<&str>) -> anyhow::Result<()> {
        let working_dir = std::env::current_dir()?;
        self.execute_in(config, &working_dir).await
    }

    pub async fn execute_in(&self, config: Option<&str>, working_dir: &Path) -> anyhow::Result<()> {
        let conf = OdoConfig::load(config, working_dir)?;
        debug!("using configuration {:?}", conf);
        let settings = ResolvedSettings::resolve(
            &conf,
            working_dir,
            self.devfile.as_deref(),
            self.name.as_deref(),
            &self.cluster,
        )?;

        let devfile = devfile::parse(&settings.devfile)?;

        if self.dry_run {
            print!("{}", settings.render_manifest(devfile)?);
            return Ok(());
        }

        let client = settings.client().await?;
        println!(
            "🚀 Pushing component '{}' to namespace '{}'",
            settings.component.name, settings.namespace
        );
        new_platform_adapter(settings.component.clone(), devfile, &client)
            .start()
            .await?;
        println!("✓ Component '{}' is pushed", settings.component.name);

        Ok(())
    }
}

impl ValidateCommand {
    pub fn execute(&self, config: Option<&str>) -> anyhow::Result<()> {
        let (conf, working_dir) = load_config(config)?;
        let devfile = load_devfile(&conf, &working_dir, self.devfile.as_deref())?;

        devfile.data.validate()?;
        println!("✓ Devfile {} is valid", devfile.path.display());

        Ok(())
    }
}

impl DescribeCommand {
    pub fn execute(&self, config: Option<&str>) -> anyhow::Result<()> {
        let (conf, working_dir) = load_config(config)?;
        let devfile = load_devfile(&conf, &working_dir, self.devfile.as_deref())?;

        if self.output == OutputFormat::Json {
            let json =
                serde_json::to_string_pretty(&devfile.data).map_err(OdoError::from)?;
            println!("{}", json);
            return Ok(());
        }

        let name = &devfile.data.metadata.name;
        if name.is_empty() {
            println!("📋 Devfile: {}", devfile.path.display());
        } else {
            println!("📋 Devfile: {} ({})", name, devfile.path.display());
        }
        println!("{}", TableRenderer::new().render_components(&devfile.data));

        Ok(())
    }
}

impl StatusCommand {
    pub async fn execute(&self, config: Option<&str>) -> anyhow::Result<()> {
        let (conf, working_dir) = load_config(config)?;
        let settings = ResolvedSettings::resolve(
            &conf,
            &working_dir,
            None,
            self.name.as_deref(),
            &self.cluster,
        )?;
        let client = settings.client().await?;

        let status = match client.get_deployment_by_name(&settings.component.name).await {
            Ok(deployment) => Some(DeploymentStatus::from_deployment(
                &deployment,
                client.namespace(),
            )),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e.into()),
        };

        println!(
            "{}",
            TableRenderer::new().render_component_status(
                &settings.component.name,
                &settings.namespace,
                status.as_ref(),
                chrono::Utc::now(),
            )
        );

        Ok(())
    }
}
