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

use crate::adapters::common::AdapterContext;
use crate::adapters::kubernetes::utils::{component_labels, get_containers, mounts_project_sources};
use crate::adapters::PlatformAdapter;
use crate::infrastructure::kubernetes::resources::pod::projects_volume;
use crate::infrastructure::kubernetes::resources::{
    generate_deployment, generate_deployment_spec, generate_pod_template_spec,
    DeploymentSpecParams, PodTemplateSpecParams,
};
use crate::infrastructure::kubernetes::OdoKubeClient;
use crate::shared::error::Result;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use tracing::{debug, info, warn};

pub struct KubernetesAdapter<'a> {
    context: AdapterContext,
    client: &'a dyn OdoKubeClient,
}

impl<'a> KubernetesAdapter<'a> {
    pub fn new(context: AdapterContext, client: &'a dyn OdoKubeClient) -> Self {
        Self { context, client }
    }

    pub fn context(&self) -> &AdapterContext {
        &self.context
    }

    /// Lookup failures other than "not found" are also reported as absent.
    async fn component_exists(&self) -> bool {
        let name = self.context.component_name();
        match self.client.get_deployment_by_name(name).await {
            Ok(_) => true,
            Err(e) if e.is_not_found() => false,
            Err(e) => {
                warn!(
                    "lookup of deployment '{}' failed, treating it as absent: {}",
                    name, e
                );
                false
            }
        }
    }

    /// Validates the devfile and builds the deployment spec without touching
    /// the cluster.
    pub fn synthesize(&self) -> Result<DeploymentSpec> {
        self.context.devfile.data.validate()?;
        build_deployment_spec(&self.context, self.client.namespace())
    }

    /// The full object `start` would create; used for dry runs.
    pub fn render(&self) -> Result<Deployment> {
        render_deployment(&self.context, self.client.namespace())
    }
}

/// Validates and renders the deployment for `namespace` without a client.
pub fn render_deployment(context: &AdapterContext, namespace: &str) -> Result<Deployment> {
    context.devfile.data.validate()?;
    let spec = build_deployment_spec(context, namespace)?;
    Ok(generate_deployment(context.component_name(), namespace, spec))
}

fn build_deployment_spec(context: &AdapterContext, namespace: &str) -> Result<DeploymentSpec> {
    let name = context.component_name();
    let containers = get_containers(&context.devfile.data)?;
    let volumes = if mounts_project_sources(&containers) {
        vec![projects_volume()]
    } else {
        Vec::new()
    };
    debug!("component '{}' has {} container(s)", name, containers.len());

    let pod_template_spec = generate_pod_template_spec(PodTemplateSpecParams {
        name: name.to_string(),
        namespace: namespace.to_string(),
        labels: component_labels(name),
        containers,
        volumes,
    });

    Ok(generate_deployment_spec(DeploymentSpecParams::new(
        pod_template_spec,
    )))
}

#[async_trait::async_trait]
impl<'a> PlatformAdapter for KubernetesAdapter<'a> {
    async fn start(&self) -> Result<()> {
        self.context.devfile.data.validate()?;

        let name = self.context.component_name();
        if self.component_exists().await {
            info!("The component {} already exists", name);
            return Ok(());
        }

        let spec = build_deployment_spec(&self.context, self.client.namespace())?;
        info!("Creating component {}", name);
        self.client.create_deployment(name, spec).await?;
        info!("Successfully created component {}", name);

        Ok(())
    }
}
