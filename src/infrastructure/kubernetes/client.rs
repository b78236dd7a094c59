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

use crate::infrastructure::constants::KIND_DEPLOYMENT;
use crate::infrastructure::kubernetes::resources::generate_deployment;
use crate::shared::error::OdoError;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use kube::{Api, Client};

/// The slice of the platform API the adapters need.
#[async_trait::async_trait]
pub trait OdoKubeClient: Send + Sync {
    fn namespace(&self) -> &str;

    /// A missing deployment comes back as `OdoError::NotFound`.
    async fn get_deployment_by_name(&self, name: &str) -> Result<Deployment, OdoError>;

    async fn create_deployment(
        &self,
        name: &str,
        spec: DeploymentSpec,
    ) -> Result<Deployment, OdoError>;
}

pub struct OdoKubeClientImpl {
    client: Client,
    namespace: String,
}

impl OdoKubeClientImpl {
    pub async fn new(namespace: String) -> Result<Self, OdoError> {
        let client = Client::try_default().await.map_err(|e| {
            OdoError::Platform(format!("Failed to create Kubernetes client: {}", e))
        })?;

        Ok(Self { client, namespace })
    }

    pub async fn new_with_config(
        namespace: String,
        kubeconfig_path: Option<String>,
        context: Option<String>,
    ) -> Result<Self, OdoError> {
        use kube::config::{KubeConfigOptions, Kubeconfig};

        if kubeconfig_path.is_none() && context.is_none() {
            return Self::new(namespace).await;
        }

        let kubeconfig = if let Some(path) = kubeconfig_path {
            Kubeconfig::read_from(path)
                .map_err(|e| OdoError::Platform(format!("Failed to load kubeconfig: {}", e)))?
        } else {
            Kubeconfig::read()
                .map_err(|e| OdoError::Platform(format!("Failed to load kubeconfig: {}", e)))?
        };

        let config_options = KubeConfigOptions {
            context,
            cluster: None,
            user: None,
        };

        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &config_options)
            .await
            .map_err(|e| {
                OdoError::Platform(format!("Failed to create Kubernetes config: {}", e))
            })?;

        let client = Client::try_from(config).map_err(|e| {
            OdoError::Platform(format!("Failed to create Kubernetes client: {}", e))
        })?;

        Ok(Self { client, namespace })
    }

    fn deployments(&self) -> Api<Deployment> {
        Api::namespaced(self.client.clone(), &self.namespace)
    }
}

#[async_trait::async_trait]
impl OdoKubeClient for OdoKubeClientImpl {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    async fn get_deployment_by_name(&self, name: &str) -> Result<Deployment, OdoError> {
        self.deployments().get(name).await.map_err(|e| {
            if let kube::Error::Api(ae) = e {
                if ae.code == 404 {
                    OdoError::not_found(KIND_DEPLOYMENT, name, &self.namespace)
                } else {
                    OdoError::Platform(ae.message)
                }
            } else {
                OdoError::Platform(e.to_string())
            }
        })
    }

    async fn create_deployment(
        &self,
        name: &str,
        spec: DeploymentSpec,
    ) -> Result<Deployment, OdoError> {
        let deployment = generate_deployment(name, &self.namespace, spec);
        let pp = kube::api::PostParams::default();

        self.deployments()
            .create(&pp, &deployment)
            .await
            .map_err(|e| match e {
                kube::Error::Api(ae) if ae.code == 409 => {
                    OdoError::already_exists(KIND_DEPLOYMENT, name, &self.namespace)
                }
                other => OdoError::from(other),
            })
    }
}
