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

use crate::infrastructure::constants::IMAGE_PULL_POLICY_ALWAYS;
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, EnvVar, ResourceRequirements, SecurityContext, VolumeMount,
};

/// Everything needed to build one container of the component pod.
#[derive(Debug, Clone, Default)]
pub struct ContainerParams {
    pub name: String,
    pub image: Option<String>,
    pub is_privileged: bool,
    pub command: Vec<String>,
    pub args: Vec<String>,
    pub env_vars: Vec<EnvVar>,
    pub resource_reqs: ResourceRequirements,
    pub ports: Vec<ContainerPort>,
    pub volume_mounts: Vec<VolumeMount>,
}

pub fn generate_container(params: ContainerParams) -> Container {
    let security_context = params.is_privileged.then(|| SecurityContext {
        privileged: Some(true),
        ..Default::default()
    });

    Container {
        name: params.name,
        image: params.image,
        image_pull_policy: Some(IMAGE_PULL_POLICY_ALWAYS.to_string()),
        resources: Some(params.resource_reqs),
        env: non_empty(params.env_vars),
        ports: non_empty(params.ports),
        command: non_empty(params.command),
        args: non_empty(params.args),
        volume_mounts: non_empty(params.volume_mounts),
        security_context,
        ..Default::default()
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
