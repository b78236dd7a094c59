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

use crate::infrastructure::constants::STRATEGY_TYPE_RECREATE;
use crate::infrastructure::kubernetes::resources::pod::create_object_meta;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec, DeploymentStrategy};
use k8s_openapi::api::core::v1::PodTemplateSpec;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct DeploymentSpecParams {
    pub pod_template_spec: PodTemplateSpec,
    /// Defaults to the pod template labels when `None`.
    pub pod_selector_labels: Option<BTreeMap<String, String>>,
}

impl DeploymentSpecParams {
    pub fn new(pod_template_spec: PodTemplateSpec) -> Self {
        Self {
            pod_template_spec,
            pod_selector_labels: None,
        }
    }
}

pub fn generate_deployment_spec(params: DeploymentSpecParams) -> DeploymentSpec {
    let match_labels = params.pod_selector_labels.or_else(|| {
        params
            .pod_template_spec
            .metadata
            .as_ref()
            .and_then(|m| m.labels.clone())
    });

    DeploymentSpec {
        strategy: Some(DeploymentStrategy {
            type_: Some(STRATEGY_TYPE_RECREATE.to_string()),
            ..Default::default()
        }),
        selector: LabelSelector {
            match_labels,
            ..Default::default()
        },
        template: params.pod_template_spec,
        ..Default::default()
    }
}

/// Wraps a spec into the object posted to the API server.
pub fn generate_deployment(name: &str, namespace: &str, spec: DeploymentSpec) -> Deployment {
    let labels = spec
        .template
        .metadata
        .as_ref()
        .and_then(|m| m.labels.clone())
        .unwrap_or_default();

    Deployment {
        metadata: create_object_meta(name, namespace, labels),
        spec: Some(spec),
        ..Default::default()
    }
}
