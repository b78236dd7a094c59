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

use crate::infrastructure::constants::{PROJECTS_MOUNT_PATH, VOLUME_NAME_PROJECTS};
use k8s_openapi::api::core::v1::{
    Container, EmptyDirVolumeSource, PodSpec, PodTemplateSpec, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct PodTemplateSpecParams {
    pub name: String,
    pub namespace: String,
    pub labels: BTreeMap<String, String>,
    pub containers: Vec<Container>,
    pub volumes: Vec<Volume>,
}

pub fn create_object_meta(
    name: &str,
    namespace: &str,
    labels: BTreeMap<String, String>,
) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some(namespace.to_string()),
        labels: Some(labels),
        ..Default::default()
    }
}

pub fn generate_pod_template_spec(params: PodTemplateSpecParams) -> PodTemplateSpec {
    PodTemplateSpec {
        metadata: Some(create_object_meta(
            &params.name,
            &params.namespace,
            params.labels,
        )),
        spec: Some(PodSpec {
            containers: params.containers,
            volumes: if params.volumes.is_empty() {
                None
            } else {
                Some(params.volumes)
            },
            ..Default::default()
        }),
    }
}

/// Scratch volume the project sources are synced into.
pub fn projects_volume() -> Volume {
    Volume {
        name: VOLUME_NAME_PROJECTS.to_string(),
        empty_dir: Some(EmptyDirVolumeSource::default()),
        ..Default::default()
    }
}

pub fn projects_volume_mount() -> VolumeMount {
    VolumeMount {
        name: VOLUME_NAME_PROJECTS.to_string(),
        mount_path: PROJECTS_MOUNT_PATH.to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_pod_template_spec() {
        let mut labels = BTreeMap::new();
        labels.insert("component".to_string(), "nodejs".to_string());

        let template = generate_pod_template_spec(PodTemplateSpecParams {
            name: "nodejs".to_string(),
            namespace: "dev".to_string(),
            labels,
            containers: vec![
                Container {
                    name: "runtime".to_string(),
                    ..Default::default()
                },
                Container {
                    name: "tools".to_string(),
                    ..Default::default()
                },
            ],
            volumes: Vec::new(),
        });

        let meta = template.metadata.unwrap();
        assert_eq!(meta.name.as_deref(), Some("nodejs"));
        assert_eq!(meta.namespace.as_deref(), Some("dev"));
        assert_eq!(
            meta.labels.unwrap().get("component").map(String::as_str),
            Some("nodejs")
        );

        let spec = template.spec.unwrap();
        let names: Vec<&str> = spec.containers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["runtime", "tools"]);
        assert!(spec.volumes.is_none());
    }

    #[test]
    fn test_projects_volume_and_mount_match() {
        let volume = projects_volume();
        let mount = projects_volume_mount();
        assert_eq!(volume.name, mount.name);
        assert!(volume.empty_dir.is_some());
        assert_eq!(mount.mount_path, "/projects");
    }
}
