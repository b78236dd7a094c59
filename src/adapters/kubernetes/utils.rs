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

use crate::domain::devfile::{DevfileComponent, DevfileData};
use crate::infrastructure::constants::{
    ENV_PROJECTS_ROOT, LABEL_COMPONENT, PROJECTS_MOUNT_PATH, SECURITY_PRIVILEGED,
    VOLUME_NAME_PROJECTS,
};
use crate::infrastructure::kubernetes::resources::pod::{
    check_port_conflicts, convert_envs, convert_ports, generate_container, get_resource_reqs,
    projects_volume_mount, ContainerParams,
};
use crate::shared::error::{OdoError, Result};
use k8s_openapi::api::core::v1::{Container, EnvVar};
use std::collections::BTreeMap;

pub fn component_labels(component_name: &str) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert(LABEL_COMPONENT.to_string(), component_name.to_string());
    labels
}

/// One container per aliased dockerimage component, in declaration order.
pub fn get_containers(data: &DevfileData) -> Result<Vec<Container>> {
    let mut containers: Vec<Container> = Vec::new();

    for component in data.get_aliased_components() {
        if !component.is_dockerimage() {
            continue;
        }

        let container = convert_component(component)?;
        check_port_conflicts(&containers, &container)?;
        tracing::debug!(
            "synthesized container '{}' from image {:?}",
            container.name,
            container.image
        );
        containers.push(container);
    }

    Ok(containers)
}

fn convert_component(component: &DevfileComponent) -> Result<Container> {
    let alias = component
        .alias
        .as_deref()
        .ok_or_else(|| OdoError::missing_field("alias", "dockerimage component"))?;

    let mut env_vars = convert_envs(&component.env, alias)?;
    let mut volume_mounts = Vec::new();

    if component.mount_sources {
        volume_mounts.push(projects_volume_mount());
        env_vars.push(EnvVar {
            name: ENV_PROJECTS_ROOT.to_string(),
            value: Some(PROJECTS_MOUNT_PATH.to_string()),
            ..Default::default()
        });
    }

    Ok(generate_container(ContainerParams {
        name: alias.to_string(),
        image: component.image.clone(),
        is_privileged: SECURITY_PRIVILEGED,
        command: component.command.clone(),
        args: component.args.clone(),
        env_vars,
        resource_reqs: get_resource_reqs(component),
        ports: convert_ports(&component.endpoints, alias)?,
        volume_mounts,
    }))
}

pub fn mounts_project_sources(containers: &[Container]) -> bool {
    containers.iter().any(|c| {
        c.volume_mounts
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|m| m.name == VOLUME_NAME_PROJECTS)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::devfile::{ComponentType, DockerimageEndpoint, DockerimageEnv};

    fn data(components: Vec<DevfileComponent>) -> DevfileData {
        DevfileData {
            components,
            ..Default::default()
        }
    }

    #[test]
    fn test_get_containers_skips_unaliased_and_non_image() {
        let mut plugin = DevfileComponent::new(ComponentType::ChePlugin);
        plugin.alias = Some("plugin".to_string());

        let containers = get_containers(&data(vec![
            DevfileComponent::dockerimage(Some("runtime"), "node:14"),
            DevfileComponent::dockerimage(None, "hidden:1"),
            plugin,
            DevfileComponent::dockerimage(Some("db"), "postgres:12"),
        ]))
        .unwrap();

        let names: Vec<&str> = containers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["runtime", "db"]);
        assert_eq!(containers[1].image.as_deref(), Some("postgres:12"));
    }

    #[test]
    fn test_get_containers_maps_component_fields() {
        let mut runtime = DevfileComponent::dockerimage(Some("runtime"), "node:14");
        runtime.command = vec!["npm".to_string()];
        runtime.args = vec!["start".to_string()];
        runtime.memory_limit = Some("512Mi".to_string());
        runtime.env = vec![DockerimageEnv::new("PORT", "3000")];
        runtime.endpoints = vec![DockerimageEndpoint {
            name: "http".to_string(),
            port: 3000,
        }];

        let containers = get_containers(&data(vec![runtime])).unwrap();
        let c = &containers[0];

        assert_eq!(c.command, Some(vec!["npm".to_string()]));
        assert_eq!(c.args, Some(vec!["start".to_string()]));
        assert_eq!(c.env.as_ref().map(|e| e[0].name.as_str()), Some("PORT"));
        assert_eq!(c.ports.as_ref().map(|p| p[0].container_port), Some(3000));
        let limits = c.resources.as_ref().and_then(|r| r.limits.as_ref()).unwrap();
        assert_eq!(limits.get("memory").map(|q| q.0.as_str()), Some("512Mi"));
        assert!(c.security_context.is_none());
        assert!(!mounts_project_sources(&containers));
    }

    #[test]
    fn test_get_containers_mount_sources() {
        let mut runtime = DevfileComponent::dockerimage(Some("runtime"), "node:14");
        runtime.mount_sources = true;
        runtime.env = vec![DockerimageEnv::new("A", "1")];

        let containers = get_containers(&data(vec![runtime])).unwrap();
        let env = containers[0].env.as_ref().unwrap();

        assert_eq!(env.len(), 2);
        assert_eq!(env[0].name, "A");
        assert_eq!(env[1].name, "PROJECTS_ROOT");
        assert_eq!(env[1].value.as_deref(), Some("/projects"));
        assert!(mounts_project_sources(&containers));
    }

    #[test]
    fn test_get_containers_port_conflict() {
        let mut a = DevfileComponent::dockerimage(Some("a"), "img:a");
        a.endpoints = vec![DockerimageEndpoint {
            name: "http".to_string(),
            port: 8080,
        }];
        let mut b = DevfileComponent::dockerimage(Some("b"), "img:b");
        b.endpoints = vec![DockerimageEndpoint {
            name: "web".to_string(),
            port: 8080,
        }];

        let err = get_containers(&data(vec![a, b])).unwrap_err();
        assert!(err.to_string().contains("8080"));
    }

    #[test]
    fn test_get_containers_rejects_env_without_value() {
        let mut runtime = DevfileComponent::dockerimage(Some("runtime"), "node:14");
        runtime.env = vec![DockerimageEnv {
            name: Some("A".to_string()),
            value: None,
        }];

        assert!(matches!(
            get_containers(&data(vec![runtime])),
            Err(OdoError::MissingField { field: "value", .. })
        ));
    }

    #[test]
    fn test_component_labels() {
        let labels = component_labels("nodejs");
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get("component").map(String::as_str), Some("nodejs"));
    }
}
