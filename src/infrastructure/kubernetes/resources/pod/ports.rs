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

use crate::domain::devfile::DockerimageEndpoint;
use crate::infrastructure::constants::PROTOCOL_TCP;
use crate::shared::error::{OdoError, Result};
use k8s_openapi::api::core::v1::{Container, ContainerPort};
use std::collections::HashSet;

pub fn convert_ports(endpoints: &[DockerimageEndpoint], component: &str) -> Result<Vec<ContainerPort>> {
    let mut seen = HashSet::new();
    let mut ports = Vec::with_capacity(endpoints.len());

    for endpoint in endpoints {
        if !seen.insert(endpoint.name.as_str()) {
            return Err(OdoError::config_error(format!(
                "component '{}' declares endpoint '{}' more than once",
                component, endpoint.name
            )));
        }
        if !(1..=65535).contains(&endpoint.port) {
            return Err(OdoError::config_error(format!(
                "endpoint '{}' of component '{}' has invalid port {}",
                endpoint.name, component, endpoint.port
            )));
        }

        ports.push(ContainerPort {
            name: Some(endpoint.name.clone()),
            container_port: endpoint.port,
            protocol: Some(PROTOCOL_TCP.to_string()),
            ..Default::default()
        });
    }

    Ok(ports)
}

/// Containers of one pod share a network namespace, so endpoint names and
/// port numbers must be unique across all of them.
pub fn check_port_conflicts(existing: &[Container], candidate: &Container) -> Result<()> {
    let candidate_ports = candidate.ports.as_deref().unwrap_or_default();

    for container in existing {
        for port in container.ports.as_deref().unwrap_or_default() {
            for cur in candidate_ports {
                if cur.name.is_some() && cur.name == port.name {
                    return Err(OdoError::config_error(format!(
                        "devfile contains multiple endpoint entries with same name: {}",
                        cur.name.as_deref().unwrap_or_default()
                    )));
                }
                if cur.container_port == port.container_port {
                    return Err(OdoError::config_error(format!(
                        "devfile contains multiple containers with same port: {}",
                        cur.container_port
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(name: &str, port: i32) -> DockerimageEndpoint {
        DockerimageEndpoint {
            name: name.to_string(),
            port,
        }
    }

    fn container_with(ports: Vec<ContainerPort>) -> Container {
        Container {
            name: "c".to_string(),
            ports: Some(ports),
            ..Default::default()
        }
    }

    #[test]
    fn test_convert_ports() {
        let ports = convert_ports(&[endpoint("http", 8080), endpoint("debug", 5858)], "runtime").unwrap();
        assert_eq!(ports.len(), 2);
        assert_eq!(ports[0].name.as_deref(), Some("http"));
        assert_eq!(ports[0].container_port, 8080);
        assert_eq!(ports[0].protocol.as_deref(), Some("TCP"));
        assert_eq!(ports[1].container_port, 5858);
    }

    #[test]
    fn test_convert_ports_rejects_duplicates_and_range() {
        assert!(convert_ports(&[endpoint("http", 8080), endpoint("http", 8081)], "runtime").is_err());
        assert!(convert_ports(&[endpoint("http", 0)], "runtime").is_err());
        assert!(convert_ports(&[endpoint("http", 70000)], "runtime").is_err());
    }

    #[test]
    fn test_check_port_conflicts() {
        let first = container_with(convert_ports(&[endpoint("http", 8080)], "a").unwrap());

        let same_port = container_with(convert_ports(&[endpoint("web", 8080)], "b").unwrap());
        assert!(check_port_conflicts(&[first.clone()], &same_port).is_err());

        let same_name = container_with(convert_ports(&[endpoint("http", 9090)], "b").unwrap());
        assert!(check_port_conflicts(&[first.clone()], &same_name).is_err());

        let distinct = container_with(convert_ports(&[endpoint("db", 5432)], "b").unwrap());
        assert!(check_port_conflicts(&[first], &distinct).is_ok());
    }
}
