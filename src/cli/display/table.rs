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

//! Table rendering for components and deployment status

use super::colors::ColorTheme;
use super::icons::StatusIcon;
use crate::domain::devfile::{DevfileComponent, DevfileData};
use chrono::{DateTime, Utc};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use k8s_openapi::api::apps::v1::Deployment;

/// How `push` treats a declared component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentRole {
    /// Becomes a container of the component pod.
    Container,
    /// No alias, so it is never referenced.
    NotAliased,
    /// Aliased but not a dockerimage component.
    NotContainerImage,
}

impl ComponentRole {
    pub fn of(component: &DevfileComponent) -> Self {
        if component.alias.is_none() {
            ComponentRole::NotAliased
        } else if component.is_dockerimage() {
            ComponentRole::Container
        } else {
            ComponentRole::NotContainerImage
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ComponentRole::Container => "container",
            ComponentRole::NotAliased => "skipped (no alias)",
            ComponentRole::NotContainerImage => "skipped (not dockerimage)",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComponentRow {
    pub alias: String,
    pub component_type: String,
    pub image: String,
    pub memory: String,
    pub endpoints: String,
    pub role: ComponentRole,
}

impl From<&DevfileComponent> for ComponentRow {
    fn from(component: &DevfileComponent) -> Self {
        let endpoints = component
            .endpoints
            .iter()
            .map(|e| format!("{}:{}", e.name, e.port))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            alias: component.alias.clone().unwrap_or_else(|| "-".to_string()),
            component_type: component.component_type.as_str().to_string(),
            image: component.image.clone().unwrap_or_else(|| "-".to_string()),
            memory: component
                .memory_limit
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            endpoints: if endpoints.is_empty() {
                "-".to_string()
            } else {
                endpoints
            },
            role: ComponentRole::of(component),
        }
    }
}

/// Summary of a component deployment as read back from the cluster.
#[derive(Debug, Clone)]
pub struct DeploymentStatus {
    pub name: String,
    pub namespace: String,
    pub ready: u32,
    pub desired: u32,
    pub containers: Vec<String>,
    pub created: Option<DateTime<Utc>>,
}

impl DeploymentStatus {
    pub fn from_deployment(deployment: &Deployment, fallback_namespace: &str) -> Self {
        let status = deployment.status.as_ref();
        let spec = deployment.spec.as_ref();

        let desired = spec.and_then(|s| s.replicas).unwrap_or(1).max(0) as u32;
        let ready = status
            .and_then(|s| s.ready_replicas)
            .unwrap_or(0)
            .max(0) as u32;
        let containers = spec
            .and_then(|s| s.template.spec.as_ref())
            .map(|p| p.containers.iter().map(|c| c.name.clone()).collect())
            .unwrap_or_default();

        Self {
            name: deployment.metadata.name.clone().unwrap_or_default(),
            namespace: deployment
                .metadata
                .namespace
                .clone()
                .unwrap_or_else(|| fallback_namespace.to_string()),
            ready,
            desired,
            containers,
            created: deployment.metadata.creation_timestamp.as_ref().map(|t| t.0),
        }
    }
}

/// Human readable age, e.g. `3d4h`, `5m`.
pub fn format_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - created).num_seconds().max(0);
    let (days, hours) = (secs / 86_400, (secs % 86_400) / 3_600);
    let minutes = (secs % 3_600) / 60;

    if days > 0 {
        format!("{}d{}h", days, hours)
    } else if hours > 0 {
        format!("{}h{}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", secs)
    }
}

pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    fn table() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    pub fn render_components(&self, data: &DevfileData) -> String {
        let rows: Vec<ComponentRow> = data.get_components().iter().map(Into::into).collect();
        if rows.is_empty() {
            return format!("{} No components declared", StatusIcon::WARNING.yellow());
        }

        let mut table = Self::table();
        table.set_header(vec![
            Cell::new("ALIAS"),
            Cell::new("TYPE"),
            Cell::new("IMAGE"),
            Cell::new("MEMORY"),
            Cell::new("ENDPOINTS"),
            Cell::new("PUSHED AS"),
        ]);

        for row in &rows {
            let icon = match row.role {
                ComponentRole::Container => StatusIcon::SUCCESS,
                _ => StatusIcon::SKIPPED,
            };
            table.add_row(vec![
                Cell::new(&row.alias),
                Cell::new(&row.component_type),
                Cell::new(&row.image),
                Cell::new(&row.memory).set_alignment(CellAlignment::Right),
                Cell::new(&row.endpoints),
                Cell::new(format!("{} {}", icon, row.role.label()))
                    .fg(self.theme.component_color(row.role)),
            ]);
        }

        let containers = rows
            .iter()
            .filter(|r| r.role == ComponentRole::Container)
            .count();
        format!(
            "{}\n{} of {} component(s) become containers",
            table,
            containers.to_string().bold(),
            rows.len()
        )
    }

    pub fn render_component_status(
        &self,
        component: &str,
        namespace: &str,
        status: Option<&DeploymentStatus>,
        now: DateTime<Utc>,
    ) -> String {
        let status = match status {
            Some(s) => s,
            None => {
                return format!(
                    "{} Component '{}' is not deployed in namespace '{}'",
                    StatusIcon::ERROR.red(),
                    component,
                    namespace
                );
            }
        };

        let mut table = Self::table();
        table.set_header(vec![Cell::new("FIELD"), Cell::new("VALUE")]);
        table.add_row(vec![Cell::new("Component"), Cell::new(&status.name)]);
        table.add_row(vec![Cell::new("Namespace"), Cell::new(&status.namespace)]);
        table.add_row(vec![
            Cell::new("Status"),
            Cell::new(format!(
                "{} {}",
                StatusIcon::get_replica_icon(status.ready, status.desired),
                StatusIcon::get_status_text(status.ready, status.desired)
            ))
            .fg(self.theme.replica_color(status.ready, status.desired)),
        ]);
        table.add_row(vec![
            Cell::new("Ready"),
            Cell::new(format!("{}/{}", status.ready, status.desired)),
        ]);
        table.add_row(vec![
            Cell::new("Containers"),
            Cell::new(status.containers.join(", ")),
        ]);
        table.add_row(vec![
            Cell::new("Age"),
            Cell::new(
                status
                    .created
                    .map(|c| format_age(c, now))
                    .unwrap_or_else(|| StatusIcon::UNKNOWN.to_string()),
            ),
        ]);

        table.to_string()
    }
}
