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

//! In-memory devfile model (schema 1.0.0)
//!
//! Accessors hand out views of the parsed data; command names are
//! normalized to lowercase when read, never when stored.

use crate::domain::devfile::validator;
use crate::shared::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// A parsed devfile together with the file it was read from.
#[derive(Debug, Clone, Default)]
pub struct DevfileObj {
    pub path: PathBuf,
    pub data: DevfileData,
}

impl DevfileObj {
    pub fn new(path: impl Into<PathBuf>, data: DevfileData) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DevfileData {
    pub api_version: String,

    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<DevfileProject>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<DevfileComponent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<DevfileCommand>,
}

impl DevfileData {
    pub fn get_components(&self) -> &[DevfileComponent] {
        &self.components
    }

    /// Components that commands can address, in declaration order.
    pub fn get_aliased_components(&self) -> Vec<&DevfileComponent> {
        self.components
            .iter()
            .filter(|c| c.alias.is_some())
            .collect()
    }

    pub fn get_commands(&self) -> Vec<DevfileCommand> {
        self.commands
            .iter()
            .map(|c| DevfileCommand {
                name: c.name.to_lowercase(),
                ..c.clone()
            })
            .collect()
    }

    pub fn get_projects(&self) -> &[DevfileProject] {
        &self.projects
    }

    /// Runs the project, component and command rules in that order and
    /// returns the first violation.
    pub fn validate(&self) -> Result<()> {
        validator::validate_projects(self.get_projects())?;
        validator::validate_components(self.get_components())?;
        validator::validate_commands(&self.get_commands())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generate_name: String,
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DevfileCommand {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<CommandAction>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl DevfileCommand {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommandAction {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workdir: Option<String>,
}

// ============================================================================
// Components
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentType {
    #[serde(rename = "cheEditor")]
    CheEditor,
    #[serde(rename = "chePlugin")]
    ChePlugin,
    #[serde(rename = "dockerimage")]
    Dockerimage,
    #[serde(rename = "kubernetes")]
    Kubernetes,
    #[serde(rename = "openshift")]
    Openshift,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::CheEditor => "cheEditor",
            ComponentType::ChePlugin => "chePlugin",
            ComponentType::Dockerimage => "dockerimage",
            ComponentType::Kubernetes => "kubernetes",
            ComponentType::Openshift => "openshift",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DevfileComponent {
    #[serde(rename = "type")]
    pub component_type: ComponentType,

    /// Without an alias the component can't be referenced by commands
    /// and never becomes a container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(default)]
    pub mount_sources: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<DockerimageEnv>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<DockerimageEndpoint>,
}

impl DevfileComponent {
    pub fn new(component_type: ComponentType) -> Self {
        Self {
            component_type,
            alias: None,
            mount_sources: false,
            image: None,
            memory_limit: None,
            command: Vec::new(),
            args: Vec::new(),
            env: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    pub fn dockerimage(alias: Option<&str>, image: &str) -> Self {
        Self {
            alias: alias.map(str::to_string),
            image: Some(image.to_string()),
            ..Self::new(ComponentType::Dockerimage)
        }
    }

    pub fn is_dockerimage(&self) -> bool {
        self.component_type == ComponentType::Dockerimage
    }

    /// Alias when present, otherwise the type; used in messages only.
    pub fn display_name(&self) -> &str {
        self.alias
            .as_deref()
            .unwrap_or_else(|| self.component_type.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DockerimageEnv {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl DockerimageEnv {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DockerimageEndpoint {
    pub name: String,
    pub port: i32,
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DevfileProject {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone_path: Option<String>,

    pub source: ProjectSource,
}

impl DevfileProject {
    pub fn new(name: impl Into<String>, source_type: ProjectType, location: &str) -> Self {
        Self {
            name: name.into(),
            clone_path: None,
            source: ProjectSource {
                source_type,
                location: location.to_string(),
                branch: None,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSource {
    #[serde(rename = "type")]
    pub source_type: ProjectType,

    #[serde(default)]
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Project source kind. Unknown kinds are kept verbatim so validation can
/// name them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    Git,
    GitHub,
    Zip,
    Other(String),
}

impl ProjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectType::Git => "git",
            ProjectType::GitHub => "github",
            ProjectType::Zip => "zip",
            ProjectType::Other(s) => s,
        }
    }
}

impl From<String> for ProjectType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "git" => ProjectType::Git,
            "github" => ProjectType::GitHub,
            "zip" => ProjectType::Zip,
            _ => ProjectType::Other(s),
        }
    }
}

impl From<ProjectType> for String {
    fn from(t: ProjectType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project source types odo knows how to check out.
pub const SUPPORTED_PROJECT_TYPES: &[ProjectType] = &[ProjectType::Git];
