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

//! odo configuration file (TOML)

use crate::domain::component::is_valid_k8s_name;
use crate::shared::error::{OdoError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_ENV: &str = "ODO_CONFIG_FILE";
pub const LOCAL_CONFIG_FILE: &str = ".odo/config.toml";
pub const DEFAULT_DEVFILE: &str = "devfile.yaml";
pub const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OdoConfig {
    pub namespace: String,
    pub kubeconfig: Option<String>,
    pub context: Option<String>,
    pub devfile: String,
    pub component_name: Option<String>,
}

impl Default for OdoConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            kubeconfig: None,
            context: None,
            devfile: DEFAULT_DEVFILE.to_string(),
            component_name: None,
        }
    }
}

impl OdoConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| {
            OdoError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let conf: Self = toml::from_str(&content)?;
        conf.validate()?;
        Ok(conf)
    }

    /// Priority: explicit path > ODO_CONFIG_FILE > ./.odo/config.toml > defaults
    pub fn load(explicit: Option<&str>, working_dir: &Path) -> Result<Self> {
        match resolve_config_path(explicit, working_dir) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_k8s_name(&self.namespace) {
            return Err(OdoError::config_error(format!(
                "Invalid namespace: {}",
                self.namespace
            )));
        }

        if let Some(ref name) = self.component_name {
            if !is_valid_k8s_name(name) {
                return Err(OdoError::config_error(format!(
                    "Invalid component_name: {}",
                    name
                )));
            }
        }

        if self.devfile.is_empty() {
            return Err(OdoError::config_error("devfile path must not be empty"));
        }

        Ok(())
    }
}

fn resolve_config_path(explicit: Option<&str>, working_dir: &Path) -> Option<PathBuf> {
    let env_path = std::env::var(CONFIG_FILE_ENV).ok();
    resolve_config_path_with(explicit, env_path.as_deref(), working_dir)
}

fn resolve_config_path_with(
    explicit: Option<&str>,
    env_path: Option<&str>,
    working_dir: &Path,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    if let Some(env_path) = env_path.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(env_path));
    }

    let local = working_dir.join(LOCAL_CONFIG_FILE);
    local.exists().then_some(local)
}
