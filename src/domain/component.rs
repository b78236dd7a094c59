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

use crate::shared::error::{OdoError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

const MAX_NAME_LEN: usize = 63;

/// Identity of the component on the platform. The name keys the existence
/// lookup and names the synthesized deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentIdentity {
    pub name: String,
}

impl ComponentIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Derives the name from the directory base name, lower-cased and
    /// reduced to a DNS-1123 label.
    pub fn from_directory(dir: &Path) -> Result<Self> {
        let base = dir
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                OdoError::config_error(format!(
                    "Cannot derive a component name from {}",
                    dir.display()
                ))
            })?;

        let name = to_dns1123_label(base)?;
        if name.is_empty() {
            return Err(OdoError::config_error(format!(
                "Directory name '{}' has no characters usable in a component name",
                base
            )));
        }

        Ok(Self { name })
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_k8s_name(&self.name) || self.name.len() > MAX_NAME_LEN {
            return Err(OdoError::config_error(format!(
                "Invalid component name '{}': must be a lowercase DNS-1123 label of at most {} characters",
                self.name, MAX_NAME_LEN
            )));
        }
        Ok(())
    }
}

fn to_dns1123_label(raw: &str) -> Result<String> {
    static INVALID_RUN: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    let re = INVALID_RUN
        .get_or_init(|| Regex::new(r"[^a-z0-9-]+"))
        .as_ref()
        .map_err(|e| OdoError::config_error(format!("Invalid name pattern: {}", e)))?;

    let lowered = raw.to_lowercase();
    let replaced = re.replace_all(&lowered, "-");
    let mut name: String = replaced.trim_matches('-').chars().take(MAX_NAME_LEN).collect();
    while name.ends_with('-') {
        name.pop();
    }
    Ok(name)
}

pub(crate) fn is_valid_k8s_name(name: &str) -> bool {
    if name.is_empty() || name.len() > 253 {
        return false;
    }

    if !name.chars().next().unwrap_or(' ').is_ascii_alphanumeric() {
        return false;
    }
    if !name.chars().last().unwrap_or(' ').is_ascii_alphanumeric() {
        return false;
    }

    name.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_directory_lowercases() {
        let id = ComponentIdentity::from_directory(&PathBuf::from("/home/dev/NodeJS-App")).unwrap();
        assert_eq!(id.name, "nodejs-app");
        assert!(id.validate().is_ok());
    }

    #[test]
    fn test_from_directory_replaces_invalid_runs() {
        let id = ComponentIdentity::from_directory(&PathBuf::from("/src/my_app.v2")).unwrap();
        assert_eq!(id.name, "my-app-v2");

        let id = ComponentIdentity::from_directory(&PathBuf::from("/src/__svc__")).unwrap();
        assert_eq!(id.name, "svc");
    }

    #[test]
    fn test_from_directory_truncates() {
        let long = "a".repeat(80);
        let id = ComponentIdentity::from_directory(&PathBuf::from(format!("/src/{}", long))).unwrap();
        assert_eq!(id.name.len(), MAX_NAME_LEN);
    }

    #[test]
    fn test_from_directory_without_usable_chars() {
        assert!(ComponentIdentity::from_directory(&PathBuf::from("/src/___")).is_err());
        assert!(ComponentIdentity::from_directory(&PathBuf::from("/")).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        assert!(ComponentIdentity::new("Upper").validate().is_err());
        assert!(ComponentIdentity::new("-leading").validate().is_err());
        assert!(ComponentIdentity::new("").validate().is_err());
        assert!(ComponentIdentity::new("ok-name-1").validate().is_ok());
    }
}
