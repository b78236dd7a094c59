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

use crate::domain::devfile::types::{DevfileData, DevfileObj};
use crate::shared::error::{OdoError, Result};
use std::path::Path;

pub const SUPPORTED_API_VERSIONS: &[&str] = &["1.0.0"];

/// Reads a devfile from disk. No rule validation happens here.
pub fn parse(path: impl AsRef<Path>) -> Result<DevfileObj> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(OdoError::config_error(format!(
            "devfile does not exist: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        OdoError::config_error(format!("Failed to read devfile {}: {}", path.display(), e))
    })?;

    let data = parse_str(&content)?;
    Ok(DevfileObj::new(path, data))
}

pub fn parse_str(content: &str) -> Result<DevfileData> {
    let data: DevfileData = serde_yaml::from_str(content)?;

    if !SUPPORTED_API_VERSIONS.contains(&data.api_version.as_str()) {
        return Err(OdoError::UnsupportedApiVersion(data.api_version));
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::devfile::types::{ComponentType, ProjectType};
    use std::io::Write;

    const NODEJS_DEVFILE: &str = r#"
apiVersion: 1.0.0
metadata:
  name: nodejs
projects:
  - name: nodejs-web-app
    source:
      type: git
      location: "https://github.com/odo-devfiles/nodejs-ex.git"
components:
  - type: chePlugin
    id: eclipse/che-theia/latest
  - type: dockerimage
    alias: runtime
    image: registry.access.redhat.com/ubi8/nodejs-12:1-36
    memoryLimit: 1024Mi
    mountSources: true
    env:
      - name: FOO
        value: "bar"
    endpoints:
      - name: http-3000
        port: 3000
commands:
  - name: devBuild
    actions:
      - type: exec
        component: runtime
        command: "npm install"
        workdir: ${CHE_PROJECTS_ROOT}/nodejs-web-app/app
  - name: devRun
    actions:
      - type: exec
        component: runtime
        command: "nodemon app.js"
"#;

    #[test]
    fn test_parse_str_nodejs_devfile() {
        let data = parse_str(NODEJS_DEVFILE).unwrap();

        assert_eq!(data.metadata.name, "nodejs");
        assert_eq!(data.projects.len(), 1);
        assert_eq!(data.projects[0].source.source_type, ProjectType::Git);

        assert_eq!(data.components.len(), 2);
        assert_eq!(data.components[0].component_type, ComponentType::ChePlugin);
        assert!(data.components[0].alias.is_none());

        let runtime = &data.components[1];
        assert_eq!(runtime.alias.as_deref(), Some("runtime"));
        assert_eq!(runtime.memory_limit.as_deref(), Some("1024Mi"));
        assert!(runtime.mount_sources);
        assert_eq!(runtime.env[0].name.as_deref(), Some("FOO"));
        assert_eq!(runtime.env[0].value.as_deref(), Some("bar"));
        assert_eq!(runtime.endpoints[0].port, 3000);

        assert_eq!(data.commands.len(), 2);
        assert_eq!(
            data.commands[0].actions[0].component.as_deref(),
            Some("runtime")
        );
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_parse_str_rejects_unknown_api_version() {
        let err = parse_str("apiVersion: 2.0.0\n").unwrap_err();
        assert!(matches!(err, OdoError::UnsupportedApiVersion(ref v) if v == "2.0.0"));
    }

    #[test]
    fn test_parse_str_keeps_unknown_project_type() {
        let yaml = r#"
apiVersion: 1.0.0
projects:
  - name: legacy
    source:
      type: svn
      location: svn://example.com/repo
"#;
        let data = parse_str(yaml).unwrap();
        assert_eq!(
            data.projects[0].source.source_type,
            ProjectType::Other("svn".to_string())
        );
    }

    #[test]
    fn test_parse_str_env_without_value() {
        let yaml = r#"
apiVersion: 1.0.0
components:
  - type: dockerimage
    alias: runtime
    image: node:14
    env:
      - name: ONLY_NAME
"#;
        let data = parse_str(yaml).unwrap();
        assert_eq!(data.components[0].env[0].value, None);
    }

    #[test]
    fn test_parse_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(NODEJS_DEVFILE.as_bytes()).unwrap();

        let devfile = parse(file.path()).unwrap();
        assert_eq!(devfile.path, file.path());
        assert_eq!(devfile.data.components.len(), 2);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse("/definitely/not/here/devfile.yaml").unwrap_err();
        assert!(err.to_string().contains("devfile does not exist"));
    }
}
