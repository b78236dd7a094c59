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

//! Domain rules a devfile must satisfy before anything is pushed.

use crate::domain::devfile::types::{
    ComponentType, DevfileCommand, DevfileComponent, DevfileProject, ProjectType,
    SUPPORTED_PROJECT_TYPES,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("devfile must contain at least one 'build' and one 'run' command: both 'build' and 'run' commands are required in the devfile")]
    MissingBuildOrRunCommand,

    #[error("no components present")]
    NoComponents,

    #[error("devfile must contain at least one component of type '{0}'")]
    MissingComponentType(ComponentType),

    #[error("no projects present")]
    NoProjects,

    #[error("project source type '{found}' is not supported, supported types are: {}", format_types(.supported))]
    UnsupportedProjectType {
        found: String,
        supported: Vec<ProjectType>,
    },
}

fn format_types(types: &[ProjectType]) -> String {
    types
        .iter()
        .map(ProjectType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// At least one command name must contain "build" and one must contain
/// "run"; a single command may cover both.
pub fn validate_commands(commands: &[DevfileCommand]) -> Result<(), ValidationError> {
    let mut has_build = false;
    let mut has_run = false;

    for command in commands {
        let name = command.name.to_lowercase();
        if name.contains("build") {
            has_build = true;
        }
        if name.contains("run") {
            has_run = true;
        }
    }

    if has_build && has_run {
        Ok(())
    } else {
        Err(ValidationError::MissingBuildOrRunCommand)
    }
}

pub fn validate_components(components: &[DevfileComponent]) -> Result<(), ValidationError> {
    if components.is_empty() {
        return Err(ValidationError::NoComponents);
    }

    if components.iter().any(DevfileComponent::is_dockerimage) {
        Ok(())
    } else {
        Err(ValidationError::MissingComponentType(
            ComponentType::Dockerimage,
        ))
    }
}

/// Stops at the first project whose source type is unsupported.
pub fn validate_projects(projects: &[DevfileProject]) -> Result<(), ValidationError> {
    if projects.is_empty() {
        return Err(ValidationError::NoProjects);
    }

    for project in projects {
        validate_project_type(&project.source.source_type)?;
    }

    Ok(())
}

fn validate_project_type(project_type: &ProjectType) -> Result<(), ValidationError> {
    if SUPPORTED_PROJECT_TYPES.contains(project_type) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedProjectType {
            found: project_type.to_string(),
            supported: SUPPORTED_PROJECT_TYPES.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::devfile::types::DevfileData;
    use crate::shared::error::OdoError;

    fn commands(names: &[&str]) -> Vec<DevfileCommand> {
        names.iter().map(|n| DevfileCommand::named(*n)).collect()
    }

    fn git_project(name: &str) -> DevfileProject {
        DevfileProject::new(name, ProjectType::Git, "https://github.com/odo-devfiles/nodejs-ex")
    }

    #[test]
    fn test_validate_commands_build_and_run() {
        assert!(validate_commands(&commands(&["build app", "run app"])).is_ok());
        assert!(validate_commands(&commands(&["buildApp", "runApp"])).is_ok());
        assert!(validate_commands(&commands(&["devBuild", "devRun", "debug"])).is_ok());
    }

    #[test]
    fn test_validate_commands_single_command_covers_both() {
        assert!(validate_commands(&commands(&["build-and-run"])).is_ok());
    }

    #[test]
    fn test_validate_commands_missing_one() {
        assert_eq!(
            validate_commands(&commands(&["run app"])),
            Err(ValidationError::MissingBuildOrRunCommand)
        );
        assert_eq!(
            validate_commands(&commands(&["build app"])),
            Err(ValidationError::MissingBuildOrRunCommand)
        );
        assert_eq!(
            validate_commands(&[]),
            Err(ValidationError::MissingBuildOrRunCommand)
        );
    }

    #[test]
    fn test_validate_commands_message_names_both_kinds() {
        let msg = ValidationError::MissingBuildOrRunCommand.to_string();
        assert!(msg.contains("'build'"));
        assert!(msg.contains("'run'"));
        assert!(msg.contains("required"));
    }

    #[test]
    fn test_validate_components() {
        assert_eq!(validate_components(&[]), Err(ValidationError::NoComponents));
        assert!(validate_components(&[DevfileComponent::new(ComponentType::Dockerimage)]).is_ok());

        let err = validate_components(&[
            DevfileComponent::new(ComponentType::CheEditor),
            DevfileComponent::new(ComponentType::ChePlugin),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingComponentType(ComponentType::Dockerimage)
        );
        assert!(err.to_string().contains("dockerimage"));
    }

    #[test]
    fn test_validate_projects_empty() {
        assert_eq!(validate_projects(&[]), Err(ValidationError::NoProjects));
    }

    #[test]
    fn test_validate_projects_fails_on_first_invalid() {
        let projects = vec![
            git_project("ok"),
            DevfileProject::new("zipped", ProjectType::Zip, "https://example.com/a.zip"),
            DevfileProject::new("hub", ProjectType::GitHub, "https://github.com/a/b"),
            git_project("also-ok"),
        ];

        let err = validate_projects(&projects).unwrap_err();
        match &err {
            ValidationError::UnsupportedProjectType { found, supported } => {
                assert_eq!(found, "zip");
                assert_eq!(supported, &vec![ProjectType::Git]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "project source type 'zip' is not supported, supported types are: git"
        );
    }

    #[test]
    fn test_validate_projects_unknown_type_is_named() {
        let projects = vec![DevfileProject::new(
            "legacy",
            ProjectType::Other("svn".to_string()),
            "svn://example.com/repo",
        )];
        let err = validate_projects(&projects).unwrap_err();
        assert!(err.to_string().contains("'svn'"));
    }

    #[test]
    fn test_composite_validation_order() {
        // every rule is broken; projects are reported first
        let mut data = DevfileData::default();
        match data.validate() {
            Err(OdoError::InvalidDevfile(ValidationError::NoProjects)) => {}
            other => panic!("unexpected result: {:?}", other),
        }

        data.projects.push(git_project("app"));
        match data.validate() {
            Err(OdoError::InvalidDevfile(ValidationError::NoComponents)) => {}
            other => panic!("unexpected result: {:?}", other),
        }

        data.components
            .push(DevfileComponent::dockerimage(Some("runtime"), "node:14"));
        match data.validate() {
            Err(OdoError::InvalidDevfile(ValidationError::MissingBuildOrRunCommand)) => {}
            other => panic!("unexpected result: {:?}", other),
        }

        data.commands = commands(&["devBuild", "devRun"]);
        assert!(data.validate().is_ok());
    }
}
