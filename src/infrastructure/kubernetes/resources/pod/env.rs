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

//! Devfile env entries to container env vars

use crate::domain::devfile::DockerimageEnv;
use crate::shared::error::{OdoError, Result};
use k8s_openapi::api::core::v1::EnvVar;

/// Keeps order and length. An entry without a name or a value is
/// rejected instead of being translated into an empty variable.
pub fn convert_envs(vars: &[DockerimageEnv], component: &str) -> Result<Vec<EnvVar>> {
    vars.iter()
        .enumerate()
        .map(|(idx, var)| {
            let name = var.name.as_ref().ok_or_else(|| {
                OdoError::missing_field(
                    "name",
                    format!("env[{}] of component '{}'", idx, component),
                )
            })?;
            let value = var.value.as_ref().ok_or_else(|| {
                OdoError::missing_field(
                    "value",
                    format!("env var '{}' of component '{}'", name, component),
                )
            })?;

            Ok(EnvVar {
                name: name.clone(),
                value: Some(value.clone()),
                ..Default::default()
            })
        })
        .collect()
}
