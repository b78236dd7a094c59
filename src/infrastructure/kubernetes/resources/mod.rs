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

pub mod deployment;
pub mod pod;

pub use self::deployment::{generate_deployment, generate_deployment_spec, DeploymentSpecParams};
pub use self::pod::{
    convert_envs, generate_container, generate_pod_template_spec, get_resource_reqs,
    ContainerParams, PodTemplateSpecParams,
};
