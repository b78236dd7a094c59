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

//! Pod-level generators and devfile translation helpers

pub mod container;
pub mod env;
pub mod limits;
pub mod ports;
pub mod template;

pub use self::container::{generate_container, ContainerParams};
pub use self::env::convert_envs;
pub use self::limits::{get_resource_reqs, parse_quantity};
pub use self::ports::{check_port_conflicts, convert_ports};
pub use self::template::{
    create_object_meta, generate_pod_template_spec, projects_volume, projects_volume_mount,
    PodTemplateSpecParams,
};
