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

//! Devfile domain: model, loader and validation rules

pub mod parser;
pub mod types;
pub mod validator;

pub use self::parser::{parse, parse_str};
pub use self::types::{
    CommandAction, ComponentType, DevfileCommand, DevfileComponent, DevfileData, DevfileObj,
    DevfileProject, DockerimageEndpoint, DockerimageEnv, Metadata, ProjectSource, ProjectType,
    SUPPORTED_PROJECT_TYPES,
};
pub use self::validator::{
    validate_commands, validate_components, validate_projects, ValidationError,
};
