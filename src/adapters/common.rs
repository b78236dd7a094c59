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

use crate::domain::component::ComponentIdentity;
use crate::domain::devfile::DevfileObj;

/// State every platform adapter starts from: the parsed devfile and the
/// identity of the component it is pushed as.
#[derive(Debug, Clone)]
pub struct AdapterContext {
    pub component: ComponentIdentity,
    pub devfile: DevfileObj,
}

impl AdapterContext {
    pub fn new(component: ComponentIdentity, devfile: DevfileObj) -> Self {
        Self { component, devfile }
    }

    pub fn component_name(&self) -> &str {
        &self.component.name
    }
}
