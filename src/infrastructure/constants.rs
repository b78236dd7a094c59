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

/// Resource labels
pub const LABEL_COMPONENT: &str = "component";

/// Resource kinds
pub const KIND_DEPLOYMENT: &str = "Deployment";

/// Container settings
pub const IMAGE_PULL_POLICY_ALWAYS: &str = "Always";
pub const SECURITY_PRIVILEGED: bool = false;
pub const PROTOCOL_TCP: &str = "TCP";

/// Resource classes
pub const RESOURCE_MEMORY: &str = "memory";

/// Deployment strategy
pub const STRATEGY_TYPE_RECREATE: &str = "Recreate";

/// Project sources shared with containers that set mountSources
pub const VOLUME_NAME_PROJECTS: &str = "odo-projects";
pub const PROJECTS_MOUNT_PATH: &str = "/projects";
pub const ENV_PROJECTS_ROOT: &str = "PROJECTS_ROOT";
