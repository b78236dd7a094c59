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

//! Platform adapters reconcile a devfile onto a target platform.

pub mod common;
pub mod kubernetes;

pub use self::common::AdapterContext;
pub use self::kubernetes::{render_deployment, KubernetesAdapter};

use crate::domain::component::ComponentIdentity;
use crate::domain::devfile::DevfileObj;
use crate::infrastructure::kubernetes::OdoKubeClient;
use crate::shared::error::Result;

#[async_trait::async_trait]
pub trait PlatformAdapter: Send + Sync {
    /// Creates the component's workload unless it already exists.
    /// Repeated calls after the first creation are no-ops.
    async fn start(&self) -> Result<()>;
}

/// Builds the adapter for a Kubernetes cluster. The client is borrowed for
/// the lifetime of the adapter.
pub fn new_platform_adapter<'a>(
    component: ComponentIdentity,
    devfile: DevfileObj,
    client: &'a dyn OdoKubeClient,
) -> Box<dyn PlatformAdapter + 'a> {
    Box::new(KubernetesAdapter::new(
        AdapterContext::new(component, devfile),
        client,
    ))
}
