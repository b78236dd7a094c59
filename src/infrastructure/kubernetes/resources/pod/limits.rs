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

//! Devfile resource limits to container resource requirements

use crate::domain::devfile::DevfileComponent;
use crate::infrastructure::constants::RESOURCE_MEMORY;
use k8s_openapi::api::core::v1::ResourceRequirements;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const QUANTITY_PATTERN: &str =
    r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:Ki|Mi|Gi|Ti|Pi|Ei|m|k|M|G|T|P|E|[eE][+-]?[0-9]+)?$";

/// Parses a Kubernetes quantity such as `500Mi`, `+1Gi`, `1.5G` or `128974848`.
pub fn parse_quantity(s: &str) -> Option<Quantity> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    static QUANTITY_RE: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    let re = QUANTITY_RE
        .get_or_init(|| Regex::new(QUANTITY_PATTERN))
        .as_ref()
        .ok()?;
    re.is_match(trimmed)
        .then(|| Quantity(trimmed.to_string()))
}

/// Only the memory limit is mapped; requests are never set.
///
/// A present but unparsable limit still attaches an empty `limits` map,
/// so nilness does not tell "no limit" from "bad limit".
pub fn get_resource_reqs(component: &DevfileComponent) -> ResourceRequirements {
    let mut reqs = ResourceRequirements::default();

    if let Some(ref memory_limit) = component.memory_limit {
        let mut limits = BTreeMap::new();
        if let Some(quantity) = parse_quantity(memory_limit) {
            limits.insert(RESOURCE_MEMORY.to_string(), quantity);
        } else {
            tracing::debug!(
                "ignoring unparsable memoryLimit '{}' on component '{}'",
                memory_limit,
                component.display_name()
            );
        }
        reqs.limits = Some(limits);
    }

    reqs
}
