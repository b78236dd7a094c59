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

//! Status icons for CLI output

/// Status icons for different states
pub struct StatusIcon;

impl StatusIcon {
    /// Success icon (ready, or pushed as a container)
    pub const SUCCESS: &'static str = "✓";

    /// Warning icon (partially ready)
    pub const WARNING: &'static str = "⚠";

    /// Error icon (nothing ready, or invalid)
    pub const ERROR: &'static str = "✗";

    /// Skipped icon (declared but not pushed)
    pub const SKIPPED: &'static str = "-";

    /// Unknown icon
    pub const UNKNOWN: &'static str = "?";

    /// Icon for a deployment's ready/desired replica count
    pub fn get_replica_icon(ready: u32, desired: u32) -> &'static str {
        if desired == 0 {
            Self::UNKNOWN
        } else if ready == desired {
            Self::SUCCESS
        } else if ready > 0 {
            Self::WARNING
        } else {
            Self::ERROR
        }
    }

    pub fn get_status_text(ready: u32, desired: u32) -> &'static str {
        if desired == 0 {
            "Scaled down"
        } else if ready == desired {
            "Running"
        } else if ready > 0 {
            "Degraded"
        } else {
            "Starting"
        }
    }
}
