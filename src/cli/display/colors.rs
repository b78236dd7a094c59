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

//! Color theme for CLI output

use super::table::ComponentRole;
use comfy_table::Color as TableColor;

#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    pub fn replica_color(&self, ready: u32, desired: u32) -> TableColor {
        if desired == 0 {
            self.muted
        } else if ready == desired {
            self.success
        } else if ready > 0 {
            self.warning
        } else {
            self.error
        }
    }

    pub fn component_color(&self, role: ComponentRole) -> TableColor {
        match role {
            ComponentRole::Container => self.success,
            ComponentRole::NotAliased | ComponentRole::NotContainerImage => self.muted,
        }
    }
}
