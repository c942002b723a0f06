/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{Extra, Tag};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNotebookInstanceLifecycleConfigRequest {
    pub notebook_instance_lifecycle_config_name: Option<String>,
    pub on_create: Option<Vec<LifecycleHook>>,
    pub on_start: Option<Vec<LifecycleHook>>,
    pub tags: Option<Vec<Tag>>,
}

/// A lifecycle script. The service expects the script body base64 encoded.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifecycleHook {
    pub content: Option<String>,
}

impl LifecycleHook {
    pub fn from_script(script: &[u8]) -> Self {
        Self {
            content: Some(STANDARD.encode(script)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNotebookInstanceLifecycleConfigResponse {
    pub notebook_instance_lifecycle_config_arn: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_content_is_base64() {
        let hook = LifecycleHook::from_script(b"#!/bin/bash\necho hi\n");
        assert_eq!(hook.content.as_deref(), Some("IyEvYmluL2Jhc2gKZWNobyBoaQo="));
    }
}
