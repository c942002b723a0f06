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

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub mod hosting;
pub mod notebook;
pub mod training;

pub use hosting::*;
pub use notebook::*;
pub use training::*;

/// Response fields this client does not model. They are kept so the
/// selector sees the whole response.
pub type Extra = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    // Tags are bound as a key/value map, so the wire list comes out sorted by key.
    pub fn from_map(map: BTreeMap<String, String>) -> Vec<Tag> {
        map.into_iter()
            .map(|(key, value)| Tag { key, value })
            .collect()
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcConfig {
    pub security_group_ids: Option<Vec<String>>,
    pub subnets: Option<Vec<String>>,
}
crate::collapsible!(VpcConfig {
    security_group_ids,
    subnets
});
