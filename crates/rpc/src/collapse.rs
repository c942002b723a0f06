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

/// Collapse is implemented by every interior node of a request tree.
///
/// A node is unset when none of its fields carry a value. Projectors build
/// children first and store them as `child.collapse()`, so an interior node
/// whose only populated child collapsed is itself unset and collapses in turn.
pub trait Collapse: Sized {
    fn is_unset(&self) -> bool;

    fn collapse(self) -> Option<Self> {
        if self.is_unset() { None } else { Some(self) }
    }
}

/// Implements [`Collapse`] for a struct whose listed fields are all `Option`s.
#[macro_export]
macro_rules! collapsible {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::collapse::Collapse for $ty {
            fn is_unset(&self) -> bool {
                true $(&& self.$field.is_none())+
            }
        }
    };
}
