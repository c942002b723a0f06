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

//! Wire model and client for the ML platform control-plane API.
//!
//! The request types form the request tree sent to the service. Every
//! interior node is an `Option` and is only attached to its parent when
//! at least one of its descendants was set, see [`Collapse`].

pub mod client;
pub mod collapse;
pub mod errors;
pub mod model;

pub use client::{ApiConfig, MlPlaneApi, MlPlaneApiClient};
pub use collapse::Collapse;
pub use errors::ApiError;
