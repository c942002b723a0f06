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

use rpc::{ApiConfig, MlPlaneApiClient};

pub async fn create_mock_http_server() -> mockito::ServerGuard {
    // Request a new server from the pool
    mockito::Server::new_async().await
}

// add_mock registers a single expected call of `operation` answering with
// `status_code` and `response_body`.
pub async fn add_mock(
    server: &mut mockito::ServerGuard,
    operation: &str,
    response_body: &str,
    status_code: usize,
) -> mockito::Mock {
    server
        .mock("POST", "/")
        .match_header("x-amz-target", format!("MlPlane.{operation}").as_str())
        .with_status(status_code)
        .with_header("content-type", "application/x-amz-json-1.1")
        .with_body(response_body)
        .expect(1)
        .create_async()
        .await
}

pub fn client_for(server: &mockito::ServerGuard) -> MlPlaneApiClient {
    let config = ApiConfig::new(&server.url(), "us-test-1").expect("mock server url is valid");
    MlPlaneApiClient::new(config).expect("client builds")
}
