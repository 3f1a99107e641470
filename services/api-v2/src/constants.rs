// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

// Env values used in qcloud api v2.
pub const TENCENTCLOUD_SECRET_ID: &str = "TENCENTCLOUD_SECRET_ID";
pub const QCLOUD_SECRET_ID: &str = "QCLOUD_SECRET_ID";
pub const TENCENTCLOUD_SECRET_KEY: &str = "TENCENTCLOUD_SECRET_KEY";
pub const QCLOUD_SECRET_KEY: &str = "QCLOUD_SECRET_KEY";
pub const TENCENTCLOUD_REGION: &str = "TENCENTCLOUD_REGION";
pub const QCLOUD_REGION: &str = "QCLOUD_REGION";
pub const QCLOUD_REQUEST_METHOD: &str = "QCLOUD_REQUEST_METHOD";

// Request defaults.
pub const DEFAULT_REGION: &str = "gz";
pub const DEFAULT_PATH: &str = "/v2/index.php";
pub const ENDPOINT_SUFFIX: &str = ".api.qcloud.com";

// Parameter keys filled in by the client.
pub const ACTION: &str = "Action";
pub const SECRET_ID: &str = "SecretId";
pub const TIMESTAMP: &str = "Timestamp";
pub const NONCE: &str = "Nonce";
pub const REGION: &str = "Region";
pub const SIGNATURE: &str = "Signature";

/// Values starting with this marker reference an uploaded file and are left
/// out of the string to sign for POST requests.
pub const FILE_MARKER: char = '@';
