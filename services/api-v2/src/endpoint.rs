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

use std::collections::HashMap;
use std::fmt::Debug;

use crate::constants::ENDPOINT_SUFFIX;

/// ResolveEndpoint maps a module name (`cvm`, `cdb`, ...) to the host serving it.
pub trait ResolveEndpoint: Debug + Send + Sync + 'static {
    /// Return the host for `module`, or `None` if the module is unknown.
    fn resolve(&self, module: &str) -> Option<String>;
}

// Must stay sorted, looked up with binary search.
const KNOWN_MODULES: &[&str] = &[
    "account", "bill", "bm", "bmeip", "bmlb", "bmvpc", "cbs", "cdb", "cdn", "cmem", "cns",
    "cvm", "dfw", "eip", "feecenter", "image", "lb", "live", "market", "monitor", "redis",
    "scaling", "sec", "snapshot", "tdsql", "tmt", "trade", "vod", "vpc", "wenzhi", "yunsou",
];

/// KnownModules resolves the public modules of QCloud API v2 to
/// `{module}.api.qcloud.com`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownModules;

impl ResolveEndpoint for KnownModules {
    fn resolve(&self, module: &str) -> Option<String> {
        let module = module.to_ascii_lowercase();
        KNOWN_MODULES
            .binary_search(&module.as_str())
            .ok()
            .map(|_| format!("{module}{ENDPOINT_SUFFIX}"))
    }
}

/// StaticEndpoints resolves modules from a user supplied table.
#[derive(Debug, Clone, Default)]
pub struct StaticEndpoints {
    hosts: HashMap<String, String>,
}

impl StaticEndpoints {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `module` to `host`.
    pub fn with(mut self, module: impl Into<String>, host: impl Into<String>) -> Self {
        self.hosts.insert(module.into(), host.into());
        self
    }
}

impl ResolveEndpoint for StaticEndpoints {
    fn resolve(&self, module: &str) -> Option<String> {
        self.hosts.get(module).cloned()
    }
}
