// Bigtable Table Admin client for Rust
// Copyright 2025 MinIO, Inc.
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

//! Credential providers

#[derive(Clone)]
/// Credentials presented to the admin service as a bearer token
pub struct Credentials {
    pub access_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"*****")
            .finish()
    }
}

/// Provider trait to fetch credentials
///
/// Called once per request, so implementations that refresh tokens can hand
/// out a fresh one each time.
pub trait Provider: std::fmt::Debug {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with the given access token
    ///
    /// # Examples
    ///
    /// ```
    /// use bigtable_admin::channel::creds::StaticProvider;
    /// let provider = StaticProvider::new("ya29.token");
    /// ```
    pub fn new(access_token: &str) -> StaticProvider {
        StaticProvider {
            creds: Credentials {
                access_token: access_token.to_string(),
            },
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}
