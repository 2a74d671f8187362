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

//! Client method for GetTable operation

use crate::admin::client::TableAdminClient;
use crate::admin::types::{GetTableRequest, Table};
use crate::error::Error;

impl TableAdminClient {
    /// Fetches a table together with its column families.
    pub fn get_table(&self, request: GetTableRequest) -> Result<Table, Error> {
        self.unary(&request)
    }
}
