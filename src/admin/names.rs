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

//! Resource names of clusters, tables and column families

use std::fmt;

/// Name of a cluster, `projects/{project}/zones/{zone}/clusters/{cluster}`.
///
/// # Example
///
/// ```
/// use bigtable_admin::admin::ClusterName;
///
/// let cluster = ClusterName::new("my-project", "us-east1-b", "prod");
/// assert_eq!(
///     cluster.table_name("orders"),
///     "projects/my-project/zones/us-east1-b/clusters/prod/tables/orders"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClusterName {
    name: String,
}

impl ClusterName {
    pub fn new(project_id: &str, zone_id: &str, cluster_id: &str) -> Self {
        Self {
            name: format!("projects/{project_id}/zones/{zone_id}/clusters/{cluster_id}"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Full name of a table in this cluster.
    pub fn table_name(&self, table_id: &str) -> String {
        format!("{}/tables/{table_id}", self.name)
    }

    /// Full name of a column family of a table in this cluster.
    pub fn column_family_name(&self, table_id: &str, column_family_id: &str) -> String {
        format!(
            "{}/columnFamilies/{column_family_id}",
            self.table_name(table_id)
        )
    }
}

impl fmt::Display for ClusterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<ClusterName> for String {
    fn from(value: ClusterName) -> Self {
        value.name
    }
}

impl From<&ClusterName> for String {
    fn from(value: &ClusterName) -> Self {
        value.name.clone()
    }
}
