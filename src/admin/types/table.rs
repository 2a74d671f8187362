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

//! Table, column family and garbage-collection rule definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// A table and, depending on the call that produced it, its column families.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Full resource name: `projects/{p}/zones/{z}/clusters/{c}/tables/{t}`
    #[serde(default)]
    pub name: String,
    /// Set while a long-running operation on the table is in progress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_operation: Option<Operation>,
    /// Column families keyed by column family id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub column_families: BTreeMap<String, ColumnFamily>,
    #[serde(default)]
    pub granularity: TimestampGranularity,
}

impl Table {
    /// Returns the table id, the last segment of the resource name.
    pub fn table_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }
}

/// Granularity of cell timestamps in a table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampGranularity {
    #[default]
    #[serde(rename = "MILLIS")]
    Millis,
}

/// Reference to a long-running operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

/// A named group of columns within a table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnFamily {
    /// Full resource name: `{table}/columnFamilies/{id}`
    #[serde(default)]
    pub name: String,
    /// Garbage-collection expression in the service's textual syntax
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gc_expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gc_rule: Option<GcRule>,
}

/// Rule deciding which cells of a column family are garbage collected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GcRule {
    /// Keep at most this many versions of each cell
    MaxNumVersions(i32),
    /// Drop cells older than this
    MaxAge(#[serde(with = "proto_duration")] Duration),
    /// Collect cells matching every nested rule
    Intersection { rules: Vec<GcRule> },
    /// Collect cells matching any nested rule
    Union { rules: Vec<GcRule> },
}

/// Durations in their JSON wire form: decimal seconds with an `s` suffix,
/// e.g. `"3600s"` or `"1.500s"`.
pub(crate) mod proto_duration {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(d))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| D::Error::custom(format!("invalid duration '{s}'")))
    }

    pub fn format(d: &Duration) -> String {
        if d.subsec_nanos() == 0 {
            format!("{}s", d.as_secs())
        } else {
            let nanos = format!("{:09}", d.subsec_nanos());
            format!("{}.{}s", d.as_secs(), nanos.trim_end_matches('0'))
        }
    }

    pub fn parse(s: &str) -> Option<Duration> {
        let digits = s.strip_suffix('s')?;
        let (secs, frac) = match digits.split_once('.') {
            Some((secs, frac)) => (secs, frac),
            None => (digits, ""),
        };
        if secs.is_empty() || frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let secs: u64 = secs.parse().ok()?;
        let nanos: u32 = if frac.is_empty() {
            0
        } else {
            format!("{frac:0<9}").parse().ok()?
        };
        Some(Duration::new(secs, nanos))
    }
}
