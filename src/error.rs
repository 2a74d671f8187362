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

//! Error definitions for table admin operations
//!
//! Every failure falls into one of three categories:
//!
//! - [`Error::TransportConstruction`]: the channel could not be built. Fatal to
//!   construction; fix the configuration and try again.
//! - [`Error::ChannelClosed`]: a call was attempted after the channel was closed.
//!   This is a lifecycle bug in the caller and is never worth retrying.
//! - [`Error::CalledFromAsyncContext`]: a blocking call was made from inside an
//!   async task that cannot be blocked. Another caller-side bug.
//! - [`Error::RemoteCall`]: the remote call failed. Carries the remote [`Status`]
//!   verbatim, including transport failures such as `unavailable` or
//!   `deadline_exceeded`.
//! - [`Error::Codec`]: a message could not be encoded or decoded locally. No
//!   remote status is involved.

use crate::channel::MethodDescriptor;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status codes reported by the remote service.
///
/// Mirrors the canonical gRPC status codes. The wire form is the snake_case
/// name (e.g. `not_found`); parsing is case-insensitive and also accepts the
/// upper-case gRPC spelling (`NOT_FOUND`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Code {
    Ok,
    Cancelled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

const ALL_CODES: &[Code] = &[
    Code::Ok,
    Code::Cancelled,
    Code::Unknown,
    Code::InvalidArgument,
    Code::DeadlineExceeded,
    Code::NotFound,
    Code::AlreadyExists,
    Code::PermissionDenied,
    Code::ResourceExhausted,
    Code::FailedPrecondition,
    Code::Aborted,
    Code::OutOfRange,
    Code::Unimplemented,
    Code::Internal,
    Code::Unavailable,
    Code::DataLoss,
    Code::Unauthenticated,
];

impl Code {
    /// Returns the wire name of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::Ok => "ok",
            Code::Cancelled => "cancelled",
            Code::Unknown => "unknown",
            Code::InvalidArgument => "invalid_argument",
            Code::DeadlineExceeded => "deadline_exceeded",
            Code::NotFound => "not_found",
            Code::AlreadyExists => "already_exists",
            Code::PermissionDenied => "permission_denied",
            Code::ResourceExhausted => "resource_exhausted",
            Code::FailedPrecondition => "failed_precondition",
            Code::Aborted => "aborted",
            Code::OutOfRange => "out_of_range",
            Code::Unimplemented => "unimplemented",
            Code::Internal => "internal",
            Code::Unavailable => "unavailable",
            Code::DataLoss => "data_loss",
            Code::Unauthenticated => "unauthenticated",
        }
    }

    /// Derives a status code from an HTTP status when the response body
    /// carries no usable status.
    pub fn from_http_status(status: http::StatusCode) -> Self {
        match status.as_u16() {
            200..=299 => Code::Ok,
            400 => Code::InvalidArgument,
            401 => Code::Unauthenticated,
            403 => Code::PermissionDenied,
            404 => Code::NotFound,
            409 => Code::AlreadyExists,
            412 => Code::FailedPrecondition,
            429 => Code::ResourceExhausted,
            499 => Code::Cancelled,
            501 => Code::Unimplemented,
            503 => Code::Unavailable,
            504 => Code::DeadlineExceeded,
            500 => Code::Internal,
            _ => Code::Unknown,
        }
    }
}

impl FromStr for Code {
    type Err = std::convert::Infallible;

    /// Unrecognized names map to [`Code::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Ok(ALL_CODES
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .unwrap_or(Code::Unknown))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a remote call as reported by the service (or the transport).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    code: Code,
    message: String,
}

impl Status {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Code::NotFound, message)
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(Code::AlreadyExists, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Code::InvalidArgument, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(Code::Unavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Code::Internal, message)
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A remote call that completed with a non-OK [`Status`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("remote call {method} failed with {status}")]
pub struct RemoteCallError {
    method: MethodDescriptor,
    status: Status,
}

impl RemoteCallError {
    pub fn new(method: MethodDescriptor, status: Status) -> Self {
        Self { method, status }
    }

    /// The method that was being invoked.
    pub fn method(&self) -> &MethodDescriptor {
        &self.method
    }

    /// The status reported for the call.
    pub fn status(&self) -> &Status {
        &self.status
    }
}

/// A message that could not be encoded or decoded on this side of the call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("failed to {direction} message of {method}: {message}")]
pub struct CodecError {
    method: MethodDescriptor,
    direction: CodecDirection,
    message: String,
}

/// Which half of a call failed to (de)serialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodecDirection {
    Encode,
    Decode,
}

impl fmt::Display for CodecDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CodecDirection::Encode => "encode request",
            CodecDirection::Decode => "decode response",
        })
    }
}

impl CodecError {
    pub fn new(method: MethodDescriptor, direction: CodecDirection, message: impl Into<String>) -> Self {
        Self {
            method,
            direction,
            message: message.into(),
        }
    }

    pub fn method(&self) -> &MethodDescriptor {
        &self.method
    }

    pub fn direction(&self) -> CodecDirection {
        self.direction
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Reasons a channel could not be constructed.
#[derive(Debug, Error)]
pub enum TransportConstructionError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("I/O error while loading transport configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TLS configuration: {0}")]
    Tls(#[source] reqwest::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to start execution context: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("execution context must be a multi-thread tokio runtime, got {0}")]
    UnsupportedRuntime(String),
}

/// Error type returned by every operation of this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("transport construction failed: {0}")]
    TransportConstruction(#[from] TransportConstructionError),
    #[error("channel is closed")]
    ChannelClosed,
    #[error("blocking call to {0} made from an async task on a current-thread runtime")]
    CalledFromAsyncContext(MethodDescriptor),
    #[error(transparent)]
    RemoteCall(#[from] RemoteCallError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl Error {
    /// Returns the remote status if this is a [`Error::RemoteCall`]. Local
    /// failures, codec errors included, carry no status.
    pub fn status(&self) -> Option<&Status> {
        match self {
            Error::RemoteCall(e) => Some(e.status()),
            _ => None,
        }
    }

    /// Returns the remote status code if this is a [`Error::RemoteCall`].
    pub fn code(&self) -> Option<Code> {
        self.status().map(Status::code)
    }
}
