// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Naming service client.
//!
//! Resolves symbolic service names to remote-object handles over a lazily
//! established connection to the naming service, with a bounded retry
//! policy for transient transport faults. The connection (the naming
//! context) is cached for the client's lifetime; resolved objects are not.

use std::fmt;
use std::sync::Arc;

use crate::orb::{NameComponent, NamingContext, ObjectRef, OrbRuntime, RemoteFault, RetryPolicy};

/// Errors raised by connection and resolution.
#[derive(Debug)]
pub enum NamingError {
    /// ORB initialization or root-context resolution failed. A transient
    /// fault lands here once the retry budget is exhausted.
    Connect(RemoteFault),

    /// The naming service could not resolve the requested path.
    Resolve(RemoteFault),

    /// The resolved reference is not of the expected remote type.
    NarrowFailed { name: String, expected: String },

    /// Internal state error: no live connection where one was required.
    NotConnected,
}

impl fmt::Display for NamingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect(fault) => write!(f, "connection failed: {}", fault),
            Self::Resolve(fault) => write!(f, "resolution failed: {}", fault),
            Self::NarrowFailed { name, expected } => {
                write!(f, "can not narrow '{}' to {}", name, expected)
            }
            Self::NotConnected => write!(f, "not connected to the naming service"),
        }
    }
}

impl std::error::Error for NamingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connect(fault) | Self::Resolve(fault) => Some(fault),
            _ => None,
        }
    }
}

/// Connection state. There is no closed state: once connected, the client
/// keeps its context until the process ends or the client is reassigned.
enum ClientState {
    Disconnected,
    Connected { context: Arc<dyn NamingContext> },
}

/// Naming service client.
///
/// Owns a lazily-established connection to the naming service and resolves
/// two-level symbolic names (`[(context, "context"), (name, "Object")]`) to
/// remote-object handles.
///
/// Concurrent first connection is not guarded here; serialize `connect` /
/// `get_object` externally when sharing a client across threads.
pub struct NameServiceClient {
    runtime: Arc<dyn OrbRuntime>,
    host_port: String,
    context_name: String,
    retry: RetryPolicy,
    state: ClientState,
}

impl NameServiceClient {
    /// ORB initialization arguments: native character set negotiation.
    pub const ORB_ARGS: [&'static str; 2] = ["-ORBnativeCharCodeSet", "UTF-8"];

    /// Default transient-fault retry budget.
    pub const DEFAULT_RETRIES: u32 = 5;

    /// Create a client with the default retry budget.
    ///
    /// `host_port` is `"hostname:port"` (or just a hostname for the default
    /// port); `context_name` is the outer naming context, e.g. `"fred"`.
    pub fn new(
        runtime: Arc<dyn OrbRuntime>,
        host_port: impl Into<String>,
        context_name: impl Into<String>,
    ) -> Self {
        Self::with_retry(
            runtime,
            host_port,
            context_name,
            RetryPolicy::new(Self::DEFAULT_RETRIES),
        )
    }

    /// Create a client with a custom retry policy.
    pub fn with_retry(
        runtime: Arc<dyn OrbRuntime>,
        host_port: impl Into<String>,
        context_name: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            runtime,
            host_port: host_port.into(),
            context_name: context_name.into(),
            retry,
            state: ClientState::Disconnected,
        }
    }

    pub fn host_port(&self) -> &str {
        &self.host_port
    }

    pub fn context_name(&self) -> &str {
        &self.context_name
    }

    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, ClientState::Connected { .. })
    }

    /// Connect to the naming service: initialize the ORB, resolve the
    /// `corbaname::` URL (transient faults gated by this client's retry
    /// policy) and narrow the root reference to the naming context.
    ///
    /// Callers normally rely on [`get_object`] to invoke this lazily.
    ///
    /// [`get_object`]: Self::get_object
    pub fn connect(&mut self) -> Result<(), NamingError> {
        let url = format!("corbaname::{}", self.host_port);
        log::debug!("[naming] connecting to {}", url);

        self.runtime
            .orb_init(&Self::ORB_ARGS)
            .map_err(NamingError::Connect)?;
        let root = self
            .runtime
            .string_to_object(&url, self.retry)
            .map_err(NamingError::Connect)?;
        let context = root
            .as_naming_context()
            .ok_or_else(|| NamingError::NarrowFailed {
                name: self.host_port.clone(),
                expected: "naming context".to_string(),
            })?;

        self.state = ClientState::Connected { context };
        log::debug!("[naming] connected to {}", self.host_port);
        Ok(())
    }

    /// Resolve `name` under the configured context and narrow the result to
    /// `repository_id`. Connects first when disconnected.
    pub fn get_object(
        &mut self,
        name: &str,
        repository_id: &str,
    ) -> Result<ObjectRef, NamingError> {
        let context = self.context()?;
        let path = [
            NameComponent::context(&self.context_name),
            NameComponent::object(name),
        ];
        let object = context.resolve(&path).map_err(NamingError::Resolve)?;
        if !object.is_a(repository_id) {
            return Err(NamingError::NarrowFailed {
                name: name.to_string(),
                expected: repository_id.to_string(),
            });
        }
        Ok(object)
    }

    fn context(&mut self) -> Result<Arc<dyn NamingContext>, NamingError> {
        if let ClientState::Connected { context } = &self.state {
            return Ok(context.clone());
        }
        self.connect()?;
        match &self.state {
            ClientState::Connected { context } => Ok(context.clone()),
            ClientState::Disconnected => Err(NamingError::NotConnected),
        }
    }
}
