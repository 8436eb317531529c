// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! ORB collaborator seams.
//!
//! The transport runtime, remote objects and the naming context are external
//! collaborators. This module defines the traits they are consumed through,
//! plus the fault taxonomy they raise. Nothing here opens a socket; a real
//! ORB binding (or an in-process fake in tests) supplies the implementations.

mod retry;

pub use retry::{RetryDecision, RetryPolicy};

use std::fmt;
use std::sync::Arc;

use crate::recode::CorbaValue;

/// Opaque remote-object handle. Owned by the caller once resolved.
pub type ObjectRef = Arc<dyn RemoteObject>;

/// A live remote object exposed by the ORB.
///
/// Implementations perform the actual wire exchange; this crate only decides
/// what is sent (encoded values) and how faults are classified.
pub trait RemoteObject: fmt::Debug + Send + Sync {
    /// Repository id of the object's most derived interface,
    /// e.g. `"IDL:ccReg/Logger:1.0"`.
    fn repository_id(&self) -> &str;

    /// Checked interface test, the narrowing primitive.
    fn is_a(&self, repository_id: &str) -> bool {
        self.repository_id() == repository_id
    }

    /// Resolve the call target for `method`.
    ///
    /// Fails with [`RemoteFault::UnknownMethod`] when the object does not
    /// expose the operation. The call wrapper consults this before encoding
    /// any argument.
    fn lookup(&self, method: &str) -> Result<(), RemoteFault>;

    /// Invoke `method` with already-encoded (wire-form) arguments.
    ///
    /// Blocks until the transport returns or raises. Transient-fault retries
    /// happen below this call, driven by the [`RetryPolicy`] the transport
    /// was given.
    fn invoke(&self, method: &str, args: &[CorbaValue]) -> Result<CorbaValue, RemoteFault>;

    /// Narrow this reference to the naming-context interface.
    ///
    /// Returns `None` for objects that are not a naming context. Plays the
    /// role of `_narrow(CosNaming::NamingContext)`.
    fn as_naming_context(self: Arc<Self>) -> Option<Arc<dyn NamingContext>> {
        None
    }
}

/// One component of a naming-service path: an (id, kind) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameComponent {
    pub id: String,
    pub kind: String,
}

impl NameComponent {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }

    /// Outer path component: a context, kind `"context"`.
    pub fn context(id: impl Into<String>) -> Self {
        Self::new(id, "context")
    }

    /// Inner path component: an object, kind `"Object"`.
    pub fn object(id: impl Into<String>) -> Self {
        Self::new(id, "Object")
    }
}

/// The naming-service directory interface.
pub trait NamingContext: fmt::Debug + Send + Sync {
    /// Resolve a symbolic path to an object reference.
    fn resolve(&self, path: &[NameComponent]) -> Result<ObjectRef, RemoteFault>;
}

/// The ORB runtime bootstrap interface.
pub trait OrbRuntime: Send + Sync {
    /// Initialize the ORB with the given argument list (codeset negotiation
    /// flags and the like). Called once per connection attempt.
    fn orb_init(&self, args: &[&str]) -> Result<(), RemoteFault>;

    /// Resolve a `corbaname::host:port` style URL to an object reference.
    ///
    /// The runtime consults `retry` every time a transient fault interrupts
    /// an exchange on the resulting connection: it either replays the
    /// exchange transparently or lets the fault propagate.
    fn string_to_object(&self, url: &str, retry: RetryPolicy) -> Result<ObjectRef, RemoteFault>;
}

/// Fault taxonomy raised by the ORB collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFault {
    /// Designated server-side failure category (the IDL internal server
    /// error). Logged at error severity, never retried by this crate.
    InternalServer { message: String },

    /// Any other exception declared in the IDL. Expected control flow for
    /// callers; logged at debug severity.
    Application {
        exception_id: String,
        message: String,
    },

    /// Possibly-retryable communication failure (forwarding race, transport
    /// reset). Subject to the bounded-retry policy before surfacing.
    Transient { message: String },

    /// Any other transport-level system exception.
    System {
        exception_id: String,
        message: String,
    },

    /// The remote object does not expose the requested operation.
    UnknownMethod { method: String },
}

impl RemoteFault {
    /// Create a transient fault with the given message.
    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient {
            message: message.into(),
        }
    }

    /// Create an internal server error fault.
    pub fn internal_server(message: impl Into<String>) -> Self {
        Self::InternalServer {
            message: message.into(),
        }
    }

    /// Create an application-level fault.
    pub fn application(exception_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Application {
            exception_id: exception_id.into(),
            message: message.into(),
        }
    }

    /// Create a system-level fault.
    pub fn system(exception_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::System {
            exception_id: exception_id.into(),
            message: message.into(),
        }
    }

    /// True for faults the transport may retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }
}

impl fmt::Display for RemoteFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InternalServer { message } => write!(f, "internal server error: {}", message),
            Self::Application {
                exception_id,
                message,
            } => write!(f, "application exception {}: {}", exception_id, message),
            Self::Transient { message } => write!(f, "transient failure: {}", message),
            Self::System {
                exception_id,
                message,
            } => write!(f, "system exception {}: {}", exception_id, message),
            Self::UnknownMethod { method } => {
                write!(f, "remote object has no operation '{}'", method)
            }
        }
    }
}

impl std::error::Error for RemoteFault {}
