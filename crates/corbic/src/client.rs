// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Remote call wrapper.
//!
//! Wraps an [`ObjectRef`] together with a [`Recoder`]: arguments are encoded
//! on the way out, the result is decoded on the way in, and every fault is
//! classified for logging and re-raised unchanged. Each call is tagged with
//! a short correlation id so its log lines can be grouped.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::orb::{ObjectRef, RemoteFault};
use crate::recode::{CorbaValue, RecodeError, Recoder};

/// Maximum length of a value representation in log lines.
pub const MAX_REPR_LEN: usize = 2048;

const TRUNCATION_MARKER: &str = " [truncated]...";

const TAG_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const TAG_LEN: usize = 4;

static TAG_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Debug representation limited to `max_length` characters, with a marker
/// appended when truncated. Observability only.
pub fn sane_repr(value: &dyn fmt::Debug, max_length: usize) -> String {
    let repr = format!("{:?}", value);
    if repr.chars().count() > max_length {
        let truncated: String = repr.chars().take(max_length).collect();
        format!("{}{}", truncated, TRUNCATION_MARKER)
    } else {
        repr
    }
}

/// Generate a 4-char correlation tag to mark matching log lines.
///
/// Entropy comes from the clock, the thread id and a process-wide counter
/// (no rand dependency needed for an advisory tag).
fn correlation_tag() -> String {
    use std::hash::{Hash, Hasher};

    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    now.as_nanos().hash(&mut hasher);
    std::thread::current().id().hash(&mut hasher);
    TAG_COUNTER.fetch_add(1, Ordering::Relaxed).hash(&mut hasher);

    let mut state = hasher.finish();
    let mut tag = String::with_capacity(TAG_LEN);
    for _ in 0..TAG_LEN {
        let index = (state % TAG_CHARS.len() as u64) as usize;
        tag.push(TAG_CHARS[index] as char);
        state /= TAG_CHARS.len() as u64;
    }
    tag
}

/// Errors surfacing from a wrapped remote call.
#[derive(Debug)]
pub enum ClientError {
    /// An argument or the result failed recoding.
    Recode(RecodeError),
    /// The remote call raised; the fault is propagated unchanged.
    Fault(RemoteFault),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recode(e) => write!(f, "recoding error: {}", e),
            Self::Fault(e) => write!(f, "remote fault: {}", e),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Recode(e) => Some(e),
            Self::Fault(e) => Some(e),
        }
    }
}

impl From<RecodeError> for ClientError {
    fn from(e: RecodeError) -> Self {
        Self::Recode(e)
    }
}

impl From<RemoteFault> for ClientError {
    fn from(e: RemoteFault) -> Self {
        Self::Fault(e)
    }
}

/// Wrapper over a remote object: recodes arguments and results around every
/// invocation.
pub struct CorbaClient {
    object: ObjectRef,
    recoder: Arc<Recoder>,
}

impl CorbaClient {
    pub fn new(object: ObjectRef, recoder: Arc<Recoder>) -> Self {
        Self { object, recoder }
    }

    /// The wrapped remote object.
    pub fn object(&self) -> &ObjectRef {
        &self.object
    }

    /// Invoke `method` with positional arguments (the transport has no
    /// concept of named arguments).
    ///
    /// Arguments are encoded to wire form, the result is decoded back to
    /// native form. Faults are logged under the call's correlation tag --
    /// internal server errors and transport faults at error severity,
    /// declared application exceptions at debug severity -- and re-raised
    /// unchanged.
    pub fn call(&self, method: &str, args: Vec<CorbaValue>) -> Result<CorbaValue, ClientError> {
        let call_id = correlation_tag();
        log::debug!(
            "[{}] {}({})",
            call_id,
            method,
            sane_repr(&args, MAX_REPR_LEN)
        );

        // Target lookup happens before any argument is encoded.
        self.object.lookup(method).map_err(ClientError::Fault)?;

        let mut encoded = Vec::with_capacity(args.len());
        for arg in args {
            encoded.push(self.recoder.encode(arg)?);
        }

        match self.object.invoke(method, &encoded) {
            Ok(result) => {
                log::debug!(
                    "[{}] {} returned {}",
                    call_id,
                    method,
                    sane_repr(&result, MAX_REPR_LEN)
                );
                Ok(self.recoder.decode(result)?)
            }
            Err(fault) => {
                match &fault {
                    RemoteFault::InternalServer { .. } => {
                        log::error!("[{}] {} failed with {}", call_id, method, fault);
                    }
                    RemoteFault::Application { .. } => {
                        log::debug!("[{}] {} failed with {}", call_id, method, fault);
                    }
                    _ => {
                        log::error!("[{}] {} failed with {}", call_id, method, fault);
                    }
                }
                Err(ClientError::Fault(fault))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orb::{NamingContext, RemoteObject};
    use crate::recode::Coding;
    use std::sync::Mutex;

    /// Remote object fake: fixed method table, canned result, captured args.
    #[derive(Debug)]
    struct FakeObject {
        methods: Vec<&'static str>,
        result: Result<CorbaValue, RemoteFault>,
        invoked: Mutex<Option<(String, Vec<CorbaValue>)>>,
    }

    impl FakeObject {
        fn returning(result: Result<CorbaValue, RemoteFault>) -> Arc<Self> {
            Arc::new(Self {
                methods: vec!["greet"],
                result,
                invoked: Mutex::new(None),
            })
        }

        fn last_invocation(&self) -> Option<(String, Vec<CorbaValue>)> {
            self.invoked.lock().unwrap().clone()
        }
    }

    impl RemoteObject for FakeObject {
        fn repository_id(&self) -> &str {
            "IDL:test/Greeter:1.0"
        }

        fn lookup(&self, method: &str) -> Result<(), RemoteFault> {
            if self.methods.contains(&method) {
                Ok(())
            } else {
                Err(RemoteFault::UnknownMethod {
                    method: method.to_string(),
                })
            }
        }

        fn invoke(&self, method: &str, args: &[CorbaValue]) -> Result<CorbaValue, RemoteFault> {
            *self.invoked.lock().unwrap() = Some((method.to_string(), args.to_vec()));
            self.result.clone()
        }

        fn as_naming_context(self: Arc<Self>) -> Option<Arc<dyn NamingContext>> {
            None
        }
    }

    fn utf8_recoder() -> Arc<Recoder> {
        Arc::new(Recoder::new(Coding::Utf8))
    }

    #[test]
    fn call_encodes_args_and_decodes_result() {
        let object = FakeObject::returning(Ok(CorbaValue::Binary(b"caf\xc3\xa9".to_vec())));
        let client = CorbaClient::new(object.clone(), utf8_recoder());

        let result = client
            .call("greet", vec![CorbaValue::Text("café".to_string())])
            .unwrap();
        assert_eq!(result, CorbaValue::Text("café".to_string()));

        let (method, args) = object.last_invocation().unwrap();
        assert_eq!(method, "greet");
        assert_eq!(args, vec![CorbaValue::Binary(b"caf\xc3\xa9".to_vec())]);
    }

    #[test]
    fn unknown_method_surfaces_before_encoding() {
        let object = FakeObject::returning(Ok(CorbaValue::Null));
        let client = CorbaClient::new(object.clone(), utf8_recoder());

        // The argument is un-encodable; a lookup failure must win anyway.
        let bad_ref: ObjectRef = object.clone();
        let err = client
            .call("missing", vec![CorbaValue::Object(bad_ref)])
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Fault(RemoteFault::UnknownMethod { ref method }) if method == "missing"
        ));
        assert!(object.last_invocation().is_none());
    }

    #[test]
    fn encode_failure_stops_before_invoke() {
        let object = FakeObject::returning(Ok(CorbaValue::Null));
        let recoder = Arc::new(Recoder::new(Coding::Ascii));
        let client = CorbaClient::new(object.clone(), recoder);

        let err = client
            .call("greet", vec![CorbaValue::Text("č".to_string())])
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Recode(RecodeError::EncodeFailed { .. })
        ));
        assert!(object.last_invocation().is_none());
    }

    #[test]
    fn faults_propagate_unchanged() {
        let faults = [
            RemoteFault::internal_server("db down"),
            RemoteFault::application("IDL:test/NotFound:1.0", "no such handle"),
            RemoteFault::transient("connection reset"),
            RemoteFault::system("IDL:omg.org/CORBA/COMM_FAILURE:1.0", "broken pipe"),
        ];
        for fault in faults {
            let object = FakeObject::returning(Err(fault.clone()));
            let client = CorbaClient::new(object, utf8_recoder());
            let err = client.call("greet", Vec::new()).unwrap_err();
            match err {
                ClientError::Fault(raised) => assert_eq!(raised, fault),
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn sane_repr_truncates_at_budget() {
        let long = "x".repeat(100);
        let repr = sane_repr(&long, 10);
        assert_eq!(repr.chars().count(), 10 + TRUNCATION_MARKER.chars().count());
        assert!(repr.ends_with(TRUNCATION_MARKER));

        let short = "short";
        assert_eq!(sane_repr(&short, 100), format!("{:?}", short));
    }

    #[test]
    fn correlation_tags_are_short_and_alphanumeric() {
        for _ in 0..32 {
            let tag = correlation_tag();
            assert_eq!(tag.len(), TAG_LEN);
            assert!(tag.bytes().all(|b| b.is_ascii_alphanumeric()));
        }
    }
}
