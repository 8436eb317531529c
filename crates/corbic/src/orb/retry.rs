// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bounded retry policy for transient transport faults.
//!
//! The policy is a plain value passed to the transport, which consults it
//! each time a transient fault occurs on an in-flight exchange. The counter
//! is owned by the transport and reset per logical retry sequence; this type
//! only answers the retry-or-give-up question.

use super::RemoteFault;

/// Decision returned by [`RetryPolicy::decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Replay the interrupted exchange.
    Retry,
    /// Let the fault propagate to the caller.
    GiveUp,
}

/// Bounded retry budget: retry while `attempt < budget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    budget: u32,
}

impl RetryPolicy {
    /// Default budget for TRANSIENT faults (forwarded-location races).
    pub const TRANSIENT: Self = Self::new(10);

    /// Default budget for communication failures.
    pub const COMM_FAILURE: Self = Self::new(20);

    /// Default budget for other system exceptions.
    pub const SYSTEM: Self = Self::new(5);

    pub const fn new(budget: u32) -> Self {
        Self { budget }
    }

    pub const fn budget(&self) -> u32 {
        self.budget
    }

    /// True while `attempt` is still within the budget. A budget of zero
    /// never retries.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.budget
    }

    /// Full decision hook for the transport: logs the consultation and maps
    /// the attempt count onto a [`RetryDecision`].
    pub fn decide(&self, attempt: u32, fault: &RemoteFault) -> RetryDecision {
        log::debug!(
            "[retry] handling fault '{}' - {} attempts so far",
            fault,
            attempt
        );
        if self.should_retry(attempt) {
            RetryDecision::Retry
        } else {
            RetryDecision::GiveUp
        }
    }
}
