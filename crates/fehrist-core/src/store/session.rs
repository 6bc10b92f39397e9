//! Transient per-process session state.
//!
//! The session owns everything that must *not* survive a restart: the
//! current plan, the in-flight request flags, the last plan error, and
//! the request sequence counter. It is an owned value passed into the
//! view layer, never a process-wide singleton.

use crate::gate::RequestKind;
use crate::models::Plan;

/// Plan state and request bookkeeping for one process lifetime.
///
/// Overlapping plan requests are fenced with sequence numbers: each
/// request takes a fresh number from [`begin_request`], and a response is
/// applied only if its number is still the latest issued. A slow early
/// response can therefore never overwrite the result of a later request.
///
/// [`begin_request`]: Session::begin_request
#[derive(Debug, Default)]
pub struct Session {
    plan: Option<Plan>,
    is_generating: bool,
    is_regenerating: bool,
    plan_error: Option<String>,
    latest_seq: u64,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current plan, if one has been applied.
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Whether a generate request is in flight.
    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// Whether a regenerate request is in flight.
    pub fn is_regenerating(&self) -> bool {
        self.is_regenerating
    }

    /// The last recorded plan error, if any.
    pub fn plan_error(&self) -> Option<&str> {
        self.plan_error.as_deref()
    }

    /// Starts a request: issues the next sequence number, raises the
    /// matching in-flight flag, and clears any stale error.
    pub fn begin_request(&mut self, kind: RequestKind) -> u64 {
        self.latest_seq += 1;
        match kind {
            RequestKind::Generate => self.is_generating = true,
            RequestKind::Regenerate => self.is_regenerating = true,
        }
        self.plan_error = None;
        self.latest_seq
    }

    /// Lowers the in-flight flag for a finished request.
    pub fn finish_request(&mut self, kind: RequestKind) {
        match kind {
            RequestKind::Generate => self.is_generating = false,
            RequestKind::Regenerate => self.is_regenerating = false,
        }
    }

    /// Whether the given sequence number is still the latest issued.
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Installs a plan if its request is still the latest.
    ///
    /// Returns false (and changes nothing) for a stale response.
    pub fn apply_plan(&mut self, seq: u64, plan: Plan) -> bool {
        if !self.is_latest(seq) {
            return false;
        }
        self.plan = Some(plan);
        true
    }

    /// Records a failure if its request is still the latest.
    ///
    /// Returns false (and changes nothing) for a stale response.
    pub fn record_error(&mut self, seq: u64, message: impl Into<String>) -> bool {
        if !self.is_latest(seq) {
            return false;
        }
        self.plan_error = Some(message.into());
        true
    }

    /// Replaces the current plan wholesale, outside any request flow.
    pub fn set_plan(&mut self, plan: Plan) {
        self.plan = Some(plan);
    }

    /// Clears the current plan.
    pub fn clear_plan(&mut self) {
        self.plan = None;
    }

    /// Clears the last plan error.
    pub fn clear_plan_error(&mut self) {
        self.plan_error = None;
    }
}
