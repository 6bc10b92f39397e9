//! Loading-gate state machine.
//!
//! The loading view may only be entered while a plan request is actually
//! in flight. Starting a request mints a single-use token; the loading
//! view presents the token it was handed, and a mismatch is treated as a
//! forged navigation and redirected home. The view advances to the plan
//! only once the result has arrived *and* a per-kind minimum display time
//! has passed, after which the token is consumed so a stale loading
//! session cannot be replayed.
//!
//! The token is a navigation-intent guard, not an authorization
//! mechanism.

use std::time::Duration;

use uuid::Uuid;

/// Minimum time the loading view stays up for a fresh generation.
pub const GENERATE_MIN_DISPLAY: Duration = Duration::from_millis(7500);

/// Minimum time the loading view stays up for a regeneration.
pub const REGENERATE_MIN_DISPLAY: Duration = Duration::from_millis(3000);

/// The two kinds of plan request the gate distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// First plan for the current task list
    Generate,

    /// A fresh variation of the current plan
    Regenerate,
}

impl RequestKind {
    /// Minimum loading-view display time for this kind of request.
    pub fn min_display(&self) -> Duration {
        match self {
            RequestKind::Generate => GENERATE_MIN_DISPLAY,
            RequestKind::Regenerate => REGENERATE_MIN_DISPLAY,
        }
    }

    /// Convert to display string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Generate => "generate",
            RequestKind::Regenerate => "regenerate",
        }
    }
}

/// Gate lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// No request in flight; the loading view is off limits
    #[default]
    Idle,

    /// A request is in flight and a token is outstanding
    AwaitingResult,

    /// The token was consumed and the view has moved on
    Settled,
}

/// The capability handed to the loading view when a request starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePass {
    /// Single-use token matched against the gate's stored token
    pub token: String,

    /// Which kind of request minted this pass
    pub kind: RequestKind,
}

/// What the loading view should do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Keep showing the loading view
    Hold,

    /// Both conditions hold; move to the plan view and settle
    Advance,

    /// Invalid or forged navigation; go home, silently
    Redirect,
}

/// State machine guarding entry to and exit from the loading view.
#[derive(Debug, Default)]
pub struct LoadingGate {
    token: Option<String>,
    state: GateState,
}

impl LoadingGate {
    /// Creates a gate in the Idle state with no outstanding token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Start a request: mint a fresh token and hand out the pass.
    ///
    /// Any previously outstanding token is invalidated, so only the most
    /// recently started request can drive the loading view.
    pub fn begin(&mut self, kind: RequestKind) -> GatePass {
        let token = Uuid::new_v4().to_string();
        self.token = Some(token.clone());
        self.state = GateState::AwaitingResult;
        GatePass { token, kind }
    }

    /// Whether a presented token matches the outstanding one.
    pub fn admit(&self, presented: &str) -> bool {
        self.token.as_deref() == Some(presented)
    }

    /// Decide what the loading view should do given the current facts.
    ///
    /// Advancing requires both independent conditions: the plan must have
    /// arrived, and the minimum display time for the pass's request kind
    /// must have elapsed.
    pub fn evaluate(&self, pass: &GatePass, plan_ready: bool, elapsed: Duration) -> GateDecision {
        if !self.admit(&pass.token) {
            return GateDecision::Redirect;
        }

        if plan_ready && elapsed >= pass.kind.min_display() {
            GateDecision::Advance
        } else {
            GateDecision::Hold
        }
    }

    /// Consume the token after advancing.
    ///
    /// Returns false when the pass no longer matches (already consumed or
    /// superseded), in which case nothing changes.
    pub fn settle(&mut self, pass: &GatePass) -> bool {
        if !self.admit(&pass.token) {
            return false;
        }
        self.token = None;
        self.state = GateState::Settled;
        true
    }
}
