//! Loading view driving the plan-request flow.
//!
//! This is the one place with real temporal ordering: the view advances
//! to the plan only when the response has arrived *and* the gate's
//! minimum display time has elapsed, and the gate token is consumed
//! exactly once on the way out. Responses are fenced through the session
//! sequence number, so a stale response never lands.

use std::time::{Duration, Instant};

use anyhow::Result;
use fehrist_core::{
    GateDecision, GatePass, LoadingGate, Plan, PlanClient, RequestKind, Session, StoreError, Task,
};
use log::{debug, info};
use tokio::task::JoinHandle;

use crate::renderer::TerminalRenderer;

/// Phrase rotation interval while waiting.
const PHRASE_TICK: Duration = Duration::from_millis(2500);

const GENERATE_PHRASES: [&str; 3] = [
    "Analyzing your tasks…",
    "Optimizing your day…",
    "Creating your plan…",
];

const REGENERATE_PHRASES: [&str; 1] = ["Getting a new plan for you…"];

fn phrases_for(kind: RequestKind) -> &'static [&'static str] {
    match kind {
        RequestKind::Generate => &GENERATE_PHRASES,
        RequestKind::Regenerate => &REGENERATE_PHRASES,
    }
}

/// Outcome of one loading-view session.
enum LoadingOutcome {
    /// The pass did not admit; fall back to the home view silently
    Redirected,

    /// The request finished and the view has settled
    Finished(fehrist_core::Result<Plan>),
}

/// Run the full plan-request flow: begin the session request, mint the
/// gate pass, fire the network call, and drive the loading view until it
/// settles.
///
/// Returns the applied plan, or `None` when the navigation was redirected,
/// the response went stale, or the request failed (the failure message is
/// then in the session's `plan_error`).
pub async fn run_plan_flow(
    renderer: &TerminalRenderer,
    session: &mut Session,
    gate: &mut LoadingGate,
    client: &PlanClient,
    tasks: Vec<Task>,
    kind: RequestKind,
    randomness: f64,
) -> Result<Option<Plan>> {
    let seq = session.begin_request(kind);
    let pass = gate.begin(kind);
    info!("Plan {} request {seq} started", kind.as_str());

    let request_client = client.clone();
    let request: JoinHandle<fehrist_core::Result<Plan>> = tokio::spawn(async move {
        match kind {
            RequestKind::Generate => request_client.generate(&tasks).await,
            RequestKind::Regenerate => request_client.regenerate(&tasks, randomness).await,
        }
    });

    let outcome = loading_view(renderer, gate, &pass, request).await?;
    session.finish_request(kind);

    match outcome {
        LoadingOutcome::Redirected => Ok(None),
        LoadingOutcome::Finished(Ok(plan)) => {
            if session.apply_plan(seq, plan) {
                Ok(session.plan().cloned())
            } else {
                debug!("Discarded stale response for request {seq}");
                Ok(None)
            }
        }
        LoadingOutcome::Finished(Err(err)) => {
            session.record_error(seq, err.to_string());
            Ok(None)
        }
    }
}

/// Drive the loading view until the gate lets it advance.
///
/// Cycles the waiting phrases on a fixed tick (generation only; the
/// regenerate phrase does not rotate) and re-evaluates the gate after
/// every event.
async fn loading_view(
    renderer: &TerminalRenderer,
    gate: &mut LoadingGate,
    pass: &GatePass,
    request: JoinHandle<fehrist_core::Result<Plan>>,
) -> Result<LoadingOutcome> {
    // Direct-entry check before anything renders
    if !gate.admit(&pass.token) {
        return Ok(LoadingOutcome::Redirected);
    }

    let phrases = phrases_for(pass.kind);
    let started = Instant::now();
    let mut index = 0;
    renderer.render(phrases[index])?;

    let mut request = request;
    let mut outcome: Option<fehrist_core::Result<Plan>> = None;

    loop {
        match &outcome {
            Some(Ok(_)) => match gate.evaluate(pass, true, started.elapsed()) {
                GateDecision::Redirect => return Ok(LoadingOutcome::Redirected),
                GateDecision::Advance => {
                    gate.settle(pass);
                    break;
                }
                GateDecision::Hold => {}
            },
            Some(Err(_)) => {
                // A failed request has nothing left to wait for
                gate.settle(pass);
                break;
            }
            None => {
                if gate.evaluate(pass, false, started.elapsed()) == GateDecision::Redirect {
                    return Ok(LoadingOutcome::Redirected);
                }
            }
        }

        // Once the data is in, only the remaining display time matters
        let tick = if outcome.is_some() {
            pass.kind
                .min_display()
                .saturating_sub(started.elapsed())
                .min(PHRASE_TICK)
        } else {
            PHRASE_TICK
        };

        tokio::select! {
            joined = &mut request, if outcome.is_none() => {
                outcome = Some(flatten_join(joined));
            }
            _ = tokio::time::sleep(tick) => {
                if outcome.is_none() && phrases.len() > 1 {
                    index = (index + 1) % phrases.len();
                    renderer.render(phrases[index])?;
                }
            }
        }
    }

    match outcome {
        Some(result) => Ok(LoadingOutcome::Finished(result)),
        None => Ok(LoadingOutcome::Redirected),
    }
}

fn flatten_join(
    joined: std::result::Result<fehrist_core::Result<Plan>, tokio::task::JoinError>,
) -> fehrist_core::Result<Plan> {
    joined
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })
        .and_then(|r| r)
}
