//! Value objects for Body Teardown

use serde::{Deserialize, Serialize};
use shared_types::{BodyId, ObjectHandle};
use std::fmt;

/// Structural tie between a body and something removed with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialLink {
    /// Another graph node whose removal cascades from this one
    Body(BodyId),
    /// An auxiliary engine object deactivated with this body
    Object(ObjectHandle),
}

/// Per-body state during a teardown walk.
///
/// `Pending -> Visiting -> Done`; `Rejected` guards re-entry on a cycle and
/// `Skipped` marks a body that was already inactive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeardownState {
    Pending,
    Visiting,
    Done,
    Rejected,
    Skipped,
}

impl fmt::Display for TeardownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Visiting => "visiting",
            Self::Done => "done",
            Self::Rejected => "rejected",
            Self::Skipped => "skipped",
        };
        f.write_str(s)
    }
}

/// Work that must run on a later tick.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeferredTask {
    /// Destroy the canonical and clone distant proxies registered under `key`
    RemoveDistantProxies { key: String },
}

/// Outcome of one `remove_body` call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeardownReport {
    /// Bodies deactivated, in deactivation order
    pub deactivated: Vec<BodyId>,
    /// Auxiliary objects deactivated
    pub auxiliary: Vec<ObjectHandle>,
    /// Orbiter proxies deactivated
    pub orbiter_proxies: Vec<ObjectHandle>,
    /// Bodies reached a second time in the same walk
    pub cycles: Vec<BodyId>,
    /// Bodies that were already inactive
    pub skipped: Vec<BodyId>,
    /// Tasks handed to the tick scheduler
    pub scheduled: Vec<DeferredTask>,
}

impl TeardownReport {
    /// Final state of `body` in this walk, if it was reached at all.
    pub fn state_of(&self, body: BodyId) -> Option<TeardownState> {
        if self.deactivated.contains(&body) {
            Some(TeardownState::Done)
        } else if self.skipped.contains(&body) {
            Some(TeardownState::Skipped)
        } else if self.cycles.contains(&body) {
            Some(TeardownState::Rejected)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deactivated.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_of_prefers_done() {
        let report = TeardownReport {
            deactivated: vec![BodyId(1)],
            cycles: vec![BodyId(1)],
            skipped: vec![BodyId(2)],
            ..Default::default()
        };
        assert_eq!(report.state_of(BodyId(1)), Some(TeardownState::Done));
        assert_eq!(report.state_of(BodyId(2)), Some(TeardownState::Skipped));
        assert_eq!(report.state_of(BodyId(3)), None);
    }

    #[test]
    fn test_deferred_task_serializes_with_key() {
        let task = DeferredTask::RemoveDistantProxies {
            key: "AshTwin".into(),
        };
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"RemoveDistantProxies":{"key":"AshTwin"}}"#);
    }
}
