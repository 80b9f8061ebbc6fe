//! Provider cascade state machine.
//!
//! The orchestrator walks the registry strictly in order. Every provider is
//! probed, requested and parsed at most once; any failure moves on to the
//! next provider, and running out of providers hands over to the fallback
//! store.
//!
//! ```text
//! Init ─Start─▶ Probe(0)
//! Probe(i) ─Reachable─▶ Request(i) ─Responded─▶ Parse(i) ─Parsed─▶ Success
//!    │                      │                      │
//!    └─Unreachable──────────┴─RequestFailed────────┴─ParseFailed─▶ Probe(i+1) | Fallback
//! Fallback ─FallbackCompleted─▶ Done
//! ```
//!
//! `Success` and `Done` are both successful terminal states.

use crate::core::error::DomainError;

/// Position of a request within the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeState {
    Init,
    Probe(usize),
    Request(usize),
    Parse(usize),
    Success,
    Fallback,
    Done,
}

/// Stage results that drive [`CascadeState::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeEvent {
    Start,
    Reachable,
    Unreachable,
    Responded,
    RequestFailed,
    Parsed,
    ParseFailed,
    FallbackCompleted,
}

impl CascadeState {
    /// Compute the next state.
    ///
    /// Returns [`DomainError::InvalidTransition`] for events that cannot
    /// occur in the current state.
    pub fn advance(self, event: CascadeEvent, provider_count: usize) -> Result<Self, DomainError> {
        use CascadeEvent as E;
        use CascadeState as S;

        let next_provider = |i: usize| {
            if i + 1 < provider_count {
                S::Probe(i + 1)
            } else {
                S::Fallback
            }
        };

        match (self, event) {
            (S::Init, E::Start) if provider_count == 0 => Ok(S::Fallback),
            (S::Init, E::Start) => Ok(S::Probe(0)),
            (S::Probe(i), E::Reachable) => Ok(S::Request(i)),
            (S::Probe(i), E::Unreachable) => Ok(next_provider(i)),
            (S::Request(i), E::Responded) => Ok(S::Parse(i)),
            (S::Request(i), E::RequestFailed) => Ok(next_provider(i)),
            (S::Parse(_), E::Parsed) => Ok(S::Success),
            (S::Parse(i), E::ParseFailed) => Ok(next_provider(i)),
            (S::Fallback, E::FallbackCompleted) => Ok(S::Done),
            (state, event) => Err(DomainError::InvalidTransition {
                state: format!("{:?}", state),
                event: format!("{:?}", event),
            }),
        }
    }

    /// Index of the provider this state is working on, if any
    pub fn provider_index(&self) -> Option<usize> {
        match self {
            CascadeState::Probe(i) | CascadeState::Request(i) | CascadeState::Parse(i) => Some(*i),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CascadeState::Success | CascadeState::Done)
    }
}
