//! Status notification port
//!
//! Advisory progress events emitted while a generation request walks the
//! provider cascade. A UI may render them; the pipeline never waits on them.

use devtype_domain::FALLBACK_LABEL;
use serde::Serialize;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Cascade stage an event reports on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "kebab-case")]
pub enum StatusPhase {
    Probing,
    ProbeResult { reachable: bool },
    Requesting,
    Parsing,
    AttemptFailed,
    Succeeded,
    FallingBack,
}

/// `{provider, phase, detail?}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEvent {
    pub provider: String,
    #[serde(flatten)]
    pub phase: StatusPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StatusEvent {
    pub fn new(provider: impl Into<String>, phase: StatusPhase) -> Self {
        Self {
            provider: provider.into(),
            phase,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn probing(provider: &str) -> Self {
        Self::new(provider, StatusPhase::Probing)
    }

    pub fn probe_result(provider: &str, reachable: bool) -> Self {
        Self::new(provider, StatusPhase::ProbeResult { reachable })
    }

    pub fn requesting(provider: &str) -> Self {
        Self::new(provider, StatusPhase::Requesting)
    }

    pub fn parsing(provider: &str) -> Self {
        Self::new(provider, StatusPhase::Parsing)
    }

    pub fn attempt_failed(provider: &str, detail: impl Into<String>) -> Self {
        Self::new(provider, StatusPhase::AttemptFailed).with_detail(detail)
    }

    pub fn succeeded(provider: &str) -> Self {
        Self::new(provider, StatusPhase::Succeeded)
    }

    pub fn falling_back() -> Self {
        Self::new(FALLBACK_LABEL, StatusPhase::FallingBack)
    }
}

/// Receiver of cascade status events
pub trait StatusNotifier: Send + Sync {
    fn notify(&self, event: StatusEvent);
}

/// No-op notifier for when status reporting is not needed
pub struct NoStatus;

impl StatusNotifier for NoStatus {
    fn notify(&self, _event: StatusEvent) {}
}

/// Forwards events into an unbounded channel for a UI to consume
#[derive(Clone)]
pub struct ChannelStatusNotifier {
    sender: mpsc::UnboundedSender<StatusEvent>,
}

impl ChannelStatusNotifier {
    pub fn new(sender: mpsc::UnboundedSender<StatusEvent>) -> Self {
        Self { sender }
    }

    /// Create a notifier together with the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<StatusEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl StatusNotifier for ChannelStatusNotifier {
    fn notify(&self, event: StatusEvent) {
        // A dropped receiver just means nobody is listening
        let _ = self.sender.send(event);
    }
}

/// Drops every event once its token is cancelled
pub struct CancellationGuard<'a> {
    inner: &'a dyn StatusNotifier,
    token: CancellationToken,
}

impl<'a> CancellationGuard<'a> {
    pub fn new(inner: &'a dyn StatusNotifier, token: CancellationToken) -> Self {
        Self { inner, token }
    }
}

impl StatusNotifier for CancellationGuard<'_> {
    fn notify(&self, event: StatusEvent) {
        if !self.token.is_cancelled() {
            self.inner.notify(event);
        }
    }
}
