//! # Modal State Module
//!
//! Lifecycle of the single application modal: `Closed -> Open -> Closing -> Closed`.
//!
//! ## Responsibilities:
//! - Holding the observable `ModalState` every renderer subscribes to
//! - Keeping phase and payload consistent (`Closed` <=> no payload)
//! - Owning the one pending close timer and cancelling it whenever a newer
//!   transition supersedes it
//!
//! ## Purpose:
//! Renderers only get a read-only view of the state. `open`, `start_closing`
//! and `close` on `ModalController` are the only ways to change it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use shared::ModalKind;
use yew::virtual_dom::VNode;
use yew::Html;

use super::observable::{Readable, Subscription, Writable};
use crate::services::scheduler::{GlooScheduler, Scheduler};

/// Empty fragments and empty text render nothing, however deeply nested
fn is_blank_view(view: &Html) -> bool {
    match view {
        VNode::VList(children) => children.iter().all(is_blank_view),
        VNode::VText(text) => text.text.is_empty(),
        _ => false,
    }
}

/// Lifecycle stage of the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    /// Exit animation is running; payload is still rendered
    Closing,
}

/// What the modal is showing
#[derive(Debug, Clone, PartialEq)]
pub enum ModalPayload {
    /// A built-in modal mounted by name
    Kind(ModalKind),
    /// A view injected directly by the caller
    Component(Html),
}

impl ModalPayload {
    /// An injected view with nothing in it cannot be opened
    pub fn is_blank(&self) -> bool {
        match self {
            ModalPayload::Kind(_) => false,
            ModalPayload::Component(view) => is_blank_view(view),
        }
    }

    pub fn kind(&self) -> Option<ModalKind> {
        match self {
            ModalPayload::Kind(kind) => Some(*kind),
            ModalPayload::Component(_) => None,
        }
    }
}

impl From<ModalKind> for ModalPayload {
    fn from(kind: ModalKind) -> Self {
        ModalPayload::Kind(kind)
    }
}

impl From<Html> for ModalPayload {
    fn from(view: Html) -> Self {
        ModalPayload::Component(view)
    }
}

impl fmt::Display for ModalPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalPayload::Kind(kind) => write!(f, "{}", kind),
            ModalPayload::Component(_) => write!(f, "custom view"),
        }
    }
}

/// Snapshot observed by renderers. Fields are private so the
/// phase/payload pairing can only come from the constructors below.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalState {
    phase: ModalPhase,
    payload: Option<ModalPayload>,
}

impl ModalState {
    fn opened(payload: ModalPayload) -> Self {
        Self {
            phase: ModalPhase::Open,
            payload: Some(payload),
        }
    }

    fn closing(payload: ModalPayload) -> Self {
        Self {
            phase: ModalPhase::Closing,
            payload: Some(payload),
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn payload(&self) -> Option<&ModalPayload> {
        self.payload.as_ref()
    }

    pub fn kind(&self) -> Option<ModalKind> {
        self.payload.as_ref().and_then(ModalPayload::kind)
    }

    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    pub fn is_closing(&self) -> bool {
        self.phase == ModalPhase::Closing
    }

    pub fn is_closed(&self) -> bool {
        self.phase == ModalPhase::Closed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModalError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

struct PendingClose<H> {
    episode: u64,
    handle: H,
}

struct ControllerInner<S: Scheduler> {
    state: Writable<ModalState>,
    scheduler: S,
    pending_close: RefCell<Option<PendingClose<S::Handle>>>,
    next_episode: Cell<u64>,
}

impl<S: Scheduler + 'static> ControllerInner<S> {
    /// Returns true when a timer was outstanding
    fn cancel_pending_close(&self) -> bool {
        let pending = self.pending_close.borrow_mut().take();
        match pending {
            Some(pending) => {
                debug!(target: "modal", "cancelling close timer #{}", pending.episode);
                self.scheduler.cancel(pending.handle);
                true
            }
            None => false,
        }
    }

    fn schedule_close(self: &Rc<Self>, delay_ms: u32) {
        let episode = self.next_episode.get();
        self.next_episode.set(episode + 1);

        let controller: Weak<Self> = Rc::downgrade(self);
        let handle = self.scheduler.schedule_once(
            delay_ms,
            Box::new(move || {
                if let Some(controller) = controller.upgrade() {
                    controller.finish_close(episode);
                }
            }),
        );

        debug!(target: "modal", "close timer #{} scheduled in {}ms", episode, delay_ms);
        *self.pending_close.borrow_mut() = Some(PendingClose { episode, handle });
    }

    fn finish_close(&self, episode: u64) {
        let current = self
            .pending_close
            .borrow()
            .as_ref()
            .map(|pending| pending.episode);

        if current != Some(episode) {
            debug!(target: "modal", "ignoring stale close timer #{}", episode);
            return;
        }

        // The timer already fired, so its handle is just released
        let fired = self.pending_close.borrow_mut().take();
        drop(fired);

        debug!(target: "modal", "close timer #{} fired, modal closed", episode);
        self.state.set(ModalState::default());
    }
}

/// Sole writer of the application's modal state.
///
/// Clones share the same state and timer; construct one per application
/// and inject it where needed.
pub struct ModalController<S: Scheduler + 'static = GlooScheduler> {
    inner: Rc<ControllerInner<S>>,
}

impl<S: Scheduler + 'static> ModalController<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                state: Writable::new(ModalState::default()),
                scheduler,
                pending_close: RefCell::new(None),
                next_episode: Cell::new(0),
            }),
        }
    }

    /// Show `payload`, replacing whatever is shown and cancelling any pending close
    pub fn open(&self, payload: impl Into<ModalPayload>) -> Result<(), ModalError> {
        let payload = payload.into();
        if payload.is_blank() {
            warn!(target: "modal", "refusing to open a modal with an empty view");
            return Err(ModalError::InvalidArgument("modal payload must not be empty"));
        }

        self.inner.cancel_pending_close();
        debug!(target: "modal", "opening {}", payload);
        self.inner.state.set(ModalState::opened(payload));
        Ok(())
    }

    /// Enter the closing phase. With `after_ms` the modal closes on its own
    /// after that delay; without it, it stays closing until `close()`.
    ///
    /// Calling again while closing replaces the pending timer. No-op when closed.
    pub fn start_closing(&self, after_ms: Option<u32>) {
        let current = self.inner.state.get();
        let Some(payload) = current.payload else {
            debug!(target: "modal", "start_closing ignored, modal already closed");
            return;
        };

        self.inner.cancel_pending_close();

        if current.phase != ModalPhase::Closing {
            debug!(target: "modal", "closing {}", payload);
            self.inner.state.set(ModalState::closing(payload));
        }

        if let Some(delay_ms) = after_ms {
            self.inner.schedule_close(delay_ms);
        }
    }

    /// Close immediately. Idempotent.
    pub fn close(&self) {
        self.inner.cancel_pending_close();

        if self.inner.state.with(ModalState::is_closed) {
            return;
        }

        debug!(target: "modal", "modal closed");
        self.inner.state.set(ModalState::default());
    }

    pub fn state(&self) -> ModalState {
        self.inner.state.get()
    }

    pub fn has_pending_close(&self) -> bool {
        self.inner.pending_close.borrow().is_some()
    }

    pub fn subscribe(&self, listener: impl Fn(&ModalState) + 'static) -> Subscription {
        self.inner.state.subscribe(listener)
    }

    pub fn readable(&self) -> Readable<ModalState> {
        self.inner.state.readable()
    }
}

impl Default for ModalController<GlooScheduler> {
    fn default() -> Self {
        Self::new(GlooScheduler)
    }
}

impl<S: Scheduler + 'static> Clone for ModalController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Scheduler + 'static> PartialEq for ModalController<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: Scheduler + 'static> fmt::Debug for ModalController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalController")
            .field("state", &self.inner.state.get())
            .field("has_pending_close", &self.has_pending_close())
            .finish()
    }
}
