use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use std::time::Duration;

/// Show a blocking browser alert.
pub fn alert(msg: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(msg);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Bookkeeping for a self-dismissing message, independent of the timer API.
///
/// Every `show` starts a new generation. A timer only clears the notice if it
/// belongs to the current generation, so a late timer from a replaced notice
/// cannot dismiss its successor.
#[derive(Debug)]
pub struct NoticeState<H> {
    current: Option<Notice>,
    pending: Option<H>,
    generation: u64,
}

impl<H> Default for NoticeState<H> {
    fn default() -> Self {
        Self {
            current: None,
            pending: None,
            generation: 0,
        }
    }
}

impl<H> NoticeState<H> {
    /// Replace the message. Returns the ticket for the new timer and the
    /// previous timer, which the caller must clear.
    pub fn show(&mut self, notice: Notice) -> (u64, Option<H>) {
        self.generation += 1;
        self.current = Some(notice);
        (self.generation, self.pending.take())
    }

    /// Remember the timer started for `ticket`. A stale ticket gets its
    /// handle back to clear.
    pub fn arm(&mut self, ticket: u64, handle: H) -> Option<H> {
        if ticket != self.generation {
            return Some(handle);
        }
        self.pending = Some(handle);
        None
    }

    /// Timer for `ticket` fired. Returns whether the notice was dismissed.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        self.pending = None;
        true
    }

    /// Stop tracking the pending timer and hand it back. Any timer already
    /// in flight becomes stale.
    pub fn teardown(&mut self) -> Option<H> {
        self.generation += 1;
        self.pending.take()
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// A message that clears itself after a fixed delay.
///
/// Only one dismissal timer is pending at a time, and it is cancelled when the
/// owning component is torn down.
#[derive(Clone, Copy)]
pub struct TransientNotice {
    state: RwSignal<NoticeState<TimeoutHandle>>,
    delay: Duration,
}

impl TransientNotice {
    /// Must be called inside the owning component.
    pub fn new(delay_ms: u64) -> Self {
        let notice = Self {
            state: create_rw_signal(NoticeState::default()),
            delay: Duration::from_millis(delay_ms),
        };
        on_cleanup(move || notice.cancel());
        notice
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    fn show(&self, kind: NoticeKind, text: String) {
        let Some((ticket, previous)) = self.state.try_update(|s| s.show(Notice { kind, text }))
        else {
            return;
        };
        if let Some(handle) = previous {
            handle.clear();
        }

        let state = self.state;
        // Without a timer the notice just stays until replaced.
        if let Ok(handle) = set_timeout_with_handle(
            move || {
                let _ = state.try_update(|s| s.expire(ticket));
            },
            self.delay,
        ) {
            if let Some(Some(stale)) = self.state.try_update_untracked(|s| s.arm(ticket, handle)) {
                stale.clear();
            }
        }
    }

    pub fn cancel(&self) {
        if let Some(Some(handle)) = self.state.try_update_untracked(|s| s.teardown()) {
            handle.clear();
        }
    }

    pub fn get(&self) -> Option<Notice> {
        self.state.with(|s| s.current().cloned())
    }
}
