// SPDX-License-Identifier: MPL-2.0
//! Notification queue engine.
//!
//! Tracks entries in arrival order, admits up to the configured number of
//! visible entries per lane, queues the rest and promotes them
//! strictly first-in first-out when a slot opens.
//!
//! Every mutation happens under one lock as a single state replacement, so
//! interleaved events (timer expiry, button press, programmatic hide,
//! animation completion) are serialized into one consistent entry list.
//! Settlement goes through one path that cancels the entry's timer before
//! settling; late settlements are logged and dropped.

use super::entry::{Entry, EntryView};
use super::handle::{Handle, Hider};
use super::preset::Preset;
use super::settings::EngineSettings;
use super::timers::{TimerKind, TimerRegistry};
use super::ShowOptions;
use crate::diagnostics::{DiagnosticsHandle, OverlayEvent, OverlayEventKind};
use crate::domain::overlay::{ButtonId, EntryId, Lanes, OverlayKind, Placement, Status, Vacancy};
use crate::presentation::Insets;
use crate::response::{Outcome, Settlement};
use crate::sync::lock;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Queue engine for one overlay family.
///
/// Cloning yields another handle to the same engine, which is how call sites
/// anywhere in an application reach it without ambient globals.
///
/// Timeouts and cleanup fallbacks run as tokio tasks: without a current tokio
/// runtime, entries simply never time out.
pub struct QueueEngine<D = ()> {
    shared: Arc<Shared<D>>,
}

struct Shared<D> {
    settings: EngineSettings,
    state: Mutex<QueueState<D>>,
    changes: watch::Sender<u64>,
}

struct QueueState<D> {
    /// Arrival order.
    entries: Vec<Entry<D>>,
    timers: TimerRegistry,
    next_seq: u64,
    revision: u64,
    insets: Insets,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<D> QueueState<D> {
    fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }

    fn position_of_seq(&self, id: &EntryId, seq: u64) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.id == id && entry.seq == seq)
    }

    fn fresh_id(&self) -> EntryId {
        loop {
            let id = EntryId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    /// Slots taken in the lane of `placement` under the given policies.
    fn occupied(&self, placement: Placement, lanes: Lanes, vacancy: Vacancy) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(lanes, Lanes::Single(_)) || entry.placement == placement)
            .filter(|entry| match vacancy {
                Vacancy::OnRemoval => entry.status.is_rendered(),
                Vacancy::OnHide => entry.status == Status::Visible,
            })
            .count()
    }

    fn count_with(&self, status: Status) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.status == status)
            .count()
    }
}

impl<D> Clone for QueueEngine<D> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<D> fmt::Debug for QueueEngine<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.shared.state);
        f.debug_struct("QueueEngine")
            .field("kind", &self.shared.settings.kind)
            .field("entries", &state.entries.len())
            .field("revision", &state.revision)
            .finish()
    }
}

// =============================================================================
// Requests
// =============================================================================

impl<D: Send + 'static> QueueEngine<D> {
    #[must_use]
    pub fn new(settings: EngineSettings) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                settings,
                state: Mutex::new(QueueState {
                    entries: Vec::new(),
                    timers: TimerRegistry::default(),
                    next_seq: 0,
                    revision: 0,
                    insets: Insets::default(),
                    diagnostics: None,
                }),
                changes,
            }),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &EngineSettings {
        &self.shared.settings
    }

    #[must_use]
    pub fn kind(&self) -> OverlayKind {
        self.shared.settings.kind
    }

    /// Attaches a diagnostics history that records every transition.
    pub fn set_diagnostics(&self, handle: DiagnosticsHandle) {
        lock(&self.shared.state).diagnostics = Some(handle);
    }

    /// Requests an overlay.
    ///
    /// The entry becomes visible at once if its lane has a free slot
    /// and nothing is queued ahead of it; otherwise it waits in the queue and
    /// its timeout does not start until it is promoted.
    ///
    /// Re-using the id of a tracked entry erases that entry (its timer is
    /// cancelled, its response left unsettled) and appends the new one at the
    /// back of the queue.
    pub fn show(&self, title: impl Into<String>, options: ShowOptions<D>) -> Handle<D> {
        let settings = &self.shared.settings;
        let mut state = lock(&self.shared.state);

        let id = match options.id {
            Some(id) => id,
            None => state.fresh_id(),
        };
        let persistent = options.persistent.unwrap_or(false);
        let timeout = if persistent {
            None
        } else {
            options
                .timeout
                .filter(|timeout| !timeout.is_zero())
                .or(settings.default_timeout)
        };
        let buttons = options
            .buttons
            .unwrap_or_else(|| settings.fallback_buttons.resolve(persistent, timeout));
        let seq = state.next_seq;
        state.next_seq += 1;
        let (settlement, response) = Settlement::channel(&id);

        if let Some(index) = state.position(&id) {
            state.timers.cancel(&id);
            let replaced = state.entries.remove(index);
            tracing::debug!(kind = %settings.kind, %id, status = ?replaced.status, "entry replaced by re-show");
            self.record(&state, &id, OverlayEventKind::Replaced);
        }

        state.entries.push(Entry {
            id: id.clone(),
            seq,
            title: title.into(),
            timeout,
            buttons,
            status: Status::Queued,
            dismissable: options.dismissable.unwrap_or(true),
            placement: settings.lanes.resolve(options.placement),
            description: options.description,
            icon: options.icon,
            data: options.data,
            input: options.input,
            measured_height: None,
            hidden_at: None,
            settlement: settlement.clone(),
        });

        self.promote_queued(&mut state, Some(seq));
        if state.entries.last().is_some_and(|entry| entry.status == Status::Queued) {
            tracing::debug!(kind = %settings.kind, %id, "entry queued");
            self.record(&state, &id, OverlayEventKind::Queued);
        }
        self.commit(&mut state);
        drop(state);

        let hider = Hider::new(id.clone(), seq, settlement, self.clone());
        Handle::new(id, response, hider)
    }

    /// Same as [`show`](Self::show) with default options.
    pub fn show_title(&self, title: impl Into<String>) -> Handle<D> {
        self.show(title, ShowOptions::default())
    }

    /// Hides the entry settling it with `HiddenByExternalCall`.
    ///
    /// Returns `false`, without side effects, when no such entry is tracked
    /// or it is already hidden.
    pub fn hide(&self, id: &EntryId) -> bool {
        let mut state = lock(&self.shared.state);
        let Some(index) = state.position(id) else {
            tracing::debug!(kind = %self.kind(), %id, "hide for unknown entry ignored");
            return false;
        };
        self.hide_at(&mut state, index)
    }

    /// Hides the oldest visible entry, if any.
    pub fn hide_current(&self) -> bool {
        let mut state = lock(&self.shared.state);
        let Some(index) = state
            .entries
            .iter()
            .position(|entry| entry.status == Status::Visible)
        else {
            tracing::warn!(kind = %self.kind(), "hide without an id, but nothing is visible");
            return false;
        };
        self.hide_at(&mut state, index)
    }

    /// Hides the entry only if it is still the one a handle was issued for.
    pub(crate) fn hide_issued(&self, id: &EntryId, seq: u64) -> bool {
        let mut state = lock(&self.shared.state);
        match state.position_of_seq(id, seq) {
            Some(index) => self.hide_at(&mut state, index),
            None => false,
        }
    }

    fn hide_at(&self, state: &mut QueueState<D>, index: usize) -> bool {
        if state.entries[index].status == Status::Hidden {
            return false;
        }
        self.settle(state, index, Outcome::HiddenByExternalCall);
        self.commit(state);
        true
    }
}

impl<D: Clone + Send + 'static> QueueEngine<D> {
    /// Returns a scope that layers per-call options over `defaults`.
    #[must_use]
    pub fn with_preset(&self, defaults: ShowOptions<D>) -> Preset<D> {
        Preset::new(self.clone(), defaults)
    }
}

// =============================================================================
// Presentation feedback
// =============================================================================

impl<D: Send + 'static> QueueEngine<D> {
    /// Erases a hidden entry once its exit animation has finished.
    ///
    /// Reports for entries that are not hidden (for example the end of an
    /// enter animation) are ignored.
    pub fn cleanup_after_animation(&self, id: &EntryId) -> bool {
        let mut state = lock(&self.shared.state);
        let Some(index) = state
            .position(id)
            .filter(|&index| state.entries[index].status == Status::Hidden)
        else {
            return false;
        };
        self.remove_hidden(&mut state, index);
        self.commit(&mut state);
        true
    }

    /// Routes a button press back to the entry's response and hides it.
    ///
    /// Returns whether this press settled the response. A press that loses
    /// the race against another settlement is logged and dropped.
    pub fn report_button_press(&self, id: &EntryId, button: &ButtonId) -> bool {
        let mut state = lock(&self.shared.state);
        let Some(index) = state.position(id) else {
            tracing::debug!(kind = %self.kind(), %id, %button, "press for unknown entry ignored");
            return false;
        };
        let Some(role) = state.entries[index]
            .buttons
            .iter()
            .find(|candidate| &candidate.id == button)
            .map(|candidate| candidate.role)
        else {
            tracing::warn!(kind = %self.kind(), %id, %button, "press for a button the entry does not have");
            return false;
        };
        let outcome = Outcome::ButtonPressed {
            button: button.clone(),
            role,
        };
        let settled = self.settle(&mut state, index, outcome);
        if settled {
            self.commit(&mut state);
        }
        settled
    }

    /// Stores the rendered height of an entry, used to stack overlays.
    pub fn report_measured_height(&self, id: &EntryId, height: f32) -> bool {
        let mut state = lock(&self.shared.state);
        let Some(index) = state.position(id) else {
            return false;
        };
        state.entries[index].measured_height = Some(height.max(0.0));
        self.commit(&mut state);
        true
    }

    /// Outside tap or back gesture. Honored only by engines that accept
    /// dismissal, and only for dismissable entries.
    pub(crate) fn dismiss(&self, id: &EntryId) -> bool {
        if !self.shared.settings.accepts_dismissal {
            tracing::debug!(kind = %self.kind(), %id, "engine does not accept dismissal");
            return false;
        }
        let mut state = lock(&self.shared.state);
        let Some(index) = state.position(id) else {
            return false;
        };
        if !state.entries[index].dismissable {
            tracing::debug!(kind = %self.kind(), %id, "entry is not dismissable");
            return false;
        }
        let settled = self.settle(&mut state, index, Outcome::Dismissed);
        if settled {
            self.commit(&mut state);
        }
        settled
    }

    /// Replaces the captured text of an entry that has a text field.
    pub(crate) fn capture_text(&self, id: &EntryId, text: String) -> bool {
        let mut state = lock(&self.shared.state);
        let Some(index) = state.position(id) else {
            return false;
        };
        let entry = &mut state.entries[index];
        if entry.input.is_none() || entry.status == Status::Hidden {
            return false;
        }
        entry.input = Some(text);
        self.commit(&mut state);
        true
    }

    /// Settles a text-capturing entry with its current text.
    pub(crate) fn submit_text(&self, id: &EntryId) -> bool {
        let mut state = lock(&self.shared.state);
        let Some(index) = state.position(id) else {
            return false;
        };
        let Some(text) = state.entries[index].input.clone() else {
            return false;
        };
        let settled = self.settle(&mut state, index, Outcome::InputSubmitted(text));
        if settled {
            self.commit(&mut state);
        }
        settled
    }

    /// Erases every hidden entry that started animating out at least
    /// `animation` ago. For adapters that drive exit animations from a clock
    /// rather than from per-entry completion callbacks.
    pub fn finish_exit_animations(&self, animation: Duration) -> usize {
        let mut state = lock(&self.shared.state);
        let now = Instant::now();
        let mut finished = 0;
        while let Some(index) = state.entries.iter().position(|entry| {
            entry.status == Status::Hidden
                && entry
                    .hidden_at
                    .is_some_and(|hidden_at| hidden_at + animation <= now)
        }) {
            self.remove_hidden(&mut state, index);
            finished += 1;
        }
        if finished > 0 {
            self.commit(&mut state);
        }
        finished
    }

    pub fn set_insets(&self, insets: Insets) {
        let mut state = lock(&self.shared.state);
        state.insets = insets;
        self.commit(&mut state);
    }

    #[must_use]
    pub fn insets(&self) -> Insets {
        lock(&self.shared.state).insets
    }

    /// Stacked height of the rendered entries against `placement`, plus the
    /// inset of that edge. Entries not measured yet count as zero.
    #[must_use]
    pub fn area_height(&self, placement: Placement) -> f32 {
        let state = lock(&self.shared.state);
        let stacked: f32 = state
            .entries
            .iter()
            .filter(|entry| entry.placement == placement && entry.status.is_rendered())
            .filter_map(|entry| entry.measured_height)
            .sum();
        stacked + state.insets.edge(placement)
    }
}

// =============================================================================
// Reads
// =============================================================================

impl<D> QueueEngine<D> {
    /// Number of tracked entries, whatever their status.
    #[must_use]
    pub fn count(&self) -> usize {
        lock(&self.shared.state).entries.len()
    }

    #[must_use]
    pub fn has_active(&self) -> bool {
        self.count() > 0
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        lock(&self.shared.state).count_with(Status::Visible)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        lock(&self.shared.state).count_with(Status::Queued)
    }

    #[must_use]
    pub fn status(&self, id: &EntryId) -> Option<Status> {
        let state = lock(&self.shared.state);
        state.position(id).map(|index| state.entries[index].status)
    }

    /// Whether an expiry or cleanup timer is currently armed for `id`.
    #[must_use]
    pub fn has_timer(&self, id: &EntryId) -> bool {
        lock(&self.shared.state).timers.armed_kind(id).is_some()
    }

    /// Bumped after every state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        lock(&self.shared.state).revision
    }

    /// Notifies the receiver with the new revision after every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.changes.subscribe()
    }
}

impl<D: Clone> QueueEngine<D> {
    /// All tracked entries in arrival order.
    #[must_use]
    pub fn entries(&self) -> Vec<EntryView<D>> {
        lock(&self.shared.state)
            .entries
            .iter()
            .map(Entry::view)
            .collect()
    }

    /// Entries the presentation layer should draw: visible ones and hidden
    /// ones still animating out, in arrival order.
    #[must_use]
    pub fn rendered(&self) -> Vec<EntryView<D>> {
        lock(&self.shared.state)
            .entries
            .iter()
            .filter(|entry| entry.status.is_rendered())
            .map(Entry::view)
            .collect()
    }

    #[must_use]
    pub fn entry(&self, id: &EntryId) -> Option<EntryView<D>> {
        let state = lock(&self.shared.state);
        state.position(id).map(|index| state.entries[index].view())
    }
}

// =============================================================================
// Transitions
// =============================================================================

impl<D: Send + 'static> QueueEngine<D> {
    /// The single settlement path: cancel the timer, settle, then move the
    /// entry out of the visible set.
    fn settle(&self, state: &mut QueueState<D>, index: usize, outcome: Outcome) -> bool {
        let kind = outcome.kind();
        let id = state.entries[index].id.clone();
        let status = state.entries[index].status;
        if status != Status::Hidden {
            state.timers.cancel(&id);
        }

        let response = state.entries[index].response(outcome);
        let settled = state.entries[index].settlement.settle(response);
        if settled {
            tracing::debug!(kind = %self.kind(), %id, outcome = %kind, "response settled");
            self.record(state, &id, OverlayEventKind::Settled(kind));
        } else {
            self.record(state, &id, OverlayEventKind::DoubleSettlement(kind));
        }

        match status {
            Status::Queued => {
                // Never rendered, so no exit animation will be reported.
                state.entries.remove(index);
                self.record(state, &id, OverlayEventKind::Removed);
            }
            Status::Visible => {
                let entry = &mut state.entries[index];
                entry.status = Status::Hidden;
                entry.hidden_at = Some(Instant::now());
                self.arm_cleanup(state, index);
            }
            Status::Hidden => {}
        }
        self.promote_queued(state, None);
        settled
    }

    /// Promotes queued entries, oldest first, into free slots of their
    /// lane. `fresh` marks the entry being shown right now, which is
    /// recorded as shown rather than promoted.
    fn promote_queued(&self, state: &mut QueueState<D>, fresh: Option<u64>) {
        let settings = &self.shared.settings;
        let cap = settings.max_simultaneous_items.value();
        for index in 0..state.entries.len() {
            if state.entries[index].status != Status::Queued {
                continue;
            }
            let placement = state.entries[index].placement;
            if state.occupied(placement, settings.lanes, settings.vacancy) >= cap {
                continue;
            }
            state.entries[index].status = Status::Visible;
            self.arm_expiry(state, index);

            let entry = &state.entries[index];
            let kind = if Some(entry.seq) == fresh {
                OverlayEventKind::Shown
            } else {
                OverlayEventKind::Promoted
            };
            tracing::debug!(kind = %settings.kind, id = %entry.id, transition = ?kind, "entry visible");
            self.record(state, &entry.id, kind);
        }
    }

    fn remove_hidden(&self, state: &mut QueueState<D>, index: usize) {
        let entry = state.entries.remove(index);
        state.timers.cancel(&entry.id);
        tracing::debug!(kind = %self.kind(), id = %entry.id, "entry removed");
        self.record(state, &entry.id, OverlayEventKind::Removed);
        self.promote_queued(state, None);
    }

    fn arm_expiry(&self, state: &mut QueueState<D>, index: usize) {
        let entry = &state.entries[index];
        let Some(timeout) = entry.timeout else {
            return;
        };
        let (id, seq) = (entry.id.clone(), entry.seq);
        let weak = Arc::downgrade(&self.shared);
        let target = id.clone();
        state
            .timers
            .arm(&id, seq, TimerKind::Expiry, timeout, move || {
                if let Some(shared) = weak.upgrade() {
                    QueueEngine { shared }.expire(&target, seq);
                }
            });
    }

    fn arm_cleanup(&self, state: &mut QueueState<D>, index: usize) {
        let Some(after) = self.shared.settings.cleanup_fallback else {
            return;
        };
        let entry = &state.entries[index];
        let (id, seq) = (entry.id.clone(), entry.seq);
        let weak = Arc::downgrade(&self.shared);
        let target = id.clone();
        state
            .timers
            .arm(&id, seq, TimerKind::Cleanup, after, move || {
                if let Some(shared) = weak.upgrade() {
                    QueueEngine { shared }.cleanup_fired(&target, seq);
                }
            });
    }

    fn expire(&self, id: &EntryId, seq: u64) {
        let mut state = lock(&self.shared.state);
        state.timers.forget_fired(id, seq, TimerKind::Expiry);
        let Some(index) = state
            .position_of_seq(id, seq)
            .filter(|&index| state.entries[index].status == Status::Visible)
        else {
            tracing::debug!(kind = %self.kind(), %id, "stale expiry ignored");
            return;
        };
        self.settle(&mut state, index, Outcome::Timeout);
        self.commit(&mut state);
    }

    fn cleanup_fired(&self, id: &EntryId, seq: u64) {
        let mut state = lock(&self.shared.state);
        state.timers.forget_fired(id, seq, TimerKind::Cleanup);
        let Some(index) = state
            .position_of_seq(id, seq)
            .filter(|&index| state.entries[index].status == Status::Hidden)
        else {
            return;
        };
        tracing::debug!(kind = %self.kind(), %id, "exit animation not reported, removing");
        self.remove_hidden(&mut state, index);
        self.commit(&mut state);
    }

    fn commit(&self, state: &mut QueueState<D>) {
        state.revision += 1;
        self.shared.changes.send_replace(state.revision);
    }

    fn record(&self, state: &QueueState<D>, id: &EntryId, kind: OverlayEventKind) {
        if let Some(diagnostics) = &state.diagnostics {
            diagnostics.record(OverlayEvent::new(self.kind(), id.clone(), kind));
        }
    }
}
