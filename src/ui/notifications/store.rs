// SPDX-License-Identifier: MPL-2.0
//! Toast store: shared list, subscriptions and removal timers.
//!
//! A `ToastStore` is cheap to clone; every clone refers to the same list.
//! Mutations are funneled through the reducer and each resulting state is
//! pushed synchronously to all listeners, in registration order.
//!
//! Dismissed toasts stay in the list with `open == false` until their removal
//! deadline passes. Deadlines are kept in a side-table keyed by id and are
//! fired by [`ToastStore::tick`], which the host calls periodically (the app
//! tick subscription, or a [`ManualClock`](super::ManualClock) in tests).

use super::clock::{Clock, SystemClock};
use super::reducer::{reduce, Action, State};
use super::toast::{OpenChange, Toast, ToastId, ToastOptions, ToastPatch};
use super::toaster::Message;
use crate::app::config::{DEFAULT_TOAST_LIMIT, DEFAULT_TOAST_REMOVE_DELAY_MS};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Capacity and timing of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of toasts kept at once. Never below 1.
    pub limit: usize,
    /// Delay between dismissal and removal, leaving room for an exit animation.
    pub remove_delay: Duration,
}

impl StoreConfig {
    #[must_use]
    pub fn new(limit: usize, remove_delay: Duration) -> Self {
        Self {
            limit: limit.max(1),
            remove_delay,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_TOAST_LIMIT,
            Duration::from_millis(DEFAULT_TOAST_REMOVE_DELAY_MS),
        )
    }
}

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<RefCell<dyn FnMut(&[Toast])>>;

struct Inner {
    config: StoreConfig,
    state: State,
    /// Last id handed out. Not rewound by `reset`.
    last_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
    last_listener_id: u64,
    removal_deadlines: HashMap<ToastId, Instant>,
    /// Steps waiting for the dispatch loop.
    pending: VecDeque<Step>,
    dispatching: bool,
    clock: Rc<dyn Clock>,
}

/// Unit of work run by the dispatch loop.
///
/// Closing and reopening look at the list as it is when the step runs, so a
/// dismiss queued behind an `Add` sees the added toast.
enum Step {
    Apply(Action),
    Close(Option<ToastId>),
    Reopen(ToastId),
}

/// Open-change callbacks owed after a step, with the value to report.
type Callbacks = Vec<(OpenChange, bool)>;

impl Inner {
    /// Runs one step. Returns `None` when the step matched nothing and
    /// listeners should not be notified.
    fn run(&mut self, step: Step) -> Option<Callbacks> {
        match step {
            Step::Apply(action) => {
                self.apply(action);
                Some(Vec::new())
            }
            Step::Close(target) => self.close(target),
            Step::Reopen(id) => self.reopen(id),
        }
    }

    fn apply(&mut self, action: Action) {
        tracing::trace!(action = action.kind(), "applying toast action");
        let limit = self.config.limit;
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action, limit);
        self.cancel_orphaned_removals();
    }

    fn close(&mut self, target: Option<ToastId>) -> Option<Callbacks> {
        let matched: Vec<(ToastId, bool, Option<OpenChange>)> = self
            .state
            .toasts
            .iter()
            .filter(|toast| target.is_none_or(|id| id == toast.id))
            .map(|toast| (toast.id, toast.open, toast.on_open_change.clone()))
            .collect();
        if matched.is_empty() {
            tracing::trace!(target_id = ?target, "dismiss matched no toast");
            return None;
        }

        self.apply(Action::Dismiss(target));

        let mut callbacks = Vec::new();
        for (id, was_open, callback) in matched {
            if was_open {
                tracing::debug!(toast_id = %id, "toast dismissed");
                if let Some(callback) = callback {
                    callbacks.push((callback, false));
                }
            }
            self.schedule_removal(id);
        }
        Some(callbacks)
    }

    fn reopen(&mut self, id: ToastId) -> Option<Callbacks> {
        let Some(toast) = self.state.get(id) else {
            tracing::trace!(toast_id = %id, "reopen ignored for unknown toast");
            return None;
        };
        let (was_open, callback) = (toast.open, toast.on_open_change.clone());
        self.removal_deadlines.remove(&id);
        if was_open {
            return None;
        }

        tracing::debug!(toast_id = %id, "toast reopened");
        self.apply(Action::Update(id, ToastPatch::new().open(true)));
        Some(callback.map(|callback| (callback, true)).into_iter().collect())
    }

    /// Records a removal deadline for a listed toast, at most once.
    ///
    /// A delay too large for the clock leaves the toast closed without a
    /// deadline; it then goes only through explicit removal or eviction.
    fn schedule_removal(&mut self, id: ToastId) {
        if !self.state.contains(id) || self.removal_deadlines.contains_key(&id) {
            return;
        }
        let delay = self.config.remove_delay;
        let Some(deadline) = self.clock.now().checked_add(delay) else {
            tracing::warn!(toast_id = %id, "removal delay out of clock range, toast kept until removed");
            return;
        };
        self.removal_deadlines.insert(id, deadline);
        tracing::debug!(
            toast_id = %id,
            delay_ms = delay.as_millis() as u64,
            "toast removal scheduled"
        );
    }

    /// Drops deadlines whose toast left the list (removal, eviction, reset).
    fn cancel_orphaned_removals(&mut self) {
        let state = &self.state;
        self.removal_deadlines.retain(|id, _| {
            let keep = state.contains(*id);
            if !keep {
                tracing::debug!(toast_id = %id, "pending toast removal cancelled");
            }
            keep
        });
    }
}

/// Shared, single-threaded toast store.
#[derive(Clone)]
pub struct ToastStore {
    inner: Rc<RefCell<Inner>>,
}

impl ToastStore {
    /// Creates an empty store driven by the system clock.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, Rc::new(SystemClock))
    }

    /// Creates an empty store driven by `clock`.
    #[must_use]
    pub fn with_clock(config: StoreConfig, clock: Rc<dyn Clock>) -> Self {
        let config = StoreConfig::new(config.limit, config.remove_delay);
        Self {
            inner: Rc::new(RefCell::new(Inner {
                config,
                state: State::new(),
                last_id: 0,
                listeners: Vec::new(),
                last_listener_id: 0,
                removal_deadlines: HashMap::new(),
                pending: VecDeque::new(),
                dispatching: false,
                clock,
            })),
        }
    }

    /// Enqueues a new open toast and returns a handle to it.
    ///
    /// The newest toast goes first; when the list is full the oldest toast is
    /// evicted (and any removal pending for it is cancelled).
    pub fn toast(&self, options: ToastOptions) -> ToastHandle {
        let id = {
            let mut inner = self.inner.borrow_mut();
            inner.last_id += 1;
            ToastId::from_raw(inner.last_id)
        };
        tracing::debug!(toast_id = %id, "toast added");
        self.dispatch(Step::Apply(Action::Add(Toast::from_options(id, options))));
        ToastHandle {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    /// Merges `patch` into the toast with `id`. Unknown ids are ignored.
    ///
    /// An `open` field goes through [`set_open`](Self::set_open), so closing
    /// schedules removal and reopening cancels it.
    pub fn update(&self, id: ToastId, mut patch: ToastPatch) {
        let open = patch.open.take();
        if open.is_none() || !patch.is_empty() {
            self.dispatch(Step::Apply(Action::Update(id, patch)));
        }
        if let Some(open) = open {
            self.set_open(id, open);
        }
    }

    /// Closes the toast with `id` and schedules its removal.
    pub fn dismiss(&self, id: ToastId) {
        self.dispatch(Step::Close(Some(id)));
    }

    /// Closes every toast and schedules their removal.
    pub fn dismiss_all(&self) {
        self.dispatch(Step::Close(None));
    }

    /// Handles an open-state change requested by the rendering layer.
    ///
    /// Closing behaves like [`dismiss`](Self::dismiss). Reopening a closing
    /// toast cancels its pending removal.
    pub fn set_open(&self, id: ToastId, open: bool) {
        if open {
            self.dispatch(Step::Reopen(id));
        } else {
            self.dismiss(id);
        }
    }

    /// Removes the toast with `id` immediately.
    pub fn remove(&self, id: ToastId) {
        self.dispatch(Step::Apply(Action::Remove(Some(id))));
    }

    /// Removes every toast immediately.
    pub fn remove_all(&self) {
        self.dispatch(Step::Apply(Action::Remove(None)));
    }

    /// Clears the list and every pending removal. Listeners stay registered
    /// and are notified with the empty list.
    pub fn reset(&self) {
        tracing::debug!("toast store reset");
        self.dispatch(Step::Apply(Action::Remove(None)));
    }

    /// Fires every removal whose deadline has passed.
    ///
    /// Returns the number of toasts removed.
    pub fn tick(&self) -> usize {
        let mut due: Vec<ToastId> = {
            let inner = self.inner.borrow();
            let now = inner.clock.now();
            inner
                .removal_deadlines
                .iter()
                .filter(|(_, deadline)| **deadline <= now)
                .map(|(id, _)| *id)
                .collect()
        };
        due.sort_unstable();

        for id in &due {
            self.inner.borrow_mut().removal_deadlines.remove(id);
            tracing::debug!(toast_id = %id, "toast removal deadline reached");
            self.dispatch(Step::Apply(Action::Remove(Some(*id))));
        }
        due.len()
    }

    /// Handles a message emitted by the [`Toaster`](super::Toaster) view.
    ///
    /// `Action` messages are left to the owner of the toast.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => self.set_open(*id, false),
            Message::Tick => {
                self.tick();
            }
            Message::Action(_) => {}
        }
    }

    /// Registers `listener`, called with the full list after every change.
    pub fn subscribe(&self, listener: impl FnMut(&[Toast]) + 'static) -> Unsubscribe {
        let mut inner = self.inner.borrow_mut();
        inner.last_listener_id += 1;
        let id = ListenerId(inner.last_listener_id);
        let listener: Listener = Rc::new(RefCell::new(listener));
        inner.listeners.push((id, listener));
        Unsubscribe {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Returns a snapshot of the list, newest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.borrow().state.toasts.clone()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.inner.borrow().state.get(id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().state.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of toasts waiting for removal.
    #[must_use]
    pub fn pending_removals(&self) -> usize {
        self.inner.borrow().removal_deadlines.len()
    }

    #[must_use]
    pub fn has_pending_removals(&self) -> bool {
        self.pending_removals() > 0
    }

    /// Returns the earliest pending removal deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.borrow().removal_deadlines.values().min().copied()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.inner.borrow().config.limit
    }

    #[must_use]
    pub fn remove_delay(&self) -> Duration {
        self.inner.borrow().config.remove_delay
    }

    /// Runs `step` and notifies listeners, then the open-change callbacks.
    ///
    /// Steps issued while listeners or callbacks are running are queued and
    /// run by the outer call, in order, before it returns.
    fn dispatch(&self, step: Step) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.pending.push_back(step);
            if inner.dispatching {
                return;
            }
            inner.dispatching = true;
        }

        loop {
            let (snapshot, listeners, callbacks) = {
                let mut inner = self.inner.borrow_mut();
                let Some(step) = inner.pending.pop_front() else {
                    inner.dispatching = false;
                    break;
                };
                let Some(callbacks) = inner.run(step) else {
                    continue;
                };
                let listeners: Vec<Listener> = inner
                    .listeners
                    .iter()
                    .map(|(_, listener)| Rc::clone(listener))
                    .collect();
                (inner.state.toasts.clone(), listeners, callbacks)
            };

            for listener in listeners {
                let mut callback = listener.borrow_mut();
                (&mut *callback)(&snapshot);
            }
            for (callback, open) in callbacks {
                callback(open);
            }
        }
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ToastStore")
            .field("config", &inner.config)
            .field("toasts", &inner.state.toasts)
            .field("listeners", &inner.listeners.len())
            .field("pending_removals", &inner.removal_deadlines.len())
            .finish()
    }
}

/// Handle returned by [`ToastStore::toast`].
///
/// Holds a weak reference: once the store is dropped every call is a no-op.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    id: ToastId,
    store: Weak<RefCell<Inner>>,
}

impl ToastHandle {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Merges `patch` into this toast.
    pub fn update(&self, patch: ToastPatch) {
        if let Some(store) = self.store() {
            store.update(self.id, patch);
        }
    }

    /// Dismisses this toast.
    pub fn dismiss(&self) {
        if let Some(store) = self.store() {
            store.dismiss(self.id);
        }
    }

    fn store(&self) -> Option<ToastStore> {
        self.store.upgrade().map(|inner| ToastStore { inner })
    }
}

/// Deregisters a listener added with [`ToastStore::subscribe`].
#[derive(Debug)]
pub struct Unsubscribe {
    store: Weak<RefCell<Inner>>,
    id: ListenerId,
}

impl Unsubscribe {
    #[must_use]
    pub fn listener_id(&self) -> ListenerId {
        self.id
    }

    /// Removes the listener. Returns `false` if it was already gone.
    pub fn unsubscribe(self) -> bool {
        let Some(inner) = self.store.upgrade() else {
            return false;
        };
        let mut inner = inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(id, _)| *id != self.id);
        inner.listeners.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::clock::ManualClock;
    use crate::ui::notifications::toast::{ToastAction, Variant};
    use std::cell::Cell;

    const DELAY: Duration = Duration::from_secs(5);

    fn store_with_limit(limit: usize) -> (ToastStore, Rc<ManualClock>) {
        let clock = Rc::new(ManualClock::new());
        let store = ToastStore::with_clock(StoreConfig::new(limit, DELAY), clock.clone());
        (store, clock)
    }

    #[test]
    fn new_store_is_empty() {
        let (store, _) = store_with_limit(1);
        assert!(store.is_empty());
        assert_eq!(store.pending_removals(), 0);
        assert!(store.next_deadline().is_none());
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        let (store, _) = store_with_limit(0);
        assert_eq!(store.limit(), 1);
    }

    #[test]
    fn toast_adds_open_entry_with_fresh_id() {
        let (store, _) = store_with_limit(1);
        let handle = store.toast(ToastOptions::titled("T"));

        let toasts = store.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title.as_deref(), Some("T"));
        assert!(toasts[0].open);
        assert_eq!(toasts[0].id, handle.id());
        assert_eq!(handle.id().to_string(), "1");
    }

    #[test]
    fn consecutive_toasts_never_share_an_id() {
        let (store, _) = store_with_limit(3);
        let first = store.toast(ToastOptions::titled("Toast 1"));
        let second = store.toast(ToastOptions::titled("Toast 2"));
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn limit_one_keeps_only_newest_toast() {
        let (store, _) = store_with_limit(1);
        for title in ["A", "B", "C"] {
            store.toast(ToastOptions::titled(title));
        }

        let toasts = store.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title.as_deref(), Some("C"));
        assert!(toasts[0].open);
    }

    #[test]
    fn length_never_exceeds_limit() {
        for limit in 1..=4 {
            let (store, _) = store_with_limit(limit);
            for i in 0..10 {
                store.toast(ToastOptions::titled(format!("toast-{i}")));
                assert!(store.len() <= limit);
            }
            assert_eq!(store.len(), limit);
        }
    }

    #[test]
    fn dismiss_closes_only_the_target() {
        let (store, _) = store_with_limit(3);
        let first = store.toast(ToastOptions::titled("first"));
        let second = store.toast(ToastOptions::titled("second"));

        store.dismiss(first.id());

        assert!(!store.get(first.id()).expect("first still listed").open);
        assert!(store.get(second.id()).expect("second still listed").open);
    }

    #[test]
    fn dismiss_all_closes_every_toast() {
        let (store, _) = store_with_limit(3);
        store.toast(ToastOptions::titled("a"));
        store.toast(ToastOptions::titled("b"));

        store.dismiss_all();

        assert!(store.toasts().iter().all(|toast| !toast.open));
        assert_eq!(store.pending_removals(), 2);
    }

    #[test]
    fn dismissed_toast_is_removed_after_delay() {
        let (store, clock) = store_with_limit(1);
        let handle = store.toast(ToastOptions::titled("X"));

        handle.dismiss();
        assert_eq!(store.len(), 1);
        assert!(!store.toasts()[0].open);

        clock.advance(DELAY - Duration::from_millis(1));
        assert_eq!(store.tick(), 0);
        assert_eq!(store.len(), 1);

        clock.advance(Duration::from_millis(1));
        assert_eq!(store.tick(), 1);
        assert!(store.is_empty());
        assert_eq!(store.pending_removals(), 0);
    }

    #[test]
    fn repeated_dismiss_does_not_reschedule() {
        let (store, clock) = store_with_limit(1);
        let handle = store.toast(ToastOptions::titled("X"));

        handle.dismiss();
        let deadline = store.next_deadline().expect("removal scheduled");
        clock.advance(Duration::from_secs(2));
        handle.dismiss();

        assert_eq!(store.pending_removals(), 1);
        assert_eq!(store.next_deadline(), Some(deadline));
    }

    #[test]
    fn dismiss_unknown_id_is_a_no_op() {
        let (store, _) = store_with_limit(1);
        store.toast(ToastOptions::titled("kept"));

        store.dismiss(ToastId::from_raw(99));

        assert!(store.toasts()[0].open);
        assert_eq!(store.pending_removals(), 0);
    }

    #[test]
    fn dismiss_invokes_open_change_once() {
        let (store, _) = store_with_limit(1);
        let closes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&closes);
        let handle = store.toast(ToastOptions::titled("Test Toast").on_open_change(move |open| {
            if !open {
                counter.set(counter.get() + 1);
            }
        }));

        handle.dismiss();
        handle.dismiss();

        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn update_changes_only_patched_fields() {
        let (store, _) = store_with_limit(1);
        let handle = store.toast(
            ToastOptions::titled("Original")
                .description("Description")
                .destructive(),
        );

        handle.update(ToastPatch::new().title("New"));

        let toast = store.get(handle.id()).expect("toast listed");
        assert_eq!(toast.title.as_deref(), Some("New"));
        assert_eq!(toast.description.as_deref(), Some("Description"));
        assert_eq!(toast.variant, Variant::Destructive);
        assert!(toast.open);
    }

    #[test]
    fn update_unknown_id_leaves_state_unchanged() {
        let (store, _) = store_with_limit(1);
        store.toast(ToastOptions::titled("Kept"));

        store.update(ToastId::from_raw(42), ToastPatch::new().title("New"));

        assert_eq!(store.toasts()[0].title.as_deref(), Some("Kept"));
    }

    #[test]
    fn eviction_cancels_pending_removal() {
        let (store, _) = store_with_limit(1);
        let first = store.toast(ToastOptions::titled("first"));
        first.dismiss();
        assert_eq!(store.pending_removals(), 1);

        store.toast(ToastOptions::titled("second"));

        assert_eq!(store.pending_removals(), 0);
    }

    #[test]
    fn explicit_removal_cancels_pending_timer() {
        let (store, clock) = store_with_limit(2);
        let doomed = store.toast(ToastOptions::titled("doomed"));
        doomed.dismiss();

        store.remove(doomed.id());
        assert_eq!(store.pending_removals(), 0);

        let survivor = store.toast(ToastOptions::titled("survivor"));
        clock.advance(DELAY * 2);
        assert_eq!(store.tick(), 0);
        assert!(store.get(survivor.id()).is_some());
    }

    #[test]
    fn remove_all_clears_list_and_timers() {
        let (store, _) = store_with_limit(3);
        store.toast(ToastOptions::titled("a"));
        store.toast(ToastOptions::titled("b"));
        store.dismiss_all();

        store.remove_all();

        assert!(store.is_empty());
        assert_eq!(store.pending_removals(), 0);
    }

    #[test]
    fn set_open_false_dismisses() {
        let (store, _) = store_with_limit(1);
        let handle = store.toast(ToastOptions::titled("close me"));

        store.handle_message(&Message::Dismiss(handle.id()));

        assert!(!store.toasts()[0].open);
        assert_eq!(store.pending_removals(), 1);
    }

    #[test]
    fn set_open_true_reopens_and_cancels_removal() {
        let (store, clock) = store_with_limit(1);
        let changes = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&changes);
        let handle = store.toast(
            ToastOptions::titled("flaky").on_open_change(move |open| log.borrow_mut().push(open)),
        );

        handle.dismiss();
        store.set_open(handle.id(), true);
        clock.advance(DELAY * 2);
        store.tick();

        assert!(store.get(handle.id()).expect("toast kept").open);
        assert_eq!(*changes.borrow(), vec![false, true]);
    }

    #[test]
    fn tick_message_fires_due_removals() {
        let (store, clock) = store_with_limit(1);
        let handle = store.toast(ToastOptions::titled("X"));
        handle.dismiss();
        clock.advance(DELAY);

        store.handle_message(&Message::Tick);

        assert!(store.is_empty());
    }

    #[test]
    fn action_message_is_left_to_owner() {
        let (store, _) = store_with_limit(1);
        let handle = store.toast(ToastOptions::titled("Deleted").action(ToastAction::new("Undo")));

        store.handle_message(&Message::Action(handle.id()));

        assert!(store.toasts()[0].open);
    }

    #[test]
    fn listeners_receive_every_state_in_order() {
        let (store, _) = store_with_limit(2);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _subscription = store.subscribe(move |toasts: &[Toast]| {
            sink.borrow_mut().push(toasts.len());
        });

        let handle = store.toast(ToastOptions::titled("a"));
        store.toast(ToastOptions::titled("b"));
        handle.dismiss();

        assert_eq!(*seen.borrow(), vec![1, 2, 2]);
    }

    #[test]
    fn multiple_subscribers_share_one_list() {
        let (store, _) = store_with_limit(1);
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let (a, b) = (Rc::clone(&first), Rc::clone(&second));
        let _s1 = store.subscribe(move |toasts: &[Toast]| a.set(toasts.len()));
        let _s2 = store.clone().subscribe(move |toasts: &[Toast]| b.set(toasts.len()));

        store.toast(ToastOptions::titled("Component 1 Toast"));

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let (store, _) = store_with_limit(1);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = store.subscribe(move |_: &[Toast]| counter.set(counter.get() + 1));

        store.toast(ToastOptions::titled("one"));
        assert!(subscription.unsubscribe());
        store.toast(ToastOptions::titled("two"));

        assert_eq!(calls.get(), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn dispatch_from_listener_is_queued_in_order() {
        let (store, _) = store_with_limit(3);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let inner_store = store.clone();
        let fired = Rc::new(Cell::new(false));
        let _subscription = store.subscribe(move |toasts: &[Toast]| {
            sink.borrow_mut().push(toasts.len());
            if !fired.get() {
                fired.set(true);
                inner_store.toast(ToastOptions::titled("follow-up"));
            }
        });

        store.toast(ToastOptions::titled("first"));

        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn dismiss_from_listener_applies_after_queued_add() {
        let (store, clock) = store_with_limit(3);
        let inner_store = store.clone();
        let fired = Rc::new(Cell::new(false));
        let closes = Rc::new(Cell::new(0));
        let close_counter = Rc::clone(&closes);
        let _subscription = store.subscribe(move |_: &[Toast]| {
            if fired.replace(true) {
                return;
            }
            let counter = Rc::clone(&close_counter);
            inner_store
                .toast(
                    ToastOptions::titled("follow-up")
                        .on_open_change(move |open| {
                            if !open {
                                counter.set(counter.get() + 1);
                            }
                        }),
                )
                .dismiss();
        });

        store.toast(ToastOptions::titled("first"));

        let follow_up = &store.toasts()[0];
        assert_eq!(follow_up.title.as_deref(), Some("follow-up"));
        assert!(!follow_up.open);
        assert_eq!(store.pending_removals(), 1);
        assert_eq!(closes.get(), 1);

        clock.advance(DELAY);
        assert_eq!(store.tick(), 1);
        let titles: Vec<Option<String>> = store.toasts().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec![Some("first".to_string())]);
    }

    #[test]
    fn open_change_callback_sees_closed_state() {
        let (store, _) = store_with_limit(1);
        let observed = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&observed);
        let reader = store.clone();
        let id_cell = Rc::new(Cell::new(None));
        let id_for_callback = Rc::clone(&id_cell);
        let handle = store.toast(ToastOptions::titled("watched").on_open_change(move |open| {
            let listed = id_for_callback
                .get()
                .and_then(|id| reader.get(id))
                .map(|toast| toast.open);
            log.borrow_mut().push((open, listed));
        }));
        id_cell.set(Some(handle.id()));

        handle.dismiss();

        assert_eq!(*observed.borrow(), vec![(false, Some(false))]);
    }

    #[test]
    fn update_reopening_a_closing_toast_cancels_removal() {
        let (store, clock) = store_with_limit(1);
        let handle = store.toast(ToastOptions::titled("X"));
        handle.dismiss();

        store.update(handle.id(), ToastPatch::new().open(true));
        clock.advance(DELAY * 2);

        assert_eq!(store.tick(), 0);
        assert!(store.get(handle.id()).expect("toast kept").open);
        assert_eq!(store.pending_removals(), 0);
    }

    #[test]
    fn update_closing_a_toast_schedules_removal() {
        let (store, clock) = store_with_limit(1);
        let closes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&closes);
        let handle = store.toast(ToastOptions::titled("X").on_open_change(move |open| {
            if !open {
                counter.set(counter.get() + 1);
            }
        }));

        store.update(handle.id(), ToastPatch::new().title("Y").open(false));

        let toast = store.get(handle.id()).expect("toast listed");
        assert_eq!(toast.title.as_deref(), Some("Y"));
        assert!(!toast.open);
        assert_eq!(store.pending_removals(), 1);
        assert_eq!(closes.get(), 1);

        clock.advance(DELAY);
        store.tick();
        assert!(store.is_empty());
    }

    #[test]
    fn unrepresentable_delay_keeps_toast_closed_without_panicking() {
        let clock = Rc::new(ManualClock::new());
        let store = ToastStore::with_clock(StoreConfig::new(1, Duration::MAX), clock.clone());
        let handle = store.toast(ToastOptions::titled("forever"));

        handle.dismiss();

        assert!(!store.get(handle.id()).expect("toast listed").open);
        assert_eq!(store.pending_removals(), 0);
        store.remove(handle.id());
        assert!(store.is_empty());
    }

    #[test]
    fn reset_clears_toasts_and_timers_but_keeps_listeners() {
        let (store, _) = store_with_limit(2);
        let last_len = Rc::new(Cell::new(usize::MAX));
        let sink = Rc::clone(&last_len);
        let _subscription = store.subscribe(move |toasts: &[Toast]| sink.set(toasts.len()));
        let handle = store.toast(ToastOptions::titled("before"));
        handle.dismiss();

        store.reset();

        assert!(store.is_empty());
        assert_eq!(store.pending_removals(), 0);
        assert_eq!(last_len.get(), 0);
        assert_eq!(store.listener_count(), 1);

        let next = store.toast(ToastOptions::titled("after"));
        assert!(next.id() > handle.id());
    }

    #[test]
    fn handle_outliving_store_is_inert() {
        let handle = {
            let (store, _) = store_with_limit(1);
            store.toast(ToastOptions::titled("orphan"))
        };
        handle.dismiss();
        handle.update(ToastPatch::new().title("still nothing"));
    }
}
