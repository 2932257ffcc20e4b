// SPDX-License-Identifier: MPL-2.0
//! Pure state transitions for the toast list.
//!
//! Every mutation of the list goes through [`reduce`]. Side effects (removal
//! timers, open-change callbacks, listener notification) live in the store.

use super::toast::{Toast, ToastId, ToastPatch};

/// Toast list, newest first.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub toasts: Vec<Toast>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }
}

/// Actions accepted by the reducer.
#[derive(Debug, Clone)]
pub enum Action {
    /// Prepend a toast and truncate the list to the limit.
    Add(Toast),
    /// Shallow-merge a patch into the toast with this id.
    Update(ToastId, ToastPatch),
    /// Close one toast, or every toast when `None`.
    Dismiss(Option<ToastId>),
    /// Remove one toast, or every toast when `None`.
    Remove(Option<ToastId>),
}

impl Action {
    /// Short name used in log records.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Add(_) => "add",
            Action::Update(..) => "update",
            Action::Dismiss(_) => "dismiss",
            Action::Remove(_) => "remove",
        }
    }
}

/// Applies `action` to `state`, keeping at most `limit` toasts.
///
/// Unknown ids leave the state unchanged.
#[must_use]
pub fn reduce(mut state: State, action: Action, limit: usize) -> State {
    match action {
        Action::Add(toast) => {
            state.toasts.insert(0, toast);
            state.toasts.truncate(limit);
        }
        Action::Update(id, patch) => {
            if let Some(toast) = state.toasts.iter_mut().find(|toast| toast.id == id) {
                toast.apply(patch);
            }
        }
        Action::Dismiss(target) => {
            for toast in &mut state.toasts {
                if target.is_none_or(|id| id == toast.id) {
                    toast.open = false;
                }
            }
        }
        Action::Remove(Some(id)) => state.toasts.retain(|toast| toast.id != id),
        Action::Remove(None) => state.toasts.clear(),
    }
    state
}
