// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record held by the store, the options used
//! to create one and the patch used to update one. Display content is opaque
//! to the store: nothing here is validated or interpreted.

use std::fmt;
use std::rc::Rc;

/// Unique identifier for a toast.
///
/// Identifiers come from a per-store monotonic counter and are never reused
/// by that store. The display form is the decimal counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation variant, forwarded untouched to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    /// Errors and irreversible operations (red accent).
    Destructive,
}

/// Interactive affordance attached to a toast, e.g. an "Undo" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    label: String,
    alt_text: Option<String>,
}

impl ToastAction {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            alt_text: None,
        }
    }

    /// Sets the accessible description of the action.
    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }
}

/// Callback invoked with the new `open` value whenever the store changes it.
pub type OpenChange = Rc<dyn Fn(bool)>;

/// A notification record held by the store.
#[derive(Clone)]
pub struct Toast {
    pub id: ToastId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: Variant,
    pub action: Option<ToastAction>,
    /// `true` while visible, `false` while closing.
    pub open: bool,
    pub on_open_change: Option<OpenChange>,
}

impl Toast {
    /// Builds an open toast from creation options.
    pub(crate) fn from_options(id: ToastId, options: ToastOptions) -> Self {
        Self {
            id,
            title: options.title,
            description: options.description,
            variant: options.variant,
            action: options.action,
            open: true,
            on_open_change: options.on_open_change,
        }
    }

    /// Shallow-merges the fields present in `patch`. The id is never changed.
    pub(crate) fn apply(&mut self, patch: ToastPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(variant) = patch.variant {
            self.variant = variant;
        }
        if let Some(action) = patch.action {
            self.action = Some(action);
        }
        if let Some(open) = patch.open {
            self.open = open;
        }
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("variant", &self.variant)
            .field("action", &self.action)
            .field("open", &self.open)
            .field("on_open_change", &self.on_open_change.is_some())
            .finish()
    }
}

/// Options accepted by [`ToastStore::toast`](super::ToastStore::toast).
#[derive(Default, Clone)]
pub struct ToastOptions {
    title: Option<String>,
    description: Option<String>,
    variant: Variant,
    action: Option<ToastAction>,
    on_open_change: Option<OpenChange>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for options carrying only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new().title(title)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn destructive(self) -> Self {
        self.variant(Variant::Destructive)
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn on_open_change(mut self, callback: impl Fn(bool) + 'static) -> Self {
        self.on_open_change = Some(Rc::new(callback));
        self
    }
}

impl fmt::Debug for ToastOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastOptions")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("variant", &self.variant)
            .field("action", &self.action)
            .field("on_open_change", &self.on_open_change.is_some())
            .finish()
    }
}

/// Partial toast record for `Update`. Only fields that are `Some` are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: Option<Variant>,
    pub action: Option<ToastAction>,
    /// Applied through `ToastStore::set_open`, so closing schedules removal
    /// and reopening cancels it.
    pub open: Option<bool>,
}

impl ToastPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Returns whether the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
