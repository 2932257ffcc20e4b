// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts are transient, non-blocking notifications. A [`ToastStore`] holds
//! the ordered list of active toasts; any code holding a clone of the store
//! can enqueue, update or dismiss toasts, and every subscriber sees the same
//! list.
//!
//! # Components
//!
//! - [`toast`] - `Toast` record, creation options and update patches
//! - [`reducer`] - Pure state transitions over the toast list
//! - [`store`] - `ToastStore` with subscriptions and removal timers
//! - [`clock`] - Time sources driving removal timers
//! - [`toaster`] - `Toaster` view rendering open toasts
//!
//! # Usage
//!
//! ```
//! use pet_manager::ui::notifications::{StoreConfig, ToastOptions, ToastStore};
//!
//! let store = ToastStore::new(StoreConfig::default());
//! let handle = store.toast(ToastOptions::titled("Pet saved"));
//! assert_eq!(store.len(), 1);
//!
//! // Closed now, removed once the removal delay has passed and `tick` runs.
//! handle.dismiss();
//! assert!(!store.toasts()[0].open);
//! ```
//!
//! # Lifecycle
//!
//! `open` → closing (`open == false`, removal scheduled) → removed.
//! Inserting past the limit evicts the oldest toast right away.

pub mod clock;
pub mod reducer;
pub mod store;
pub mod toast;
pub mod toaster;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::{ListenerId, StoreConfig, ToastHandle, ToastStore, Unsubscribe};
pub use toast::{OpenChange, Toast, ToastAction, ToastId, ToastOptions, ToastPatch, Variant};
pub use toaster::{Message as ToasterMessage, Toaster};
