// SPDX-License-Identifier: MPL-2.0
//! `pet_manager` is the Pet Manager back-office shell built with the Iced GUI framework.
//!
//! Its core is the toast notification store in [`ui::notifications`]: a
//! size-capped list of notifications mutated by a reducer, with deferred
//! removal and synchronous change listeners. The [`app`] module wires the store
//! into a small admin shell (dashboard, users, sales) backed by mock data.

pub mod app;
pub mod error;
pub mod ui;
