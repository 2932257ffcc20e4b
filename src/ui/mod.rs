// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`data_table`] - Tabular listing with loading and empty states
//! - [`notifications`] - Toast store and the toaster view
//! - [`sidebar`] - Navigation drawer state and view
//! - [`viewport`] - Mobile and drawer breakpoint tracking
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod data_table;
pub mod design_tokens;
pub mod notifications;
pub mod sidebar;
pub mod viewport;
