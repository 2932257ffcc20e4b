// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Users,
    Sales,
}

impl Screen {
    /// Heading shown at the top of the page.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Users => "System users",
            Screen::Sales => "Sales",
        }
    }
}

/// Pages shown before signing in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScreen {
    #[default]
    Login,
    Register,
    ForgotPassword,
}

impl AuthScreen {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            AuthScreen::Login => "Log in",
            AuthScreen::Register => "Create account",
            AuthScreen::ForgotPassword => "Reset password",
        }
    }
}
