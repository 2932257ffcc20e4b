// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::forms::{
    ForgotPasswordMessage, LoginMessage, RegisterMessage, SaleFormMessage, UserFormMessage,
};
use super::mock::Sale;
use super::AuthScreen;
use crate::ui::notifications::ToasterMessage;
use crate::ui::sidebar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    Toaster(ToasterMessage),
    // Authentication
    Login(LoginMessage),
    Register(RegisterMessage),
    ForgotPassword(ForgotPasswordMessage),
    ShowAuth(AuthScreen),
    SignOut,
    /// Dashboard button that shows a sample toast.
    SendTestToast,
    // Users page
    OpenUserForm,
    UserForm(UserFormMessage),
    DeleteUser(u32),
    // Sales page
    SalesLoaded(Vec<Sale>),
    SalesSearchChanged(String),
    SaleSelected(u32),
    OpenSaleForm,
    SaleForm(SaleFormMessage),
    ExportSales,
    WindowResized(f32),
    EscapePressed,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (from `--config-dir`).
    pub config_dir: Option<String>,
    /// Optional toast limit, taking precedence over `settings.toml`.
    pub toast_limit: Option<usize>,
}
