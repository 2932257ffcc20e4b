// SPDX-License-Identifier: MPL-2.0
//! Application root state for the Pet Manager back-office.
//!
//! The `App` struct wires together the sign-in pages, the shell (sidebar,
//! viewport, pages, forms) and the toast store, and translates messages into
//! store operations. Business data lives in memory only (see [`mock`]).

pub mod config;
pub mod forms;
mod message;
pub mod mock;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{AuthScreen, Screen};

use crate::ui::notifications::{ToastAction, ToastId, ToastOptions, ToastStore};
use crate::ui::sidebar;
use crate::ui::viewport::Viewport;
use forms::{ForgotPasswordForm, LoginForm, RegisterForm, SaleForm, UserForm};
use iced::{window, Element, Subscription, Task, Theme};
use mock::{Sale, SalesLedger, User, UserDirectory};
use std::collections::HashMap;
use std::fmt;

/// Root Iced application state.
pub struct App {
    /// Signed-in username; `None` shows the authentication pages.
    session: Option<String>,
    auth_screen: AuthScreen,
    login: LoginForm,
    register: RegisterForm,
    forgot_password: ForgotPasswordForm,
    screen: Screen,
    sidebar: sidebar::State,
    viewport: Viewport,
    /// Shared toast store; pages and the toaster view hold clones of it.
    toasts: ToastStore,
    users: UserDirectory,
    /// Open "New user" page, replacing the user table while present.
    user_form: Option<UserForm>,
    sales: SalesLedger,
    sales_loading: bool,
    sales_query: String,
    /// Open "New sale" modal.
    sale_form: Option<SaleForm>,
    /// Users deleted behind an "Undo" toast, keyed by that toast.
    pending_undo: HashMap<ToastId, (usize, User)>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("screen", &self.screen)
            .field("sidebar_open", &self.sidebar.is_open())
            .field("toasts", &self.toasts.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_store(ToastStore::default(), true)
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let mut store_config = config.store_config();
        if let Some(limit) = flags.toast_limit {
            store_config.limit = config::clamp_toast_limit(limit);
        }
        tracing::info!(
            limit = store_config.limit,
            remove_delay_ms = store_config.remove_delay.as_millis() as u64,
            "starting Pet Manager"
        );

        let app = Self::with_store(ToastStore::new(store_config), config.sidebar_open());

        if let Some(warning) = config_warning {
            app.toasts.toast(
                ToastOptions::titled("Settings not loaded")
                    .description(warning)
                    .destructive(),
            );
        }

        (app, Self::load_sales())
    }

    /// Fetches the sales list; the table shows its loading state until it arrives.
    fn load_sales() -> Task<Message> {
        Task::perform(mock::fetch_sales(), Message::SalesLoaded)
    }

    /// Builds the shell around an existing store, signed out and with sales
    /// not loaded yet.
    pub fn with_store(toasts: ToastStore, sidebar_open: bool) -> Self {
        Self {
            session: None,
            auth_screen: AuthScreen::default(),
            login: LoginForm::default(),
            register: RegisterForm::default(),
            forgot_password: ForgotPasswordForm::default(),
            screen: Screen::default(),
            sidebar: sidebar::State::new(sidebar_open),
            viewport: Viewport::new(WINDOW_DEFAULT_WIDTH as f32),
            toasts,
            users: UserDirectory::default(),
            user_form: None,
            sales: SalesLedger::default(),
            sales_loading: true,
            sales_query: String::new(),
            sale_form: None,
            pending_undo: HashMap::new(),
        }
    }

    fn title(&self) -> String {
        let page = match self.session {
            Some(_) => self.screen.title(),
            None => self.auth_screen.title(),
        };
        format!("{page} - Pet Manager")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            session: self.session.as_deref(),
            auth: view::AuthContext {
                screen: self.auth_screen,
                login: &self.login,
                register: &self.register,
                forgot_password: &self.forgot_password,
            },
            screen: self.screen,
            sidebar: &self.sidebar,
            viewport: &self.viewport,
            toasts: &self.toasts,
            users: &self.users,
            user_form: self.user_form.as_ref(),
            sales: &self.sales,
            sales_loading: self.sales_loading,
            sales_query: &self.sales_query,
            sale_form: self.sale_form.as_ref(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![subscription::create_event_subscription()];
        if self.toasts.has_pending_removals() {
            subscriptions.push(subscription::create_tick_subscription());
        }
        Subscription::batch(subscriptions)
    }

    #[must_use]
    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    #[must_use]
    pub fn auth_screen(&self) -> AuthScreen {
        self.auth_screen
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn sidebar(&self) -> &sidebar::State {
        &self.sidebar
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastStore {
        &self.toasts
    }

    #[must_use]
    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    #[must_use]
    pub fn user_form(&self) -> Option<&UserForm> {
        self.user_form.as_ref()
    }

    #[must_use]
    pub fn sale_form(&self) -> Option<&SaleForm> {
        self.sale_form.as_ref()
    }

    #[must_use]
    pub fn sales_loading(&self) -> bool {
        self.sales_loading
    }

    #[must_use]
    pub fn forgot_password(&self) -> &ForgotPasswordForm {
        &self.forgot_password
    }

    #[must_use]
    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    /// Sales matching the current search query.
    pub fn visible_sales(&self) -> impl Iterator<Item = &Sale> {
        self.sales.filter(&self.sales_query)
    }

    fn undo_action() -> ToastAction {
        ToastAction::new("Undo").with_alt_text("Restore the deleted user")
    }
}
