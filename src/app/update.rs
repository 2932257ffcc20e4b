// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::forms::{
    Event as FormEvent, ForgotPasswordMessage, LoginForm, LoginMessage, RegisterForm,
    RegisterMessage, SaleForm, SaleFormMessage, UserForm, UserFormMessage,
};
use super::mock::SalesLedger;
use super::{App, AuthScreen, Message, Screen};
use crate::ui::notifications::{ToastId, ToastOptions, ToasterMessage};
use crate::ui::sidebar::{self, Event as SidebarEvent};
use iced::Task;

/// Applies `message` to the application state.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Sidebar(message) => handle_sidebar_message(app, message),
        Message::Toaster(message) => handle_toaster_message(app, message),
        Message::Login(message) => handle_login(app, message),
        Message::Register(message) => handle_register(app, message),
        Message::ForgotPassword(message) => handle_forgot_password(app, message),
        Message::ShowAuth(screen) => {
            if screen == AuthScreen::ForgotPassword {
                app.forgot_password = Default::default();
            }
            app.auth_screen = screen;
        }
        Message::SignOut => sign_out(app),
        Message::SendTestToast => {
            app.toasts.toast(
                ToastOptions::titled("Test notification")
                    .description("Notifications appear here and close on their own.")
                    .on_open_change(|open| tracing::debug!(open, "test toast open state changed")),
            );
        }
        Message::OpenUserForm => app.user_form = Some(UserForm::default()),
        Message::UserForm(message) => handle_user_form(app, message),
        Message::DeleteUser(id) => handle_delete_user(app, id),
        Message::SalesLoaded(sales) => {
            tracing::debug!(count = sales.len(), "sales loaded");
            app.sales = SalesLedger::new(sales);
            app.sales_loading = false;
        }
        Message::SalesSearchChanged(query) => app.sales_query = query,
        Message::SaleSelected(id) => show_sale(app, id),
        Message::OpenSaleForm => app.sale_form = Some(SaleForm::default()),
        Message::SaleForm(message) => handle_sale_form(app, message),
        Message::ExportSales => {
            let count = app.visible_sales().count();
            tracing::info!(count, "exporting sales");
            app.toasts.toast(
                ToastOptions::titled("Export started")
                    .description(format!("{count} sales will be exported.")),
            );
        }
        Message::WindowResized(width) => {
            if app.viewport.resize(width) {
                tracing::debug!(
                    width,
                    mobile = app.viewport.is_mobile(),
                    drawer = app.viewport.is_drawer(),
                    "viewport changed"
                );
            }
        }
        Message::EscapePressed => {
            if app.sale_form.take().is_none() {
                app.sidebar.close();
            }
        }
    }

    forget_stale_undos(app);
    Task::none()
}

fn handle_sidebar_message(app: &mut App, message: sidebar::Message) {
    match app.sidebar.update(message, app.viewport.is_drawer()) {
        SidebarEvent::Navigate(screen) => {
            app.user_form = None;
            app.sale_form = None;
            app.screen = screen;
        }
        SidebarEvent::None => {}
    }
}

fn handle_toaster_message(app: &mut App, message: ToasterMessage) {
    if let ToasterMessage::Action(id) = message {
        undo_delete(app, id);
        app.toasts.dismiss(id);
        return;
    }
    app.toasts.handle_message(&message);
}

fn handle_login(app: &mut App, message: LoginMessage) {
    if let FormEvent::Submitted(username) = app.login.update(message) {
        tracing::info!(%username, "signed in");
        app.toasts.toast(ToastOptions::titled(format!("Welcome, {username}")));
        app.session = Some(username);
        app.screen = Screen::Dashboard;
    }
}

fn handle_register(app: &mut App, message: RegisterMessage) {
    if let FormEvent::Submitted(account) = app.register.update(message) {
        tracing::info!(username = %account.username, "account registered");
        app.toasts.toast(
            ToastOptions::titled("Account created")
                .description(format!("Log in as {} to continue.", account.username)),
        );
        app.login = LoginForm::with_username(account.username);
        app.register = RegisterForm::default();
        app.auth_screen = AuthScreen::Login;
    }
}

fn handle_forgot_password(app: &mut App, message: ForgotPasswordMessage) {
    if let FormEvent::Submitted(email) = app.forgot_password.update(message) {
        tracing::info!(%email, "password reset requested");
    }
}

fn sign_out(app: &mut App) {
    if let Some(username) = app.session.take() {
        tracing::info!(%username, "signed out");
    }
    app.user_form = None;
    app.sale_form = None;
    app.screen = Screen::Dashboard;
    app.auth_screen = AuthScreen::Login;
    app.login = LoginForm::default();
}

fn handle_user_form(app: &mut App, message: UserFormMessage) {
    let Some(form) = app.user_form.as_mut() else {
        tracing::trace!("user form message without an open form");
        return;
    };
    match form.update(message) {
        FormEvent::Submitted(draft) => {
            let user = app.users.add(draft);
            tracing::debug!(user_id = user.id, "user created");
            app.toasts.toast(
                ToastOptions::titled("User created")
                    .description(format!("{} was added.", user.name)),
            );
            app.user_form = None;
        }
        FormEvent::Cancelled => app.user_form = None,
        FormEvent::None => {}
    }
}

fn handle_sale_form(app: &mut App, message: SaleFormMessage) {
    let Some(form) = app.sale_form.as_mut() else {
        tracing::trace!("sale form message without an open form");
        return;
    };
    match form.update(message) {
        FormEvent::Submitted(draft) => {
            let sale = app.sales.add(draft);
            tracing::debug!(sale_id = sale.id, "sale recorded");
            app.toasts.toast(
                ToastOptions::titled("Sale recorded")
                    .description(format!("#{} {}, {}", sale.id, sale.customer, sale.amount())),
            );
            app.sale_form = None;
        }
        FormEvent::Cancelled => app.sale_form = None,
        FormEvent::None => {}
    }
}

fn show_sale(app: &mut App, id: u32) {
    let Some(sale) = app.sales.get(id) else {
        tracing::trace!(sale_id = id, "selection ignored for unknown sale");
        return;
    };
    app.toasts.toast(
        ToastOptions::titled(format!("Sale #{}", sale.id)).description(format!(
            "{}, {} on {} ({})",
            sale.customer,
            sale.amount(),
            sale.date,
            sale.status
        )),
    );
}

fn handle_delete_user(app: &mut App, id: u32) {
    let Some((index, user)) = app.users.remove(id) else {
        tracing::trace!(user_id = id, "delete ignored for unknown user");
        return;
    };

    let handle = app.toasts.toast(
        ToastOptions::titled("User deleted")
            .description(format!("{} was removed.", user.name))
            .destructive()
            .action(App::undo_action()),
    );
    app.pending_undo.insert(handle.id(), (index, user));
}

fn undo_delete(app: &mut App, toast: ToastId) {
    if let Some((index, user)) = app.pending_undo.remove(&toast) {
        tracing::debug!(user_id = user.id, "user restored");
        app.users.restore(index, user);
    }
}

/// Drops undo entries whose toast is closed or gone.
fn forget_stale_undos(app: &mut App) {
    let toasts = &app.toasts;
    app.pending_undo
        .retain(|id, _| toasts.get(*id).is_some_and(|toast| toast.open));
}
