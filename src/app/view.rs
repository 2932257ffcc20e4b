// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Signed out, the window shows one of the authentication cards. Signed in,
//! the shell is a stack of layers: header and page, the sidebar drawer with
//! its backdrop on narrow windows, the "New sale" modal, and the toast
//! overlay on top.

use super::forms::{
    Errors, ForgotPasswordForm, ForgotPasswordMessage, LoginForm, LoginMessage, RegisterForm,
    RegisterMessage, SaleForm, SaleFormMessage, UserForm, UserFormMessage,
};
use super::mock::{self, Role, SaleStatus, SalesLedger, UserDirectory};
use super::{AuthScreen, Message, Screen};
use crate::ui::data_table::{Cell, DataTable, TableRow};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::notifications::{ToastStore, Toaster};
use crate::ui::sidebar::{self, State as SidebarState, ViewContext as SidebarViewContext};
use crate::ui::viewport::Viewport;
use iced::widget::{
    button, center, container, opaque, pick_list, scrollable, text_input, Button, Column,
    Container, Row, Space, Stack, Text,
};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Forms shown while signed out.
pub struct AuthContext<'a> {
    pub screen: AuthScreen,
    pub login: &'a LoginForm,
    pub register: &'a RegisterForm,
    pub forgot_password: &'a ForgotPasswordForm,
}

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub session: Option<&'a str>,
    pub auth: AuthContext<'a>,
    pub screen: Screen,
    pub sidebar: &'a SidebarState,
    pub viewport: &'a Viewport,
    pub toasts: &'a ToastStore,
    pub users: &'a UserDirectory,
    pub user_form: Option<&'a UserForm>,
    pub sales: &'a SalesLedger,
    pub sales_loading: bool,
    pub sales_query: &'a str,
    pub sale_form: Option<&'a SaleForm>,
}

/// Renders the authentication pages or the shell around the active page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toaster = Toaster::view_overlay(ctx.toasts).map(Message::Toaster);

    let Some(username) = ctx.session else {
        return Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(view_auth(ctx.auth))
            .push(toaster)
            .into();
    };

    let is_drawer = ctx.viewport.is_drawer();
    let sidebar_ctx = SidebarViewContext {
        current: ctx.screen,
        is_drawer,
    };

    let (title, page) = match (ctx.screen, ctx.user_form) {
        (Screen::Dashboard, _) => (ctx.screen.title(), view_dashboard(ctx.viewport.is_mobile())),
        (Screen::Users, Some(form)) => ("New user", view_user_form(form)),
        (Screen::Users, None) => (ctx.screen.title(), view_users(ctx.users)),
        (Screen::Sales, _) => (
            ctx.screen.title(),
            view_sales(ctx.sales, ctx.sales_loading, ctx.sales_query),
        ),
    };

    let page = Container::new(scrollable(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(Text::new(title).size(typography::TITLE_LG))
            .push(page),
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    let mut body = Row::new().height(Length::Fill);
    if ctx.sidebar.is_open() && !is_drawer {
        body = body.push(sidebar::view(sidebar_ctx).map(Message::Sidebar));
    }
    body = body.push(page);

    let shell = Column::new().push(view_header(username)).push(body);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(shell);

    if ctx.sidebar.is_open() && is_drawer {
        let drawer = Row::new()
            .push(sidebar::view(sidebar_ctx))
            .push(sidebar::backdrop());
        layers = layers.push(Element::from(drawer).map(Message::Sidebar));
    }

    if let Some(form) = ctx.sale_form {
        layers = layers.push(view_sale_modal(form));
    }

    layers.push(toaster).into()
}

fn view_header(username: &str) -> Element<'_, Message> {
    let toggle = button(Text::new("☰").size(typography::TITLE_MD))
        .on_press(Message::Sidebar(sidebar::Message::Toggle))
        .padding([spacing::XXS, spacing::XS])
        .style(button::text);

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(toggle)
            .push(Text::new("Pet Manager").size(typography::TITLE_MD))
            .push(Space::new().width(Length::Fill))
            .push(
                Text::new(username)
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_400),
            )
            .push(link("Sign out", Message::SignOut)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HEADER_HEIGHT))
    .padding([0.0, spacing::MD])
    .align_y(alignment::Vertical::Center)
    .style(header_style)
    .into()
}

// =============================================================================
// Authentication
// =============================================================================

fn view_auth(ctx: AuthContext<'_>) -> Element<'_, Message> {
    let form = match ctx.screen {
        AuthScreen::Login => view_login(ctx.login),
        AuthScreen::Register => view_register(ctx.register),
        AuthScreen::ForgotPassword => view_forgot_password(ctx.forgot_password),
    };

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new("Pet Manager").size(typography::TITLE_LG))
            .push(Text::new(ctx.screen.title()).size(typography::TITLE_MD))
            .push(form),
    )
    .padding(spacing::XL)
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .style(card_style);

    scrollable(
        Container::new(card)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn view_login(form: &LoginForm) -> Element<'_, Message> {
    let errors = form.errors();
    Column::new()
        .spacing(spacing::SM)
        .push(field("Username", "Username", &form.username, errors, |value| {
            Message::Login(LoginMessage::UsernameChanged(value))
        }))
        .push(secret_field("Password", &form.password, errors, |value| {
            Message::Login(LoginMessage::PasswordChanged(value))
        }))
        .push(primary_button("Log in", Message::Login(LoginMessage::Submit)).width(Length::Fill))
        .push(link(
            "Forgot the password?",
            Message::ShowAuth(AuthScreen::ForgotPassword),
        ))
        .push(link(
            "Create new account",
            Message::ShowAuth(AuthScreen::Register),
        ))
        .into()
}

fn view_register(form: &RegisterForm) -> Element<'_, Message> {
    let errors = form.errors();

    Column::new()
        .spacing(spacing::SM)
        .push(field(
            "Username",
            "Username",
            &form.username,
            errors,
            on_register(RegisterMessage::UsernameChanged),
        ))
        .push(field(
            "Name",
            "Full name",
            &form.name,
            errors,
            on_register(RegisterMessage::NameChanged),
        ))
        .push(secret_field(
            "Password",
            &form.password,
            errors,
            on_register(RegisterMessage::PasswordChanged),
        ))
        .push(secret_field(
            "Confirm password",
            &form.confirm_password,
            errors,
            on_register(RegisterMessage::ConfirmPasswordChanged),
        ))
        .push(field(
            "Email",
            "name@example.com",
            &form.email,
            errors,
            on_register(RegisterMessage::EmailChanged),
        ))
        .push(field(
            "Phone",
            "Phone",
            &form.phone,
            errors,
            on_register(RegisterMessage::PhoneChanged),
        ))
        .push(field(
            "ID",
            "ID number",
            &form.id_number,
            errors,
            on_register(RegisterMessage::IdNumberChanged),
        ))
        .push(field(
            "Address",
            "Address",
            &form.address,
            errors,
            on_register(RegisterMessage::AddressChanged),
        ))
        .push(
            primary_button("Register", Message::Register(RegisterMessage::Submit))
                .width(Length::Fill),
        )
        .push(link(
            "Already have an account? Log in",
            Message::ShowAuth(AuthScreen::Login),
        ))
        .into()
}

fn on_register(wrap: fn(String) -> RegisterMessage) -> impl Fn(String) -> Message {
    move |value| Message::Register(wrap(value))
}

fn view_forgot_password(form: &ForgotPasswordForm) -> Element<'_, Message> {
    let back = link("Back to log in", Message::ShowAuth(AuthScreen::Login));

    if let Some(email) = form.sent_to() {
        return Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(format!(
                    "An email was sent to {email} with instructions to reset your password."
                ))
                .size(typography::BODY),
            )
            .push(back)
            .into();
    }

    Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new("Enter your email and we will send you reset instructions.")
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        )
        .push(field(
            "Email",
            "name@example.com",
            &form.email,
            form.errors(),
            |value| Message::ForgotPassword(ForgotPasswordMessage::EmailChanged(value)),
        ))
        .push(
            primary_button("Send", Message::ForgotPassword(ForgotPasswordMessage::Submit))
                .width(Length::Fill),
        )
        .push(back)
        .into()
}

// =============================================================================
// Pages
// =============================================================================

fn view_dashboard<'a>(is_mobile: bool) -> Element<'a, Message> {
    let cards = mock::DASHBOARD_STATS.iter().map(|stat| {
        Element::from(card(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(stat.label).size(typography::BODY_SM))
                .push(Text::new(stat.value).size(typography::TITLE_MD)),
        ))
    });
    let stats: Element<'a, Message> = if is_mobile {
        Column::with_children(cards).spacing(spacing::SM).into()
    } else {
        Row::with_children(cards).spacing(spacing::MD).into()
    };

    let activity = mock::RECENT_ACTIVITY.iter().fold(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new("Recent activity").size(typography::TITLE_MD)),
        |column, entry| column.push(Text::new(*entry).size(typography::BODY)),
    );

    Column::new()
        .spacing(spacing::LG)
        .push(stats)
        .push(card(activity))
        .push(primary_button("Send test notification", Message::SendTestToast))
        .into()
}

fn view_users(users: &UserDirectory) -> Element<'_, Message> {
    let toolbar = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(format!("{} users", users.len())).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(primary_button("New user", Message::OpenUserForm));

    let table = DataTable::new(["Name", "Email", "Role", "Permissions"]).extend(
        users.users().iter().map(|user| {
            let delete = button(Text::new("Delete").size(typography::BODY_SM))
                .on_press(Message::DeleteUser(user.id))
                .padding([spacing::XXS, spacing::XS])
                .style(button::danger);
            TableRow::new([
                user.name.clone(),
                user.email.clone(),
                user.role.to_string(),
                user.permissions.clone(),
            ])
            .trailing(delete)
        }),
    );

    Column::new()
        .spacing(spacing::MD)
        .push(toolbar)
        .push(card(table.view()))
        .into()
}

fn view_user_form(form: &UserForm) -> Element<'_, Message> {
    let errors = form.errors();
    let role = pick_list(Role::ALL, form.role, |role| {
        Message::UserForm(UserFormMessage::RoleSelected(role))
    })
    .placeholder("Select role")
    .padding(spacing::XS)
    .width(Length::Fill);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(primary_button("Save", Message::UserForm(UserFormMessage::Save)))
        .push(secondary_button(
            "Cancel",
            Message::UserForm(UserFormMessage::Cancel),
        ));

    card(
        Column::new()
            .spacing(spacing::SM)
            .max_width(sizing::FORM_WIDTH * 1.5)
            .push(field("Name", "Full name", &form.name, errors, |value| {
                Message::UserForm(UserFormMessage::NameChanged(value))
            }))
            .push(field(
                "Email",
                "name@example.com",
                &form.email,
                errors,
                |value| Message::UserForm(UserFormMessage::EmailChanged(value)),
            ))
            .push(labeled("Role", role, errors.get("Role")))
            .push(field(
                "Permissions",
                "read,write",
                &form.permissions,
                errors,
                |value| Message::UserForm(UserFormMessage::PermissionsChanged(value)),
            ))
            .push(actions),
    )
    .into()
}

fn view_sales<'a>(sales: &'a SalesLedger, loading: bool, query: &'a str) -> Element<'a, Message> {
    let toolbar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            text_input("Search sale...", query)
                .on_input(Message::SalesSearchChanged)
                .padding(spacing::XS)
                .width(Length::Fill),
        )
        .push(primary_button("New sale", Message::OpenSaleForm))
        .push(secondary_button("Export", Message::ExportSales));

    let table = DataTable::new(["ID", "Customer", "Date", "Amount", "Status"])
        .loading(loading)
        .extend(sales.filter(query).map(|sale| {
            TableRow::new([
                Cell::from(format!("#{}", sale.id)),
                Cell::from(sale.customer.clone()),
                Cell::from(sale.date.clone()),
                Cell::from(sale.amount()),
                Cell::colored(sale.status.to_string(), status_color(sale.status)),
            ])
            .on_press(Message::SaleSelected(sale.id))
        }));

    Column::new()
        .spacing(spacing::MD)
        .push(toolbar)
        .push(card(table.view()))
        .into()
}

fn view_sale_modal(form: &SaleForm) -> Element<'_, Message> {
    let errors = form.errors();
    let status = pick_list(SaleStatus::ALL, Some(form.status), |status| {
        Message::SaleForm(SaleFormMessage::StatusSelected(status))
    })
    .padding(spacing::XS)
    .width(Length::Fill);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(Space::new().width(Length::Fill))
        .push(secondary_button(
            "Cancel",
            Message::SaleForm(SaleFormMessage::Cancel),
        ))
        .push(primary_button("Save", Message::SaleForm(SaleFormMessage::Save)));

    let dialog = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new("New sale").size(typography::TITLE_MD))
            .push(field(
                "Customer",
                "Customer name",
                &form.customer,
                errors,
                |value| Message::SaleForm(SaleFormMessage::CustomerChanged(value)),
            ))
            .push(field("Date", "YYYY-MM-DD", &form.date, errors, |value| {
                Message::SaleForm(SaleFormMessage::DateChanged(value))
            }))
            .push(field("Amount", "120.50", &form.amount, errors, |value| {
                Message::SaleForm(SaleFormMessage::AmountChanged(value))
            }))
            .push(labeled("Status", status, None))
            .push(actions),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .style(modal_style);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop(Message::SaleForm(SaleFormMessage::Cancel)))
        .push(center(opaque(dialog)))
        .into()
}

fn status_color(status: SaleStatus) -> Color {
    match status {
        SaleStatus::Completed => palette::SUCCESS_500,
        SaleStatus::Pending => palette::WARNING_500,
        SaleStatus::Cancelled => palette::ERROR_500,
    }
}

// =============================================================================
// Building blocks
// =============================================================================

/// Text input with a label above and its validation error below.
fn field<'a>(
    label: &'static str,
    placeholder: &'static str,
    value: &'a str,
    errors: &Errors,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input(on_input)
        .padding(spacing::XS);
    labeled(label, input, errors.get(label))
}

fn secret_field<'a>(
    label: &'static str,
    value: &'a str,
    errors: &Errors,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let input = text_input(label, value)
        .on_input(on_input)
        .secure(true)
        .padding(spacing::XS);
    labeled(label, input, errors.get(label))
}

fn labeled<'a>(
    label: &'static str,
    input: impl Into<Element<'a, Message>>,
    error: Option<&'static str>,
) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(input);
    match error {
        Some(error) => column
            .push(
                Text::new(error)
                    .size(typography::BODY_SM)
                    .color(palette::ERROR_500),
            )
            .into(),
        None => column.into(),
    }
}

fn primary_button<'a>(label: &'a str, message: Message) -> Button<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .style(primary_button_style)
}

fn secondary_button<'a>(label: &'a str, message: Message) -> Button<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .style(button::secondary)
}

fn link<'a>(label: &'a str, message: Message) -> Button<'a, Message> {
    button(
        Text::new(label)
            .size(typography::BODY_SM)
            .color(palette::PRIMARY_500),
    )
    .on_press(message)
    .padding(0)
    .style(button::text)
}

/// Full-window translucent layer that publishes `message` when clicked.
fn backdrop<'a>(message: Message) -> Element<'a, Message> {
    button(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(0)
        .on_press(message)
        .style(|_theme: &Theme, _status: button::Status| button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            })),
            ..Default::default()
        })
        .into()
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(card_style)
}

fn primary_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::primary(theme, status);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::PRIMARY_500
        },
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..base
    }
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

fn modal_style(theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::MD,
        ..card_style(theme)
    }
}

fn header_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}
