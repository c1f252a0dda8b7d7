use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{Alignment, Color, Element, Length};

use crate::form::Field;
use crate::signup::{self, SignupPanel};
use crate::validation::ErrorCode;

use super::{App, Message, Notice, Screen};

const WARNING: Color = Color {
    r: 0.80,
    g: 0.23,
    b: 0.23,
    a: 1.0,
};
const SUCCESS: Color = Color {
    r: 0.18,
    g: 0.55,
    b: 0.34,
    a: 1.0,
};

pub fn app_view(app: &App) -> Element<'_, Message> {
    let mut content = Column::new().spacing(10).padding(20).max_width(500);
    for (index, notice) in app.banners.iter().enumerate() {
        content = content.push(banner(index, notice));
    }
    content = content.push(match app.screen {
        Screen::Signup => signup_view(&app.panel).map(Message::Signup),
        Screen::Login => login_placeholder(),
    });

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn banner(index: usize, notice: &Notice) -> Element<'_, Message> {
    let (color, message) = match notice {
        Notice::Success(text) => (SUCCESS, text),
        Notice::Error(text) => (WARNING, text),
    };
    Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(text(message.as_str()).color(color))
        .push(button(text("Dismiss").size(12)).on_press(Message::DismissNotice(index)))
        .into()
}

fn login_placeholder<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(10)
        .push(text("Log in").size(24))
        .push(text(
            "Your account is ready. This is where the login screen takes over.",
        ))
        .into()
}

fn signup_view(panel: &SignupPanel) -> Element<'_, signup::Message> {
    let form = &panel.form;
    Column::new()
        .spacing(10)
        .push(text("Create your account").size(24))
        .push(
            text_input("Email", &form.email)
                .on_input(|value| signup::Message::FieldEdited(Field::Email, value))
                .padding(10),
        )
        .push_maybe(form.email_error.map(caption))
        .push(
            text_input("Password", &form.password)
                .secure(true)
                .on_input(|value| signup::Message::FieldEdited(Field::Password, value))
                .padding(10),
        )
        .push_maybe(form.password_error.map(caption))
        .push(
            text_input("Confirm password", &form.password_confirm)
                .secure(true)
                .on_input(|value| signup::Message::FieldEdited(Field::PasswordConfirm, value))
                .padding(10),
        )
        .push_maybe(form.password_confirm_error.map(caption))
        .push_maybe(form.mismatch.map(caption))
        .push(
            Row::new()
                .spacing(10)
                .align_y(Alignment::Center)
                .push(
                    button(text("Create account"))
                        .padding(10)
                        .on_press_maybe(panel.can_submit().then_some(signup::Message::Submit)),
                )
                .push_maybe(
                    panel
                        .is_submitting()
                        .then(|| text("Creating account...").size(14)),
                ),
        )
        .into()
}

fn caption(code: ErrorCode) -> Element<'static, signup::Message> {
    text(code.to_string()).size(12).color(WARNING).into()
}
