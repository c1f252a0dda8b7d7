pub mod view;

use std::sync::{Arc, Mutex};

use iced::{Element, Task};

use crate::config::Config;
use crate::services::registration::RegistrationClient;
use crate::signup::{self, Navigator, NotificationSink, Route, SignupContext, SignupPanel};

#[derive(Debug, Clone)]
pub enum Message {
    Signup(signup::Message),
    DismissNotice(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Signup,
    Login,
}

#[derive(Debug, Clone)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Notification sink collecting toasts until the shell drains them into the
/// banner list after each panel update.
#[derive(Debug, Default)]
pub struct Notices(Mutex<Vec<Notice>>);

impl Notices {
    fn push(&self, notice: Notice) {
        if let Ok(mut list) = self.0.lock() {
            list.push(notice);
        }
    }

    fn drain(&self) -> Vec<Notice> {
        match self.0.lock() {
            Ok(mut list) => list.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl NotificationSink for Notices {
    fn success(&self, text: &str) {
        self.push(Notice::Success(text.to_string()));
    }

    fn error(&self, text: &str) {
        self.push(Notice::Error(text.to_string()));
    }
}

/// Navigation collaborator: records the requested route, the shell switches
/// screens when it picks it up.
#[derive(Debug, Default)]
pub struct SessionRouter(Mutex<Option<Route>>);

impl SessionRouter {
    fn take(&self) -> Option<Route> {
        self.0.lock().ok().and_then(|mut target| target.take())
    }
}

impl Navigator for SessionRouter {
    fn go_to(&self, route: Route) {
        tracing::info!("navigating to {}", route.path());
        if let Ok(mut target) = self.0.lock() {
            *target = Some(route);
        }
    }
}

pub struct App {
    panel: SignupPanel,
    ctx: SignupContext,
    notices: Arc<Notices>,
    router: Arc<SessionRouter>,
    banners: Vec<Notice>,
    screen: Screen,
}

impl App {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let notices = Arc::new(Notices::default());
        let router = Arc::new(SessionRouter::default());
        let ctx = SignupContext {
            backend: Arc::new(RegistrationClient::new(config.api_url().to_string())),
            notifications: notices.clone(),
            navigator: router.clone(),
        };
        (
            Self {
                panel: SignupPanel::new(),
                ctx,
                notices,
                router,
                banners: Vec::new(),
                screen: Screen::Signup,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Signup(message) => {
                let task = self.panel.update(&self.ctx, message);
                // Banners are kept newest-first.
                for notice in self.notices.drain() {
                    self.banners.insert(0, notice);
                }
                if let Some(Route::Login) = self.router.take() {
                    self.screen = Screen::Login;
                }
                task.map(Message::Signup)
            }
            Message::DismissNotice(index) => {
                if index < self.banners.len() {
                    self.banners.remove(index);
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::app_view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::registration::SignUpResponse;

    fn refusal(message: &str) -> Message {
        Message::Signup(signup::Message::Registered(Ok(SignUpResponse {
            message: Some(message.to_string()),
        })))
    }

    #[test]
    fn banners_stack_newest_first() {
        let (mut app, _) = App::new(Config::default());
        let _ = app.update(refusal("first"));
        let _ = app.update(refusal("second"));

        assert_eq!(app.banners.len(), 2);
        assert!(matches!(&app.banners[0], Notice::Error(text) if text == "second"));
        assert!(matches!(&app.banners[1], Notice::Error(text) if text == "first"));
    }

    #[test]
    fn dismissing_a_banner_matches_the_displayed_order() {
        let (mut app, _) = App::new(Config::default());
        let _ = app.update(refusal("first"));
        let _ = app.update(refusal("second"));

        let _ = app.update(Message::DismissNotice(0));
        assert_eq!(app.banners.len(), 1);
        assert!(matches!(&app.banners[0], Notice::Error(text) if text == "first"));
    }
}
