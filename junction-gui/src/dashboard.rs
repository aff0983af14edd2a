use std::sync::Arc;

use iced::{Alignment, Length, Task};

use junction_ui::{
    component::{button, card, text::*},
    widget::*,
};

use crate::session::{Session, SessionError, SessionStore};

#[derive(Debug, Clone)]
pub enum Message {
    Logout,
    // handled by the upper level wrapping the dashboard.
    LoggedOut(Result<(), SessionError>),
}

/// Post-login shell. The job-board content itself lives on the server side,
/// this view displays the identity of the session and offers to end it.
pub struct Dashboard {
    session: Session,
}

impl Dashboard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn update(&mut self, store: Arc<dyn SessionStore>, message: Message) -> Task<Message> {
        match message {
            Message::Logout => {
                Task::perform(async move { store.clear().await }, Message::LoggedOut)
            }
            Message::LoggedOut(_) => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        let greeting = self
            .session
            .user
            .name
            .clone()
            .or_else(|| self.session.user.email.clone())
            .unwrap_or_else(|| self.session.role.to_string());

        Container::new(
            Column::new()
                .align_x(Alignment::Center)
                .spacing(30)
                .max_width(700)
                .push(h2(format!("Welcome, {}", greeting)))
                .push(
                    card::simple(
                        Column::new()
                            .spacing(10)
                            .push(p1_bold("Session"))
                            .push_maybe(self.session.user.email.clone().map(p1_regular))
                            .push(p2_regular(format!("Signed in as a {}", self.session.role))),
                    )
                    .width(Length::Fill),
                )
                .push(
                    button::secondary(None, "Log out")
                        .width(Length::Fixed(200.0))
                        .on_press(Message::Logout),
                ),
        )
        .padding(50)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
