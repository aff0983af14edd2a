use iced::{Alignment, Length};

use junction_ui::{
    component::{button, text::*},
    widget::*,
};

use crate::session::Role;

#[derive(Debug, Clone)]
pub enum Message {
    SelectRole(Role),
}

/// Landing page. Its only job is to route the visitor to the authentication
/// form with the right persona.
#[derive(Default)]
pub struct Home {}

impl Home {
    pub fn new() -> Self {
        Self {}
    }

    pub fn view(&self) -> Element<Message> {
        Container::new(
            Column::new()
                .align_x(Alignment::Center)
                .spacing(100)
                .push(
                    Column::new()
                        .align_x(Alignment::Center)
                        .spacing(20)
                        .push(h1("Job Junction"))
                        .push(p1_regular("Where local talent meets local work.")),
                )
                .push(
                    Row::new()
                        .spacing(30)
                        .push(
                            button::primary(None, "I am hiring")
                                .width(Length::Fixed(250.0))
                                .on_press(Message::SelectRole(Role::User)),
                        )
                        .push(
                            button::secondary(None, "I am looking for work")
                                .width(Length::Fixed(250.0))
                                .on_press(Message::SelectRole(Role::Worker)),
                        ),
                ),
        )
        .padding(50)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
