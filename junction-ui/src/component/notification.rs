use crate::{component::text, theme, widget::*};
use iced::Length;

pub fn warning<'a, T: 'a>(message: String, error: String) -> Container<'a, T> {
    Container::new(
        Column::new()
            .spacing(5)
            .push(text::p1_bold(message))
            .push(text::p2_regular(error)),
    )
    .padding(15)
    .style(theme::notification::error)
    .width(Length::Fill)
}
