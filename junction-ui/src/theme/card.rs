use iced::widget::container::Style;
use iced::{Background, Border};

use super::Theme;

pub fn simple(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.card.background)),
        border: Border {
            radius: 25.0.into(),
            width: 1.0,
            color: theme.colors.card.border,
        },
        ..Default::default()
    }
}
