use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::Button;
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

pub fn link(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.link, status)
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active | Status::Pressed => Style {
            background: Some(Background::Color(p.active.background)),
            text_color: p.active.text,
            border: border(p.active.border),
            ..Default::default()
        },
        Status::Hovered => Style {
            background: Some(Background::Color(p.hovered.background)),
            text_color: p.hovered.text,
            border: border(p.hovered.border),
            ..Default::default()
        },
        Status::Disabled => {
            // The submit button dims while a call is in flight.
            let colors = p.disabled.unwrap_or(p.active);
            Style {
                background: Some(Background::Color(colors.background)),
                text_color: Color {
                    a: 0.4,
                    ..colors.text
                },
                border: border(colors.border),
                ..Default::default()
            }
        }
    }
}

fn border(color: Option<iced::Color>) -> Border {
    Border {
        radius: 25.0.into(),
        width: if color.is_some() { 1.0 } else { 0.0 },
        color: color.unwrap_or(iced::Color::TRANSPARENT),
    }
}
