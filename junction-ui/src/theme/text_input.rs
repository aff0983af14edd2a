use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::{palette::TextInputPalette, Theme};

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
    let input = &theme.colors.text_inputs.primary;
    styled(match status {
        Status::Disabled => &input.disabled,
        _ => &input.active,
    })
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    let input = &theme.colors.text_inputs.invalid;
    styled(match status {
        Status::Disabled => &input.disabled,
        _ => &input.active,
    })
}

fn styled(colors: &TextInputPalette) -> Style {
    Style {
        background: Background::Color(colors.background),
        border: Border {
            radius: 25.0.into(),
            width: 1.0,
            color: colors.border,
        },
        icon: colors.icon,
        placeholder: colors.placeholder,
        value: colors.value,
        selection: colors.selection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn invalid_input_is_outlined_in_red_in_every_state() {
        let theme = <Theme as Default>::default();
        for status in [Status::Active, Status::Hovered, Status::Disabled] {
            assert_eq!(invalid(&theme, status).border.color, color::RED);
        }
        assert_eq!(
            primary(&theme, Status::Active).border.color,
            color::GREY_4
        );
    }
}
