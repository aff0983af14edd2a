use iced::widget::container::Style;
use iced::{Background, Border};

use super::Theme;

/// The connection-failure banner shown above the form.
pub fn error(theme: &Theme) -> Style {
    let colors = &theme.colors.notification;
    Style {
        background: Some(Background::Color(colors.background)),
        text_color: Some(colors.text),
        border: Border {
            radius: 25.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_banner_uses_the_notification_colors() {
        let theme = Theme::default();
        let style = error(&theme);
        assert_eq!(
            style.background,
            Some(Background::Color(theme.colors.notification.background))
        );
        assert_eq!(style.text_color, Some(theme.colors.notification.text));
    }
}
