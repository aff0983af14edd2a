use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub buttons: Buttons,
    pub card: Card,
    pub notification: Notification,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Card {
    pub background: iced::Color,
    pub border: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notification {
    pub background: iced::Color,
    pub text: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: iced::Color,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            background: color::LIGHT_BLACK,
            text: color::WHITE,
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::BLUE,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::WHITE,
                        text: color::BLUE,
                        border: None,
                    },
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT_BLUE,
                        text: color::WHITE,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::GREY_6,
                        text: color::WHITE,
                        border: Some(color::GREY_4),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_5,
                        text: color::WHITE,
                        border: Some(color::GREY_3),
                    },
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLUE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    disabled: None,
                },
            },
            card: Card {
                background: color::GREY_6,
                border: color::GREY_5,
            },
            notification: Notification {
                background: color::ORANGE,
                text: color::LIGHT_BLACK,
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_BLUE,
                        border: color::GREY_4,
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_5,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_2,
                        selection: color::TRANSPARENT_BLUE,
                        border: color::GREY_4,
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_BLUE,
                        border: color::RED,
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_5,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_2,
                        selection: color::TRANSPARENT_BLUE,
                        border: color::RED,
                    },
                },
            },
        }
    }
}
