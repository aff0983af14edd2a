use iced::Color;

pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x16 as f32 / 255.0,
    0x1A as f32 / 255.0,
    0x21 as f32 / 255.0,
);
pub const GREY_6: Color = Color::from_rgb(
    0x1E as f32 / 255.0,
    0x23 as f32 / 255.0,
    0x2B as f32 / 255.0,
);
pub const GREY_5: Color = Color::from_rgb(
    0x27 as f32 / 255.0,
    0x2D as f32 / 255.0,
    0x37 as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x42 as f32 / 255.0,
    0x48 as f32 / 255.0,
    0x52 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x77 as f32 / 255.0,
    0x80 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCE as f32 / 255.0,
    0xD1 as f32 / 255.0,
);
pub const WHITE: Color = iced::Color::WHITE;
pub const BLUE: Color = Color::from_rgb(
    0x3D as f32 / 255.0,
    0x8B as f32 / 255.0,
    0xFD as f32 / 255.0,
);
pub const TRANSPARENT_BLUE: Color = Color::from_rgba(
    0x3D as f32 / 255.0,
    0x8B as f32 / 255.0,
    0xFD as f32 / 255.0,
    0.3,
);
pub const ORANGE: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0xA7 as f32 / 255.0,
    0x00 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);
