pub mod button;
pub mod card;
pub mod form;
pub mod notification;
pub mod text;
