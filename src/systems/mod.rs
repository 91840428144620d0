pub mod colors;
pub mod interaction;
pub mod kiosk;
pub mod resize;
pub mod ui;
