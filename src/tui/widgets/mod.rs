//! Reusable TUI widgets

pub mod banner;
pub mod input;

pub use banner::{Banner, BannerKind};
pub use input::TextInput;
