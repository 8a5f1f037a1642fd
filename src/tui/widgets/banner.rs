//! Validation feedback banner
//!
//! A two-state alert shown under the username form. Each submission
//! replaces the banner in place, so at most one is ever visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::validate::ValidationResult;

/// Which of the two alert states the banner is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// The candidate was accepted
    Success,
    /// The candidate was rejected
    Danger,
}

impl BannerKind {
    /// Get the color for this banner kind
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Danger => Color::Red,
        }
    }

    /// Get the title for this banner kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success!",
            Self::Danger => "Invalid Username!",
        }
    }

    /// The equivalent web alert class, kept for contract parity
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Danger => "alert alert-danger",
        }
    }
}

/// The banner shown after a username submission
#[derive(Debug, Clone)]
pub struct Banner {
    /// The full feedback message
    pub message: String,
    /// Success or danger
    pub kind: BannerKind,
}

impl Banner {
    /// Create a banner directly
    pub fn new(message: impl Into<String>, kind: BannerKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Build the banner for a validation outcome
    pub fn from_validation(result: &ValidationResult) -> Self {
        let kind = if result.is_valid() {
            BannerKind::Success
        } else {
            BannerKind::Danger
        };
        Self::new(result.message(), kind)
    }
}

/// Widget for rendering a banner
pub struct BannerWidget<'a> {
    banner: &'a Banner,
}

impl<'a> BannerWidget<'a> {
    /// Create a new banner widget
    pub fn new(banner: &'a Banner) -> Self {
        Self { banner }
    }
}

impl<'a> Widget for BannerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.banner.kind.color();

        // Clear the area first
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.banner.kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let paragraph = Paragraph::new(self.banner.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block);

        paragraph.render(area, buf);
    }
}
