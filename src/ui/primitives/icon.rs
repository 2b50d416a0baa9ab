use crossterm::style::Stylize;

use crate::ui::theme::{self, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Skipped,
    Arrow,
    Group,
    Sweep,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let g = theme::glyphs(supports_unicode);
        match self {
            Icon::Success => g.success,
            Icon::Error => g.error,
            Icon::Warning => g.warning,
            Icon::Skipped => g.skipped,
            Icon::Arrow => g.arrow,
            Icon::Group => g.group,
            Icon::Sweep => g.sweep,
        }
    }

    fn tone(&self) -> Tone {
        match self {
            Icon::Success => Tone::Success,
            Icon::Error => Tone::Error,
            Icon::Warning => Tone::Warning,
            Icon::Skipped | Icon::Arrow => Tone::Dim,
            Icon::Group | Icon::Sweep => Tone::Info,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.tone().color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}
