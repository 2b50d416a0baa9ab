//! Color and glyph tokens.
//!
//! Everything the terminal output draws (status glyphs, box frames, colors)
//! comes from here, in a Unicode and an ASCII variant.

use crossterm::style::Color;

/// Semantic color roles; only these five colors are ever used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Info => Color::Cyan,
            Tone::Dim => Color::DarkGrey,
        }
    }
}

/// Status glyphs for one rendering mode
#[derive(Debug)]
pub struct Glyphs {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub skipped: &'static str,
    pub arrow: &'static str,
    pub group: &'static str,
    pub sweep: &'static str,
}

pub static UNICODE_GLYPHS: Glyphs = Glyphs {
    success: "✓",
    error: "✗",
    warning: "⚠",
    skipped: "-",
    arrow: "↳",
    group: "▸",
    sweep: "🧹",
};

pub static ASCII_GLYPHS: Glyphs = Glyphs {
    success: "[OK]",
    error: "[FAIL]",
    warning: "[WARN]",
    skipped: "[SKIP]",
    arrow: "[>]",
    group: ">>",
    sweep: "[SWEEP]",
};

pub fn glyphs(unicode: bool) -> &'static Glyphs {
    if unicode {
        &UNICODE_GLYPHS
    } else {
        &ASCII_GLYPHS
    }
}

/// Box-drawing characters for panels
#[derive(Debug)]
pub struct Frame {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

pub static ROUNDED_FRAME: Frame = Frame {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal: "─",
    vertical: "│",
};

pub static ASCII_FRAME: Frame = Frame {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal: "-",
    vertical: "|",
};

pub fn frame(unicode: bool) -> &'static Frame {
    if unicode {
        &ROUNDED_FRAME
    } else {
        &ASCII_FRAME
    }
}
