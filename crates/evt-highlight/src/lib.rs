//! TOML highlighting and terminal styling for evt.
//!
//! `evt config` and `evt init` print configuration through [`Highlighter`]; every
//! other command styles its text output with the [`Tone`] helpers.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Highlights configuration files for terminal output.
pub struct Highlighter {
    /// Syntax definitions, including TOML from the two-face extras.
    syntax_set: SyntaxSet,
    /// Lazily loaded themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Active theme.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self::with_theme(EmbeddedThemeName::Dracula)
    }

    /// Creates a highlighter using `theme`.
    pub fn with_theme(theme: EmbeddedThemeName) -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme,
        }
    }

    /// Highlights TOML content, ending with a color reset.
    ///
    /// Lines the highlighter cannot parse are emitted unstyled.
    pub fn highlight_toml(&self, content: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension("toml")
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let mut lines = HighlightLines::new(syntax, self.theme_set.get(self.theme));

        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI escape codes.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text.
    pub const CYAN: &str = "\x1b[36m";
    /// Green text.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text.
    pub const RED: &str = "\x1b[31m";
    /// Magenta text.
    pub const MAGENTA: &str = "\x1b[35m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Text roles used across evt's terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Event names and section titles.
    Header,
    /// Labels inside a section.
    Subheader,
    /// Secondary detail such as venues and links.
    Dim,
    /// Category names.
    Category,
    /// Confirmation messages.
    Success,
    /// Warnings.
    Warning,
    /// Errors.
    Error,
}

impl Tone {
    /// Escape codes that open this tone.
    fn prefix(self) -> &'static str {
        match self {
            Self::Header => "\x1b[1m\x1b[36m",
            Self::Subheader => colors::BOLD,
            Self::Dim => colors::DIM,
            Self::Category => colors::MAGENTA,
            Self::Success => colors::GREEN,
            Self::Warning => colors::YELLOW,
            Self::Error => colors::RED,
        }
    }

    /// Wraps `text` in this tone's escape codes.
    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{}", self.prefix(), colors::RESET)
    }
}

/// Bold cyan header.
pub fn header(text: &str) -> String {
    Tone::Header.paint(text)
}

/// Bold subheader.
pub fn subheader(text: &str) -> String {
    Tone::Subheader.paint(text)
}

/// Dimmed text.
pub fn dim(text: &str) -> String {
    Tone::Dim.paint(text)
}

/// Category label.
pub fn category(text: &str) -> String {
    Tone::Category.paint(text)
}

/// Green success message.
pub fn success(text: &str) -> String {
    Tone::Success.paint(text)
}

/// Yellow warning.
pub fn warning(text: &str) -> String {
    Tone::Warning.paint(text)
}

/// Red error.
pub fn error(text: &str) -> String {
    Tone::Error.paint(text)
}

/// Indents every non-empty line of `content` by `width` spaces.
pub fn indent(content: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    content
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
