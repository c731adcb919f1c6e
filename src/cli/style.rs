//! Terminal styling for folio output
//!
//! Every colour goes through [`Tone`], rendered by `owo-colors` so that
//! `NO_COLOR`, `CLICOLOR_FORCE` and non-TTY streams are respected.
//!
//! ```ignore
//! use crate::cli::style::Stylize;
//!
//! println!("{} Theme set to {}", check(), theme.accent());
//! ```

use folio::types::{Notification, NotificationVariant};
use indicatif::ProgressStyle;
pub use owo_colors::Stream;
use owo_colors::{OwoColorize, Style};
use std::fmt::{self, Display};
use std::sync::OnceLock;

/// What a piece of output means, independent of its colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Names, themes, links (cyan)
    Accent,
    /// Sent, saved (green)
    Success,
    /// Failures (red, stderr)
    Error,
    /// Relay and config complaints (yellow, stderr)
    Warn,
    /// Hints and metadata (dim)
    Muted,
    /// Headings (bold)
    Emphasis,
}

impl Tone {
    const fn style(self) -> Style {
        match self {
            Self::Accent => Style::new().cyan(),
            Self::Success => Style::new().green(),
            Self::Error => Style::new().red(),
            Self::Warn => Style::new().yellow(),
            Self::Muted => Style::new().dimmed(),
            Self::Emphasis => Style::new().bold(),
        }
    }

    const fn stream(self) -> Stream {
        match self {
            Self::Error | Self::Warn => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// A value paired with the tone it should render in
#[derive(Debug, Clone)]
pub struct Styled<T> {
    value: T,
    tone: Tone,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, tone: Tone) -> Self {
        Self {
            value,
            tone,
            stream: tone.stream(),
        }
    }

    /// Detect colour support on stderr instead of the tone's default stream
    #[must_use]
    pub const fn for_stderr(mut self) -> Self {
        self.stream = Stream::Stderr;
        self
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.tone.style();
        write!(
            f,
            "{}",
            self.value.if_supports_color(self.stream, |v| v.style(style))
        )
    }
}

/// Tone shortcuts for anything printable
pub trait Stylize: Display {
    /// See [`Tone::Accent`]
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Accent)
    }

    /// See [`Tone::Success`]
    fn success(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Success)
    }

    /// See [`Tone::Error`]
    fn error(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Error)
    }

    /// See [`Tone::Warn`]
    fn warn(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Warn)
    }

    /// See [`Tone::Muted`]
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Muted)
    }

    /// See [`Tone::Emphasis`]
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Emphasis)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Green check mark
pub const fn check() -> Styled<&'static str> {
    Styled::new("✓", Tone::Success)
}

/// Red cross, for stderr
pub const fn cross() -> Styled<&'static str> {
    Styled::new("✗", Tone::Error)
}

/// Dim list bullet
pub const fn bullet() -> Styled<&'static str> {
    Styled::new("○", Tone::Muted)
}

/// How a submission notification is drawn
#[derive(Debug, Clone, Copy)]
pub struct NoticeStyle {
    /// Stream the notice belongs on
    pub stream: Stream,
    /// Leading symbol
    pub mark: &'static str,
    /// Tone of the title line
    pub title: Tone,
    /// Tone of the description line
    pub description: Tone,
}

impl NoticeStyle {
    /// Informational notices go to stdout in green, destructive ones to stderr in red
    pub const fn for_variant(variant: NotificationVariant) -> Self {
        match variant {
            NotificationVariant::Informational => Self {
                stream: Stream::Stdout,
                mark: "✓",
                title: Tone::Success,
                description: Tone::Muted,
            },
            NotificationVariant::Destructive => Self {
                stream: Stream::Stderr,
                mark: "✗",
                title: Tone::Error,
                description: Tone::Warn,
            },
        }
    }

    /// Two-line rendering of `note`: marked title, then indented description
    pub fn render(self, note: &Notification) -> String {
        let paint = |text: &str, tone: Tone| {
            let mut styled = Styled::new(text.to_string(), tone);
            styled.stream = self.stream;
            styled.to_string()
        };
        format!(
            "{} {}\n  {}",
            paint(self.mark, self.title),
            paint(&note.title, self.title),
            paint(&note.description, self.description)
        )
    }
}

/// OSC 8 link showing `text`, or plain `text` where links are unsupported
pub fn hyperlink(stream: Stream, url: &str, text: &str) -> String {
    let target = match stream {
        Stream::Stdout => supports_hyperlinks::Stream::Stdout,
        Stream::Stderr => supports_hyperlinks::Stream::Stderr,
    };
    if supports_hyperlinks::on(target) {
        terminal_link::Link::new(text, url).to_string()
    } else {
        text.to_string()
    }
}

/// Spinner shown while a message is in flight
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::types::SubmissionOutcome;

    #[test]
    fn test_notice_style_per_variant() {
        let ok = NoticeStyle::for_variant(NotificationVariant::Informational);
        assert!(matches!(ok.stream, Stream::Stdout));
        assert_eq!(ok.title, Tone::Success);

        let bad = NoticeStyle::for_variant(NotificationVariant::Destructive);
        assert!(matches!(bad.stream, Stream::Stderr));
        assert_eq!(bad.mark, "✗");
    }

    #[test]
    fn test_render_contains_title_and_description() {
        let note = SubmissionOutcome::ConfigError.notification();
        let text = NoticeStyle::for_variant(note.variant).render(&note);
        assert!(text.contains("Configuration Error"));
        assert!(text.contains("Contact key is missing. Please check console."));
        assert_eq!(text.lines().count(), 2);
    }
}
