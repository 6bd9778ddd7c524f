//! CLI styling utilities
//!
//! Semantic styling via the [`Stylize`] trait. Color support detection
//! (`NO_COLOR`, `CLICOLOR`, TTY) is delegated to `owo-colors`.
//!
//! | Method       | Color  | Stream | Semantic Use                  |
//! |--------------|--------|--------|-------------------------------|
//! | `.accent()`  | Cyan   | stdout | Dates, shop names, counts     |
//! | `.success()` | Green  | stdout | Completion messages           |
//! | `.error()`   | Red    | stderr | Failures                      |
//! | `.muted()`   | Dim    | stdout | Hints, previews, metadata     |
//! | `.emphasis()`| Bold   | stdout | Headers, current phase        |

use std::fmt::{self, Display};
use std::sync::OnceLock;

use indicatif::ProgressStyle;
pub use owo_colors::Stream;
use owo_colors::{OwoColorize, Style};

const ACCENT: Style = Style::new().cyan();
const SUCCESS: Style = Style::new().green();
const ERROR: Style = Style::new().red();
const MUTED: Style = Style::new().dimmed();
const EMPHASIS: Style = Style::new().bold();

/// A value with semantic styling applied.
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, style: Style, stream: Stream) -> Self {
        Self {
            value,
            style,
            stream,
        }
    }

    /// Render for stdout stream detection.
    #[must_use]
    pub const fn for_stdout(mut self) -> Self {
        self.stream = Stream::Stdout;
        self
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.stream, |v| v.style(self.style))
        )
    }
}

/// Extension trait for semantic terminal styling.
pub trait Stylize: Display {
    /// Cyan, for dates, shop names and counts
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, ACCENT, Stream::Stdout)
    }

    /// Green, for completion
    fn success(&self) -> Styled<&Self> {
        Styled::new(self, SUCCESS, Stream::Stdout)
    }

    /// Red, for failures (stderr)
    fn error(&self) -> Styled<&Self> {
        Styled::new(self, ERROR, Stream::Stderr)
    }

    /// Dim, for secondary text
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, MUTED, Stream::Stdout)
    }

    /// Bold, for headers
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, EMPHASIS, Stream::Stdout)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Success checkmark
pub const CHECK: &str = "✓";

/// Error/failure cross
pub const CROSS: &str = "✗";

/// Green checkmark
#[inline]
pub const fn check() -> Styled<&'static str> {
    Styled::new(CHECK, SUCCESS, Stream::Stdout)
}

/// Red cross (stderr)
#[inline]
pub const fn cross() -> Styled<&'static str> {
    Styled::new(CROSS, ERROR, Stream::Stderr)
}

const fn to_hyperlink_stream(stream: Stream) -> supports_hyperlinks::Stream {
    match stream {
        Stream::Stdout => supports_hyperlinks::Stream::Stdout,
        Stream::Stderr => supports_hyperlinks::Stream::Stderr,
    }
}

/// Clickable OSC 8 link showing `text`, plain text where unsupported.
pub fn hyperlink(stream: Stream, text: &str, url: &str) -> String {
    if !url.is_empty() && supports_hyperlinks::on(to_hyperlink_stream(stream)) {
        terminal_link::Link::new(text, url).to_string()
    } else {
        text.to_string()
    }
}

/// Cyan dots spinner for network checks.
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}
