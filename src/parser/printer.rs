use terminal_size::{terminal_size, Width};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const INDENT: &str = "  ";
const HANGING_INDENT: &str = "      ";
// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_BODY_WIDTH: usize = 17;

/// One registered name, as it appears in the usage text.
pub(crate) struct UsageLine<'a> {
    pub(crate) name: &'a str,
    pub(crate) display: String,
    pub(crate) usage: &'a str,
}

#[derive(Debug, Default)]
pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Rendering usage for terminal width: {terminal_width:?}.");
        }

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    /// Render the usage text: a header followed by each line, in the order given.
    pub(crate) fn render<'a>(
        &self,
        program: &str,
        lines: impl IntoIterator<Item = UsageLine<'a>>,
    ) -> String {
        let mut out = vec![format!("Usage of {program}:")];

        for line in lines {
            out.extend(self.render_line(&line));
        }

        out.join("\n")
    }

    fn render_line(&self, line: &UsageLine) -> Vec<String> {
        let UsageLine {
            name,
            display,
            usage,
        } = line;
        let head = format!("{INDENT}-{name}={display}:");

        if usage.is_empty() {
            return vec![head];
        }

        let single = format!("{head} {usage}");

        match self.terminal_width {
            Some(width) if single.chars().count() > width => {
                let body_width = std::cmp::max(
                    width.saturating_sub(HANGING_INDENT.len()),
                    MINIMUM_BODY_WIDTH,
                );
                let mut out = vec![head];
                out.extend(
                    chunk(usage, body_width)
                        .into_iter()
                        .map(|part| format!("{HANGING_INDENT}{part}")),
                );
                out
            }
            _ => vec![single],
        }
    }
}

/// Split `paragraph` into lines of at most `width` characters, breaking only between words.
/// A word longer than `width` is kept whole on its own line.
fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
