//! Plain-text context block for answers phrased without a language model.

use sift_core::models::ScoredPassage;

/// Formatting limits for [`render_context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextOptions {
    pub max_passages: usize,
    /// Per-passage content limit, in characters.
    pub max_chars: usize,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            max_passages: 3,
            max_chars: 1000,
        }
    }
}

/// Render the leading passages as `Source: <label>` blocks separated by a
/// blank line.
pub fn render_context(passages: &[ScoredPassage], options: ContextOptions) -> String {
    passages
        .iter()
        .take(options.max_passages)
        .map(|p| {
            format!(
                "Source: {}\n{}",
                p.label(),
                truncate_chars(p.content.trim(), options.max_chars)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}
