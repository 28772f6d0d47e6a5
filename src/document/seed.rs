//! Hand-authored seed document shown at startup.

use crate::document::chars::CharStyle;
use crate::style::StyleTag;
use unicode_segmentation::UnicodeSegmentation;

/// The fixed sample caption the editor opens with.
pub const SAMPLE_TEXT: &str = "SHE HAD AN AFFAIR
WITH MY CLOSE FRIEND
IT BROKE MY HEART
I TRIED FIXING US
FOR OUR FAMILY'S FUTURE
I KEPT ON TRYING
THEN I REVEALED
I'M A MILLIONAIRE";

/// Styling rule for one line of the seed text.
enum LineRule {
    /// Every character on the line gets this tag.
    Uniform(StyleTag),
    /// Column-based split: a character at line index `i` takes the tag of
    /// the first `(last_index, tag)` entry with `i <= last_index`, or
    /// `None` past the final entry.
    Columns(&'static [(usize, StyleTag)]),
}

/// One rule per line of [`SAMPLE_TEXT`], in order.
const SAMPLE_RULES: [LineRule; 8] = [
    LineRule::Uniform(StyleTag::Yellow),
    LineRule::Uniform(StyleTag::Yellow),
    LineRule::Uniform(StyleTag::Blue),
    LineRule::Uniform(StyleTag::Blue),
    LineRule::Uniform(StyleTag::Yellow),
    LineRule::Uniform(StyleTag::Yellow),
    // "THEN I " yellow, "REVEALED" red
    LineRule::Columns(&[(6, StyleTag::Yellow), (14, StyleTag::Red)]),
    LineRule::Uniform(StyleTag::Red),
];

/// Build the styled sequence for [`SAMPLE_TEXT`].
///
/// Newline separators inherit the style of the last character of their
/// line, so compaction keeps whole lines inside one run where possible.
#[must_use]
pub fn sample_document() -> Vec<CharStyle> {
    let lines: Vec<&str> = SAMPLE_TEXT.split('\n').collect();
    let mut styled = Vec::new();

    for (line_index, line) in lines.iter().enumerate() {
        let rule = &SAMPLE_RULES[line_index];

        for (col, cluster) in line.graphemes(true).enumerate() {
            let tag = match rule {
                LineRule::Uniform(tag) => *tag,
                LineRule::Columns(spans) => spans
                    .iter()
                    .find(|(last, _)| col <= *last)
                    .map_or(StyleTag::None, |(_, tag)| *tag),
            };
            styled.push(CharStyle::new(cluster, tag));
        }

        if line_index < lines.len() - 1 {
            let tag = styled.last().map_or(StyleTag::None, |c| c.style);
            styled.push(CharStyle::new("\n", tag));
        }
    }
    styled
}
