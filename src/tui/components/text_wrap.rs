//! Wrapping shared by the composer and message bubbles, so a draft breaks
//! across rows the same way it will once sent.

use std::ops::Range;

/// textwrap options for a content area `width` columns wide.
pub(crate) fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(usize::from(width.max(1)))
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Byte ranges of each visual row of `text` wrapped at `width` columns.
///
/// Rows follow `textwrap::wrap` per logical line. A row keeps the spaces
/// textwrap trimmed after it, so the ranges of one logical line cover it
/// without gaps. Newlines belong to no range and an empty logical line is
/// an empty range. Always returns at least one row.
pub(crate) fn visual_lines(text: &str, width: u16) -> Vec<Range<usize>> {
    let options = wrap_options(width);
    let mut rows = Vec::new();
    let mut line_start = 0;

    for logical in text.split('\n') {
        let mut starts = vec![0];
        let mut searched = 0;
        let wrapped = textwrap::wrap(logical, &options);
        for (i, segment) in wrapped.iter().map(|s| &**s).enumerate() {
            let at = logical[searched..]
                .find(segment)
                .map_or(searched, |found| searched + found);
            if i > 0 {
                starts.push(at);
            }
            searched = at + segment.len();
        }

        let ends = starts.iter().skip(1).copied().chain([logical.len()]);
        rows.extend(
            starts
                .iter()
                .zip(ends)
                .map(|(&start, end)| line_start + start..line_start + end),
        );
        line_start += logical.len() + 1;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_word_is_broken() {
        assert_eq!(visual_lines("abcdefghij", 4), vec![0..4, 4..8, 8..10]);
    }

    #[test]
    fn test_breaks_at_spaces() {
        assert_eq!(visual_lines("hello world", 8), vec![0..6, 6..11]);
        assert_eq!(visual_lines("one two three", 9), vec![0..8, 8..13]);
    }

    #[test]
    fn test_newlines_split_rows() {
        assert_eq!(visual_lines("ab\n\ncd", 10), vec![0..2, 3..3, 4..6]);
        assert_eq!(visual_lines("ab\n", 10), vec![0..2, 3..3]);
    }

    #[test]
    fn test_empty_text_is_one_row() {
        assert_eq!(visual_lines("", 10), vec![0..0]);
        assert_eq!(visual_lines("abc", 0), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_rows_match_bubble_wrapping() {
        let text = "Explain a complex topic simply";
        let wrapped = textwrap::wrap(text, wrap_options(12));
        let rows = visual_lines(text, 12);

        assert_eq!(rows.len(), wrapped.len());
        for (range, segment) in rows.iter().zip(&wrapped) {
            assert_eq!(text[range.clone()].trim_end(), &**segment);
        }
    }
}
