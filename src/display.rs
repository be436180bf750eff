use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::{PatternHit, PolarityHit, Review};

/// Token range, inclusive on both ends.
type TokenRange = (usize, usize);

struct IncludedHit {
    range: TokenRange,
    label: String,
}

/// Renders a review's whitespace tokens with hits underlined beneath them.
///
/// ```text
/// I  love  my  new  iPhone  14
///    ╰──╯Positive
///              ╰─────────╯Product "New Iphone"
/// ```
pub struct ReviewDisplay<'a> {
    tokens: Vec<&'a str>,
    include_hits: Vec<IncludedHit>,
}

impl<'a> std::fmt::Display for ReviewDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::new();
        let mut token_idx_to_end_display_char_idx = Vec::new();
        let mut opening_line = String::new();
        {
            // for skipping padding at beginning
            let mut is_first = true;
            for token in self.tokens.iter() {
                if is_first {
                    is_first = false;
                } else {
                    opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
                }

                token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
                opening_line.push_str(token);
                token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            }
        }

        f.write_str(&opening_line)?;

        for hit in self.include_hits.iter() {
            let (Some(&start_char_idx), Some(&end_char_idx)) = (
                token_idx_to_start_display_char_idx.get(hit.range.0),
                token_idx_to_end_display_char_idx.get(hit.range.1),
            ) else {
                continue;
            };

            f.write_char('\n')?;
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&hit.label)?;
        }

        Ok(())
    }
}

impl<'a> ReviewDisplay<'a> {
    pub fn new(review: &'a Review) -> Self {
        ReviewDisplay {
            tokens: review.text.split_whitespace().collect(),
            include_hits: Vec::new(),
        }
    }

    pub fn include_polarity(&mut self, hits: &[PolarityHit]) {
        for hit in hits {
            self.include_hits.push(IncludedHit {
                range: (hit.index, hit.index),
                label: format!("{:?}", hit.polarity),
            });
        }
    }

    pub fn include_patterns(&mut self, hits: &[PatternHit]) {
        for hit in hits {
            self.include_hits.push(IncludedHit {
                range: (hit.start, hit.end),
                label: format!("{:?} {:?}", hit.category, hit.text),
            });
        }
    }

    /// Takes self
    pub fn with_polarity(mut self, hits: &[PolarityHit]) -> Self {
        self.include_polarity(hits);
        self
    }

    /// Takes self
    pub fn with_patterns(mut self, hits: &[PatternHit]) -> Self {
        self.include_patterns(hits);
        self
    }
}
