use tracing::debug;

use crate::engine::record::{RecordSet, VocabularyRecord};
use crate::error::{QuizError, Result};

const BOM: char = '\u{feff}';

/// Lenient reader for `number,front,back` word lists.
///
/// Lines that do not yield a usable record are dropped without error; only
/// an input with no usable lines at all is rejected.
#[derive(Clone, Copy, Debug)]
pub struct RecordParser {
    delimiter: char,
    quote: char,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
        }
    }
}

impl RecordParser {
    pub fn new(delimiter: char, quote: char) -> Self {
        Self { delimiter, quote }
    }

    pub fn parse(&self, text: &str) -> Result<RecordSet> {
        let text = text.strip_prefix(BOM).unwrap_or(text);

        let mut records = Vec::new();
        let mut dropped = 0usize;

        for line in text.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match self.parse_line(line) {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }

        debug!(accepted = records.len(), dropped, "parsed vocabulary lines");

        if records.is_empty() {
            return Err(QuizError::Parse);
        }
        Ok(RecordSet::from_unsorted(records))
    }

    fn parse_line(&self, line: &str) -> Option<VocabularyRecord> {
        let fields = self.split_fields(line);
        if fields.len() < 3 {
            return None;
        }

        let number = leading_integer(&fields[0])?;
        let front = fields[1].trim();
        let back = fields[2].trim();
        if front.is_empty() || back.is_empty() {
            return None;
        }

        Some(VocabularyRecord::new(number, front, back))
    }

    /// Split one line on the delimiter. Quote characters toggle quoted mode
    /// and are not kept; an unterminated quote runs to the end of the line.
    pub fn split_fields(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for ch in line.chars() {
            if ch == self.quote {
                in_quotes = !in_quotes;
            } else if ch == self.delimiter && !in_quotes {
                fields.push(std::mem::take(&mut current));
            } else {
                current.push(ch);
            }
        }

        fields.push(current);
        fields
    }
}

/// Integer prefix of `s`: optional leading whitespace and sign, then at
/// least one ASCII digit. Anything after the digits is ignored.
pub(crate) fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['-', '+']));

    let digits = &s[sign_len..];
    let digits_end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if digits_end == 0 {
        return None;
    }

    s[..sign_len + digits_end].parse().ok()
}
