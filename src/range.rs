use std::fmt;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractError;

/// Inclusive page range in content-relative numbering (0 is the first page
/// after the front matter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.start, self.end)
    }
}

static START_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<start>\d+)\s*[,-]\s*(?P<end>\d+)\s*$").expect("valid page range regex")
});

/// Parses `(1,10)`, `[1-10]`, `1,10`, `1-10` and the like. Brackets are
/// optional but must pair up; whitespace is allowed anywhere between tokens.
pub fn parse_page_range(input: &str) -> Result<PageRange, ExtractError> {
    let improper = |reason: &'static str| ExtractError::ImproperRange {
        input: input.to_string(),
        reason,
    };

    let body = strip_brackets(input.trim())
        .ok_or_else(|| improper("brackets must be a matching () or [] pair"))?;

    let captures = START_END
        .captures(body)
        .ok_or_else(|| improper("must be two integers, e.g. (1,10)"))?;

    let start = captures["start"]
        .parse::<usize>()
        .map_err(|_| improper("both values must be non-negative integers"))?;
    let end = captures["end"]
        .parse::<usize>()
        .map_err(|_| improper("both values must be non-negative integers"))?;

    if start > end {
        return Err(improper("start must not be greater than end"));
    }

    Ok(PageRange { start, end })
}

fn strip_brackets(text: &str) -> Option<&str> {
    let first = text.chars().next();
    let last = text.chars().last();

    match (first, last) {
        (Some('('), Some(')')) | (Some('['), Some(']')) if text.len() >= 2 => {
            Some(&text[1..text.len() - 1])
        }
        (Some('(' | '['), _) | (_, Some(')' | ']')) => None,
        _ => Some(text),
    }
}

/// Absolute page indices for `range` once `front_matter_pages` are skipped.
/// Bounds are not checked here.
pub fn resolve_indices(range: PageRange, front_matter_pages: usize) -> RangeInclusive<usize> {
    range.start.saturating_add(front_matter_pages)..=range.end.saturating_add(front_matter_pages)
}
