use std::num::ParseIntError;

/// One input line: two integers separated by whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "arbitrary"),
    derive(proptest_derive::Arbitrary)
)]
pub struct Pair {
    #[cfg_attr(
        any(test, feature = "arbitrary"),
        proptest(strategy = "-1_000_000i64..1_000_000")
    )]
    pub left: i64,
    #[cfg_attr(
        any(test, feature = "arbitrary"),
        proptest(strategy = "-1_000_000i64..1_000_000")
    )]
    pub right: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("invalid number of numbers on line #{index}")]
    Structure { index: usize },
    #[error("unable to parse number {token:?} on line #{index}")]
    Number {
        index: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl LineError {
    /// 0-based index of the offending line.
    pub fn index(&self) -> usize {
        match self {
            LineError::Structure { index } | LineError::Number { index, .. } => *index,
        }
    }
}

/// Parses a single line. The line is cut once at its first whitespace
/// character and both halves are trimmed, so any run of spaces or tabs
/// between the two numbers is accepted.
pub fn parse_line(index: usize, line: &str) -> Result<Pair, LineError> {
    let (left, right) = line
        .split_once(char::is_whitespace)
        .map(|(left, right)| (left.trim(), right.trim()))
        .filter(|(left, right)| !left.is_empty() && !right.is_empty())
        .ok_or(LineError::Structure { index })?;
    Ok(Pair {
        left: parse_number(index, left)?,
        right: parse_number(index, right)?,
    })
}

fn parse_number(index: usize, token: &str) -> Result<i64, LineError> {
    token.parse::<i64>().map_err(|source| LineError::Number {
        index,
        token: token.to_string(),
        source,
    })
}

/// Parses every line of `text`, stopping at the first bad one.
///
/// Lines come from [`str::lines`], so `\r\n` endings are handled and a
/// trailing newline doesn't produce an extra empty line. Blank lines
/// anywhere else are structural errors.
pub fn parse_pairs(text: &str) -> Result<Vec<Pair>, LineError> {
    let pairs = text
        .lines()
        .enumerate()
        .map(|(index, line)| parse_line(index, line))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("parsed {} pairs", pairs.len());
    Ok(pairs)
}
