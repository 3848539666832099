use std::path::{Path, PathBuf};

use parse_pairs::{parse_pairs, LineError, Pair};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Line(#[from] LineError),
}

/// The two columns of the input file, in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Lists {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
}

impl Lists {
    pub fn from_pairs(pairs: &[Pair]) -> Self {
        pairs.iter().fold(
            Lists {
                left: Vec::with_capacity(pairs.len()),
                right: Vec::with_capacity(pairs.len()),
            },
            |mut lists, pair| {
                lists.left.push(pair.left);
                lists.right.push(pair.right);
                lists
            },
        )
    }

    pub fn parse(text: &str) -> Result<Self, LineError> {
        let pairs = parse_pairs(text)?;
        Ok(Self::from_pairs(&pairs))
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Reads and parses the whole file. I/O failures are reported before any
/// line is looked at.
pub fn read_lists(path: impl AsRef<Path>) -> Result<Lists, Error> {
    let path = path.as_ref();
    log::info!("processing file at {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lists = Lists::parse(&text)?;
    log::debug!("read {} entries per list", lists.len());
    Ok(lists)
}

/// Sorts both slices and sums the distance between same-ranked entries.
///
/// A single distance always fits in a `u64`, but the sum of two of them
/// may not, hence the `u128` total.
pub fn total_distance(left: &mut [i64], right: &mut [i64]) -> u128 {
    left.sort_unstable();
    right.sort_unstable();
    left.iter()
        .zip(right.iter())
        .fold(0, |mut summed_diff, (left_num, right_num)| {
            summed_diff += u128::from(left_num.abs_diff(*right_num));
            summed_diff
        })
}

/// Sum of each left entry times the number of times it shows up on the
/// right. Both slices are sorted in place and walked together.
///
/// Every term is at most `2^63 * len(right)` and there are `len(left)` of
/// them, so `i128` holds the sum for any lists that fit in memory.
pub fn similarity_score(left: &mut [i64], right: &mut [i64]) -> i128 {
    left.sort_unstable();
    right.sort_unstable();
    let mut sum = 0;
    let mut right_cursor = 0;
    let mut left_cursor = 0;
    while left_cursor < left.len() && right_cursor < right.len() {
        let left_num = left[left_cursor];
        // skip everything on the right that can't match anymore
        while right_cursor < right.len() && right[right_cursor] < left_num {
            right_cursor += 1;
        }
        let matches = right[right_cursor..]
            .iter()
            .take_while(|right_num| **right_num == left_num)
            .count() as i128;
        // duplicates on the left reuse the same count
        while left_cursor < left.len() && left[left_cursor] == left_num {
            sum += i128::from(left_num) * matches;
            left_cursor += 1;
        }
    }
    sum
}

pub fn calculate_distance(path: impl AsRef<Path>) -> Result<u128, Error> {
    let mut lists = read_lists(path)?;
    Ok(total_distance(&mut lists.left, &mut lists.right))
}

pub fn calculate_similarity(path: impl AsRef<Path>) -> Result<i128, Error> {
    let mut lists = read_lists(path)?;
    Ok(similarity_score(&mut lists.left, &mut lists.right))
}
