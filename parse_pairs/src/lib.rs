pub mod line;

pub use line::{parse_line, parse_pairs, LineError, Pair};
