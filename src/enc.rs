use std::{ops::RangeInclusive, sync::OnceLock};

use regex::Regex;

use crate::{engine::Board, pos::Pos2};

/// The mandatory first line of a Life 1.06 document
pub const LIFE_106_HEADER: &str = "#Life 1.06";

const MIN_COORD: i128 = i64::MIN as i128;
const MAX_COORD: i128 = i64::MAX as i128;
const COORD_RANGE: RangeInclusive<i128> = MIN_COORD..=MAX_COORD;

pub trait Codec {
    type Error;

    fn encode(&self, board: &Board) -> String;
    fn decode(&self, value: &str) -> Result<Board, Self::Error>;
}

/// Returned when a document does not start with [`LIFE_106_HEADER`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid Life 1.06 format: missing or incorrect header")]
pub struct FormatError;

/// Matches a body line of exactly two integer tokens
fn line_regex() -> &'static Regex {
    static LINE: OnceLock<Regex> = OnceLock::new();
    LINE.get_or_init(|| {
        Regex::new(r"^\s*([+-]?[0-9]+)\s+([+-]?[0-9]+)\s*$").expect("valid line pattern")
    })
}

/// Parses a single token, keeping it only if it fits in an `i64`
fn parse_coord(token: &str) -> Option<i64> {
    let value = token.parse::<i128>().ok()?;
    if !COORD_RANGE.contains(&value) {
        return None;
    }
    Some(value as i64)
}

/// The "Life 1.06" plain-text format
///
/// ```text
/// #Life 1.06
/// 0 -1
/// 1 0
/// -1 1
/// ```
pub struct Life106 {
    sorted: bool,
}
impl Life106 {
    /// Whether [`Codec::encode`] emits cells in row-major order
    ///
    /// Unsorted output follows the board's iteration order, which is cheaper
    /// but differs between runs.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    fn decode_line(line: &str) -> Option<Pos2> {
        let (_, [x, y]) = line_regex().captures(line)?.extract();
        Some(Pos2 {
            x: parse_coord(x)?,
            y: parse_coord(y)?,
        })
    }
}
impl Default for Life106 {
    fn default() -> Self {
        Self { sorted: true }
    }
}

impl Codec for Life106 {
    type Error = FormatError;

    fn encode(&self, board: &Board) -> String {
        let mut cells: Vec<&Pos2> = board.iter().collect();
        if self.sorted {
            cells.sort_unstable();
        }

        let mut lines = Vec::with_capacity(cells.len() + 1);
        lines.push(LIFE_106_HEADER.to_owned());
        lines.extend(cells.into_iter().map(|pos| format!("{} {}", pos.x, pos.y)));
        lines.join("\n")
    }

    fn decode(&self, value: &str) -> Result<Board, Self::Error> {
        let mut lines = value.trim().lines();
        if lines.next() != Some(LIFE_106_HEADER) {
            return Err(FormatError);
        }

        let mut alive = Board::new();
        // line numbers are 1-based and the header is line 1
        for (n, line) in lines.enumerate().map(|(i, line)| (i + 2, line)) {
            match Self::decode_line(line) {
                Some(pos) => {
                    alive.insert(pos);
                }
                None => log::debug!("skipping line {}: {:?}", n, line),
            }
        }
        Ok(alive)
    }
}
