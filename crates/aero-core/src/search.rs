//! Search input parsing.
//!
//! A search line has the shape `query | instruction`. Only the first `|`
//! splits; anything after it belongs to the instruction.

/// Separator between the query and the instruction suffix.
pub const SEPARATOR: char = '|';

/// Instruction used when the search line carries no `|` suffix.
pub const DEFAULT_INSTRUCTION: &str = "summarize the results clearly and concisely";

/// A parsed search submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub instruction: String,
}

impl SearchQuery {
    /// Returns true if there is nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }
}

/// Splits a raw search line into query and instruction.
///
/// Never fails: an empty or whitespace-only line yields an empty query.
pub fn parse_search(raw: &str, default_instruction: &str) -> SearchQuery {
    match raw.split_once(SEPARATOR) {
        Some((query, instruction)) => SearchQuery {
            query: query.trim().to_string(),
            instruction: instruction.trim().to_string(),
        },
        None => SearchQuery {
            query: raw.trim().to_string(),
            instruction: default_instruction.to_string(),
        },
    }
}
