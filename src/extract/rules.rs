//! Ordered rule evaluation.
//!
//! Every field is derived by a list of independent rules tried in a fixed
//! order; the first rule producing a value wins.

use super::ExtractOptions;

/// Input shared by all rules of one extraction.
pub struct RuleInput<'a> {
    pub text: &'a str,
    /// Trimmed, non-empty lines of `text`.
    pub lines: Vec<&'a str>,
    pub opts: &'a ExtractOptions,
}

impl<'a> RuleInput<'a> {
    pub fn new(text: &'a str, opts: &'a ExtractOptions) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        Self { text, lines, opts }
    }
}

/// One extraction rule: `None` passes to the next rule in the list.
pub type Rule<T> = fn(&RuleInput) -> Option<T>;

/// Result of the first rule that fires.
pub fn first_value<T>(input: &RuleInput, rules: &[Rule<T>]) -> Option<T> {
    rules.iter().find_map(|rule| rule(input))
}
