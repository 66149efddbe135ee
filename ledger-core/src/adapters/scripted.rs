//! Scripted account number adapter

use std::collections::VecDeque;

use crate::domain::account::{SUFFIX_MAX, SUFFIX_MIN};
use crate::ports::AccountNumberSource;

/// Replays a fixed list of suffixes, then counts upward from the last one
///
/// Out-of-range entries are clamped into 100000..=999999.
pub struct ScriptedAccountNumbers {
    queue: VecDeque<u32>,
    last: u32,
}

impl ScriptedAccountNumbers {
    pub fn new(suffixes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            queue: suffixes.into_iter().collect(),
            last: SUFFIX_MIN - 1,
        }
    }
}

impl AccountNumberSource for ScriptedAccountNumbers {
    fn next_suffix(&mut self) -> u32 {
        let next = match self.queue.pop_front() {
            Some(suffix) => suffix.clamp(SUFFIX_MIN, SUFFIX_MAX),
            None if self.last >= SUFFIX_MAX => SUFFIX_MIN,
            None => self.last + 1,
        };
        self.last = next;
        next
    }
}
