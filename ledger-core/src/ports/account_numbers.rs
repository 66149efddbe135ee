//! Account number source port

/// Supplies candidate account number suffixes
///
/// Implementations must only return values in 100000..=999999. The registry
/// decides whether a candidate is accepted, so a source is free to repeat
/// itself.
pub trait AccountNumberSource: Send {
    /// Next six digit candidate
    fn next_suffix(&mut self) -> u32;
}
