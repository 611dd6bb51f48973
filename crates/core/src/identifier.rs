//! Human-readable demand identifiers.
//!
//! Identifiers are derived from the number of demands currently stored:
//! `DMD-` followed by `count + 1`, zero-padded to four digits.
//!
//! The count is read from the store at creation time, so two concurrent
//! creates can compute the same identifier, and deleting a demand lets the
//! next create land on an identifier that is still in use. The store's
//! uniqueness constraint rejects the second insert in both cases.

/// Prefix shared by every demand identifier.
pub const DEMAND_ID_PREFIX: &str = "DMD-";

/// Minimum number of digits after the prefix.
pub const DEMAND_ID_WIDTH: usize = 4;

/// Produce the identifier for the next demand given the current stored count.
///
/// # Examples
///
/// ```
/// use demandboard_core::identifier::next_demand_id;
///
/// assert_eq!(next_demand_id(0), "DMD-0001");
/// assert_eq!(next_demand_id(41), "DMD-0042");
/// ```
pub fn next_demand_id(count: u64) -> String {
    format!(
        "{DEMAND_ID_PREFIX}{:0width$}",
        count + 1,
        width = DEMAND_ID_WIDTH
    )
}
