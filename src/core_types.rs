//! Core types used throughout the system
//!
//! Testlet composition is fixed: every testlet carries exactly
//! `COUNT_PRETEST` pretest items and `COUNT_OPERATIONAL` operational items.

/// Item ID - unique within a testlet, opaque to the randomizer.
pub type ItemId = String;

/// Number of pretest items in a testlet
pub const COUNT_PRETEST: usize = 4;

/// Number of operational items in a testlet
pub const COUNT_OPERATIONAL: usize = 6;

/// Leading positions filled from the pretest pool only
pub const COUNT_OUT_OF_ORDER: usize = 2;

/// Positions filled by the uniformly shuffled remainder
pub const COUNT_IN_ORDER: usize = COUNT_PRETEST + COUNT_OPERATIONAL - COUNT_OUT_OF_ORDER;

/// Total items in a testlet
pub const COUNT_TOTAL: usize = COUNT_PRETEST + COUNT_OPERATIONAL;

// The prefix draws without replacement from the pretest pool.
const _: () = assert!(COUNT_OUT_OF_ORDER <= COUNT_PRETEST);
