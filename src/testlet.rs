//! Testlet - validated item set with constrained random ordering
//!
//! A [`Testlet`] owns exactly `COUNT_TOTAL` items and produces orderings
//! where the first `COUNT_OUT_OF_ORDER` positions hold pretest items drawn
//! uniformly without replacement, and the remaining positions hold a uniform
//! permutation of everything else.
//!
//! # Random source
//!
//! [`Testlet::randomize`] draws from the calling thread's generator, so
//! concurrent callers never contend on shared state. [`Testlet::randomize_with`]
//! takes any caller-owned [`Rng`]; pass a seeded `StdRng` for replayable
//! orderings.
//!
//! # Example
//!
//! ```rust
//! use testlet_randomizer::{Item, Testlet};
//!
//! let mut items: Vec<Item> = (0..4).map(|i| Item::pretest(i.to_string())).collect();
//! items.extend((4..10).map(|i| Item::operational(i.to_string())));
//!
//! let testlet = Testlet::new("T-1", items).unwrap();
//! let ordered = testlet.randomize();
//! assert_eq!(ordered.len(), 10);
//! assert!(ordered[0].is_pretest() && ordered[1].is_pretest());
//! ```

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

use crate::core_types::{
    COUNT_IN_ORDER, COUNT_OPERATIONAL, COUNT_OUT_OF_ORDER, COUNT_PRETEST, COUNT_TOTAL,
};
use crate::error::TestletError;
use crate::models::{Item, ItemType};

#[derive(Debug, Clone)]
pub struct Testlet {
    testlet_id: String,
    items: Vec<Item>,
    /// Positions of pretest items in `items`
    pretest: [usize; COUNT_PRETEST],
    /// Positions of operational items in `items`
    operational: [usize; COUNT_OPERATIONAL],
}

impl Testlet {
    /// Validate `items` and build a testlet.
    ///
    /// `items` accepts either a `Vec<Item>` or an `Option<Vec<Item>>`; `None`
    /// is the absent collection.
    ///
    /// # Errors
    /// - [`TestletError::NullInput`] when `items` is `None`
    /// - [`TestletError::InvalidComposition`] when either category count is off
    /// - [`TestletError::DuplicateIdentifier`] when two items share an id
    pub fn new(
        testlet_id: impl Into<String>,
        items: impl Into<Option<Vec<Item>>>,
    ) -> Result<Self, TestletError> {
        let testlet_id = testlet_id.into();
        let validated = items
            .into()
            .ok_or(TestletError::NullInput)
            .and_then(|items| Self::index_items(&items).map(|idx| (items, idx)));

        match validated {
            Ok((items, (pretest, operational))) => {
                tracing::debug!(testlet_id = %testlet_id, items = items.len(), "Testlet created");
                Ok(Self {
                    testlet_id,
                    items,
                    pretest,
                    operational,
                })
            }
            Err(e) => {
                tracing::warn!(
                    testlet_id = %testlet_id,
                    code = e.code(),
                    error = %e,
                    "Testlet rejected"
                );
                Err(e)
            }
        }
    }

    /// Check composition and uniqueness, returning the position of every
    /// pretest and operational item.
    fn index_items(
        items: &[Item],
    ) -> Result<([usize; COUNT_PRETEST], [usize; COUNT_OPERATIONAL]), TestletError> {
        let pretest: Vec<usize> = Self::positions_of(items, ItemType::Pretest);
        let pretest: [usize; COUNT_PRETEST] =
            pretest
                .try_into()
                .map_err(|v: Vec<usize>| TestletError::InvalidComposition {
                    item_type: ItemType::Pretest,
                    expected: COUNT_PRETEST,
                    actual: v.len(),
                })?;

        let operational: Vec<usize> = Self::positions_of(items, ItemType::Operational);
        let operational: [usize; COUNT_OPERATIONAL] =
            operational
                .try_into()
                .map_err(|v: Vec<usize>| TestletError::InvalidComposition {
                    item_type: ItemType::Operational,
                    expected: COUNT_OPERATIONAL,
                    actual: v.len(),
                })?;

        let mut seen = FxHashSet::default();
        for item in items {
            if !seen.insert(item.id()) {
                return Err(TestletError::DuplicateIdentifier(item.id().to_string()));
            }
        }

        Ok((pretest, operational))
    }

    fn positions_of(items: &[Item], item_type: ItemType) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.item_type() == item_type)
            .map(|(i, _)| i)
            .collect()
    }

    /// Opaque identifier supplied at construction
    pub fn id(&self) -> &str {
        &self.testlet_id
    }

    /// Validated items in the order they were supplied
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Produce a fresh ordering using the calling thread's generator.
    pub fn randomize(&self) -> Vec<Item> {
        self.randomize_with(&mut rand::thread_rng())
    }

    /// Produce a fresh ordering drawing from `rng`.
    ///
    /// # Layout
    /// ```text
    /// [0 .. COUNT_OUT_OF_ORDER)        pretest only, each draw uniform over
    ///                                  the pretest items not yet drawn
    /// [COUNT_OUT_OF_ORDER .. COUNT_TOTAL)  uniform permutation of the rest
    /// ```
    pub fn randomize_with<R: Rng>(&self, rng: &mut R) -> Vec<Item> {
        let order = self.draw_order(rng);
        order.iter().map(|&i| self.items[i].clone()).collect()
    }

    /// Index-level ordering over `self.items`.
    fn draw_order<R: Rng>(&self, rng: &mut R) -> [usize; COUNT_TOTAL] {
        let mut order = [0usize; COUNT_TOTAL];

        // Candidates live in candidates[..remaining]; a drawn slot is
        // swapped to the tail so the live range stays contiguous.
        let mut candidates = self.pretest;
        let mut remaining = COUNT_PRETEST;
        for slot in order.iter_mut().take(COUNT_OUT_OF_ORDER) {
            let pick = rng.gen_range(0..remaining);
            *slot = candidates[pick];
            remaining -= 1;
            candidates.swap(pick, remaining);
        }

        let suffix = &mut order[COUNT_OUT_OF_ORDER..];
        debug_assert_eq!(suffix.len(), COUNT_IN_ORDER);
        let (leftover, operational) = suffix.split_at_mut(remaining);
        leftover.copy_from_slice(&candidates[..remaining]);
        operational.copy_from_slice(&self.operational);
        suffix.shuffle(rng);

        order
    }
}
