// ============================================================================
// src/collection/sort.rs - Descriptor Ordering
// ============================================================================
//
// Sorting never touches the source collection: every entry point copies the
// slots, orders the copy and wraps it in a new writable collection.
//
// Ordering rules:
// - Names listed explicitly come first, in list order, one descriptor each;
//   an exact-case match is claimed before a case-folded one
// - Everything else follows, ordered by the comparer (default: folded name)
// - Stable throughout: equal keys keep their pre-sort relative order
// - Null slots sort before every descriptor
//
// ============================================================================

use std::cmp::Ordering;
use crate::core::{Descriptor, DescriptorRef};
use super::DescriptorCollection;
use super::name_index::{CaseFold, compare_names, names_equal, ordinal_fold};

// ============================================================================
// COMPARERS
// ============================================================================

/// Two-argument ordering over descriptors
pub trait DescriptorComparer {
    fn compare(&self, a: &dyn Descriptor, b: &dyn Descriptor) -> Ordering;
}

impl<F> DescriptorComparer for F
where
    F: Fn(&dyn Descriptor, &dyn Descriptor) -> Ordering,
{
    fn compare(&self, a: &dyn Descriptor, b: &dyn Descriptor) -> Ordering {
        self(a, b)
    }
}

/// Default rule: case-insensitive comparison of descriptor names
#[derive(Debug, Clone, Copy)]
pub struct NameComparer {
    fold: CaseFold,
}

impl NameComparer {
    pub fn new(fold: CaseFold) -> Self {
        Self { fold }
    }
}

impl Default for NameComparer {
    fn default() -> Self {
        Self::new(ordinal_fold)
    }
}

impl DescriptorComparer for NameComparer {
    fn compare(&self, a: &dyn Descriptor, b: &dyn Descriptor) -> Ordering {
        compare_names(a.name(), b.name(), self.fold)
    }
}

/// Orders descriptors by `Descriptor::value()`, NULL first.
///
/// Values that cannot be compared with each other count as equal, so the
/// stable sort leaves them in their original relative order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueComparer;

impl DescriptorComparer for ValueComparer {
    fn compare(&self, a: &dyn Descriptor, b: &dyn Descriptor) -> Ordering {
        a.value().compare(&b.value()).unwrap_or(Ordering::Equal)
    }
}

fn compare_slots(
    a: &Option<DescriptorRef>,
    b: &Option<DescriptorRef>,
    comparer: &dyn DescriptorComparer,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => comparer.compare(a.as_ref(), b.as_ref()),
    }
}

fn claim_position(slots: &[Option<DescriptorRef>], matches: impl Fn(&str) -> bool) -> Option<usize> {
    slots
        .iter()
        .position(|slot| slot.as_ref().is_some_and(|descriptor| matches(descriptor.name())))
}

// ============================================================================
// SORT ENTRY POINTS
// ============================================================================

impl DescriptorCollection {
    /// Copy sorted by name, case-insensitively
    ///
    /// # Examples
    ///
    /// ```
    /// use propdesc::{DescriptorCollection, PropertyDescriptor};
    ///
    /// let descriptors: DescriptorCollection = ["b", "A", "c"]
    ///     .into_iter()
    ///     .map(|name| PropertyDescriptor::new(name, 0i64).into_ref())
    ///     .collect();
    ///
    /// let sorted = descriptors.sort();
    /// assert_eq!(sorted.names(), vec!["A", "b", "c"]);
    /// assert_eq!(descriptors.names(), vec!["b", "A", "c"]);
    /// ```
    pub fn sort(&self) -> DescriptorCollection {
        self.sort_with(None, None)
    }

    /// Copy with the listed names first, the rest sorted by name.
    ///
    /// `None` entries and names without a matching descriptor are skipped.
    pub fn sort_by_names(&self, names: Option<&[Option<&str>]>) -> DescriptorCollection {
        self.sort_with(names, None)
    }

    /// Copy sorted by `comparer`, or by name when `None`
    pub fn sort_by_comparer(&self, comparer: Option<&dyn DescriptorComparer>) -> DescriptorCollection {
        self.sort_with(None, comparer)
    }

    /// Copy with the listed names first, the rest sorted by `comparer`.
    ///
    /// Each listed name claims the first unclaimed descriptor with exactly
    /// that name, or failing that the first one matching it under the case
    /// fold. Unclaimed descriptors follow, ordered by `comparer` or by name
    /// when `None`.
    pub fn sort_with(
        &self,
        names: Option<&[Option<&str>]>,
        comparer: Option<&dyn DescriptorComparer>,
    ) -> DescriptorCollection {
        let fold = self.case_fold;
        let mut remaining = self.slots.clone();
        let mut ordered = Vec::with_capacity(remaining.len());

        if let Some(names) = names {
            for name in names.iter().flatten() {
                let claimed = claim_position(&remaining, |candidate| candidate == *name)
                    .or_else(|| claim_position(&remaining, |candidate| names_equal(candidate, name, fold)));
                if let Some(position) = claimed {
                    ordered.push(remaining.remove(position));
                }
            }
        }

        let default_comparer = NameComparer::new(fold);
        let comparer: &dyn DescriptorComparer = match comparer {
            Some(comparer) => comparer,
            None => &default_comparer,
        };
        let placed = ordered.len();

        // Vec::sort_by is stable
        remaining.sort_by(|a, b| compare_slots(a, b, comparer));
        ordered.extend(remaining);

        log::debug!(
            "sorted {} descriptors ({} placed by name list)",
            ordered.len(),
            placed
        );

        DescriptorCollection::from_slots(ordered, fold)
    }
}

// ============================================================================
// TESTS
// ============================================================================
