use std::cmp::Ordering;
use std::collections::HashMap;
use crate::core::{Descriptor, DescriptorRef};

/// Culture service injected into a collection: folds one character for
/// case-insensitive matching.
pub type CaseFold = fn(char) -> char;

/// Ordinal fold: the simple upper-case mapping of a single code point.
///
/// Characters whose upper case expands to several code points are left
/// unchanged, and combining sequences are never composed, so `"a\u{30a}"`
/// and `"\u{e5}"` stay distinct.
pub fn ordinal_fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

pub(crate) fn names_equal(a: &str, b: &str, fold: CaseFold) -> bool {
    a.chars().map(fold).eq(b.chars().map(fold))
}

pub(crate) fn compare_names(a: &str, b: &str, fold: CaseFold) -> Ordering {
    a.chars().map(fold).cmp(b.chars().map(fold))
}

fn fold_name(name: &str, fold: CaseFold) -> String {
    name.chars().map(fold).collect()
}

/// Name → first slot position, derived from the ordered store.
#[derive(Debug, Clone, Default)]
pub(crate) struct NameIndex {
    exact: HashMap<String, usize>,
    folded: HashMap<String, usize>,
}

impl NameIndex {
    pub(crate) fn build(slots: &[Option<DescriptorRef>], fold: CaseFold) -> Self {
        let mut index = Self::default();

        for (position, slot) in slots.iter().enumerate() {
            let Some(descriptor) = slot else { continue };
            let name = descriptor.name();

            // First in insertion order wins
            index.exact.entry(name.to_string()).or_insert(position);
            index.folded.entry(fold_name(name, fold)).or_insert(position);
        }

        log::trace!(
            "rebuilt name index: {} exact keys, {} folded keys",
            index.exact.len(),
            index.folded.len()
        );
        index
    }

    pub(crate) fn lookup(&self, key: &str, ignore_case: bool, fold: CaseFold) -> Option<usize> {
        if ignore_case {
            self.folded.get(&fold_name(key, fold)).copied()
        } else {
            self.exact.get(key).copied()
        }
    }
}
