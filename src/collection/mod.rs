// ============================================================================
// src/collection/mod.rs - Ordered Descriptor Store
// ============================================================================
//
// Insertion-ordered slots with a derived name index. Slots are `Option`
// because the list adapter may store null entries; the native API never
// stores one. Every mutator checks the read-only flag before looking at its
// arguments and leaves the store untouched when it fails.
//
// ============================================================================

pub mod config;
pub mod name_index;
pub mod sort;

use std::sync::OnceLock;
use lazy_static::lazy_static;
use crate::core::{CollectionError, Descriptor, DescriptorRef, Result, same_descriptor};
use config::CollectionOptions;
use name_index::{CaseFold, NameIndex};

lazy_static! {
    static ref EMPTY: DescriptorCollection = DescriptorCollection::new(None, true);
}

#[derive(Debug, Clone)]
pub struct DescriptorCollection {
    slots: Vec<Option<DescriptorRef>>,
    read_only: bool,
    case_fold: CaseFold,
    /// Rebuilt on first lookup after a mutation
    index: OnceLock<NameIndex>,
}

impl DescriptorCollection {
    /// Create a collection from an optional initial sequence
    pub fn new(items: Option<Vec<DescriptorRef>>, read_only: bool) -> Self {
        Self::with_options(items, CollectionOptions::new().read_only(read_only))
    }

    pub fn with_options(items: Option<Vec<DescriptorRef>>, options: CollectionOptions) -> Self {
        let slots = items
            .unwrap_or_default()
            .into_iter()
            .map(Some)
            .collect();

        Self {
            slots,
            read_only: options.read_only,
            case_fold: options.case_fold,
            index: OnceLock::new(),
        }
    }

    pub(crate) fn from_slots(slots: Vec<Option<DescriptorRef>>, case_fold: CaseFold) -> Self {
        Self {
            slots,
            read_only: false,
            case_fold,
            index: OnceLock::new(),
        }
    }

    /// The process-wide empty, read-only collection
    pub fn shared_empty() -> &'static DescriptorCollection {
        &EMPTY
    }

    /// Owned copy of the shared empty, read-only collection.
    ///
    /// Every mutator on the copy fails with `NotModifiable`. Use
    /// `shared_empty()` for the instance itself.
    pub fn empty() -> DescriptorCollection {
        EMPTY.clone()
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn case_fold(&self) -> CaseFold {
        self.case_fold
    }

    /// Slot at `index`; `Ok(None)` is a null slot stored through the list adapter
    pub fn at(&self, index: usize) -> Result<Option<&DescriptorRef>> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                count: self.slots.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&DescriptorRef>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Non-null slots in store order
    pub fn descriptors(&self) -> impl Iterator<Item = &DescriptorRef> {
        self.slots.iter().flatten()
    }

    pub fn names(&self) -> Vec<&str> {
        self.descriptors().map(|d| d.name()).collect()
    }

    pub fn to_vec(&self) -> Vec<Option<DescriptorRef>> {
        self.slots.clone()
    }

    /// Position of `descriptor` by identity
    pub fn index_of(&self, descriptor: &DescriptorRef) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(d) if same_descriptor(d, descriptor)))
    }

    pub fn contains(&self, descriptor: &DescriptorRef) -> bool {
        self.index_of(descriptor).is_some()
    }

    /// Look up a descriptor by name; the first match in insertion order wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use propdesc::{DescriptorCollection, PropertyDescriptor};
    ///
    /// let descriptors = DescriptorCollection::new(
    ///     Some(vec![PropertyDescriptor::new("Width", 10i64).into_ref()]),
    ///     false,
    /// );
    ///
    /// assert!(descriptors.find("Width", false)?.is_some());
    /// assert!(descriptors.find("width", false)?.is_none());
    /// assert!(descriptors.find("width", true)?.is_some());
    /// assert!(descriptors.find(None::<&str>, true).is_err());
    /// # Ok::<(), propdesc::CollectionError>(())
    /// ```
    pub fn find<'k>(&self, key: impl Into<Option<&'k str>>, ignore_case: bool) -> Result<Option<DescriptorRef>> {
        let key = key
            .into()
            .ok_or_else(|| CollectionError::InvalidArgument("key must not be null".to_string()))?;

        let index = self
            .index
            .get_or_init(|| NameIndex::build(&self.slots, self.case_fold));

        Ok(index
            .lookup(key, ignore_case, self.case_fold)
            .and_then(|position| self.slots[position].clone()))
    }

    /// Exact-name lookup
    pub fn get(&self, name: &str) -> Option<DescriptorRef> {
        self.find(name, false).ok().flatten()
    }

    // ========================================================================
    // Native mutation API
    // ========================================================================

    pub(crate) fn ensure_writable(&self, operation: &str) -> Result<()> {
        if self.read_only {
            return Err(CollectionError::read_only(operation));
        }
        Ok(())
    }

    fn require_descriptor(descriptor: Option<DescriptorRef>) -> Result<DescriptorRef> {
        descriptor.ok_or_else(|| CollectionError::InvalidArgument("descriptor must not be null".to_string()))
    }

    /// Append a descriptor, returning its index
    pub fn add(&mut self, descriptor: impl Into<Option<DescriptorRef>>) -> Result<usize> {
        self.ensure_writable("add")?;
        let descriptor = Self::require_descriptor(descriptor.into())?;
        Ok(self.push_slot(Some(descriptor)))
    }

    /// Insert at `index`, shifting later descriptors; `index == count` appends
    pub fn insert(&mut self, index: usize, descriptor: impl Into<Option<DescriptorRef>>) -> Result<()> {
        self.ensure_writable("insert")?;
        let descriptor = Self::require_descriptor(descriptor.into())?;
        self.insert_slot(index, Some(descriptor))
    }

    /// Remove the first slot holding `descriptor`.
    ///
    /// Returns `false` without error when nothing matches, including `None`.
    pub fn remove<'d>(&mut self, descriptor: impl Into<Option<&'d DescriptorRef>>) -> Result<bool> {
        self.ensure_writable("remove")?;

        let Some(position) = descriptor.into().and_then(|d| self.index_of(d)) else {
            return Ok(false);
        };
        self.remove_slot(position)?;
        Ok(true)
    }

    /// Remove and return the slot at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Option<DescriptorRef>> {
        self.ensure_writable("remove an item")?;
        self.remove_slot(index)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.ensure_writable("clear")?;
        self.slots.clear();
        self.invalidate();
        log::debug!("cleared descriptor collection");
        Ok(())
    }

    // ========================================================================
    // Unchecked slot operations (callers have already checked read-only)
    // ========================================================================

    fn invalidate(&mut self) {
        self.index.take();
    }

    fn out_of_range(&self, index: usize) -> CollectionError {
        CollectionError::IndexOutOfRange {
            index,
            count: self.slots.len(),
        }
    }

    pub(crate) fn push_slot(&mut self, slot: Option<DescriptorRef>) -> usize {
        self.slots.push(slot);
        self.invalidate();
        let index = self.slots.len() - 1;
        log::debug!("added slot {} (count {})", index, self.slots.len());
        index
    }

    pub(crate) fn insert_slot(&mut self, index: usize, slot: Option<DescriptorRef>) -> Result<()> {
        if index > self.slots.len() {
            return Err(self.out_of_range(index));
        }
        self.slots.insert(index, slot);
        self.invalidate();
        log::debug!("inserted slot {} (count {})", index, self.slots.len());
        Ok(())
    }

    pub(crate) fn replace_slot(&mut self, index: usize, slot: Option<DescriptorRef>) -> Result<()> {
        if index >= self.slots.len() {
            return Err(self.out_of_range(index));
        }
        self.slots[index] = slot;
        self.invalidate();
        log::debug!("replaced slot {}", index);
        Ok(())
    }

    pub(crate) fn remove_slot(&mut self, index: usize) -> Result<Option<DescriptorRef>> {
        if index >= self.slots.len() {
            return Err(self.out_of_range(index));
        }
        let removed = self.slots.remove(index);
        self.invalidate();
        log::debug!("removed slot {} (count {})", index, self.slots.len());
        Ok(removed)
    }

    /// Position of the first null slot
    pub(crate) fn index_of_null(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Position of the first descriptor named exactly `name`
    pub(crate) fn index_of_name(&self, name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(d) if d.name() == name))
    }
}

impl Default for DescriptorCollection {
    fn default() -> Self {
        Self::with_options(None, CollectionOptions::default())
    }
}

impl FromIterator<DescriptorRef> for DescriptorCollection {
    fn from_iter<I: IntoIterator<Item = DescriptorRef>>(iter: I) -> Self {
        Self::new(Some(iter.into_iter().collect()), false)
    }
}

impl<'a> IntoIterator for &'a DescriptorCollection {
    type Item = Option<&'a DescriptorRef>;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Option<DescriptorRef>>,
        fn(&'a Option<DescriptorRef>) -> Option<&'a DescriptorRef>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().map(slot_ref as fn(&'a Option<DescriptorRef>) -> Option<&'a DescriptorRef>)
    }
}

fn slot_ref(slot: &Option<DescriptorRef>) -> Option<&DescriptorRef> {
    slot.as_ref()
}
