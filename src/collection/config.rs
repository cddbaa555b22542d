use super::name_index::{CaseFold, ordinal_fold};

/// Construction options for a `DescriptorCollection`
///
/// # Examples
///
/// ```
/// use propdesc::{CollectionOptions, DescriptorCollection};
///
/// let options = CollectionOptions::new().read_only(true);
/// let descriptors = DescriptorCollection::with_options(None, options);
/// assert!(descriptors.is_read_only());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CollectionOptions {
    /// Reject every mutation on every surface
    pub read_only: bool,

    /// Per-character fold applied by case-insensitive lookup and name sorting
    pub case_fold: CaseFold,
}

impl CollectionOptions {
    /// Writable collection with ordinal case folding
    pub fn new() -> Self {
        Self {
            read_only: false,
            case_fold: ordinal_fold,
        }
    }

    /// Set the read-only flag
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Replace the case-folding function
    pub fn case_fold(mut self, fold: CaseFold) -> Self {
        self.case_fold = fold;
        self
    }
}

impl Default for CollectionOptions {
    fn default() -> Self {
        Self::new()
    }
}
