// ============================================================================
// propdesc Library
// ============================================================================

pub mod core;
pub mod collection;
pub mod adapter;
pub mod prelude;

// Re-export main types for convenience
pub use crate::core::{CollectionError, DataType, Descriptor, DescriptorRef, PropertyDescriptor, Result, Value};
pub use crate::collection::DescriptorCollection;
pub use crate::collection::config::CollectionOptions;
pub use crate::collection::name_index::{CaseFold, ordinal_fold};
pub use crate::collection::sort::{DescriptorComparer, NameComparer, ValueComparer};
pub use crate::adapter::{DictionaryAdapter, Element, IndexedCollection, KeyedCollection, ListAdapter};
