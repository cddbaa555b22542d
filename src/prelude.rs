//! Everything needed to build, query and adapt a descriptor collection.
//!
//! The adapter traits are included so `as_list()` / `as_dictionary()` views
//! can be used without further imports.

pub use crate::{
    CollectionError, CollectionOptions, DataType, Descriptor, DescriptorCollection,
    DescriptorComparer, DescriptorRef, Element, IndexedCollection, KeyedCollection,
    NameComparer, PropertyDescriptor, Result, Value, ValueComparer,
};
