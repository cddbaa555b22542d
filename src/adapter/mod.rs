//! Dynamically typed views over a `DescriptorCollection`.
//!
//! `as_list()` / `as_dictionary()` borrow the collection shared and report
//! themselves read-only. `as_list_mut()` / `as_dictionary_mut()` borrow it
//! exclusively and derive `is_read_only` and `is_fixed_size` from its
//! read-only bit on every call.

pub mod dictionary;
pub mod list;

use std::any::Any;
use crate::collection::DescriptorCollection;
use crate::core::{CollectionError, DescriptorRef, Result, Value};

pub use dictionary::DictionaryAdapter;
pub use list::ListAdapter;

/// Value handed to or returned from an adapter
#[derive(Debug, Clone)]
pub enum Element {
    Null,
    Descriptor(DescriptorRef),
    /// Anything that is not a descriptor
    Scalar(Value),
}

impl Element {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Descriptor(_) => "DESCRIPTOR",
            Self::Scalar(value) => value.type_name(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<DescriptorRef> for Element {
    fn from(descriptor: DescriptorRef) -> Self {
        Self::Descriptor(descriptor)
    }
}

impl From<Option<DescriptorRef>> for Element {
    fn from(slot: Option<DescriptorRef>) -> Self {
        slot.map_or(Self::Null, Self::Descriptor)
    }
}

impl From<Option<&DescriptorRef>> for Element {
    fn from(slot: Option<&DescriptorRef>) -> Self {
        slot.cloned().into()
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}

/// List-shaped access: positions and untyped elements
pub trait IndexedCollection {
    fn count(&self) -> usize;
    fn is_read_only(&self) -> bool;
    fn is_fixed_size(&self) -> bool;

    fn is_synchronized(&self) -> bool {
        false
    }

    fn sync_root(&self) -> Option<&dyn Any> {
        None
    }

    fn get(&self, index: usize) -> Result<Element>;
    fn set(&mut self, index: usize, value: Element) -> Result<()>;
    fn add(&mut self, value: Element) -> Result<usize>;
    fn insert(&mut self, index: usize, value: Element) -> Result<()>;
    fn remove(&mut self, value: &Element) -> Result<()>;
    fn remove_at(&mut self, index: usize) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn contains(&self, value: &Element) -> bool;
    fn index_of(&self, value: &Element) -> Option<usize>;
}

/// Dictionary-shaped access keyed by descriptor name (or position)
pub trait KeyedCollection {
    fn count(&self) -> usize;
    fn is_read_only(&self) -> bool;
    fn is_fixed_size(&self) -> bool;

    fn is_synchronized(&self) -> bool {
        false
    }

    fn sync_root(&self) -> Option<&dyn Any> {
        None
    }

    fn get(&self, key: &Value) -> Result<Option<DescriptorRef>>;
    fn set(&mut self, key: &Value, value: Element) -> Result<()>;
    fn add(&mut self, key: &Value, value: Element) -> Result<()>;
    fn remove(&mut self, key: &Value) -> Result<()>;
    fn contains(&self, key: &Value) -> Result<bool>;
    fn clear(&mut self) -> Result<()>;
    fn keys(&self) -> Vec<String>;
    fn values(&self) -> Vec<DescriptorRef>;
}

/// The collection behind a view
pub(crate) enum Backing<'a> {
    Shared(&'a DescriptorCollection),
    Exclusive(&'a mut DescriptorCollection),
}

impl Backing<'_> {
    pub(crate) fn collection(&self) -> &DescriptorCollection {
        match self {
            Self::Shared(collection) => *collection,
            Self::Exclusive(collection) => &**collection,
        }
    }

    pub(crate) fn is_read_only(&self) -> bool {
        match self {
            Self::Shared(_) => true,
            Self::Exclusive(collection) => collection.is_read_only(),
        }
    }

    /// The collection for mutation, or `NotModifiable`
    pub(crate) fn writable(&mut self, operation: &str) -> Result<&mut DescriptorCollection> {
        match self {
            Self::Shared(collection) => {
                collection.ensure_writable(operation)?;
                Err(CollectionError::NotModifiable(format!(
                    "cannot {} through a shared view",
                    operation
                )))
            }
            Self::Exclusive(collection) => {
                collection.ensure_writable(operation)?;
                Ok(&mut **collection)
            }
        }
    }
}

impl DescriptorCollection {
    /// Read-only list view; works on `shared_empty()`
    pub fn as_list(&self) -> ListAdapter<'_> {
        ListAdapter::shared(self)
    }

    pub fn as_list_mut(&mut self) -> ListAdapter<'_> {
        ListAdapter::new(self)
    }

    /// Read-only dictionary view; works on `shared_empty()`
    pub fn as_dictionary(&self) -> DictionaryAdapter<'_> {
        DictionaryAdapter::shared(self)
    }

    pub fn as_dictionary_mut(&mut self) -> DictionaryAdapter<'_> {
        DictionaryAdapter::new(self)
    }
}
