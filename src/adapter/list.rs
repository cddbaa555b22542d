use crate::collection::DescriptorCollection;
use crate::core::{CollectionError, DescriptorRef, Result, Value};
use super::{Backing, Element, IndexedCollection};

/// Index-based view accepting untyped elements.
///
/// Unlike the native API it can store null slots. Every mutator reports
/// `NotModifiable` on a read-only collection or a shared view before it
/// inspects the value.
pub struct ListAdapter<'a> {
    backing: Backing<'a>,
}

impl<'a> ListAdapter<'a> {
    pub fn new(collection: &'a mut DescriptorCollection) -> Self {
        Self { backing: Backing::Exclusive(collection) }
    }

    pub fn shared(collection: &'a DescriptorCollection) -> Self {
        Self { backing: Backing::Shared(collection) }
    }

    fn to_slot(value: Element) -> Result<Option<DescriptorRef>> {
        match value {
            Element::Null => Ok(None),
            Element::Descriptor(descriptor) => Ok(Some(descriptor)),
            Element::Scalar(value) => Err(Self::invalid_cast(&value)),
        }
    }

    fn invalid_cast(value: &Value) -> CollectionError {
        CollectionError::InvalidCast(format!(
            "cannot use {} value {} as a descriptor",
            value.type_name(),
            value
        ))
    }
}

impl IndexedCollection for ListAdapter<'_> {
    fn count(&self) -> usize {
        self.backing.collection().count()
    }

    fn is_read_only(&self) -> bool {
        self.backing.is_read_only()
    }

    fn is_fixed_size(&self) -> bool {
        self.backing.is_read_only()
    }

    fn get(&self, index: usize) -> Result<Element> {
        Ok(self.backing.collection().at(index)?.into())
    }

    fn set(&mut self, index: usize, value: Element) -> Result<()> {
        let collection = self.backing.writable("replace an item")?;
        let slot = Self::to_slot(value)?;
        collection.replace_slot(index, slot)
    }

    fn add(&mut self, value: Element) -> Result<usize> {
        let collection = self.backing.writable("add")?;
        let slot = Self::to_slot(value)?;
        Ok(collection.push_slot(slot))
    }

    fn insert(&mut self, index: usize, value: Element) -> Result<()> {
        let collection = self.backing.writable("insert")?;
        let slot = Self::to_slot(value)?;
        collection.insert_slot(index, slot)
    }

    fn remove(&mut self, value: &Element) -> Result<()> {
        let collection = self.backing.writable("remove")?;
        let position = match value {
            Element::Null => collection.index_of_null(),
            Element::Descriptor(descriptor) => collection.index_of(descriptor),
            Element::Scalar(value) => return Err(Self::invalid_cast(value)),
        };
        if let Some(position) = position {
            collection.remove_slot(position)?;
        }
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<()> {
        self.backing.writable("remove an item")?.remove_at(index).map(|_| ())
    }

    fn clear(&mut self) -> Result<()> {
        self.backing.writable("clear")?.clear()
    }

    fn contains(&self, value: &Element) -> bool {
        self.index_of(value).is_some()
    }

    fn index_of(&self, value: &Element) -> Option<usize> {
        let collection = self.backing.collection();
        match value {
            Element::Null => collection.index_of_null(),
            Element::Descriptor(descriptor) => collection.index_of(descriptor),
            Element::Scalar(_) => None,
        }
    }
}
