use crate::collection::DescriptorCollection;
use crate::core::{CollectionError, Descriptor, DescriptorRef, Result, Value};
use super::{Backing, Element, KeyedCollection};

/// Key-based view over the store.
///
/// `Text` keys address the first descriptor with exactly that name,
/// `Integer` keys address a position. Enumeration follows store order and
/// skips null slots.
pub struct DictionaryAdapter<'a> {
    backing: Backing<'a>,
}

enum Key<'k> {
    Name(&'k str),
    Position(usize),
    Other,
}

impl<'a> DictionaryAdapter<'a> {
    pub fn new(collection: &'a mut DescriptorCollection) -> Self {
        Self { backing: Backing::Exclusive(collection) }
    }

    pub fn shared(collection: &'a DescriptorCollection) -> Self {
        Self { backing: Backing::Shared(collection) }
    }

    fn parse_key(key: &Value) -> Result<Key<'_>> {
        match key {
            Value::Null => Err(CollectionError::InvalidArgument("key must not be null".to_string())),
            Value::Text(name) => Ok(Key::Name(name)),
            Value::Integer(i) => usize::try_from(*i)
                .map(Key::Position)
                .map_err(|_| CollectionError::InvalidArgument(format!("negative index {}", i))),
            _ => Ok(Key::Other),
        }
    }

    fn require_descriptor(value: Element) -> Result<DescriptorRef> {
        match value {
            Element::Descriptor(descriptor) => Ok(descriptor),
            other => Err(CollectionError::InvalidArgument(format!(
                "value must be a descriptor, got {}",
                other.type_name()
            ))),
        }
    }

    /// Name/descriptor pairs in store order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DescriptorRef)> {
        self.backing.collection().descriptors().map(|d| (d.name(), d))
    }
}

impl KeyedCollection for DictionaryAdapter<'_> {
    fn count(&self) -> usize {
        self.backing.collection().count()
    }

    fn is_read_only(&self) -> bool {
        self.backing.is_read_only()
    }

    fn is_fixed_size(&self) -> bool {
        self.backing.is_read_only()
    }

    fn get(&self, key: &Value) -> Result<Option<DescriptorRef>> {
        let collection = self.backing.collection();
        match Self::parse_key(key)? {
            Key::Name(name) => Ok(collection.get(name)),
            Key::Position(index) => Ok(collection.at(index)?.cloned()),
            Key::Other => Ok(None),
        }
    }

    fn set(&mut self, key: &Value, value: Element) -> Result<()> {
        let collection = self.backing.writable("replace an item")?;
        let parsed = Self::parse_key(key)?;
        let descriptor = Self::require_descriptor(value)?;

        match parsed {
            Key::Position(index) => collection.replace_slot(index, Some(descriptor)),
            Key::Name(name) => match collection.index_of_name(name) {
                Some(index) => collection.replace_slot(index, Some(descriptor)),
                None => {
                    collection.push_slot(Some(descriptor));
                    Ok(())
                }
            },
            Key::Other => Err(CollectionError::InvalidArgument(format!(
                "unsupported {} key {}",
                key.type_name(),
                key
            ))),
        }
    }

    /// Append `value`; the descriptor's own name keys it, `key` is not stored.
    ///
    /// The value is validated before the read-only flag is consulted.
    fn add(&mut self, _key: &Value, value: Element) -> Result<()> {
        let descriptor = Self::require_descriptor(value)?;
        self.backing.writable("add")?.push_slot(Some(descriptor));
        Ok(())
    }

    fn remove(&mut self, key: &Value) -> Result<()> {
        let collection = self.backing.writable("remove")?;

        let position = match Self::parse_key(key)? {
            Key::Name(name) => collection.index_of_name(name),
            Key::Position(_) | Key::Other => None,
        };
        if let Some(position) = position {
            collection.remove_slot(position)?;
        }
        Ok(())
    }

    fn contains(&self, key: &Value) -> Result<bool> {
        match Self::parse_key(key)? {
            Key::Name(name) => Ok(self.backing.collection().index_of_name(name).is_some()),
            Key::Position(_) | Key::Other => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<()> {
        self.backing.writable("clear")?.clear()
    }

    fn keys(&self) -> Vec<String> {
        self.iter().map(|(name, _)| name.to_string()).collect()
    }

    fn values(&self) -> Vec<DescriptorRef> {
        self.backing.collection().descriptors().cloned().collect()
    }
}
