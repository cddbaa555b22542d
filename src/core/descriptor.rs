use std::fmt::Debug;
use std::sync::Arc;
use super::{CollectionError, DataType, Result, Value};

/// Named, typed metadata record stored by a `DescriptorCollection`.
///
/// The collection never mutates a descriptor; it only ever holds shared
/// handles to it and compares handles by identity.
pub trait Descriptor: Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Ordering key used by value-based comparers
    fn value(&self) -> Value {
        Value::Null
    }

    fn property_type(&self) -> DataType {
        DataType::of(&self.value())
    }

    fn is_read_only(&self) -> bool {
        false
    }
}

/// Shared handle to a descriptor; identity is `Arc::ptr_eq`.
pub type DescriptorRef = Arc<dyn Descriptor>;

pub(crate) fn same_descriptor(a: &DescriptorRef, b: &DescriptorRef) -> bool {
    // Data pointers only: vtable pointers for one allocation may differ.
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    pub name: String,
    pub data_type: DataType,
    pub value: Value,
    pub read_only: bool,
}

impl PropertyDescriptor {
    /// Create a descriptor whose type is inferred from its value
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            data_type: DataType::of(&value),
            value,
            read_only: false,
        }
    }

    /// Create a descriptor with a declared type, rejecting incompatible values
    pub fn typed(name: impl Into<String>, data_type: DataType, value: impl Into<Value>) -> Result<Self> {
        let name = name.into();
        let value = value.into();

        if !data_type.is_compatible(&value) {
            return Err(CollectionError::TypeMismatch(format!(
                "Property '{}' expects type {}, got {}",
                name,
                data_type,
                value.type_name()
            )));
        }

        Ok(Self {
            name,
            data_type,
            value,
            read_only: false,
        })
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn into_ref(self) -> DescriptorRef {
        Arc::new(self)
    }
}

impl Descriptor for PropertyDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        self.value.clone()
    }

    fn property_type(&self) -> DataType {
        self.data_type
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }
}
