pub mod descriptor;
pub mod error;
pub mod value;

pub use descriptor::{Descriptor, DescriptorRef, PropertyDescriptor};
pub(crate) use descriptor::same_descriptor;
pub use error::{CollectionError, Result};
pub use value::{DataType, Value};
