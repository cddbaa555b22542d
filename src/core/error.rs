use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Collection is read-only: {0}")]
    NotModifiable(String),

    #[error("Index {index} is out of range for collection of {count} items")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Invalid cast: {0}")]
    InvalidCast(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
}

pub type Result<T> = std::result::Result<T, CollectionError>;

impl CollectionError {
    pub(crate) fn read_only(operation: &str) -> Self {
        Self::NotModifiable(format!("cannot {} on a read-only collection", operation))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_not_modifiable(&self) -> bool {
        matches!(self, Self::NotModifiable(_))
    }

    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    pub fn is_invalid_cast(&self) -> bool {
        matches!(self, Self::InvalidCast(_))
    }
}
