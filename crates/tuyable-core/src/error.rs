use core::fmt;

/// Errors raised while assembling a [`NumberRegistry`](crate::NumberRegistry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The same product id was registered twice under one category.
    DuplicateProduct {
        category: &'static str,
        product_id: &'static str,
    },
    /// A category received a second fallback list.
    DuplicateFallback { category: &'static str },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateProduct {
                category,
                product_id,
            } => write!(
                f,
                "product '{product_id}' registered twice in category '{category}'"
            ),
            Self::DuplicateFallback { category } => {
                write!(f, "fallback list registered twice in category '{category}'")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Errors raised by packed program payload helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadError {
    /// The payload is shorter than the field being addressed.
    TooShort { required: usize, actual: usize },
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { required, actual } => write!(
                f,
                "payload too short: need {required} bytes, got {actual}"
            ),
        }
    }
}

impl std::error::Error for PayloadError {}
