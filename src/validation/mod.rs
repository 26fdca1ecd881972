pub mod collection;
pub mod field;

pub use collection::{CollectionValidator, Rejection, RejectionCause, ValidationReport};
pub use field::{FieldError, FieldValidator, ValidationResult};
