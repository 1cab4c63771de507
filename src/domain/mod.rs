//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact record. Each value object
//! validates its input at construction time, so an invalid name, address,
//! phone, email or birthday can never be represented in the system.

pub mod address;
pub mod birthday;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use address::Address;
pub use birthday::Birthday;
pub use email::Email;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
