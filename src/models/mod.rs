//! Data models for the contact book.
//!
//! A [`Record`] is one contact, built from the validated value objects in
//! [`crate::domain`].

pub mod record;

pub use record::Record;
