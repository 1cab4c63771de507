//! Record model representing one contact in the book.

use crate::domain::{Address, Birthday, Email, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};

/// A single contact.
///
/// A record starts empty and is filled in through the attribute-specific
/// `add_*`, `change_*` and `remove_*` operations. Each operation either
/// applies completely or leaves the record untouched and returns the reason.
///
/// Phones and emails keep their insertion order and never hold two entries
/// with the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<Name>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    emails: Vec<Email>,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record that already carries a name.
    pub fn with_name(name: &str) -> RecordResult<Self> {
        let mut record = Self::new();
        record.add_name(name)?;
        Ok(record)
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn has_phone(&self, phone: &str) -> bool {
        contains_value(&self.phones, phone)
    }

    pub fn has_email(&self, email: &str) -> bool {
        contains_value(&self.emails, email)
    }

    /// Set the name.
    pub fn add_name(&mut self, name: &str) -> RecordResult<()> {
        if name.trim().is_empty() {
            return Err(RecordError::EmptyInput("name"));
        }

        let name = Name::new(name)?;
        tracing::debug!(name = %name, "Name set");
        self.name = Some(name);
        Ok(())
    }

    /// Replace the name.
    ///
    /// This does not re-key a record that is already stored in a
    /// [`Directory`](crate::Directory); rename stored records through
    /// [`Directory::rename_record`](crate::Directory::rename_record).
    pub fn change_name(&mut self, new_name: &str) -> RecordResult<()> {
        self.add_name(new_name)
    }

    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        let phone = Phone::new(phone)?;
        push_unique(&mut self.phones, phone, "phone")
    }

    /// Replace the phone equal to `old` with `new`, keeping its position.
    pub fn change_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        replace_unique(&mut self.phones, old, new, "phone", |raw| Phone::new(raw))
    }

    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<()> {
        remove_value(&mut self.phones, phone, "phone")
    }

    pub fn add_email(&mut self, email: &str) -> RecordResult<()> {
        let email = Email::new(email)?;
        push_unique(&mut self.emails, email, "email")
    }

    /// Replace the email equal to `old` with `new`, keeping its position.
    pub fn change_email(&mut self, old: &str, new: &str) -> RecordResult<()> {
        replace_unique(&mut self.emails, old, new, "email", |raw| Email::new(raw))
    }

    pub fn remove_email(&mut self, email: &str) -> RecordResult<()> {
        remove_value(&mut self.emails, email, "email")
    }

    /// Set the birthday. Only allowed while no birthday is set.
    pub fn add_birthday(&mut self, birthday: &str) -> RecordResult<()> {
        if let Some(existing) = &self.birthday {
            return Err(RecordError::AlreadyExists(format!("birthday {}", existing)));
        }

        let birthday = Birthday::new(birthday)?;
        tracing::debug!(birthday = %birthday, "Birthday set");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Overwrite an existing birthday.
    pub fn change_birthday(&mut self, birthday: &str) -> RecordResult<()> {
        if self.birthday.is_none() {
            return Err(RecordError::NotFound("birthday".to_string()));
        }

        let birthday = Birthday::new(birthday)?;
        tracing::debug!(birthday = %birthday, "Birthday changed");
        self.birthday = Some(birthday);
        Ok(())
    }

    pub fn remove_birthday(&mut self) -> RecordResult<()> {
        let removed = self
            .birthday
            .take()
            .ok_or_else(|| RecordError::NotFound("birthday".to_string()))?;
        tracing::debug!(birthday = %removed, "Birthday removed");
        Ok(())
    }

    /// Set the address, overwriting any previous one.
    pub fn add_address(&mut self, address: &str) -> RecordResult<()> {
        if address.trim().is_empty() {
            return Err(RecordError::EmptyInput("address"));
        }

        let address = Address::new(address)?;
        tracing::debug!(address = %address, "Address set");
        self.address = Some(address);
        Ok(())
    }

    pub fn change_address(&mut self, address: &str) -> RecordResult<()> {
        self.add_address(address)
    }

    pub fn remove_address(&mut self) -> RecordResult<()> {
        let removed = self
            .address
            .take()
            .ok_or_else(|| RecordError::NotFound("address".to_string()))?;
        tracing::debug!(address = %removed, "Address removed");
        Ok(())
    }

    /// Check the duplicate-free invariant on phones and emails.
    ///
    /// Records built through the mutators always pass; this guards records
    /// decoded from storage.
    pub(crate) fn check_unique_values(&self) -> RecordResult<()> {
        first_duplicate(&self.phones, "phone")?;
        first_duplicate(&self.emails, "email")
    }
}

fn contains_value<T: AsRef<str>>(items: &[T], value: &str) -> bool {
    items.iter().any(|item| item.as_ref() == value)
}

fn push_unique<T: AsRef<str>>(items: &mut Vec<T>, item: T, label: &str) -> RecordResult<()> {
    if contains_value(items, item.as_ref()) {
        return Err(RecordError::AlreadyExists(format!("{} {}", label, item.as_ref())));
    }

    tracing::debug!(value = item.as_ref(), "Added {}", label);
    items.push(item);
    Ok(())
}

/// Existence of `old` is checked before anything else; then the collision
/// with `new`, then the format of `new`.
fn replace_unique<T, F>(
    items: &mut [T],
    old: &str,
    new: &str,
    label: &str,
    parse: F,
) -> RecordResult<()>
where
    T: AsRef<str>,
    F: FnOnce(&str) -> Result<T, ValidationError>,
{
    let index = items
        .iter()
        .position(|item| item.as_ref() == old)
        .ok_or_else(|| RecordError::NotFound(format!("{} {}", label, old)))?;

    if contains_value(items, new) {
        return Err(RecordError::AlreadyExists(format!("{} {}", label, new)));
    }

    items[index] = parse(new)?;
    tracing::debug!(old, new, "Changed {}", label);
    Ok(())
}

fn remove_value<T: AsRef<str>>(items: &mut Vec<T>, value: &str, label: &str) -> RecordResult<()> {
    let index = items
        .iter()
        .position(|item| item.as_ref() == value)
        .ok_or_else(|| RecordError::NotFound(format!("{} {}", label, value)))?;

    items.remove(index);
    tracing::debug!(value, "Removed {}", label);
    Ok(())
}

fn first_duplicate<T: AsRef<str>>(items: &[T], label: &str) -> RecordResult<()> {
    for (index, item) in items.iter().enumerate() {
        if contains_value(&items[..index], item.as_ref()) {
            return Err(RecordError::AlreadyExists(format!("{} {}", label, item.as_ref())));
        }
    }
    Ok(())
}
