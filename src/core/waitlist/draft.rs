// Caller supplied input for registering a guest.
//
// The store trusts drafts as given. `validate` holds the form level rules that
// presentation layers apply before calling the store.

use thiserror::Error;

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("guest name must not be empty")]
    EmptyName,

    #[error("phone number must have between 7 and 15 digits, got {digits}")]
    InvalidPhoneNumber { digits: usize },

    #[error("guest count must be at least 1")]
    InvalidGuestCount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDraft {
    pub name: String,
    pub phone_number: String,
    pub guest_count: u32,
    pub willing_to_share: bool,
}

impl GuestDraft {
    /// Trims the name, keeps only the digits of the phone number and drops the
    /// share preference unless the party is exactly two.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl AsRef<str>,
        guest_count: u32,
        willing_to_share: bool,
    ) -> Self {
        let name: String = name.into();
        let phone_number = phone_number
            .as_ref()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        Self {
            name: name.trim().to_string(),
            phone_number,
            guest_count,
            willing_to_share: guest_count == 2 && willing_to_share,
        }
    }

    pub fn validate(self) -> Result<Self, DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::EmptyName);
        }
        let digits = self.phone_number.chars().filter(char::is_ascii_digit).count();
        if digits != self.phone_number.len()
            || !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
        {
            return Err(DraftError::InvalidPhoneNumber { digits });
        }
        if self.guest_count == 0 {
            return Err(DraftError::InvalidGuestCount);
        }
        Ok(self)
    }
}
