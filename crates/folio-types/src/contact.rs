use serde::Serialize;
use std::fmt;

/// Fixed fields of the contact card, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContactField {
    Email,
    Phone,
    GitHub,
    LinkedIn,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Email,
        ContactField::Phone,
        ContactField::GitHub,
        ContactField::LinkedIn,
    ];

    /// Entry name under which the value is stored in the Contact section
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::GitHub => "GitHub",
            ContactField::LinkedIn => "LinkedIn",
        }
    }

    /// Single-column icon drawn before the field
    pub fn glyph(self) -> &'static str {
        match self {
            ContactField::Email => "✉",
            ContactField::Phone => "☎",
            ContactField::GitHub => "⎇",
            ContactField::LinkedIn => "⊞",
        }
    }

    /// Links are shown by label and navigate to the stored URL
    pub fn is_link(self) -> bool {
        matches!(self, ContactField::GitHub | ContactField::LinkedIn)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
