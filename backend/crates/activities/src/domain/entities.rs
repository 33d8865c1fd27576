//! Domain Entities
//!
//! The activity and its roster rules.

use crate::error::{ActivityError, ActivityResult};

/// Activity entity - an extracurricular offering and its roster
///
/// `participants` is kept in sign-up order and never holds the same
/// email twice. Emails are opaque strings: no case folding, no format check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty roster
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Pre-populate the roster, skipping duplicates
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            let email = email.into();
            if !self.is_enrolled(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Append `email` to the end of the roster
    ///
    /// Capacity is not checked.
    pub fn enroll(&mut self, email: &str) -> ActivityResult<()> {
        if self.is_enrolled(email) {
            return Err(ActivityError::AlreadySignedUp);
        }
        self.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the roster, keeping the order of the others
    pub fn withdraw(&mut self, email: &str) -> ActivityResult<()> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(ActivityError::NotSignedUp)?;
        self.participants.remove(position);
        Ok(())
    }

    /// True once the roster has grown past the advertised capacity
    pub fn exceeds_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }
}
