// Agency clients: contact data, budget and destination preference

use std::fmt;

use crate::destination::Destination;
use crate::preference::Preference;
use crate::tour::Tour;

/// Identifier handed out by the agency when a client is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(pub(crate) u64);

impl ClientId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C-{:04}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    email: String,
    budget: u32,
    preference: Preference,
    national_id: Option<String>,
}

impl Client {
    pub fn new(email: impl Into<String>, budget: u32) -> Self {
        Self {
            email: email.into(),
            budget,
            preference: Preference::default(),
            national_id: None,
        }
    }

    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = preference;
        self
    }

    pub fn with_national_id(mut self, national_id: impl Into<String>) -> Self {
        self.national_id = Some(national_id.into());
        self
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn preference(&self) -> &Preference {
        &self.preference
    }

    pub fn national_id(&self) -> Option<&str> {
        self.national_id.as_deref()
    }

    /// Replaces the preference outright.
    pub fn change_preference(&mut self, preference: Preference) {
        self.preference = preference;
    }

    pub fn set_budget(&mut self, amount: u32) {
        self.budget = amount;
    }

    /// Flips an alternating preference; see [`Preference::toggle`].
    pub fn toggle_preference(&mut self) -> bool {
        self.preference.toggle()
    }

    pub fn is_price_adequate(&self, tour: &Tour) -> bool {
        tour.cost_per_person() <= self.budget
    }

    pub fn is_destination_adequate(&self, destination: &Destination) -> bool {
        self.preference.is_suitable(destination)
    }

    /// True when every destination of the tour suits this client.
    pub fn accepts_all_destinations(&self, tour: &Tour) -> bool {
        tour.destinations()
            .iter()
            .all(|destination| self.is_destination_adequate(destination))
    }
}
