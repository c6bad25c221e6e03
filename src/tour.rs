// Group tours: departure, destinations, cost and the enrolled roster

use std::fmt;

use chrono::{Days, NaiveDate};

use crate::client::ClientId;
use crate::destination::Destination;
use crate::error::DomainError;

/// Identifier handed out by the agency when a tour is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TourId(pub(crate) u64);

impl TourId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T-{:04}", self.0)
    }
}

/// A dated group offering.
///
/// Roster and confirmation changes go through the agency; the mutating methods
/// are crate-private. Once confirmed, enrollment is refused but removal is not.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    id: TourId,
    departure: NaiveDate,
    required_headcount: u32,
    destinations: Vec<Destination>,
    cost_per_person: u32,
    enrolled: Vec<ClientId>,
    confirmed: bool,
}

impl Tour {
    pub(crate) fn new(
        id: TourId,
        departure: NaiveDate,
        required_headcount: u32,
        destinations: Vec<Destination>,
        cost_per_person: u32,
    ) -> Result<Self, DomainError> {
        if required_headcount == 0 {
            return Err(DomainError::ZeroHeadcount);
        }
        if destinations.is_empty() {
            return Err(DomainError::NoDestinations);
        }

        Ok(Self {
            id,
            departure,
            required_headcount,
            destinations,
            cost_per_person,
            enrolled: Vec::new(),
            confirmed: false,
        })
    }

    pub fn id(&self) -> TourId {
        self.id
    }

    pub fn departure(&self) -> NaiveDate {
        self.departure
    }

    pub fn required_headcount(&self) -> u32 {
        self.required_headcount
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn cost_per_person(&self) -> u32 {
        self.cost_per_person
    }

    /// Enrolled clients in enrollment order.
    pub fn enrolled(&self) -> &[ClientId] {
        &self.enrolled
    }

    pub fn headcount(&self) -> usize {
        self.enrolled.len()
    }

    pub fn is_enrolled(&self, client: ClientId) -> bool {
        self.enrolled.contains(&client)
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    // No upper bound: a full tour keeps accepting clients until confirmed.
    pub fn is_full(&self) -> bool {
        self.enrolled.len() >= self.required_headcount as usize
    }

    /// Date by which participants must pay, `notice_days` before departure.
    /// `None` if that date is outside the calendar range.
    pub fn payment_deadline(&self, notice_days: u32) -> Option<NaiveDate> {
        self.departure
            .checked_sub_days(Days::new(u64::from(notice_days)))
    }

    pub(crate) fn enroll(&mut self, client: ClientId) -> Result<(), DomainError> {
        if self.confirmed {
            return Err(DomainError::TourAlreadyConfirmed(self.id));
        }
        if self.is_enrolled(client) {
            return Err(DomainError::AlreadyEnrolled {
                tour: self.id,
                client,
            });
        }
        self.enrolled.push(client);
        Ok(())
    }

    /// Removes the client if present. Allowed on confirmed tours too.
    pub(crate) fn remove(&mut self, client: ClientId) -> bool {
        match self.enrolled.iter().position(|enrolled| *enrolled == client) {
            Some(index) => {
                self.enrolled.remove(index);
                true
            }
            None => false,
        }
    }

    // Capacity is checked by the agency before calling this.
    pub(crate) fn confirm(&mut self) {
        self.confirmed = true;
    }
}
