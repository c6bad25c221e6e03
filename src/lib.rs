// Main library file for the tour agency

// Export modules for each part of the agency
pub mod agency;
pub mod catalog;
pub mod client;
pub mod config;
pub mod destination;
pub mod error;
pub mod observer;
pub mod preference;
pub mod shared;
pub mod tour;

// Re-export key types for convenience
pub use agency::{Agency, ConfirmationReport, MatchOutcome, ObserverFailure};
pub use catalog::{CatalogError, TourDraft};
pub use client::{Client, ClientId};
pub use config::{AgencyConfig, ConfigError};
pub use destination::Destination;
pub use error::{DeliveryError, DomainError, ObserverError, ReportError};
pub use observer::{
    AlternatePreference, ConfirmationObserver, Mail, MailSender, NotifyParticipants,
    ReportToTaxAuthority, TaxReport, TaxReporter, TourConfirmation,
};
pub use preference::{Mood, Preference};
pub use shared::SharedAgency;
pub use tour::{Tour, TourId};
