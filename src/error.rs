// Error types shared by the agency, its tours and the confirmation observers

use thiserror::Error;

use crate::client::ClientId;
use crate::tour::TourId;

// Business rule violations. Callers are expected to handle these as part of normal flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Tour {tour} is not full: {enrolled} of {required} participants enrolled")]
    TourNotFull {
        tour: TourId,
        enrolled: usize,
        required: u32,
    },

    #[error("Tour {0} is already confirmed")]
    TourAlreadyConfirmed(TourId),

    #[error("Client {client} is already enrolled in tour {tour}")]
    AlreadyEnrolled { tour: TourId, client: ClientId },

    #[error("Destination name must not be empty")]
    EmptyDestinationName,

    #[error("A tour needs at least one destination")]
    NoDestinations,

    #[error("A tour needs a required headcount greater than zero")]
    ZeroHeadcount,

    #[error("Unknown tour: {0}")]
    UnknownTour(TourId),

    #[error("Unknown client: {0}")]
    UnknownClient(ClientId),
}

// Failure reported by the external mail-sending capability
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Mail delivery failed: {0}")]
pub struct DeliveryError(pub String);

// Failure reported by the external tax-reporting capability
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Tax report rejected: {0}")]
pub struct ReportError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Payment deadline for tour {tour} falls before the supported date range")]
    DeadlineOutOfRange { tour: TourId },

    #[error("Other error: {0}")]
    Other(String),
}
