// Thread-safe handle around an agency for multi-threaded hosts

use std::sync::Arc;

use parking_lot::Mutex;

use crate::agency::{Agency, ConfirmationReport, MatchOutcome};
use crate::client::{Client, ClientId};
use crate::error::DomainError;
use crate::tour::TourId;

/// Each call holds the agency lock for its whole duration, so picking a tour
/// and enrolling into it happen as one step.
#[derive(Clone)]
pub struct SharedAgency {
    inner: Arc<Mutex<Agency>>,
}

impl SharedAgency {
    pub fn new(agency: Agency) -> Self {
        Self {
            inner: Arc::new(Mutex::new(agency)),
        }
    }

    pub fn register_client(&self, client: Client) -> ClientId {
        self.inner.lock().register_client(client)
    }

    pub fn match_client(&self, id: ClientId) -> Result<MatchOutcome, DomainError> {
        self.inner.lock().match_client(id)
    }

    /// Registers and matches under a single lock.
    pub fn register_and_match(&self, client: Client) -> Result<(ClientId, MatchOutcome), DomainError> {
        let mut agency = self.inner.lock();
        let id = agency.register_client(client);
        let outcome = agency.match_client(id)?;
        Ok((id, outcome))
    }

    pub fn confirm_tour(&self, id: TourId) -> Result<ConfirmationReport, DomainError> {
        self.inner.lock().confirm_tour(id)
    }

    pub fn read<R>(&self, f: impl FnOnce(&Agency) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut Agency) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
