// The agency: owns tours, clients and confirmation observers, matches clients
// to tours and confirms filled tours.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::catalog::{self, CatalogError};
use crate::client::{Client, ClientId};
use crate::config::AgencyConfig;
use crate::destination::Destination;
use crate::error::{DomainError, ObserverError};
use crate::observer::{ConfirmationObserver, TourConfirmation};
use crate::preference::Preference;
use crate::tour::{Tour, TourId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Enrolled(TourId),
    /// No affordable tour with acceptable destinations; the client is kept pending.
    Pending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverFailure {
    pub observer: String,
    pub error: ObserverError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationReport {
    pub tour: TourId,
    pub notified: usize,
    pub failures: Vec<ObserverFailure>,
}

impl ConfirmationReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Single writer of every tour roster and confirmation flag.
pub struct Agency {
    config: AgencyConfig,
    tours: BTreeMap<TourId, Tour>,
    clients: BTreeMap<ClientId, Client>,
    pending: BTreeSet<ClientId>,
    observers: Vec<Box<dyn ConfirmationObserver>>,
    next_tour_id: u64,
    next_client_id: u64,
}

impl Default for Agency {
    fn default() -> Self {
        Self::new(AgencyConfig::default())
    }
}

impl Agency {
    pub fn new(config: AgencyConfig) -> Self {
        Self {
            config,
            tours: BTreeMap::new(),
            clients: BTreeMap::new(),
            pending: BTreeSet::new(),
            observers: Vec::new(),
            next_tour_id: 1,
            next_client_id: 1,
        }
    }

    pub fn config(&self) -> &AgencyConfig {
        &self.config
    }

    pub fn register_client(&mut self, client: Client) -> ClientId {
        let id = ClientId(self.next_client_id);
        self.next_client_id += 1;
        debug!(client = %id, email = client.email(), "Client registered");
        self.clients.insert(id, client);
        id
    }

    pub fn open_tour(
        &mut self,
        departure: NaiveDate,
        required_headcount: u32,
        destinations: Vec<Destination>,
        cost_per_person: u32,
    ) -> Result<TourId, DomainError> {
        let id = TourId(self.next_tour_id);
        let tour = Tour::new(
            id,
            departure,
            required_headcount,
            destinations,
            cost_per_person,
        )?;
        self.next_tour_id += 1;
        info!(tour = %id, %departure, cost_per_person, required_headcount, "Tour opened");
        self.tours.insert(id, tour);
        Ok(id)
    }

    /// Opens every tour of a JSON catalog. Nothing is opened if any entry is invalid.
    pub fn load_catalog(&mut self, json: &str) -> Result<Vec<TourId>, CatalogError> {
        let drafts = catalog::parse_catalog(json)?;
        let mut opened = Vec::with_capacity(drafts.len());
        for draft in drafts {
            opened.push(self.open_tour(
                draft.departure,
                draft.required_headcount,
                draft.destinations,
                draft.cost_per_person,
            )?);
        }
        Ok(opened)
    }

    /// Observers run in registration order.
    pub fn register_observer(&mut self, observer: impl ConfirmationObserver + 'static) {
        debug!(observer = observer.name(), "Confirmation observer registered");
        self.observers.push(Box::new(observer));
    }

    /// Enrolls the client in the cheapest open tour whose destinations all suit
    /// them and whose cost fits their budget. Equal costs go to the tour opened
    /// first. Without such a tour the client is kept pending. A client already
    /// on a roster keeps that tour.
    pub fn match_client(&mut self, id: ClientId) -> Result<MatchOutcome, DomainError> {
        let client = self.clients.get(&id).ok_or(DomainError::UnknownClient(id))?;

        // Assigned clients are never re-matched.
        if let Some(current) = self.tours.values().find(|tour| tour.is_enrolled(id)) {
            self.pending.remove(&id);
            debug!(client = %id, tour = %current.id(), "Client already enrolled");
            return Ok(MatchOutcome::Enrolled(current.id()));
        }

        let chosen = self
            .tours
            .values()
            .filter(|tour| !tour.is_confirmed())
            .filter(|tour| client.accepts_all_destinations(tour))
            .filter(|tour| client.is_price_adequate(tour))
            .inspect(|tour| {
                debug!(client = %id, tour = %tour.id(), cost = tour.cost_per_person(), "Candidate tour")
            })
            .min_by_key(|tour| tour.cost_per_person())
            .map(Tour::id);

        let Some(tour_id) = chosen else {
            self.pending.insert(id);
            info!(client = %id, budget = client.budget(), preference = client.preference().kind(), "No suitable tour, client pending");
            return Ok(MatchOutcome::Pending);
        };

        self.tour_mut(tour_id)?.enroll(id)?;
        self.pending.remove(&id);
        info!(client = %id, tour = %tour_id, "Client enrolled");
        Ok(MatchOutcome::Enrolled(tour_id))
    }

    /// Retries every pending client against the current tours, returning how
    /// many got enrolled.
    pub fn match_pending(&mut self) -> Result<usize, DomainError> {
        let pending: Vec<ClientId> = self.pending.iter().copied().collect();
        let mut enrolled = 0;
        for id in pending {
            if let MatchOutcome::Enrolled(_) = self.match_client(id)? {
                enrolled += 1;
            }
        }
        Ok(enrolled)
    }

    /// Confirms a full tour and notifies every observer.
    ///
    /// With `isolate_observer_failures` set, a failing observer is recorded in
    /// the report and the remaining ones still run; otherwise the fan-out
    /// stops at the first failure. The tour stays confirmed either way.
    pub fn confirm_tour(&mut self, id: TourId) -> Result<ConfirmationReport, DomainError> {
        let tour = self.tours.get_mut(&id).ok_or(DomainError::UnknownTour(id))?;
        if tour.is_confirmed() {
            return Err(DomainError::TourAlreadyConfirmed(id));
        }
        if !tour.is_full() {
            return Err(DomainError::TourNotFull {
                tour: id,
                enrolled: tour.headcount(),
                required: tour.required_headcount(),
            });
        }

        tour.confirm();
        info!(tour = %id, participants = tour.headcount(), "Tour confirmed");

        let tour: &Tour = tour;
        let mut confirmation =
            TourConfirmation::new(tour, self.clients.iter_mut().map(|(id, client)| (*id, client)));
        let mut report = ConfirmationReport {
            tour: id,
            notified: 0,
            failures: Vec::new(),
        };

        for observer in &self.observers {
            match observer.tour_confirmed(&mut confirmation) {
                Ok(()) => report.notified += 1,
                Err(error) => {
                    warn!(tour = %id, observer = observer.name(), %error, "Confirmation observer failed");
                    report.failures.push(ObserverFailure {
                        observer: observer.name().to_string(),
                        error,
                    });
                    if !self.config.isolate_observer_failures {
                        break;
                    }
                }
            }
        }

        Ok(report)
    }

    /// Manual enrollment, outside the matching algorithm.
    pub fn add_client_to_tour(&mut self, client: ClientId, tour: TourId) -> Result<(), DomainError> {
        self.ensure_client(client)?;
        self.tour_mut(tour)?.enroll(client)?;
        self.pending.remove(&client);
        info!(client = %client, tour = %tour, "Client added to tour");
        Ok(())
    }

    /// Manual removal; allowed on confirmed tours. Returns whether the client was enrolled.
    /// A client left without any tour goes back to pending.
    pub fn remove_client_from_tour(
        &mut self,
        client: ClientId,
        tour: TourId,
    ) -> Result<bool, DomainError> {
        self.ensure_client(client)?;
        let removed = self.tour_mut(tour)?.remove(client);
        if removed {
            info!(client = %client, tour = %tour, "Client removed from tour");
            if self.tours_of(client).next().is_none() {
                self.pending.insert(client);
                info!(client = %client, "Client back to pending");
            }
        }
        Ok(removed)
    }

    pub fn set_client_budget(&mut self, client: ClientId, amount: u32) -> Result<(), DomainError> {
        self.client_mut(client)?.set_budget(amount);
        debug!(client = %client, budget = amount, "Budget updated");
        Ok(())
    }

    pub fn change_client_preference(
        &mut self,
        client: ClientId,
        preference: Preference,
    ) -> Result<(), DomainError> {
        debug!(client = %client, preference = preference.kind(), "Preference changed");
        self.client_mut(client)?.change_preference(preference);
        Ok(())
    }

    pub fn tour(&self, id: TourId) -> Option<&Tour> {
        self.tours.get(&id)
    }

    /// Tours in the order they were opened.
    pub fn tours(&self) -> impl Iterator<Item = &Tour> + '_ {
        self.tours.values()
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(&id)
    }

    pub fn clients(&self) -> impl Iterator<Item = (ClientId, &Client)> + '_ {
        self.clients.iter().map(|(id, client)| (*id, client))
    }

    pub fn pending_clients(&self) -> impl Iterator<Item = ClientId> + '_ {
        self.pending.iter().copied()
    }

    pub fn is_pending(&self, id: ClientId) -> bool {
        self.pending.contains(&id)
    }

    /// Tours the client is currently enrolled in.
    pub fn tours_of(&self, client: ClientId) -> impl Iterator<Item = TourId> + '_ {
        self.tours
            .values()
            .filter(move |tour| tour.is_enrolled(client))
            .map(Tour::id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn ensure_client(&self, id: ClientId) -> Result<(), DomainError> {
        if self.clients.contains_key(&id) {
            Ok(())
        } else {
            Err(DomainError::UnknownClient(id))
        }
    }

    fn client_mut(&mut self, id: ClientId) -> Result<&mut Client, DomainError> {
        self.clients
            .get_mut(&id)
            .ok_or(DomainError::UnknownClient(id))
    }

    fn tour_mut(&mut self, id: TourId) -> Result<&mut Tour, DomainError> {
        self.tours.get_mut(&id).ok_or(DomainError::UnknownTour(id))
    }
}
