// Reactions to a tour being confirmed, plus the external capabilities they use

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::client::{Client, ClientId};
use crate::config::AgencyConfig;
use crate::error::{DeliveryError, ObserverError, ReportError};
use crate::tour::Tour;

// Message handed to the mail-sending capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

// Record handed to the tax-reporting capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxReport {
    pub codes: String,
    pub national_ids: String,
}

// Outbound mail delivery, implemented outside this crate
pub trait MailSender: Send + Sync {
    fn send_mail(&self, mail: &Mail) -> Result<(), DeliveryError>;
}

// Tax authority reporting, implemented outside this crate
pub trait TaxReporter: Send + Sync {
    fn report(&self, report: &TaxReport) -> Result<(), ReportError>;
}

/// What an observer sees of a freshly confirmed tour: the tour itself and
/// its participants, in enrollment order.
pub struct TourConfirmation<'a> {
    tour: &'a Tour,
    participants: Vec<(ClientId, &'a mut Client)>,
}

impl<'a> TourConfirmation<'a> {
    /// Pairs the roster with the client records. Roster entries without a
    /// record are skipped.
    pub(crate) fn new(
        tour: &'a Tour,
        clients: impl Iterator<Item = (ClientId, &'a mut Client)>,
    ) -> Self {
        let mut by_id: HashMap<ClientId, &'a mut Client> = clients
            .filter(|(id, _)| tour.is_enrolled(*id))
            .collect();
        let participants = tour
            .enrolled()
            .iter()
            .filter_map(|id| by_id.remove(id).map(|client| (*id, client)))
            .collect();

        Self { tour, participants }
    }

    pub fn tour(&self) -> &Tour {
        self.tour
    }

    pub fn participants(&self) -> impl Iterator<Item = (ClientId, &Client)> + '_ {
        self.participants.iter().map(|(id, client)| (*id, &**client))
    }

    pub fn for_each_participant_mut(&mut self, mut f: impl FnMut(ClientId, &mut Client)) {
        for (id, client) in self.participants.iter_mut() {
            f(*id, client);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Reaction registered with the agency, invoked once per confirmed tour in
/// registration order.
pub trait ConfirmationObserver: Send + Sync {
    fn name(&self) -> &str;

    fn tour_confirmed(&self, confirmation: &mut TourConfirmation<'_>) -> Result<(), ObserverError>;
}

/// Mails every participant the destinations and the payment deadline.
pub struct NotifyParticipants {
    mail_sender: Arc<dyn MailSender>,
    sender_address: String,
    payment_notice_days: u32,
}

impl NotifyParticipants {
    pub fn new(mail_sender: Arc<dyn MailSender>, config: &AgencyConfig) -> Self {
        Self {
            mail_sender,
            sender_address: config.sender_address.clone(),
            payment_notice_days: config.payment_notice_days,
        }
    }

    fn compose(&self, confirmation: &TourConfirmation<'_>) -> Result<Mail, ObserverError> {
        let tour = confirmation.tour();
        let deadline = tour
            .payment_deadline(self.payment_notice_days)
            .ok_or(ObserverError::DeadlineOutOfRange { tour: tour.id() })?;

        let to = confirmation
            .participants()
            .map(|(_, client)| client.email())
            .collect::<Vec<_>>()
            .join(", ");
        let destinations = tour
            .destinations()
            .iter()
            .map(|destination| destination.name())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Mail {
            from: self.sender_address.clone(),
            to,
            subject: format!("Tour {} confirmed: departure {}", tour.id(), tour.departure()),
            body: format!(
                "Your tour departing on {} is confirmed.\n\
                 Destinations: {}\n\
                 Please complete your payment by {}.\n",
                tour.departure(),
                destinations,
                deadline
            ),
        })
    }
}

impl ConfirmationObserver for NotifyParticipants {
    fn name(&self) -> &str {
        "notify-participants"
    }

    fn tour_confirmed(&self, confirmation: &mut TourConfirmation<'_>) -> Result<(), ObserverError> {
        if confirmation.is_empty() {
            debug!(tour = %confirmation.tour().id(), "No participants to notify");
            return Ok(());
        }

        let mail = self.compose(confirmation)?;
        self.mail_sender.send_mail(&mail)?;
        info!(tour = %confirmation.tour().id(), to = %mail.to, "Confirmation mail sent");
        Ok(())
    }
}

/// Reports the tour code, participant codes and national IDs to the tax authority.
pub struct ReportToTaxAuthority {
    reporter: Arc<dyn TaxReporter>,
}

impl ReportToTaxAuthority {
    pub fn new(reporter: Arc<dyn TaxReporter>) -> Self {
        Self { reporter }
    }

    // Codes: tour code first, then one code per participant.
    // National IDs: one entry per participant, empty when unknown.
    fn build_report(confirmation: &TourConfirmation<'_>) -> TaxReport {
        let codes = std::iter::once(confirmation.tour().id().to_string())
            .chain(confirmation.participants().map(|(id, _)| id.to_string()))
            .collect::<Vec<_>>()
            .join(",");
        let national_ids = confirmation
            .participants()
            .map(|(_, client)| client.national_id().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(",");

        TaxReport {
            codes,
            national_ids,
        }
    }
}

impl ConfirmationObserver for ReportToTaxAuthority {
    fn name(&self) -> &str {
        "report-to-tax-authority"
    }

    fn tour_confirmed(&self, confirmation: &mut TourConfirmation<'_>) -> Result<(), ObserverError> {
        let report = Self::build_report(confirmation);
        self.reporter.report(&report)?;
        info!(tour = %confirmation.tour().id(), codes = %report.codes, "Tax report submitted");
        Ok(())
    }
}

/// Toggles the preference of every participant holding an alternating one.
#[derive(Debug, Default)]
pub struct AlternatePreference;

impl ConfirmationObserver for AlternatePreference {
    fn name(&self) -> &str {
        "alternate-preference"
    }

    fn tour_confirmed(&self, confirmation: &mut TourConfirmation<'_>) -> Result<(), ObserverError> {
        let tour = confirmation.tour().id();
        let mut toggled = 0usize;
        confirmation.for_each_participant_mut(|id, client| {
            if client.toggle_preference() {
                toggled += 1;
                debug!(tour = %tour, client = %id, preference = ?client.preference(), "Preference toggled");
            }
        });

        info!(tour = %tour, toggled, "Alternating preferences toggled");
        Ok(())
    }
}
