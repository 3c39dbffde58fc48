//! Guest check-in.
//!
//! A [`CheckinSession`] holds the staff member's decision for one booking
//! while the check-in page is open: whether breakfast is added on arrival and
//! whether payment of the full amount has been confirmed. Adding or removing
//! breakfast changes the amount owed, so it always withdraws an earlier
//! payment confirmation.
//!
//! ```text
//! Idle ──toggle──> BreakfastToggled ──confirm──> PaymentConfirmed
//!   └────────────────confirm─────────────────────────┘   │
//!                                                   submit
//!                                                        v
//!                   PaymentConfirmed <──failure── Submitting ──ok──> Submitted
//! ```
//!
//! While `Submitting`, every input is ignored. `Submitted` is terminal.

use payloads::{BookingStatus, ClientError, Settings, requests, responses};
use rust_decimal::Decimal;

use crate::format::format_currency;
use crate::pricing;
use crate::validation::{self, Rule, ValidationError};
use crate::{Backoffice, BackofficeApi, Error};

#[derive(Debug, Clone, PartialEq)]
pub enum CheckinPhase {
    Idle,
    BreakfastToggled,
    PaymentConfirmed,
    Submitting,
    Submitted(Box<responses::Booking>),
}

/// What the staff member has decided so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckinDecision {
    pub paid_confirmed: bool,
    pub breakfast_added: bool,
}

static CHECKIN_SCHEMA: &[Rule<CheckinDecision, responses::Booking>] = &[
    Rule {
        field: "paid_confirmed",
        check: |decision, _| {
            (!decision.paid_confirmed)
                .then_some("Payment must be confirmed before check-in")
        },
    },
    Rule {
        field: "breakfast_added",
        check: |decision, booking| {
            (decision.breakfast_added && booking.has_breakfast)
                .then_some("Breakfast is already included in this booking")
        },
    },
];

impl CheckinDecision {
    pub fn validate(
        &self,
        booking: &responses::Booking,
    ) -> Result<(), ValidationError> {
        validation::validate(CHECKIN_SCHEMA, self, booking)
    }
}

/// Outcome of a single input to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// The input matched the current decision.
    Unchanged,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The booking already has breakfast, there is nothing to add.
    BreakfastIncluded,
    InFlight,
    Completed,
}

#[derive(Debug, Clone)]
pub struct CheckinSession {
    booking: responses::Booking,
    breakfast_charge: Decimal,
    decision: CheckinDecision,
    /// Set by the first breakfast toggle, even if later toggled back off.
    breakfast_decided: bool,
    phase: CheckinPhase,
}

impl CheckinSession {
    /// Start a session for an unconfirmed booking. A booking that is already
    /// paid starts with payment confirmed.
    pub fn new(
        booking: responses::Booking,
        settings: &Settings,
    ) -> Result<Self, Error> {
        if booking.status != BookingStatus::Unconfirmed {
            return Err(Error::BookingStatus {
                booking_id: booking.booking_id,
                expected: BookingStatus::Unconfirmed,
                found: booking.status,
            });
        }
        let breakfast_charge = pricing::breakfast_charge(&booking, settings)?;
        let decision = CheckinDecision {
            paid_confirmed: booking.is_paid,
            breakfast_added: false,
        };

        let mut session = Self {
            booking,
            breakfast_charge,
            decision,
            breakfast_decided: false,
            phase: CheckinPhase::Idle,
        };
        session.phase = session.resting_phase();
        Ok(session)
    }

    /// Load the booking and settings through the cache and open a session.
    #[tracing::instrument(skip(ctx))]
    pub async fn start<A: BackofficeApi>(
        ctx: &mut Backoffice<A>,
        booking_id: payloads::BookingId,
    ) -> Result<Self, Error> {
        let settings = ctx.settings().await?;
        let booking = ctx.booking(booking_id).await?;
        Self::new(booking, &settings)
    }

    pub fn booking(&self) -> &responses::Booking {
        &self.booking
    }

    pub fn decision(&self) -> CheckinDecision {
        self.decision
    }

    pub fn phase(&self) -> &CheckinPhase {
        &self.phase
    }

    pub fn breakfast_charge(&self) -> Decimal {
        self.breakfast_charge
    }

    fn adds_breakfast(&self) -> bool {
        self.decision.breakfast_added && !self.booking.has_breakfast
    }

    /// The amount the guest pays under the current decision.
    pub fn effective_total(&self) -> Decimal {
        if self.adds_breakfast() {
            pricing::effective_total(&self.booking, self.breakfast_charge)
        } else {
            self.booking.total_price
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == CheckinPhase::Submitting
    }

    pub fn can_submit(&self) -> bool {
        self.decision.paid_confirmed && self.blocked().is_none()
    }

    /// The checked-in booking, once the submission succeeded.
    pub fn submitted(&self) -> Option<&responses::Booking> {
        match &self.phase {
            CheckinPhase::Submitted(booking) => Some(booking),
            _ => None,
        }
    }

    fn blocked(&self) -> Option<IgnoreReason> {
        match self.phase {
            CheckinPhase::Submitting => Some(IgnoreReason::InFlight),
            CheckinPhase::Submitted(_) => Some(IgnoreReason::Completed),
            _ => None,
        }
    }

    fn resting_phase(&self) -> CheckinPhase {
        if self.decision.paid_confirmed {
            CheckinPhase::PaymentConfirmed
        } else if self.breakfast_decided {
            CheckinPhase::BreakfastToggled
        } else {
            CheckinPhase::Idle
        }
    }

    #[tracing::instrument(skip(self), fields(booking_id = %self.booking.booking_id))]
    pub fn toggle_breakfast(&mut self) -> Transition {
        if let Some(reason) = self.blocked() {
            return Transition::Ignored(reason);
        }
        if self.booking.has_breakfast {
            return Transition::Ignored(IgnoreReason::BreakfastIncluded);
        }
        self.decision.breakfast_added = !self.decision.breakfast_added;
        self.decision.paid_confirmed = false;
        self.breakfast_decided = true;
        self.phase = self.resting_phase();
        tracing::debug!(
            breakfast_added = self.decision.breakfast_added,
            "breakfast toggled, payment confirmation reset"
        );
        Transition::Applied
    }

    #[tracing::instrument(skip(self), fields(booking_id = %self.booking.booking_id))]
    pub fn confirm_payment(&mut self, confirmed: bool) -> Transition {
        if let Some(reason) = self.blocked() {
            return Transition::Ignored(reason);
        }
        if self.decision.paid_confirmed == confirmed {
            return Transition::Unchanged;
        }
        self.decision.paid_confirmed = confirmed;
        self.phase = self.resting_phase();
        Transition::Applied
    }

    /// The breakfast part of the check-in request.
    pub fn payload(&self) -> requests::CheckinBreakfast {
        if self.adds_breakfast() {
            requests::CheckinBreakfast::added(
                self.breakfast_charge,
                self.effective_total(),
            )
        } else {
            requests::CheckinBreakfast::none()
        }
    }

    /// Enter `Submitting` and return the request to send, or `None` when
    /// payment is unconfirmed or a submission already ran.
    pub fn begin_submit(&mut self) -> Option<requests::CheckIn> {
        if !self.can_submit() {
            tracing::debug!(phase = ?self.phase, "check-in not submittable");
            return None;
        }
        self.phase = CheckinPhase::Submitting;
        Some(requests::CheckIn {
            booking_id: self.booking.booking_id,
            breakfast: self.payload(),
        })
    }

    /// Record the remote outcome. A failure returns the session to
    /// `PaymentConfirmed` so the same decision can be submitted again.
    pub fn finish_submit(
        &mut self,
        result: Result<responses::Booking, ClientError>,
    ) -> Result<(), ClientError> {
        if !self.is_submitting() {
            tracing::warn!(phase = ?self.phase, "check-in result without submission");
            return result.map(|_| ());
        }
        match result {
            Ok(booking) => {
                self.booking = booking.clone();
                self.phase = CheckinPhase::Submitted(Box::new(booking));
                Ok(())
            }
            Err(e) => {
                self.phase = self.resting_phase();
                Err(e)
            }
        }
    }

    /// Send the check-in. Returns `Ok(None)` without sending anything when
    /// payment is unconfirmed, or a submission is in flight or has completed.
    #[tracing::instrument(skip(self, ctx), fields(booking_id = %self.booking.booking_id))]
    pub async fn submit<A: BackofficeApi>(
        &mut self,
        ctx: &mut Backoffice<A>,
    ) -> Result<Option<&responses::Booking>, Error> {
        let Some(request) = self.begin_submit() else {
            return Ok(None);
        };

        let booking_id = request.booking_id;
        let result = ctx.api.mutate_checkin(booking_id, request.breakfast).await;
        match self.finish_submit(result) {
            Ok(()) => {
                ctx.cache.invalidate_booking(booking_id);
                ctx.notifications.success(format!(
                    "Booking #{booking_id} successfully checked in"
                ));
                tracing::info!("booking checked in");
                Ok(self.submitted())
            }
            Err(e) => {
                tracing::warn!("check-in failed: {e}");
                ctx.notifications
                    .error("There was an error while checking in");
                Err(e.into())
            }
        }
    }

    /// Offer shown next to the breakfast toggle, absent when the booking
    /// already includes breakfast.
    pub fn breakfast_prompt(&self) -> Option<String> {
        (!self.booking.has_breakfast).then(|| {
            format!(
                "Want to add breakfast for {}?",
                format_currency(self.breakfast_charge)
            )
        })
    }

    pub fn payment_label(&self) -> String {
        let base = format_currency(self.booking.total_price);
        let amount = if self.adds_breakfast() {
            format!(
                "{} ({base} + {})",
                format_currency(self.effective_total()),
                format_currency(self.breakfast_charge)
            )
        } else {
            base
        };
        format!(
            "I confirm that {} has paid the total amount of {amount}",
            self.booking.guest.full_name
        )
    }
}
