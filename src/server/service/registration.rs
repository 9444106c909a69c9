//! Registration service: admission, cancellation and the registration lifecycle.
//!
//! Admission and cancellation each run in one database transaction. Admission takes the
//! seat with a conditional decrement before inserting the registration, so a lost race
//! leaves no registration behind.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::RegistrationStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        registration::RegistrationRepository,
        workshop::WorkshopRepository,
        workshop_session::{SpotUpdate, WorkshopSessionRepository},
    },
    error::{payment::PaymentError, registration::RegistrationError, AppError},
    model::{
        registration::{
            validate_transition, AdmissionParam, CancelRegistrationParam, Cancellation,
            NewRegistrationParam, PaginatedRegistrations, Registration, RegistrationFilter,
            UpdateRegistrationStatusParam, ADMIN_CANCELLATION_REASON,
            DEFAULT_CANCELLATION_REASON,
        },
        workshop::Workshop,
    },
    util::pagination::{clamp_per_page, total_pages},
};

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks that a user could be admitted to a session, without taking a seat.
    ///
    /// # Returns
    /// - `Ok(Workshop)` - Workshop is active, the session has a seat and the user holds none
    /// - `Err(RegistrationError::WorkshopUnavailable)` - Workshop missing or inactive
    /// - `Err(RegistrationError::NoSpotsAvailable)` - No session that day or no seats left
    /// - `Err(RegistrationError::AlreadyRegistered)` - User already registered for the session
    pub async fn check_admission(
        &self,
        workshop_id: i32,
        user_id: i32,
        session_date: NaiveDate,
    ) -> Result<Workshop, AppError> {
        ensure_admissible(self.db, workshop_id, user_id, session_date).await
    }

    /// Admits a user to a session.
    ///
    /// Takes the seat with a conditional decrement as the first statement of the
    /// transaction, then checks the workshop, duplicates and gateway order reuse before
    /// inserting the registration. Any rejection rolls the decrement back. The payment
    /// amount is copied from the workshop price.
    ///
    /// # Returns
    /// - `Ok(Registration)` - Registration in `registered` status
    /// - `Err(RegistrationError)` - See `check_admission`; a lost race on the last seat
    ///   is reported as `NoSpotsAvailable`
    /// - `Err(PaymentError::PaymentAlreadyUsed)` - Gateway order already settles a registration
    pub async fn admit(&self, param: AdmissionParam) -> Result<Registration, AppError> {
        let txn = self.db.begin().await?;

        let spot_update = WorkshopSessionRepository::new(&txn)
            .reduce_spots(param.workshop_id, param.session_date, 1)
            .await?;

        let workshop = WorkshopRepository::new(&txn)
            .find_by_id(param.workshop_id)
            .await?
            .filter(|workshop| workshop.is_active)
            .ok_or(RegistrationError::WorkshopUnavailable)?;

        match spot_update {
            SpotUpdate::Updated(session) => {
                tracing::debug!(
                    "Took a seat of session {} ({} left)",
                    session.id,
                    session.spots
                );
            }
            SpotUpdate::Rejected | SpotUpdate::SessionNotFound => {
                return Err(RegistrationError::NoSpotsAvailable.into());
            }
        }

        let registrations = RegistrationRepository::new(&txn);

        if registrations
            .exists_active(workshop.id, param.user_id, param.session_date)
            .await?
        {
            return Err(RegistrationError::AlreadyRegistered.into());
        }

        if let Some(gateway_order_id) = param.payment.gateway_order_id() {
            if registrations
                .exists_gateway_order(gateway_order_id)
                .await?
            {
                tracing::warn!(
                    "Gateway order {} replayed by user {}",
                    gateway_order_id,
                    param.user_id
                );
                return Err(PaymentError::PaymentAlreadyUsed.into());
            }
        }

        let registration = registrations
            .create(
                NewRegistrationParam {
                    workshop_id: workshop.id,
                    user_id: param.user_id,
                    session_date: param.session_date,
                    participant: param.participant,
                    payment: param.payment.into_payment_info(workshop.price.clone()),
                },
                Utc::now(),
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} registered for workshop {} on {}",
            registration.user_id,
            registration.workshop_id,
            registration.session_date
        );

        Ok(registration)
    }

    /// Cancels one of the user's own registrations.
    ///
    /// # Arguments
    /// - `user_id` - Requesting user; another user's registration is reported as not found
    /// - `registration_id` - Registration to cancel
    /// - `reason` - Optional reason; blank falls back to the default
    ///
    /// # Returns
    /// - `Ok(Cancellation)` - Cancelled registration and the refund recorded
    /// - `Err(RegistrationError::NotFound)` - No such registration for this user
    /// - `Err(RegistrationError::NotCancellable)` - Already cancelled or completed
    pub async fn cancel(
        &self,
        user_id: i32,
        registration_id: i32,
        reason: Option<String>,
    ) -> Result<Cancellation, AppError> {
        let txn = self.db.begin().await?;

        let registration = RegistrationRepository::new(&txn)
            .find_for_user(registration_id, user_id)
            .await?
            .ok_or(RegistrationError::NotFound)?;

        let reason = reason
            .map(|reason| reason.trim().to_string())
            .filter(|reason| !reason.is_empty())
            .unwrap_or_else(|| DEFAULT_CANCELLATION_REASON.to_string());

        let cancellation = cancel_registration(&txn, registration, reason).await?;

        txn.commit().await?;

        Ok(cancellation)
    }

    /// Gets the user's registrations newest first, with workshop summaries.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Registration>, AppError> {
        let registrations = RegistrationRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok(registrations)
    }

    /// Gets a page of registrations for the admin listing.
    pub async fn get_paginated(
        &self,
        filter: RegistrationFilter,
    ) -> Result<PaginatedRegistrations, AppError> {
        let filter = RegistrationFilter {
            per_page: clamp_per_page(filter.per_page),
            ..filter
        };

        let (registrations, total) = RegistrationRepository::new(self.db)
            .get_paginated(&filter)
            .await?;

        Ok(PaginatedRegistrations {
            registrations,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: total_pages(total, filter.per_page),
        })
    }

    /// Applies an admin status change.
    ///
    /// Moving a live registration to `cancelled` runs the full cancellation, refund
    /// included, with the administrator reason.
    ///
    /// # Returns
    /// - `Ok(Registration)` - Updated registration
    /// - `Err(RegistrationError::NotFound)` - No such registration
    /// - `Err(RegistrationError::InvalidTransition)` - Lifecycle forbids the change
    pub async fn update_status(
        &self,
        registration_id: i32,
        param: UpdateRegistrationStatusParam,
    ) -> Result<Registration, AppError> {
        let txn = self.db.begin().await?;
        let repo = RegistrationRepository::new(&txn);

        let registration = repo
            .find_by_id(registration_id)
            .await?
            .ok_or(RegistrationError::NotFound)?;

        validate_transition(registration.status, param.status)?;

        let starts_cancellation = param.status == RegistrationStatus::Cancelled
            && registration.status != RegistrationStatus::Cancelled;

        if starts_cancellation {
            cancel_registration(&txn, registration, ADMIN_CANCELLATION_REASON.to_string())
                .await?;
        }

        let updated = repo
            .update_status(registration_id, param, Utc::now())
            .await?
            .ok_or(RegistrationError::NotFound)?;

        txn.commit().await?;

        tracing::info!(
            "Registration {} status set to {:?}",
            updated.id,
            updated.status
        );

        Ok(updated)
    }

    /// Completes every live registration whose session date has passed.
    pub async fn complete_past(&self) -> Result<u64, AppError> {
        let now = Utc::now();

        let completed = RegistrationRepository::new(self.db)
            .complete_before(now.date_naive(), now)
            .await?;

        Ok(completed)
    }
}

/// Admission checks in order: workshop active, seat available, no live registration.
async fn ensure_admissible<C: ConnectionTrait>(
    db: &C,
    workshop_id: i32,
    user_id: i32,
    session_date: NaiveDate,
) -> Result<Workshop, AppError> {
    let workshop = WorkshopRepository::new(db)
        .find_by_id(workshop_id)
        .await?
        .filter(|workshop| workshop.is_active)
        .ok_or(RegistrationError::WorkshopUnavailable)?;

    if !workshop.has_available_spots(session_date) {
        return Err(RegistrationError::NoSpotsAvailable.into());
    }

    if RegistrationRepository::new(db)
        .exists_active(workshop_id, user_id, session_date)
        .await?
    {
        return Err(RegistrationError::AlreadyRegistered.into());
    }

    Ok(workshop)
}

/// Cancels a live registration, records the refund and gives the seat back.
///
/// A missing session or a counter already at its allocation is logged and does not fail
/// the cancellation.
async fn cancel_registration<C: ConnectionTrait>(
    db: &C,
    registration: Registration,
    reason: String,
) -> Result<Cancellation, AppError> {
    if !registration.can_be_cancelled() {
        return Err(RegistrationError::NotCancellable.into());
    }

    let now = Utc::now();
    let refund_amount = registration.calculate_refund(now.date_naive());

    let cancelled = RegistrationRepository::new(db)
        .cancel(
            registration.id,
            CancelRegistrationParam {
                reason,
                refund_amount,
                cancelled_at: now,
            },
        )
        .await?
        .ok_or(RegistrationError::NotFound)?;

    match WorkshopSessionRepository::new(db)
        .increase_spots(cancelled.workshop_id, cancelled.session_date, 1)
        .await?
    {
        SpotUpdate::Updated(_) => {}
        SpotUpdate::Rejected => tracing::warn!(
            "Session of workshop {} on {} already at allocation; seat of registration {} not restored",
            cancelled.workshop_id,
            cancelled.session_date,
            cancelled.id
        ),
        SpotUpdate::SessionNotFound => tracing::warn!(
            "No session of workshop {} on {} to restore the seat of registration {}",
            cancelled.workshop_id,
            cancelled.session_date,
            cancelled.id
        ),
    }

    tracing::info!(
        "Registration {} cancelled with refund {}",
        cancelled.id,
        refund_amount
    );

    Ok(Cancellation {
        registration: cancelled,
        refund_amount,
    })
}
