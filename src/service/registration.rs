//! Pilot and judge registration on stages.
//!
//! Racing numbers are unique per stage. Allocation reads the numbers in use and inserts
//! the new pilot while holding an in-process lock for the stage; the unique index on
//! `pilots(stage_id, number)` catches races with other processes, which are retried with
//! a fresh number.

use std::{
    collections::{HashMap, HashSet},
    ops::RangeInclusive,
    sync::Arc,
};

use sea_orm::DatabaseConnection;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::{
    data::{
        entity_store::attach_files, participant::ParticipantRepository, stage::StageRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        file::Blob,
        participant::{CreateJudgeParam, Judge, Participant, Pilot, RegisterPilotParam},
        stage::Stage,
    },
    service::{entity::EntityService, number::NumberAllocator},
    storage::{bucket::Buckets, ObjectStore},
};

/// Number of fresh draws before giving up on a contended stage.
pub const MAX_NUMBER_ATTEMPTS: usize = 5;

/// Per-stage registration locks shared by every registration in the process.
#[derive(Clone, Default)]
pub struct StageLocks {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

impl StageLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive registration access to a stage.
    ///
    /// Access is released when the returned guard is dropped. Locks that nobody holds or
    /// waits for are dropped from the map on the next call.
    pub async fn lock(&self, stage_id: i32) -> OwnedMutexGuard<()> {
        let stage_lock = {
            let mut locks = self.locks.lock().await;
            // Holders and waiters keep a clone, so a count of 1 means the map is the only owner.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(stage_id).or_default().clone()
        };

        stage_lock.lock_owned().await
    }
}

/// Service registering participants on stages and listing them.
pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
    store: &'a dyn ObjectStore,
    buckets: &'a Buckets,
    locks: &'a StageLocks,
    numbers: RangeInclusive<i32>,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new RegistrationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `store` - Object store receiving registration photos
    /// - `buckets` - Bucket naming for the deployment
    /// - `locks` - Per-stage locks shared across the process
    /// - `numbers` - Inclusive range racing numbers are drawn from
    pub fn new(
        db: &'a DatabaseConnection,
        store: &'a dyn ObjectStore,
        buckets: &'a Buckets,
        locks: &'a StageLocks,
        numbers: RangeInclusive<i32>,
    ) -> Self {
        Self {
            db,
            store,
            buckets,
            locks,
            numbers,
        }
    }

    /// Registers a pilot on a stage and assigns a free racing number.
    ///
    /// # Arguments
    /// - `param` - Registration form
    /// - `photos` - Attachments, typically a photo of the car
    ///
    /// # Returns
    /// - `Ok(Pilot)` - Registered pilot with the allocated number and files
    /// - `Err(AppError::NotFound)` - Stage does not exist
    /// - `Err(AppError::Validation(RegistrationClosed))` - Stage is not open
    /// - `Err(AppError::Validation(AlreadyRegistered))` - User already registered on the stage
    /// - `Err(AppError::Validation(RanOutOfNumbers))` - Every number is taken
    /// - `Err(AppError)` - File validation, storage or database failure
    pub async fn register_pilot(
        &self,
        param: RegisterPilotParam,
        photos: Vec<Blob>,
    ) -> Result<Pilot, AppError> {
        let (start, end) = (*self.numbers.start(), *self.numbers.end());

        self.register_pilot_with(param, photos, |used| {
            NumberAllocator::generate(used, start, end)
        })
        .await
    }

    /// Registers a pilot, taking each candidate number from `draw`.
    ///
    /// `draw` receives the numbers in use when an attempt starts. A candidate rejected by
    /// the unique index is retried with a fresh read, up to `MAX_NUMBER_ATTEMPTS` times.
    pub(crate) async fn register_pilot_with<F>(
        &self,
        param: RegisterPilotParam,
        photos: Vec<Blob>,
        mut draw: F,
    ) -> Result<Pilot, AppError>
    where
        F: FnMut(&HashSet<i32>) -> Result<i32, ValidationError> + Send,
    {
        let stage_id = param.stage_id;
        let _guard = self.locks.lock(stage_id).await;

        self.ensure_can_register(param.user_id, stage_id, true)
            .await?;

        let participants = ParticipantRepository::new(self.db);
        let pilots = EntityService::<Pilot>::new(self.db, self.store, self.buckets);

        for attempt in 1..=MAX_NUMBER_ATTEMPTS {
            let used = participants.get_used_numbers(stage_id).await?;
            let number = draw(&used)?;

            match pilots
                .create(param.clone().with_number(number), photos.clone())
                .await
            {
                Ok(pilot) => {
                    tracing::info!(
                        "User {} registered as pilot #{} on stage {}",
                        pilot.base.user_id,
                        pilot.number,
                        stage_id
                    );
                    return Ok(pilot);
                }
                Err(err) if err.is_unique_violation() => {
                    tracing::warn!(
                        "Number {} on stage {} taken concurrently (attempt {}/{})",
                        number,
                        stage_id,
                        attempt,
                        MAX_NUMBER_ATTEMPTS
                    );
                }
                Err(err) => return Err(err),
            }
        }

        Err(AppError::InternalError(format!(
            "Could not allocate a number on stage {} after {} attempts",
            stage_id, MAX_NUMBER_ATTEMPTS
        )))
    }

    /// Registers a judge on a stage.
    ///
    /// Judges reach this after redeeming an invitation, so the stage does not need to be
    /// open for pilot registration.
    ///
    /// # Returns
    /// - `Ok(Judge)` - Registered judge with files
    /// - `Err(AppError::NotFound)` - Stage does not exist
    /// - `Err(AppError::Validation(AlreadyRegistered))` - User already registered on the stage
    /// - `Err(AppError)` - File validation, storage or database failure
    pub async fn register_judge(
        &self,
        param: CreateJudgeParam,
        photos: Vec<Blob>,
    ) -> Result<Judge, AppError> {
        let stage_id = param.stage_id;
        let _guard = self.locks.lock(stage_id).await;

        self.ensure_can_register(param.user_id, stage_id, false)
            .await?;

        let judge = EntityService::<Judge>::new(self.db, self.store, self.buckets)
            .create(param, photos)
            .await?;

        tracing::info!(
            "User {} registered as {} judge on stage {}",
            judge.base.user_id,
            judge.criterion.as_str(),
            stage_id
        );

        Ok(judge)
    }

    /// Gets the registration of a user on a stage, whichever kind it is.
    pub async fn get_by_user_and_stage(
        &self,
        user_id: i64,
        stage_id: i32,
    ) -> Result<Option<Participant>, AppError> {
        ParticipantRepository::new(self.db)
            .find_by_user_and_stage(user_id, stage_id)
            .await
    }

    /// Gets the pilots of a stage ordered by racing number, with file metadata.
    pub async fn get_pilots_by_stage(&self, stage_id: i32) -> Result<Vec<Pilot>, AppError> {
        let pilots = ParticipantRepository::new(self.db)
            .get_pilots_by_stage(stage_id)
            .await?;

        attach_files(self.db, pilots).await
    }

    /// Gets the judges of a stage in registration order, with file metadata.
    pub async fn get_judges_by_stage(&self, stage_id: i32) -> Result<Vec<Judge>, AppError> {
        let judges = ParticipantRepository::new(self.db)
            .get_judges_by_stage(stage_id)
            .await?;

        attach_files(self.db, judges).await
    }

    /// Gets the racing numbers taken on a stage.
    pub async fn get_used_numbers(&self, stage_id: i32) -> Result<HashSet<i32>, AppError> {
        ParticipantRepository::new(self.db)
            .get_used_numbers(stage_id)
            .await
    }

    async fn ensure_can_register(
        &self,
        user_id: i64,
        stage_id: i32,
        require_open: bool,
    ) -> Result<Stage, AppError> {
        let stage = StageRepository::new(self.db)
            .find_by_id(stage_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Stage {} not found", stage_id)))?;

        if require_open && !stage.is_active {
            return Err(ValidationError::RegistrationClosed(stage_id).into());
        }

        let existing = ParticipantRepository::new(self.db)
            .find_by_user_and_stage(user_id, stage_id)
            .await?;
        if existing.is_some() {
            return Err(ValidationError::AlreadyRegistered { user_id, stage_id }.into());
        }

        Ok(stage)
    }
}
