//! Participant data repository for judges and pilots.
//!
//! Judges and pilots live in separate tables. This repository covers both and returns
//! the tagged `Participant` wherever either kind may match.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    error::AppError,
    model::participant::{CreateJudgeParam, CreatePilotParam, Judge, Participant, Pilot},
};

/// Repository providing database operations for stage participants.
pub struct ParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a judge row.
    ///
    /// # Returns
    /// - `Ok(Judge)` - The created judge without files
    /// - `Err(AppError::Persistence)` - Database error, e.g. the stage does not exist
    pub async fn create_judge(&self, param: CreateJudgeParam) -> Result<Judge, AppError> {
        let now = Utc::now();
        let entity = entity::judge::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            stage_id: ActiveValue::Set(param.stage_id),
            full_name: ActiveValue::Set(param.full_name),
            criterion: ActiveValue::Set(param.criterion.as_str().to_string()),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Judge::from_entity(entity)
    }

    /// Inserts a pilot row with an already allocated racing number.
    ///
    /// # Returns
    /// - `Ok(Pilot)` - The created pilot without files
    /// - `Err(AppError::Persistence)` - Database error; a unique constraint violation means
    ///   the number was taken on this stage concurrently
    pub async fn create_pilot(&self, param: CreatePilotParam) -> Result<Pilot, AppError> {
        let now = Utc::now();
        let entity = entity::pilot::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            stage_id: ActiveValue::Set(param.stage_id),
            full_name: ActiveValue::Set(param.full_name),
            age: ActiveValue::Set(param.age),
            description: ActiveValue::Set(param.description),
            car: ActiveValue::Set(param.car),
            number: ActiveValue::Set(param.number),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pilot::from_entity(entity))
    }

    pub async fn find_judge(&self, id: i32) -> Result<Option<Judge>, AppError> {
        entity::prelude::Judge::find_by_id(id)
            .one(self.db)
            .await?
            .map(Judge::from_entity)
            .transpose()
    }

    pub async fn find_pilot(&self, id: i32) -> Result<Option<Pilot>, AppError> {
        let entity = entity::prelude::Pilot::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Pilot::from_entity))
    }

    /// Deletes a judge row.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No judge with that id
    pub async fn delete_judge(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Judge::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a pilot row, releasing its racing number.
    pub async fn delete_pilot(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Pilot::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds the registration of a user on a stage, whichever kind it is.
    ///
    /// Judges are checked first. A user holds at most one registration per stage.
    ///
    /// # Returns
    /// - `Ok(Some(Participant))` - User is registered on the stage
    /// - `Ok(None)` - User is not registered on the stage
    /// - `Err(AppError)` - Database error or unreadable stored criterion
    pub async fn find_by_user_and_stage(
        &self,
        user_id: i64,
        stage_id: i32,
    ) -> Result<Option<Participant>, AppError> {
        let judge = entity::prelude::Judge::find()
            .filter(entity::judge::Column::UserId.eq(user_id))
            .filter(entity::judge::Column::StageId.eq(stage_id))
            .one(self.db)
            .await?;

        if let Some(judge) = judge {
            return Ok(Some(Participant::Judge(Judge::from_entity(judge)?)));
        }

        let pilot = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::UserId.eq(user_id))
            .filter(entity::pilot::Column::StageId.eq(stage_id))
            .one(self.db)
            .await?;

        Ok(pilot.map(|pilot| Participant::Pilot(Pilot::from_entity(pilot))))
    }

    /// Gets the pilots of a stage ordered by racing number.
    pub async fn get_pilots_by_stage(&self, stage_id: i32) -> Result<Vec<Pilot>, AppError> {
        let entities = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::StageId.eq(stage_id))
            .order_by_asc(entity::pilot::Column::Number)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Pilot::from_entity).collect())
    }

    /// Gets the judges of a stage in registration order.
    pub async fn get_judges_by_stage(&self, stage_id: i32) -> Result<Vec<Judge>, AppError> {
        entity::prelude::Judge::find()
            .filter(entity::judge::Column::StageId.eq(stage_id))
            .order_by_asc(entity::judge::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Judge::from_entity)
            .collect()
    }

    /// Gets the racing numbers already taken on a stage.
    pub async fn get_used_numbers(&self, stage_id: i32) -> Result<HashSet<i32>, AppError> {
        let numbers = entity::prelude::Pilot::find()
            .select_only()
            .column(entity::pilot::Column::Number)
            .filter(entity::pilot::Column::StageId.eq(stage_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(numbers.into_iter().collect())
    }

    /// Gets the ids of judges and pilots registered on any of the given stages.
    ///
    /// # Returns
    /// - `Ok((judge_ids, pilot_ids))` - Ids of both kinds
    /// - `Err(AppError::Persistence)` - Database error during query
    pub async fn get_ids_by_stages(
        &self,
        stage_ids: &[i32],
    ) -> Result<(Vec<i32>, Vec<i32>), AppError> {
        if stage_ids.is_empty() {
            return Ok((Vec::new(), Vec::new()));
        }

        let judge_ids = entity::prelude::Judge::find()
            .select_only()
            .column(entity::judge::Column::Id)
            .filter(entity::judge::Column::StageId.is_in(stage_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        let pilot_ids = entity::prelude::Pilot::find()
            .select_only()
            .column(entity::pilot::Column::Id)
            .filter(entity::pilot::Column::StageId.is_in(stage_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok((judge_ids, pilot_ids))
    }
}
