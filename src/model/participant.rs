//! Participant domain models and parameters.
//!
//! Judges and pilots share a common base and are stored in separate tables.
//! `Participant` is the tagged union returned wherever either may appear.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, model::file::FileRef, util::parse::parse_stored};

/// Judging criterion a judge is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Criterion {
    Style,
    Angle,
    Line,
}

impl Criterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Style => "STYLE",
            Self::Angle => "ANGLE",
            Self::Line => "LINE",
        }
    }
}

impl FromStr for Criterion {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "STYLE" => Ok(Self::Style),
            "ANGLE" => Ok(Self::Angle),
            "LINE" => Ok(Self::Line),
            _ => Err(()),
        }
    }
}

/// Fields shared by every participant kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantBase {
    pub id: i32,
    pub user_id: i64,
    pub stage_id: i32,
    pub full_name: String,
    /// Photos attached at registration, in attachment order.
    pub files: Vec<FileRef>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Judge {
    pub base: ParticipantBase,
    pub criterion: Criterion,
}

impl Judge {
    /// Converts an entity model at the repository boundary, without files.
    ///
    /// # Returns
    /// - `Ok(Judge)` - The converted domain model
    /// - `Err(AppError::Internal(UnknownEnumValue))` - Stored criterion is not recognized
    pub fn from_entity(entity: entity::judge::Model) -> Result<Self, AppError> {
        Ok(Self {
            base: ParticipantBase {
                id: entity.id,
                user_id: entity.user_id,
                stage_id: entity.stage_id,
                full_name: entity.full_name,
                files: Vec::new(),
                is_active: entity.is_active,
                created_at: entity.created_at,
                updated_at: entity.updated_at,
            },
            criterion: parse_stored("judges.criterion", entity.criterion)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pilot {
    pub base: ParticipantBase,
    pub age: i32,
    pub description: String,
    pub car: String,
    /// Racing number, unique within the stage.
    pub number: i32,
}

impl Pilot {
    /// Converts an entity model at the repository boundary, without files.
    pub fn from_entity(entity: entity::pilot::Model) -> Self {
        Self {
            base: ParticipantBase {
                id: entity.id,
                user_id: entity.user_id,
                stage_id: entity.stage_id,
                full_name: entity.full_name,
                files: Vec::new(),
                is_active: entity.is_active,
                created_at: entity.created_at,
                updated_at: entity.updated_at,
            },
            age: entity.age,
            description: entity.description,
            car: entity.car,
            number: entity.number,
        }
    }
}

/// Either kind of stage participant.
#[derive(Debug, Clone, PartialEq)]
pub enum Participant {
    Judge(Judge),
    Pilot(Pilot),
}

impl Participant {
    pub fn base(&self) -> &ParticipantBase {
        match self {
            Self::Judge(judge) => &judge.base,
            Self::Pilot(pilot) => &pilot.base,
        }
    }
}

/// Parameters for inserting a judge row.
#[derive(Debug, Clone)]
pub struct CreateJudgeParam {
    pub user_id: i64,
    pub stage_id: i32,
    pub full_name: String,
    pub criterion: Criterion,
}

/// Parameters for inserting a pilot row with an already allocated number.
#[derive(Debug, Clone)]
pub struct CreatePilotParam {
    pub user_id: i64,
    pub stage_id: i32,
    pub full_name: String,
    pub age: i32,
    pub description: String,
    pub car: String,
    pub number: i32,
}

/// Pilot registration form as submitted, before a number is allocated.
#[derive(Debug, Clone)]
pub struct RegisterPilotParam {
    pub user_id: i64,
    pub stage_id: i32,
    pub full_name: String,
    pub age: i32,
    pub description: String,
    pub car: String,
}

impl RegisterPilotParam {
    pub fn with_number(self, number: i32) -> CreatePilotParam {
        CreatePilotParam {
            user_id: self.user_id,
            stage_id: self.stage_id,
            full_name: self.full_name,
            age: self.age,
            description: self.description,
            car: self.car,
            number,
        }
    }
}
