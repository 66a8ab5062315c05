use crate::{
    error::{storage::StorageError, validation::ValidationError, AppError},
    model::{
        championship::{Championship, CreateChampionshipParam},
        file::{Blob, FileKind},
        participant::{CreatePilotParam, Pilot},
        stage::{CreateStageParam, Stage},
    },
    service::entity::EntityService,
    storage::{bucket::Buckets, memory::MemoryObjectStore},
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod read;

fn stage_param(championship_id: i32) -> CreateStageParam {
    CreateStageParam {
        championship_id,
        number: 1,
        title: "Season Opener".to_string(),
        description: Some("First stage of the season".to_string()),
        location: "Fort Grozny".to_string(),
        map_link: None,
        starts_at: Utc::now() + Duration::days(10),
    }
}
