use crate::{
    data::participant::ParticipantRepository,
    error::AppError,
    model::participant::{CreateJudgeParam, CreatePilotParam, Criterion, Participant},
};
use test_utils::{builder::TestBuilder, factory};

mod create_pilot;
mod get_by_stage;
mod get_used_numbers;

fn pilot_param(user_id: i64, stage_id: i32, number: i32) -> CreatePilotParam {
    CreatePilotParam {
        user_id,
        stage_id,
        full_name: "Keiichi Tsuchiya".to_string(),
        age: 30,
        description: "Drift King".to_string(),
        car: "Toyota AE86".to_string(),
        number,
    }
}
