use crate::{
    error::{validation::ValidationError, AppError},
    model::{
        file::Blob,
        participant::{CreateJudgeParam, Criterion, Participant, RegisterPilotParam},
    },
    service::registration::{RegistrationService, StageLocks, MAX_NUMBER_ATTEMPTS},
    storage::{bucket::Buckets, memory::MemoryObjectStore},
};
use std::{
    collections::HashSet,
    sync::atomic::{AtomicUsize, Ordering},
};
use test_utils::{builder::TestBuilder, factory};


fn pilot_form(user_id: i64, stage_id: i32) -> RegisterPilotParam {
    RegisterPilotParam {
        user_id,
        stage_id,
        full_name: "Masato Kawabata".to_string(),
        age: 38,
        description: "Former record holder".to_string(),
        car: "Nissan GT-R".to_string(),
    }
}
