use crate::{
    error::{referral::ReferralError, AppError},
    model::user::Role,
    service::referral::{ReferralManager, CODE_TTL_DAYS},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};
