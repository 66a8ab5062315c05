use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Role},
};
use test_utils::{builder::TestBuilder, factory};

mod get_by_role;
mod get_or_create;
