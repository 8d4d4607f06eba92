use crate::{
    model::user::Role,
    server::{data::user::UserRepository, model::user::InsertUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod manager_exists;
