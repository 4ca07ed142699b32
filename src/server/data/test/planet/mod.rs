use crate::server::data::planet::PlanetRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod find_by_id;
mod get_all;
