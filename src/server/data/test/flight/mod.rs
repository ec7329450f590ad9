use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::flight::FlightRepository, model::flight::DefineFlightParams};

mod create_with_slots;
