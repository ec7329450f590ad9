use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::slot::SlotRepository;

mod find_by_event_and_user;
