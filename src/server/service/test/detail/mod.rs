use test_utils::{builder::TestBuilder, factory};

use super::actor;
use crate::server::{
    data::slot::SlotRepository,
    error::{roster::RosterError, AppError},
    model::detail::{Occupant, VoteSummary},
    service::detail::EventDetailService,
};

mod get_event_detail;
