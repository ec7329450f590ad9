use entity::sea_orm_active_enums::ChoiceTask;
use test_utils::{builder::TestBuilder, factory};

use super::actor;
use crate::server::{
    data::choice::ChoiceRepository,
    error::{auth::AuthError, roster::RosterError, AppError},
    model::choice::{AddChoiceParams, UpdateChoiceParams},
    service::choice::ChoiceService,
};

mod delete;

fn add_params(event_id: i32, module_id: i32) -> AddChoiceParams {
    AddChoiceParams {
        event_id,
        module_id,
        task: None,
        priority: None,
        comment: None,
    }
}
