use chrono::Duration;
use entity::sea_orm_active_enums::{EventType, RepeatEvent};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::event::EventRepository,
    model::event::{EventFields, EventFilter, Restriction},
};

mod get_paginated;
mod mark_deleted;

fn fields(title: &str) -> EventFields {
    let start_date = factory::helpers::now() + Duration::days(1);
    EventFields {
        title: title.to_string(),
        start_date,
        end_date: start_date + Duration::hours(2),
        event_type: EventType::Training,
        sim_dcs: true,
        sim_bms: false,
        description: None,
        restrictions: vec![],
        registration: true,
        ato: false,
        debrief: None,
        repeat_event: RepeatEvent::None,
        map_id: None,
        server_id: None,
        image_id: None,
        module_ids: vec![],
    }
}
