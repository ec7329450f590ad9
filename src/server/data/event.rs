use chrono::{DateTime, Utc};
use entity::prelude::{CalendarEvent, EventModule};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::event::{Event, EventFields, EventFilter, Restriction};

/// Row lock taken when reading an event inside a write transaction.
///
/// Backends without row locks (SQLite) ignore the clause and serialise writers instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLock {
    /// `FOR SHARE`: blocks concurrent soft-delete/restore/update of the event.
    Shared,
    /// `FOR UPDATE`.
    Exclusive,
}

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an event owned by `owner_id` together with its module references.
    ///
    /// # Returns
    /// - `Ok(Event)`: The created event
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, owner_id: i32, fields: EventFields) -> Result<Event, DbErr> {
        let now = Utc::now();
        let module_ids = fields.module_ids.clone();

        let event = entity::calendar_event::ActiveModel {
            title: ActiveValue::Set(fields.title),
            start_date: ActiveValue::Set(fields.start_date),
            end_date: ActiveValue::Set(fields.end_date),
            event_type: ActiveValue::Set(fields.event_type),
            sim_dcs: ActiveValue::Set(fields.sim_dcs),
            sim_bms: ActiveValue::Set(fields.sim_bms),
            description: ActiveValue::Set(fields.description),
            restrictions: ActiveValue::Set(Restriction::join_list(&fields.restrictions)),
            registration: ActiveValue::Set(fields.registration),
            ato: ActiveValue::Set(fields.ato),
            debrief: ActiveValue::Set(fields.debrief),
            repeat_event: ActiveValue::Set(fields.repeat_event),
            deleted: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(None),
            owner_id: ActiveValue::Set(owner_id),
            map_id: ActiveValue::Set(fields.map_id),
            server_id: ActiveValue::Set(fields.server_id),
            image_id: ActiveValue::Set(fields.image_id),
            roster_version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.set_module_ids(event.id, &module_ids).await?;

        Ok(Event::from_entity(event, module_ids))
    }

    /// Gets an event by ID with its module references.
    ///
    /// # Returns
    /// - `Ok(Some(Event))`: Event found, deleted or not
    /// - `Ok(None)`: No event with this ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let event = CalendarEvent::find_by_id(id).one(self.db).await?;

        self.with_module_ids(event).await
    }

    /// Gets an event by ID while taking a row lock on it.
    pub async fn find_by_id_locked(&self, id: i32, lock: RowLock) -> Result<Option<Event>, DbErr> {
        let query = CalendarEvent::find_by_id(id);
        let query = match lock {
            RowLock::Shared => query.lock_shared(),
            RowLock::Exclusive => query.lock_exclusive(),
        };

        let event = query.one(self.db).await?;

        self.with_module_ids(event).await
    }

    async fn with_module_ids(
        &self,
        event: Option<entity::calendar_event::Model>,
    ) -> Result<Option<Event>, DbErr> {
        match event {
            Some(event) => {
                let module_ids = self.get_module_ids(event.id).await?;
                Ok(Some(Event::from_entity(event, module_ids)))
            }
            None => Ok(None),
        }
    }

    /// Overwrites the scalar fields of an event and replaces its module reference set.
    ///
    /// Leaves owner, deletion state and roster version untouched.
    pub async fn update(&self, id: i32, fields: EventFields) -> Result<Event, DbErr> {
        let module_ids = fields.module_ids.clone();

        let event = entity::calendar_event::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(fields.title),
            start_date: ActiveValue::Set(fields.start_date),
            end_date: ActiveValue::Set(fields.end_date),
            event_type: ActiveValue::Set(fields.event_type),
            sim_dcs: ActiveValue::Set(fields.sim_dcs),
            sim_bms: ActiveValue::Set(fields.sim_bms),
            description: ActiveValue::Set(fields.description),
            restrictions: ActiveValue::Set(Restriction::join_list(&fields.restrictions)),
            registration: ActiveValue::Set(fields.registration),
            ato: ActiveValue::Set(fields.ato),
            debrief: ActiveValue::Set(fields.debrief),
            repeat_event: ActiveValue::Set(fields.repeat_event),
            map_id: ActiveValue::Set(fields.map_id),
            server_id: ActiveValue::Set(fields.server_id),
            image_id: ActiveValue::Set(fields.image_id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.set_module_ids(id, &module_ids).await?;

        Ok(Event::from_entity(event, module_ids))
    }

    /// Replaces the module reference set of an event.
    pub async fn set_module_ids(&self, event_id: i32, module_ids: &[i32]) -> Result<(), DbErr> {
        EventModule::delete_many()
            .filter(entity::event_module::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        if module_ids.is_empty() {
            return Ok(());
        }

        EventModule::insert_many(module_ids.iter().map(|module_id| {
            entity::event_module::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                module_id: ActiveValue::Set(*module_id),
            }
        }))
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets the ids of the modules an event references, ascending.
    pub async fn get_module_ids(&self, event_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = EventModule::find()
            .filter(entity::event_module::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_module::Column::ModuleId)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.module_id).collect())
    }

    /// Marks an event deleted at `at`.
    pub async fn mark_deleted(&self, id: i32, at: DateTime<Utc>) -> Result<(), DbErr> {
        CalendarEvent::update_many()
            .col_expr(entity::calendar_event::Column::Deleted, Expr::value(true))
            .col_expr(entity::calendar_event::Column::DeletedAt, Expr::value(at))
            .col_expr(entity::calendar_event::Column::UpdatedAt, Expr::value(at))
            .filter(entity::calendar_event::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears the deleted flag and timestamp of an event.
    pub async fn clear_deleted(&self, id: i32) -> Result<(), DbErr> {
        CalendarEvent::update_many()
            .col_expr(entity::calendar_event::Column::Deleted, Expr::value(false))
            .col_expr(
                entity::calendar_event::Column::DeletedAt,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .col_expr(entity::calendar_event::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::calendar_event::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Compare-and-swap of the roster version.
    ///
    /// Increments `roster_version` only while it still equals `expected` and the event
    /// is not deleted.
    ///
    /// # Returns
    /// - `Ok(true)`: Version advanced to `expected + 1`
    /// - `Ok(false)`: The event changed concurrently, was deleted or does not exist
    /// - `Err(DbErr)`: Database error
    pub async fn advance_roster_version(&self, id: i32, expected: i32) -> Result<bool, DbErr> {
        let result = CalendarEvent::update_many()
            .col_expr(
                entity::calendar_event::Column::RosterVersion,
                Expr::col(entity::calendar_event::Column::RosterVersion).add(1),
            )
            .filter(entity::calendar_event::Column::Id.eq(id))
            .filter(entity::calendar_event::Column::RosterVersion.eq(expected))
            .filter(entity::calendar_event::Column::Deleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets a page of events matching the filter, ordered by start date.
    ///
    /// # Returns
    /// - `Ok((events, total))`: Events of the requested page and the total match count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(&self, filter: &EventFilter) -> Result<(Vec<Event>, u64), DbErr> {
        use entity::calendar_event::Column;

        let mut query = CalendarEvent::find();

        if let Some(deleted) = filter.deleted {
            query = query.filter(Column::Deleted.eq(deleted));
        }
        // Overlap with [from, to]
        if let Some(from) = filter.from {
            query = query.filter(Column::EndDate.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(Column::StartDate.lte(to));
        }
        if let Some(search) = filter.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                query = query.filter(
                    Expr::expr(Func::lower(Expr::col(Column::Title)))
                        .like(contains_pattern(search)),
                );
            }
        }
        if let Some(event_type) = filter.event_type {
            query = query.filter(Column::EventType.eq(event_type));
        }
        if let Some(sim_dcs) = filter.sim_dcs {
            query = query.filter(Column::SimDcs.eq(sim_dcs));
        }
        if let Some(sim_bms) = filter.sim_bms {
            query = query.filter(Column::SimBms.eq(sim_bms));
        }

        let paginator = query
            .order_by_asc(Column::StartDate)
            .order_by_asc(Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let events = paginator.fetch_page(filter.page).await?;

        let event_ids: Vec<i32> = events.iter().map(|e| e.id).collect();
        let mut module_ids: HashMap<i32, Vec<i32>> = HashMap::new();
        if !event_ids.is_empty() {
            let rows = EventModule::find()
                .filter(entity::event_module::Column::EventId.is_in(event_ids))
                .order_by_asc(entity::event_module::Column::ModuleId)
                .all(self.db)
                .await?;
            for row in rows {
                module_ids.entry(row.event_id).or_default().push(row.module_id);
            }
        }

        let events = events
            .into_iter()
            .map(|event| {
                let modules = module_ids.remove(&event.id).unwrap_or_default();
                Event::from_entity(event, modules)
            })
            .collect();

        Ok((events, total))
    }
}

/// Case-folded `%term%` pattern with `%`, `_` and `\` in the term matched literally.
fn contains_pattern(term: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}
