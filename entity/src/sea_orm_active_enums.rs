use sea_orm::entity::prelude::*;

/// Category tag of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum EventType {
    #[sea_orm(num_value = 1)]
    Training,
    #[sea_orm(num_value = 2)]
    Mission,
    #[sea_orm(num_value = 3)]
    Opex,
    #[sea_orm(num_value = 4)]
    Meeting,
    #[sea_orm(num_value = 5)]
    Maintenance,
    #[sea_orm(num_value = 6)]
    Atc,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Training => "Training",
            Self::Mission => "Mission",
            Self::Opex => "OPEX",
            Self::Meeting => "Meeting",
            Self::Maintenance => "Maintenance",
            Self::Atc => "ATC / GCI",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Training => "#27AE60",
            Self::Mission => "#F1C40F",
            Self::Opex => "#7D3C98",
            Self::Meeting => "#2980B9",
            Self::Maintenance => "#E74C3C",
            Self::Atc => "#EA9417",
        }
    }
}

/// Recurrence tag. Stored only; never expanded into occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum RepeatEvent {
    #[sea_orm(num_value = 0)]
    None,
    #[sea_orm(num_value = 1)]
    DayOfWeek,
    #[sea_orm(num_value = 2)]
    DayOfMonth,
    #[sea_orm(num_value = 3)]
    NthWeekDayOfMonth,
}

/// Task sub-type requested alongside a module choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ChoiceTask {
    #[sea_orm(num_value = 0)]
    Undefined,
    #[sea_orm(num_value = 1)]
    Cap,
    #[sea_orm(num_value = 2)]
    Cas,
    #[sea_orm(num_value = 3)]
    Sead,
    #[sea_orm(num_value = 4)]
    Escort,
    #[sea_orm(num_value = 5)]
    Transport,
}

impl ChoiceTask {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Cap => "CAP",
            Self::Cas => "CAS / Strike",
            Self::Sead => "SEAD",
            Self::Escort => "Escort",
            Self::Transport => "Transport",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ModuleType {
    #[sea_orm(num_value = 1)]
    Map,
    #[sea_orm(num_value = 2)]
    Aircraft,
    #[sea_orm(num_value = 3)]
    Helicopter,
    #[sea_orm(num_value = 4)]
    Special,
}

/// Membership status of a participant, owned by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum UserStatus {
    #[sea_orm(num_value = 0)]
    Guest,
    #[sea_orm(num_value = 1)]
    Cadet,
    #[sea_orm(num_value = 2)]
    Member,
}
