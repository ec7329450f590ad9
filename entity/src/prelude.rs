pub use super::calendar_event::Entity as CalendarEvent;
pub use super::event_choice::Entity as EventChoice;
pub use super::event_module::Entity as EventModule;
pub use super::event_vote::Entity as EventVote;
pub use super::flight::Entity as Flight;
pub use super::module::Entity as Module;
pub use super::slot::Entity as Slot;
pub use super::user::Entity as User;
