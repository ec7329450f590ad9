use crate::server::model::user::Actor;

mod choice;
mod detail;
mod vote;

fn actor(user: &entity::user::Model) -> Actor {
    Actor::from_entity(user.clone())
}
