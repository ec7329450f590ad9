mod event;
mod flight;
mod slot;
mod vote;
