pub mod bands;
pub mod delete;
pub mod events;
pub mod new;
pub mod pick;
pub mod schedule;
pub mod update;
