// HTTP handlers for the user roster

pub mod health;
pub mod users;
