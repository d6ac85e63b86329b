pub mod person;
pub mod sqlite_service;
pub mod team;
