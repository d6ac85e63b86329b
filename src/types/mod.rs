pub mod error;
pub mod person;
pub mod response;
pub mod team;
