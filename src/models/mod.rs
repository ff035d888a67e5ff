pub mod account;
pub mod application;
pub mod company;
pub mod job;
pub mod message;
