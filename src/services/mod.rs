pub mod account_service;
pub mod application_service;
pub mod company_service;
pub mod job_service;
pub mod message_service;
