pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    account_service::AccountService, application_service::ApplicationService,
    company_service::CompanyService, job_service::JobService, message_service::MessageService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub account_service: AccountService,
    pub company_service: CompanyService,
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub message_service: MessageService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let account_service = AccountService::new(pool.clone());
        let company_service = CompanyService::new(pool.clone());
        let job_service = JobService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());
        let message_service = MessageService::new(pool.clone());

        Self {
            pool,
            account_service,
            company_service,
            job_service,
            application_service,
            message_service,
        }
    }
}
