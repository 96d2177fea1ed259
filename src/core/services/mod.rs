pub mod report_service;

pub use report_service::ReportService;

use crate::errors::TreasuryError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Treasury(#[from] TreasuryError),
}
