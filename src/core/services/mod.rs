pub mod dashboard_service;

pub use dashboard_service::{BillBadge, DashboardService, MonthView};

use crate::errors::CalendarError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
