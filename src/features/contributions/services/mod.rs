mod contribution_service;
pub mod tracking;

pub use contribution_service::ContributionService;
