//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept the backend client and the caller's token as the first two
//! arguments. Reads of slowly-changing reference data go through the query
//! cache; writes evict it.

pub mod agency_repo;
pub mod artist_repo;
pub mod audit_repo;
pub mod conflict_repo;
pub mod libretime_repo;
pub mod notification_repo;
pub mod order_repo;
pub mod rights_repo;
pub mod sales_team_repo;
pub mod spot_repo;
pub mod station_repo;
pub mod statistics_repo;
pub mod submission_repo;

pub use agency_repo::AgencyRepo;
pub use artist_repo::ArtistRepo;
pub use audit_repo::AuditLogRepo;
pub use conflict_repo::ConflictRepo;
pub use libretime_repo::LibreTimeRepo;
pub use notification_repo::NotificationRepo;
pub use order_repo::OrderRepo;
pub use rights_repo::RightsRepo;
pub use sales_team_repo::SalesTeamRepo;
pub use spot_repo::SpotRepo;
pub use station_repo::StationRepo;
pub use statistics_repo::PlayStatisticsRepo;
pub use submission_repo::SubmissionRepo;
