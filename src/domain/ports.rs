use crate::domain::model::{Driver, Lap, Meeting, Position, Session, SessionResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only query surface of the remote race-data service.
///
/// Every operation binds to the reference session/year supplied by the
/// configuration; none of them caches across calls. Failures surface as
/// [`PaddockError::RemoteUnavailable`](crate::utils::error::PaddockError);
/// the degrade-to-empty policy for list consumers lives one layer up in
/// the service, not here.
#[async_trait]
pub trait RaceDataSource: Send + Sync {
    async fn fetch_drivers(&self) -> Result<Vec<Driver>>;

    /// Laps for one driver, sorted by `lap_number` descending and
    /// truncated to `limit`.
    async fn fetch_driver_laps(&self, driver_number: u32, limit: usize) -> Result<Vec<Lap>>;

    /// Sessions of the reference year, sorted by `date_start` descending
    /// and truncated to `limit`.
    async fn fetch_sessions(&self, limit: usize) -> Result<Vec<Session>>;

    async fn fetch_meetings(&self, year: u32) -> Result<Vec<Meeting>>;

    async fn fetch_positions(&self, session_key: u32) -> Result<Vec<Position>>;

    async fn fetch_session_result(&self, session_key: u32) -> Result<Vec<SessionResult>>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn session_key(&self) -> u32;
    fn year(&self) -> u32;
    fn lap_limit(&self) -> usize;
    fn session_limit(&self) -> usize;
    fn request_timeout_secs(&self) -> u64;
}
