use crate::core::aggregate::aggregate_teams;
use crate::core::navigate::{find_by_number, navigate};
use crate::core::normalize::CountryCatalog;
use crate::core::query::{filter_and_sort, filter_and_sort_teams};
use crate::domain::model::{
    Driver, Lap, Meeting, Navigation, Position, Session, SessionResult, SortConfig, Team,
};
use crate::domain::ports::{ConfigProvider, RaceDataSource};
use crate::utils::error::Result;

/// Everything a driver detail surface needs, produced from one
/// concurrent fan-out over the gateway.
#[derive(Debug, Clone)]
pub struct DriverDetail {
    pub driver: Driver,
    pub laps: Vec<Lap>,
    pub navigation: Navigation,
}

/// Consumer-facing facade over the gateway.
///
/// List-style reads favor availability: a remote failure degrades to an
/// empty view with a warning instead of surfacing. The single-driver
/// lookup path propagates instead, so callers can render a retry
/// affordance. Every driver passes through the country normalizer before
/// any aggregation, navigation or query sees it.
pub struct PaddockService<S: RaceDataSource, C: ConfigProvider> {
    source: S,
    config: C,
    catalog: CountryCatalog,
}

impl<S: RaceDataSource, C: ConfigProvider> PaddockService<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self::with_catalog(source, config, CountryCatalog::default())
    }

    pub fn with_catalog(source: S, config: C, catalog: CountryCatalog) -> Self {
        Self {
            source,
            config,
            catalog,
        }
    }

    /// Normalized drivers of the reference session. Degrades to empty.
    pub async fn driver_roster(
        &self,
        query: &str,
        team_filter: &str,
        country_filter: &str,
        sort: SortConfig,
    ) -> Vec<Driver> {
        let drivers = degrade(self.source.fetch_drivers().await, "drivers");
        let drivers = self.catalog.normalize_all(drivers);
        filter_and_sort(&drivers, query, team_filter, country_filter, sort)
    }

    /// Teams aggregated from the reference session. Degrades to empty.
    pub async fn team_standings(&self) -> Vec<Team> {
        let drivers = degrade(self.source.fetch_drivers().await, "drivers");
        aggregate_teams(&self.catalog.normalize_all(drivers))
    }

    /// Filtered/sorted team view. Degrades to empty.
    pub async fn team_view(
        &self,
        query: &str,
        country_filter: &str,
        min_members: usize,
        sort: SortConfig,
    ) -> Vec<Team> {
        let teams = self.team_standings().await;
        filter_and_sort_teams(&teams, query, country_filter, min_members, sort)
    }

    /// One driver with its recent laps and prev/next navigation.
    ///
    /// The drivers fetch and the lap fetch run concurrently and are both
    /// awaited before a result is produced. The drivers fetch is the
    /// must-propagate path; the lap branch degrades to an empty list on
    /// its own failure. An unknown number yields `Ok(None)`.
    pub async fn driver_detail(&self, driver_number: u32) -> Result<Option<DriverDetail>> {
        let (drivers, laps) = tokio::join!(
            self.source.fetch_drivers(),
            self.source
                .fetch_driver_laps(driver_number, self.config.lap_limit()),
        );

        let drivers = self.catalog.normalize_all(drivers?);
        let laps = degrade(laps, "laps");

        let Some(driver) = find_by_number(&drivers, driver_number).cloned() else {
            return Ok(None);
        };

        Ok(Some(DriverDetail {
            navigation: navigate(&drivers, driver_number),
            driver,
            laps,
        }))
    }

    /// Prev/next adjacency alone. Degrades to an empty result.
    pub async fn navigation(&self, driver_number: u32) -> Navigation {
        match self.source.fetch_drivers().await {
            Ok(drivers) => {
                let drivers = self.catalog.normalize_all(drivers);
                navigate(&drivers, driver_number)
            }
            Err(e) => {
                tracing::warn!("drivers unavailable, navigation degraded: {}", e);
                Navigation::default()
            }
        }
    }

    /// Most recent sessions of the reference year. Degrades to empty.
    pub async fn recent_sessions(&self) -> Vec<Session> {
        degrade(
            self.source
                .fetch_sessions(self.config.session_limit())
                .await,
            "sessions",
        )
    }

    /// All meetings of the reference year. Degrades to empty.
    pub async fn season_meetings(&self) -> Vec<Meeting> {
        degrade(
            self.source.fetch_meetings(self.config.year()).await,
            "meetings",
        )
    }

    /// Position stream of the reference session. Degrades to empty.
    pub async fn session_positions(&self) -> Vec<Position> {
        degrade(
            self.source
                .fetch_positions(self.config.session_key())
                .await,
            "positions",
        )
    }

    /// Final classification of the reference session. Degrades to empty.
    pub async fn session_results(&self) -> Vec<SessionResult> {
        degrade(
            self.source
                .fetch_session_result(self.config.session_key())
                .await,
            "session results",
        )
    }
}

fn degrade<T>(result: Result<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("{} unavailable, serving empty view: {}", what, e);
            Vec::new()
        }
    }
}
