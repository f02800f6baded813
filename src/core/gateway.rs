use crate::domain::model::{Driver, Lap, Meeting, Position, Session, SessionResult};
use crate::domain::ports::{ConfigProvider, RaceDataSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Gateway to the OpenF1 REST service.
///
/// All queries bind to the reference `session_key`/`year` from the
/// injected configuration. Nothing is cached; every call re-fetches so
/// callers always see the service's current view.
pub struct OpenF1Gateway<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> OpenF1Gateway<C> {
    pub fn new(config: C) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()
            .unwrap_or_default();
        Self { config, client }
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.config.base_url().trim_end_matches('/'), path);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let items = response.json::<Vec<T>>().await?;
        tracing::debug!("{} returned {} records", path, items.len());
        Ok(items)
    }
}

#[async_trait]
impl<C: ConfigProvider> RaceDataSource for OpenF1Gateway<C> {
    async fn fetch_drivers(&self) -> Result<Vec<Driver>> {
        self.get_list(
            "drivers",
            &[("session_key", self.config.session_key().to_string())],
        )
        .await
    }

    async fn fetch_driver_laps(&self, driver_number: u32, limit: usize) -> Result<Vec<Lap>> {
        let mut laps: Vec<Lap> = self
            .get_list(
                "laps",
                &[
                    ("session_key", self.config.session_key().to_string()),
                    ("driver_number", driver_number.to_string()),
                ],
            )
            .await?;

        // Most recent laps by lap number, not by wall-clock arrival.
        laps.sort_by(|a, b| b.lap_number.cmp(&a.lap_number));
        laps.truncate(limit);
        Ok(laps)
    }

    async fn fetch_sessions(&self, limit: usize) -> Result<Vec<Session>> {
        let mut sessions: Vec<Session> = self
            .get_list("sessions", &[("year", self.config.year().to_string())])
            .await?;

        sessions.sort_by(|a, b| b.date_start.cmp(&a.date_start));
        sessions.truncate(limit);
        Ok(sessions)
    }

    async fn fetch_meetings(&self, year: u32) -> Result<Vec<Meeting>> {
        self.get_list("meetings", &[("year", year.to_string())])
            .await
    }

    async fn fetch_positions(&self, session_key: u32) -> Result<Vec<Position>> {
        self.get_list("position", &[("session_key", session_key.to_string())])
            .await
    }

    async fn fetch_session_result(&self, session_key: u32) -> Result<Vec<SessionResult>> {
        self.get_list("session_result", &[("session_key", session_key.to_string())])
            .await
    }
}
