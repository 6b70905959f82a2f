//! HTTP client for the lineup backend.
//!
//! Every request runs under an activity guard so the busy indicator tracks
//! overlapping calls, and the read endpoints degrade to placeholder data
//! when the backend is unreachable instead of failing the UI.

use std::sync::Arc;

use anyhow::{Context, Result};
use lineup_core::activity::ActivityCounter;
use lineup_core::band::{Band, SelectionRequest};
use lineup_core::convert::to_display_event;
use lineup_core::display::DisplayEvent;
use lineup_core::envelope::{BandsEnvelope, Envelope, StatusEnvelope};
use lineup_core::event::{EventDraft, EventRecord};

use crate::mock;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    activity: Arc<ActivityCounter>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, activity: Arc<ActivityCounter>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            activity,
        }
    }

    pub fn activity(&self) -> &Arc<ActivityCounter> {
        &self.activity
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch all schedule events, mapped into the widget shape.
    ///
    /// Falls back to the sample data set when the backend cannot be reached,
    /// so the calendar still has something to render.
    pub async fn fetch_events(&self) -> Vec<DisplayEvent> {
        let _busy = self.activity.track();

        match self.try_fetch_events().await {
            Ok(events) => events,
            Err(err) => {
                log::warn!("Failed to fetch events from backend, using sample events: {err:#}");
                mock::sample_events()
            }
        }
    }

    async fn try_fetch_events(&self) -> Result<Vec<DisplayEvent>> {
        let envelope: Envelope<Vec<EventRecord>> = self
            .http
            .get(self.url("/api/events"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Invalid events response")?;

        let records = envelope.into_data()?;
        Ok(records.iter().map(to_display_event).collect())
    }

    /// Create a new schedule event.
    pub async fn create_event(&self, draft: &EventDraft) -> Result<DisplayEvent> {
        let _busy = self.activity.track();

        let envelope: Envelope<EventRecord> = self
            .http
            .post(self.url("/api/events"))
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Invalid create response")?;

        let record = envelope.into_data()?;
        Ok(to_display_event(&record))
    }

    /// Update an existing schedule event.
    pub async fn update_event(&self, id: &str, draft: &EventDraft) -> Result<DisplayEvent> {
        let _busy = self.activity.track();

        let envelope: Envelope<EventRecord> = self
            .http
            .put(self.url(&format!("/api/events/{id}")))
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Invalid update response")?;

        let record = envelope.into_data()?;
        Ok(to_display_event(&record))
    }

    /// Delete a schedule event by identifier.
    pub async fn delete_event(&self, id: &str) -> Result<()> {
        let _busy = self.activity.track();

        let envelope: StatusEnvelope = self
            .http
            .delete(self.url(&format!("/api/events/{id}")))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Invalid delete response")?;

        envelope.check()?;
        Ok(())
    }

    /// Fetch the band lineup; an unreachable backend yields an empty list.
    pub async fn fetch_bands(&self) -> Vec<Band> {
        let _busy = self.activity.track();

        match self.try_fetch_bands().await {
            Ok(bands) => bands,
            Err(err) => {
                log::warn!("Failed to fetch bands from backend: {err:#}");
                Vec::new()
            }
        }
    }

    async fn try_fetch_bands(&self) -> Result<Vec<Band>> {
        let envelope: BandsEnvelope = self
            .http
            .get(self.url("/api/getBands"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Invalid bands response")?;

        Ok(envelope.into_data()?)
    }

    /// Save a person's band picks.
    pub async fn save_selection(&self, request: &SelectionRequest) -> Result<()> {
        let _busy = self.activity.track();

        let envelope: StatusEnvelope = self
            .http
            .post(self.url("/api/bandByPerson"))
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Invalid selection response")?;

        envelope.check()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(server.url(), Arc::new(ActivityCounter::new()))
    }

    #[tokio::test]
    async fn test_fetch_events_maps_records() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/events")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "success": true,
                    "data": [{
                        "id": "evt-1",
                        "title": "Blues al atardecer",
                        "startDate": "2026-02-14T19:00:00-03:00",
                        "endDate": "2026-02-14T20:00:00-03:00"
                    }],
                    "timestamp": "2026-02-14T12:00:00Z"
                }"#,
            )
            .create_async()
            .await;

        let client = test_client(&server);
        let events = client.fetch_events().await;

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Blues al atardecer");
        // Color absent on the record -> default applied during mapping
        assert_eq!(events[0].background_color, "#3788d8");
        assert!(!client.activity().is_busy());
    }

    #[tokio::test]
    async fn test_fetch_events_falls_back_to_samples() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/events")
            .with_status(500)
            .create_async()
            .await;

        let client = test_client(&server);
        let events = client.fetch_events().await;

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "mock-1");
        assert_eq!(events[1].id, "mock-2");
        // The guard must release on the error path too
        assert!(!client.activity().is_busy());
    }

    #[tokio::test]
    async fn test_create_event_surfaces_failure_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/api/events")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "success": false,
                    "data": {
                        "id": "", "title": "",
                        "startDate": "", "endDate": ""
                    },
                    "message": "slot already taken"
                }"#,
            )
            .create_async()
            .await;

        let client = test_client(&server);
        let draft = EventDraft::new("Late set", "2026-02-15T01:00:00Z", "2026-02-15T02:00:00Z");
        let err = client.create_event(&draft).await.unwrap_err();

        assert!(err.to_string().contains("slot already taken"));
        assert!(!client.activity().is_busy());
    }

    #[tokio::test]
    async fn test_delete_event_hits_id_path() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/api/events/evt-9")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "message": "Event evt-9 deleted"}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        client.delete_event("evt-9").await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_bands_falls_back_to_empty() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/getBands")
            .with_status(502)
            .create_async()
            .await;

        let client = test_client(&server);
        assert!(client.fetch_bands().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_selection_posts_person() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/bandByPerson")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"person": "ana"}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "message": "Selection saved"}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let request = SelectionRequest {
            bands: vec![Band::new(1, "Los Boomerangs")],
            person: "ana".to_string(),
        };
        client.save_selection(&request).await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_overlapping_requests_share_one_busy_window() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/events")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": []}"#)
            .expect_at_least(2)
            .create_async()
            .await;

        let activity = Arc::new(ActivityCounter::new());
        let client = Arc::new(ApiClient::new(server.url(), Arc::clone(&activity)));

        let a = tokio::spawn({
            let client = Arc::clone(&client);
            async move { client.fetch_events().await }
        });
        let b = tokio::spawn({
            let client = Arc::clone(&client);
            async move { client.fetch_events().await }
        });

        a.await.unwrap();
        b.await.unwrap();

        assert!(!activity.is_busy());
        assert_eq!(activity.pending(), 0);
    }
}
