//! Live list of schedule events.
//!
//! Mirrors the backend through the API client and publishes every change on
//! a watch channel: refresh replaces the list, create appends, update
//! replaces by id, delete removes. Whatever renders the calendar subscribes
//! once and receives the current list plus subsequent changes.

use anyhow::Result;
use lineup_core::display::DisplayEvent;
use lineup_core::event::EventDraft;
use tokio::sync::watch;

use crate::api::ApiClient;

pub struct EventFeed {
    api: ApiClient,
    events_tx: watch::Sender<Vec<DisplayEvent>>,
}

impl EventFeed {
    pub fn new(api: ApiClient) -> Self {
        let (events_tx, _) = watch::channel(Vec::new());
        EventFeed { api, events_tx }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Subscribe to the current event list and subsequent changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<DisplayEvent>> {
        let mut events_rx = self.events_tx.subscribe();
        events_rx.mark_changed();
        events_rx
    }

    pub fn current(&self) -> Vec<DisplayEvent> {
        self.events_tx.borrow().clone()
    }

    /// Reload from the backend (placeholder data when unreachable).
    pub async fn refresh(&self) -> Vec<DisplayEvent> {
        let events = self.api.fetch_events().await;
        self.events_tx.send_replace(events.clone());
        events
    }

    pub async fn create(&self, draft: &EventDraft) -> Result<DisplayEvent> {
        let event = self.api.create_event(draft).await?;
        self.events_tx
            .send_modify(|events| events.push(event.clone()));
        Ok(event)
    }

    pub async fn update(&self, id: &str, draft: &EventDraft) -> Result<DisplayEvent> {
        let event = self.api.update_event(id, draft).await?;
        self.events_tx.send_modify(|events| {
            if let Some(slot) = events.iter_mut().find(|e| e.id == id) {
                *slot = event.clone();
            }
        });
        Ok(event)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.delete_event(id).await?;
        self.events_tx
            .send_modify(|events| events.retain(|e| e.id != id));
        Ok(())
    }
}
