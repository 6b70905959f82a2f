//! Declarative options for the two-day schedule widget.
//!
//! The widget receives one options object per festival day and renders it;
//! nothing here draws anything. The slot window runs 14:00-27:00, where
//! 27:00 extends the grid past midnight for the late slots.

use lineup_core::display::DisplayEvent;
use serde::Serialize;
use tokio::sync::watch;

pub const FESTIVAL_TIME_ZONE: &str = "America/Argentina/Buenos_Aires";

/// The two festival days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FestivalDay {
    Day14,
    Day15,
}

impl FestivalDay {
    pub fn from_number(n: u8) -> Option<FestivalDay> {
        match n {
            14 => Some(FestivalDay::Day14),
            15 => Some(FestivalDay::Day15),
            _ => None,
        }
    }

    pub fn date(&self) -> &'static str {
        match self {
            FestivalDay::Day14 => "2026-02-14",
            FestivalDay::Day15 => "2026-02-15",
        }
    }

    pub fn other(&self) -> FestivalDay {
        match self {
            FestivalDay::Day14 => FestivalDay::Day15,
            FestivalDay::Day15 => FestivalDay::Day14,
        }
    }
}

/// Toolbar slots, all left empty so the widget draws no toolbar; the day
/// toggle lives outside the widget.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderToolbar {
    pub left: &'static str,
    pub center: &'static str,
    pub right: &'static str,
}

/// Options handed to the calendar widget, serialized as-is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarOptions {
    pub initial_view: &'static str,
    pub initial_date: &'static str,
    pub header_toolbar: HeaderToolbar,
    pub height: &'static str,
    pub time_zone: &'static str,
    pub weekends: bool,
    pub editable: bool,
    pub selectable: bool,
    pub events: Vec<DisplayEvent>,
    pub event_display: &'static str,
    pub display_event_time: bool,
    pub slot_min_time: &'static str,
    pub slot_max_time: &'static str,
    pub slot_duration: &'static str,
    pub now_indicator: bool,
    pub all_day_slot: bool,
}

/// Time-grid options for one festival day.
pub fn day_options(day: FestivalDay, events: Vec<DisplayEvent>) -> CalendarOptions {
    CalendarOptions {
        initial_view: "timeGridDay",
        initial_date: day.date(),
        header_toolbar: HeaderToolbar {
            left: "",
            center: "",
            right: "",
        },
        height: "auto",
        time_zone: FESTIVAL_TIME_ZONE,
        weekends: true,
        editable: false,
        selectable: false,
        events,
        event_display: "block",
        display_event_time: true,
        slot_min_time: "14:00:00",
        slot_max_time: "27:00:00",
        slot_duration: "00:30:00",
        now_indicator: true,
        all_day_slot: false,
    }
}

/// Current-day state behind the day toggle.
pub struct DayView {
    day_tx: watch::Sender<FestivalDay>,
}

impl DayView {
    pub fn new() -> Self {
        let (day_tx, _) = watch::channel(FestivalDay::Day14);
        DayView { day_tx }
    }

    pub fn current(&self) -> FestivalDay {
        *self.day_tx.borrow()
    }

    pub fn show(&self, day: FestivalDay) {
        self.day_tx.send_replace(day);
    }

    pub fn toggle(&self) {
        let next = self.current().other();
        self.day_tx.send_replace(next);
    }

    pub fn subscribe(&self) -> watch::Receiver<FestivalDay> {
        let mut day_rx = self.day_tx.subscribe();
        day_rx.mark_changed();
        day_rx
    }
}

impl Default for DayView {
    fn default() -> Self {
        Self::new()
    }
}

/// Stage color palette (reference).
pub const STAGE_COLORS: &[(&str, &str)] = &[
    ("sur", "#79D8B2"),
    ("montana", "#FF5D38"),
    ("Paraguay", "#6E1F98"),
    ("La Casita del Blues", "#FFBD42"),
    ("La plaza electronic stage", "#FFB8C1"),
    ("Sorpresa", "#F3F7A1"),
    ("Norte", "#690571"),
    ("Boomerang", "#3788d8"),
];

/// Palette color for a stage, used when a band carries no color of its own.
pub fn stage_color(location: &str) -> Option<&'static str> {
    STAGE_COLORS
        .iter()
        .find(|(stage, _)| *stage == location)
        .map(|(_, color)| *color)
}
