//! Terminal spinner bound to the request-activity counter.
//!
//! The CLI's stand-in for a loading overlay: one spinner appears while any
//! tracked request is in flight and disappears when the last one settles.

use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use lineup_core::activity::ActivityCounter;
use tokio::task::JoinHandle;

fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Show a spinner whenever the counter reports busy.
///
/// The task ends when the counter is dropped; callers usually just hold the
/// handle for the lifetime of the command.
pub fn attach_spinner(activity: &Arc<ActivityCounter>, message: &str) -> JoinHandle<()> {
    let mut busy_rx = activity.subscribe();
    let message = message.to_string();

    tokio::spawn(async move {
        let mut spinner: Option<ProgressBar> = None;
        while busy_rx.changed().await.is_ok() {
            let busy = *busy_rx.borrow_and_update();
            match (busy, spinner.take()) {
                (true, None) => spinner = Some(create_spinner(message.clone())),
                (true, Some(active)) => spinner = Some(active),
                (false, Some(active)) => active.finish_and_clear(),
                (false, None) => {}
            }
        }
        if let Some(active) = spinner {
            active.finish_and_clear();
        }
    })
}
