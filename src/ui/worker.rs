//! Executes `UiCommand`s against the profile service.
//!
//! Each command runs in its own task so a slow save never holds up a
//! refresh. Completions are posted back onto the UI event channel carrying
//! the generation they were issued with.

use crate::api::ProfileClient;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn run_worker(
    client: Arc<ProfileClient>,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let client = Arc::clone(&client);
        let events = events.clone();
        tokio::spawn(async move {
            execute(client, command, events).await;
        });
    }
    tracing::debug!("command channel closed, API worker exiting");
}

pub async fn execute(client: Arc<ProfileClient>, command: UiCommand, events: Sender<AppEvent>) {
    let event = match command {
        UiCommand::FetchProfile { generation } => {
            let result = client.fetch_profile().await;
            if let Err(err) = &result {
                tracing::debug!(generation, kind = err.kind(), "fetch completed with error");
            }
            AppEvent::ProfileFetched { generation, result }
        }
        UiCommand::SaveProfile {
            generation,
            draft,
            valid_until,
        } => {
            let result = client.save_profile(&draft, &valid_until).await;
            if let Err(err) = &result {
                tracing::debug!(generation, kind = err.kind(), "save completed with error");
            }
            AppEvent::ProfileSaved { generation, result }
        }
    };

    if events.send(event).is_err() {
        tracing::trace!("UI loop gone, dropping API completion");
    }
}
