use chrono::Local;

use crate::alerts::{AlertMessage, NotifyOutcome, TelegramNotifier};
use crate::orion::OrionClient;

/// What happened during one fetch -> format -> notify pass
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// The broker returned nothing usable; no message was built
    NoData,
    /// A message was built and handed to the notifier
    Notified {
        message: AlertMessage,
        outcome: NotifyOutcome,
    },
}

/// Run a single cycle. Failures are logged by the collaborators and reported
/// through the returned outcome; nothing propagates.
pub async fn run_cycle(
    orion: &OrionClient,
    notifier: &TelegramNotifier,
    entity_id: &str,
) -> CycleOutcome {
    tracing::info!(
        "[-] Running check at {}...",
        Local::now().format("%H:%M:%S")
    );

    let Some(snapshot) = orion.fetch().await else {
        return CycleOutcome::NoData;
    };

    let message = AlertMessage::compose(entity_id, &snapshot);
    print_preview(&message);

    let outcome = notifier.notify(&message.text()).await;
    CycleOutcome::Notified { message, outcome }
}

fn print_preview(message: &AlertMessage) {
    println!("\n--- PREVIEW ---");
    println!("{}", message);
    println!("---------------\n");
}
