use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{sync::mpsc::Sender, time::interval};

use crate::domain::controls::ControlEvent;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Tick { fleet: usize },
    Input(Event),
    Control(ControlEvent),
    Relaunch,
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// One periodic ticker per fleet; each stops once the receiver is gone.
pub fn start_fleet_tickers(tx: &Sender<AppEvent>, fleets: usize, period_ms: u64) {
    let period = Duration::from_millis(period_ms.max(1));
    for fleet in 0..fleets {
        let tx = tx.clone();
        tokio::spawn(async move {
            let mut ticker = interval(period);
            loop {
                ticker.tick().await;
                if tx.send(AppEvent::Tick { fleet }).await.is_err() {
                    break;
                }
            }
        });
    }
    tracing::debug!(fleets, period_ms, "fleet tickers started");
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    #[tokio::test]
    async fn tickers_emit_for_every_fleet() {
        let (tx, mut rx) = mpsc::channel(16);
        start_fleet_tickers(&tx, 3, 5);

        let mut seen = [false; 3];
        while !seen.iter().all(|s| *s) {
            match rx.recv().await {
                Some(AppEvent::Tick { fleet }) => seen[fleet] = true,
                other => panic!("unexpected event {other:?}"),
            }
        }
    }
}
