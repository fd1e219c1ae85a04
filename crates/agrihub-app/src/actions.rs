//! Action dispatch: turns `UpdateAction`s into background tasks
//!
//! Every task is fire-and-forget. It sleeps or does its IO, then posts a
//! message back on the engine channel. A send error only means the engine
//! is gone, so it is ignored.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::mpsc;

use agrihub_core::prelude::*;

use crate::detection::data_url;
use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning the matching background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::ScheduleReply { text, delay } => {
            send_after(delay, Message::ChatReplyReady { text }, msg_tx);
        }

        UpdateAction::ScheduleAnalysis { ticket, delay } => {
            send_after(delay, Message::AnalysisComplete { ticket }, msg_tx);
        }

        UpdateAction::ScheduleWeatherRefresh { delay } => {
            send_after(delay, Message::WeatherRefreshed, msg_tx);
        }

        UpdateAction::ScheduleToastDismiss { id, delay } => {
            send_after(delay, Message::DismissToast { id }, msg_tx);
        }

        UpdateAction::ScheduleTopicExchange { topic_id, delay } => {
            send_after(delay, Message::TopicExchangeReady { topic_id }, msg_tx);
        }

        UpdateAction::LoadImage { path } => {
            spawn_image_load(path, msg_tx);
        }
    }
}

/// Post `msg` once `delay` has elapsed
fn send_after(delay: Duration, msg: Message, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if msg_tx.send(msg).await.is_err() {
            trace!("Timer fired after engine shut down");
        }
    });
}

/// Read an image file fully and post it back as a data URL
fn spawn_image_load(path: PathBuf, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let msg = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                debug!("Read {} bytes from {:?}", bytes.len(), path);
                let image = data_url(&path, &bytes);
                Message::ImageLoaded { path, image }
            }
            Err(e) => Message::ImageLoadFailed {
                path,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrihub_core::ImageRef;
    use tempfile::tempdir;

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_reply_arrives_after_delay() {
        let (tx, mut rx) = mpsc::channel(8);
        handle_action(
            UpdateAction::ScheduleReply {
                text: "hello".into(),
                delay: Duration::from_millis(1500),
            },
            tx,
        );

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        match rx.recv().await {
            Some(Message::ChatReplyReady { text }) => assert_eq!(text, "hello"),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_analysis_completion_carries_ticket() {
        let (tx, mut rx) = mpsc::channel(8);
        handle_action(
            UpdateAction::ScheduleAnalysis {
                ticket: 3,
                delay: Duration::from_millis(2000),
            },
            tx,
        );

        match rx.recv().await {
            Some(Message::AnalysisComplete { ticket }) => assert_eq!(ticket, 3),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_image_success() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("leaf.jpg");
        std::fs::write(&path, b"hi").unwrap();

        let (tx, mut rx) = mpsc::channel(8);
        handle_action(UpdateAction::LoadImage { path: path.clone() }, tx);

        match rx.recv().await {
            Some(Message::ImageLoaded { path: p, image }) => {
                assert_eq!(p, path);
                assert_eq!(
                    image,
                    ImageRef::DataUrl("data:image/jpeg;base64,aGk=".to_string())
                );
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_image_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.png");

        let (tx, mut rx) = mpsc::channel(8);
        handle_action(UpdateAction::LoadImage { path }, tx);

        assert!(matches!(
            rx.recv().await,
            Some(Message::ImageLoadFailed { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_after_receiver_dropped_does_not_panic() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        handle_action(
            UpdateAction::ScheduleToastDismiss {
                id: 1,
                delay: Duration::from_millis(10),
            },
            tx,
        );
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
