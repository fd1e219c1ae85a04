//! End-to-end flows through the Engine: timers, events and persistence

use std::path::Path;
use std::time::Duration;

use agrihub_app::config::{Settings, CONFIG_FILENAME};
use agrihub_app::{AppState, Engine, EngineEvent, Message};
use agrihub_core::{DetectionState, Direction, Page};
use tempfile::TempDir;
use tokio::sync::broadcast;

fn seeded_engine(dir: &Path, settings: Settings) -> Engine {
    Engine::with_state(AppState::with_seed(settings, 99), dir.to_path_buf())
}

fn collect(events: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
    let mut out = Vec::new();
    while let Ok(event) = events.try_recv() {
        out.push(event);
    }
    out
}

/// Let scheduled timers fire, then process what they posted
async fn advance(engine: &mut Engine, ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    engine.drain_pending_messages();
}

#[tokio::test(start_paused = true)]
async fn test_chat_reply_arrives_within_delay_window() {
    let temp = TempDir::new().unwrap();
    let mut engine = seeded_engine(temp.path(), Settings::default());
    let mut events = engine.subscribe();

    engine.process_message(Message::NavigateTo("chat".into()));
    engine.process_message(Message::SendChat("Any pest advice?".into()));

    // Nothing before the minimum delay
    advance(&mut engine, 900).await;
    assert_eq!(engine.state.chat.len(), 2);

    advance(&mut engine, 2200).await;
    assert_eq!(engine.state.chat.len(), 3);
    let reply = engine.state.chat.last().unwrap();
    assert_eq!(reply.direction, Direction::Received);
    assert!(reply.text.contains("pest"));

    let appended = collect(&mut events)
        .into_iter()
        .filter(|e| matches!(e, EngineEvent::MessageAppended { .. }))
        .count();
    assert_eq!(appended, 2);
}

#[tokio::test(start_paused = true)]
async fn test_detection_completes_once_after_delay() {
    let temp = TempDir::new().unwrap();
    let mut engine = seeded_engine(temp.path(), Settings::default());
    let mut events = engine.subscribe();

    engine.process_message(Message::CaptureImage);
    engine.process_message(Message::AnalyzeImage);
    engine.process_message(Message::AnalyzeImage);
    assert_eq!(engine.state.detection.state(), DetectionState::Analyzing);

    advance(&mut engine, 1500).await;
    assert_eq!(engine.state.detection.state(), DetectionState::Analyzing);

    advance(&mut engine, 1000).await;
    assert_eq!(engine.state.detection.state(), DetectionState::ResultReady);

    let transitions: Vec<(DetectionState, DetectionState)> = collect(&mut events)
        .into_iter()
        .filter_map(|e| match e {
            EngineEvent::DetectionChanged { from, to } => Some((from, to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        transitions,
        vec![
            (DetectionState::Idle, DetectionState::Previewing),
            (DetectionState::Previewing, DetectionState::Analyzing),
            (DetectionState::Analyzing, DetectionState::ResultReady),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_reset_during_analysis_discards_completion() {
    let temp = TempDir::new().unwrap();
    let mut engine = seeded_engine(temp.path(), Settings::default());

    engine.process_message(Message::CaptureImage);
    engine.process_message(Message::AnalyzeImage);
    engine.process_message(Message::ResetDetection);
    engine.process_message(Message::CaptureImage);

    advance(&mut engine, 2500).await;
    assert_eq!(engine.state.detection.state(), DetectionState::Previewing);
}

#[tokio::test(start_paused = true)]
async fn test_toast_auto_dismisses() {
    let temp = TempDir::new().unwrap();
    let mut engine = seeded_engine(temp.path(), Settings::default());

    engine.process_message(Message::NavigateTo("barn".into()));
    assert!(engine.state.toasts.current().is_some());
    assert_eq!(engine.state.page(), Page::Home);

    advance(&mut engine, 3100).await;
    assert!(engine.state.toasts.current().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_ask_topic_lands_in_chat_after_delay() {
    let temp = TempDir::new().unwrap();
    let mut engine = seeded_engine(temp.path(), Settings::default());

    engine.process_message(Message::AskTopic("irrigation".into()));
    assert_eq!(engine.state.page(), Page::Home);

    advance(&mut engine, 600).await;
    assert_eq!(engine.state.page(), Page::Chat);
    assert_eq!(
        engine.state.chat.last().unwrap().text,
        "Here's detailed information about Irrigation..."
    );
}

#[tokio::test(start_paused = true)]
async fn test_weather_quick_action_refreshes() {
    let temp = TempDir::new().unwrap();
    let mut engine = seeded_engine(temp.path(), Settings::default());
    let mut events = engine.subscribe();

    engine.process_message(Message::NavigateTo("profile".into()));
    engine.process_message(Message::QuickAction(agrihub_app::QuickAction::Weather));
    assert!(engine.state.weather.is_refreshing());

    advance(&mut engine, 1100).await;
    assert!(!engine.state.weather.is_refreshing());
    assert!(collect(&mut events)
        .iter()
        .any(|e| matches!(e, EngineEvent::Toast { message } if message == "Weather data updated")));
}

#[tokio::test]
async fn test_dark_mode_survives_restart() {
    let temp = TempDir::new().unwrap();

    let mut engine = Engine::new(temp.path().to_path_buf());
    assert!(!engine.state.dark_mode);
    engine.process_message(Message::ToggleDarkMode);
    engine.shutdown().await;
    drop(engine);

    let engine = Engine::new(temp.path().to_path_buf());
    assert!(engine.state.dark_mode);
}

#[tokio::test]
async fn test_config_file_overrides_delays() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(CONFIG_FILENAME),
        "[detection]\nanalysis_delay_ms = 50\nreset_on_enter = true\n",
    )
    .unwrap();

    let engine = Engine::new(temp.path().to_path_buf());
    assert_eq!(
        engine.settings().detection.analysis_delay(),
        Duration::from_millis(50)
    );
    assert!(engine.settings().detection.reset_on_enter);
    // Untouched sections keep their defaults
    assert_eq!(engine.settings().chat, Settings::default().chat);
}

#[tokio::test]
async fn test_invalid_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(CONFIG_FILENAME), "[chat\nbroken").unwrap();

    let engine = Engine::new(temp.path().to_path_buf());
    assert_eq!(engine.settings(), &Settings::default());
}

#[tokio::test]
async fn test_upload_reads_file_into_data_url() {
    let temp = TempDir::new().unwrap();
    let image = temp.path().join("leaf.png");
    std::fs::write(&image, [0x89, b'P', b'N', b'G']).unwrap();

    let mut engine = seeded_engine(temp.path(), Settings::default());
    engine.process_message(Message::SelectImageFile(image));

    let msg = tokio::time::timeout(Duration::from_secs(5), engine.msg_rx.recv())
        .await
        .expect("image load timed out")
        .expect("channel closed");
    engine.process_message(msg);

    assert_eq!(engine.state.detection.state(), DetectionState::Previewing);
    let url = engine.state.detection.image().unwrap().as_str().to_string();
    assert!(url.starts_with("data:image/png;base64,"));
}
