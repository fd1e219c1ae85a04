//! Scripted headless sessions: stdin commands in, NDJSON events out

use agrihub::headless::command::{parse_command, Command};
use agrihub::headless::HeadlessEvent;
use agrihub_app::config::Settings;
use agrihub_app::{AppState, Engine};
use serde_json::Value;
use tempfile::TempDir;

/// Run each script line through the engine and return emitted events as JSON
async fn run_script(engine: &mut Engine, script: &str) -> Vec<Value> {
    let mut events = engine.subscribe();
    let mut out = Vec::new();

    for line in script.lines() {
        match parse_command(line) {
            Ok(Some(Command::Send(msg))) => engine.process_message(msg),
            Ok(Some(Command::Wait(delay))) => {
                tokio::time::sleep(delay).await;
                engine.drain_pending_messages();
            }
            Ok(None) => {}
            Err(e) => engine.process_message(agrihub_app::Message::error_toast(e.to_string())),
        }
        while let Ok(event) = events.try_recv() {
            out.push(serde_json::to_value(HeadlessEvent::from(&event)).unwrap());
        }
    }
    out
}

fn event_names(events: &[Value]) -> Vec<&str> {
    events.iter().filter_map(|e| e["event"].as_str()).collect()
}

fn engine(temp: &TempDir) -> Engine {
    Engine::with_state(
        AppState::with_seed(Settings::default(), 5),
        temp.path().to_path_buf(),
    )
}

#[tokio::test(start_paused = true)]
async fn test_chat_script() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine(&temp);

    let events = run_script(
        &mut engine,
        "# open chat and say hello\n\
         nav chat\n\
         send Hello\n\
         wait 3500\n",
    )
    .await;

    assert_eq!(
        event_names(&events),
        vec!["page_changed", "message_appended", "message_appended"]
    );
    assert_eq!(events[0]["to"], "chat");
    assert_eq!(events[1]["direction"], "sent");
    assert_eq!(events[1]["text"], "Hello");
    assert_eq!(events[2]["direction"], "received");
    assert_eq!(
        events[2]["text"],
        "Hello there! How can I assist with your farming today?"
    );
}

#[tokio::test(start_paused = true)]
async fn test_quick_reply_script() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine(&temp);

    let events = run_script(&mut engine, "nav chat\nreply 2\nwait 1100\nreply 9\n").await;

    let appended: Vec<(&str, &str)> = events
        .iter()
        .filter(|e| e["event"] == "message_appended")
        .map(|e| {
            (
                e["direction"].as_str().unwrap(),
                e["text"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        appended,
        vec![
            ("sent", "Fertilizer advice"),
            (
                "received",
                "Here's the information you requested about that topic..."
            ),
        ]
    );
    assert!(events
        .iter()
        .any(|e| e["event"] == "error" && e["message"] == "Quick reply not found: 9"));
}

#[tokio::test(start_paused = true)]
async fn test_detection_script() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine(&temp);

    let events = run_script(
        &mut engine,
        "nav detection\ncapture\nanalyze\nwait 2100\nreset\n",
    )
    .await;

    let states: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "detection_changed")
        .filter_map(|e| e["to"].as_str())
        .collect();
    assert_eq!(
        states,
        vec!["previewing", "analyzing", "result_ready", "idle"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_errors_reported_as_events() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine(&temp);

    let events = run_script(
        &mut engine,
        "nav settings\nsend   \ntopic composting\nplow the field\n",
    )
    .await;

    let errors: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "error")
        .filter_map(|e| e["message"].as_str())
        .collect();
    assert_eq!(
        errors,
        vec![
            "Unknown page: settings",
            "Message is empty",
            "Advisory topic not found: composting",
            "Unknown command: plow the field",
        ]
    );
    assert!(!event_names(&events).contains(&"page_changed"));
}

#[tokio::test(start_paused = true)]
async fn test_refresh_script_emits_weather_and_toast() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine(&temp);

    let events = run_script(&mut engine, "refresh\nrefresh\nwait 1200\n").await;

    let weather: Vec<&Value> = events
        .iter()
        .filter(|e| e["event"] == "weather_updated")
        .collect();
    assert!(weather.len() <= 1);
    if let Some(reading) = weather.first() {
        let temp = reading["temperature_c"].as_i64().unwrap();
        assert!((22..=28).contains(&temp));
    }
    assert!(events
        .iter()
        .any(|e| e["event"] == "toast" && e["message"] == "Weather data updated"));
}

#[tokio::test(start_paused = true)]
async fn test_quick_market_and_dark_mode() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine(&temp);

    let events = run_script(&mut engine, "quick market\ndark\n").await;

    assert!(events
        .iter()
        .any(|e| e["event"] == "message_appended"
            && e["text"].as_str().unwrap().starts_with("Here are today's market prices")));
    assert!(events
        .iter()
        .any(|e| e["event"] == "dark_mode_changed" && e["enabled"] == true));
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_event_last() {
    let temp = TempDir::new().unwrap();
    let mut engine = engine(&temp);
    let mut events = engine.subscribe();

    run_script(&mut engine, "quit\n").await;
    assert!(engine.should_quit());
    engine.shutdown().await;

    let mut last = None;
    while let Ok(event) = events.try_recv() {
        last = Some(HeadlessEvent::from(&event));
    }
    assert!(matches!(last, Some(HeadlessEvent::Shutdown { .. })));
}
