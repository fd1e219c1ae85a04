//! Line commands accepted on stdin in headless mode

use std::path::PathBuf;
use std::time::Duration;

use agrihub_app::{Message, QuickAction};
use agrihub_core::prelude::*;

/// One parsed stdin line
#[derive(Debug)]
pub enum Command {
    /// Forward to the engine
    Send(Message),
    /// Pause the reader before the next line
    Wait(Duration),
}

/// Parse a stdin line; blank lines and `#` comments yield `None`
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let message = match (verb, arg) {
        ("nav", id) if !id.is_empty() => Message::NavigateTo(id.to_string()),
        // Empty text is passed through so the engine reports it
        ("send", text) => Message::SendChat(text.to_string()),
        ("upload", path) if !path.is_empty() => Message::SelectImageFile(PathBuf::from(path)),
        ("capture", "") => Message::CaptureImage,
        ("analyze", "") => Message::AnalyzeImage,
        ("reset", "") => Message::ResetDetection,
        ("refresh", "") => Message::RefreshWeather,
        ("tick", "") => Message::WeatherTick,
        ("topic", id) if !id.is_empty() => Message::OpenTopic(id.to_string()),
        ("ask", id) if !id.is_empty() => Message::AskTopic(id.to_string()),
        ("quick", action) if !action.is_empty() => Message::QuickAction(action.parse()?),
        // 1-based chip number; range is checked by the engine
        ("reply", n) => {
            let index = n
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| Error::unknown_command(line))?;
            Message::QuickReply(index)
        }
        ("dark", "") => Message::ToggleDarkMode,
        ("quit" | "q", "") => Message::Quit,
        ("wait", ms) => {
            let ms: u64 = ms.parse().map_err(|_| Error::unknown_command(line))?;
            return Ok(Some(Command::Wait(Duration::from_millis(ms))));
        }
        _ => return Err(Error::unknown_command(line)),
    };

    Ok(Some(Command::Send(message)))
}
