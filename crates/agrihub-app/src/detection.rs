//! Disease detection flow: idle -> previewing -> analyzing -> result
//!
//! Each accepted `analyze()` issues a ticket. The completion message carries
//! the ticket back, and anything that does not match the current ticket is
//! dropped, so a reset while analyzing discards the in-flight result.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use agrihub_core::prelude::*;
use agrihub_core::{DetectionReport, DetectionState, ImageRef, DETECTION_REPORT};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionFlow {
    state: DetectionState,
    image: Option<ImageRef>,
    ticket: u64,
    /// Path being typed for an upload, if the prompt is open
    path_input: Option<String>,
}

impl DetectionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DetectionState {
        self.state
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Ticket of the most recent accepted analysis
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn can_select(&self) -> bool {
        matches!(
            self.state,
            DetectionState::Idle | DetectionState::Previewing
        )
    }

    pub fn can_analyze(&self) -> bool {
        self.state == DetectionState::Previewing
    }

    /// Show an image for preview. Ignored unless idle or already previewing.
    pub fn select_image(&mut self, image: ImageRef) -> bool {
        if !self.can_select() {
            debug!("Ignoring image selection while {:?}", self.state);
            return false;
        }
        self.image = Some(image);
        self.state = DetectionState::Previewing;
        true
    }

    /// Start analysis of the previewed image.
    ///
    /// Returns the ticket the completion must carry, or `None` when there is
    /// nothing to analyze or an analysis is already running.
    pub fn analyze(&mut self) -> Option<u64> {
        if !self.can_analyze() {
            debug!("Ignoring analyze while {:?}", self.state);
            return None;
        }
        self.ticket += 1;
        self.state = DetectionState::Analyzing;
        Some(self.ticket)
    }

    /// Finish the analysis identified by `ticket`. Stale tickets are ignored.
    pub fn complete(&mut self, ticket: u64) -> bool {
        if self.state != DetectionState::Analyzing || ticket != self.ticket {
            debug!(
                "Dropping stale analysis completion (ticket {}, current {}, {:?})",
                ticket, self.ticket, self.state
            );
            return false;
        }
        self.state = DetectionState::ResultReady;
        true
    }

    /// Back to idle from any state (retake, cancel, new scan)
    pub fn reset(&mut self) {
        if self.state == DetectionState::Analyzing {
            // Invalidate the in-flight completion
            self.ticket += 1;
        }
        self.state = DetectionState::Idle;
        self.image = None;
        self.path_input = None;
    }

    pub fn report(&self) -> Option<&'static DetectionReport> {
        (self.state == DetectionState::ResultReady).then_some(&DETECTION_REPORT)
    }

    // ─────────────────────────────────────────────────────────
    // Upload path prompt
    // ─────────────────────────────────────────────────────────

    pub fn path_input(&self) -> Option<&str> {
        self.path_input.as_deref()
    }

    pub fn is_entering_path(&self) -> bool {
        self.path_input.is_some()
    }

    pub fn begin_path_entry(&mut self) -> bool {
        if !self.can_select() {
            return false;
        }
        self.path_input = Some(String::new());
        true
    }

    pub fn path_push(&mut self, c: char) {
        if let Some(input) = self.path_input.as_mut() {
            input.push(c);
        }
    }

    pub fn path_backspace(&mut self) {
        if let Some(input) = self.path_input.as_mut() {
            input.pop();
        }
    }

    pub fn cancel_path_entry(&mut self) {
        self.path_input = None;
    }

    /// Close the prompt and return the typed path, `~/` expanded
    pub fn take_path(&mut self) -> Option<PathBuf> {
        let raw = self.path_input.take()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(expand_home(trimmed))
    }
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// MIME type from the file extension; unknown extensions are
/// `application/octet-stream`
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Encode file bytes as a `data:` URL image reference
pub fn data_url(path: &Path, bytes: &[u8]) -> ImageRef {
    ImageRef::DataUrl(format!(
        "data:{};base64,{}",
        mime_for_path(path),
        STANDARD.encode(bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ImageRef {
        ImageRef::Url("https://example.com/leaf.jpg".to_string())
    }

    #[test]
    fn test_analyze_before_selection_is_noop() {
        let mut flow = DetectionFlow::new();
        assert_eq!(flow.analyze(), None);
        assert_eq!(flow.state(), DetectionState::Idle);
    }

    #[test]
    fn test_full_flow() {
        let mut flow = DetectionFlow::new();
        assert!(flow.select_image(sample()));
        assert_eq!(flow.state(), DetectionState::Previewing);

        let ticket = flow.analyze().unwrap();
        assert_eq!(flow.state(), DetectionState::Analyzing);
        assert!(flow.report().is_none());

        assert!(flow.complete(ticket));
        assert_eq!(flow.state(), DetectionState::ResultReady);
        assert_eq!(flow.report().unwrap().diagnosis, "Early Blight");
        assert_eq!(flow.image(), Some(&sample()));

        flow.reset();
        assert_eq!(flow.state(), DetectionState::Idle);
        assert!(flow.image().is_none());
    }

    #[test]
    fn test_analyze_guarded_against_reentry() {
        let mut flow = DetectionFlow::new();
        flow.select_image(sample());
        assert!(flow.analyze().is_some());
        assert!(flow.analyze().is_none());
    }

    #[test]
    fn test_completion_fires_once() {
        let mut flow = DetectionFlow::new();
        flow.select_image(sample());
        let ticket = flow.analyze().unwrap();
        assert!(flow.complete(ticket));
        assert!(!flow.complete(ticket));
    }

    #[test]
    fn test_stale_ticket_after_reset_ignored() {
        let mut flow = DetectionFlow::new();
        flow.select_image(sample());
        let old = flow.analyze().unwrap();
        flow.reset();

        flow.select_image(sample());
        let new = flow.analyze().unwrap();
        assert_ne!(old, new);

        assert!(!flow.complete(old));
        assert_eq!(flow.state(), DetectionState::Analyzing);
        assert!(flow.complete(new));
    }

    #[test]
    fn test_selection_ignored_while_analyzing_or_done() {
        let mut flow = DetectionFlow::new();
        flow.select_image(sample());
        let ticket = flow.analyze().unwrap();
        assert!(!flow.select_image(ImageRef::Url("other".into())));
        flow.complete(ticket);
        assert!(!flow.select_image(ImageRef::Url("other".into())));
        assert_eq!(flow.image(), Some(&sample()));
    }

    #[test]
    fn test_reselect_while_previewing_replaces_image() {
        let mut flow = DetectionFlow::new();
        flow.select_image(sample());
        assert!(flow.select_image(ImageRef::Url("second".into())));
        assert_eq!(flow.image().unwrap().as_str(), "second");
    }

    #[test]
    fn test_path_entry() {
        let mut flow = DetectionFlow::new();
        assert!(flow.begin_path_entry());
        for c in "leaf.png".chars() {
            flow.path_push(c);
        }
        flow.path_backspace();
        flow.path_push('g');
        assert_eq!(flow.path_input(), Some("leaf.png"));
        assert_eq!(flow.take_path(), Some(PathBuf::from("leaf.png")));
        assert!(!flow.is_entering_path());
    }

    #[test]
    fn test_empty_path_entry_yields_nothing() {
        let mut flow = DetectionFlow::new();
        flow.begin_path_entry();
        flow.path_push(' ');
        assert_eq!(flow.take_path(), None);
        assert!(!flow.is_entering_path());
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("a.gif")), "image/gif");
        assert_eq!(mime_for_path(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_for_path(Path::new("a.bmp")), "image/bmp");
        assert_eq!(
            mime_for_path(Path::new("notes.txt")),
            "application/octet-stream"
        );
        assert_eq!(mime_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_data_url_encoding() {
        let image = data_url(Path::new("leaf.png"), b"hi");
        assert_eq!(image, ImageRef::DataUrl("data:image/png;base64,aGk=".to_string()));
    }
}
