//! Transient notices. One toast is visible at a time.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, Default)]
pub struct Toasts {
    current: Option<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Replace any visible toast; returns the new toast's id
    pub fn show(&mut self, text: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        self.current = Some(Toast {
            id: self.next_id,
            text: text.into(),
            kind,
        });
        self.next_id
    }

    /// Dismiss the toast with `id` if it is still the visible one
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
