//! Semantic style builders.

use agrihub_app::ToastKind;
use agrihub_core::CropStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.status_yellow)
}

/// Accent background used for the active nav item and selections
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn crop_status(p: &Palette, status: CropStatus) -> Style {
    let color = match status {
        CropStatus::Healthy => p.status_green,
        CropStatus::Warning => p.status_yellow,
        CropStatus::Danger => p.status_red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn toast(p: &Palette, kind: ToastKind) -> Style {
    let bg = match kind {
        ToastKind::Info => p.accent,
        ToastKind::Error => p.status_red,
    };
    Style::default().fg(p.contrast_fg).bg(bg)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}

pub fn titled_block(p: &Palette, title: &str, focused: bool) -> Block<'static> {
    glass_block(p, focused).title(format!(" {} ", title)).title_style(heading(p))
}
