use ratatui::{prelude::*, widgets::Gauge};

use crate::core::appearance::{Appearance, PanelGeometry, Theme};

/// Below this opacity the panel is drawn dimmed
const DIM_BELOW_OPACITY: f32 = 0.7;

/// Base text style for the current appearance
pub fn base_style(appearance: &Appearance) -> Style {
    let style = match appearance.theme {
        Theme::Dark => Style::default().fg(Color::White).bg(Color::Black),
        Theme::Light => Style::default().fg(Color::Black).bg(Color::White),
    };

    // Terminals have no alpha channel; low transparency is approximated
    if appearance.opacity() < DIM_BELOW_OPACITY {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

pub fn accent_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Cyan,
        Theme::Light => Color::Blue,
    }
}

/// Create a gauge with color based on value thresholds
pub fn colored_gauge<'a>(value: f32, label: String, appearance: &Appearance) -> Gauge<'a> {
    let color = match value {
        v if v < 50.0 => accent_color(appearance.theme),
        v if v < 75.0 => Color::LightYellow,
        v if v < 90.0 => Color::LightRed,
        _ => Color::Red,
    };
    let track = match appearance.theme {
        Theme::Dark => Color::Black,
        Theme::Light => Color::Gray,
    };

    Gauge::default()
        .gauge_style(Style::default().fg(color).bg(track))
        .ratio((value as f64 / 100.0).clamp(0.0, 1.0))
        .label(label)
}

/// Terminal cell size of the panel for a size preset
///
/// Presets are defined in pixels; one cell is taken as 8x16 px.
pub fn panel_cells(geometry: PanelGeometry) -> (u16, u16) {
    (geometry.width / 8, geometry.height / 16)
}

/// Rect of the given cell size centred in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
