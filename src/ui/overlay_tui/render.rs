use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::presenter::TuiPresenter;
use super::widgets::{accent_color, base_style, centered_rect, colored_gauge, panel_cells};
use crate::core::system_description::ABOUT_TEXT;
use crate::core::telemetry::{BatteryReading, MetricSample};
use crate::core::view_state::{SettingsField, ViewPane};
use crate::ui::formatters::{
    format_battery, format_network_label, format_percent, format_speed,
};

/// Main render function
pub fn render_ui(frame: &mut Frame, presenter: &TuiPresenter) {
    let appearance = &presenter.appearance;
    let (width, height) = panel_cells(appearance.size.geometry());
    let area = centered_rect(width, height, frame.area());
    let style = base_style(appearance);

    let block = Block::default()
        .title(" Overlay Monitor ")
        .title(Line::from(format!(" {} ", presenter.clock)).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent_color(appearance.theme)))
        .style(style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Pane tabs
            Constraint::Min(1),    // Pane content
            Constraint::Length(1), // Key hints
        ])
        .split(inner);

    render_tabs(frame, chunks[0], presenter);

    match presenter.pane {
        ViewPane::Live => render_live(frame, chunks[1], presenter),
        ViewPane::Info => render_text(frame, chunks[1], presenter, presenter.info_lines.clone()),
        ViewPane::About => render_text(
            frame,
            chunks[1],
            presenter,
            vec![ABOUT_TEXT.to_string()],
        ),
        ViewPane::Settings => render_settings(frame, chunks[1], presenter),
    }

    let hints = Paragraph::new(" i/a/s: panes │ h: home │ t: theme │ z: size │ +/-: opacity │ q: quit")
        .style(style.fg(Color::DarkGray));
    frame.render_widget(hints, chunks[2]);
}

fn render_tabs(frame: &mut Frame, area: Rect, presenter: &TuiPresenter) {
    let accent = accent_color(presenter.appearance.theme);
    let mut spans: Vec<Span> = Vec::new();

    for pane in ViewPane::ALL {
        let title = format!(" {} ", pane.title());
        if pane == presenter.pane {
            spans.push(Span::styled(
                title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ));
        } else {
            spans.push(Span::raw(title));
        }
    }

    // Home button only while the live bars are hidden
    if presenter.pane != ViewPane::Live {
        spans.push(Span::styled(" ⌂ ", Style::default().fg(accent)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_live(frame: &mut Frame, area: Rect, presenter: &TuiPresenter) {
    let Some(sample) = presenter.sample.as_ref() else {
        frame.render_widget(Paragraph::new("Collecting metrics..."), area);
        return;
    };

    let rows = live_rows(sample);
    let constraints: Vec<Constraint> = rows.iter().map(|_| Constraint::Length(1)).collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, chunk) in rows.into_iter().zip(chunks.iter()) {
        match row {
            LiveRow::Bar { label, value } => {
                let text = format!("{} {}", label, format_percent(value));
                frame.render_widget(colored_gauge(value, text, &presenter.appearance), *chunk);
            }
            LiveRow::Text(text) => frame.render_widget(Paragraph::new(text), *chunk),
        }
    }
}

enum LiveRow {
    Bar { label: String, value: f32 },
    Text(String),
}

/// Rows of the live pane, top to bottom
fn live_rows(sample: &MetricSample) -> Vec<LiveRow> {
    let mut rows = vec![
        LiveRow::Bar {
            label: "CPU".to_string(),
            value: sample.cpu_percent,
        },
        LiveRow::Bar {
            label: "RAM".to_string(),
            value: sample.ram_percent,
        },
        LiveRow::Bar {
            label: "DISK".to_string(),
            value: sample.disk_percent,
        },
    ];

    rows.push(match sample.battery {
        BatteryReading::Present { percent, .. } => LiveRow::Bar {
            label: format_battery(&sample.battery),
            value: percent as f32,
        },
        _ => LiveRow::Text(format_battery(&sample.battery)),
    });

    for gpu in &sample.gpus {
        rows.push(LiveRow::Bar {
            label: gpu.label(),
            value: gpu.utilization_percent,
        });
    }

    rows.push(LiveRow::Bar {
        label: format!(
            "{} {}",
            format_network_label(sample),
            format_speed(sample.network_bytes_per_sec)
        ),
        value: sample.network_percent,
    });

    rows
}

fn render_text(frame: &mut Frame, area: Rect, presenter: &TuiPresenter, lines: Vec<String>) {
    let lines: Vec<Line> = lines.into_iter().map(Line::from).collect();
    let paragraph = Paragraph::new(lines)
        .style(base_style(&presenter.appearance))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_settings(frame: &mut Frame, area: Rect, presenter: &TuiPresenter) {
    let appearance = &presenter.appearance;
    let focus = presenter.settings.as_ref().map(|panel| panel.focus);
    let accent = accent_color(appearance.theme);

    let fields = [
        (
            SettingsField::Transparency,
            format!("Transparency  {}%", appearance.transparency()),
        ),
        (SettingsField::Size, format!("Size          {}", appearance.size)),
        (SettingsField::Theme, format!("Theme         {}", appearance.theme)),
    ];

    let mut lines: Vec<Line> = fields
        .into_iter()
        .map(|(field, text)| {
            if Some(field) == focus {
                Line::from(Span::styled(
                    format!("▶ {}", text),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", text))
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from("  ↑/↓ select  ←/→ change"));

    frame.render_widget(Paragraph::new(lines), area);
}
