use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::overlay::OverlayController;
use crate::core::scheduler::TickScheduler;
use crate::core::system_description::SystemDescription;

use super::event_handler::key_to_command;
use super::presenter::TuiPresenter;
use super::render::render_ui;

/// Intervals for the terminal panel
#[derive(Debug, Clone, Copy)]
pub struct OverlayAppConfig {
    pub clock_interval: Duration,
    pub sample_interval: Duration,
}

/// Run the overlay panel until the user quits
pub fn run_overlay_app(
    mut controller: OverlayController<TuiPresenter>,
    description: &SystemDescription,
    config: OverlayAppConfig,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = event_loop(&mut terminal, &mut controller, description, config);

    // Restore terminal even when the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut OverlayController<TuiPresenter>,
    description: &SystemDescription,
    config: OverlayAppConfig,
) -> Result<()> {
    controller.start(description);

    // Wait for CPU measurement interval so the first bar is meaningful
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);

    // Both ticks are due on the first pass
    let mut scheduler =
        TickScheduler::new(config.clock_interval, config.sample_interval, Instant::now());

    loop {
        if controller.presenter_mut().take_dirty() {
            terminal.draw(|frame| render_ui(frame, controller.presenter()))?;
        }

        let timeout = scheduler.time_until_next(Instant::now());
        if event::poll(timeout).context("Event poll failed")? {
            match event::read().context("Event read failed")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let presenter = controller.presenter();
                    if let Some(command) =
                        key_to_command(key, presenter.pane, &presenter.appearance)
                    {
                        controller.queue(command);
                    }
                }
                Event::Resize(_, _) => controller.presenter_mut().dirty = true,
                _ => {}
            }
        }

        controller.process_commands();
        if controller.should_quit() {
            break;
        }

        let now = Instant::now();
        let due = scheduler.poll(now);
        if due.any() {
            controller.on_ticks(due, now);
        }
    }

    Ok(())
}
