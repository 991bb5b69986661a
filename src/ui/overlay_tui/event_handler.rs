use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::appearance::Appearance;
use crate::core::command::Command;
use crate::core::overlay::TRANSPARENCY_STEP;
use crate::core::view_state::ViewPane;

/// Translate a key press into a controller command
///
/// Arrow keys act on the settings form while it is open; elsewhere they are
/// ignored. Theme and size shortcuts resolve against the current appearance.
pub fn key_to_command(key: KeyEvent, pane: ViewPane, appearance: &Appearance) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Esc | KeyCode::Char('h') => Command::GoHome,
        KeyCode::Char('i') => Command::RequestPane(ViewPane::Info),
        KeyCode::Char('a') => Command::RequestPane(ViewPane::About),
        KeyCode::Char('s') => Command::RequestPane(ViewPane::Settings),
        KeyCode::Char('t') => Command::SetTheme(appearance.theme.toggled()),
        KeyCode::Char('z') => Command::SetSize(appearance.size.next()),
        KeyCode::Char('+') | KeyCode::Char('=') => Command::AdjustTransparency(TRANSPARENCY_STEP),
        KeyCode::Char('-') => Command::AdjustTransparency(-TRANSPARENCY_STEP),
        KeyCode::Up | KeyCode::Char('k') if pane == ViewPane::Settings => {
            Command::FocusPreviousSetting
        }
        KeyCode::Down | KeyCode::Char('j') if pane == ViewPane::Settings => {
            Command::FocusNextSetting
        }
        KeyCode::Left if pane == ViewPane::Settings => Command::AdjustSetting(-1),
        KeyCode::Right | KeyCode::Enter if pane == ViewPane::Settings => {
            Command::AdjustSetting(1)
        }
        _ => return None,
    };

    Some(command)
}
