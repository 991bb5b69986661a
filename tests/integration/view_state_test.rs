use overlay_monitor::core::view_state::{SettingsField, ViewPane, ViewState};

#[test]
fn test_requesting_active_pane_returns_home() {
    let mut view = ViewState::new();

    assert_eq!(view.request_pane(ViewPane::Info), ViewPane::Info);
    assert!(view.home_visible());
    assert_eq!(view.request_pane(ViewPane::Info), ViewPane::Live);
    assert!(!view.home_visible());
}

#[test]
fn test_switching_between_panes() {
    let mut view = ViewState::new();

    view.request_pane(ViewPane::Info);
    assert_eq!(view.request_pane(ViewPane::About), ViewPane::About);
    assert!(view.is_active(ViewPane::About));
    assert_eq!(view.go_home(), ViewPane::Live);
}

#[test]
fn test_settings_toggle_and_persistence() {
    let mut view = ViewState::new();
    assert!(view.settings().is_none());

    view.request_pane(ViewPane::Settings);
    view.settings_mut().unwrap().focus = SettingsField::Theme;
    assert_eq!(view.request_pane(ViewPane::Settings), ViewPane::Live);

    // Reopening keeps the panel created the first time
    view.request_pane(ViewPane::Settings);
    assert_eq!(view.settings().unwrap().focus, SettingsField::Theme);
}

#[test]
fn test_live_request_is_go_home() {
    let mut view = ViewState::new();
    assert_eq!(view.request_pane(ViewPane::Live), ViewPane::Live);

    view.request_pane(ViewPane::About);
    assert_eq!(view.request_pane(ViewPane::Live), ViewPane::Live);
}
