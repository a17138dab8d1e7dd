//! Header bar projection.
//!
//! The controller owns all state; the header page only renders a
//! `ChromeState` it receives as JSON.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::office_app::OfficeApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonState {
    /// The app shown in the foreground.
    Active,
    /// A tracked tab for the app is open in the background.
    Open,
    Inactive,
}

impl ButtonState {
    pub fn css_class(self) -> &'static str {
        match self {
            ButtonState::Active => "app-active",
            ButtonState::Open => "app-open",
            ButtonState::Inactive => "app-inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppButton {
    pub app: OfficeApp,
    pub label: &'static str,
    pub state: ButtonState,
    pub class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromeState {
    pub buttons: Vec<AppButton>,
    /// `Close <App>`, present only when the close button is shown.
    pub close_label: Option<String>,
    pub loading: bool,
    pub title: String,
    pub tab_count: usize,
}

/// Inputs to the header projection, gathered from the tab tables.
#[derive(Debug, Clone, Default)]
pub struct ChromeInputs<'a> {
    pub highlight: Option<OfficeApp>,
    pub open_apps: HashSet<OfficeApp>,
    pub selected_tracked: Option<OfficeApp>,
    pub selected_title: Option<&'a str>,
    pub loading: bool,
    pub tab_count: usize,
    pub window_title: &'a str,
}

impl ChromeState {
    pub fn compute(inputs: &ChromeInputs<'_>) -> Self {
        let buttons = OfficeApp::ALL
            .iter()
            .map(|&app| {
                let state = if inputs.highlight == Some(app) {
                    ButtonState::Active
                } else if inputs.open_apps.contains(&app) {
                    ButtonState::Open
                } else {
                    ButtonState::Inactive
                };
                AppButton {
                    app,
                    label: app.label(),
                    state,
                    class: state.css_class(),
                }
            })
            .collect();

        // Hidden on the last tab so the window cannot be closed from here.
        let close_label = match inputs.selected_tracked {
            Some(app) if inputs.tab_count > 1 => Some(format!("Close {}", app.label())),
            _ => None,
        };

        let title = match inputs.selected_title {
            Some(page) if !page.is_empty() => format!("{} - {}", page, inputs.window_title),
            _ => inputs.window_title.to_string(),
        };

        Self {
            buttons,
            close_label,
            loading: inputs.loading,
            title,
            tab_count: inputs.tab_count,
        }
    }

    pub fn button(&self, app: OfficeApp) -> Option<&AppButton> {
        self.buttons.iter().find(|b| b.app == app)
    }

    /// Script that hands this state to the header page's renderer.
    pub fn to_script(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        format!("window.__office_render && window.__office_render({})", json)
    }
}
