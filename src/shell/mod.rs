//! Window controller.
//!
//! `Shell` owns the tab tables and decides what every header button, key
//! chord and engine signal does. It reaches the browser engine only through
//! [`SurfaceFactory`] and [`Surface`], so the UI layer is a thin adapter that
//! forwards events in and renders [`ChromeState`] out.

pub mod chrome;
pub mod ipc;
pub mod page;
pub mod surface;

use tracing::{debug, info, warn};

use crate::managers::shortcut_manager::{Action, KeyChord, ShortcutManager, ShortcutManagerTrait};
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::types::errors::{ShellError, TabError};
use crate::types::office_app::OfficeApp;
use crate::types::settings::{ShellSettings, ZoomSettings};
use crate::types::tab::{TabId, TabRecord};

pub use chrome::{AppButton, ButtonState, ChromeInputs, ChromeState};
pub use ipc::IpcCommand;
pub use surface::{Surface, SurfaceFactory};

/// Title given to tabs opened by pages (`target="_blank"`, `window.open`).
pub const NEW_TAB_TITLE: &str = "New Tab";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Remaining(usize),
    /// Nothing is left open; the application should exit.
    LastTabClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Continue,
    Quit,
}

impl From<CloseOutcome> for ActionOutcome {
    fn from(outcome: CloseOutcome) -> Self {
        match outcome {
            CloseOutcome::Remaining(_) => ActionOutcome::Continue,
            CloseOutcome::LastTabClosed => ActionOutcome::Quit,
        }
    }
}

pub struct Shell<F: SurfaceFactory> {
    factory: F,
    tabs: TabManager<F::Surface>,
    shortcuts: ShortcutManager,
    zoom: ZoomSettings,
    startup_app: OfficeApp,
    window_title: String,
    /// Anchor for new surfaces that are not opened from another page.
    root: Option<TabId>,
    highlight: Option<OfficeApp>,
}

impl<F: SurfaceFactory> Shell<F> {
    pub fn new(factory: F, settings: &ShellSettings, shortcuts: ShortcutManager) -> Self {
        Self {
            factory,
            tabs: TabManager::new(),
            shortcuts,
            zoom: settings.zoom.clone(),
            startup_app: settings.startup_app,
            window_title: settings.window.title.clone(),
            root: None,
            highlight: None,
        }
    }

    /// Opens the startup app as a tracked tab.
    pub fn start(&mut self) -> Result<TabId, ShellError> {
        let app = self.startup_app;
        info!(app = %app, "opening startup app");
        self.open_tab(app.launch_url(), app.label(), Some(app), None, true)
    }

    /// Brings the app's tab to the front, opening one if it has none.
    pub fn switch_or_open(&mut self, app: OfficeApp) -> Result<TabId, ShellError> {
        if let Some(id) = self.tabs.named(app).cloned() {
            match self.select(&id) {
                Ok(()) => return Ok(id),
                Err(err) => {
                    warn!(app = %app, tab = %id, error = %err, "stale tab registration, reopening");
                    self.tabs.forget_named(app);
                }
            }
        }
        self.open_tab(app.launch_url(), app.label(), Some(app), None, true)
    }

    /// Creates a tab, loads `url` in it and selects it.
    ///
    /// The surface is anchored to `related` when that tab is still open,
    /// otherwise to the root surface. The first surface ever created becomes
    /// the root. With `track`, the tab is registered under `tracked`.
    pub fn open_tab(
        &mut self,
        url: &str,
        title: &str,
        tracked: Option<OfficeApp>,
        related: Option<&TabId>,
        track: bool,
    ) -> Result<TabId, ShellError> {
        let id = TabId::new();
        let surface = {
            let anchor = related
                .and_then(|r| self.tabs.get(r))
                .or_else(|| self.root.as_ref().and_then(|r| self.tabs.get(r)))
                .map(|record| &record.surface);
            self.factory.create(&id, anchor)?
        };

        // Nothing is recorded until the surface has taken its first load.
        let zoom = self.zoom.clamp(self.zoom.default_level);
        if let Err(err) = surface
            .set_zoom_level(zoom)
            .and_then(|()| surface.load_uri(url))
        {
            warn!(tab = %id, url, error = %err, "failed to load new tab, discarding it");
            if let Err(close_err) = surface.try_close() {
                debug!(tab = %id, error = %close_err, "ignoring surface close failure");
            }
            return Err(err.into());
        }

        let mut record = TabRecord::new(id.clone(), surface, title, tracked);
        record.zoom_level = zoom;
        self.tabs.append(record)?;

        if self.root.is_none() {
            self.root = Some(id.clone());
        }
        if let (true, Some(app)) = (track, tracked) {
            self.tabs.register_named(app, &id)?;
        }
        self.select(&id)?;

        debug!(tab = %id, url, title, tracked = ?tracked, "opened tab");
        Ok(id)
    }

    /// Opens a page-requested window as an untracked tab next to its opener.
    pub fn open_related(&mut self, parent: &TabId, url: &str) -> Result<TabId, ShellError> {
        self.open_tab(url, NEW_TAB_TITLE, None, Some(parent), false)
    }

    /// Engine new-window request. Only http(s) targets become tabs; scripted
    /// `about:blank` popups cannot be handed back to their opener and are
    /// dropped with a log line.
    pub fn on_new_window(&mut self, parent: &TabId, url: &str) -> Result<Option<TabId>, ShellError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return self.open_related(parent, url).map(Some);
        }
        info!(tab = %parent, url, "dropping new-window request for a non-web URL");
        Ok(None)
    }

    pub fn select(&mut self, tab_id: &TabId) -> Result<(), ShellError> {
        self.tabs.select(tab_id)?;
        self.on_selected_page_changed();
        Ok(())
    }

    /// Shows the selected surface, hides the others and resynchronises the
    /// header highlight with the selected tab.
    pub fn on_selected_page_changed(&mut self) {
        let selected = self.tabs.selected_id().cloned();
        for record in self.tabs.tabs() {
            let visible = selected.as_ref() == Some(&record.id);
            if let Err(err) = record.surface.set_visible(visible) {
                warn!(tab = %record.id, error = %err, "failed to change surface visibility");
            }
        }
        self.highlight = self.tabs.selected().and_then(|record| record.tracked);
    }

    /// Removes a tab and releases its surface.
    pub fn close_page(&mut self, tab_id: &TabId) -> Result<CloseOutcome, ShellError> {
        let record = self.tabs.close(tab_id)?;

        if self.root.as_ref() == Some(tab_id) {
            self.root = self.tabs.tab_order().first().cloned();
            debug!(old = %tab_id, new = ?self.root, "re-anchored root surface");
        }

        if let Err(err) = record.surface.try_close() {
            debug!(tab = %tab_id, error = %err, "ignoring surface close failure");
        }
        drop(record);

        if self.tabs.is_empty() {
            info!("last tab closed");
            self.highlight = None;
            return Ok(CloseOutcome::LastTabClosed);
        }
        self.on_selected_page_changed();
        Ok(CloseOutcome::Remaining(self.tabs.tab_count()))
    }

    pub fn close_selected(&mut self) -> Result<CloseOutcome, ShellError> {
        let id = self
            .tabs
            .selected_id()
            .cloned()
            .ok_or(ShellError::NoSelection)?;
        self.close_page(&id)
    }

    /// Empty titles are ignored; the tab keeps its previous label.
    pub fn on_title_changed(&mut self, tab_id: &TabId, title: &str) {
        if title.is_empty() {
            return;
        }
        if let Some(record) = self.tabs.get_mut(tab_id) {
            record.title = title.to_string();
        }
    }

    pub fn on_uri_changed(&mut self, tab_id: &TabId, uri: &str) {
        if let Some(record) = self.tabs.get_mut(tab_id) {
            record.uri = uri.to_string();
        }
        if self.is_selected(tab_id) && !uri.is_empty() {
            self.highlight = OfficeApp::match_url(uri);
        }
    }

    /// Records the flag on every tab; only the selected one shows a spinner.
    pub fn on_loading_changed(&mut self, tab_id: &TabId, loading: bool) {
        if let Some(record) = self.tabs.get_mut(tab_id) {
            record.loading = loading;
        }
    }

    pub fn navigate(&self, navigation: Navigation) -> Result<(), ShellError> {
        let surface = self.current()?;
        match navigation {
            Navigation::Back => surface.go_back()?,
            Navigation::Forward => surface.go_forward()?,
            Navigation::Reload => surface.reload()?,
        }
        Ok(())
    }

    pub fn handle_action(&mut self, action: Action) -> Result<ActionOutcome, ShellError> {
        debug!(action = action.name(), "handling action");
        match action {
            Action::ZoomIn => self.apply_zoom(|zoom, level| zoom.zoom_in(level))?,
            Action::ZoomOut => self.apply_zoom(|zoom, level| zoom.zoom_out(level))?,
            Action::ZoomReset => self.apply_zoom(|zoom, _| zoom.clamp(zoom.default_level))?,
            Action::NewTab => {
                let home = OfficeApp::Office;
                self.open_tab(home.launch_url(), home.label(), None, None, false)?;
            }
            Action::CloseTab => return Ok(self.close_selected()?.into()),
            Action::Reload => self.navigate(Navigation::Reload)?,
            Action::HardReload => self.current()?.reload_bypass_cache()?,
            Action::Back => self.navigate(Navigation::Back)?,
            Action::Forward => self.navigate(Navigation::Forward)?,
            Action::ClearBrowsingData => {
                self.current()?.clear_browsing_data()?;
                info!("cleared browsing data");
            }
        }
        Ok(ActionOutcome::Continue)
    }

    /// Runs the action bound to `chord`, if any.
    pub fn handle_key(&mut self, chord: &KeyChord) -> Result<Option<ActionOutcome>, ShellError> {
        match self.shortcuts.resolve(chord) {
            Some(action) => self.handle_action(action).map(Some),
            None => Ok(None),
        }
    }

    /// Handles a message posted by page content rather than the header.
    /// Only key chords from trusted Office pages are honoured; anything else
    /// is dropped.
    pub fn dispatch_from_page(
        &mut self,
        tab_id: &TabId,
        page_url: &str,
        command: IpcCommand,
    ) -> Result<ActionOutcome, ShellError> {
        if !ipc::is_trusted_origin(page_url) {
            warn!(tab = %tab_id, page = page_url, "dropping message from untrusted page");
            return Ok(ActionOutcome::Continue);
        }
        if !command.is_content_safe() {
            warn!(tab = %tab_id, command = ?command, "page content sent a header command");
            return Ok(ActionOutcome::Continue);
        }
        self.dispatch(command)
    }

    pub fn dispatch(&mut self, command: IpcCommand) -> Result<ActionOutcome, ShellError> {
        match command {
            IpcCommand::Ready => {}
            IpcCommand::Back => self.navigate(Navigation::Back)?,
            IpcCommand::Forward => self.navigate(Navigation::Forward)?,
            IpcCommand::Reload => self.navigate(Navigation::Reload)?,
            IpcCommand::Switch { app } => {
                self.switch_or_open(app)?;
            }
            IpcCommand::CloseCurrent => return Ok(self.close_selected()?.into()),
            IpcCommand::Key {
                key,
                ctrl,
                shift,
                alt,
            } => {
                let chord = KeyChord::from_key_event(&key, ctrl, shift, alt);
                if let Some(outcome) = self.handle_key(&chord)? {
                    return Ok(outcome);
                }
            }
        }
        Ok(ActionOutcome::Continue)
    }

    pub fn chrome_state(&self) -> ChromeState {
        let selected = self.tabs.selected();
        ChromeState::compute(&ChromeInputs {
            highlight: self.highlight,
            open_apps: self.tabs.open_apps(),
            selected_tracked: selected.and_then(|record| record.tracked),
            selected_title: selected.map(|record| record.title.as_str()),
            loading: selected.map(|record| record.loading).unwrap_or(false),
            tab_count: self.tabs.tab_count(),
            window_title: &self.window_title,
        })
    }

    pub fn tabs(&self) -> &TabManager<F::Surface> {
        &self.tabs
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn shortcuts(&self) -> &ShortcutManager {
        &self.shortcuts
    }

    pub fn root(&self) -> Option<&TabId> {
        self.root.as_ref()
    }

    pub fn highlight(&self) -> Option<OfficeApp> {
        self.highlight
    }

    /// Surfaces in tab order, for layout passes.
    pub fn surfaces(&self) -> impl Iterator<Item = &F::Surface> + '_ {
        self.tabs.tabs().into_iter().map(|record| &record.surface)
    }

    fn is_selected(&self, tab_id: &TabId) -> bool {
        self.tabs.selected_id() == Some(tab_id)
    }

    fn current(&self) -> Result<&F::Surface, ShellError> {
        self.tabs
            .selected()
            .map(|record| &record.surface)
            .ok_or(ShellError::NoSelection)
    }

    fn apply_zoom(&mut self, step: impl Fn(&ZoomSettings, f64) -> f64) -> Result<(), ShellError> {
        let id = self
            .tabs
            .selected_id()
            .cloned()
            .ok_or(ShellError::NoSelection)?;
        let record = self
            .tabs
            .get_mut(&id)
            .ok_or_else(|| TabError::NotFound(id.clone()))?;
        let level = step(&self.zoom, record.zoom_level);
        record.surface.set_zoom_level(level)?;
        record.zoom_level = level;
        debug!(tab = %id, level, "zoom changed");
        Ok(())
    }
}
