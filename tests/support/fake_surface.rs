//! Recording stand-in for a browser engine surface.
//!
//! Include with `#[path = "../support/fake_surface.rs"] mod fake_surface;`.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use office_shell::managers::shortcut_manager::ShortcutManager;
use office_shell::shell::{Shell, Surface, SurfaceFactory};
use office_shell::types::errors::SurfaceError;
use office_shell::types::settings::ShellSettings;
use office_shell::types::tab::TabId;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(String),
    Back,
    Forward,
    Reload,
    HardReload,
    Zoom(f64),
    Visible(bool),
    ClearData,
    Close,
}

pub type CallLog = Rc<RefCell<Vec<(TabId, Call)>>>;

pub struct FakeSurface {
    pub id: TabId,
    pub related: Option<TabId>,
    log: CallLog,
    fail_close: bool,
    fail_load: bool,
}

impl FakeSurface {
    fn record(&self, call: Call) -> Result<(), SurfaceError> {
        self.log.borrow_mut().push((self.id.clone(), call));
        Ok(())
    }
}

impl Surface for FakeSurface {
    fn load_uri(&self, uri: &str) -> Result<(), SurfaceError> {
        self.record(Call::Load(uri.to_string()))?;
        if self.fail_load {
            return Err(SurfaceError::Operation("network process crashed".into()));
        }
        Ok(())
    }
    fn go_back(&self) -> Result<(), SurfaceError> {
        self.record(Call::Back)
    }
    fn go_forward(&self) -> Result<(), SurfaceError> {
        self.record(Call::Forward)
    }
    fn reload(&self) -> Result<(), SurfaceError> {
        self.record(Call::Reload)
    }
    fn reload_bypass_cache(&self) -> Result<(), SurfaceError> {
        self.record(Call::HardReload)
    }
    fn set_zoom_level(&self, level: f64) -> Result<(), SurfaceError> {
        self.record(Call::Zoom(level))
    }
    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError> {
        self.record(Call::Visible(visible))
    }
    fn clear_browsing_data(&self) -> Result<(), SurfaceError> {
        self.record(Call::ClearData)
    }
    fn try_close(&self) -> Result<(), SurfaceError> {
        self.record(Call::Close)?;
        if self.fail_close {
            return Err(SurfaceError::Operation("view already destroyed".into()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeFactory {
    pub log: CallLog,
    /// `(new surface, surface it was anchored to)` in creation order.
    pub created: Vec<(TabId, Option<TabId>)>,
    pub fail_close: bool,
    pub fail_create: bool,
    pub fail_load: bool,
}

impl SurfaceFactory for FakeFactory {
    type Surface = FakeSurface;

    fn create(
        &mut self,
        id: &TabId,
        related: Option<&FakeSurface>,
    ) -> Result<FakeSurface, SurfaceError> {
        if self.fail_create {
            return Err(SurfaceError::Create("engine unavailable".into()));
        }
        let related = related.map(|s| s.id.clone());
        self.created.push((id.clone(), related.clone()));
        Ok(FakeSurface {
            id: id.clone(),
            related,
            log: self.log.clone(),
            fail_close: self.fail_close,
            fail_load: self.fail_load,
        })
    }
}

pub fn shell() -> Shell<FakeFactory> {
    shell_with(FakeFactory::default(), &ShellSettings::default())
}

pub fn shell_with(factory: FakeFactory, settings: &ShellSettings) -> Shell<FakeFactory> {
    Shell::new(factory, settings, ShortcutManager::new())
}

/// Calls made on one tab's surface, in order.
pub fn calls_for(shell: &Shell<FakeFactory>, id: &TabId) -> Vec<Call> {
    shell
        .factory()
        .log
        .borrow()
        .iter()
        .filter(|(tab, _)| tab == id)
        .map(|(_, call)| call.clone())
        .collect()
}

pub fn last_call(shell: &Shell<FakeFactory>, id: &TabId) -> Option<Call> {
    calls_for(shell, id).pop()
}
