//! Seam between the controller and the browser engine.

use crate::types::errors::SurfaceError;
use crate::types::tab::TabId;

/// One embedded page view.
pub trait Surface {
    fn load_uri(&self, uri: &str) -> Result<(), SurfaceError>;
    fn go_back(&self) -> Result<(), SurfaceError>;
    fn go_forward(&self) -> Result<(), SurfaceError>;
    fn reload(&self) -> Result<(), SurfaceError>;
    fn reload_bypass_cache(&self) -> Result<(), SurfaceError>;
    fn set_zoom_level(&self, level: f64) -> Result<(), SurfaceError>;
    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError>;
    /// Clears cookies, storage and caches of the session shared by all surfaces.
    fn clear_browsing_data(&self) -> Result<(), SurfaceError>;
    /// Releases the view. The surface must not be used afterwards.
    fn try_close(&self) -> Result<(), SurfaceError>;
}

/// Creates surfaces on the shared browsing session.
pub trait SurfaceFactory {
    type Surface: Surface;

    /// `related` is the surface the new one is opened from; backends that
    /// support it share its web process.
    fn create(
        &mut self,
        id: &TabId,
        related: Option<&Self::Surface>,
    ) -> Result<Self::Surface, SurfaceError>;
}
