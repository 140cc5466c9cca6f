//! Host Boundary
//!
//! Interfaces the panel consumes from its embedding host: the view surface
//! that displays rendered markup and the locator that maps logical style
//! assets to loadable locations. The host owns panel creation, disposal,
//! and visibility; this crate only reacts to those lifecycle events.

use thiserror::Error;

/// Logical style assets referenced by the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAsset {
    /// CSS reset applied before everything else
    Reset,
    /// Base theme matching the host chrome
    BaseTheme,
}

impl StyleAsset {
    /// Conventional file name, a hint for locators that serve from a
    /// media directory
    pub fn file_name(&self) -> &'static str {
        match self {
            StyleAsset::Reset => "reset.css",
            StyleAsset::BaseTheme => "theme.css",
        }
    }
}

/// Errors surfaced by host collaborators
///
/// A failing asset lookup means the host installation is broken; the panel
/// cannot render without its stylesheets.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("cannot locate style asset '{}'", .0.file_name())]
    AssetNotFound(StyleAsset),
}

/// Maps logical asset names to locations the panel view can load
pub trait AssetLocator {
    fn locate(&self, asset: StyleAsset) -> Result<String, HostError>;
}

/// Options applied to the view surface when the panel is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelOptions {
    /// Whether the view may run the embedded interaction script
    pub enable_scripts: bool,
}

/// Host-managed surface that can display rendered markup
pub trait PanelView {
    /// Apply options before any markup is shown
    fn configure(&mut self, options: PanelOptions);

    /// Replace the displayed document
    fn display(&mut self, html: &str);
}
