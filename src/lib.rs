//! Todo Side Panel
//!
//! Layered architecture:
//! - domain: append-only todo list state
//! - view: HTML document rendering
//! - message: inbound message shapes from the webview
//! - provider: panel lifecycle and message dispatch
//! - host: interfaces consumed from the embedding host

pub mod domain;
pub mod host;
pub mod message;
pub mod provider;
pub mod view;

use host::{AssetLocator, PanelView};

pub use message::PanelMessage;
pub use provider::TodoProvider;

/// View identifier the provider registers under
pub const VIEW_ID: &str = "todoView";

/// Host-side registry accepting panel view providers
pub trait PanelRegistry<L: AssetLocator, V: PanelView> {
    fn register_view_provider(&mut self, view_id: &'static str, provider: TodoProvider<L, V>);
}

/// Register a fresh todo provider with the host under [`VIEW_ID`]
pub fn activate<L, V, R>(registry: &mut R, assets: L)
where
    L: AssetLocator,
    V: PanelView,
    R: PanelRegistry<L, V>,
{
    registry.register_view_provider(VIEW_ID, TodoProvider::new(assets));
}
