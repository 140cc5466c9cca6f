//! Todo Panel Provider
//!
//! Owns the panel state and drives the view: attaches the host surface
//! when the panel is resolved, dispatches inbound messages, and pushes
//! re-rendered markup back for display.

use log::{debug, warn};

use crate::domain::TodoList;
use crate::host::{AssetLocator, HostError, PanelOptions, PanelView};
use crate::message::PanelMessage;
use crate::view::render_panel;

/// Provider for the todo panel view
///
/// Holds at most one view handle at a time: reassigned on each
/// (re)resolution, cleared on disposal. The entry list outlives the view
/// and survives panel reloads until the provider itself is dropped.
pub struct TodoProvider<L: AssetLocator, V: PanelView> {
    assets: L,
    list: TodoList,
    view: Option<V>,
}

impl<L: AssetLocator, V: PanelView> TodoProvider<L, V> {
    /// Create a provider with an empty list and no attached view
    pub fn new(assets: L) -> Self {
        Self {
            assets,
            list: TodoList::new(),
            view: None,
        }
    }

    /// Called by the host when the panel view is (re)created
    ///
    /// Configures the surface, pushes the initial render, and keeps the
    /// handle for later refreshes.
    pub fn resolve_view(&mut self, mut view: V) -> Result<(), HostError> {
        view.configure(PanelOptions { enable_scripts: true });

        let html = render_panel(self.list.entries(), &self.assets)?;
        view.display(&html);
        self.view = Some(view);
        debug!("panel view resolved with {} entries", self.list.len());
        Ok(())
    }

    /// Reattach a surviving view after the host reloaded the panel
    pub fn revive_view(&mut self, view: V) {
        debug!("panel view revived");
        self.view = Some(view);
    }

    /// Called by the host when the panel is disposed
    pub fn dispose_view(&mut self) {
        debug!("panel view disposed");
        self.view = None;
    }

    /// Dispatch one inbound message from the view
    ///
    /// `AddTodo` only mutates state; the webview script always follows it
    /// with an `Update` request, which is where the redisplay happens.
    /// Unrecognized messages are dropped without error.
    pub fn handle_message(&mut self, message: PanelMessage) -> Result<(), HostError> {
        match message {
            PanelMessage::AddTodo { text } => {
                debug!("appending todo entry ({} bytes)", text.len());
                self.list.add(text);
                Ok(())
            }
            PanelMessage::Update => self.update_view(),
            PanelMessage::Unknown => Ok(()),
        }
    }

    /// Parse and dispatch a raw message body from the host channel
    ///
    /// Malformed payloads are dropped, matching the channel's tolerance
    /// for unrecognized message types.
    pub fn handle_raw_message(&mut self, raw: &str) -> Result<(), HostError> {
        match PanelMessage::from_json(raw) {
            Ok(message) => self.handle_message(message),
            Err(err) => {
                warn!("dropping malformed panel message: {err}");
                Ok(())
            }
        }
    }

    /// Current entries in insertion order
    pub fn entries(&self) -> &[String] {
        self.list.entries()
    }

    /// Whether a view is currently attached
    pub fn has_view(&self) -> bool {
        self.view.is_some()
    }

    fn update_view(&mut self) -> Result<(), HostError> {
        if let Some(view) = self.view.as_mut() {
            let html = render_panel(self.list.entries(), &self.assets)?;
            view.display(&html);
        }
        Ok(())
    }
}
