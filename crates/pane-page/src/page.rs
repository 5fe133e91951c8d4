//! Page - document plus runtime state

use crate::{BehaviorConfig, EventListeners, EventType, PageError, TimerId, TimerManager};
use pane_dom::{Document, DomResult, NodeId};
use pane_widgets::{
    ClipboardBackend, DialogHost, HeadlessDialogs, MemoryClipboard, Toast, Tooltip,
};
use std::time::Duration;

/// Deferred work scheduled on the page clock
pub type TimerTask = Box<dyn FnOnce(&mut Page)>;

/// A loaded page: the document plus the runtime the behaviors hang off
pub struct Page {
    document: Document,
    config: BehaviorConfig,
    pub(crate) listeners: EventListeners,
    pub(crate) timers: TimerManager<TimerTask>,
    pub(crate) tooltips: Vec<Tooltip>,
    pub(crate) toasts: Vec<Toast>,
    pub(crate) alert_timer: Option<TimerId>,
    pub(crate) initialized: bool,
    dialogs: Box<dyn DialogHost>,
    clipboard: Box<dyn ClipboardBackend>,
}

impl Page {
    /// Wrap a document with default config, a headless dialog host that
    /// declines every prompt, and an in-process clipboard
    pub fn new(document: Document) -> Self {
        Self::with_config(document, BehaviorConfig::default())
    }

    /// Wrap a document with explicit behavior configuration
    pub fn with_config(document: Document, config: BehaviorConfig) -> Self {
        Self {
            document,
            config,
            listeners: EventListeners::new(),
            timers: TimerManager::new(),
            tooltips: Vec::new(),
            toasts: Vec::new(),
            alert_timer: None,
            initialized: false,
            dialogs: Box::new(HeadlessDialogs::declining()),
            clipboard: Box::new(MemoryClipboard::new()),
        }
    }

    /// Parse an HTML string and wrap the result
    pub fn from_html(html: &str) -> Self {
        Self::new(pane_html::parse(html))
    }

    /// Replace the clipboard backend
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardBackend>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Replace the dialog host
    pub fn with_dialog_host(mut self, dialogs: Box<dyn DialogHost>) -> Self {
        self.dialogs = dialogs;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    /// Tooltips activated by initialization
    pub fn tooltips(&self) -> &[Tooltip] {
        &self.tooltips
    }

    /// Toasts shown so far
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// The clipboard backend (tests read back through this)
    pub fn clipboard_mut(&mut self) -> &mut dyn ClipboardBackend {
        &mut *self.clipboard
    }

    /// Listeners registered for an event on a node
    pub fn listener_count(&self, node: NodeId, event: EventType) -> usize {
        self.listeners.count(node, event)
    }

    /// Check if any timer is still pending
    pub fn has_pending_timers(&self) -> bool {
        self.timers.has_pending()
    }

    /// Time until the next timer fires
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    /// Advance the page clock, running every timer that comes due
    pub fn advance(&mut self, dt: Duration) {
        let due = self.timers.advance(dt);
        for task in due {
            task(self);
        }
    }

    /// Register a listener for an event on a node
    pub fn add_listener(
        &mut self,
        node: NodeId,
        event: EventType,
        listener: impl FnMut(&mut Page, NodeId) + 'static,
    ) {
        self.listeners.add(node, event, Box::new(listener));
    }

    /// Dispatch an event to every listener registered for it
    pub fn dispatch(&mut self, node: NodeId, event: EventType) {
        let mut list = self.listeners.take(node, event);
        for listener in list.iter_mut() {
            listener(self, node);
        }
        self.listeners.put_back(node, event, list);
    }

    /// Set an input control's value and dispatch `Input`, the stand-in
    /// for a user edit
    pub fn set_input_value(&mut self, node: NodeId, value: &str) -> DomResult<()> {
        self.document.tree_mut().set_attribute(node, "value", value)?;
        self.dispatch(node, EventType::Input);
        Ok(())
    }

    /// Cancel the pending alert auto-dismiss, if any. Teardown hook; the
    /// behaviors themselves never call this.
    pub fn cancel_alert_auto_dismiss(&mut self) -> bool {
        match self.alert_timer.take() {
            Some(id) => self.timers.cancel(id),
            None => false,
        }
    }

    /// Copy text to the clipboard and show the feedback toast.
    ///
    /// The toast is shown whether or not the write succeeded (it is the
    /// "copied!" affordance, not a status report); the returned bool
    /// carries the backend's real outcome. A missing toast element is a
    /// silent no-op.
    pub fn copy_to_clipboard(&mut self, text: &str) -> bool {
        let copied = self.clipboard.write_text(text);
        if !copied {
            tracing::warn!("clipboard write failed");
        }

        if let Some(node) = self.document.element_by_id(&self.config.toast_id) {
            if let Ok(mut toast) = Toast::new(self.document.tree(), node) {
                toast.show(self.document.tree_mut());
                self.toasts.push(toast);
            }
        }
        copied
    }

    /// Show a confirm prompt; run `callback` only on an affirmative
    /// answer. Returns whether the callback ran.
    pub fn confirm_action(&mut self, message: &str, callback: impl FnOnce(&mut Page)) -> bool {
        if self.dialogs.confirm(message) {
            callback(self);
            true
        } else {
            false
        }
    }

    /// Re-render the welcome message preview from the three welcome form
    /// inputs. A missing preview element is a silent no-op; a missing
    /// input is an error.
    pub fn update_welcome_preview(&mut self) -> Result<(), PageError> {
        let text = self.required_value(&self.config.welcome_text_id)?;
        let color = self.required_value(&self.config.text_color_id)?;
        let size = self.required_value(&self.config.font_size_id)?;

        let Some(preview) = self.document.element_by_id(&self.config.welcome_preview_id) else {
            return Ok(());
        };

        let tree = self.document.tree_mut();
        tree.set_text_content(preview, &text)?;
        tree.set_style_property(preview, "color", &color)?;
        tree.set_style_property(preview, "font-size", &format!("{size}px"))?;
        tracing::debug!("welcome preview updated");
        Ok(())
    }

    fn required_value(&self, id: &str) -> Result<String, PageError> {
        let node = self
            .document
            .element_by_id(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))?;
        Ok(self
            .document
            .tree()
            .attribute(node, "value")
            .unwrap_or_default()
            .to_string())
    }
}
