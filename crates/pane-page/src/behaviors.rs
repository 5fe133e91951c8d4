//! Dashboard behaviors
//!
//! The four page-load behaviors: tooltip activation, alert auto-dismiss,
//! color preview sync, and the `Ready` notification. All are wired by
//! [`Page::initialize_dashboard_behaviors`], the single entry point the
//! hosting application calls once after loading the document.

use crate::{EventType, Page};
use pane_dom::NodeId;
use pane_widgets::{Alert, Tooltip};

const TOOLTIP_TRIGGERS: &str = r#"[data-bs-toggle="tooltip"]"#;
const COLOR_INPUTS: &str = r#"input[type="color"]"#;
const STALE_ALERTS: &str = ".alert:not(.alert-important)";

impl Page {
    /// Wire up every dashboard behavior. Call once after the document is
    /// loaded; a second call is ignored.
    pub fn initialize_dashboard_behaviors(&mut self) {
        if self.initialized {
            tracing::warn!("dashboard behaviors already initialized");
            return;
        }
        self.initialized = true;

        self.activate_tooltips();
        self.schedule_alert_auto_dismiss();
        self.init_color_previews();

        let root = self.document().tree().root();
        self.dispatch(root, EventType::Ready);
    }

    /// Construct a tooltip for every trigger element and retain it
    fn activate_tooltips(&mut self) {
        let triggers = self.document().tree().query_selector_all(TOOLTIP_TRIGGERS);
        for node in triggers {
            if let Ok(tooltip) = Tooltip::new(self.document().tree(), node) {
                self.tooltips.push(tooltip);
            }
        }
        tracing::info!("activated {} tooltips", self.tooltips.len());
    }

    /// Arm the one-shot dismiss timer. The handle is retained for
    /// teardown but the behavior never cancels it.
    fn schedule_alert_auto_dismiss(&mut self) {
        let delay = self.config().alert_dismiss_delay();
        let id = self
            .timers
            .set_timeout(Box::new(|page: &mut Page| page.dismiss_stale_alerts()), delay);
        self.alert_timer = Some(id);
        tracing::debug!("alert auto-dismiss armed for {delay:?}");
    }

    /// Dismiss every non-important alert present right now. The snapshot
    /// is taken at fire time, so alerts added after initialization are
    /// still caught and alerts added after firing are missed.
    pub(crate) fn dismiss_stale_alerts(&mut self) {
        self.alert_timer = None;

        let stale = self.document().tree().query_selector_all(STALE_ALERTS);
        let mut dismissed = 0;
        for node in stale {
            if let Ok(mut alert) = Alert::new(self.document().tree(), node) {
                if alert.close(self.document_mut().tree_mut()) {
                    dismissed += 1;
                }
            }
        }
        tracing::info!("auto-dismissed {dismissed} alerts");
    }

    /// Start preview sync for every color input that declares a target
    fn init_color_previews(&mut self) {
        let inputs = self.document().tree().query_selector_all(COLOR_INPUTS);
        let mut synced = 0;
        for input in inputs {
            if self
                .document()
                .tree()
                .attribute(input, "data-preview")
                .is_none()
            {
                continue;
            }
            self.sync_color_preview(input);
            self.add_listener(input, EventType::Input, |page, node| {
                page.sync_color_preview(node);
            });
            synced += 1;
        }
        tracing::debug!("color preview sync active for {synced} inputs");
    }

    /// Copy an input's current value to its declared preview target. The
    /// selector and target are re-resolved on every call, so a target
    /// appearing later starts receiving updates and a missing one stays
    /// a silent no-op.
    pub(crate) fn sync_color_preview(&mut self, input: NodeId) {
        let tree = self.document().tree();
        let Some(selector) = tree.attribute(input, "data-preview").map(str::to_string) else {
            return;
        };
        let Some(value) = tree.attribute(input, "value").map(str::to_string) else {
            return;
        };
        let Some(target) = tree.query_selector(&selector) else {
            tracing::debug!("preview target {selector:?} not found");
            return;
        };
        // target came out of a query, so it is an element
        let _ = self
            .document_mut()
            .tree_mut()
            .set_style_property(target, "background-color", &value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
        <body>
          <button data-bs-toggle="tooltip" title="Copy">C</button>
          <span data-bs-toggle="tooltip" data-bs-title="Paste">P</span>
          <div class="alert">hello</div>
        </body>
    "##;

    #[test]
    fn test_initialize_activates_tooltips_and_timer() {
        let mut page = Page::from_html(PAGE);
        page.initialize_dashboard_behaviors();

        assert_eq!(page.tooltips().len(), 2);
        assert_eq!(page.tooltips()[0].title(), "Copy");
        assert_eq!(page.tooltips()[1].title(), "Paste");
        assert!(page.has_pending_timers());
    }

    #[test]
    fn test_second_initialize_is_ignored() {
        let mut page = Page::from_html(PAGE);
        page.initialize_dashboard_behaviors();
        page.initialize_dashboard_behaviors();

        assert_eq!(page.tooltips().len(), 2);
    }

    #[test]
    fn test_ready_dispatched_once_on_init() {
        let mut page = Page::from_html(PAGE);
        let root = page.document().tree().root();
        page.add_listener(root, EventType::Ready, |page, _| {
            let body = page.document().body();
            let _ = page
                .document_mut()
                .tree_mut()
                .set_attribute(body, "data-ready", "1");
        });

        page.initialize_dashboard_behaviors();

        let body = page.document().body();
        assert_eq!(
            page.document().tree().attribute(body, "data-ready"),
            Some("1")
        );
    }
}
