//! Pane demo
//!
//! Loads a sample dashboard page, wires the behaviors, simulates a few
//! interactions and runs the clock past the alert dismiss delay.
//! `RUST_LOG=debug` shows the behavior tracing.

use anyhow::Result;
use pane_page::Page;
use pane_widgets::{HeadlessDialogs, SystemClipboard};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const SAMPLE_PAGE: &str = r##"
<html>
  <head><title>Server Dashboard</title></head>
  <body>
    <button data-bs-toggle="tooltip" title="Copy the invite link">Invite</button>
    <button data-bs-toggle="tooltip" data-bs-title="Reload member counts" data-bs-placement="bottom">Refresh</button>

    <div class="alert">Settings saved.</div>
    <div class="alert">Cache cleared.</div>
    <div class="alert alert-important">Bot is offline!</div>

    <input type="color" id="text_color" value="#ffffff" data-preview="#color_swatch">
    <span id="color_swatch"></span>

    <input type="text" id="welcome_text" value="Welcome aboard, %user%!">
    <input type="number" id="font_size" value="18">
    <p id="welcome_preview_text"></p>

    <div id="copyToast" class="toast hide">Copied to clipboard</div>
  </body>
</html>
"##;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut page = Page::from_html(SAMPLE_PAGE)
        .with_clipboard(Box::new(SystemClipboard::new()))
        .with_dialog_host(Box::new(HeadlessDialogs::accepting()));

    println!("loaded: {}", page.document().title());
    page.initialize_dashboard_behaviors();
    println!(
        "tooltips: {}, alerts: {}",
        page.tooltips().len(),
        page.document().tree().query_selector_all(".alert").len()
    );

    // a user picks a new text color
    if let Some(input) = page.document().element_by_id("text_color") {
        page.set_input_value(input, "#3366ff")?;
    }
    if let Some(swatch) = page.document().element_by_id("color_swatch") {
        println!(
            "swatch background: {}",
            page.document()
                .tree()
                .style_property(swatch, "background-color")
                .unwrap_or_default()
        );
    }

    // re-render the welcome preview and copy the invite link
    page.update_welcome_preview()?;
    let copied = page.copy_to_clipboard("https://dash.example/invite/abc123");
    println!("clipboard write ok: {copied}");

    page.confirm_action("Clear the moderation queue?", |_| {
        println!("moderation queue cleared");
    });

    // five seconds pass; non-important alerts go away
    page.advance(Duration::from_millis(5000));
    println!(
        "alerts after dismiss: {}",
        page.document().tree().query_selector_all(".alert").len()
    );

    Ok(())
}
