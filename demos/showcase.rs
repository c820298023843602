//! Showcase - a tour of the toolkit on the real terminal.
//!
//! Fills the scrolling log, sets a title, asks a menu question and a text
//! question, then prints a centered box and a few stamped messages.
//!
//! Run with: cargo run --example showcase
//!
//! Diagnostics go to stderr; try `RUST_LOG=bui=debug` with stderr redirected
//! to a file, or `BUI_RENDER_MODE=plain` to see the line-oriented output.

use bui::{EditorOptions, Toolkit};
use tracing_subscriber::EnvFilter;

fn main() -> bui::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut ui = Toolkit::new()?;
    ui.clear_screen()?;

    for n in 0..40 {
        ui.console(&format!("{n}{n}"))?;
    }
    ui.console("second to last line")?;
    ui.console("final line here")?;

    ui.set_title(Some("this is a test title"))?;

    let choice = ui.ask_list(
        "Question text goes here",
        &["first item here", "this is the second item", "and this is the third"],
    )?;
    ui.print_spans(vec![ui.bold(&choice)], None)?;

    let answer = ui.input(EditorOptions {
        prompt: Some("This is a question".into()),
        ..Default::default()
    })?;
    ui.print_spans(vec![ui.bold("some text"), ui.underline(&format!(" {answer}"))], None)?;

    ui.print_center("this is just a test of things", None, None)?;
    ui.warn("warning here")?;
    ui.error("error here")?;
    ui.notice("Just a notice")?;
    ui.console("final line here")?;

    let secret = ui.input(EditorOptions {
        prompt: Some("Password:".into()),
        obfuscate: true,
        max_len: Some(16),
    })?;
    ui.notice(&format!("read {} masked characters", secret.len()))?;
    Ok(())
}
