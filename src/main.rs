//! rotatext - Animated Terminal Text Rotator
//!
//! Demo binary: mounts a rotator into a container and renders it in the
//! terminal until quit.

use anyhow::Result;
use clap::{Arg, Command};
use std::time::Duration;

use rotatext::ui::{InputAction, TerminalUI, UIRenderer};
use rotatext::{Container, Distance, Rotator, RotatorConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = Command::new("rotatext")
        .version(rotatext::VERSION)
        .about("Cycles through short text entries in the terminal with animated transitions")
        .arg(
            Arg::new("text")
                .long("text")
                .value_name("ENTRIES")
                .help("Comma-separated entries, bypassing the source attribute"),
        )
        .arg(
            Arg::new("attr-value")
                .long("attr-value")
                .value_name("VALUE")
                .help("Source attribute value, split on the delimiter [default: hello|world|this|rotates]"),
        )
        .arg(
            Arg::new("speed")
                .long("speed")
                .value_name("MS")
                .help("Rotation interval in milliseconds [default: 2000]"),
        )
        .arg(
            Arg::new("distance")
                .long("distance")
                .value_name("LENGTH")
                .help("Slide distance, e.g. 20px [default: 20px]"),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .value_name("CHAR")
                .help("Split character for the attribute value [default: |]"),
        )
        .get_matches();

    let mut config = RotatorConfig::default();

    if let Some(speed) = matches.get_one::<String>("speed") {
        let millis: u64 = speed
            .parse()
            .map_err(|_| anyhow::anyhow!("--speed must be a whole number of milliseconds"))?;
        config = config.with_interval(Duration::from_millis(millis));
    }

    if let Some(distance) = matches.get_one::<String>("distance") {
        config = config.with_scroll_distance(Distance::parse(distance)?);
    }

    if let Some(delimiter) = matches.get_one::<String>("delimiter") {
        let mut chars = delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => config = config.with_delimiter(ch),
            _ => anyhow::bail!("--delimiter must be a single character"),
        }
    }

    if let Some(text) = matches.get_one::<String>("text") {
        config = config.with_entries(text.split(',').map(str::to_owned).collect());
    }

    // The container stands in for the element a caller would hand us.
    let attr_value = matches
        .get_one::<String>("attr-value")
        .cloned()
        .unwrap_or_else(|| "hello|world|this|rotates".to_string());
    let container = Container::with_attribute(&config.source_attribute, attr_value);

    let mut ui = TerminalUI::new()?;
    ui.initialize()?;

    let mut rotator = match Rotator::mount(container.clone(), config) {
        Ok(rotator) => rotator,
        Err(err) => {
            ui.cleanup()?;
            return Err(err.into());
        }
    };

    // Render/input loop - redraw often enough to show animation frames
    loop {
        match ui.handle_input(Some(Duration::from_millis(33)))? {
            Some(InputAction::Quit) => break,
            Some(InputAction::Advance) => rotator.advance(),
            None => {}
        }

        ui.render(&container.view())?;

        // Brief pause
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    rotator.teardown();
    ui.cleanup()?;

    Ok(())
}
