//! Menu showcase: a scrolling long item, a disabled item, a counter, a
//! toggle that enables the items below it, and items that grow and shrink
//! the list.
//!
//! Run: cargo run --bin demo

use std::error::Error;
use std::process;
use std::time::Duration;

use clap::Parser;
use scrollmenu::{MenuDescriptor, MenuOutcome, run_menu_with};
use scrollmenu_core::{Backend, Color, Key, Point, Style};
use scrollmenu_crossterm::{CrosstermBackend, install_panic_hook};
use scrollmenu_demos::CommonArgs;

#[derive(Parser)]
#[command(name = "demo", about = "Scrolling terminal menu showcase")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

/// State shared with the select handlers.
#[derive(Debug, Default)]
struct Counters {
    value: i32,
    /// Items present at start; Delete never goes below this.
    length: usize,
}

const SCREEN: Style = Style::pair(Color::Blue, Color::Cyan);

fn showcase() -> MenuDescriptor<Counters> {
    let items = [
        "This is a long title - longer than the menu is wide.  Selecting it ends the demo.",
        "This disabled",
        "Value: 10",
        "1",
        "Append Item",
        "Delete Item",
    ];
    let data = Counters {
        value: 10,
        length: items.len(),
    };

    MenuDescriptor::with_data(items, data)
        .col(2)
        .width(33)
        .height(12)
        .title("Hello, World")
        .footer("*** Bye, World! ")
        .footer_height(0)
        .enabled([true, false, true, true, true, true])
        .on_select(2, |d, i| {
            d.data.value += 1;
            d.items[i] = format!("Value: {}", d.data.value);
            None
        })
        .on_select(3, |d, i| {
            let on = d.items[i] != "1";
            d.items[i] = String::from(if on { "1" } else { "0" });
            for next in i + 1..i + 3 {
                d.set_enabled(next, on);
            }
            Some(Key::ArrowDown)
        })
        .on_select(4, |d, _| {
            let n = d.item_count();
            d.items.push(format!("New Item {n}"));
            None
        })
        .on_select(5, |d, _| {
            if d.item_count() > d.data.length {
                d.items.pop();
            }
            None
        })
}

fn paint_background(backend: &mut impl Backend) -> Result<(), Box<dyn Error>> {
    let size = backend.screen_size()?;
    let blank = " ".repeat(size.x.max(0) as usize);
    for y in 0..size.y {
        backend.write_str(Point::new(0, y), &blank, SCREEN);
    }
    Ok(())
}

fn wait_for_key(backend: &mut impl Backend) -> Result<(), Box<dyn Error>> {
    loop {
        if backend.key_available()? && backend.read_key()?.is_some() {
            return Ok(());
        }
    }
}

fn run(cli: &Cli, backend: &mut CrosstermBackend) -> Result<MenuOutcome, Box<dyn Error>> {
    let config = cli.common.menu_config()?;
    let mut desc = showcase();

    backend.init()?;
    paint_background(backend)?;
    let outcome = run_menu_with(backend, &mut desc, &config)?;
    log::info!("menu ended with {outcome:?}, value {}", desc.data.value);

    let msg = format!("Item: {} was selected to exit the menu.", outcome.index());
    backend.write_str(Point::ZERO, &msg, SCREEN);
    backend.flush()?;
    wait_for_key(backend)?;
    Ok(outcome)
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.common.init_logging() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    install_panic_hook();

    let mut backend = CrosstermBackend::new().with_poll_timeout(Duration::from_millis(10));
    let result = run(&cli, &mut backend);
    backend.close();

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
