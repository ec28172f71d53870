//! Pick one of the command-line arguments from a menu and print its index
//! (or -1 when dismissed).
//!
//! Run: cargo run --bin pick -- --title "Fruit" apple banana cherry

use std::error::Error;
use std::process;

use clap::Parser;
use scrollmenu::{MenuDescriptor, MenuOutcome, run_menu_with};
use scrollmenu_core::Backend;
use scrollmenu_crossterm::{CrosstermBackend, install_panic_hook};
use scrollmenu_demos::CommonArgs;

#[derive(Parser, Debug)]
#[command(name = "pick", about = "Choose an item from a terminal menu")]
struct Cli {
    /// Menu items, top to bottom.
    #[arg(required = true)]
    items: Vec<String>,

    #[arg(long)]
    title: Option<String>,

    /// Scrolling text under the items.
    #[arg(long)]
    footer: Option<String>,

    /// Top row (default: centered).
    #[arg(long)]
    row: Option<i32>,

    /// Left column (default: centered).
    #[arg(long)]
    col: Option<i32>,

    /// Text width (default: longest item or title).
    #[arg(long)]
    width: Option<i32>,

    /// Total height including title and footer rows.
    #[arg(long)]
    height: Option<i32>,

    /// Indexes of items that cannot be selected.
    #[arg(long, value_name = "INDEX", num_args = 1..)]
    disable: Vec<usize>,

    #[command(flatten)]
    common: CommonArgs,
}

impl Cli {
    fn descriptor(&self) -> MenuDescriptor {
        let mut desc = MenuDescriptor::new(self.items.iter().cloned());
        desc.row = self.row;
        desc.col = self.col;
        desc.width = self.width;
        desc.height = self.height;
        desc.title = self.title.clone();
        desc.footer = self.footer.clone();
        for &i in &self.disable {
            if i < desc.item_count() {
                desc.set_enabled(i, false);
            } else {
                log::warn!("--disable {i} is past the last item");
            }
        }
        desc
    }
}

fn run(cli: &Cli, backend: &mut CrosstermBackend) -> Result<MenuOutcome, Box<dyn Error>> {
    let config = cli.common.menu_config()?;
    let mut desc = cli.descriptor();
    backend.init()?;
    Ok(run_menu_with(backend, &mut desc, &config)?)
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.common.init_logging() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    install_panic_hook();

    let mut backend = CrosstermBackend::new();
    let result = run(&cli, &mut backend);
    backend.close();

    match result {
        Ok(outcome) => {
            log::info!("picked {outcome:?}");
            println!("{}", outcome.index());
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use scrollmenu_core::{HeadlessBackend, Key};

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pick").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn items_are_required() {
        assert!(Cli::try_parse_from(["pick"]).is_err());
    }

    #[test]
    fn flags_fill_the_descriptor() {
        let cli = parse(&[
            "--title", "Fruit", "--footer", "pick one ", "--row", "1", "--col", "4", "--width",
            "10", "--height", "6", "apple", "banana", "cherry",
        ]);
        let d = cli.descriptor();
        assert_eq!(d.items, vec!["apple", "banana", "cherry"]);
        assert_eq!(d.title.as_deref(), Some("Fruit"));
        assert_eq!(d.footer.as_deref(), Some("pick one "));
        assert_eq!((d.row, d.col), (Some(1), Some(4)));
        assert_eq!((d.width, d.height), (Some(10), Some(6)));
        assert!(d.enabled.is_none());
    }

    #[test]
    fn disabled_items_are_skipped() {
        let cli = parse(&["a", "b", "c", "--disable", "1", "7"]);
        let mut d = cli.descriptor();
        assert!(d.is_enabled(0));
        assert!(!d.is_enabled(1));
        assert!(d.is_enabled(2));

        let mut b = HeadlessBackend::new(20, 10).with_keys([Key::ArrowDown, Key::Enter]);
        let outcome = run_menu_with(&mut b, &mut d, &cli.common.menu_config().unwrap()).unwrap();
        assert_eq!(outcome.index(), 2);
    }

    #[test]
    fn escape_prints_minus_one() {
        let cli = parse(&["only"]);
        let mut b = HeadlessBackend::new(20, 10).with_keys([Key::Escape]);
        let outcome =
            run_menu_with(&mut b, &mut cli.descriptor(), &cli.common.menu_config().unwrap())
                .unwrap();
        assert_eq!(outcome.index(), -1);
    }
}
