use std::error::Error;

use clap::{command, Parser, Subcommand};
use eframe::egui::ViewportBuilder;
use now_serving::{config::Config, ServingApp};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// write a fresh default settings file
    Init {
        #[clap(long, short)]
        force: bool,
    },
    /// set the persisted counter back to 1 without opening the display
    Reset,
}

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the logger
    simple_file_logger::init_logger!("now_serving").expect("couldn't initialize logger");

    let args = Args::parse();
    let config_path = Config::config_path()?;
    match args.command {
        Some(Command::Init { force }) => {
            if force || !config_path.exists() {
                Config::default().save(&config_path)?;
            }
            return Ok(());
        }
        Some(Command::Reset) => {
            let mut config = Config::load_or_init(&config_path)?;
            config.reset();
            config.save(&config_path)?;
            return Ok(());
        }
        None => {}
    }

    let app = ServingApp::new()?;
    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    // run the gui
    eframe::run_native(
        "Now Serving",
        native_options,
        Box::new(move |_| Ok(Box::new(app))),
    )
    .map_err(Into::into)
}
