#![windows_subsystem = "windows"]

use env_logger::Env;
use island_happened::launcher::{self, DesktopHost};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let env = Env::default()
        .filter_or("LOG_LVL", "info")
        .write_style_or("LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    launcher::launch(DesktopHost, std::env::args_os().skip(1))
}
