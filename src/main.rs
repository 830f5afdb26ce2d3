use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use todo_tui::{app::App, config::Config};

fn main() -> Result<()> {
    let matches = Cli::new("todo-tui")
        .version(crate_version!())
        .about("A terminal user interface for a small in-memory todo list")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    App::start(config)
}
