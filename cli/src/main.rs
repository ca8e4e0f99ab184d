mod commands;
mod terminal;

use commands::{CommandLine, Commands, courses, menu};
use registrar_common::config::Config;
use registrar_core::registry::Registry;
use registrar_core::service::RegistrationService;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    logging::init_logging(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    let mut service = RegistrationService::new(Registry::with_seed_data()?);

    match commands.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::run(&mut service, &cfg),
        Commands::Courses => {
            courses::list_courses(&service, &cfg);
            print::end_of_program();
            Ok(())
        }
    }
}
