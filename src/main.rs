use clap::Parser;

use guardian_tools::{cli, command, result::Result};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("guardian_tools")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    match &cli_args.command {
        cli::Command::Release(release) => {
            command::release::execute(&cli_args, release)
        }
        cli::Command::ConvertLogo => command::convert_logo::execute(&cli_args),
        cli::Command::ConvertLogoSimple => {
            command::convert_logo_simple::execute(&cli_args)
        }
        cli::Command::OptimizeLogo => command::optimize_logo::execute(&cli_args),
        cli::Command::RemoveOldLogos => {
            command::remove_logos::execute(&cli_args)
        }
        cli::Command::ReplaceLogos => command::replace_logos::execute(&cli_args),
    }
}
