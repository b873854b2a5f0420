use clap::{Parser, Subcommand};
use smitten::{config, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let describe = env!("GIT_DESCRIBE");
    if describe.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        describe
    }
}

#[derive(Parser)]
#[command(name = "smitten")]
#[command(about = "Static site generator for Valentine's Day proposals")]
#[command(long_about = "\
Static site generator for Valentine's Day proposals

One config file and one markdown file become a chain of question pages,
a fireworks finale, and the plan for the big day. The yes button moves
forward; the no button runs away from the cursor.

Minimal config.toml:

  agenda_file = \"agenda.md\"

  [[pages]]
  title = \"Will you be my Valentine?\"
  yes_button = \"Yes!\"
  no_button = \"No\"

The site is written to _site/ next to the config file, as plain HTML
with everything inlined — host it anywhere, or open it from disk.

Run 'smitten gen-config' for a documented config with every option.")]
#[command(version = version_string())]
struct Cli {
    /// Path to the site configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site into _site/ next to the config file
    Build,
    /// Validate the config and agenda file without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let report = generate::generate(&cli.config)?;
            output::print_build_output(&report);
        }
        Command::Check => {
            let report = generate::check(&cli.config)?;
            output::print_check_output(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
