use clap::Parser;
use pokeinfo::config::ClientArgs;
use pokeinfo::{FetchError, api, prompt, summary};
use std::io;
use std::process::ExitCode;

/// Exit status when no identifier could be read.
const EXIT_NO_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "pokeinfo",
    version,
    about = "Fetch and display information about a Pokémon from PokeAPI"
)]
struct Cli {
    /// Pokémon name or ID (prompted for when omitted)
    name: Option<String>,
    /// Print the raw JSON record instead of a summary.
    #[arg(long, default_value_t = false)]
    raw_json: bool,
    #[command(flatten)]
    client: ClientArgs,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let name = {
        let stdin = io::stdin();
        match prompt::resolve_identifier(cli.name.as_deref(), &mut stdin.lock(), &mut io::stdout()) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(EXIT_NO_INPUT);
            }
        }
    };

    match run(&cli, &name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, name: &str) -> Result<(), FetchError> {
    let client = cli.client.build_client()?;
    let value = client.fetch_pokemon(name)?;

    let out = if cli.raw_json {
        // serde_json's map is ordered, so keys come out sorted.
        serde_json::to_string_pretty(&value)?
    } else {
        summary::summarize(&api::parse_record(&value)?).to_string()
    };
    println!("{out}");
    Ok(())
}
