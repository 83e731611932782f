use anyhow::Result;
use clap::Parser;
use pokeinfo::config::ClientArgs;
use pokeinfo::proxy;

#[derive(Parser, Debug)]
#[command(
    name = "pokeinfo-proxy",
    version,
    about = "Serve the Pokédex browser UI and a local proxy for PokeAPI"
)]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "POKEINFO_BIND", default_value = proxy::DEFAULT_BIND)]
    bind: String,
    #[command(flatten)]
    client: ClientArgs,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let client = cli.client.build_client()?;
    let server = proxy::bind(&cli.bind, client)?;
    eprintln!("Open http://{} in a browser", server.server_addr());
    server.run();
    Ok(())
}
