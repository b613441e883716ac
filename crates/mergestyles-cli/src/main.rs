use clap::Parser;
use mergestyles_cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let output = run(&cli)?;
    println!("{}", output);
    Ok(())
}
