use std::io::Write;

use anyhow::Context;
use clap::Parser;

use primer_cli::{Cli, Command, demos};
use primer_echo::{EchoConfig, InteractiveEcho};

fn main() -> anyhow::Result<()> {
    primer_observability::init();

    let command = Cli::parse().selected();
    tracing::debug!(?command, "starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Echo => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            InteractiveEcho::new(EchoConfig::from_env())
                .run(&mut input, &mut out)
                .context("echo session failed")?;
        }
        Command::Books => demos::books(&mut out)?,
        Command::Greetings => demos::greetings(&mut out)?,
    }

    out.flush().context("flushing stdout")?;
    Ok(())
}
