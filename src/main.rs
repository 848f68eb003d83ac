use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use fibseq::EmitArgs;
use log::debug;

#[derive(Parser)]
#[command(version, about = "Print the Fibonacci numbers below a bound", long_about = None)]
struct Cli {
    #[command(flatten)]
    emit: EmitArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let bound = cli.emit.bound;
    debug!("Emitting Fibonacci terms below {bound}");
    bound
        .print()
        .with_context(|| format!("Failed to emit sequence below {bound}"))?;
    Ok(())
}
