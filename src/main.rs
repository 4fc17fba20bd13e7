use clap::{Parser, Subcommand};
use namedivider::NameDivider;
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Divides an undivided name
    Name(cmd::name::NameArgs),
    /// Divides names in a text file, one name per line
    File(cmd::file::FileArgs),
    /// Checks accuracy against a file of already divided names
    Accuracy(cmd::accuracy::AccuracyArgs),
}

fn main() {
    // stdout carries the divided names; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let divider_args = match &cli.command {
        Commands::Name(args) => &args.divider,
        Commands::File(args) => &args.divider,
        Commands::Accuracy(args) => &args.divider,
    };

    let divider = match divider_args
        .to_config()
        .and_then(NameDivider::from_config)
    {
        Ok(d) => d,
        Err(e) => {
            eprintln!("❌ Failed to initialize divider: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Name(args) => cmd::name::run(&args, &divider),
        Commands::File(args) => cmd::file::run(&args, &divider),
        Commands::Accuracy(args) => cmd::accuracy::run(&args, &divider),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
