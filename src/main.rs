use clap::Parser;
use nubase_chart::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(nubase_chart::Error::processing_interrupted(
                    "Interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(_metadata) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("NUBASE Chart - nuclear half-life table tool");
    println!("===========================================");
    println!();
    println!("Parse the fixed-width NUBASE table, normalise half-lives to seconds");
    println!("and report what a chart of nuclides needs.");
    println!();
    println!("USAGE:");
    println!("    nubase-chart <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summary     Summarise record counts, half-life range and chart extent");
    println!("    export      Export parsed isotope records as JSON");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    nubase-chart summary --input nubase2016.txt");
    println!("    nubase-chart summary --input nubase2016.txt --ground-states-only --format json");
    println!("    nubase-chart export --input nubase2016.txt -o records.json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    nubase-chart <COMMAND> --help");
}
