use clap::Parser;
use metar_report::cli::{args::Args, commands};
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
                process::exit(130);
            }
        }
    });

    match result {
        Ok(_stats) => {
            // The command has already printed the report
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("METAR Report - NOAA decoded weather report reader");
    println!("=================================================");
    println!();
    println!("Fetch the decoded METAR report of a weather station and print");
    println!("temperature, wind, pressure, sky conditions and station details.");
    println!();
    println!("USAGE:");
    println!("    metar-report <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    fetch       Fetch a station report from the NOAA server and print it");
    println!("    parse       Parse a report saved on disk and print it");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Increase logging verbosity (repeatable)");
    println!("    -q, --quiet      Only log errors");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Current weather at Amsterdam Schiphol:");
    println!("    metar-report fetch EHAM");
    println!();
    println!("    # Same, as JSON through a proxy:");
    println!("    metar-report fetch EHAM --format json --proxy http://proxy:3128");
    println!();
    println!("    # Parse a report saved earlier:");
    println!("    metar-report parse EHAM.TXT --station EHAM");
    println!();
    println!("For detailed help on any command, use:");
    println!("    metar-report <COMMAND> --help");
}
