//! cfgx CLI
//!
//! Static extraction of declarative TypeScript configuration.

use cfgxc::commands::{parse_extract_args, run_extract};

fn main() {
    cfgxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "extract" => {
            let extract = match parse_extract_args(&args[2..]) {
                Ok(extract) => extract,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: cfgx extract <file.ts> <symbol> [options]");
                    eprintln!();
                    eprintln!("Options:");
                    eprintln!("  --models           Require a list of records");
                    eprintln!("  --config           Require a single record");
                    eprintln!("  -o <path>          Write a JSON snapshot instead of printing");
                    eprintln!("  --max-depth=<n>    Bound on nested evaluation steps (default 1024)");
                    std::process::exit(1);
                }
            };

            if let Err(err) = run_extract(&extract) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("cfgx {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("cfgx - static extraction of TypeScript configuration");
    println!();
    println!("Usage: cfgx <command> [options]");
    println!();
    println!("Commands:");
    println!("  extract <file.ts> <symbol>   Evaluate a top-level declaration and print it as JSON");
    println!("  help                         Show this help message");
    println!("  version                      Show version information");
    println!();
    println!("Extract options:");
    println!("  --models           Require a list of records");
    println!("  --config           Require a single record");
    println!("  -o <path>          Write a JSON snapshot instead of printing");
    println!("  --max-depth=<n>    Bound on nested evaluation steps (default 1024)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=cfgx_eval=debug) to enable tracing output.");
}
