//! Pagelet - a scripted page demo
//!
//! Usage: pagelet [OPTIONS]

use std::env;
use std::process::ExitCode;

use pagelet::{demo_page, run};
use pagelet_host::{StdConsole, StdModal};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("--help") | Some("-h") => {
            print_usage(&args[0]);
            ExitCode::SUCCESS
        }
        Some("--version") | Some("-V") => {
            println!("Pagelet {}", VERSION);
            ExitCode::SUCCESS
        }
        Some(arg) => {
            eprintln!("Unknown argument: {}", arg);
            print_usage(&args[0]);
            ExitCode::FAILURE
        }
        None => {
            if let Err(e) = run_demo() {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Pagelet {} - a scripted page demo

USAGE:
    {} [OPTIONS]

OPTIONS:
    -h, --help        Print this help message
    -V, --version     Print version information

Runs the demo script against a seeded page, clicks the action button
once, and prints the resulting document tree.
"#,
        VERSION, program
    );
}

/// Seed the page, run the script, and exercise the click handler once
fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut page = demo_page();
    let mut console = StdConsole;

    run(&mut page, &mut console)?;

    // The deferred path: one user click on the action button
    if let Some(button) = page.find("actionBtn") {
        let mut modal = StdModal;
        let handlers = page.click(button, &mut modal);
        log::debug!("Click ran {} handler(s)", handlers);
    }

    println!("\n=== Document tree ===\n");
    println!("{}", page.tree().pretty_print());
    println!("Total nodes: {}", page.tree().len());

    Ok(())
}
