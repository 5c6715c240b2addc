//! hexpr - compile and evaluate one expression from the command line.

use std::io::IsTerminal;

use hexprc::commands::{parse_args, run, CliError};
use hexprc::TerminalEmitter;

fn main() {
    hexprc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if matches!(args.first().map(String::as_str), Some("help" | "--help" | "-h")) {
        print_usage();
        return;
    }
    if matches!(args.first().map(String::as_str), Some("version" | "--version" | "-V")) {
        println!("hexpr {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    match run(&invocation) {
        Ok(output) => print!("{output}"),
        Err(CliError::Expr(err)) => {
            let is_tty = std::io::stderr().is_terminal();
            let mut emitter = TerminalEmitter::stderr(invocation.options.color, is_tty);
            emitter.emit(&err, &invocation.source);
            emitter.flush();
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: hexpr <command> <expression> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  eval <expr>          Evaluate and print the result (decimal and hex)");
    eprintln!("  lex <expr>           Print the token stream");
    eprintln!("  parse <expr>         Print the syntax tree");
    eprintln!("  help                 Show this help message");
    eprintln!("  version              Show version information");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --pc=<n>             Program counter for '$' (default: 0)");
    eprintln!("  --var=<name>=<n>     Define a variable");
    eprintln!("  --reg=<name>=<n>[:<width>]");
    eprintln!("                       Define a memory-backed variable, 1 to 4 bytes (default: 4)");
    eprintln!("  --mem=<path>         Load a memory image at address 0 for '[..]' reads");
    eprintln!("  --color=<mode>       auto, always or never (default: auto)");
    eprintln!();
    eprintln!("Functions: min(a,b) max(a,b) abs(a) lo(a) hi(a) bank(a) clamp(v,lo,hi)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  hexpr eval '9 + 4 * 3'");
    eprintln!("  hexpr eval 'w@[$ + 2]' --pc=0x8000 --mem=rom.bin");
    eprintln!("  hexpr eval 'hi(label) | 0x80' --var=label=0x1234");
    eprintln!("  hexpr parse 'a ? b : c' --var=a=1 --var=b=2 --var=c=3");
    eprintln!("  RUST_LOG=trace hexpr eval 'lo(sp)' --reg=sp=0x01ff:2");
}
