use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use ember::Session;
use log::info;

/// ember is a minimal expression language with variables and arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells ember to look at a file instead of a script.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Script to run. Starts an interactive session when omitted.
    contents: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = repl() {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    match Session::new().run(&script) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn repl() -> io::Result<()> {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("\nember v{}", env!("CARGO_PKG_VERSION"));

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim_end_matches(['\n', '\r']);
        if input.trim() == "exit" {
            break;
        }

        match session.run(input) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }

    info!("session ended with {} bindings", session.environment().len());
    Ok(())
}
