#![warn(clippy::nursery)]
#![warn(clippy::unnested_or_patterns)]
#![warn(clippy::uninlined_format_args)]

use calc::{COMMANDS, Command, Expr, KEYWORDS, PROMPT, calculate};
use clap::Parser;
use rustyline::{Editor, Result, history::DefaultHistory};
use util::CommandCompleter;

/// Integer calculator. Operators are `+ - * / %`, applied strictly left to
/// right; only parentheses change the order.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the parsed expression instead of its value.
    #[arg(long)]
    ast: bool,

    /// Expressions to evaluate. Starts an interactive session when empty.
    #[arg(allow_hyphen_values = true)]
    exprs: Vec<String>,
}

fn run_once(args: &Args) -> bool {
    let mut ok = true;
    for src in &args.exprs {
        let result = if args.ast {
            Expr::parse(src).map(|e| e.to_string())
        } else {
            calculate(src).map(|v| v.to_string())
        };
        match result {
            Ok(out) => println!("{out}"),
            Err(err) => {
                eprintln!("{err}");
                ok = false;
            }
        }
    }
    ok
}

fn repl() -> Result<()> {
    let mut rl = Editor::<CommandCompleter, DefaultHistory>::new()?;
    let completer = CommandCompleter::new(KEYWORDS.iter().copied(), COMMANDS.iter().copied());
    rl.set_helper(Some(completer));

    loop {
        let input = rl.readline(PROMPT);
        match input {
            Ok(line) => {
                rl.add_history_entry(&line).ok();
                match Command::parse(line.as_str()) {
                    Ok(cmd) => match cmd {
                        Command::Eval(e) => match e.eval() {
                            Ok(v) => println!("{v}"),
                            Err(err) => eprintln!("{err}. Try again."),
                        },
                        Command::Ast(e) => println!("{e}"),
                        Command::Quit => break,
                        Command::Noop => {}
                    },
                    Err(_) => eprintln!("{}. Try again.", calc::Error::ParseFailure),
                }
            }
            Err(_) => break,
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.exprs.is_empty() {
        return repl();
    }

    if !run_once(&args) {
        std::process::exit(1);
    }
    Ok(())
}
