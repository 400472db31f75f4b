use clap::Parser;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tlisp::Interpreter;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Expressions:
  42  3.5e2  0xff         numbers
  true  false  null       literals
  (+ a b) (- a b)         arithmetic, also * and /
  (define name expr)      bind name in the environment
  (if cond then else)     cond must be a boolean
Commands:
  :help                   show this message
  :env                    list bound names
  :exit                   quit (also Ctrl-C / Ctrl-D)";

/// A tiny lisp. Starts a REPL unless an expression is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to keep REPL history in, defaults to ~/.tlisp_history.
    #[arg(long)]
    history: Option<PathBuf>,

    /// Neither load nor save REPL history.
    #[arg(long)]
    no_history: bool,

    /// Prompt printed before each line.
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Evaluate this expression, print the result and exit.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expr: Vec<String>,
}

impl Args {
    fn history_path(&self) -> Option<PathBuf> {
        if self.no_history {
            return None;
        }
        self.history.clone()
            .or_else(|| dirs::home_dir().map(|h| h.join(".tlisp_history")))
    }
}

fn print_eval(interp: &Interpreter, line: &str) {
    match interp.evaluate(line) {
        Err(e) => println!("{}", e),
        Ok(value) => println!("{}", value.render()),
    }
}

fn repl(args: &Args) -> Result<(), String> {
    let interp = Interpreter::new();
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = args.history_path();
    if let Some(path) = &histpath {
        if let Err(e) = rl.load_history(path) {
            tracing::debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    println!("TLisp v{}\n", env!("CARGO_PKG_VERSION"));
    println!("For help, type :help");
    println!("Press Ctrl+C or type :exit to Exit\n");

    loop {
        match rl.readline(&args.prompt) {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                match line.trim() {
                    ":exit" => break,
                    ":help" => println!("{}", HELP),
                    ":env" => println!("{}", interp.environment().names().join(" ")),
                    _ => print_eval(&interp, &line),
                }
            }
        }
    }

    if let Some(path) = &histpath {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }
    Ok(())
}

fn main() -> Result<(), String> {
    let filter = EnvFilter::try_from_env("TLISP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if !args.expr.is_empty() {
        print_eval(&Interpreter::new(), &args.expr.join(" "));
        return Ok(());
    }
    repl(&args)
}
