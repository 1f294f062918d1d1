use std::{
    fs,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use lineal::run_script;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// File extension every script must carry.
const SCRIPT_EXTENSION: &str = "si";

/// lineal runs scripts of integer and boolean statements, one line at a
/// time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat SCRIPT as source code instead of a path to a `.si` file.
    #[arg(short, long)]
    eval: bool,

    /// Increase log output on stderr (-v debug, -vv trace). `RUST_LOG`
    /// takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    script: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let source = if args.eval {
        args.script
    } else {
        match read_script(Path::new(&args.script)) {
            Ok(source) => source,
            Err(message) => {
                eprintln!("{message}");
                return ExitCode::FAILURE;
            },
        }
    };

    execute(&source, &mut io::stdout().lock())
}

/// Runs `source` against `out` and maps the outcome to the exit status.
///
/// A failed flush means output was lost, so it fails the run even when every
/// line executed.
fn execute<W: Write>(source: &str, out: &mut W) -> ExitCode {
    let result = run_script(source, out);

    if let Err(e) = out.flush() {
        error!(error = %e, "failed to flush output");
        eprintln!("Failed to write output: {e}");
        return ExitCode::FAILURE;
    }

    match result {
        Ok(env) => {
            info!(variables = env.len(), "run complete");
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!(kind = ?e.kind(), line = ?e.line_number(), "run aborted");
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn read_script(path: &Path) -> Result<String, String> {
    if path.extension().is_none_or(|ext| ext != SCRIPT_EXTENSION) {
        return Err(format!("Invalid file extension for '{}': expected a .{SCRIPT_EXTENSION} file.",
                           path.display()));
    }

    fs::read_to_string(path).map_err(|e| {
                                format!("Failed to read the input file '{}'. Perhaps this file does not exist? ({e})",
                                        path.display())
                            })
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(true)
                                                    .with_level(true))
                                  .with(filter)
                                  .init();
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::*;

    /// Accepts writes but fails every flush.
    struct UnflushableOutput(Vec<u8>);

    impl Write for UnflushableOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("device full"))
        }
    }

    #[test]
    fn successful_run_exits_with_success() {
        let mut out = Vec::new();
        assert_eq!(execute("print 1;", &mut out), ExitCode::SUCCESS);
        assert_eq!(out, b"1\n");
    }

    #[test]
    fn failing_line_exits_with_failure() {
        assert_eq!(execute("print 1 / 0;", &mut Vec::new()), ExitCode::FAILURE);
    }

    #[test]
    fn lost_output_exits_with_failure() {
        let mut out = UnflushableOutput(Vec::new());
        assert_eq!(execute("print 1;", &mut out), ExitCode::FAILURE);
    }

    #[test]
    fn scripts_need_the_si_extension() {
        assert!(read_script(Path::new("script.txt")).is_err());
        assert!(read_script(Path::new("script")).is_err());
    }
}
