use clap::Parser;
use sciconsole::{AngleMode, Response, Session};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "sciconsole")]
#[command(about = "Scientific calculator console with physics constants", long_about = None)]
#[command(version)]
struct Args {
    /// Execute a console line and exit (repeatable)
    #[arg(short = 'e', long = "eval", value_name = "EXPR")]
    eval: Vec<String>,

    /// Trigonometric functions take and return degrees
    #[arg(long = "degrees")]
    degrees: bool,

    /// Significant digits shown for results (1-17)
    #[arg(
        long = "precision",
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(1..=17)
    )]
    precision: Option<u8>,

    /// Number of commands kept for recall
    #[arg(long = "history-size", value_name = "N")]
    history_size: Option<usize>,

    /// Quiet operation, suppress warnings
    #[arg(short = 'q', conflicts_with = "verbose")]
    quiet: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Set verbosity level explicitly (0-4)
    #[arg(
        long = "verbosity",
        value_name = "LEVEL",
        conflicts_with = "verbose",
        conflicts_with = "quiet"
    )]
    verbosity_level: Option<u8>,
}

impl Args {
    fn get_verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else if let Some(level) = self.verbosity_level {
            level.min(4)
        } else {
            1 + self.verbose.min(3)
        }
    }

    fn build_session(&self) -> Session {
        let mut builder = Session::builder();
        if self.degrees {
            builder = builder.with_angle_mode(AngleMode::Degrees);
        }
        if let Some(precision) = self.precision {
            builder = builder.with_precision(usize::from(precision));
        }
        if let Some(size) = self.history_size {
            builder = builder.with_history_capacity(size);
        }
        builder.build()
    }
}

fn init_logging(verbosity: u8) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new().filter_level(level).init();
}

fn print_response(
    out: &mut impl Write,
    response: &Response,
) -> io::Result<()> {
    for line in response.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Run each `-e` line in order; returns whether every line succeeded
fn run_batch(
    session: &mut Session,
    lines: &[String],
) -> anyhow::Result<bool> {
    let mut out = io::stdout().lock();
    let mut all_ok = true;
    for line in lines {
        let response = session.execute(line);
        all_ok &= !response.is_error();
        print_response(&mut out, &response)?;
    }
    out.flush()?;
    Ok(all_ok)
}

fn run_repl(session: &mut Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for line in session.open() {
        writeln!(out, "{}", line)?;
    }

    let mut input = String::new();
    loop {
        write!(out, ">>> ")?;
        out.flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = input.trim();
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        let response = session.execute(line);
        if matches!(response, Response::Clear(_)) {
            // ANSI clear screen, cursor home
            write!(out, "\x1b[2J\x1b[H")?;
        }
        print_response(&mut out, &response)?;
    }

    session.close();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let verbosity = args.get_verbosity();
    init_logging(verbosity);

    let mut session = args.build_session();

    if !args.eval.is_empty() {
        session.open();
        let all_ok = run_batch(&mut session, &args.eval)?;
        if !all_ok {
            anyhow::bail!("one or more lines failed");
        }
        return Ok(());
    }

    run_repl(&mut session)
}
