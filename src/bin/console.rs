//! gtpwire Console
//!
//! Spawns a GTP engine and runs commands against it.

use std::process::{Command as Process, Stdio};

use clap::Parser;
use gtpwire::protocol::{Command, Move, Response, PASS, RESIGN};
use gtpwire::{Config, GtpError, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// gtpwire Console
#[derive(Parser, Debug)]
#[command(name = "gtpwire-console")]
#[command(about = "Run GTP commands against an engine process")]
#[command(version)]
struct Args {
    /// Engine program to spawn (e.g. gnugo)
    #[arg(short, long)]
    engine: String,

    /// Extra arguments passed to the engine
    #[arg(short = 'a', long = "engine-arg", allow_hyphen_values = true)]
    engine_args: Vec<String>,

    /// Number commands automatically
    #[arg(long)]
    auto_ids: bool,

    /// Largest response record accepted, in KB
    #[arg(long, default_value = "1024")]
    max_record_kb: usize,

    /// Commands to run, one per argument (e.g. "boardsize 9" "genmove b")
    commands: Vec<String>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gtpwire=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("gtpwire console v{}", gtpwire::VERSION);
    tracing::info!("Engine: {} {:?}", args.engine, args.engine_args);

    if let Err(e) = run(&args) {
        tracing::error!("Console error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> gtpwire::Result<()> {
    let config = Config::builder()
        .auto_ids(args.auto_ids)
        .max_record_size(args.max_record_kb * 1024)
        .build();

    // Parse everything up front so a typo does not leave a half-run game
    let commands = args
        .commands
        .iter()
        .map(|line| Command::parse_line(line))
        .collect::<gtpwire::Result<Vec<_>>>()?;

    let mut child = Process::new(&args.engine)
        .args(&args.engine_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let stdin = child
        .stdin
        .take()
        .ok_or_else(|| GtpError::InvalidCommand("engine stdin unavailable".to_string()))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| GtpError::InvalidCommand("engine stdout unavailable".to_string()))?;

    let mut session = Session::with_config(stdout, stdin, config);

    let mut quit_sent = false;
    for command in commands {
        quit_sent |= matches!(command, Command::Quit { .. });
        let response = session.send(command)?;
        print_response(&response);
    }
    if !quit_sent {
        session.quit()?;
    }

    drop(session);
    let status = child.wait()?;
    tracing::info!("Engine exited with {}", status);
    Ok(())
}

fn print_response(response: &Response) {
    if let Some(failure) = response.failure() {
        println!("? {}", failure.message);
        return;
    }

    match response {
        Response::ProtocolVersion(r) => println!("= {}", r.version),
        Response::Name(r) => println!("= {}", r.name),
        Response::Version(r) => println!("= {}", r.version),
        Response::KnownCommand(r) => println!("= {}", r.known),
        Response::ListCommands(r) => println!("= {}", r.commands.join(" ")),
        Response::GenMove(r) => match r.mv {
            Move::Place { vertex, .. } => println!("= {}", vertex),
            Move::Pass { .. } => println!("= {}", PASS),
            Move::Resign { .. } => println!("= {}", RESIGN),
        },
        Response::Quit(_)
        | Response::BoardSize(_)
        | Response::ClearBoard(_)
        | Response::Komi(_)
        | Response::Play(_)
        | Response::Undo(_) => println!("="),
    }
}
