extern crate docopt;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate tala;

use std::io;
use std::io::Write;

use docopt::Docopt;

use tala::{simulate, Backend, Error, FileLogger, Logger, Machine, Sink};

const USAGE: &'static str = "
Tala.

Usage:
  tala [options] <steps> <pulses> <rotation>
  tala (-h | --help)
  tala --version

Options:
  -h --help      Show this screen.
  --beats=N      Number of beats to play through [default: 16].
  --sink=NAME    Comma separated list of sinks ('console', 'null', 'udp').
  --log          Write emitted commands to a log file.
  --json         Print the simulation as JSON instead of playing.
";

#[derive(Debug, Deserialize)]
struct Args {
    arg_steps: i64,
    arg_pulses: i64,
    arg_rotation: i64,
    flag_beats: i64,
    flag_sink: String,
    flag_log: bool,
    flag_json: bool,
    flag_version: bool,
}

fn run_app(args: &Args) -> Result<(), Error> {
    if args.flag_json {
        let sim = simulate(
            args.arg_steps,
            args.arg_pulses,
            args.arg_rotation,
            args.flag_beats,
        )?;
        println!("{}", serde_json::to_string_pretty(&sim).unwrap());
        return Ok(());
    }

    let mut requests = vec![];
    for name in args.flag_sink.split(',') {
        requests.push(Backend::from_name(name.trim())?);
    }

    let mut sink = Sink::new(&requests)?;
    let mut logger = if args.flag_log {
        Some(Logger::new(Box::new(FileLogger::new()?)))
    } else {
        None
    };

    let mut machine = Machine::new(Box::new(move |cmd| {
        if let Some(ref mut logger) = logger {
            logger.log("machine", &cmd);
        }
        sink.process(cmd);
    }));

    machine.generate(args.arg_steps, args.arg_pulses, args.arg_rotation)?;
    for beat in 0..args.flag_beats {
        machine.query(beat);
    }

    Ok(())
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());
    if args.flag_version {
        println!("v0.1.0");
        return;
    }

    let code = match run_app(&args) {
        Ok(_) => 0,
        Err(err) => {
            writeln!(io::stderr(), "Error: {}", err).unwrap();
            1
        }
    };

    std::process::exit(code);
}
