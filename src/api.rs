use std::sync::mpsc::channel;

use crate::engine::Engine;
use crate::err::Error;
use crate::msgs::{Beat, Command};
use crate::render;
use crate::sinks::{factory, Backend, CompositeSink, Sink as SinkTrait};

pub struct Sink {
    inner: Box<dyn SinkTrait>,
}

impl Sink {
    pub fn new(requests: &[Backend]) -> Result<Sink, Error> {
        let mut sinks = vec![];
        for request in requests {
            let sink = factory(request)?;
            sinks.push(sink);
        }
        Ok(Sink {
            inner: Box::new(CompositeSink::new(sinks)),
        })
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn process(&mut self, cmd: Command) {
        self.inner.process(cmd)
    }
}

type Output = Box<dyn FnMut(Command)>;

/// An engine wired to an output channel
///
/// Every generate emits a fresh grid frame and every query emits the pulse
/// state followed by a frame with the queried step marked.
pub struct Machine {
    engine: Engine,
    output: Output,
}

impl Machine {
    pub fn new(output: Output) -> Machine {
        Machine {
            engine: Engine::new(),
            output: output,
        }
    }

    pub fn generate(&mut self, steps: i64, pulses: i64, rotation: i64) -> Result<(), Error> {
        self.engine.generate(steps, pulses, rotation)?;
        let frame = render::frame(self.engine.pattern(), None);
        (self.output)(Command::Frame(frame));
        Ok(())
    }

    pub fn query(&mut self, beat: i64) -> Beat {
        let beat = self.engine.query(beat);
        (self.output)(Command::Pulse(beat));
        let frame = render::frame(self.engine.pattern(), Some(beat.step));
        (self.output)(Command::Frame(frame));
        beat
    }

    pub fn pattern(&self) -> &[u8] {
        self.engine.pattern()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Simulation {
    pub steps: i64,
    pub pulses: i64,
    pub rotation: i64,
    pub beats: i64,
    pub pattern: Vec<u8>,
    pub commands: Vec<Command>,
}

/// Run a machine for a number of beats, recording everything it emits
pub fn simulate(steps: i64, pulses: i64, rotation: i64, beats: i64) -> Result<Simulation, Error> {
    let (sender, receiver) = channel();
    let mut machine = Machine::new(Box::new(move |cmd| sender.send(cmd).unwrap_or(())));

    machine.generate(steps, pulses, rotation)?;
    for beat in 0..beats {
        machine.query(beat);
    }

    let mut commands = Vec::new();
    while let Ok(cmd) = receiver.try_recv() {
        commands.push(cmd);
    }

    Ok(Simulation {
        steps: steps,
        pulses: pulses,
        rotation: rotation,
        beats: beats,
        pattern: machine.pattern().to_vec(),
        commands: commands,
    })
}
