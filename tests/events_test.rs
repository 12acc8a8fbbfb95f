extern crate tala;

use std::sync::mpsc::{channel, Receiver};

use tala::{frame, Beat, Command, Machine};

fn machine() -> (Machine, Receiver<Command>) {
    let (sender, receiver) = channel();
    let machine = Machine::new(Box::new(move |cmd| sender.send(cmd).unwrap_or(())));
    (machine, receiver)
}

fn drain(receiver: &Receiver<Command>) -> Vec<Command> {
    let out: Vec<Command> = Vec::new();
    receiver.try_iter().fold(out, |mut out, cmd| {
        out.push(cmd);
        out
    })
}

#[test]
fn test_generate_emits_a_frame() {
    let (mut machine, receiver) = machine();
    machine.generate(8, 3, 0).unwrap();

    let cmds = drain(&receiver);
    assert_eq!(
        cmds,
        vec![Command::Frame(frame(&[1, 0, 0, 1, 0, 0, 1, 0], None))]
    );
}

#[test]
fn test_query_emits_pulse_then_frame() {
    let (mut machine, receiver) = machine();
    machine.generate(4, 2, 0).unwrap();
    drain(&receiver);

    let beat = machine.query(0);
    assert_eq!(beat, Beat { step: 0, pulse: 1 });

    let cmds = drain(&receiver);
    assert_eq!(
        cmds,
        vec![
            Command::Pulse(Beat { step: 0, pulse: 1 }),
            Command::Frame(frame(&[1, 0, 1, 0], Some(0))),
        ]
    );
}

#[test]
fn test_marker_follows_the_beat() {
    let (mut machine, receiver) = machine();
    machine.generate(4, 2, 0).unwrap();
    drain(&receiver);

    machine.query(5);
    let cmds = drain(&receiver);
    assert_eq!(
        cmds,
        vec![
            Command::Pulse(Beat { step: 1, pulse: 0 }),
            Command::Frame(frame(&[1, 0, 1, 0], Some(1))),
        ]
    );
}

#[test]
fn test_machine_starts_silent() {
    let (mut machine, receiver) = machine();

    let beat = machine.query(2);
    assert_eq!(beat, Beat { step: 2, pulse: 0 });

    let cmds = drain(&receiver);
    assert_eq!(
        cmds,
        vec![
            Command::Pulse(Beat { step: 2, pulse: 0 }),
            Command::Frame(frame(&[0, 0, 0, 0], Some(2))),
        ]
    );
}

#[test]
fn test_failed_generate_emits_nothing() {
    let (mut machine, receiver) = machine();
    assert!(machine.generate(0, 1, 0).is_err());

    assert_eq!(drain(&receiver), vec![]);
    assert_eq!(machine.pattern(), &[0, 0, 0, 0]);
}
