use rosc::encoder;
use rosc::{OscMessage, OscPacket, OscType};

use crate::msgs::Command;
use crate::render::MARKER_COLOR;

/// Encode a command as a series of OSC datagrams
pub fn encode(cmd: &Command) -> Vec<Vec<u8>> {
    match *cmd {
        Command::Pulse(beat) => {
            vec![message(
                "/tala/pulse",
                vec![
                    // Pulse state
                    OscType::Int(i32::from(beat.pulse)),
                    // Step index
                    OscType::Int(beat.step as i32),
                ],
            )]
        }
        Command::Frame(ref frame) => {
            let mut buffs = Vec::with_capacity(frame.cells.len() + 2);
            buffs.push(message(
                "/tala/columns",
                vec![OscType::Int(frame.columns as i32)],
            ));
            for cell in &frame.cells {
                buffs.push(message(
                    "/tala/cell",
                    vec![
                        OscType::Int(cell.index as i32),
                        OscType::Int(i32::from(cell.value)),
                        OscType::Int(i32::from(cell.color[0])),
                        OscType::Int(i32::from(cell.color[1])),
                        OscType::Int(i32::from(cell.color[2])),
                    ],
                ));
            }
            if let Some(step) = frame.marker {
                buffs.push(message(
                    "/tala/marker",
                    vec![
                        OscType::Int(step as i32),
                        OscType::Int(i32::from(MARKER_COLOR[0])),
                        OscType::Int(i32::from(MARKER_COLOR[1])),
                        OscType::Int(i32::from(MARKER_COLOR[2])),
                    ],
                ));
            }
            buffs
        }
    }
}

fn message(addr: &str, args: Vec<OscType>) -> Vec<u8> {
    encoder::encode(&OscPacket::Message(OscMessage {
        addr: addr.to_string(),
        args: args,
    }))
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msgs::Beat;
    use crate::render::frame;

    #[test]
    fn test_pulse_is_one_datagram() {
        let cmd = Command::Pulse(Beat { step: 3, pulse: 1 });
        assert_eq!(encode(&cmd).len(), 1);
    }

    #[test]
    fn test_frame_datagram_counts() {
        let pattern = [1, 0, 0, 1];
        let plain = Command::Frame(frame(&pattern, None));
        let marked = Command::Frame(frame(&pattern, Some(0)));
        assert_eq!(encode(&plain).len(), 5);
        assert_eq!(encode(&marked).len(), 6);
    }
}
