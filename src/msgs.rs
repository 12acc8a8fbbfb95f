use crate::render::Frame;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Beat {
    pub step: usize,
    pub pulse: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Command {
    Pulse(Beat),
    Frame(Frame),
}
