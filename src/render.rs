pub type Rgb = [u8; 3];

pub const PULSE_COLOR: Rgb = [0, 0, 0];
pub const REST_COLOR: Rgb = [255, 255, 255];
pub const MARKER_COLOR: Rgb = [150, 150, 150];

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Cell {
    pub index: usize,
    pub value: u8,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub columns: usize,
    pub cells: Vec<Cell>,
    pub marker: Option<usize>,
}

/// Project a pattern into a paintable grid of colored cells
pub fn frame(pattern: &[u8], marker: Option<usize>) -> Frame {
    let cells = pattern
        .iter()
        .enumerate()
        .map(|(i, &val)| Cell {
            index: i,
            value: val,
            color: if val > 0 { PULSE_COLOR } else { REST_COLOR },
        })
        .collect();

    Frame {
        columns: pattern.len(),
        cells: cells,
        marker: marker,
    }
}
