/// Distribute pulses as evenly as possible across a number of steps
///
/// Accumulator variant of the Euclidean rhythm family. See [1]
///
///   [1]: Godfried Toussaint. The Euclidean Algorithm Generates
///        Traditional Musical Rhythms. BRIDGES, Banff, Canada, 2005.
pub fn distribute(steps: usize, pulses: i64) -> Vec<u8> {
    let window = steps as i64;
    let mut bucket: i64 = 0;
    let mut pattern = Vec::with_capacity(steps);

    for _ in 0..steps {
        bucket = bucket.saturating_add(pulses);
        if bucket >= window {
            bucket -= window;
            pattern.push(1);
        } else {
            pattern.push(0);
        }
    }

    pattern
}

/// Return a copy of a pattern, shifted right by an amount of steps
pub fn rotate(pattern: &[u8], amount: usize) -> Vec<u8> {
    if pattern.is_empty() {
        return vec![];
    }

    let len = pattern.len();
    let offset = len - (amount % len);
    (0..len).map(|i| pattern[(i + offset) % len]).collect()
}
