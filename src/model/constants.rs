// Model constants
pub const RATING_BASE: f64 = 1000.0;
pub const RATING_VAR: f64 = 250.0;
pub const K_FACTOR: f64 = 250.0;
pub const DEFAULT_SAMPLES: usize = 1000;
// Points for ranks 0 (last) through 11 (first)
pub const POINTS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 15];
pub const TOTAL: u32 = points_total(&POINTS);
pub const FIELD_WIDTH: usize = POINTS.len();
// Season driver
pub const RACE_LENGTHS: [usize; 4] = [4, 6, 8, 12];
pub const DEFAULT_EVENTS: usize = 25;
// Rows simulated per shard. Each shard gets its own seeded generator.
pub const SHARD_SIZE: usize = 256;

const fn points_total(points: &[u32]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < points.len() {
        total += points[i];
        i += 1;
    }
    total
}
