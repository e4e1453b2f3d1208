pub mod dsp;
pub mod engine; // Stateful signal engine: graph lifecycle and live updates
pub mod graph; // Composable audio graph nodes
pub mod presets;

pub const MAX_BLOCK_SIZE: usize = 2048;
