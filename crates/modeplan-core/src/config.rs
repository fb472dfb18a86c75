use clap::Args;
use serde::{Deserialize, Serialize};

/// Knobs of the multi-resolution search. Managers typically embed one of
/// these and expose its fields through the accessor methods of
/// [`Manager`](crate::Manager).
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchParams {
    #[arg(
        long,
        default_value_t = 0.1,
        help = "Duration of one simulation step, in seconds"
    )]
    pub time_delta: f64,

    #[arg(
        long,
        default_value_t = 10.0,
        help = "Maximum simulated horizon, in seconds"
    )]
    pub time_max: f64,

    #[arg(
        long,
        default_value_t = 0.01,
        help = "Distance below which a solution counts as complete"
    )]
    pub threshold: f64,

    #[arg(
        long,
        default_value_t = 4,
        help = "Stride-halving levels; the search starts at stride 2^(n-1)"
    )]
    pub iterations: u32,

    #[arg(long, help = "Wall-clock budget for the whole search, in milliseconds")]
    pub timeout_ms: Option<u64>,

    #[arg(
        long,
        default_value_t = false,
        help = "Pause after each stride level and wait for a key"
    )]
    pub interactive: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            time_delta: 0.1,
            time_max: 10.0,
            threshold: 0.01,
            iterations: 4,
            timeout_ms: None,
            interactive: false,
        }
    }
}
