use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a mode. Always in `[0, |modes|)` for a given problem, and the
/// mode list handed to the engine is indexed by it.
pub type ModeId = usize;

/// A discrete operating mode: a dynamics descriptor plus the fixed input
/// applied while the mode is active. The engine only ever reads `id`; the
/// [`Manager`](crate::Manager) interprets `system` and `input`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode<System, Input> {
    pub id: ModeId,
    pub system: System,
    pub input: Input,
}

/// Run-length record: `times` consecutive applications of `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeExecution {
    pub mode: ModeId,
    pub times: u64,
}

impl ModeExecution {
    pub fn new(mode: ModeId, times: u64) -> Self {
        Self { mode, times }
    }
}

impl fmt::Display for ModeExecution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}*{:<3}", self.mode, self.times)
    }
}

/// Appends one execution of `mode` to a run-length sequence.
///
/// If the tail record already refers to `mode` its count is incremented,
/// otherwise a fresh `(mode, 1)` record is pushed. This is the single
/// authorized mutation of a sequence and is what keeps it canonical: no two
/// adjacent records ever share a mode.
pub fn push_mode_execution(sequence: &mut Vec<ModeExecution>, mode: ModeId) {
    match sequence.last_mut() {
        Some(tail) if tail.mode == mode => tail.times += 1,
        _ => sequence.push(ModeExecution::new(mode, 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_coalesces_repeated_mode() {
        let mut seq = Vec::new();
        push_mode_execution(&mut seq, 2);
        push_mode_execution(&mut seq, 2);
        push_mode_execution(&mut seq, 2);
        assert_eq!(seq, vec![ModeExecution::new(2, 3)]);
    }

    #[test]
    fn push_starts_new_record_on_mode_change() {
        let mut seq = Vec::new();
        push_mode_execution(&mut seq, 0);
        push_mode_execution(&mut seq, 1);
        push_mode_execution(&mut seq, 0);
        assert_eq!(
            seq,
            vec![
                ModeExecution::new(0, 1),
                ModeExecution::new(1, 1),
                ModeExecution::new(0, 1),
            ]
        );
    }

    #[test]
    fn push_increments_zero_times_seed() {
        // Search seeds start as (mode, 0); the first real step must bump the
        // existing record instead of appending a second one.
        let mut seq = vec![ModeExecution::new(1, 0)];
        push_mode_execution(&mut seq, 1);
        assert_eq!(seq, vec![ModeExecution::new(1, 1)]);
    }
}
