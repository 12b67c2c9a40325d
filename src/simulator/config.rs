/// Configuration for a batch of simulated play sessions.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Independent players to simulate.
    pub num_runs: u32,
    /// Actions each simulated player takes.
    pub actions_per_run: u32,
    /// Base seed; run `i` uses `seed + i`. `None` draws from entropy.
    pub seed: Option<u64>,
    /// 0 = summary only, 1 = per-run lines.
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            actions_per_run: 2_000,
            seed: None,
            verbosity: 0,
        }
    }
}

impl SimConfig {
    /// A small smoke-test configuration.
    pub fn quick() -> Self {
        Self {
            num_runs: 10,
            actions_per_run: 500,
            ..Self::default()
        }
    }
}
