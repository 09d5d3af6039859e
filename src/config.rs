use serde::Serialize;

/// Number of questions drawn per session.
pub const NUM_QUESTIONS: usize = 30;

/// Question bank file name, looked up under the resource root.
pub const BANK_FILE: &str = "A类题库(v20211022).txt";

/// Results directory, also used as the report file-name suffix.
pub const RESULTS_DIR: &str = "做题记录";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrillConfig {
    pub num_questions: usize,
    pub bank_file: String,
    pub results_dir: String,
    /// `Some(seed)` makes bank shuffling and sampling reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        DrillConfig {
            num_questions: NUM_QUESTIONS,
            bank_file: BANK_FILE.to_string(),
            results_dir: RESULTS_DIR.to_string(),
            rng_seed: None,
        }
    }
}

impl DrillConfig {
    /// Build the session RNG, seeded when `rng_seed` is set.
    pub fn rng(&self) -> rand::rngs::StdRng {
        use rand::SeedableRng;
        match self.rng_seed {
            Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
            None       => rand::rngs::StdRng::from_entropy(),
        }
    }
}
