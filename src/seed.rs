use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::BoardConfig;
use crate::employee::Employee;
use crate::error::BoardResult;
use crate::leave::Leave;
use crate::store::ScheduleStore;
use crate::task::Task;

const SAMPLE_DATA: &str = include_str!("../data/sample_data.json");

/// Initial records a store starts from. Nothing is ever written back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub leaves: Vec<Leave>,
}

impl SeedData {
    pub fn sample() -> BoardResult<Self> {
        Ok(serde_json::from_str(SAMPLE_DATA)?)
    }

    pub fn load_from_json<P: AsRef<Path>>(path: P) -> BoardResult<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn into_store(self) -> ScheduleStore {
        info!(
            employees = self.employees.len(),
            tasks = self.tasks.len(),
            leaves = self.leaves.len(),
            "seeding schedule store"
        );
        ScheduleStore::from_parts(self.employees, self.tasks, self.leaves)
    }
}

impl ScheduleStore {
    /// A store holding the bundled sample records.
    pub fn with_sample_data() -> BoardResult<Self> {
        Ok(SeedData::sample()?.into_store())
    }

    /// Seeds from `config.seed_path`, falling back to the bundled samples.
    pub fn from_config(config: &BoardConfig) -> BoardResult<Self> {
        let seed = match &config.seed_path {
            Some(path) => SeedData::load_from_json(path)?,
            None => SeedData::sample()?,
        };
        Ok(seed.into_store())
    }
}
