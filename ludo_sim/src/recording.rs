use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use ludo::{Input, Snapshot};
use serde::{Deserialize, Serialize};

/// One applied input and the observable state right after it.
#[derive(Serialize, Deserialize)]
pub struct Step {
    pub input: Input,
    pub state: Snapshot,
}

/// Writes one JSON file per game into a directory, for replay and
/// debugging. Recordings are never read back by the engine.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    steps: Vec<Step>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            steps: Vec::new(),
        })
    }

    pub fn store_step(&mut self, input: Input, state: Snapshot) {
        self.steps.push(Step { input, state });
    }

    pub fn write_game_recording(&mut self) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(writer, &std::mem::take(&mut self.steps))?;
        self.num += 1;
        Ok(())
    }
}
