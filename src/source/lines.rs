use super::Source;
use crate::Record;
use std::io::BufRead;
use std::path::PathBuf;

/// Newline-delimited JSON file, one [`Record`] per line.
/// Blank lines are skipped.
pub struct Lines(PathBuf);

impl Lines {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
    /// Parse records from any buffered reader.
    pub fn parse<R>(reader: R) -> anyhow::Result<Vec<Record>>
    where
        R: BufRead,
    {
        reader
            .lines()
            .enumerate()
            .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
            .map(|(i, line)| {
                let line = line?;
                serde_json::from_str::<Record>(&line)
                    .map_err(|e| anyhow::anyhow!("line {}: {}", i + 1, e))
            })
            .collect()
    }
}

impl Source for Lines {
    fn records(&self) -> anyhow::Result<Vec<Record>> {
        let file = std::fs::File::open(&self.0)
            .map_err(|e| anyhow::anyhow!("open {}: {}", self.0.display(), e))?;
        let records = Self::parse(std::io::BufReader::new(file))?;
        log::info!("{:<32}{:<32}", "records loaded", records.len());
        Ok(records)
    }
}
