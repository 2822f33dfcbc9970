//! Reference kernel parameters keyed by bond type.
use crate::Error;
use crate::Measure;
use crate::Point;
use crate::Result;
use crate::Summary;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Store of kernel rows per bond type.
///
/// Each row is `(distance, σd, angle, σa, torsion, σt)`-shaped: positions
/// 0, 2 and 4 are the reference geometry and the remaining fields are
/// carried along untouched. Persisted as a JSON object of arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kernels(BTreeMap<String, Vec<Vec<Measure>>>);

impl Kernels {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| anyhow::anyhow!("open kernels {}: {}", path.display(), e))?;
        let kernels = serde_json::from_reader::<_, Self>(std::io::BufReader::new(file))?;
        log::info!("{:<32}{:<32}", "loaded kernel bond types", kernels.0.len());
        Ok(kernels)
    }
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
    pub fn rows(&self, bond: &str) -> Result<&[Vec<Measure>]> {
        self.0
            .get(bond)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownBondType(bond.to_string()))
    }

    /// Reference geometry of each kernel row, in row order.
    pub fn centroids(&self, bond: &str) -> Result<Vec<Point>> {
        self.rows(bond)?
            .iter()
            .enumerate()
            .map(|(row, fields)| match fields.as_slice() {
                [d, _, a, _, t, ..] => Ok([*d, *a, *t]),
                _ => Err(Error::MalformedKernel {
                    bond: bond.to_string(),
                    row,
                    len: fields.len(),
                }),
            })
            .collect()
    }

    /// Record a run's clusters as the kernels of a bond type.
    /// Clusters without members are skipped.
    pub fn insert(&mut self, bond: impl Into<String>, summaries: &[Summary]) {
        let rows = summaries
            .iter()
            .filter(|s| s.population > 0.)
            .map(|s| s.kernel().to_vec())
            .collect();
        self.0.insert(bond.into(), rows);
    }
}
