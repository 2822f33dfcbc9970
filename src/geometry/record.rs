use super::Observation;
use crate::Measure;
use crate::Weight;
use serde::Deserialize;
use serde::Serialize;

/// A contact as stored in the bond database.
///
/// Both directions of the contact share the distance. The first
/// (angle, torsion) pair is always used; the second only when the
/// bond is chemically symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub d: Measure,
    pub angle1: Measure,
    pub tor1: Measure,
    pub angle2: Measure,
    pub tor2: Measure,
    #[serde(default = "unit")]
    pub weight: Weight,
}

fn unit() -> Weight {
    1.
}

impl Record {
    pub fn forward(&self) -> Observation {
        Observation::new(self.d, self.angle1, self.tor1).weighted(self.weight)
    }
    pub fn reverse(&self) -> Observation {
        Observation::new(self.d, self.angle2, self.tor2).weighted(self.weight)
    }
    /// Expand records into observations. Symmetric expansion lists every
    /// forward observation first, then every reverse one.
    pub fn expand(records: &[Self], symmetric: bool) -> Vec<Observation> {
        let forward = records.iter().map(Self::forward);
        if symmetric {
            forward.chain(records.iter().map(Self::reverse)).collect()
        } else {
            forward.collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(d: Measure) -> Record {
        Record {
            d,
            angle1: 160.,
            tor1: 10.,
            angle2: 150.,
            tor2: 200.,
            weight: 1.,
        }
    }

    #[test]
    fn asymmetric_expansion_is_one_to_one() {
        let records = [record(2.8), record(3.0)];
        let observations = Record::expand(&records, false);
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[1], Observation::new(3.0, 160., 10.));
    }

    #[test]
    fn symmetric_expansion_appends_reverse_directions() {
        let records = [record(2.8), record(3.0)];
        let observations = Record::expand(&records, true);
        assert_eq!(observations.len(), 4);
        assert_eq!(observations[0], Observation::new(2.8, 160., 10.));
        assert_eq!(observations[2], Observation::new(2.8, 150., 200.));
        assert_eq!(observations[3], Observation::new(3.0, 150., 200.));
    }

    #[test]
    fn weight_defaults_to_one() {
        let json = r#"{"d":2.9,"angle1":165,"tor1":5,"angle2":150,"tor2":185}"#;
        let record = serde_json::from_str::<Record>(json).expect("valid record");
        assert_eq!(record.weight, 1.);
    }
}
