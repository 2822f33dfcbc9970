//! Shared test data.
use crate::Observation;
use crate::Record;

/// Two well separated pairs of contacts.
pub fn scenario() -> Vec<Observation> {
    vec![
        Observation::new(2.8, 170., 10.),
        Observation::new(2.85, 168., 12.),
        Observation::new(3.5, 150., 190.),
        Observation::new(3.55, 148., 192.),
    ]
}

/// The same contacts as database records. The reverse direction of
/// each record mirrors its torsion across 180°.
pub fn records() -> Vec<Record> {
    scenario()
        .into_iter()
        .map(|o| Record {
            d: o.distance,
            angle1: o.angle,
            tor1: o.torsion,
            angle2: o.angle,
            tor2: 360. - o.torsion,
            weight: 1.,
        })
        .collect()
}
