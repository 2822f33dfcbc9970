//! The single entry point from raw records to cluster summaries.
use crate::Assignment;
use crate::Bounds;
use crate::Config;
use crate::Error;
use crate::Features;
use crate::KMeans;
use crate::Kernels;
use crate::Observation;
use crate::Record;
use crate::Result;
use crate::Summary;

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Rows that survived cleaning, shifting and filtering, in label order.
    pub features: Features,
    /// Bounds with every unset side resolved against the data.
    pub bounds: Bounds,
    pub assignment: Assignment,
    /// One per cluster id, in id order.
    pub summaries: Vec<Summary>,
}

/// Expand records (both directions when symmetric) and cluster them.
pub fn cluster(records: &[Record], config: &Config, kernels: &Kernels) -> Result<Clustering> {
    let observations = Record::expand(records, config.symmetric);
    log::info!("{:<32}{:<32}", "observations read", observations.len());
    cluster_observations(observations, config, kernels)
}

/// Shift → filter → whiten → cluster → summarize.
///
/// Every fatal condition is raised before the Lloyd loop starts.
pub fn cluster_observations(
    observations: Vec<Observation>,
    config: &Config,
    kernels: &Kernels,
) -> Result<Clustering> {
    let seeds = match config.bond_type.as_deref() {
        Some(bond) => Some(kernels.centroids(bond)?),
        None => None,
    };
    let features = Features::from(observations).finite();
    let features = match config.weighted {
        true => features.weighted(),
        false => features,
    }
    .shift(config.shift());
    let (features, bounds) = config.bounds().filter(features);
    if features.is_empty() {
        return Err(Error::insufficient_data(1, 0));
    }
    let ref raw = features.points();
    let kmeans = match seeds {
        Some(ref kernels) => KMeans::seeded(kernels, raw, config.whitening, config.seed)?,
        None => KMeans::unsupervised(raw, config.k, config.whitening, config.seed)?,
    }
    .with_iterations(config.iterations);
    let kmeans = match config.weighted {
        true => kmeans.with_weights(features.weight().to_vec()),
        false => kmeans,
    };
    let (_, assignment) = kmeans.fit();
    let summaries = Summary::summarize(&features, &assignment, config.weighted);
    Ok(Clustering {
        features,
        bounds,
        assignment,
        summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Interval;
    use crate::fixtures;

    fn near(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn two_pairs_two_clusters() {
        let config = Config::default();
        let run = cluster_observations(fixtures::scenario(), &config, &Kernels::default())
            .expect("clusters");
        assert_eq!(run.summaries.len(), 2);
        assert!(run.summaries.iter().all(|s| s.population == 50.));
        let mut centers = run.summaries.iter().map(|s| s.center()).collect::<Vec<_>>();
        centers.sort_by(|a, b| a[0].total_cmp(&b[0]));
        assert!(near(centers[0][0], 2.825) && near(centers[0][1], 169.) && near(centers[0][2], 11.));
        assert!(near(centers[1][0], 3.525) && near(centers[1][1], 149.) && near(centers[1][2], 191.));
    }

    #[test]
    fn filtered_to_one_pair_still_splits() {
        let config = Config {
            d_bounds: Interval::new(Some(3.0), None),
            ..Config::default()
        };
        let run = cluster_observations(fixtures::scenario(), &config, &Kernels::default())
            .expect("clusters");
        assert_eq!(run.features.distance(), &[3.5, 3.55]);
        assert_eq!(run.assignment.counts(), vec![1, 1]);
        assert!(run.summaries.iter().all(|s| s.distance.spread == 0.));
        assert!(run.summaries.iter().all(|s| s.population == 50.));
    }

    #[test]
    fn nothing_left_after_filtering() {
        let config = Config {
            a_bounds: Interval::new(Some(175.), None),
            ..Config::default()
        };
        assert_eq!(
            cluster_observations(fixtures::scenario(), &config, &Kernels::default()),
            Err(Error::insufficient_data(1, 0))
        );
    }

    #[test]
    fn more_clusters_than_rows() {
        let config = Config {
            k: 5,
            ..Config::default()
        };
        assert_eq!(
            cluster_observations(fixtures::scenario(), &config, &Kernels::default()),
            Err(Error::invalid_cluster_count(5, 4))
        );
    }

    #[test]
    fn unknown_bond_type_fails_before_filtering() {
        let config = Config {
            bond_type: Some("NH-O".into()),
            a_bounds: Interval::new(Some(175.), None),
            ..Config::default()
        };
        assert_eq!(
            cluster_observations(fixtures::scenario(), &config, &Kernels::default()),
            Err(Error::UnknownBondType("NH-O".into()))
        );
    }

    #[test]
    fn kernel_seeded_run_uses_kernel_count() {
        let mut kernels = Kernels::default();
        let seed = Config::default();
        let first = cluster_observations(fixtures::scenario(), &seed, &kernels).expect("clusters");
        kernels.insert("OH-O", &first.summaries);
        let config = Config {
            bond_type: Some("OH-O".into()),
            k: 7,
            ..Config::default()
        };
        let run = cluster_observations(fixtures::scenario(), &config, &kernels).expect("clusters");
        assert_eq!(run.assignment.k(), 2);
        assert_eq!(run.assignment.len(), 4);
        assert_eq!(run.assignment.distinct(), 2);
        for (a, b) in first.summaries.iter().zip(run.summaries.iter()) {
            assert!(near(a.distance.mean, b.distance.mean));
        }
    }

    #[test]
    fn symmetric_records_double_the_rows() {
        let config = Config {
            symmetric: true,
            ..Config::default()
        };
        let run = cluster(&fixtures::records(), &config, &Kernels::default()).expect("clusters");
        assert_eq!(run.features.len(), 8);
        assert_eq!(run.assignment.len(), 8);
    }

    #[test]
    fn torsion_shift_joins_a_split_cluster() {
        let observations = vec![
            Observation::new(2.8, 170., 350.),
            Observation::new(2.85, 168., 355.),
            Observation::new(2.82, 169., 5.),
            Observation::new(2.83, 171., 10.),
            Observation::new(3.5, 120., 180.),
            Observation::new(3.55, 118., 185.),
        ];
        let config = Config {
            torsion_shift: Some(180.),
            ..Config::default()
        };
        let run = cluster_observations(observations, &config, &Kernels::default()).expect("clusters");
        assert_eq!(run.features.torsion(), &[350., 355., 365., 370., 180., 185.]);
        let labels = run.assignment.labels();
        assert!(labels[..4].iter().all(|j| *j == labels[0]));
        assert_ne!(labels[0], labels[4]);
    }

    #[test]
    fn non_finite_rows_are_dropped_not_fatal() {
        let mut observations = fixtures::scenario();
        observations.push(Observation::new(f64::NAN, 150., 10.));
        let run = cluster_observations(observations, &Config::default(), &Kernels::default())
            .expect("clusters");
        assert_eq!(run.features.len(), 4);
    }

    #[test]
    fn weighted_runs_weight_the_means() {
        let mut observations = fixtures::scenario();
        observations[3] = observations[3].weighted(3.);
        let config = Config {
            weighted: true,
            ..Config::default()
        };
        let run = cluster_observations(observations, &config, &Kernels::default()).expect("clusters");
        let far = run
            .summaries
            .iter()
            .find(|s| s.distance.mean > 3.)
            .expect("far cluster");
        assert!(near(far.torsion.mean, 191.5));
        assert!(near(far.population, 400. / 6.));
    }

    #[test]
    fn zero_weight_rows_leave_weighted_runs() {
        let mut observations = fixtures::scenario();
        observations[2] = observations[2].weighted(0.);
        observations.push(Observation::new(3.52, 149., 191.));
        let config = Config {
            weighted: true,
            ..Config::default()
        };
        let run = cluster_observations(observations, &config, &Kernels::default()).expect("clusters");
        assert_eq!(run.features.len(), 4);
        assert_eq!(run.features.distance(), &[2.8, 2.85, 3.55, 3.52]);
        assert!(run.summaries.iter().all(|s| s.distance.mean.is_finite()));
        assert!(run.summaries.iter().all(|s| near(s.population, 50.)));
    }

    #[test]
    fn all_zero_weights_are_insufficient() {
        let observations = fixtures::scenario()
            .into_iter()
            .map(|o| o.weighted(0.))
            .collect::<Vec<Observation>>();
        let config = Config {
            weighted: true,
            ..Config::default()
        };
        assert_eq!(
            cluster_observations(observations, &config, &Kernels::default()),
            Err(Error::insufficient_data(1, 0))
        );
    }

    #[test]
    fn zero_weights_are_kept_when_unweighted() {
        let mut observations = fixtures::scenario();
        observations[2] = observations[2].weighted(0.);
        let run = cluster_observations(observations, &Config::default(), &Kernels::default())
            .expect("clusters");
        assert_eq!(run.features.len(), 4);
    }
}
