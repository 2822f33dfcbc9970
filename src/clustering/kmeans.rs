use super::*;
use crate::Label;
use crate::Point;
use crate::Result;
use crate::Weight;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Owned state of one clustering run.
///
/// Both modes share this loop. Unsupervised runs seed from random
/// observations; reference-seeded runs start at whitened kernel points
/// that are never themselves labelled. Centroids move freely after
/// the first update either way.
pub struct KMeans {
    points: Vec<Point>,
    kmeans: Vec<Point>,
    weights: Option<Vec<Weight>>,
    rng: SmallRng,
    t: usize,
}

impl Lloyd for KMeans {
    fn points(&self) -> &[Point] {
        &self.points
    }
    fn kmeans(&self) -> &[Point] {
        &self.kmeans
    }
    fn weights(&self) -> Option<&[Weight]> {
        self.weights.as_deref()
    }
    fn t(&self) -> usize {
        self.t
    }
}

impl KMeans {
    /// Cluster already-whitened points.
    pub fn new(points: Vec<Point>, seeding: Seeding, seed: u64) -> Result<Self> {
        seeding.validate(points.len())?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let kmeans = seeding.init(&points, &mut rng);
        Ok(Self {
            points,
            kmeans,
            weights: None,
            rng,
            t: crate::KMEANS_ITERATIONS,
        })
    }

    /// Whiten raw observations and seed from `k` of them.
    pub fn unsupervised(raw: &[Point], k: usize, whitening: Whitening, seed: u64) -> Result<Self> {
        let seeding = Seeding::Points(k);
        seeding.validate(raw.len())?;
        let scaler = whitening.fit(raw)?;
        Self::new(scaler.transform(raw), seeding, seed)
    }

    /// Whiten kernels and observations with one shared scaler, then start
    /// the centroids at the kernels. Only the observations are labelled.
    pub fn seeded(kernels: &[Point], raw: &[Point], whitening: Whitening, seed: u64) -> Result<Self> {
        Seeding::Matrix(kernels.to_vec()).validate(raw.len())?;
        let ref joint = kernels
            .iter()
            .chain(raw.iter())
            .copied()
            .collect::<Vec<Point>>();
        let whitened = whitening.fit(joint)?.transform(joint);
        let (seeds, points) = whitened.split_at(kernels.len());
        Self::new(points.to_vec(), Seeding::Matrix(seeds.to_vec()), seed)
    }

    /// Weight centroid updates by redundancy counts, one per point.
    pub fn with_weights(self, weights: Vec<Weight>) -> Self {
        debug_assert!(weights.len() == self.points.len());
        Self {
            weights: Some(weights),
            ..self
        }
    }

    pub fn with_iterations(self, t: usize) -> Self {
        Self { t, ..self }
    }

    /// One update step. Empty clusters restart at a random observation.
    pub fn step(&mut self, labels: &[Label]) {
        let kmeans = self
            .centroids(labels)
            .into_iter()
            .enumerate()
            .map(|(j, c)| c.unwrap_or_else(|| self.heal(j)))
            .collect::<Vec<Point>>();
        self.kmeans = kmeans;
    }

    fn heal(&mut self, j: usize) -> Point {
        let i = self.rng.random_range(0..self.points.len());
        log::debug!("{:<32}{:<32}", "reseeding empty cluster", format!("{} <- {}", j, i));
        self.points[i]
    }

    /// Iterate until labels stop changing or `t` updates have run.
    ///
    /// Returns final centroids (whitened units) and labels consistent
    /// with them. A cluster can still end up empty if two centroids
    /// coincide; it is kept, with no members.
    pub fn fit(mut self) -> (Vec<Point>, Assignment) {
        log::info!("{:<32}{:<32}", "kmeans iterating", format!("k = {}, n = {}", self.k(), self.n()));
        let mut labels = self.assign();
        for i in 0..self.t() {
            self.step(&labels);
            let next = self.assign();
            log::debug!("{:<32}{:<32}", format!("{:3}", i), format!("rms {:.6}", self.rms(&next)));
            if next == labels {
                log::info!("{:<32}{:<32}", "kmeans converged", i + 1);
                break;
            }
            labels = next;
        }
        let k = self.k();
        (self.kmeans, Assignment::new(labels, k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn scenario() -> Vec<Point> {
        vec![
            [2.8, 170., 10.],
            [2.85, 168., 12.],
            [3.5, 150., 190.],
            [3.55, 148., 192.],
        ]
    }

    /// Two tight groups far apart, with some jitter.
    fn blobs(n: usize, seed: u64) -> Vec<Point> {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        (0..n)
            .map(|i| match i % 2 {
                0 => [2.8, 165., 0.],
                _ => [3.4, 130., 180.],
            })
            .map(|[d, a, t]| {
                [
                    d + rng.random_range(-0.05..0.05),
                    a + rng.random_range(-5.0..5.0),
                    t + rng.random_range(-20.0..20.0),
                ]
            })
            .collect()
    }

    #[test]
    fn separates_the_two_pairs() {
        for seed in 0..16 {
            let km = KMeans::unsupervised(&scenario(), 2, Whitening::Deviation, seed).expect("valid");
            let (_, assignment) = km.fit();
            let labels = assignment.labels();
            assert_eq!(labels[0], labels[1], "seed {}", seed);
            assert_eq!(labels[2], labels[3], "seed {}", seed);
            assert_ne!(labels[0], labels[2], "seed {}", seed);
        }
    }

    #[test]
    fn labels_stay_in_range() {
        let ref points = blobs(200, 1);
        for k in 1..=6 {
            let (_, assignment) = KMeans::unsupervised(points, k, Whitening::Deviation, 3)
                .expect("valid")
                .fit();
            assert_eq!(assignment.len(), 200);
            assert_eq!(assignment.k(), k);
            assert!(assignment.labels().iter().all(|j| *j < k));
        }
    }

    #[test]
    fn same_seed_same_result() {
        let ref points = blobs(100, 2);
        let run = || {
            KMeans::unsupervised(points, 3, Whitening::Deviation, 11)
                .expect("valid")
                .fit()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let km = KMeans::new(
            vec![[0., 0., 0.], [5., 0., 0.]],
            Seeding::Matrix(vec![[1., 0., 0.], [-1., 0., 0.]]),
            0,
        )
        .expect("valid");
        assert_eq!(km.neighbor(0), (0, 1.));
    }

    #[test]
    fn kernel_seeds_are_not_labelled() {
        let kernels = [[2.8, 169., 11.], [3.5, 149., 191.]];
        let (kmeans, assignment) = KMeans::seeded(&kernels, &scenario(), Whitening::Deviation, 0)
            .expect("valid")
            .fit();
        assert_eq!(kmeans.len(), 2);
        assert_eq!(assignment.len(), 4);
        assert_eq!(assignment.labels(), &[0, 0, 1, 1]);
        assert_eq!(assignment.distinct(), 2);
    }

    #[test]
    fn kernel_order_fixes_label_order() {
        let kernels = [[3.5, 149., 191.], [2.8, 169., 11.]];
        let (_, assignment) = KMeans::seeded(&kernels, &scenario(), Whitening::Deviation, 0)
            .expect("valid")
            .fit();
        assert_eq!(assignment.labels(), &[1, 1, 0, 0]);
    }

    #[test]
    fn too_many_kernels_for_the_data() {
        let kernels = [[2.8, 169., 11.]; 5];
        assert!(matches!(
            KMeans::seeded(&kernels, &scenario(), Whitening::Deviation, 0),
            Err(Error::InvalidClusterCount { k: 5, n: 4 })
        ));
    }

    #[test]
    fn one_point_per_cluster_at_the_minimum() {
        let points = &scenario()[2..];
        let (_, assignment) = KMeans::unsupervised(points, 2, Whitening::Deviation, 5)
            .expect("valid")
            .fit();
        assert_eq!(assignment.counts(), vec![1, 1]);
    }

    #[test]
    fn empty_clusters_are_reseeded() {
        let points = vec![[0., 0., 0.], [0.1, 0., 0.], [10., 0., 0.], [10.1, 0., 0.]];
        let mut km = KMeans::new(
            points.clone(),
            Seeding::Matrix(vec![[0., 0., 0.], [100., 0., 0.], [5., 0., 0.]]),
            0,
        )
        .expect("valid");
        let labels = km.assign();
        assert_eq!(labels, vec![0, 0, 2, 2]);
        km.step(&labels);
        assert!(points.contains(km.kmean(1)));
    }

    #[test]
    fn weights_pull_centroids() {
        let km = KMeans::new(
            vec![[0., 0., 0.], [4., 0., 0.]],
            Seeding::Matrix(vec![[1., 0., 0.]]),
            0,
        )
        .expect("valid")
        .with_weights(vec![3., 1.]);
        assert_eq!(km.centroids(&[0, 0]), vec![Some([1., 0., 0.])]);
    }

    #[test]
    fn iteration_cap_is_respected() {
        let ref points = blobs(50, 4);
        let (_, assignment) = KMeans::unsupervised(points, 4, Whitening::Deviation, 0)
            .expect("valid")
            .with_iterations(0)
            .fit();
        assert_eq!(assignment.len(), 50);
    }
}
