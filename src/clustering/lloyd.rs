use crate::KMEANS_ITERATIONS;
use crate::Label;
use crate::Measure;
use crate::Point;
use crate::Weight;

/// Lloyd's algorithm over whitened points.
///
/// Implementors own the points being labelled and the current centroids.
/// Seeding decides where the centroids start; the assignment and update
/// steps are the same in every mode.
///
/// # Implementation
///
/// - `neighbor()` — Nearest centroid of one point, ties to the lowest index
/// - `assign()` — Label every point
/// - `centroids()` — Mean (or weighted mean) of each cluster's points
/// - `rms()` — Root-mean-square distance to assigned centroids
pub trait Lloyd {
    /// Points receiving labels.
    fn points(&self) -> &[Point];
    /// Current centroid positions.
    fn kmeans(&self) -> &[Point];
    /// Per-point weights for centroid updates, if the run is weighted.
    fn weights(&self) -> Option<&[Weight]> {
        None
    }
    /// Maximum number of update steps.
    fn t(&self) -> usize {
        KMEANS_ITERATIONS
    }
    fn k(&self) -> usize {
        self.kmeans().len()
    }
    fn n(&self) -> usize {
        self.points().len()
    }
    fn point(&self, i: usize) -> &Point {
        &self.points()[i]
    }
    fn kmean(&self, j: usize) -> &Point {
        &self.kmeans()[j]
    }
    /// Euclidean distance.
    fn distance(&self, a: &Point, b: &Point) -> Measure {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<Measure>()
            .sqrt()
    }
    /// Nearest centroid for a point (O(K) distance calls).
    fn neighbor(&self, i: usize) -> (Label, Measure) {
        let ref x = self.point(i);
        self.kmeans()
            .iter()
            .enumerate()
            .map(|(j, c)| (j, self.distance(c, x)))
            .inspect(|(_, d)| debug_assert!(d.is_finite()))
            .fold((0, Measure::INFINITY), |best, next| match next.1 < best.1 {
                true => next,
                false => best,
            })
    }
    /// Assignment step.
    fn assign(&self) -> Vec<Label> {
        (0..self.n()).map(|i| self.neighbor(i).0).collect()
    }
    /// Update step. Clusters with no mass yield `None`.
    fn centroids(&self, labels: &[Label]) -> Vec<Option<Point>> {
        let mut sums = vec![[0.; 3]; self.k()];
        let mut mass = vec![0.; self.k()];
        for (i, j) in labels.iter().copied().enumerate() {
            let w = self.weights().map_or(1., |ws| ws[i]);
            let x = self.point(i);
            sums[j].iter_mut().zip(x.iter()).for_each(|(s, x)| *s += w * x);
            mass[j] += w;
        }
        sums.into_iter()
            .zip(mass)
            .map(|(sum, m)| (m > 0.).then(|| sum.map(|s| s / m)))
            .collect()
    }
    /// Root-mean-square distance to assigned centroids.
    fn rms(&self, labels: &[Label]) -> Measure {
        (labels
            .iter()
            .enumerate()
            .map(|(i, j)| self.distance(self.point(i), self.kmean(*j)))
            .map(|d| d * d)
            .sum::<Measure>()
            / self.n() as Measure)
            .sqrt()
    }
}
