//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements initial-solution generation, neighbor generation
/// and cost evaluation. The SA framework handles temperature management,
/// the acceptance criterion and cooling.
///
/// # Minimization
///
/// SA minimizes the cost. Costs are non-negative integers: violation
/// counts, where 0 means every constraint holds.
///
/// # Examples
///
/// ```ignore
/// struct Parity { n: usize }
///
/// impl SaProblem for Parity {
///     type Solution = Vec<bool>;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
///         (0..self.n).map(|_| rng.random()).collect()
///     }
///
///     fn cost(&self, bits: &Vec<bool>) -> u64 {
///         bits.iter().filter(|&&b| b).count() as u64
///     }
///
///     fn neighbor<R: Rng>(&self, bits: &Vec<bool>, rng: &mut R) -> Vec<bool> {
///         let mut new = bits.clone();
///         let i = rng.random_range(0..new.len());
///         new[i] = !new[i];
///         new
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> u64;

    /// Generates a neighbor of the current solution.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
