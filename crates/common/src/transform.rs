//! Edge-weight transforms that move a natural-domain weight into an additive,
//! non-negative distance suitable for greedy shortest-path relaxation.
//!
//! A transform must be monotone ("better natural value => smaller distance")
//! and must send the domain's identity weight to `0.0`.

/// Signature shared by every transform accepted by the solver.
pub type TransformFn = fn(f64) -> f64;

/// `w -> -ln(w)`.
///
/// Maximizing a product of probabilities in (0, 1] is the same as minimizing
/// the sum of their negative logarithms, and `-ln(p) >= 0` on that range.
pub fn neg_ln(weight: f64) -> f64 {
    -weight.ln()
}

/// `w -> w`, for weights that are already additive costs.
pub fn identity(weight: f64) -> f64 {
    weight
}

/// Inverse of [`neg_ln`] applied to a summed distance: `e^(-distance)`.
///
/// Example:
/// ```text
/// hops 0.9 and 0.95 -> distance 0.1054 + 0.0513 = 0.1567
/// recover_probability(0.1567) = 0.855
/// ```
pub fn recover_probability(distance: f64) -> f64 {
    (-distance).exp()
}
