use serde::Deserialize;
use std::fmt;

use crate::error::Error;
use crate::transform::{self, TransformFn};

/// The natural domain an edge weight is expressed in.
///
/// The domain decides which weights are valid at build time, which weight is
/// the identity (a hop that costs nothing), and how hop weights combine along
/// a path in natural units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightDomain {
    /// Probability of a safe traversal, valid in (0, 1]. Paths multiply.
    Probability,
    /// Ordinary non-negative finite cost. Paths add.
    Cost,
}

impl WeightDomain {
    /// Checks `weight` against the domain's valid range.
    ///
    /// # Errors
    /// Returns `Error::InvalidWeight` for NaN and for anything outside the range.
    /// A probability of exactly `0.0` is rejected since `-ln(0)` is infinite.
    pub fn validate(self, weight: f64) -> Result<(), Error> {
        let valid = match self {
            WeightDomain::Probability => weight > 0.0 && weight <= 1.0,
            WeightDomain::Cost => weight.is_finite() && weight >= 0.0,
        };

        if valid {
            Ok(())
        } else {
            Err(Error::InvalidWeight {
                weight,
                domain: self,
            })
        }
    }

    pub fn valid_range(self) -> &'static str {
        match self {
            WeightDomain::Probability => "(0, 1]",
            WeightDomain::Cost => "[0, inf)",
        }
    }

    /// The weight of a hop that neither helps nor hurts.
    pub fn identity_weight(self) -> f64 {
        match self {
            WeightDomain::Probability => 1.0,
            WeightDomain::Cost => 0.0,
        }
    }

    /// The canonical transform for this domain: `-ln` for probabilities,
    /// identity for costs.
    pub fn canonical_transform(self) -> TransformFn {
        match self {
            WeightDomain::Probability => transform::neg_ln,
            WeightDomain::Cost => transform::identity,
        }
    }

    /// Maps a distance produced with [`canonical_transform`](Self::canonical_transform)
    /// back into natural units.
    pub fn to_natural(self, distance: f64) -> f64 {
        match self {
            WeightDomain::Probability => transform::recover_probability(distance),
            WeightDomain::Cost => distance,
        }
    }

    /// Combines natural hop weights along a path (product or sum).
    pub fn accumulate(self, weights: &[f64]) -> f64 {
        match self {
            WeightDomain::Probability => weights.iter().product(),
            WeightDomain::Cost => weights.iter().sum(),
        }
    }
}

impl fmt::Display for WeightDomain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WeightDomain::Probability => write!(f, "probability"),
            WeightDomain::Cost => write!(f, "cost"),
        }
    }
}

/// Type alias for a single raw edge: (from, to, natural weight)
pub type Edge<K> = (K, K, f64);

/// Best path from a solve's source to one target.
///
/// Fields:
/// - `nodes`: node keys from source to target inclusive.
/// - `weights`: natural weight of each hop, `nodes.len() - 1` entries.
/// - `transformed_distance`: sum of transformed hop weights, as ranked by the solver.
/// - `domain`: natural domain of `weights`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath<K> {
    pub nodes: Vec<K>,
    pub weights: Vec<f64>,
    pub transformed_distance: f64,
    pub domain: WeightDomain,
}

impl<K> WeightedPath<K> {
    /// Number of edges on the path. Zero when source and target coincide.
    pub fn hops(&self) -> usize {
        self.weights.len()
    }

    /// The path's value in natural units, computed from the hop weights
    /// rather than inverted from the transformed distance.
    ///
    /// Example:
    /// ```text
    /// probability hops [0.9, 0.95] -> 0.855
    /// cost hops [2.0, 3.5]         -> 5.5
    /// ```
    pub fn natural_value(&self) -> f64 {
        self.domain.accumulate(&self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_domain_accepts_half_open_unit_interval() {
        let domain = WeightDomain::Probability;
        assert!(domain.validate(1.0).is_ok());
        assert!(domain.validate(0.5).is_ok());
        assert!(domain.validate(f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn probability_domain_rejects_zero_negative_and_above_one() {
        let domain = WeightDomain::Probability;
        for weight in [0.0, -0.1, 1.0001, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(domain.validate(weight), Err(Error::InvalidWeight { .. })),
                "weight {} should be rejected",
                weight
            );
        }
    }

    #[test]
    fn cost_domain_rejects_negative_and_non_finite() {
        let domain = WeightDomain::Cost;
        assert!(domain.validate(0.0).is_ok());
        assert!(domain.validate(1e9).is_ok());
        for weight in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(domain.validate(weight).is_err());
        }
    }

    #[test]
    fn canonical_transform_maps_identity_weight_to_zero() {
        for domain in [WeightDomain::Probability, WeightDomain::Cost] {
            let transform = domain.canonical_transform();
            assert_eq!(transform(domain.identity_weight()), 0.0);
        }
    }

    #[test]
    fn to_natural_inverts_canonical_transform() {
        let probability = WeightDomain::Probability;
        let transform = probability.canonical_transform();
        let distance = transform(0.9) + transform(0.95);
        assert!((probability.to_natural(distance) - 0.855).abs() < 1e-12);

        let cost = WeightDomain::Cost;
        assert_eq!(cost.to_natural(7.25), 7.25);
    }

    #[test]
    fn invalid_weight_message_names_the_range() {
        let err = WeightDomain::Probability.validate(0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Edge weight 0 is not valid in the probability domain (expected (0, 1])."
        );
    }

    #[test]
    fn weighted_path_natural_value_follows_domain() {
        let safest = WeightedPath {
            nodes: vec!["KTM", "JA", "PH"],
            weights: vec![0.9, 0.95],
            transformed_distance: 0.0,
            domain: WeightDomain::Probability,
        };
        assert!((safest.natural_value() - 0.855).abs() < 1e-12);
        assert_eq!(safest.hops(), 2);

        let cheapest = WeightedPath {
            nodes: vec![0, 1, 2],
            weights: vec![2.0, 3.5],
            transformed_distance: 5.5,
            domain: WeightDomain::Cost,
        };
        assert_eq!(cheapest.natural_value(), 5.5);
    }

    #[test]
    fn domain_deserializes_from_lowercase_name() {
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error as ValueError, StrDeserializer};

        let de: StrDeserializer<ValueError> = "cost".into_deserializer();
        assert_eq!(WeightDomain::deserialize(de).unwrap(), WeightDomain::Cost);
    }
}
