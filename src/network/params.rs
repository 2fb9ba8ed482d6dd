use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Names the nine scalar parameters of the 2-2-1 network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Param {
    I1H1,
    I2H1,
    BiasH1,
    I1H2,
    I2H2,
    BiasH2,
    H1O1,
    H2O1,
    BiasO1,
}

impl Param {
    pub const ALL: [Param; 9] = [
        Param::I1H1,
        Param::I2H1,
        Param::BiasH1,
        Param::I1H2,
        Param::I2H2,
        Param::BiasH2,
        Param::H1O1,
        Param::H2O1,
        Param::BiasO1,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Param::I1H1 => "i1_h1",
            Param::I2H1 => "i2_h1",
            Param::BiasH1 => "bias_h1",
            Param::I1H2 => "i1_h2",
            Param::I2H2 => "i2_h2",
            Param::BiasH2 => "bias_h2",
            Param::H1O1 => "h1_o1",
            Param::H2O1 => "h2_o1",
            Param::BiasO1 => "bias_o1",
        }
    }
}

/// One value per [`Param`].
///
/// Used both for the trainable weights and for a batch's accumulated
/// gradients; the two share a shape so an update is a field-wise add.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParamSet {
    pub i1_h1: f64,
    pub i2_h1: f64,
    pub bias_h1: f64,
    pub i1_h2: f64,
    pub i2_h2: f64,
    pub bias_h2: f64,
    pub h1_o1: f64,
    pub h2_o1: f64,
    pub bias_o1: f64,
}

pub type WeightSet = ParamSet;
pub type GradientSet = ParamSet;

/// Upper bound (exclusive) of the initial weight distribution.
const INIT_SCALE: f64 = 0.01;

impl ParamSet {
    pub fn zeros() -> ParamSet {
        ParamSet::default()
    }

    /// Every parameter set to `value`.
    pub fn uniform(value: f64) -> ParamSet {
        let mut res = ParamSet::zeros();
        for param in Param::ALL {
            res[param] = value;
        }
        res
    }

    /// Draws each parameter independently from U[0, 0.01).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> ParamSet {
        let mut res = ParamSet::zeros();
        for param in Param::ALL {
            res[param] = rng.gen::<f64>() * INIT_SCALE;
        }
        res
    }

    /// Reproducible initialisation for a given seed.
    pub fn seeded(seed: u64) -> ParamSet {
        ParamSet::random(&mut StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> ParamSet {
        ParamSet::random(&mut rand::thread_rng())
    }

    /// `(param, value)` pairs in [`Param::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Param, f64)> + '_ {
        Param::ALL.into_iter().map(move |param| (param, self[param]))
    }
}

impl Index<Param> for ParamSet {
    type Output = f64;

    fn index(&self, param: Param) -> &f64 {
        match param {
            Param::I1H1 => &self.i1_h1,
            Param::I2H1 => &self.i2_h1,
            Param::BiasH1 => &self.bias_h1,
            Param::I1H2 => &self.i1_h2,
            Param::I2H2 => &self.i2_h2,
            Param::BiasH2 => &self.bias_h2,
            Param::H1O1 => &self.h1_o1,
            Param::H2O1 => &self.h2_o1,
            Param::BiasO1 => &self.bias_o1,
        }
    }
}

impl IndexMut<Param> for ParamSet {
    fn index_mut(&mut self, param: Param) -> &mut f64 {
        match param {
            Param::I1H1 => &mut self.i1_h1,
            Param::I2H1 => &mut self.i2_h1,
            Param::BiasH1 => &mut self.bias_h1,
            Param::I1H2 => &mut self.i1_h2,
            Param::I2H2 => &mut self.i2_h2,
            Param::BiasH2 => &mut self.bias_h2,
            Param::H1O1 => &mut self.h1_o1,
            Param::H2O1 => &mut self.h2_o1,
            Param::BiasO1 => &mut self.bias_o1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_complete() {
        let names: HashSet<&str> = Param::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), 9);
        assert!(names.contains("bias_o1"));
        assert!(names.contains("i2_h2"));
    }

    #[test]
    fn index_reaches_each_field_once() {
        let mut set = ParamSet::zeros();
        for (i, param) in Param::ALL.into_iter().enumerate() {
            set[param] = i as f64;
        }
        assert_eq!(set.i1_h1, 0.0);
        assert_eq!(set.bias_h1, 2.0);
        assert_eq!(set.h2_o1, 7.0);
        assert_eq!(set.bias_o1, 8.0);
        let values: Vec<f64> = set.iter().map(|(_, v)| v).collect();
        assert_eq!(values, (0..9).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn random_values_stay_in_init_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let set = ParamSet::random(&mut rng);
            assert!(set.iter().all(|(_, v)| (0.0..INIT_SCALE).contains(&v)));
        }
    }

    #[test]
    fn seeded_is_reproducible() {
        assert_eq!(ParamSet::seeded(42), ParamSet::seeded(42));
        assert_ne!(ParamSet::seeded(42), ParamSet::seeded(43));
    }

    #[test]
    fn uniform_sets_every_param() {
        let set = ParamSet::uniform(0.005);
        assert!(set.iter().all(|(_, v)| v == 0.005));
    }
}
