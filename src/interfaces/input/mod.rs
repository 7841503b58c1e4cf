//! YAML input specification.

use anyhow::{self, ensure, format_err};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::drivers::moment_rotation::{MomentRotationDriver, MomentRotationParams};
use crate::drivers::CartMomentsDriver;
use crate::interfaces::InputHandle;
use crate::io::format::cartmoments_error;

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;

/// A structure containing input parameters which can be serialised into and deserialised from a
/// YAML input file.
#[derive(Clone, Serialize, Deserialize)]
pub struct Input {
    /// Specification for the rotation of the moments.
    pub moment_rotation: MomentRotationParams,

    /// The Cartesian moments to be rotated. Each item gives the moments of one site, concatenated
    /// shell by shell from $`l = 0`$, each shell in lexicographic order. All sites must have the
    /// same number of moments.
    pub moments: Vec<Vec<f64>>,
}

impl Input {
    /// Packs the moments of all sites into a matrix with one site per row.
    ///
    /// # Errors
    ///
    /// Errors if no sites are given or if the sites have different numbers of moments.
    pub fn moments_array(&self) -> Result<Array2<f64>, anyhow::Error> {
        let nsites = self.moments.len();
        ensure!(nsites > 0, "No moments have been specified.");
        let ncart = self.moments[0].len();
        ensure!(
            self.moments.iter().all(|site| site.len() == ncart),
            "All sites must have the same number of Cartesian moments."
        );
        Array2::from_shape_vec(
            (nsites, ncart),
            self.moments.iter().flatten().copied().collect::<Vec<_>>(),
        )
        .map_err(|err| format_err!(err))
    }
}

impl InputHandle for Input {
    /// Handles the input specification by rotating all moments as requested.
    fn handle(&self) -> Result<(), anyhow::Error> {
        let moments = self.moments_array()?;
        let mut mr_driver = MomentRotationDriver::builder()
            .parameters(&self.moment_rotation)
            .moments(moments.view())
            .build()
            .map_err(|err| format_err!(err))?;
        mr_driver.run().map_err(|err| {
            cartmoments_error!("{err}");
            err
        })
    }
}
