//! Control settings for the PDE evolution.

use xva_core::closeout::CloseOutConvention;

/// Control settings for the trajectory evolution scheme.
///
/// Selects the close-out convention applied to default-contingent
/// valuation at each step. A new convention is added as a
/// [`CloseOutConvention`] variant; the evolution scheme itself never
/// changes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PdeEvolutionControl {
    close_out: CloseOutConvention,
}

impl PdeEvolutionControl {
    /// Creates control settings with the given close-out convention.
    #[inline]
    pub fn new(close_out: CloseOutConvention) -> Self {
        Self { close_out }
    }

    /// Returns the selected close-out convention.
    #[inline]
    pub fn close_out(&self) -> CloseOutConvention {
        self.close_out
    }
}
