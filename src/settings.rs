//! Assembly settings.

use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Error type returned by settings validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings for an [`Assembler`](crate::assembler::Assembler)

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssemblySettings<T: FloatT> {
    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///initial triplet capacity.  `None` reserves one entry per row
    #[builder(default = "None")]
    pub capacity: Option<usize>,

    ///maximum number of stored triplet entries.  `None` for no limit
    #[builder(default = "None")]
    pub max_entries: Option<usize>,

    ///compressed entries with magnitude at or below this are dropped
    #[builder(default = "(0.0).as_T()")]
    pub cancel_tolerance: T,
}

impl<T> Default for AssemblySettings<T>
where
    T: FloatT,
{
    fn default() -> AssemblySettings<T> {
        AssemblySettings {
            verbose: false,
            capacity: None,
            max_entries: None,
            cancel_tolerance: T::zero(),
        }
    }
}

impl<T> AssemblySettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_max_entries(self.max_entries)?;
        validate_cancel_tolerance(self.cancel_tolerance)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for AssemblySettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        AssemblySettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> AssemblySettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(max_entries) = self.max_entries {
            validate_max_entries(max_entries)?;
        }
        if let Some(tol) = self.cancel_tolerance {
            validate_cancel_tolerance(tol)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_max_entries(max_entries: Option<usize>) -> Result<(), SettingsError> {
    match max_entries {
        Some(0) => Err(SettingsError::BadFieldValue("max_entries")),
        _ => Ok(()),
    }
}

fn validate_cancel_tolerance<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if tol.is_finite() && tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("cancel_tolerance"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = AssemblySettingsBuilder::<f64>::default().build().unwrap();
    assert_eq!(settings, AssemblySettings::default());

    // fail on an empty entry limit
    assert!(AssemblySettingsBuilder::<f64>::default()
        .max_entries(Some(0))
        .build()
        .is_err());

    // fail on bad tolerances
    for tol in [-1.0, f64::NAN, f64::INFINITY] {
        assert!(AssemblySettingsBuilder::<f64>::default()
            .cancel_tolerance(tol)
            .build()
            .is_err());
    }

    assert!(AssemblySettingsBuilder::<f64>::default()
        .verbose(true)
        .capacity(Some(16))
        .max_entries(Some(100))
        .cancel_tolerance(1e-12)
        .build()
        .is_ok());

    // directly construct a bad AssemblySettings and manually check
    let settings = AssemblySettings::<f64> {
        max_entries: Some(0),
        ..AssemblySettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("max_entries"))
    );
}
