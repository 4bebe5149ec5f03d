use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A lifestyle selection that is not one of the enumerated values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid choice for {field}")]
pub struct InvalidChoice {
    /// Field the value was offered for
    pub field: &'static str,
    /// Rejected value
    pub value: String,
}

/// Weekly physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalActivity {
    #[default]
    Low,
    Moderate,
    High,
}

/// Current smoking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoking {
    Yes,
    #[default]
    No,
}

/// Self-assessed diet quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Poor,
    #[default]
    Average,
    Healthy,
}

/// Alcohol consumption frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alcohol {
    #[default]
    Never,
    Occasionally,
    Frequently,
}

impl FromStr for PhysicalActivity {
    type Err = InvalidChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "low" => Ok(PhysicalActivity::Low),
            "moderate" => Ok(PhysicalActivity::Moderate),
            "high" => Ok(PhysicalActivity::High),
            _ => Err(InvalidChoice { field: "physicalActivity", value: value.to_string() }),
        }
    }
}

impl FromStr for Smoking {
    type Err = InvalidChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "yes" => Ok(Smoking::Yes),
            "no" => Ok(Smoking::No),
            _ => Err(InvalidChoice { field: "smoking", value: value.to_string() }),
        }
    }
}

impl FromStr for Diet {
    type Err = InvalidChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "poor" => Ok(Diet::Poor),
            "average" => Ok(Diet::Average),
            "healthy" => Ok(Diet::Healthy),
            _ => Err(InvalidChoice { field: "diet", value: value.to_string() }),
        }
    }
}

impl FromStr for Alcohol {
    type Err = InvalidChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "never" => Ok(Alcohol::Never),
            "occasionally" => Ok(Alcohol::Occasionally),
            "frequently" => Ok(Alcohol::Frequently),
            _ => Err(InvalidChoice { field: "alcohol", value: value.to_string() }),
        }
    }
}

/// Lifestyle choices collected on the second form step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleInput {
    pub physical_activity: PhysicalActivity,
    pub smoking: Smoking,
    pub diet: Diet,
    pub alcohol: Alcohol,
}

impl LifestyleInput {
    /// Stand-in for choices that were never made: nothing here triggers a
    /// lifestyle recommendation, unlike the form defaults.
    pub const UNSELECTED: LifestyleInput = LifestyleInput {
        physical_activity: PhysicalActivity::Moderate,
        smoking: Smoking::No,
        diet: Diet::Healthy,
        alcohol: Alcohol::Never,
    };

    /// Apply a select-control change by form name.
    ///
    /// Unknown fields and values outside the enumeration leave the input untouched.
    pub fn select(&mut self, name: &str, value: &str) -> Result<(), InvalidChoice> {
        match name {
            "physicalActivity" => self.physical_activity = value.parse()?,
            "smoking" => self.smoking = value.parse()?,
            "diet" => self.diet = value.parse()?,
            "alcohol" => self.alcohol = value.parse()?,
            _ => {
                return Err(InvalidChoice { field: "lifestyle", value: name.to_string() });
            }
        }
        Ok(())
    }
}
