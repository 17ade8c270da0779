//! # Operator and Mission Profile Taxonomies
//!
//! The closed vocabularies a questionnaire answer set is expressed in:
//! what the operator does, how large it is, where it flies, and how far it
//! is through licensing. Also [`NationalityScope`], which applicability
//! rules use to target domestic, foreign, EU or non-EU operators.

use serde::{Deserialize, Serialize};

use crate::jurisdiction::JurisdictionCode;

/// The space activity an operator declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Operating one or more spacecraft in orbit.
    SpacecraftOperation,
    /// Launching a vehicle into space.
    LaunchOperation,
    /// Operating a launch site or spaceport.
    LaunchSiteOperation,
    /// Servicing, refuelling or removing other objects in orbit.
    InOrbitServices,
    /// Earth observation and remote sensing.
    EarthObservation,
    /// Exploration and utilization of space resources.
    SpaceResources,
}

impl_string_enum!(ActivityType {
    SpacecraftOperation => "spacecraft_operation",
    LaunchOperation => "launch_operation",
    LaunchSiteOperation => "launch_site_operation",
    InOrbitServices => "in_orbit_services",
    EarthObservation => "earth_observation",
    SpaceResources => "space_resources",
});

impl ActivityType {
    /// Lower-case human-readable label, e.g. "launch site operation".
    pub fn label(self) -> &'static str {
        match self {
            Self::SpacecraftOperation => "spacecraft operation",
            Self::LaunchOperation => "launch operation",
            Self::LaunchSiteOperation => "launch site operation",
            Self::InOrbitServices => "in-orbit services",
            Self::EarthObservation => "Earth observation",
            Self::SpaceResources => "space resources",
        }
    }
}

/// Size class of the operating entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitySize {
    /// Small enterprise, research institution or start-up.
    Small,
    /// Medium enterprise.
    Medium,
    /// Large enterprise.
    Large,
}

impl_string_enum!(EntitySize {
    Small => "small",
    Medium => "medium",
    Large => "large",
});

/// Orbit regime of the mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitRegime {
    /// Low Earth orbit (below 2,000 km).
    Leo,
    /// Medium Earth orbit.
    Meo,
    /// Geostationary orbit.
    Geo,
    /// Highly elliptical orbit.
    Heo,
    /// Cislunar space and beyond.
    BeyondGeo,
}

impl_string_enum!(OrbitRegime {
    Leo => "leo",
    Meo => "meo",
    Geo => "geo",
    Heo => "heo",
    BeyondGeo => "beyond_geo",
});

impl OrbitRegime {
    /// Upper-case abbreviation used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Leo => "LEO",
            Self::Meo => "MEO",
            Self::Geo => "GEO",
            Self::Heo => "HEO",
            Self::BeyondGeo => "beyond GEO",
        }
    }
}

/// Where the operator stands in the licensing process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicensingStatus {
    /// Preparing a first application.
    NewApplication,
    /// Holds a licence in at least one jurisdiction.
    ExistingLicense,
    /// Renewing or amending an existing licence.
    Renewal,
    /// Evaluating jurisdictions, no application planned yet.
    Exploring,
}

impl_string_enum!(LicensingStatus {
    NewApplication => "new_application",
    ExistingLicense => "existing_license",
    Renewal => "renewal",
    Exploring => "exploring",
});

/// Nationality scope of an applicability rule, relative to the jurisdiction
/// that declares the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NationalityScope {
    /// The entity is established in the jurisdiction itself.
    Domestic,
    /// The entity is established anywhere else.
    Foreign,
    /// The entity is established in an EU member state.
    Eu,
    /// The entity is established outside the EU.
    NonEu,
}

impl_string_enum!(NationalityScope {
    Domestic => "domestic",
    Foreign => "foreign",
    Eu => "eu",
    NonEu => "non_eu",
});

impl NationalityScope {
    /// Whether an entity of `nationality` falls inside this scope for a rule
    /// declared by `jurisdiction`.
    pub fn matches(self, jurisdiction: &JurisdictionCode, nationality: &JurisdictionCode) -> bool {
        match self {
            Self::Domestic => jurisdiction == nationality,
            Self::Foreign => jurisdiction != nationality,
            Self::Eu => nationality.is_eu_member(),
            Self::NonEu => !nationality.is_eu_member(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> JurisdictionCode {
        JurisdictionCode::new(s).unwrap()
    }

    #[test]
    fn activity_type_parses_wire_names() {
        assert_eq!(
            "space_resources".parse::<ActivityType>().unwrap(),
            ActivityType::SpaceResources
        );
        assert!("mining".parse::<ActivityType>().is_err());
    }

    #[test]
    fn nationality_scope_domestic_and_foreign() {
        let fr = code("FR");
        assert!(NationalityScope::Domestic.matches(&fr, &code("FR")));
        assert!(!NationalityScope::Domestic.matches(&fr, &code("DE")));
        assert!(NationalityScope::Foreign.matches(&fr, &code("US")));
    }

    #[test]
    fn nationality_scope_eu_membership() {
        let lu = code("LU");
        assert!(NationalityScope::Eu.matches(&lu, &code("IT")));
        assert!(NationalityScope::NonEu.matches(&lu, &code("GB")));
        assert!(!NationalityScope::NonEu.matches(&lu, &code("AT")));
    }
}
