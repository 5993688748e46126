use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    #[serde(rename = "20_30s")]
    Twenties,
    #[serde(rename = "30_40s")]
    Thirties,
    #[serde(rename = "40_50s")]
    Forties,
    #[serde(rename = "50_60s")]
    Fifties,
    #[serde(rename = "60_70s")]
    Sixties,
    #[serde(rename = "70_plus")]
    SeventyPlus,
}

impl AgeBand {
    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Twenties => "20-30s",
            AgeBand::Thirties => "30-40s",
            AgeBand::Forties => "40-50s",
            AgeBand::Fifties => "50-60s",
            AgeBand::Sixties => "60-70s",
            AgeBand::SeventyPlus => "70+",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    University,
    GraduateSchool,
    Other,
}

impl EducationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High school graduate",
            EducationLevel::University => "University graduate",
            EducationLevel::GraduateSchool => "Graduate school",
            EducationLevel::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurgeryCategory {
    Urology,
    Gynecology,
    ThoracicSurgery,
    GeneralSurgery,
    Other,
}

impl SurgeryCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SurgeryCategory::Urology => "Urology",
            SurgeryCategory::Gynecology => "Gynecology",
            SurgeryCategory::ThoracicSurgery => "Thoracic surgery",
            SurgeryCategory::GeneralSurgery => "General surgery",
            SurgeryCategory::Other => "Other",
        }
    }
}

/// Demographic snapshot collected once per session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Profile {
    pub age_band: AgeBand,
    pub gender: Gender,
    pub education: EducationLevel,
    pub surgery_category: SurgeryCategory,
}

/// Profile attribute an admin can break attempts down by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    AgeBand,
    #[default]
    Gender,
    Education,
    SurgeryCategory,
}

impl ProfileField {
    pub fn label_of(&self, profile: &Profile) -> &'static str {
        match self {
            ProfileField::AgeBand => profile.age_band.label(),
            ProfileField::Gender => profile.gender.label(),
            ProfileField::Education => profile.education.label(),
            ProfileField::SurgeryCategory => profile.surgery_category.label(),
        }
    }
}

/// Gate state: terminal once a profile is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "profile", rename_all = "snake_case")]
pub enum ProfileGate {
    #[default]
    NoProfile,
    ProfileSet(Profile),
}

impl ProfileGate {
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            ProfileGate::NoProfile => None,
            ProfileGate::ProfileSet(profile) => Some(profile),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, ProfileGate::ProfileSet(_))
    }
}
