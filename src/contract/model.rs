//! Contract models for the ward profile service
//!
//! These models are transport-agnostic and used for in-process communication.
//! NO serde derives - these are pure domain models. Category codes live here;
//! display labels are the Nepali strings the municipality dashboards render.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A closed categorical dimension used to bucket survey records.
///
/// `ALL` fixes the enumeration order used for zero-filled tables; `from_code`
/// maps unrecognized codes to the dimension's catch-all variant so malformed
/// input is bucketed, never dropped.
pub trait Dimension:
    Copy + Clone + Eq + Ord + std::hash::Hash + std::fmt::Debug + 'static
{
    /// Every variant, in fixed display order.
    const ALL: &'static [Self];

    /// Stable wire/storage code (uppercase snake case).
    fn code(&self) -> &'static str;

    /// Parse a code; unknown codes land in the catch-all variant.
    fn from_code(code: &str) -> Self;

    /// Localized display label.
    fn label(&self) -> &'static str;

    /// Chart color (hex).
    fn color(&self) -> &'static str;
}

/// Gender dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Dimension for Gender {
    const ALL: &'static [Self] = &[Self::Male, Self::Female, Self::Other];

    fn code(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }

    fn from_code(code: &str) -> Self {
        match code {
            "MALE" => Self::Male,
            "FEMALE" => Self::Female,
            _ => Self::Other,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Male => "पुरुष",
            Self::Female => "महिला",
            Self::Other => "अन्य",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Male => "#36A2EB",
            Self::Female => "#FF6384",
            Self::Other => "#FFCE56",
        }
    }
}

/// Age band dimension, ordered youngest to oldest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeGroup {
    Age0To4,
    Age5To9,
    Age10To14,
    Age15To19,
    Age20To29,
    Age30To39,
    Age40To49,
    Age50To59,
    Age60To69,
    Age70Plus,
}

impl Dimension for AgeGroup {
    const ALL: &'static [Self] = &[
        Self::Age0To4,
        Self::Age5To9,
        Self::Age10To14,
        Self::Age15To19,
        Self::Age20To29,
        Self::Age30To39,
        Self::Age40To49,
        Self::Age50To59,
        Self::Age60To69,
        Self::Age70Plus,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Age0To4 => "AGE_0_4",
            Self::Age5To9 => "AGE_5_9",
            Self::Age10To14 => "AGE_10_14",
            Self::Age15To19 => "AGE_15_19",
            Self::Age20To29 => "AGE_20_29",
            Self::Age30To39 => "AGE_30_39",
            Self::Age40To49 => "AGE_40_49",
            Self::Age50To59 => "AGE_50_59",
            Self::Age60To69 => "AGE_60_69",
            Self::Age70Plus => "AGE_70_PLUS",
        }
    }

    fn from_code(code: &str) -> Self {
        match code {
            "AGE_0_4" => Self::Age0To4,
            "AGE_5_9" => Self::Age5To9,
            "AGE_10_14" => Self::Age10To14,
            "AGE_15_19" => Self::Age15To19,
            "AGE_20_29" => Self::Age20To29,
            "AGE_30_39" => Self::Age30To39,
            "AGE_40_49" => Self::Age40To49,
            "AGE_50_59" => Self::Age50To59,
            "AGE_60_69" => Self::Age60To69,
            _ => Self::Age70Plus,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Age0To4 => "०-४ वर्ष",
            Self::Age5To9 => "५-९ वर्ष",
            Self::Age10To14 => "१०-१४ वर्ष",
            Self::Age15To19 => "१५-१९ वर्ष",
            Self::Age20To29 => "२०-२९ वर्ष",
            Self::Age30To39 => "३०-३९ वर्ष",
            Self::Age40To49 => "४०-४९ वर्ष",
            Self::Age50To59 => "५०-५९ वर्ष",
            Self::Age60To69 => "६०-६९ वर्ष",
            Self::Age70Plus => "७० वर्ष माथि",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Age0To4 => "#4BC0C0",
            Self::Age5To9 => "#36A2EB",
            Self::Age10To14 => "#9966FF",
            Self::Age15To19 => "#FF9F40",
            Self::Age20To29 => "#FF6384",
            Self::Age30To39 => "#FFCE56",
            Self::Age40To49 => "#2ECC71",
            Self::Age50To59 => "#E74C3C",
            Self::Age60To69 => "#95A5A6",
            Self::Age70Plus => "#34495E",
        }
    }
}

/// Religion dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Religion {
    Hindu,
    Buddhist,
    Kirant,
    Christian,
    Islam,
    Nature,
    Jain,
    Sikh,
    Other,
}

impl Dimension for Religion {
    const ALL: &'static [Self] = &[
        Self::Hindu,
        Self::Buddhist,
        Self::Kirant,
        Self::Christian,
        Self::Islam,
        Self::Nature,
        Self::Jain,
        Self::Sikh,
        Self::Other,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Hindu => "HINDU",
            Self::Buddhist => "BUDDHIST",
            Self::Kirant => "KIRANT",
            Self::Christian => "CHRISTIAN",
            Self::Islam => "ISLAM",
            Self::Nature => "NATURE",
            Self::Jain => "JAIN",
            Self::Sikh => "SIKH",
            Self::Other => "OTHER",
        }
    }

    fn from_code(code: &str) -> Self {
        match code {
            "HINDU" => Self::Hindu,
            "BUDDHIST" => Self::Buddhist,
            "KIRANT" => Self::Kirant,
            "CHRISTIAN" => Self::Christian,
            "ISLAM" => Self::Islam,
            "NATURE" => Self::Nature,
            "JAIN" => Self::Jain,
            "SIKH" => Self::Sikh,
            _ => Self::Other,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Hindu => "हिन्दू",
            Self::Buddhist => "बौद्ध",
            Self::Kirant => "किराँत",
            Self::Christian => "क्रिश्चियन",
            Self::Islam => "इस्लाम",
            Self::Nature => "प्रकृति",
            Self::Jain => "जैन",
            Self::Sikh => "सिख",
            Self::Other => "अन्य",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Hindu => "#FF6384",
            Self::Buddhist => "#FFCE56",
            Self::Kirant => "#4BC0C0",
            Self::Christian => "#36A2EB",
            Self::Islam => "#2ECC71",
            Self::Nature => "#9966FF",
            Self::Jain => "#FF9F40",
            Self::Sikh => "#E74C3C",
            Self::Other => "#95A5A6",
        }
    }
}

/// Caste / ethnic group dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CasteGroup {
    Chhetri,
    Brahmin,
    Magar,
    Tamang,
    Newar,
    Rai,
    Gurung,
    Limbu,
    Sherpa,
    Dalit,
    Other,
}

impl Dimension for CasteGroup {
    const ALL: &'static [Self] = &[
        Self::Chhetri,
        Self::Brahmin,
        Self::Magar,
        Self::Tamang,
        Self::Newar,
        Self::Rai,
        Self::Gurung,
        Self::Limbu,
        Self::Sherpa,
        Self::Dalit,
        Self::Other,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Chhetri => "CHHETRI",
            Self::Brahmin => "BRAHMIN",
            Self::Magar => "MAGAR",
            Self::Tamang => "TAMANG",
            Self::Newar => "NEWAR",
            Self::Rai => "RAI",
            Self::Gurung => "GURUNG",
            Self::Limbu => "LIMBU",
            Self::Sherpa => "SHERPA",
            Self::Dalit => "DALIT",
            Self::Other => "OTHER",
        }
    }

    fn from_code(code: &str) -> Self {
        match code {
            "CHHETRI" => Self::Chhetri,
            "BRAHMIN" => Self::Brahmin,
            "MAGAR" => Self::Magar,
            "TAMANG" => Self::Tamang,
            "NEWAR" => Self::Newar,
            "RAI" => Self::Rai,
            "GURUNG" => Self::Gurung,
            "LIMBU" => Self::Limbu,
            "SHERPA" => Self::Sherpa,
            "DALIT" => Self::Dalit,
            _ => Self::Other,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Chhetri => "क्षेत्री",
            Self::Brahmin => "ब्राह्मण",
            Self::Magar => "मगर",
            Self::Tamang => "तामाङ",
            Self::Newar => "नेवार",
            Self::Rai => "राई",
            Self::Gurung => "गुरुङ",
            Self::Limbu => "लिम्बू",
            Self::Sherpa => "शेर्पा",
            Self::Dalit => "दलित",
            Self::Other => "अन्य",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Chhetri => "#36A2EB",
            Self::Brahmin => "#FF6384",
            Self::Magar => "#FFCE56",
            Self::Tamang => "#4BC0C0",
            Self::Newar => "#9966FF",
            Self::Rai => "#FF9F40",
            Self::Gurung => "#2ECC71",
            Self::Limbu => "#E74C3C",
            Self::Sherpa => "#1ABC9C",
            Self::Dalit => "#F39C12",
            Self::Other => "#95A5A6",
        }
    }
}

/// Occupation dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Occupation {
    Agriculture,
    Business,
    DailyWage,
    ForeignEmployment,
    GovernmentService,
    PrivateSector,
    Housework,
    Student,
    Unemployed,
    Other,
}

impl Dimension for Occupation {
    const ALL: &'static [Self] = &[
        Self::Agriculture,
        Self::Business,
        Self::DailyWage,
        Self::ForeignEmployment,
        Self::GovernmentService,
        Self::PrivateSector,
        Self::Housework,
        Self::Student,
        Self::Unemployed,
        Self::Other,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Agriculture => "AGRICULTURE",
            Self::Business => "BUSINESS",
            Self::DailyWage => "DAILY_WAGE",
            Self::ForeignEmployment => "FOREIGN_EMPLOYMENT",
            Self::GovernmentService => "GOVERNMENT_SERVICE",
            Self::PrivateSector => "PRIVATE_SECTOR",
            Self::Housework => "HOUSEWORK",
            Self::Student => "STUDENT",
            Self::Unemployed => "UNEMPLOYED",
            Self::Other => "OTHER",
        }
    }

    fn from_code(code: &str) -> Self {
        match code {
            "AGRICULTURE" => Self::Agriculture,
            "BUSINESS" => Self::Business,
            "DAILY_WAGE" => Self::DailyWage,
            "FOREIGN_EMPLOYMENT" => Self::ForeignEmployment,
            "GOVERNMENT_SERVICE" => Self::GovernmentService,
            "PRIVATE_SECTOR" => Self::PrivateSector,
            "HOUSEWORK" => Self::Housework,
            "STUDENT" => Self::Student,
            "UNEMPLOYED" => Self::Unemployed,
            _ => Self::Other,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Agriculture => "कृषि",
            Self::Business => "व्यापार",
            Self::DailyWage => "ज्याला मजदुरी",
            Self::ForeignEmployment => "वैदेशिक रोजगार",
            Self::GovernmentService => "सरकारी सेवा",
            Self::PrivateSector => "निजी क्षेत्र",
            Self::Housework => "गृहकार्य",
            Self::Student => "विद्यार्थी",
            Self::Unemployed => "बेरोजगार",
            Self::Other => "अन्य",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Agriculture => "#2ECC71",
            Self::Business => "#36A2EB",
            Self::DailyWage => "#E74C3C",
            Self::ForeignEmployment => "#9966FF",
            Self::GovernmentService => "#FF9F40",
            Self::PrivateSector => "#4BC0C0",
            Self::Housework => "#FF6384",
            Self::Student => "#FFCE56",
            Self::Unemployed => "#F39C12",
            Self::Other => "#95A5A6",
        }
    }
}

/// Crop type dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CropType {
    Paddy,
    Maize,
    Wheat,
    Millet,
    Barley,
    Potato,
    Vegetable,
    Fruit,
    Pulse,
    OilSeed,
    Other,
}

impl Dimension for CropType {
    const ALL: &'static [Self] = &[
        Self::Paddy,
        Self::Maize,
        Self::Wheat,
        Self::Millet,
        Self::Barley,
        Self::Potato,
        Self::Vegetable,
        Self::Fruit,
        Self::Pulse,
        Self::OilSeed,
        Self::Other,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Paddy => "PADDY",
            Self::Maize => "MAIZE",
            Self::Wheat => "WHEAT",
            Self::Millet => "MILLET",
            Self::Barley => "BARLEY",
            Self::Potato => "POTATO",
            Self::Vegetable => "VEGETABLE",
            Self::Fruit => "FRUIT",
            Self::Pulse => "PULSE",
            Self::OilSeed => "OIL_SEED",
            Self::Other => "OTHER",
        }
    }

    fn from_code(code: &str) -> Self {
        match code {
            "PADDY" => Self::Paddy,
            "MAIZE" => Self::Maize,
            "WHEAT" => Self::Wheat,
            "MILLET" => Self::Millet,
            "BARLEY" => Self::Barley,
            "POTATO" => Self::Potato,
            "VEGETABLE" => Self::Vegetable,
            "FRUIT" => Self::Fruit,
            "PULSE" => Self::Pulse,
            "OIL_SEED" => Self::OilSeed,
            _ => Self::Other,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Paddy => "धान",
            Self::Maize => "मकै",
            Self::Wheat => "गहुँ",
            Self::Millet => "कोदो",
            Self::Barley => "जौ",
            Self::Potato => "आलु",
            Self::Vegetable => "तरकारी",
            Self::Fruit => "फलफूल",
            Self::Pulse => "दलहन",
            Self::OilSeed => "तेलहन",
            Self::Other => "अन्य",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Paddy => "#2ECC71",
            Self::Maize => "#FFCE56",
            Self::Wheat => "#F39C12",
            Self::Millet => "#95A5A6",
            Self::Barley => "#9966FF",
            Self::Potato => "#FF9F40",
            Self::Vegetable => "#4BC0C0",
            Self::Fruit => "#FF6384",
            Self::Pulse => "#36A2EB",
            Self::OilSeed => "#E74C3C",
            Self::Other => "#34495E",
        }
    }
}

/// Education level dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EducationLevel {
    Illiterate,
    Primary,
    LowerSecondary,
    Secondary,
    HigherSecondary,
    Bachelor,
    Master,
    Other,
}

impl Dimension for EducationLevel {
    const ALL: &'static [Self] = &[
        Self::Illiterate,
        Self::Primary,
        Self::LowerSecondary,
        Self::Secondary,
        Self::HigherSecondary,
        Self::Bachelor,
        Self::Master,
        Self::Other,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Illiterate => "ILLITERATE",
            Self::Primary => "PRIMARY",
            Self::LowerSecondary => "LOWER_SECONDARY",
            Self::Secondary => "SECONDARY",
            Self::HigherSecondary => "HIGHER_SECONDARY",
            Self::Bachelor => "BACHELOR",
            Self::Master => "MASTER",
            Self::Other => "OTHER",
        }
    }

    fn from_code(code: &str) -> Self {
        match code {
            "ILLITERATE" => Self::Illiterate,
            "PRIMARY" => Self::Primary,
            "LOWER_SECONDARY" => Self::LowerSecondary,
            "SECONDARY" => Self::Secondary,
            "HIGHER_SECONDARY" => Self::HigherSecondary,
            "BACHELOR" => Self::Bachelor,
            "MASTER" => Self::Master,
            _ => Self::Other,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Illiterate => "निरक्षर",
            Self::Primary => "प्राथमिक",
            Self::LowerSecondary => "निम्न माध्यमिक",
            Self::Secondary => "माध्यमिक",
            Self::HigherSecondary => "उच्च माध्यमिक",
            Self::Bachelor => "स्नातक",
            Self::Master => "स्नातकोत्तर",
            Self::Other => "अन्य",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Illiterate => "#E74C3C",
            Self::Primary => "#FF9F40",
            Self::LowerSecondary => "#FFCE56",
            Self::Secondary => "#4BC0C0",
            Self::HigherSecondary => "#36A2EB",
            Self::Bachelor => "#2ECC71",
            Self::Master => "#9966FF",
            Self::Other => "#95A5A6",
        }
    }
}

/// Survey table family a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SurveyDomain {
    /// Ward-wise population by gender and age band (no domain category)
    Population,
    Religion,
    Caste,
    Occupation,
    Crop,
    Education,
}

impl SurveyDomain {
    pub const ALL: &'static [Self] = &[
        Self::Population,
        Self::Religion,
        Self::Caste,
        Self::Occupation,
        Self::Crop,
        Self::Education,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Population => "POPULATION",
            Self::Religion => "RELIGION",
            Self::Caste => "CASTE",
            Self::Occupation => "OCCUPATION",
            Self::Crop => "CROP",
            Self::Education => "EDUCATION",
        }
    }

    /// Parse a domain code. Unlike dimension codes, an unknown domain is a
    /// caller error, not a bucket.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "POPULATION" => Some(Self::Population),
            "RELIGION" => Some(Self::Religion),
            "CASTE" => Some(Self::Caste),
            "OCCUPATION" => Some(Self::Occupation),
            "CROP" => Some(Self::Crop),
            "EDUCATION" => Some(Self::Education),
            _ => None,
        }
    }
}

/// Dimension selector for the population summary. The population table
/// carries two categorical dimensions (gender and age band); other domains
/// group by their single category and ignore the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PopulationBreakdown {
    Gender,
    AgeGroup,
}

impl PopulationBreakdown {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Gender => "GENDER",
            Self::AgeGroup => "AGE_GROUP",
        }
    }

    /// Parse a breakdown code; like domain codes, an unknown selector is a
    /// caller error, not a bucket.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GENDER" => Some(Self::Gender),
            "AGE_GROUP" => Some(Self::AgeGroup),
            _ => None,
        }
    }
}

/// Domain-specific category value of a survey record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Religion(Religion),
    Caste(CasteGroup),
    Occupation(Occupation),
    Crop(CropType),
    Education(EducationLevel),
}

impl Category {
    pub fn domain(&self) -> SurveyDomain {
        match self {
            Self::Religion(_) => SurveyDomain::Religion,
            Self::Caste(_) => SurveyDomain::Caste,
            Self::Occupation(_) => SurveyDomain::Occupation,
            Self::Crop(_) => SurveyDomain::Crop,
            Self::Education(_) => SurveyDomain::Education,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Religion(v) => v.code(),
            Self::Caste(v) => v.code(),
            Self::Occupation(v) => v.code(),
            Self::Crop(v) => v.code(),
            Self::Education(v) => v.code(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Religion(v) => v.label(),
            Self::Caste(v) => v.label(),
            Self::Occupation(v) => v.label(),
            Self::Crop(v) => v.label(),
            Self::Education(v) => v.label(),
        }
    }

    /// Parse a category code within a domain. `Population` records carry no
    /// category, so the result is `None` there; unknown codes elsewhere land
    /// in the domain's catch-all variant.
    pub fn from_code(domain: SurveyDomain, code: &str) -> Option<Self> {
        match domain {
            SurveyDomain::Population => None,
            SurveyDomain::Religion => Some(Self::Religion(Religion::from_code(code))),
            SurveyDomain::Caste => Some(Self::Caste(CasteGroup::from_code(code))),
            SurveyDomain::Occupation => Some(Self::Occupation(Occupation::from_code(code))),
            SurveyDomain::Crop => Some(Self::Crop(CropType::from_code(code))),
            SurveyDomain::Education => Some(Self::Education(EducationLevel::from_code(code))),
        }
    }
}

/// One row of ward-level survey data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRecord {
    pub id: Uuid,
    pub domain: SurveyDomain,
    /// Ward number, 1..=ward_count
    pub ward_number: u16,
    pub gender: Option<Gender>,
    pub age_group: Option<AgeGroup>,
    pub category: Option<Category>,
    /// Primary measure (head count, production volume, ...)
    pub population: i64,
    /// Household count where the table carries one
    pub households: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SurveyRecord {
    /// The uniqueness key: (domain, ward, dimension values).
    pub fn key(&self) -> RecordKey {
        RecordKey {
            domain: self.domain,
            ward_number: self.ward_number,
            gender: self.gender,
            age_group: self.age_group,
            category: self.category,
        }
    }

    /// Household measure with the missing-means-zero rule applied.
    pub fn household_count(&self) -> i64 {
        self.households.unwrap_or(0)
    }
}

/// Identifying attributes of a survey record, used for duplicate detection
/// and the storage-level unique index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub domain: SurveyDomain,
    pub ward_number: u16,
    pub gender: Option<Gender>,
    pub age_group: Option<AgeGroup>,
    pub category: Option<Category>,
}

impl RecordKey {
    /// Human-readable conflict description (ward + categorical dimensions).
    pub fn describe(&self) -> String {
        let mut parts = vec![format!("ward {}", self.ward_number)];
        if let Some(g) = self.gender {
            parts.push(g.code().to_string());
        }
        if let Some(a) = self.age_group {
            parts.push(a.code().to_string());
        }
        if let Some(c) = self.category {
            parts.push(c.code().to_string());
        }
        parts.join(", ")
    }
}

/// Fields supplied when creating or replacing a survey record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRecordDraft {
    pub domain: SurveyDomain,
    pub ward_number: u16,
    pub gender: Option<Gender>,
    pub age_group: Option<AgeGroup>,
    pub category: Option<Category>,
    pub population: i64,
    pub households: Option<i64>,
}

impl SurveyRecordDraft {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            domain: self.domain,
            ward_number: self.ward_number,
            gender: self.gender,
            age_group: self.age_group,
            category: self.category,
        }
    }
}

// ===== Facilities =====

/// Kind of institutional / facility record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacilityKind {
    Grassland,
    GrazingArea,
    CommunityBuilding,
    HistoricalSite,
    ParkingFacility,
}

impl FacilityKind {
    pub const ALL: &'static [Self] = &[
        Self::Grassland,
        Self::GrazingArea,
        Self::CommunityBuilding,
        Self::HistoricalSite,
        Self::ParkingFacility,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Grassland => "GRASSLAND",
            Self::GrazingArea => "GRAZING_AREA",
            Self::CommunityBuilding => "COMMUNITY_BUILDING",
            Self::HistoricalSite => "HISTORICAL_SITE",
            Self::ParkingFacility => "PARKING_FACILITY",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GRASSLAND" => Some(Self::Grassland),
            "GRAZING_AREA" => Some(Self::GrazingArea),
            "COMMUNITY_BUILDING" => Some(Self::CommunityBuilding),
            "HISTORICAL_SITE" => Some(Self::HistoricalSite),
            "PARKING_FACILITY" => Some(Self::ParkingFacility),
            _ => None,
        }
    }
}

/// Ownership / management of a facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ownership {
    Government,
    Community,
    Private,
    Religious,
    Other,
}

impl Ownership {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Government => "GOVERNMENT",
            Self::Community => "COMMUNITY",
            Self::Private => "PRIVATE",
            Self::Religious => "RELIGIOUS",
            Self::Other => "OTHER",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "GOVERNMENT" => Self::Government,
            "COMMUNITY" => Self::Community,
            "PRIVATE" => Self::Private,
            "RELIGIOUS" => Self::Religious,
            _ => Self::Other,
        }
    }
}

/// Point geometry (WGS84)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A facility / institution record (grassland, community building, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub id: Uuid,
    pub kind: FacilityKind,
    pub name: String,
    pub ward_number: u16,
    pub area_sq_km: Option<f64>,
    pub elevation_m: Option<f64>,
    pub ownership: Option<Ownership>,
    pub is_fenced: bool,
    pub has_water_source: bool,
    pub notes: Option<String>,
    pub location: Option<GeoPoint>,
    /// Boundary polygon as GeoJSON geometry, when surveyed
    pub boundary: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating or replacing a facility
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityDraft {
    pub kind: FacilityKind,
    pub name: String,
    pub ward_number: u16,
    pub area_sq_km: Option<f64>,
    pub elevation_m: Option<f64>,
    pub ownership: Option<Ownership>,
    pub is_fenced: bool,
    pub has_water_source: bool,
    pub notes: Option<String>,
    pub location: Option<GeoPoint>,
    pub boundary: Option<serde_json::Value>,
}

/// A media reference attached to a facility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: Uuid,
    pub facility_id: Uuid,
    pub url: String,
    pub mime_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// At most one item per facility is primary at rest
    pub is_primary: bool,
    /// Display position within the facility's gallery
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when attaching media to a facility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDraft {
    pub url: String,
    pub mime_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

// ===== Aggregation output =====

/// One category bucket of a summary, keyed by the category's code
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub code: String,
    pub label: String,
    pub color: String,
    pub total: i64,
    /// Share of the grand total; 0.0 when the grand total is zero
    pub percent: f64,
}

/// One ward row of a summary, with a zero-filled cell per category
#[derive(Debug, Clone, PartialEq)]
pub struct WardSummary {
    pub ward_number: u16,
    pub total: i64,
    pub percent: f64,
    /// Cells in fixed category enumeration order
    pub cells: Vec<CategoryTotal>,
}

/// One entry of a top-N display; the synthetic remainder bucket carries
/// `code == "OTHER"` and the localized "other" label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCategory {
    pub code: String,
    pub label: String,
    pub total: i64,
}

/// Full aggregation of one survey domain: category totals, ward totals,
/// ward x category pivot, and the collapsed top-N view
#[derive(Debug, Clone, PartialEq)]
pub struct DomainSummary {
    pub domain: SurveyDomain,
    pub grand_total: i64,
    /// Zero-filled, in fixed enumeration order
    pub categories: Vec<CategoryTotal>,
    /// Ascending by ward number; includes every configured ward
    pub wards: Vec<WardSummary>,
    /// Descending by total, non-zero categories only, plus remainder
    pub top: Vec<TopCategory>,
}

/// An administrative ward as exposed to clients; synthesized from the
/// configured ward count merged with wards observed in records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ward {
    pub number: u16,
    /// Whether any survey record references this ward yet
    pub has_records: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_codes_bucket_into_the_catch_all() {
        // malformed codes are bucketed, never dropped
        assert_eq!(Gender::from_code("UNRECOGNIZED"), Gender::Other);
        assert_eq!(AgeGroup::from_code("UNRECOGNIZED"), AgeGroup::Age70Plus);
        assert_eq!(Religion::from_code("UNRECOGNIZED"), Religion::Other);
        assert_eq!(CasteGroup::from_code("UNRECOGNIZED"), CasteGroup::Other);
        assert_eq!(Occupation::from_code("UNRECOGNIZED"), Occupation::Other);
        assert_eq!(CropType::from_code("UNRECOGNIZED"), CropType::Other);
        assert_eq!(
            EducationLevel::from_code("UNRECOGNIZED"),
            EducationLevel::Other
        );
    }

    #[test]
    fn known_codes_round_trip() {
        for religion in Religion::ALL {
            assert_eq!(Religion::from_code(religion.code()), *religion);
        }
        for age in AgeGroup::ALL {
            assert_eq!(AgeGroup::from_code(age.code()), *age);
        }
    }

    #[test]
    fn category_parsing_buckets_unknown_codes_per_domain() {
        assert_eq!(
            Category::from_code(SurveyDomain::Religion, "UNRECOGNIZED"),
            Some(Category::Religion(Religion::Other))
        );
        assert_eq!(
            Category::from_code(SurveyDomain::Crop, "UNRECOGNIZED"),
            Some(Category::Crop(CropType::Other))
        );
        // population rows carry no category at all
        assert_eq!(Category::from_code(SurveyDomain::Population, "HINDU"), None);
    }

    #[test]
    fn domain_and_breakdown_codes_reject_unknowns() {
        assert_eq!(SurveyDomain::from_code("UNRECOGNIZED"), None);
        assert_eq!(PopulationBreakdown::from_code("UNRECOGNIZED"), None);
        assert_eq!(
            PopulationBreakdown::from_code("AGE_GROUP"),
            Some(PopulationBreakdown::AgeGroup)
        );
    }
}
