//! The resume record and its sub-entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Default primary theme color.
pub const DEFAULT_PRIMARY_COLOR: &str = "#2563eb";

/// Default secondary theme color.
pub const DEFAULT_SECONDARY_COLOR: &str = "#1e40af";

/// Default accent theme color.
pub const DEFAULT_ACCENT_COLOR: &str = "#3b82f6";

/// Heading used for the summary section when the record leaves it out.
pub const DEFAULT_SUMMARY_HEADING: &str = "Professional Summary";

/// A complete resume, as stored in `resume-data.json`.
///
/// List fields default to empty. Entries inside a list are strict: a missing
/// key on an entry is a parse error rather than a silently blank field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Full name
    pub name: String,

    /// Professional title
    pub title: String,

    /// Specializations line shown under the title
    #[serde(default)]
    pub subtitle: String,

    /// Free-form description of the site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub social: Social,

    #[serde(default)]
    pub summary: Summary,

    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,

    #[serde(default)]
    pub skills: Vec<SkillCategory>,

    #[serde(default)]
    pub education: Vec<EducationEntry>,

    #[serde(default)]
    pub accomplishments: Vec<Accomplishment>,

    #[serde(default)]
    pub theme: Theme,
}

impl ResumeRecord {
    /// Contact email, if one is set and non-empty.
    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }
}

/// Social profiles keyed by platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,

    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,

    /// Platforms without a dedicated slot on the page
    #[serde(flatten)]
    pub other: BTreeMap<String, String>,
}

/// A platform with a link slot in the hero block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    LinkedIn,
    Portfolio,
    GitHub,
}

impl Social {
    /// Linked profiles in display order: linkedin, portfolio, github.
    ///
    /// Empty URLs are skipped.
    pub fn links(&self) -> Vec<(SocialPlatform, &str)> {
        [
            (SocialPlatform::LinkedIn, &self.linkedin),
            (SocialPlatform::Portfolio, &self.portfolio),
            (SocialPlatform::GitHub, &self.github),
        ]
        .into_iter()
        .filter_map(|(platform, url)| non_empty(url).map(|url| (platform, url)))
        .collect()
    }

    /// Phone number, if set and non-empty.
    pub fn phone(&self) -> Option<&str> {
        non_empty(&self.phone)
    }
}

/// The "About" block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Summary text. The section is omitted when this is empty.
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub highlights: Vec<Highlight>,

    #[serde(default)]
    pub certifications: Vec<String>,
}

impl Summary {
    /// Heading text, falling back to "Professional Summary".
    pub fn heading(&self) -> &str {
        non_empty(&self.heading).unwrap_or(DEFAULT_SUMMARY_HEADING)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A highlight card inside the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    /// Font Awesome icon name without the `fa-` prefix
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A position held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
}

/// A named group of skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// A degree or course of study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub field: String,
    pub institution: String,

    /// Graduation year; accepts `"2020"` or `2020`
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// An award or recognition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accomplishment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    pub title: String,

    /// Placement, e.g. "1st Place"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    pub description: String,
}

/// Page color scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
}

impl Theme {
    /// The default scheme written out explicitly.
    pub fn defaults() -> Self {
        Self {
            primary_color: Some(DEFAULT_PRIMARY_COLOR.to_string()),
            secondary_color: Some(DEFAULT_SECONDARY_COLOR.to_string()),
            accent_color: Some(DEFAULT_ACCENT_COLOR.to_string()),
        }
    }

    pub fn primary(&self) -> &str {
        non_empty(&self.primary_color).unwrap_or(DEFAULT_PRIMARY_COLOR)
    }

    pub fn secondary(&self) -> &str {
        non_empty(&self.secondary_color).unwrap_or(DEFAULT_SECONDARY_COLOR)
    }

    pub fn accent(&self) -> &str {
        non_empty(&self.accent_color).unwrap_or(DEFAULT_ACCENT_COLOR)
    }
}

/// Treat `""` the same as an absent value.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}
