//! Resume data record model and loader.
//!
//! This crate defines the `resume-data.json` document, the defaults applied to
//! absent fields, and the errors raised when a record cannot be loaded.

pub mod load;
pub mod placeholder;
pub mod record;

pub use load::RecordError;
pub use placeholder::Identity;
pub use record::{
    Accomplishment, EducationEntry, ExperienceEntry, Highlight, ResumeRecord, SkillCategory,
    Social, SocialPlatform, Summary, Theme,
};
