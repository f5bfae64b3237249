//! Starter record written into freshly scaffolded projects.

use crate::record::{
    EducationEntry, ExperienceEntry, Highlight, ResumeRecord, SkillCategory, Social, Summary,
    Theme,
};

/// Identity answers collected when creating a project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identity {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

impl ResumeRecord {
    /// Build the starter record for a new project.
    ///
    /// Every list section gets one sample entry to edit, except accomplishments
    /// which start empty. Unanswered social URLs are kept as empty strings so
    /// the keys show up in the file.
    pub fn placeholder(identity: &Identity) -> Self {
        Self {
            name: identity.name.clone(),
            title: identity.title.clone(),
            subtitle: identity.subtitle.clone(),
            description: Some(format!("Professional resume website for {}", identity.name)),
            email: Some(identity.email.clone()),
            social: Social {
                linkedin: Some(identity.linkedin.clone()),
                github: Some(identity.github.clone()),
                portfolio: Some(identity.portfolio.clone()),
                ..Default::default()
            },
            summary: Summary {
                heading: Some("Professional Summary".to_string()),
                content: "Add your professional summary here...".to_string(),
                highlights: vec![Highlight {
                    icon: "briefcase".to_string(),
                    title: "Your Specialization".to_string(),
                    description: "Add your specialization details".to_string(),
                }],
                certifications: vec![],
            },
            experience: vec![ExperienceEntry {
                title: "Job Title".to_string(),
                company: "Company Name".to_string(),
                location: "City, Country".to_string(),
                duration: "Month Year - Present".to_string(),
                highlights: vec![
                    "Achievement or responsibility".to_string(),
                    "Achievement or responsibility".to_string(),
                ],
                technologies: vec!["Tech1".to_string(), "Tech2".to_string()],
            }],
            skills: vec![SkillCategory {
                category: "Languages".to_string(),
                items: vec!["Language1".to_string(), "Language2".to_string()],
            }],
            education: vec![EducationEntry {
                degree: "Bachelor of Engineering".to_string(),
                field: "Computer Science".to_string(),
                institution: "University Name".to_string(),
                year: "2020".to_string(),
                details: None,
            }],
            accomplishments: vec![],
            theme: Theme::defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            name: "Jane Doe".to_string(),
            title: "Senior Engineer".to_string(),
            subtitle: "Rust | Cloud".to_string(),
            email: "jane@example.com".to_string(),
            github: "https://github.com/jane".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn fills_one_sample_per_list_section() {
        let record = ResumeRecord::placeholder(&identity());

        assert_eq!(record.summary.highlights.len(), 1);
        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.skills.len(), 1);
        assert_eq!(record.education.len(), 1);
        assert!(record.accomplishments.is_empty());
        assert_eq!(
            record.description.as_deref(),
            Some("Professional resume website for Jane Doe")
        );
    }

    #[test]
    fn keeps_blank_social_keys() {
        let json = ResumeRecord::placeholder(&identity())
            .to_json_pretty()
            .unwrap();

        assert!(json.contains("\"linkedin\": \"\""));
        assert!(json.contains("\"github\": \"https://github.com/jane\""));
        assert!(json.contains("\"primaryColor\": \"#2563eb\""));
    }

    #[test]
    fn survives_a_reload() {
        let record = ResumeRecord::placeholder(&identity());
        let json = record.to_json_pretty().unwrap();

        assert_eq!(ResumeRecord::from_json(&json).unwrap(), record);
    }
}
