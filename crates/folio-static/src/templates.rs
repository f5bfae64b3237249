//! Template engine for rendering the resume page.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use folio_record::{
    Accomplishment, EducationEntry, ExperienceEntry, Highlight, ResumeRecord, SkillCategory,
    SocialPlatform,
};

use crate::sections::Section;

/// A navigation menu entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    /// Display title
    pub title: String,
    /// In-page anchor
    pub path: String,
}

/// An icon link in the hero block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub href: String,
    pub label: &'static str,
    /// Font Awesome classes
    pub icon: &'static str,
}

/// Resolved theme colors.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Summary data with the heading default applied.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryBlock {
    pub heading: String,
    pub content: String,
    pub highlights: Vec<Highlight>,
    pub certifications: Vec<String>,
}

/// Context shared by the page layout and every section template.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub summary: SummaryBlock,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<EducationEntry>,
    pub accomplishments: Vec<Accomplishment>,
    pub theme: ThemeColors,
    pub nav: Vec<NavItem>,
    /// Show the "View Work" button in the hero
    pub view_work: bool,
}

impl Context {
    /// Build the template context for a record and its section plan.
    pub fn new(record: &ResumeRecord, plan: &[Section]) -> Self {
        let email = record.email().map(str::to_string);

        let mut social_links = Vec::new();
        if let Some(email) = &email {
            social_links.push(SocialLink {
                href: format!("mailto:{}", email),
                label: "Email",
                icon: "fas fa-envelope",
            });
        }
        for (platform, url) in record.social.links() {
            let (label, icon) = match platform {
                SocialPlatform::LinkedIn => ("LinkedIn", "fab fa-linkedin"),
                SocialPlatform::Portfolio => ("Portfolio", "fas fa-globe"),
                SocialPlatform::GitHub => ("GitHub", "fab fa-github"),
            };
            social_links.push(SocialLink {
                href: url.to_string(),
                label,
                icon,
            });
        }

        let nav = plan
            .iter()
            .map(|section| NavItem {
                title: section.nav_label().to_string(),
                path: format!("#{}", section.id()),
            })
            .collect();

        Self {
            name: record.name.clone(),
            title: record.title.clone(),
            subtitle: record.subtitle.clone(),
            email,
            phone: record.social.phone().map(str::to_string),
            social_links,
            summary: SummaryBlock {
                heading: record.summary.heading().to_string(),
                content: record.summary.content.clone(),
                highlights: record.summary.highlights.clone(),
                certifications: record.summary.certifications.clone(),
            },
            experience: record.experience.clone(),
            skills: record.skills.clone(),
            education: record.education.clone(),
            accomplishments: record.accomplishments.clone(),
            theme: ThemeColors {
                primary: record.theme.primary().to_string(),
                secondary: record.theme.secondary().to_string(),
                accent: record.theme.accent().to_string(),
            },
            nav,
            view_work: plan.contains(&Section::Experience),
        }
    }
}

#[derive(Serialize)]
struct PageContext<'a> {
    #[serde(flatten)]
    context: &'a Context,
    blocks: &'a [String],
}

/// Template engine using minijinja.
///
/// Auto-escaping is switched off for every template: record fields are
/// trusted, author-written text and may carry inline markup.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);

        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .expect("built-in template must parse");
        }

        Self { env }
    }

    /// Render one section block.
    pub fn render_section(
        &self,
        section: Section,
        context: &Context,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(&format!("{}.html", section.id()))?;
        tmpl.render(context)
    }

    /// Render the full document around already-rendered section blocks.
    pub fn render_page(
        &self,
        context: &Context,
        blocks: &[String],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;
        tmpl.render(PageContext { context, blocks })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const TEMPLATES: [(&str, &str); 8] = [
    ("page.html", PAGE_TEMPLATE),
    ("home.html", HOME_TEMPLATE),
    ("summary.html", SUMMARY_TEMPLATE),
    ("accomplishments.html", ACCOMPLISHMENTS_TEMPLATE),
    ("experience.html", EXPERIENCE_TEMPLATE),
    ("skills.html", SKILLS_TEMPLATE),
    ("education.html", EDUCATION_TEMPLATE),
    ("contact.html", CONTACT_TEMPLATE),
];

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{{ name }} - {{ title }}">
    <meta name="author" content="{{ name }}">
    <title>{{ name }} - {{ title }}</title>
    <link rel="stylesheet" href="styles.css">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">
    <style>
        :root {
            --primary-color: {{ theme.primary }};
            --secondary-color: {{ theme.secondary }};
            --accent-color: {{ theme.accent }};
        }
    </style>
</head>
<body>
    <!-- Navigation -->
    <nav class="navbar">
        <div class="container">
            <div class="nav-brand">{{ name }}</div>
            <ul class="nav-menu">
{% for item in nav %}
                <li><a href="{{ item.path }}">{{ item.title }}</a></li>
{% endfor %}
            </ul>
            <div class="hamburger">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    </nav>
{% for html in blocks %}

{{ html }}
{% endfor %}

    <!-- Footer -->
    <footer class="footer">
        <div class="container">
            <p>&copy; {{ name }}. All rights reserved.</p>
        </div>
    </footer>

    <script src="script.js"></script>
</body>
</html>
"##;

const HOME_TEMPLATE: &str = r##"    <!-- Hero Section -->
    <section id="home" class="hero">
        <div class="container">
            <div class="hero-content">
                <h1 class="hero-title">{{ name }}</h1>
                <h2 class="hero-subtitle">{{ title }}</h2>
                <p class="hero-description">{{ subtitle }}</p>
                <div class="hero-buttons">
                    <a href="#contact" class="btn btn-primary">Get In Touch</a>
{% if view_work %}
                    <a href="#experience" class="btn btn-secondary">View Work</a>
{% endif %}
                </div>
                <div class="social-links">
{% for link in social_links %}
                    <a href="{{ link.href }}" target="_blank" aria-label="{{ link.label }}"><i class="{{ link.icon }}"></i></a>
{% endfor %}
                </div>
            </div>
        </div>
    </section>"##;

const SUMMARY_TEMPLATE: &str = r##"    <!-- Professional Summary -->
    <section id="summary" class="section summary-section">
        <div class="container">
            <h2 class="section-title">{{ summary.heading }}</h2>
            <div class="summary-content">
                <p>{{ summary.content }}</p>
                <div class="summary-highlights">
{% for highlight in summary.highlights %}
                    <div class="highlight-item">
                        <i class="fas fa-{{ highlight.icon }}"></i>
                        <p><strong>{{ highlight.title }}</strong> {{ highlight.description }}</p>
                    </div>
{% endfor %}
                </div>
{% if summary.certifications %}
                <div class="certifications">
{% for cert in summary.certifications %}
                    <span class="cert-badge"><i class="fas fa-certificate"></i>{{ cert }}</span>
{% endfor %}
                </div>
{% endif %}
            </div>
        </div>
    </section>"##;

const ACCOMPLISHMENTS_TEMPLATE: &str = r##"    <!-- Accomplishments -->
    <section id="accomplishments" class="section accomplishments-section">
        <div class="container">
            <h2 class="section-title">Accomplishments &amp; Awards</h2>
            <div class="accomplishments-grid">
{% for award in accomplishments %}
                <div class="accomplishment-card">
                    <div class="award-icon">{{ award.icon or "🏆" }}</div>
                    <h3>{{ award.title }}</h3>
{% if award.position %}
                    <p class="award-position">{{ award.position }}</p>
{% endif %}
                    <p>{{ award.description }}</p>
                </div>
{% endfor %}
            </div>
        </div>
    </section>"##;

const EXPERIENCE_TEMPLATE: &str = r##"    <!-- Work Experience -->
    <section id="experience" class="section experience-section">
        <div class="container">
            <h2 class="section-title">Work Experience</h2>
            <div class="timeline">
{% for job in experience %}
                <div class="timeline-item">
                    <div class="timeline-marker"></div>
                    <div class="timeline-content">
                        <div class="timeline-header">
                            <h3>{{ job.title }}</h3>
                            <span class="company">{{ job.company }}</span>
                            <span class="location">{{ job.location }}</span>
                            <span class="duration">{{ job.duration }}</span>
                        </div>
                        <ul class="timeline-details">
{% for item in job.highlights %}
                            <li>{{ item }}</li>
{% endfor %}
                        </ul>
                        <div class="tech-tags">
{% for tech in job.technologies %}
                            <span>{{ tech }}</span>
{% endfor %}
                        </div>
                    </div>
                </div>
{% endfor %}
            </div>
        </div>
    </section>"##;

const SKILLS_TEMPLATE: &str = r##"    <!-- Skills -->
    <section id="skills" class="section skills-section">
        <div class="container">
            <h2 class="section-title">Skills</h2>
            <div class="skills-grid">
{% for skill in skills %}
                <div class="skill-category">
                    <h3>{{ skill.category }}</h3>
                    <div class="skill-items">
{% for item in skill.items %}
                        <div class="skill-item">{{ item }}</div>
{% endfor %}
                    </div>
                </div>
{% endfor %}
            </div>
        </div>
    </section>"##;

const EDUCATION_TEMPLATE: &str = r##"    <!-- Education -->
    <section id="education" class="section education-section">
        <div class="container">
            <h2 class="section-title">Education</h2>
            <div class="education-list">
{% for edu in education %}
                <div class="education-item">
                    <div class="education-header">
                        <h3>{{ edu.degree }}</h3>
                        <span class="education-year">{{ edu.year }}</span>
                    </div>
                    <p class="education-field">{{ edu.field }}</p>
                    <p class="education-institution">{{ edu.institution }}</p>
{% if edu.details %}
                    <p class="education-details">{{ edu.details }}</p>
{% endif %}
                </div>
{% endfor %}
            </div>
        </div>
    </section>"##;

const CONTACT_TEMPLATE: &str = r##"    <!-- Contact Section -->
    <section id="contact" class="section contact-section">
        <div class="container">
            <h2 class="section-title">Get In Touch</h2>
            <div class="contact-content">
                <p>Feel free to reach out to me via email or connect with me on social media.</p>
                <div class="contact-info">
{% if email %}
                    <p><strong>Email:</strong> <a href="mailto:{{ email }}">{{ email }}</a></p>
{% endif %}
{% if phone %}
                    <p><strong>Phone:</strong> {{ phone }}</p>
{% endif %}
                </div>
            </div>
        </div>
    </section>"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> ResumeRecord {
        ResumeRecord::from_json(json).unwrap()
    }

    #[test]
    fn renders_single_section() {
        let record = record(
            r#"{
                "name": "Jane Doe",
                "title": "Engineer",
                "skills": [ { "category": "Languages", "items": ["Rust", "Go"] } ]
            }"#,
        );
        let plan = Section::plan(&record);
        let engine = TemplateEngine::new();

        let html = engine
            .render_section(Section::Skills, &Context::new(&record, &plan))
            .unwrap();

        assert!(html.contains(r#"<section id="skills""#));
        assert!(html.contains("<h3>Languages</h3>"));
        assert!(html.contains(r#"<div class="skill-item">Go</div>"#));
    }

    #[test]
    fn does_not_escape_markup() {
        let record = record(
            r#"{
                "name": "Jane Doe",
                "title": "Engineer",
                "summary": { "content": "I ship <strong>fast</strong> & safe code" }
            }"#,
        );
        let plan = Section::plan(&record);
        let engine = TemplateEngine::new();

        let html = engine
            .render_section(Section::Summary, &Context::new(&record, &plan))
            .unwrap();

        assert!(html.contains("<p>I ship <strong>fast</strong> & safe code</p>"));
    }

    #[test]
    fn contact_omits_missing_details() {
        let record = record(r#"{ "name": "Jane Doe", "title": "Engineer", "email": "" }"#);
        let plan = Section::plan(&record);
        let engine = TemplateEngine::new();

        let html = engine
            .render_section(Section::Contact, &Context::new(&record, &plan))
            .unwrap();

        assert!(html.contains(r#"<section id="contact""#));
        assert!(!html.contains("Email:"));
        assert!(!html.contains("Phone:"));
        assert!(!html.contains("none"));
    }

    #[test]
    fn accomplishment_icon_defaults_to_trophy() {
        let record = record(
            r#"{
                "name": "Jane Doe",
                "title": "Engineer",
                "accomplishments": [
                    { "title": "Hackathon", "description": "Built a thing" },
                    { "icon": "🥇", "title": "Marathon", "position": "1st", "description": "Ran" }
                ]
            }"#,
        );
        let plan = Section::plan(&record);
        let engine = TemplateEngine::new();

        let html = engine
            .render_section(Section::Accomplishments, &Context::new(&record, &plan))
            .unwrap();

        assert!(html.contains(r#"<div class="award-icon">🏆</div>"#));
        assert!(html.contains(r#"<div class="award-icon">🥇</div>"#));
        assert_eq!(html.matches("award-position").count(), 1);
    }

    #[test]
    fn nav_follows_plan() {
        let record = record(r#"{ "name": "Jane Doe", "title": "Engineer" }"#);
        let plan = Section::plan(&record);

        let context = Context::new(&record, &plan);

        assert_eq!(
            context.nav,
            vec![
                NavItem {
                    title: "Home".to_string(),
                    path: "#home".to_string(),
                },
                NavItem {
                    title: "Contact".to_string(),
                    path: "#contact".to_string(),
                },
            ]
        );
        assert!(!context.view_work);
    }
}
