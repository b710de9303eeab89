//! Static content store for the portfolio page.
//!
//! All records are authored constants compiled into the binary; there is no
//! runtime loading or mutation. [`Portfolio::get`] returns the single source
//! of truth that the renderers and the JSON export operate on.

mod data;

use serde::Serialize;

pub use data::PORTFOLIO;

/// One skill area with a proficiency percentage and its chart color.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillEntry {
    pub name: &'static str,
    /// Proficiency in percent, 0-100.
    pub value: u8,
    /// Hex color token used by the charts (e.g. `#3b82f6`).
    pub color: &'static str,
}

/// One point on the career evolution timeline.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExperiencePoint {
    pub year: &'static str,
    /// Seniority level in percent, 0-100.
    pub level: u8,
}

/// One axis of the skills radar.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RadarAxis {
    pub subject: &'static str,
    pub score: u8,
    pub full_mark: u8,
}

/// One tool or technology with its proficiency and category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TechnologyEntry {
    pub name: &'static str,
    pub level: u8,
    pub category: &'static str,
}

/// One certification. `org` and `id` are optional because not every
/// certificate carries them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CertificationEntry {
    pub name: &'static str,
    pub year: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'static str>,
}

/// A colored label badge shown in the about section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub color: &'static str,
}

/// A titled highlight card summarizing one area of expertise.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HighlightCard {
    pub title: &'static str,
    pub body: &'static str,
    pub color: &'static str,
}

/// The single professional engagement shown on the timeline.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub duties: &'static [&'static str],
}

/// One academic degree.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
}

/// A spoken language and its fluency label.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LanguageEntry {
    pub name: &'static str,
    pub level: &'static str,
}

/// One outbound contact channel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
    pub url: &'static str,
}

/// Identity block rendered in the hero and about sections.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub bio: &'static [&'static str],
    pub badges: &'static [Badge],
}

/// Contact section copy and links.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Contact {
    pub blurb: &'static str,
    pub callout_title: &'static str,
    pub callout_body: &'static str,
    pub links: &'static [ContactLink],
}

/// The complete portfolio content, one static instance.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub highlights: &'static [HighlightCard],
    pub job: JobEntry,
    pub skills: &'static [SkillEntry],
    pub experience: &'static [ExperiencePoint],
    pub radar: &'static [RadarAxis],
    pub technologies: &'static [TechnologyEntry],
    pub education: &'static [EducationEntry],
    pub languages: &'static [LanguageEntry],
    pub certifications: &'static [CertificationEntry],
    pub contact: Contact,
    pub footer: &'static str,
}

impl Portfolio {
    /// The authored portfolio content.
    #[must_use]
    pub const fn get() -> &'static Self {
        &PORTFOLIO
    }
}

/// Outcome of a content consistency check.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ContentReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ContentReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validate the authored tables: percentage ranges, ordering of the
/// experience timeline, and minimal shape of each record.
#[must_use]
pub fn validate(portfolio: &Portfolio) -> ContentReport {
    let mut report = ContentReport::default();

    if portfolio.profile.name.trim().is_empty() {
        report.errors.push("profile name is empty".to_string());
    }
    if portfolio.profile.bio.is_empty() {
        report.errors.push("profile bio has no paragraphs".to_string());
    }

    for skill in portfolio.skills {
        check_percent(&mut report, "skill", skill.name, skill.value);
        check_color(&mut report, skill.name, skill.color);
    }
    check_unique_names(&mut report, "skill", portfolio.skills.iter().map(|s| s.name));

    let mut prev_year: Option<u16> = None;
    let mut prev_level: Option<u8> = None;
    for point in portfolio.experience {
        check_percent(&mut report, "experience", point.year, point.level);
        match point.year.parse::<u16>() {
            Ok(year) => {
                if prev_year.is_some_and(|p| year <= p) {
                    report
                        .errors
                        .push(format!("experience years not ascending at {}", point.year));
                }
                prev_year = Some(year);
            }
            Err(_) => report
                .errors
                .push(format!("experience year {:?} is not numeric", point.year)),
        }
        if prev_level.is_some_and(|p| point.level < p) {
            report
                .warnings
                .push(format!("experience level drops at {}", point.year));
        }
        prev_level = Some(point.level);
    }

    for axis in portfolio.radar {
        check_percent(&mut report, "radar", axis.subject, axis.score);
        if axis.full_mark != 100 {
            report
                .warnings
                .push(format!("radar axis {} full_mark is not 100", axis.subject));
        }
        if axis.score > axis.full_mark {
            report
                .errors
                .push(format!("radar axis {} exceeds its full mark", axis.subject));
        }
    }

    for tech in portfolio.technologies {
        check_percent(&mut report, "technology", tech.name, tech.level);
        if tech.category.trim().is_empty() {
            report
                .errors
                .push(format!("technology {} has no category", tech.name));
        }
    }
    check_unique_names(
        &mut report,
        "technology",
        portfolio.technologies.iter().map(|t| t.name),
    );

    for cert in portfolio.certifications {
        if cert.name.trim().is_empty() {
            report.errors.push("certification with empty name".to_string());
        }
        if cert.year.len() != 4 || cert.year.parse::<u16>().is_err() {
            report
                .errors
                .push(format!("certification {:?} has invalid year {:?}", cert.name, cert.year));
        }
    }

    if portfolio.education.is_empty() {
        report.warnings.push("no education entries".to_string());
    }
    if portfolio.languages.is_empty() {
        report.warnings.push("no language entries".to_string());
    }

    for link in portfolio.contact.links {
        if !(link.url.starts_with("https://") || link.url.starts_with("mailto:")) {
            report
                .errors
                .push(format!("contact link {} has unsupported url scheme", link.label));
        }
    }
    if !portfolio
        .contact
        .links
        .iter()
        .any(|l| l.url.starts_with("mailto:") && l.value.contains('@'))
    {
        report.warnings.push("no email contact link".to_string());
    }

    report
}

fn check_percent(report: &mut ContentReport, kind: &str, name: &str, value: u8) {
    if value > 100 {
        report
            .errors
            .push(format!("{kind} {name} has value {value} above 100"));
    }
}

fn check_color(report: &mut ContentReport, name: &str, color: &str) {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        report
            .errors
            .push(format!("skill {name} has malformed color token {color:?}"));
    }
}

fn check_unique_names<'a>(
    report: &mut ContentReport,
    kind: &str,
    names: impl Iterator<Item = &'a str>,
) {
    let mut seen = std::collections::HashSet::new();
    for name in names {
        if !seen.insert(name) {
            report.errors.push(format!("duplicate {kind} name {name:?}"));
        }
    }
}
