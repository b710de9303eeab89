//! Text projection of the portfolio page for non-interactive output.

use console::style;
use textwrap::fill;

use crate::cli::output::{Formattable, OutputFormat};
use crate::content::Portfolio;
use crate::nav::{SECTIONS, SectionId};

/// Renders the portfolio (or a single section of it) as flowing text.
///
/// Human output gets terminal styling and block-character meters; plain
/// output is pure ASCII. JSON output serializes the underlying tables
/// instead of the laid-out text.
#[derive(Debug, Clone)]
pub struct PageText<'a> {
    portfolio: &'a Portfolio,
    section: Option<SectionId>,
    width: usize,
}

impl<'a> PageText<'a> {
    pub const fn new(portfolio: &'a Portfolio) -> Self {
        Self {
            portfolio,
            section: None,
            width: 72,
        }
    }

    /// Restrict output to one section.
    #[must_use]
    pub const fn with_section(mut self, section: SectionId) -> Self {
        self.section = Some(section);
        self
    }

    /// Wrap paragraphs at the given column.
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn wants(&self, id: SectionId) -> bool {
        self.section.is_none_or(|s| s == id)
    }

    fn build_lines(&self, styled: bool) -> Vec<String> {
        let mut lines = Vec::new();

        for descriptor in &SECTIONS {
            if !self.wants(descriptor.id) {
                continue;
            }
            if !lines.is_empty() {
                lines.push(String::new());
            }
            match descriptor.id {
                SectionId::Home => self.hero_lines(&mut lines, styled),
                SectionId::About => self.about_lines(&mut lines, styled),
                SectionId::Experience => self.experience_lines(&mut lines, styled),
                SectionId::Skills => self.skills_lines(&mut lines, styled),
                SectionId::Education => self.education_lines(&mut lines, styled),
                SectionId::Contact => self.contact_lines(&mut lines, styled),
            }
        }

        if self.section.is_none() {
            lines.push(String::new());
            lines.push(dim(self.portfolio.footer, styled));
        }

        lines
    }

    fn hero_lines(&self, lines: &mut Vec<String>, styled: bool) {
        let profile = &self.portfolio.profile;
        lines.push(bold(profile.name, styled));
        lines.push(rule(profile.name.chars().count(), styled));
        lines.push(cyan(profile.headline, styled));
        lines.push(String::new());
        self.push_wrapped(lines, profile.tagline);
    }

    fn about_lines(&self, lines: &mut Vec<String>, styled: bool) {
        let profile = &self.portfolio.profile;
        heading(lines, SectionId::About.label(), styled);
        for paragraph in profile.bio {
            lines.push(String::new());
            self.push_wrapped(lines, paragraph);
        }

        lines.push(String::new());
        let separator = if styled { " · " } else { " | " };
        let badges = profile
            .badges
            .iter()
            .map(|b| b.label)
            .collect::<Vec<_>>()
            .join(separator);
        lines.push(cyan(&badges, styled));

        for card in self.portfolio.highlights {
            lines.push(String::new());
            lines.push(bold(card.title, styled));
            self.push_wrapped(lines, card.body);
        }
    }

    fn experience_lines(&self, lines: &mut Vec<String>, styled: bool) {
        let job = &self.portfolio.job;
        heading(lines, SectionId::Experience.label(), styled);
        lines.push(bold(job.role, styled));
        lines.push(dim(&format!("{} | {}", job.company, job.period), styled));
        lines.push(String::new());
        for duty in job.duties {
            self.push_bullet(lines, duty);
        }

        lines.push(String::new());
        lines.push(bold("Evolução", styled));
        for point in self.portfolio.experience {
            lines.push(format!(
                "{:>4}  {} {:>3}%",
                point.year,
                meter(point.level, 24, styled),
                point.level
            ));
        }
    }

    fn skills_lines(&self, lines: &mut Vec<String>, styled: bool) {
        heading(lines, SectionId::Skills.label(), styled);
        for skill in self.portfolio.skills {
            lines.push(format!(
                "{:<14} {} {:>3}%",
                skill.name,
                meter(skill.value, 24, styled),
                skill.value
            ));
        }

        lines.push(String::new());
        lines.push(bold("Tecnologias", styled));
        for tech in self.portfolio.technologies {
            lines.push(format!(
                "{:<17} {} {:>3}%  {}",
                tech.name,
                meter(tech.level, 20, styled),
                tech.level,
                dim(tech.category, styled)
            ));
        }

        lines.push(String::new());
        lines.push(bold("Radar", styled));
        for axis in self.portfolio.radar {
            lines.push(format!(
                "{:<14} {:>3}/{}",
                axis.subject, axis.score, axis.full_mark
            ));
        }
    }

    fn education_lines(&self, lines: &mut Vec<String>, styled: bool) {
        heading(lines, SectionId::Education.label(), styled);
        for entry in self.portfolio.education {
            lines.push(bold(entry.degree, styled));
            lines.push(dim(
                &format!("{} ({})", entry.institution, entry.year),
                styled,
            ));
            lines.push(String::new());
        }

        lines.push(bold("Idiomas", styled));
        for language in self.portfolio.languages {
            lines.push(format!("- {}: {}", language.name, language.level));
        }

        lines.push(String::new());
        lines.push(bold("Certificações", styled));
        for cert in self.portfolio.certifications {
            let mut line = format!("- {} ({})", cert.name, cert.year);
            if let Some(org) = cert.org {
                line.push_str(&format!(", {org}"));
            }
            if let Some(id) = cert.id {
                line.push_str(&format!(" [{id}]"));
            }
            lines.push(line);
        }
    }

    fn contact_lines(&self, lines: &mut Vec<String>, styled: bool) {
        let contact = &self.portfolio.contact;
        heading(lines, SectionId::Contact.label(), styled);
        self.push_wrapped(lines, contact.blurb);

        lines.push(String::new());
        for link in contact.links {
            lines.push(format!(
                "{:<10} {}  {}",
                link.label,
                link.value,
                dim(link.url, styled)
            ));
        }

        lines.push(String::new());
        lines.push(bold(contact.callout_title, styled));
        self.push_wrapped(lines, contact.callout_body);
    }

    fn push_wrapped(&self, lines: &mut Vec<String>, text: &str) {
        for line in fill(text, self.width).lines() {
            lines.push(line.to_string());
        }
    }

    fn push_bullet(&self, lines: &mut Vec<String>, text: &str) {
        let options = textwrap::Options::new(self.width)
            .initial_indent("- ")
            .subsequent_indent("  ");
        for line in fill(text, options).lines() {
            lines.push(line.to_string());
        }
    }

    /// The section's underlying tables as a JSON value (whole store when no
    /// section is selected). Machine output wraps this in the envelope.
    #[must_use]
    pub fn payload(&self) -> serde_json::Value {
        let p = self.portfolio;
        match self.section {
            None => serde_json::to_value(p).unwrap_or_default(),
            Some(SectionId::Home) => serde_json::json!({ "profile": p.profile }),
            Some(SectionId::About) => serde_json::json!({
                "profile": p.profile,
                "highlights": p.highlights,
            }),
            Some(SectionId::Experience) => serde_json::json!({
                "job": p.job,
                "experience": p.experience,
            }),
            Some(SectionId::Skills) => serde_json::json!({
                "skills": p.skills,
                "radar": p.radar,
                "technologies": p.technologies,
            }),
            Some(SectionId::Education) => serde_json::json!({
                "education": p.education,
                "languages": p.languages,
                "certifications": p.certifications,
            }),
            Some(SectionId::Contact) => serde_json::json!({ "contact": p.contact }),
        }
    }
}

impl Formattable for PageText<'_> {
    fn format(&self, fmt: OutputFormat) -> String {
        match fmt {
            OutputFormat::Human => self.build_lines(true).join("\n"),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&self.payload()).unwrap_or_default()
            }
            OutputFormat::Plain => self.build_lines(false).join("\n"),
        }
    }
}

fn heading(lines: &mut Vec<String>, text: &str, styled: bool) {
    lines.push(bold(text, styled));
    lines.push(rule(text.chars().count().max(3), styled));
}

fn rule(len: usize, styled: bool) -> String {
    if styled { "─" } else { "-" }.repeat(len)
}

fn bold(text: &str, styled: bool) -> String {
    if styled {
        style(text).bold().to_string()
    } else {
        text.to_string()
    }
}

fn dim(text: &str, styled: bool) -> String {
    if styled {
        style(text).dim().to_string()
    } else {
        text.to_string()
    }
}

fn cyan(text: &str, styled: bool) -> String {
    if styled {
        style(text).cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Fixed-width proficiency meter. Full at 100, empty at 0.
fn meter(value: u8, width: usize, styled: bool) -> String {
    let filled = usize::from(value.min(100)) * width / 100;
    let (on, off) = if styled { ('█', '░') } else { ('#', '.') };
    let mut out = String::with_capacity(width * on.len_utf8());
    for i in 0..width {
        out.push(if i < filled { on } else { off });
    }
    out
}
