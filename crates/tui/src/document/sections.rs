//! Per-section renderers. Each one turns part of the portfolio content into
//! role-tagged rows no wider than the requested text width.

use folio_types::{PortfolioContent, SectionDescriptor};
use textwrap::Options;
use unicode_width::UnicodeWidthStr;

use super::{DocLine, TextRole, TextRun, icon_glyph};

pub(super) const HERO_SECTION: &str = "home";

/// Blank rows closing every section.
const SECTION_GAP: usize = 2;
/// Narrowest width the renderers lay text out for.
const MIN_TEXT_WIDTH: usize = 16;
const MAX_BAR_WIDTH: usize = 24;

type Renderer = fn(&PortfolioContent, &mut LineWriter);

fn renderer_for(id: &str) -> Option<Renderer> {
    let renderer: Renderer = match id {
        "home" => render_hero,
        "about" => render_about,
        "education" => render_education,
        "experience" => render_experience,
        "publications" => render_publications,
        "skills" => render_skills,
        "awards" => render_awards,
        "contact" => render_contact,
        _ => return None,
    };
    Some(renderer)
}

/// Whether a section id has content to render.
pub fn has_renderer(id: &str) -> bool {
    renderer_for(id).is_some()
}

pub(super) fn render(descriptor: &SectionDescriptor, content: &PortfolioContent, width: usize) -> Option<Vec<DocLine>> {
    let renderer = renderer_for(descriptor.id.as_str())?;
    let mut writer = LineWriter::new(width);
    if descriptor.id.as_str() != HERO_SECTION {
        writer.heading(icon_glyph(&descriptor.icon), &descriptor.label);
    }
    renderer(content, &mut writer);
    writer.gap(SECTION_GAP);
    Some(writer.finish())
}

struct LineWriter {
    width: usize,
    lines: Vec<DocLine>,
}

impl LineWriter {
    fn new(width: usize) -> Self {
        Self {
            width: width.max(MIN_TEXT_WIDTH),
            lines: Vec::new(),
        }
    }

    fn finish(self) -> Vec<DocLine> {
        self.lines
    }

    fn gap(&mut self, rows: usize) {
        self.lines.extend(std::iter::repeat_with(DocLine::blank).take(rows));
    }

    fn push(&mut self, runs: Vec<TextRun>, centered: bool) {
        self.lines.push(DocLine { runs, centered });
    }

    fn heading(&mut self, glyph: &str, label: &str) {
        self.push(
            vec![TextRun::new(glyph, TextRole::Accent), TextRun::new(" ", TextRole::Body), TextRun::new(label, TextRole::Heading)],
            false,
        );
        let rule_width = (glyph.width() + 1 + label.width() + 4).min(self.width);
        self.push(vec![TextRun::new("─".repeat(rule_width), TextRole::Rule)], false);
        self.gap(1);
    }

    /// Word-wrapped paragraph in a single role.
    fn wrapped(&mut self, text: &str, role: TextRole, centered: bool) {
        for line in textwrap::wrap(text.trim(), self.width) {
            self.push(vec![TextRun::new(line.into_owned(), role)], centered);
        }
    }

    /// Bulleted item with a hanging indent.
    fn bullet(&mut self, marker: &str, text: &str, role: TextRole) {
        let indent = " ".repeat(marker.width() + 1);
        let initial = format!("{marker} ");
        let options = Options::new(self.width).initial_indent(&initial).subsequent_indent(&indent);
        for (index, line) in textwrap::wrap(text.trim(), options).into_iter().enumerate() {
            let lead_len = if index == 0 { initial.len() } else { indent.len() };
            let (lead, rest) = line.split_at(lead_len.min(line.len()));
            let lead_role = if index == 0 { TextRole::Accent } else { role };
            self.push(vec![TextRun::new(lead, lead_role), TextRun::new(rest, role)], false);
        }
    }

    /// `left · right` metadata, wrapped when it does not fit.
    fn meta(&mut self, left: &str, right: &str) {
        let joined = match (left.is_empty(), right.is_empty()) {
            (false, false) => format!("{left} · {right}"),
            (false, true) => left.to_string(),
            (true, _) => right.to_string(),
        };
        self.wrapped(&joined, TextRole::Secondary, false);
    }

    /// `glyph name ████░░░ 90%`; the bar moves to its own row on narrow widths.
    fn level_bar(&mut self, glyph: &str, name: &str, level: u8, name_column: usize) {
        let level = level.min(100);
        let percent = format!("{level:>3}%");
        let label = format!("{glyph} {name}");
        let inline_bar = self.width.saturating_sub(name_column + 2 + 1 + percent.width());
        let (bar_width, inline) = if inline_bar >= 8 {
            (inline_bar.min(MAX_BAR_WIDTH), true)
        } else {
            (self.width.saturating_sub(2 + 1 + percent.width()).clamp(1, MAX_BAR_WIDTH), false)
        };
        let filled = (bar_width * usize::from(level) + 50) / 100;
        let bar = vec![
            TextRun::new("█".repeat(filled), TextRole::Accent),
            TextRun::new("░".repeat(bar_width - filled), TextRole::Muted),
            TextRun::new(format!(" {percent}"), TextRole::Secondary),
        ];
        if inline {
            let padding = " ".repeat(name_column.saturating_sub(label.width()) + 2);
            let mut runs = vec![TextRun::new(label, TextRole::Emphasis), TextRun::new(padding, TextRole::Body)];
            runs.extend(bar);
            self.push(runs, false);
        } else {
            self.wrapped(&label, TextRole::Emphasis, false);
            let mut runs = vec![TextRun::new("  ", TextRole::Body)];
            runs.extend(bar);
            self.push(runs, false);
        }
    }
}

fn render_hero(content: &PortfolioContent, writer: &mut LineWriter) {
    let profile = &content.profile;
    writer.push(vec![TextRun::new(format!(" {} ", profile.monogram()), TextRole::Badge)], true);
    writer.gap(1);
    writer.wrapped(&profile.name, TextRole::Title, true);
    writer.wrapped(&profile.headline, TextRole::Accent, true);
    if !profile.taglines.is_empty() {
        writer.wrapped(&profile.taglines.join(" · "), TextRole::Secondary, true);
    }
    writer.gap(1);
    writer.wrapped(&profile.summary, TextRole::Body, true);
    writer.gap(1);
    writer.push(
        vec![TextRun::new("▼ Explore", TextRole::Action), TextRun::new(" (Enter)", TextRole::Muted)],
        true,
    );
}

fn render_about(content: &PortfolioContent, writer: &mut LineWriter) {
    let profile = &content.profile;
    if !profile.about_title.is_empty() {
        writer.wrapped(&profile.about_title, TextRole::Emphasis, false);
        writer.gap(1);
    }
    for paragraph in &profile.about {
        writer.wrapped(paragraph, TextRole::Body, false);
        writer.gap(1);
    }
    if let Some(location) = profile.location.as_deref() {
        writer.bullet("⌖", location, TextRole::Secondary);
    }
    if !profile.languages.is_empty() {
        writer.bullet("✎", &profile.languages.join(", "), TextRole::Secondary);
    }
}

fn render_education(content: &PortfolioContent, writer: &mut LineWriter) {
    for (index, entry) in content.education.iter().enumerate() {
        if index > 0 {
            writer.gap(1);
        }
        writer.wrapped(&entry.degree, TextRole::Emphasis, false);
        writer.meta(&entry.institution, &entry.period);
        if let Some(details) = entry.details.as_deref() {
            writer.wrapped(details, TextRole::Body, false);
        }
    }
}

fn render_experience(content: &PortfolioContent, writer: &mut LineWriter) {
    for (index, entry) in content.experience.iter().enumerate() {
        if index > 0 {
            writer.gap(1);
        }
        writer.wrapped(&entry.role, TextRole::Emphasis, false);
        writer.meta(&entry.organization, &entry.period);
        if !entry.summary.is_empty() {
            writer.gap(1);
            writer.wrapped(&entry.summary, TextRole::Body, false);
        }
        for group in &entry.highlights {
            writer.gap(1);
            writer.wrapped(&group.heading, TextRole::Accent, false);
            for item in &group.items {
                writer.bullet("•", item, TextRole::Body);
            }
        }
    }
}

fn render_publications(content: &PortfolioContent, writer: &mut LineWriter) {
    for (index, publication) in content.publications.iter().enumerate() {
        if index > 0 {
            writer.gap(1);
        }
        writer.wrapped(&publication.title, TextRole::Emphasis, false);
        writer.wrapped(&publication.venue, TextRole::Muted, false);
        if !publication.summary.is_empty() {
            writer.wrapped(&publication.summary, TextRole::Body, false);
        }
    }
}

fn render_skills(content: &PortfolioContent, writer: &mut LineWriter) {
    let glyph_of = |glyph: Option<&str>| glyph.unwrap_or("•").to_string();
    let name_column = content
        .skills
        .iter()
        .map(|skill| glyph_of(skill.glyph.as_deref()).width() + 1 + skill.name.width())
        .max()
        .unwrap_or_default();
    for skill in &content.skills {
        writer.level_bar(&glyph_of(skill.glyph.as_deref()), &skill.name, skill.level, name_column);
    }
}

fn render_awards(content: &PortfolioContent, writer: &mut LineWriter) {
    for (index, award) in content.awards.iter().enumerate() {
        if index > 0 {
            writer.gap(1);
        }
        writer.bullet("★", &award.title, TextRole::Emphasis);
        writer.meta(&award.organization, "");
        if !award.description.is_empty() {
            writer.wrapped(&award.description, TextRole::Body, false);
        }
    }
}

fn render_contact(content: &PortfolioContent, writer: &mut LineWriter) {
    let contact = &content.contact;
    if !contact.call_to_action.is_empty() {
        writer.wrapped(&contact.call_to_action, TextRole::Body, false);
        writer.gap(1);
    }
    writer.bullet("✉", &contact.email, TextRole::Emphasis);
    if let Some(phone) = contact.phone.as_deref() {
        writer.bullet("☎", phone, TextRole::Secondary);
    }
    if let Some(location) = contact.location.as_deref() {
        writer.bullet("⌖", location, TextRole::Secondary);
    }
    writer.gap(1);
    writer.push(
        vec![TextRun::new("[ m ]", TextRole::Action), TextRun::new(" Send email", TextRole::Muted)],
        false,
    );
    writer.push(
        vec![TextRun::new("[ y ]", TextRole::Action), TextRun::new(" Copy address", TextRole::Muted)],
        false,
    );
}
