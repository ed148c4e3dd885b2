//! ANSI painter for the presentation description.
//!
//! Chips are numbered per painted entry so `:N` can activate them from the
//! prompt.

use colored::{Color, ColoredString, Colorize};

use folio_core::pages::Page;
use folio_core::render::{Block, Chip, LineStyle, RenderedEntry, Span, TextLine};
use folio_core::session::Notice;
use folio_core::theme::Theme;

pub const PROMPT: &str = "➜ ~ ";

/// Colour roles for one theme.
#[derive(Debug, Clone, Copy)]
struct Palette {
    accent: Color,
    success: Color,
    chip: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                accent: Color::BrightGreen,
                success: Color::BrightCyan,
                chip: Color::BrightYellow,
            },
            Theme::Light => Self {
                accent: Color::Blue,
                success: Color::Green,
                chip: Color::Magenta,
            },
        }
    }
}

pub struct Painter {
    palette: Palette,
    chips: Vec<Chip>,
}

impl Painter {
    pub fn new(theme: Theme) -> Self {
        Self {
            palette: Palette::for_theme(theme),
            chips: Vec::new(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.palette = Palette::for_theme(theme);
    }

    /// Chip `n` (1-based) of the most recently painted entry.
    pub fn chip(&self, n: usize) -> Option<&Chip> {
        n.checked_sub(1).and_then(|i| self.chips.get(i))
    }

    /// Paint one entry: echo, block and suggestions. Renumbers chips.
    pub fn entry(&mut self, entry: &RenderedEntry) -> String {
        self.chips.clear();
        let mut out = vec![format!(
            "{} {} {}",
            "➜".color(self.palette.accent),
            "~".color(self.palette.success),
            entry.echo.dimmed()
        )];
        for line in self.block(&entry.block) {
            out.push(format!("  {line}"));
        }
        if !entry.suggestions.is_empty() {
            let chips: Vec<String> = entry
                .suggestions
                .iter()
                .map(|chip| self.chip_token(chip))
                .collect();
            out.push(String::new());
            out.push(format!("  {} {}", "next:".dimmed(), chips.join(" ")));
        }
        out.join("\n")
    }

    fn chip_token(&mut self, chip: &Chip) -> String {
        self.chips.push(chip.clone());
        let token = format!("[{}:{}]", self.chips.len(), chip.label);
        token.color(self.palette.chip).underline().to_string()
    }

    fn block(&mut self, block: &Block) -> Vec<String> {
        match block {
            Block::Text(lines) => lines.iter().map(|l| self.text_line(l)).collect(),
            Block::Status(status) => {
                let mut out = vec![status.title.color(self.palette.accent).bold().to_string()];
                for row in &status.rows {
                    out.push(format!("{:12} {}", row.label.dimmed(), row.value.bold()));
                }
                out.push(String::new());
                out.push("CORE METRICS".dimmed().to_string());
                for m in &status.metrics {
                    out.push(format!(
                        "{:18} {}",
                        m.label.dimmed(),
                        m.value.color(self.palette.success)
                    ));
                }
                out
            },
            Block::Projects(projects) => {
                let mut out = Vec::new();
                for item in &projects.items {
                    let chip = self.chip_token(&item.chip);
                    out.push(format!(
                        "{} {:16} {}",
                        "*".color(self.palette.accent),
                        item.name.bold(),
                        chip
                    ));
                    out.push(format!("    {}", item.description));
                    if item.expanded {
                        out.push(format!("    {}", "─".repeat(40).dimmed()));
                        for line in &item.detail {
                            let painted = self.text_line(line);
                            out.push(format!("    {painted}"));
                        }
                    }
                }
                if let Some(footer) = &projects.footer {
                    out.push(footer.dimmed().to_string());
                }
                out
            },
            Block::Architecture(arch) => {
                let mut out = vec![arch.heading.color(self.palette.accent).bold().to_string()];
                for p in &arch.principles {
                    out.push(p.label.bold().to_string());
                    out.push(format!("   {}", p.value.dimmed()));
                }
                out.push(String::new());
                out.push(arch.closing.italic().to_string());
                out
            },
            Block::Recruiter(r) => {
                let mut out = vec![
                    r.name.color(self.palette.accent).bold().to_string(),
                    r.title.clone(),
                ];
                if let Some(loc) = &r.location {
                    out.push(loc.dimmed().to_string());
                }
                out.push(String::new());
                out.push(r.headline.italic().to_string());
                out.extend(r.about.iter().cloned());
                out.push(String::new());
                out.push(section("Highlights"));
                for f in &r.highlights {
                    out.push(format!("{} {}", f.label.bold(), f.value));
                }
                out.push(section("Experience"));
                for e in &r.experience {
                    out.push(format!("{} {}", e.heading.bold(), e.duration.dimmed()));
                    for b in &e.bullets {
                        out.push(format!("  - {b}"));
                    }
                    if e.hidden > 0 {
                        let note = format!("  ({} more, :evidence to show)", e.hidden);
                        out.push(note.dimmed().to_string());
                    }
                }
                out.push(section("Skills"));
                for f in &r.skills {
                    out.push(format!("{}: {}", f.label.dimmed(), f.value));
                }
                out.push(section("Recent activity"));
                for line in &r.recent {
                    out.push(format!("- {line}"));
                }
                out.push(section("Contact"));
                for f in &r.contact {
                    out.push(format!("{}: {}", f.label.dimmed(), f.value));
                }
                let actions: Vec<String> = r.actions.iter().map(|c| self.chip_token(c)).collect();
                out.push(actions.join(" "));
                out
            },
        }
    }

    fn text_line(&mut self, line: &TextLine) -> String {
        let mut out = String::new();
        for span in &line.spans {
            match span {
                Span::Text(t) => out.push_str(&self.style(line.style, t).to_string()),
                Span::Chip(c) => out.push_str(&self.chip_token(c)),
            }
        }
        out
    }

    fn style(&self, style: LineStyle, text: &str) -> ColoredString {
        match style {
            LineStyle::Header => text.color(self.palette.accent).bold(),
            LineStyle::Divider => text.dimmed(),
            LineStyle::SubLabel => text.dimmed().bold(),
            LineStyle::Accent => text.color(self.palette.accent),
            LineStyle::Dim => text.dimmed(),
            LineStyle::Normal => text.normal(),
        }
    }
}

fn section(title: &str) -> String {
    format!("\n{}", title.to_uppercase().dimmed())
}

/// Paint a static page with its key-bound actions.
pub fn page(page: &Page, theme: Theme) -> String {
    let palette = Palette::for_theme(theme);
    let mut out = vec![
        page.eyebrow.to_uppercase().dimmed().to_string(),
        page.title.color(palette.accent).bold().to_string(),
        page.subtitle.clone(),
    ];
    for section in &page.sections {
        out.push(String::new());
        out.push(section.heading.bold().to_string());
        out.extend(section.lines.iter().map(|l| format!("  {l}")));
    }
    out.push(String::new());
    let actions: Vec<String> = page
        .actions
        .iter()
        .map(|a| format!("[{}] {}", a.key.to_string().color(palette.chip).bold(), a.label))
        .collect();
    out.push(actions.join("   "));
    out.push("[q] Quit".dimmed().to_string());
    out.join("\n")
}

pub fn banner() -> String {
    format!(
        "{}\n{}",
        "Frontend System Interface v1.0".bold(),
        "Booting...".dimmed()
    )
}

pub fn notice(notice: Notice) -> String {
    format!("{} {}", "::".bright_black(), notice.message().italic())
}

pub fn hint(recommendation: &str) -> String {
    format!("Try '{recommendation}', or press Tab to complete a command.")
        .dimmed()
        .to_string()
}

pub fn system(text: &str) -> String {
    text.bright_black().to_string()
}
