//! Section builder for rendered documents

use std::fmt;

/// A single line inside a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionLine {
    /// Printed as-is
    Text(String),
    /// Printed with a `- ` marker
    Bullet(String),
}

impl fmt::Display for SectionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Bullet(text) => write!(f, "- {}", text),
        }
    }
}

/// Labeled block of lines, rendered under a `# ` heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub lines: Vec<SectionLine>,
}

impl Section {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            lines: Vec::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.lines.push(SectionLine::Text(text.into()));
        self
    }

    pub fn bullet(mut self, text: impl Into<String>) -> Self {
        self.lines.push(SectionLine::Bullet(text.into()));
        self
    }

    pub fn bullets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines
            .extend(items.into_iter().map(|s| SectionLine::Bullet(s.into())));
        self
    }

    /// Bullet texts only, in order
    pub fn bullet_texts(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                SectionLine::Bullet(text) => Some(text.as_str()),
                SectionLine::Text(_) => None,
            })
            .collect()
    }
}

/// Ordered list of sections joined at the end
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.title).collect()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "# {}", section.title)?;
            for line in &section.lines {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}
