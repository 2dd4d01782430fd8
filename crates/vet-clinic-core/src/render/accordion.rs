//! Collapsible sectioned view.

use super::RenderText;

/// A labelled value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Content block inside a section.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Loose fields (e.g. the primary record)
    Fields(Vec<Field>),
    /// Sub-heading
    Heading(String),
    /// One list item, closed by a rule
    Entry(Vec<Field>),
}

/// One collapsible section.
#[derive(Debug, Clone, PartialEq)]
pub struct AccordionSection {
    pub title: String,
    pub blocks: Vec<Block>,
    pub expanded: bool,
}

impl AccordionSection {
    /// A collapsed, empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
            expanded: false,
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Number of list entries.
    pub fn entry_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| matches!(block, Block::Entry(_)))
            .count()
    }

    /// Loose fields of the section, in order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        let none: &'static [Field] = &[];
        self.blocks.iter().flat_map(move |block| match block {
            Block::Fields(fields) => fields.as_slice(),
            _ => none,
        })
    }

    /// Value of the first loose field with this label.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }

    /// Check if the section shows nothing when expanded.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|block| match block {
            Block::Fields(fields) | Block::Entry(fields) => fields.is_empty(),
            Block::Heading(_) => true,
        })
    }
}

/// Ordered collapsible sections; all collapsed initially.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccordionView {
    sections: Vec<AccordionSection>,
}

impl AccordionView {
    pub fn new(sections: Vec<AccordionSection>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[AccordionSection] {
        &self.sections
    }

    pub fn section(&self, key: usize) -> Option<&AccordionSection> {
        self.sections.get(key)
    }

    /// Toggle one section. Returns the new expanded flag.
    pub fn toggle(&mut self, key: usize) -> Option<bool> {
        self.sections.get_mut(key).map(|section| {
            section.expanded = !section.expanded;
            section.expanded
        })
    }

    pub fn expand_all(&mut self) {
        for section in &mut self.sections {
            section.expanded = true;
        }
    }

    pub fn collapse_all(&mut self) {
        for section in &mut self.sections {
            section.expanded = false;
        }
    }
}

impl RenderText for AccordionView {
    fn render_text(&self) -> String {
        let mut out = String::new();

        for section in &self.sections {
            let marker = if section.expanded { '▾' } else { '▸' };
            out.push_str(&format!("{} {}\n", marker, section.title));
            if !section.expanded {
                continue;
            }

            for block in &section.blocks {
                match block {
                    Block::Fields(fields) => {
                        for field in fields {
                            out.push_str(&format!("    {}: {}\n", field.label, field.value));
                        }
                    }
                    Block::Heading(text) => {
                        out.push_str(&format!("  {}\n", text));
                    }
                    Block::Entry(fields) => {
                        for field in fields {
                            out.push_str(&format!("    {}: {}\n", field.label, field.value));
                        }
                        out.push_str("    ----\n");
                    }
                }
            }
        }

        out
    }
}
