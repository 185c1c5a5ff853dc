use crate::markdown::toc::TocOptions;
use crate::markdown::types::HeadingEntry;

/// A heading as it appears in document order, before nesting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatHeading {
    pub level: u8,
    pub id: String,
    pub name: String,
}

impl FlatHeading {
    pub fn new(level: u8, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            level,
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Build a heading forest from headings in document order.
///
/// A heading nests under the closest preceding heading with a smaller
/// level; level jumps (h1 followed by h3) nest directly. Headings outside
/// the configured level range are dropped.
pub fn nest_headings(flat: Vec<FlatHeading>, options: &TocOptions) -> Vec<HeadingEntry> {
    let mut roots: Vec<HeadingEntry> = Vec::new();
    let mut open: Vec<HeadingEntry> = Vec::new();

    for heading in flat {
        if heading.level < options.min_level || heading.level > options.max_level {
            continue;
        }

        while open.last().is_some_and(|top| top.level >= heading.level) {
            close_last(&mut open, &mut roots);
        }

        open.push(HeadingEntry::new(heading.level, heading.id, heading.name));
    }

    while !open.is_empty() {
        close_last(&mut open, &mut roots);
    }

    roots
}

/// Pop the innermost open heading into its parent, or into the roots
fn close_last(open: &mut Vec<HeadingEntry>, roots: &mut Vec<HeadingEntry>) {
    if let Some(completed) = open.pop() {
        match open.last_mut() {
            Some(parent) => parent.children.push(completed),
            None => roots.push(completed),
        }
    }
}
