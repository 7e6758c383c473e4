// Chunk: docs/chunks/presentation_classes - Derived classes and attributes of the scaffold
//!
//! Classes and attributes of the editor's elements.
//!
//! The scaffold's classes are never patched in place. A [`Presentation`] is
//! derived from the options as a whole, and when an option changes the editor
//! derives the next one and diffs the two. The diff is what the host applies
//! to the real DOM, so a class can neither linger after its option is gone
//! nor be added twice.

use std::collections::BTreeMap;
use std::fmt;

use crate::options::EditorOptions;

/// Root class of the editor and prefix of every element class.
pub const EDITOR_CLASS: &str = "overlay-edit";

/// Class shared by the textarea and the pre so they overlap exactly.
pub const FLATTEN_CLASS: &str = "overlay-edit__flatten";

/// Wrapper modifier when the gutter is shown.
pub const LINE_NUMBERS_CLASS: &str = "overlay-edit--has-line-numbers";

/// Soft-wrap class on the textarea and the pre.
pub const WORD_WRAP_CLASS: &str = "word-wrap";

/// Class carrying the language on the code element.
pub fn language_class(language: &str) -> String {
    format!("language-{}", language)
}

/// An element of the scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    Wrapper,
    TextArea,
    Pre,
    Code,
    Gutter,
    Suggestions,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Part::Wrapper => "wrapper",
            Part::TextArea => "textarea",
            Part::Pre => "pre",
            Part::Code => "code",
            Part::Gutter => "gutter",
            Part::Suggestions => "suggestions",
        };
        f.write_str(name)
    }
}

/// Classes and attributes of one element.
///
/// Classes keep insertion order and never repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    classes: Vec<String>,
    attributes: BTreeMap<&'static str, String>,
}

impl ElementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class unless it is already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The `class` attribute value.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn set_attribute(&mut self, name: &'static str, value: impl Into<String>) {
        self.attributes.insert(name, value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.attributes.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Changes that turn `self` into `next`: removals first, then additions.
    pub fn diff(&self, next: &ElementState) -> Vec<Change> {
        let mut changes = Vec::new();

        for class in &self.classes {
            if !next.has_class(class) {
                changes.push(Change::RemoveClass(class.clone()));
            }
        }
        for name in self.attributes.keys() {
            if !next.attributes.contains_key(name) {
                changes.push(Change::RemoveAttribute(*name));
            }
        }
        for class in &next.classes {
            if !self.has_class(class) {
                changes.push(Change::AddClass(class.clone()));
            }
        }
        for (name, value) in &next.attributes {
            if self.attributes.get(name) != Some(value) {
                changes.push(Change::SetAttribute(*name, value.clone()));
            }
        }

        changes
    }
}

/// A single DOM mutation on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    AddClass(String),
    RemoveClass(String),
    SetAttribute(&'static str, String),
    RemoveAttribute(&'static str),
}

/// A [`Change`] targeted at a scaffold element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationChange {
    pub part: Part,
    pub change: Change,
}

/// Classes and attributes of every scaffold element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    parts: BTreeMap<Part, ElementState>,
}

impl Presentation {
    /// Derives the presentation for `options`.
    pub fn derive(options: &EditorOptions) -> Self {
        let mut wrapper = ElementState::new();
        wrapper.add_class(EDITOR_CLASS);
        if options.line_numbers {
            wrapper.add_class(LINE_NUMBERS_CLASS);
        }

        let mut textarea = ElementState::new();
        textarea.add_class("overlay-edit__textarea");
        textarea.add_class(FLATTEN_CLASS);

        let mut pre = ElementState::new();
        pre.add_class("overlay-edit__pre");
        pre.add_class(FLATTEN_CLASS);

        if options.word_wrap {
            textarea.add_class(WORD_WRAP_CLASS);
            pre.add_class(WORD_WRAP_CLASS);
        }
        if options.rtl {
            textarea.set_attribute("dir", "rtl");
            pre.set_attribute("dir", "rtl");
        }
        if !options.enable_autocorrect {
            textarea.set_attribute("spellcheck", "false");
            textarea.set_attribute("autocapitalize", "off");
            textarea.set_attribute("autocomplete", "off");
            textarea.set_attribute("autocorrect", "off");
        }

        let mut code = ElementState::new();
        code.add_class("overlay-edit__code");
        code.add_class(language_class(&options.language));

        let mut suggestions = ElementState::new();
        suggestions.add_class("overlay-edit__auto-suggestions-list");

        let mut parts = BTreeMap::from([
            (Part::Wrapper, wrapper),
            (Part::TextArea, textarea),
            (Part::Pre, pre),
            (Part::Code, code),
            (Part::Suggestions, suggestions),
        ]);

        if options.line_numbers {
            let mut gutter = ElementState::new();
            gutter.add_class("overlay-edit__lines");
            parts.insert(Part::Gutter, gutter);
        }

        Self { parts }
    }

    /// The state of `part`, if the scaffold has that element.
    pub fn part(&self, part: Part) -> Option<&ElementState> {
        self.parts.get(&part)
    }

    /// Changes that turn `self` into `next`.
    ///
    /// An element missing on one side diffs against an empty element.
    pub fn diff(&self, next: &Presentation) -> Vec<PresentationChange> {
        let empty = ElementState::new();
        let mut all_parts: Vec<Part> = self.parts.keys().chain(next.parts.keys()).copied().collect();
        all_parts.sort();
        all_parts.dedup();

        all_parts
            .into_iter()
            .flat_map(|part| {
                let before = self.parts.get(&part).unwrap_or(&empty);
                let after = next.parts.get(&part).unwrap_or(&empty);
                before
                    .diff(after)
                    .into_iter()
                    .map(move |change| PresentationChange { part, change })
            })
            .collect()
    }
}
