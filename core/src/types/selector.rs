use dicom_core::Tag;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Locator for a single DICOM attribute
///
/// Configuration documents name attributes either by keyword
/// (`"SeriesDescription"`) or by a `"group,element"` pair of hexadecimal
/// numbers (`"0x0008,0x103E"`, `"0008,103e"`). Callers in Rust code can
/// also hand over a [`Tag`] directly. All forms resolve to the same field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagSelector {
    /// Parsed `"group,element"` string
    NumericPair(u16, u16),
    /// Standard dictionary keyword, e.g. `PatientName`
    NamedField(String),
    /// Tag supplied programmatically
    RawLocator(Tag),
}

fn pair_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(?:0[xX])?([0-9A-Fa-f]+)\s*,\s*(?:0[xX])?([0-9A-Fa-f]+)\s*$")
            .expect("static tag pair pattern is valid")
    })
}

impl TagSelector {
    /// Interprets a configuration key
    ///
    /// Anything that is not a valid pair of 16-bit hexadecimal numbers is
    /// treated as a keyword. Parsing never fails; a bogus keyword simply
    /// resolves to nothing later on.
    pub fn parse(label: &str) -> Self {
        pair_pattern()
            .captures(label)
            .and_then(|caps| {
                let group = u16::from_str_radix(&caps[1], 16).ok()?;
                let element = u16::from_str_radix(&caps[2], 16).ok()?;
                Some(TagSelector::NumericPair(group, element))
            })
            .unwrap_or_else(|| TagSelector::NamedField(label.to_string()))
    }

    /// Returns the tag when it is known without consulting a data set
    pub fn as_tag(&self) -> Option<Tag> {
        match self {
            TagSelector::NumericPair(group, element) => Some(Tag(*group, *element)),
            TagSelector::RawLocator(tag) => Some(*tag),
            TagSelector::NamedField(_) => None,
        }
    }
}

impl From<Tag> for TagSelector {
    fn from(tag: Tag) -> Self {
        TagSelector::RawLocator(tag)
    }
}

impl From<(u16, u16)> for TagSelector {
    fn from((group, element): (u16, u16)) -> Self {
        TagSelector::RawLocator(Tag(group, element))
    }
}

impl From<&str> for TagSelector {
    fn from(label: &str) -> Self {
        TagSelector::parse(label)
    }
}

impl fmt::Display for TagSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagSelector::NamedField(name) => write!(f, "{}", name),
            TagSelector::NumericPair(group, element) => write!(f, "({:04X},{:04X})", group, element),
            TagSelector::RawLocator(tag) => write!(f, "({:04X},{:04X})", tag.0, tag.1),
        }
    }
}
