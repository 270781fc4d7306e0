/// Semantic file categories.
///
/// The set is closed: every classified file lands in exactly one of these
/// twelve values. Display metadata (label, glyph, color) is compiled in.
use crate::error::ParseCategoryError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Broad semantic kinds used for grouping and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Image,
    Video,
    Audio,
    Document,
    Spreadsheet,
    Presentation,
    Archive,
    Code,
    Font,
    Database,
    Ebook,
    Unknown,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 12] = [
        Category::Image,
        Category::Video,
        Category::Audio,
        Category::Document,
        Category::Spreadsheet,
        Category::Presentation,
        Category::Archive,
        Category::Code,
        Category::Font,
        Category::Database,
        Category::Ebook,
        Category::Unknown,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Images",
            Self::Video => "Videos",
            Self::Audio => "Audio",
            Self::Document => "Documents",
            Self::Spreadsheet => "Spreadsheets",
            Self::Presentation => "Presentations",
            Self::Archive => "Archives",
            Self::Code => "Code / Scripts",
            Self::Font => "Fonts",
            Self::Database => "Databases",
            Self::Ebook => "eBooks",
            Self::Unknown => "Other Files",
        }
    }

    /// Short glyph shown next to the label.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Image => "🖼️",
            Self::Video => "🎬",
            Self::Audio => "🎵",
            Self::Document => "📄",
            Self::Spreadsheet => "📊",
            Self::Presentation => "📋",
            Self::Archive => "🗜️",
            Self::Code => "💻",
            Self::Font => "🔤",
            Self::Database => "🗄️",
            Self::Ebook => "📚",
            Self::Unknown => "📁",
        }
    }

    /// Display color as packed ARGB.
    pub fn color(self) -> u32 {
        match self {
            Self::Image => 0xFF4C_AF50,
            Self::Video => 0xFF21_96F3,
            Self::Audio => 0xFF9C_27B0,
            Self::Document => 0xFFFF_9800,
            Self::Spreadsheet => 0xFF00_9688,
            Self::Presentation => 0xFFE9_1E63,
            Self::Archive => 0xFF79_5548,
            Self::Code => 0xFF60_7D8B,
            Self::Font => 0xFF00_BCD4,
            Self::Database => 0xFFFF_5722,
            Self::Ebook => 0xFF8B_C34A,
            Self::Unknown => 0xFF9E_9E9E,
        }
    }

    /// Lowercase machine name, the inverse of [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Spreadsheet => "spreadsheet",
            Self::Presentation => "presentation",
            Self::Archive => "archive",
            Self::Code => "code",
            Self::Font => "font",
            Self::Database => "database",
            Self::Ebook => "ebook",
            Self::Unknown => "unknown",
        }
    }

    /// Position in [`Category::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (i, cat) in Category::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("image".parse::<Category>().unwrap(), Category::Image);
        assert_eq!("EBOOK".parse::<Category>().unwrap(), Category::Ebook);
        assert_eq!(" Unknown ".parse::<Category>().unwrap(), Category::Unknown);
    }

    #[test]
    fn parse_rejects_labels_and_garbage() {
        assert!("Images".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Category::Code.to_string(), "Code / Scripts");
        assert_eq!(Category::Unknown.to_string(), "Other Files");
    }

    /// Colors are fully opaque.
    #[test]
    fn colors_are_opaque() {
        for cat in Category::ALL {
            assert_eq!(cat.color() >> 24, 0xFF, "{cat:?} must be opaque");
        }
    }
}
