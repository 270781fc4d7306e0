/// Magic-byte signature table and matcher.
///
/// The table is ordered: the first entry whose bytes prefix the candidate
/// buffer wins. Three prefixes are shared by several real-world formats
/// (RIFF, ZIP, OLE compound) and are resolved with the file extension;
/// every other signature ignores the extension entirely.
use crate::model::Category;

/// Result of a successful content match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub mime: &'static str,
    pub category: Category,
}

impl Detection {
    const fn new(mime: &'static str, category: Category) -> Self {
        Self { mime, category }
    }
}

/// A byte prefix that several container formats share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedPrefix {
    /// `RIFF` — AVI, WAV, WebP.
    Riff,
    /// `PK\x03\x04` — ZIP and every ZIP-based format.
    Zip,
    /// `D0 CF 11 E0 A1 B1 1A E1` — legacy Office compound binary.
    Compound,
}

impl SharedPrefix {
    /// Pick the concrete format by extension. `None` keeps the entry's
    /// declared default.
    fn resolve(self, ext: &str) -> Option<Detection> {
        let hit = match (self, ext) {
            (Self::Riff, "avi") => Detection::new("video/avi", Category::Video),
            (Self::Riff, "wav") => Detection::new("audio/wav", Category::Audio),
            (Self::Riff, "webp") => Detection::new("image/webp", Category::Image),
            (Self::Zip, "docx") => Detection::new(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                Category::Document,
            ),
            (Self::Zip, "xlsx") => Detection::new(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                Category::Spreadsheet,
            ),
            (Self::Zip, "pptx") => Detection::new(
                "application/vnd.openxmlformats-officedocument.presentationml.presentation",
                Category::Presentation,
            ),
            (Self::Zip, "apk") => {
                Detection::new("application/vnd.android.package-archive", Category::Archive)
            }
            (Self::Zip, "epub") => Detection::new("application/epub+zip", Category::Ebook),
            (Self::Compound, "xls") => {
                Detection::new("application/vnd.ms-excel", Category::Spreadsheet)
            }
            (Self::Compound, "ppt") => {
                Detection::new("application/vnd.ms-powerpoint", Category::Presentation)
            }
            _ => return None,
        };
        Some(hit)
    }
}

/// One row of the signature table.
#[derive(Debug, Clone, Copy)]
pub struct SignatureEntry {
    pub magic: &'static [u8],
    pub mime: &'static str,
    pub category: Category,
    /// Set when `magic` is ambiguous and the extension must break the tie.
    pub shared: Option<SharedPrefix>,
}

const fn sig(magic: &'static [u8], mime: &'static str, category: Category) -> SignatureEntry {
    SignatureEntry {
        magic,
        mime,
        category,
        shared: None,
    }
}

const fn shared(
    magic: &'static [u8],
    mime: &'static str,
    category: Category,
    kind: SharedPrefix,
) -> SignatureEntry {
    SignatureEntry {
        magic,
        mime,
        category,
        shared: Some(kind),
    }
}

/// The signature registry, in priority order.
pub static SIGNATURES: &[SignatureEntry] = &[
    // Images
    sig(&[0xFF, 0xD8, 0xFF], "image/jpeg", Category::Image),
    sig(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A], "image/png", Category::Image),
    sig(b"GIF8", "image/gif", Category::Image),
    sig(b"BM", "image/bmp", Category::Image),
    sig(&[b'I', b'I', 0x2A, 0x00], "image/tiff", Category::Image),
    sig(&[b'M', b'M', 0x00, 0x2A], "image/tiff", Category::Image),
    shared(b"RIFF", "image/webp", Category::Image, SharedPrefix::Riff),
    sig(&[0x00, 0x00, 0x00, 0x0C, b'j', b'P', b' ', b' '], "image/jp2", Category::Image),
    // Video
    sig(&[0x00, 0x00, 0x00, 0x14, b'f', b't', b'y', b'p'], "video/mp4", Category::Video),
    sig(&[0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p'], "video/mp4", Category::Video),
    sig(&[0x00, 0x00, 0x00, 0x20, b'f', b't', b'y', b'p'], "video/mp4", Category::Video),
    sig(&[0x1A, 0x45, 0xDF, 0xA3], "video/webm", Category::Video),
    sig(&[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11], "video/x-ms-wmv", Category::Video),
    // Audio
    sig(b"ID3", "audio/mpeg", Category::Audio),
    sig(&[0xFF, 0xFB], "audio/mpeg", Category::Audio),
    sig(&[0xFF, 0xF3], "audio/mpeg", Category::Audio),
    sig(&[0xFF, 0xF2], "audio/mpeg", Category::Audio),
    sig(b"fLaC", "audio/flac", Category::Audio),
    sig(b"OggS", "audio/ogg", Category::Audio),
    sig(b"M4A ", "audio/m4a", Category::Audio),
    // Documents
    sig(b"%PDF", "application/pdf", Category::Document),
    shared(
        &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1],
        "application/msword",
        Category::Document,
        SharedPrefix::Compound,
    ),
    sig(b"{\\rtf", "application/rtf", Category::Document),
    // Archives
    shared(&[b'P', b'K', 0x03, 0x04], "application/zip", Category::Archive, SharedPrefix::Zip),
    sig(&[b'R', b'a', b'r', b'!', 0x1A, 0x07], "application/x-rar", Category::Archive),
    sig(&[0x1F, 0x8B], "application/gzip", Category::Archive),
    sig(b"BZh", "application/x-bzip2", Category::Archive),
    sig(&[b'7', b'z', 0xBC, 0xAF, 0x27, 0x1C], "application/x-7z-compressed", Category::Archive),
    sig(b"ustar", "application/x-tar", Category::Archive),
    // Fonts
    sig(&[0x00, 0x01, 0x00, 0x00], "font/ttf", Category::Font),
    sig(b"OTTO", "font/otf", Category::Font),
    sig(b"wOFF", "font/woff", Category::Font),
    sig(b"wOF2", "font/woff2", Category::Font),
    // Databases
    sig(b"SQLite f", "application/x-sqlite3", Category::Database),
];

/// Match a leading-byte prefix against [`SIGNATURES`].
///
/// `prefix` may be longer than a signature (only the signature's length is
/// compared) or shorter (then that signature cannot match). `ext` must
/// already be lowercase; it is consulted only for shared prefixes.
pub fn match_signature(prefix: &[u8], ext: &str) -> Option<Detection> {
    if prefix.is_empty() {
        return None;
    }

    let entry = SIGNATURES.iter().find(|e| prefix.starts_with(e.magic))?;
    let declared = Detection::new(entry.mime, entry.category);

    Some(
        entry
            .shared
            .and_then(|kind| kind.resolve(ext))
            .unwrap_or(declared),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: [u8; 12] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    const ZIP: [u8; 8] = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x06, 0x00];
    const OLE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

    fn riff() -> Vec<u8> {
        let mut v = b"RIFF".to_vec();
        v.extend_from_slice(&[0x24, 0x08, 0x00, 0x00]);
        v.extend_from_slice(b"WAVE");
        v
    }

    #[test]
    fn png_matches_regardless_of_extension() {
        let expected = Some(Detection::new("image/png", Category::Image));
        assert_eq!(match_signature(&PNG, "png"), expected);
        assert_eq!(match_signature(&PNG, "txt"), expected, "content wins over name");
        assert_eq!(match_signature(&PNG, ""), expected);
    }

    #[test]
    fn empty_prefix_never_matches() {
        assert_eq!(match_signature(&[], "png"), None);
    }

    /// A buffer shorter than the signature must not match it.
    #[test]
    fn truncated_prefix_does_not_match() {
        assert_eq!(match_signature(&PNG[..5], "png"), None);
    }

    #[test]
    fn unrecognised_bytes_return_none() {
        assert_eq!(match_signature(b"hello world!", "xyz"), None);
    }

    #[test]
    fn riff_is_resolved_by_extension() {
        let bytes = riff();
        assert_eq!(
            match_signature(&bytes, "avi"),
            Some(Detection::new("video/avi", Category::Video))
        );
        assert_eq!(
            match_signature(&bytes, "wav"),
            Some(Detection::new("audio/wav", Category::Audio))
        );
        assert_eq!(
            match_signature(&bytes, "webp"),
            Some(Detection::new("image/webp", Category::Image))
        );
    }

    #[test]
    fn riff_defaults_to_webp() {
        let bytes = riff();
        for ext in ["", "bin", "mp3", "AVI"] {
            assert_eq!(
                match_signature(&bytes, ext),
                Some(Detection::new("image/webp", Category::Image)),
                "unexpected result for {ext:?}"
            );
        }
    }

    #[test]
    fn zip_family_is_resolved_by_extension() {
        let cases = [
            ("docx", Category::Document),
            ("xlsx", Category::Spreadsheet),
            ("pptx", Category::Presentation),
            ("apk", Category::Archive),
            ("epub", Category::Ebook),
            ("zip", Category::Archive),
            ("jar", Category::Archive),
        ];
        for (ext, cat) in cases {
            let hit = match_signature(&ZIP, ext).expect("zip header must match");
            assert_eq!(hit.category, cat, "wrong category for .{ext}");
        }
        assert_eq!(
            match_signature(&ZIP, "docx").map(|d| d.mime),
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        );
        assert_eq!(match_signature(&ZIP, "jar").map(|d| d.mime), Some("application/zip"));
        assert_eq!(
            match_signature(&ZIP, "epub").map(|d| d.mime),
            Some("application/epub+zip")
        );
    }

    #[test]
    fn compound_binary_is_resolved_by_extension() {
        assert_eq!(
            match_signature(&OLE, "xls"),
            Some(Detection::new("application/vnd.ms-excel", Category::Spreadsheet))
        );
        assert_eq!(
            match_signature(&OLE, "ppt"),
            Some(Detection::new("application/vnd.ms-powerpoint", Category::Presentation))
        );
        assert_eq!(
            match_signature(&OLE, "doc"),
            Some(Detection::new("application/msword", Category::Document))
        );
        assert_eq!(
            match_signature(&OLE, "msg"),
            Some(Detection::new("application/msword", Category::Document))
        );
    }

    /// Disambiguation only applies to the shared prefixes: a PDF named
    /// `.xlsx` is still a PDF.
    #[test]
    fn extension_is_ignored_for_unambiguous_signatures() {
        assert_eq!(
            match_signature(b"%PDF-1.7\n%\xE2\xE3", "xlsx"),
            Some(Detection::new("application/pdf", Category::Document))
        );
    }

    /// JPEG's three-byte tag sits before the two-byte MP3 frame-sync tags.
    #[test]
    fn jpeg_precedes_mp3_frame_sync() {
        assert_eq!(
            match_signature(&[0xFF, 0xD8, 0xFF, 0xE0], "mp3").map(|d| d.category),
            Some(Category::Image)
        );
        assert_eq!(
            match_signature(&[0xFF, 0xFB, 0x90, 0x00], "").map(|d| d.category),
            Some(Category::Audio)
        );
    }

    #[test]
    fn misc_formats() {
        let cases: [(&[u8], Category); 6] = [
            (b"SQLite format 3\0", Category::Database),
            (b"wOF2\x00\x01", Category::Font),
            (&[0x1F, 0x8B, 0x08], Category::Archive),
            (&[0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p', b'm', b'p', b'4', b'2'], Category::Video),
            (b"OggS\x00\x02", Category::Audio),
            (b"{\\rtf1\\ansi", Category::Document),
        ];
        for (bytes, cat) in cases {
            assert_eq!(match_signature(bytes, "").map(|d| d.category), Some(cat));
        }
    }

    #[test]
    fn every_signature_is_non_empty_and_short_enough() {
        for entry in SIGNATURES {
            assert!(!entry.magic.is_empty());
            assert!(
                entry.magic.len() <= crate::detect::PREFIX_LEN,
                "{} is longer than the read prefix",
                entry.mime
            );
        }
    }
}
