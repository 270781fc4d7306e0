/// Extension-based fallback categorisation.
///
/// Used only when no content signature matched. Lookup is an exact,
/// case-insensitive match on the final extension: `archive.tar.gz` is
/// resolved by `gz` alone.
use crate::model::Category;
use std::path::Path;

/// Categorise a file extension (without the dot).
///
/// Zero-heap-allocation hot path: extensions are lowercased into a fixed-size
/// stack buffer (`[u8; 16]`) rather than allocating a `String`. Extensions
/// longer than 16 bytes are never in the table and resolve to `None`.
pub fn categorise_extension(ext: &str) -> Option<Category> {
    let bytes = ext.as_bytes();
    if bytes.is_empty() || bytes.len() > 16 {
        return None;
    }

    let mut lower = [0u8; 16];
    for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
        *dest = src.to_ascii_lowercase();
    }
    let lower_str = std::str::from_utf8(&lower[..bytes.len()]).ok()?;

    let category = match lower_str {
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" | "svg" | "heic" | "heif" | "ico"
        | "tiff" | "tif" | "raw" | "cr2" | "dng" => Category::Image,
        "mp4" | "mkv" | "avi" | "mov" | "wmv" | "flv" | "webm" | "3gp" | "m4v" | "vob" => {
            Category::Video
        }
        "mp3" | "flac" | "wav" | "aac" | "ogg" | "m4a" | "opus" | "wma" | "aiff" | "mid"
        | "midi" => Category::Audio,
        "pdf" | "doc" | "docx" | "txt" | "rtf" | "odt" | "pages" | "md" => Category::Document,
        "xls" | "xlsx" | "csv" | "ods" | "numbers" | "tsv" => Category::Spreadsheet,
        "ppt" | "pptx" | "odp" | "key" => Category::Presentation,
        "zip" | "rar" | "7z" | "tar" | "gz" | "bz2" | "xz" | "apk" | "jar" => Category::Archive,
        // `ts` is TypeScript here, not MPEG transport stream.
        "kt" | "java" | "py" | "js" | "ts" | "html" | "css" | "xml" | "json" | "c" | "cpp"
        | "h" | "sh" | "bat" | "php" | "rb" | "go" | "rs" | "swift" | "dart" | "sql"
        | "yaml" | "yml" | "toml" => Category::Code,
        "ttf" | "otf" | "woff" | "woff2" => Category::Font,
        "db" | "sqlite" | "sqlite3" | "realm" => Category::Database,
        "epub" | "mobi" | "azw" | "azw3" | "fb2" => Category::Ebook,
        _ => return None,
    };
    Some(category)
}

/// Lowercase final extension of `path`, or `""` when it has none.
///
/// Follows `Path::extension`: dotfiles such as `.bashrc` have no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
