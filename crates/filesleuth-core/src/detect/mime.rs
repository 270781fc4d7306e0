/// Extension to MIME type lookup.
///
/// A compiled-in table covering every extension the fallback categoriser
/// knows. Callers substitute [`FALLBACK_MIME`] when the lookup misses.

/// MIME type used when neither content nor name identifies the file.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Best-effort MIME type for a lowercase extension.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext {
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "ico" => "image/x-icon",
        "tif" | "tiff" => "image/tiff",
        "cr2" => "image/x-canon-cr2",
        "dng" => "image/x-adobe-dng",
        // Video
        "mp4" => "video/mp4",
        "mkv" => "video/x-matroska",
        "avi" => "video/avi",
        "mov" => "video/quicktime",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        "webm" => "video/webm",
        "3gp" => "video/3gpp",
        "m4v" => "video/x-m4v",
        "vob" => "video/dvd",
        // Audio
        "mp3" => "audio/mpeg",
        "flac" => "audio/flac",
        "wav" => "audio/x-wav",
        "aac" => "audio/aac",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        "opus" => "audio/opus",
        "wma" => "audio/x-ms-wma",
        "aiff" => "audio/x-aiff",
        "mid" | "midi" => "audio/midi",
        // Documents
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "rtf" => "application/rtf",
        "odt" => "application/vnd.oasis.opendocument.text",
        "md" => "text/markdown",
        // Spreadsheets
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "csv" => "text/csv",
        "tsv" => "text/tab-separated-values",
        "ods" => "application/vnd.oasis.opendocument.spreadsheet",
        // Presentations
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "odp" => "application/vnd.oasis.opendocument.presentation",
        // Archives
        "zip" => "application/zip",
        "rar" => "application/x-rar-compressed",
        "7z" => "application/x-7z-compressed",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",
        "bz2" => "application/x-bzip2",
        "xz" => "application/x-xz",
        "apk" => "application/vnd.android.package-archive",
        "jar" => "application/java-archive",
        // Code
        "java" => "text/x-java",
        "py" => "text/x-python",
        "js" => "application/javascript",
        "html" => "text/html",
        "css" => "text/css",
        "xml" => "text/xml",
        "json" => "application/json",
        "c" => "text/x-csrc",
        "cpp" => "text/x-c++src",
        "h" => "text/x-chdr",
        "sh" => "application/x-sh",
        "php" => "application/x-php",
        "sql" => "application/sql",
        "yaml" | "yml" => "application/yaml",
        "toml" => "application/toml",
        // Fonts
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        // Databases
        "sqlite" | "sqlite3" => "application/x-sqlite3",
        // eBooks
        "epub" => "application/epub+zip",
        "mobi" => "application/x-mobipocket-ebook",
        "azw" | "azw3" => "application/vnd.amazon.ebook",
        "fb2" => "application/x-fictionbook+xml",
        _ => return None,
    };
    Some(mime)
}
