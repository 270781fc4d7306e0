/// Content and name based type detection.
///
/// Detection is content-first: a short leading-byte prefix is matched
/// against [`signatures::SIGNATURES`]; only when no signature matches does
/// the file extension decide, via [`extensions::categorise_extension`].
pub mod classifier;
pub mod extensions;
pub mod mime;
pub mod signatures;

pub use classifier::{classify_file, classify_path, read_prefix, PREFIX_LEN};
pub use extensions::{categorise_extension, extension_of};
pub use mime::{mime_for_extension, FALLBACK_MIME};
pub use signatures::{match_signature, Detection, SharedPrefix, SignatureEntry, SIGNATURES};
