//! File-name vocabulary, extensions, directories, and MIME types.

pub static FILE_WORDS: &[&str] = &[
    "report", "invoice", "summary", "draft", "notes", "budget", "roadmap", "backup", "export",
    "archive", "presentation", "proposal", "agenda", "minutes", "contract", "manual", "schedule",
    "overview", "analysis", "snapshot",
];

pub static FILE_EXTENSIONS: &[&str] = &[
    "pdf", "docx", "xlsx", "pptx", "txt", "csv", "json", "xml", "png", "jpg", "gif", "svg",
    "zip", "tar", "md", "html",
];

pub static FILE_DIRS: &[&str] = &[
    "home", "var", "tmp", "opt", "usr", "documents", "downloads", "projects", "shared", "data",
    "media", "backups",
];

pub static MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/json",
    "application/xml",
    "application/zip",
    "application/octet-stream",
    "text/plain",
    "text/html",
    "text/csv",
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/svg+xml",
    "audio/mpeg",
    "video/mp4",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_types_have_a_subtype() {
        for mime in MIME_TYPES {
            assert!(mime.contains('/'));
        }
    }

    #[test]
    fn test_extensions_have_no_dot() {
        for ext in FILE_EXTENSIONS {
            assert!(!ext.contains('.'));
        }
    }
}
