//! Email domain and URL platform vocabulary.

pub static EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "proton.me",
    "icloud.com",
    "mail.com",
    "fastmail.com",
    "example.com",
    "example.org",
];

/// URL prefixes a profile-style path is appended to.
pub static URL_PLATFORMS: &[&str] = &[
    "https://github.com/",
    "https://gitlab.com/",
    "https://twitter.com/",
    "https://medium.com/@",
    "https://dev.to/",
    "https://www.linkedin.com/in/",
    "https://www.behance.net/",
    "https://dribbble.com/",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_prefixes_are_absolute_urls() {
        for platform in URL_PLATFORMS {
            assert!(platform.starts_with("https://"));
        }
    }

    #[test]
    fn test_email_domains_have_a_tld() {
        for domain in EMAIL_DOMAINS {
            assert!(domain.contains('.'));
        }
    }
}
