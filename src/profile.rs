//! Contact details shown next to the form

/// Direct contact email
pub const EMAIL: &str = "hs489819@gmail.com";

/// Phone number, display form
pub const PHONE: &str = "+91 7889480969";

/// City / region
pub const LOCATION: &str = "Jammu, J&K";

/// A social profile link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    /// Network name
    pub network: &'static str,
    /// Profile URL
    pub url: &'static str,
}

/// Social profiles, in display order
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        network: "LinkedIn",
        url: "https://www.linkedin.com/in/hardiksh121/",
    },
    SocialLink {
        network: "Instagram",
        url: "https://www.instagram.com/whyhardikk/",
    },
    SocialLink {
        network: "GitHub",
        url: "https://github.com/hardiksharmaa",
    },
];

/// `mailto:` link for [`EMAIL`]
pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

/// `tel:` link for [`PHONE`], digits and leading `+` only
pub fn tel() -> String {
    let number: String = PHONE
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_strips_spaces() {
        assert_eq!(tel(), "tel:+917889480969");
    }

    #[test]
    fn test_social_links_are_https() {
        assert!(SOCIAL_LINKS.iter().all(|l| l.url.starts_with("https://")));
    }
}
