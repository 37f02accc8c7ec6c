use serde::{Deserialize, Serialize};

use crate::api::User;
use crate::capabilities::ValidatedUrl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialNetwork {
    Instagram,
    TikTok,
    LinkedIn,
    X,
    YouTube,
    Other,
}

impl SocialNetwork {
    #[must_use]
    pub const fn profile_base(self) -> Option<&'static str> {
        match self {
            Self::Instagram => Some("https://www.instagram.com/"),
            Self::TikTok => Some("https://www.tiktok.com/@"),
            Self::LinkedIn => Some("https://www.linkedin.com/in/"),
            Self::X => Some("https://x.com/"),
            Self::YouTube => Some("https://www.youtube.com/user/"),
            Self::Other => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::TikTok => "TikTok",
            Self::LinkedIn => "LinkedIn",
            Self::X => "X",
            Self::YouTube => "YouTube",
            Self::Other => "Website",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: String,
}

/// Builds a profile link from a raw handle.
///
/// Blank handles produce no link. A handle that is already an http(s) URL
/// is used as-is once it validates; otherwise the handle is stripped of a
/// leading `@` and percent-encoded into the network's profile URL.
pub fn social_link(network: SocialNetwork, handle: Option<&str>) -> Option<SocialLink> {
    let handle = handle.map(str::trim).filter(|h| !h.is_empty())?;

    if let Ok(url) = ValidatedUrl::new(handle) {
        return Some(SocialLink {
            network,
            url: url.as_str().to_string(),
        });
    }

    let base = network.profile_base()?;
    let handle = handle.trim_start_matches('@').trim();
    if handle.is_empty() {
        return None;
    }

    Some(SocialLink {
        network,
        url: format!("{base}{}", urlencoding::encode(handle)),
    })
}

/// Every profile link a user has a usable handle for, in display order.
pub fn social_links(user: &User) -> Vec<SocialLink> {
    [
        (SocialNetwork::Instagram, user.instagram_handle.as_deref()),
        (SocialNetwork::TikTok, user.tiktok_handle.as_deref()),
        (SocialNetwork::LinkedIn, user.linkedin_handle.as_deref()),
        (SocialNetwork::X, user.x_handle.as_deref()),
        (SocialNetwork::YouTube, user.youtube_handle.as_deref()),
        (SocialNetwork::Other, user.other_handle.as_deref()),
    ]
    .into_iter()
    .filter_map(|(network, handle)| social_link(network, handle))
    .collect()
}

/// `mailto:` link for a contact address, or `None` when the address is
/// blank or obviously malformed.
pub fn mailto(email: Option<&str>) -> Option<String> {
    let email = email.map(str::trim).filter(|e| !e.is_empty())?;
    let (local, domain) = email.split_once('@')?;

    let plausible = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(|c| c.is_whitespace() || c.is_control());
    if !plausible {
        return None;
    }

    Some(format!(
        "mailto:{}@{}",
        urlencoding::encode(local),
        urlencoding::encode(domain)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_links() {
        let ig = social_link(SocialNetwork::Instagram, Some("joburg.eats")).unwrap();
        assert_eq!(ig.url, "https://www.instagram.com/joburg.eats");

        let tt = social_link(SocialNetwork::TikTok, Some("@dancer")).unwrap();
        assert_eq!(tt.url, "https://www.tiktok.com/@dancer");

        let yt = social_link(SocialNetwork::YouTube, Some("channel")).unwrap();
        assert_eq!(yt.url, "https://www.youtube.com/user/channel");
    }

    #[test]
    fn test_absent_or_blank_handle_has_no_link() {
        assert_eq!(social_link(SocialNetwork::LinkedIn, None), None);
        assert_eq!(social_link(SocialNetwork::LinkedIn, Some("")), None);
        assert_eq!(social_link(SocialNetwork::LinkedIn, Some("   ")), None);
        assert_eq!(social_link(SocialNetwork::X, Some("@")), None);
    }

    #[test]
    fn test_handle_is_percent_encoded() {
        let link = social_link(SocialNetwork::X, Some("a b/c?d")).unwrap();
        assert_eq!(link.url, "https://x.com/a%20b%2Fc%3Fd");
    }

    #[test]
    fn test_full_url_handle_is_kept() {
        let link = social_link(
            SocialNetwork::LinkedIn,
            Some("https://www.linkedin.com/in/someone"),
        )
        .unwrap();
        assert_eq!(link.url, "https://www.linkedin.com/in/someone");
    }

    #[test]
    fn test_other_requires_url() {
        assert_eq!(social_link(SocialNetwork::Other, Some("just-a-name")), None);
        assert!(social_link(SocialNetwork::Other, Some("https://example.com")).is_some());
    }

    #[test]
    fn test_social_links_skip_absent_handles() {
        let user = User {
            instagram_handle: Some("joburg".into()),
            tiktok_handle: None,
            x_handle: Some("".into()),
            youtube_handle: Some("@channel".into()),
            other_handle: Some("not a url".into()),
            ..User::default()
        };
        let networks: Vec<_> = social_links(&user).into_iter().map(|l| l.network).collect();
        assert_eq!(networks, vec![SocialNetwork::Instagram, SocialNetwork::YouTube]);
    }

    #[test]
    fn test_mailto() {
        assert_eq!(
            mailto(Some("info@visitmyjoburg.co.za")).as_deref(),
            Some("mailto:info@visitmyjoburg.co.za")
        );
        assert_eq!(
            mailto(Some("first+tag@example.com")).as_deref(),
            Some("mailto:first%2Btag@example.com")
        );
        assert_eq!(mailto(Some("no-at-sign")), None);
        assert_eq!(mailto(Some("a@b@c")), None);
        assert_eq!(mailto(Some("a b@c.com")), None);
        assert_eq!(mailto(None), None);
    }
}
