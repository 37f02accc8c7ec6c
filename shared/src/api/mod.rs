//! Content API contract: endpoint paths, wire records and the mappers that
//! turn them into view-ready items.
mod envelope;
mod records;

pub use self::envelope::{decode_embedded, decode_envelope};
pub use self::records::{
    Comment, RawScienceArticle, RawSocialPost, ScienceArticle, SocialPost, User,
};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;

/// One list-returning endpoint of the content API.
pub trait ListEndpoint {
    /// Wire shape of a single element of the envelope array.
    type Raw: DeserializeOwned;
    type Item;

    const PATH: &'static str;
    /// What the screen calls its items in user-facing messages.
    const NOUN: &'static str;
    const ENVELOPE_KEY: &'static str = "data";

    /// Pure per-record mapping; decodes any string-encoded sub-fields.
    fn map(raw: Self::Raw) -> Result<Self::Item, FetchError>;

    fn decode(body: &[u8]) -> Result<Vec<Self::Item>, FetchError> {
        decode_envelope::<Self::Raw>(body, Self::ENVELOPE_KEY)?
            .into_iter()
            .map(Self::map)
            .collect()
    }
}

pub struct SocialPosts;

impl ListEndpoint for SocialPosts {
    type Raw = RawSocialPost;
    type Item = SocialPost;

    const PATH: &'static str = "/api/get-social-posts";
    const NOUN: &'static str = "posts";

    fn map(raw: RawSocialPost) -> Result<SocialPost, FetchError> {
        SocialPost::try_from(raw)
    }
}

pub struct ScienceArticles;

impl ListEndpoint for ScienceArticles {
    type Raw = RawScienceArticle;
    type Item = ScienceArticle;

    const PATH: &'static str = "/api/get-science-posts";
    const NOUN: &'static str = "articles";

    fn map(raw: RawScienceArticle) -> Result<ScienceArticle, FetchError> {
        ScienceArticle::try_from(raw)
    }
}

pub struct Users;

impl ListEndpoint for Users {
    type Raw = User;
    type Item = User;

    const PATH: &'static str = "/api/users";
    const NOUN: &'static str = "users";

    fn map(raw: User) -> Result<User, FetchError> {
        Ok(raw.normalized())
    }
}

/// `/api/images` answers `{ "images": ["<url>", ...] }`.
pub struct GalleryImages;

impl ListEndpoint for GalleryImages {
    type Raw = String;
    type Item = String;

    const PATH: &'static str = "/api/images";
    const NOUN: &'static str = "images";
    const ENVELOPE_KEY: &'static str = "images";

    fn map(raw: String) -> Result<String, FetchError> {
        Ok(raw)
    }
}

/// `/api/data` has no fixed shape; the whole document is the single item.
pub struct RawDocument;

impl ListEndpoint for RawDocument {
    type Raw = Value;
    type Item = Value;

    const PATH: &'static str = "/api/data";
    const NOUN: &'static str = "data";

    fn map(raw: Value) -> Result<Value, FetchError> {
        Ok(raw)
    }

    fn decode(body: &[u8]) -> Result<Vec<Value>, FetchError> {
        serde_json::from_slice(body)
            .map(|document| vec![document])
            .map_err(|e| FetchError::schema(format!("response body is not JSON: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_social_posts_decode_preserves_count_and_ids() {
        let body = br#"{"data":[
            {"id": 4, "images": "[\"a.jpg\",\"b.jpg\"]"},
            {"id": 9, "images": "[]"}
        ]}"#;
        let posts = SocialPosts::decode(body).unwrap();
        assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![4, 9]);
        assert_eq!(posts[0].images, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_one_malformed_item_fails_the_batch() {
        let body = br#"{"data":[
            {"id": 1, "images": "[\"ok.jpg\"]"},
            {"id": 2, "images": "[unterminated"}
        ]}"#;
        assert_matches!(
            SocialPosts::decode(body),
            Err(FetchError::Decode { item_id, .. }) if item_id == "2"
        );
    }

    #[test]
    fn test_science_articles_decode() {
        let body = br#"{"data":[{"id": 1, "title": "T", "image_url": "[\"x.png\"]"}]}"#;
        let articles = ScienceArticles::decode(body).unwrap();
        assert_eq!(articles[0].image_url, vec!["x.png"]);
    }

    #[test]
    fn test_users_empty_is_success() {
        assert!(Users::decode(br#"{"data":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_gallery_uses_images_key() {
        let urls = GalleryImages::decode(br#"{"images":["https://x/a.png"]}"#).unwrap();
        assert_eq!(urls, vec!["https://x/a.png"]);
        assert_matches!(
            GalleryImages::decode(br#"{"data":[]}"#),
            Err(FetchError::Schema { .. })
        );
    }

    #[test]
    fn test_raw_document_wraps_whole_body() {
        let docs = RawDocument::decode(br#"{"anything": [1, 2]}"#).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["anything"][1], 2);
        assert_matches!(RawDocument::decode(b"nope"), Err(FetchError::Schema { .. }));
    }
}
