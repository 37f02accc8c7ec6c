use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::envelope::{decode_embedded, flag, optional_text, text_or_number};
use crate::error::FetchError;
use crate::text::non_blank;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: i64,
    #[serde(deserialize_with = "text_or_number")]
    pub author: String,
    #[serde(deserialize_with = "text_or_number")]
    pub content: String,
    #[serde(deserialize_with = "text_or_number")]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: i64,
    pub fee: String,
    pub description: String,
    pub images: Vec<String>,
    pub email: Option<String>,
    pub status: Option<String>,
    pub comments: Vec<Comment>,
    pub place_name: String,
    pub created_at: String,
    pub video_link: Option<String>,
    pub extras: Vec<String>,
    pub profile_image_url: Option<String>,
}

/// Social post as served by `/api/get-social-posts`; `images` is
/// double-encoded.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSocialPost {
    pub id: i64,
    #[serde(default, deserialize_with = "text_or_number")]
    pub fee: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub description: String,
    #[serde(default)]
    pub images: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub status: Option<String>,
    #[serde(default)]
    pub comments: Option<Value>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub place_name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub created_at: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub video_link: Option<String>,
    #[serde(default)]
    pub extras: Option<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub profile_image_url: Option<String>,
}

impl TryFrom<RawSocialPost> for SocialPost {
    type Error = FetchError;

    fn try_from(raw: RawSocialPost) -> Result<Self, Self::Error> {
        let id = raw.id;
        Ok(Self {
            id,
            fee: raw.fee,
            description: raw.description,
            images: decode_embedded(id, "images", raw.images)?,
            email: non_blank(raw.email.as_deref()),
            status: non_blank(raw.status.as_deref()),
            comments: decode_embedded(id, "comments", raw.comments)?,
            place_name: raw.place_name,
            created_at: raw.created_at,
            video_link: non_blank(raw.video_link.as_deref()),
            extras: decode_embedded(id, "extras", raw.extras)?,
            profile_image_url: non_blank(raw.profile_image_url.as_deref()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScienceArticle {
    pub id: i64,
    pub title: String,
    pub image_url: Vec<String>,
    /// Raw HTML as served; strip before display.
    pub description: String,
    pub author: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub verified: bool,
    pub plate: bool,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawScienceArticle {
    pub id: i64,
    #[serde(default, deserialize_with = "text_or_number")]
    pub title: String,
    #[serde(default)]
    pub image_url: Option<Value>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub description: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub created_at: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub updated_at: String,
    #[serde(default, deserialize_with = "flag")]
    pub verified: bool,
    #[serde(default, deserialize_with = "flag")]
    pub plate: bool,
    #[serde(default, deserialize_with = "optional_text")]
    pub status: Option<String>,
}

impl TryFrom<RawScienceArticle> for ScienceArticle {
    type Error = FetchError;

    fn try_from(raw: RawScienceArticle) -> Result<Self, Self::Error> {
        let id = raw.id;
        Ok(Self {
            id,
            title: raw.title,
            image_url: decode_embedded(id, "image_url", raw.image_url)?,
            description: raw.description,
            author: non_blank(raw.author.as_deref()),
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            verified: raw.verified,
            plate: raw.plate,
            status: non_blank(raw.status.as_deref()),
        })
    }
}

/// Profile from `/api/users`. Handles arrive as empty strings rather than
/// `null`; `normalized` turns blanks into `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    #[serde(deserialize_with = "text_or_number")]
    pub first_name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub last_name: String,
    #[serde(deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub profile_image_url: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub google_location: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub google_latitude: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub google_longitude: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub google_location_type: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub google_postal_code: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub google_city: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub web_source: Option<String>,
    pub location_id: Option<i64>,
    #[serde(deserialize_with = "optional_text")]
    pub package_selected: Option<String>,
    #[serde(rename = "ref", deserialize_with = "optional_text")]
    pub reference: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub position: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub influencer: bool,
    #[serde(deserialize_with = "optional_text")]
    pub instagram_handle: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub tiktok_handle: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub linkedin_handle: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub x_handle: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub youtube_handle: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub other_handle: Option<String>,
}

impl User {
    #[must_use]
    pub fn normalized(self) -> Self {
        let clean = |v: Option<String>| non_blank(v.as_deref());
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: clean(self.email),
            phone: clean(self.phone),
            profile_image_url: clean(self.profile_image_url),
            google_location: clean(self.google_location),
            google_latitude: clean(self.google_latitude),
            google_longitude: clean(self.google_longitude),
            google_location_type: clean(self.google_location_type),
            google_postal_code: clean(self.google_postal_code),
            google_city: clean(self.google_city),
            web_source: clean(self.web_source),
            package_selected: clean(self.package_selected),
            reference: clean(self.reference),
            position: clean(self.position),
            instagram_handle: clean(self.instagram_handle),
            tiktok_handle: clean(self.tiktok_handle),
            linkedin_handle: clean(self.linkedin_handle),
            x_handle: clean(self.x_handle),
            youtube_handle: clean(self.youtube_handle),
            other_handle: clean(self.other_handle),
            ..self
        }
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
