use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{Comment, ScienceArticle, SocialPost, User};
use crate::capabilities::join_path;
use crate::config::{DEFAULT_BASE_URL, DEFAULT_STORAGE_PATH};
use crate::event::Screen;
use crate::fetch::ListState;
use crate::links::{mailto, social_links, SocialLink};
use crate::media::{asset_url, storage_url, youtube_embed_url};
use crate::model::Model;
use crate::text::{format_date, format_fee, format_long_date, non_blank, strip_html};
use crate::wallet::Account;

pub const NO_IMAGES_PLACEHOLDER: &str = "No images available.";

/// Full-screen state of one list screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenView<C> {
    Idle,
    Loading { message: String },
    Empty { message: String },
    Ready { cards: Vec<C> },
    Failed { message: String, code: String },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VideoView {
    pub embed_url: String,
    pub watch_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CommentView {
    pub author: String,
    pub content: String,
    pub date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PostCard {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub fee: Option<String>,
    pub description: String,
    pub image_urls: Vec<String>,
    /// Shown instead of the carousel when there are no images.
    pub image_placeholder: Option<String>,
    pub video: Option<VideoView>,
    pub amenities: Option<String>,
    pub comments: Vec<CommentView>,
    pub contact_url: Option<String>,
    pub profile_image_url: Option<String>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ArticleCard {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub author: Option<String>,
    pub description: String,
    pub image_urls: Vec<String>,
    pub image_placeholder: Option<String>,
    pub verified: bool,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserCard {
    pub id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub contact_url: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub profile_image_url: Option<String>,
    pub influencer: bool,
    pub social_links: Vec<SocialLink>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccountCard {
    pub account_id: String,
    pub reference_name: String,
    pub account_number: String,
    pub account_name: String,
    pub product_name: String,
    pub kyc_compliant: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub active_screen: Option<Screen>,
    pub home: ScreenView<PostCard>,
    pub posts: ScreenView<PostCard>,
    pub science: ScreenView<ArticleCard>,
    pub users: ScreenView<UserCard>,
    pub gallery: ScreenView<String>,
    pub data: ScreenView<String>,
    pub wallets: ScreenView<AccountCard>,
    pub config_error: Option<String>,
}

/// Where relative image paths resolve to.
struct AssetRoots {
    host: String,
    storage: String,
}

impl AssetRoots {
    fn for_model(model: &Model) -> Self {
        match model.client() {
            Ok(client) => Self {
                host: client.asset_host().to_string(),
                storage: client.storage_root(),
            },
            Err(_) => Self {
                host: DEFAULT_BASE_URL.to_string(),
                storage: join_path(DEFAULT_BASE_URL, DEFAULT_STORAGE_PATH),
            },
        }
    }

    fn images(&self, paths: &[String]) -> Vec<String> {
        paths
            .iter()
            .filter_map(|path| asset_url(&self.host, path))
            .collect()
    }
}

pub fn view_model(model: &Model) -> ViewModel {
    let roots = AssetRoots::for_model(model);

    ViewModel {
        active_screen: model.active_screen,
        home: post_screen(model.home.state(), &roots),
        posts: post_screen(model.posts.state(), &roots),
        science: screen_view(
            model.science.state(),
            "articles",
            "Loading articles...",
            "No articles found.",
            |article| article_card(article, &roots),
        ),
        users: screen_view(
            model.users.state(),
            "users",
            "Loading user profiles...",
            "No users found.",
            |user| user_card(user, &roots),
        ),
        gallery: gallery_screen(model.gallery.state(), &roots),
        data: screen_view(
            model.data.state(),
            "data",
            "Loading data...",
            "No data found.",
            pretty_document,
        ),
        wallets: wallet_screen(&model.wallets),
        config_error: model.config_error.clone(),
    }
}

/// Maps a list state to what the screen shows; pure in `state`.
pub fn screen_view<T, C>(
    state: &ListState<T>,
    noun: &str,
    loading: &str,
    empty: &str,
    card: impl Fn(&T) -> C,
) -> ScreenView<C> {
    match state {
        ListState::Idle => ScreenView::Idle,
        ListState::Loading => ScreenView::Loading {
            message: loading.to_string(),
        },
        ListState::Success(items) if items.is_empty() => ScreenView::Empty {
            message: empty.to_string(),
        },
        ListState::Success(items) => ScreenView::Ready {
            cards: items.iter().map(card).collect(),
        },
        ListState::Failure(error) => ScreenView::Failed {
            message: error.user_message(noun),
            code: error.code().to_string(),
        },
    }
}

fn post_screen(state: &ListState<SocialPost>, roots: &AssetRoots) -> ScreenView<PostCard> {
    screen_view(
        state,
        "posts",
        "Loading posts...",
        "No posts found.",
        |post| post_card(post, roots),
    )
}

/// Blank entries are dropped; a gallery of only blanks is empty.
fn gallery_screen(state: &ListState<String>, roots: &AssetRoots) -> ScreenView<String> {
    let resolved = match state {
        ListState::Success(paths) => ListState::Success(roots.images(paths)),
        ListState::Idle => ListState::Idle,
        ListState::Loading => ListState::Loading,
        ListState::Failure(error) => ListState::Failure(error.clone()),
    };
    screen_view(
        &resolved,
        "images",
        "Loading images...",
        "No images found.",
        String::clone,
    )
}

fn post_card(post: &SocialPost, roots: &AssetRoots) -> PostCard {
    let image_urls = roots.images(&post.images);
    let video = post.video_link.as_deref().and_then(|link| {
        youtube_embed_url(link).map(|embed_url| VideoView {
            embed_url,
            watch_url: link.trim().to_string(),
        })
    });
    let amenities = (!post.extras.is_empty()).then(|| post.extras.join(", "));

    PostCard {
        id: post.id,
        title: post.place_name.trim().to_string(),
        date: format_long_date(&post.created_at),
        fee: format_fee(&post.fee),
        description: post.description.trim().to_string(),
        image_placeholder: image_urls
            .is_empty()
            .then(|| NO_IMAGES_PLACEHOLDER.to_string()),
        image_urls,
        video,
        amenities,
        comments: post.comments.iter().map(comment_view).collect(),
        contact_url: mailto(post.email.as_deref()),
        profile_image_url: storage_url(&roots.storage, post.profile_image_url.as_deref()),
        status: post.status.clone(),
    }
}

fn comment_view(comment: &Comment) -> CommentView {
    CommentView {
        author: comment.author.trim().to_string(),
        content: comment.content.trim().to_string(),
        date: format_date(&comment.created_at),
    }
}

fn article_card(article: &ScienceArticle, roots: &AssetRoots) -> ArticleCard {
    let image_urls = roots.images(&article.image_url);
    ArticleCard {
        id: article.id,
        title: article.title.trim().to_string(),
        date: format_date(&article.created_at),
        author: article.author.clone(),
        description: strip_html(&article.description),
        image_placeholder: image_urls
            .is_empty()
            .then(|| NO_IMAGES_PLACEHOLDER.to_string()),
        image_urls,
        verified: article.verified,
        status: article.status.clone(),
    }
}

fn user_card(user: &User, roots: &AssetRoots) -> UserCard {
    UserCard {
        id: user.id,
        full_name: user.full_name(),
        email: user.email.clone(),
        contact_url: mailto(user.email.as_deref()),
        phone: user.phone.clone(),
        position: user.position.clone(),
        location: location_line(user),
        profile_image_url: storage_url(&roots.storage, user.profile_image_url.as_deref()),
        influencer: user.influencer,
        social_links: social_links(user),
    }
}

/// Prefers the full place name; otherwise "city, postal code".
fn location_line(user: &User) -> Option<String> {
    if let Some(location) = non_blank(user.google_location.as_deref()) {
        return Some(location);
    }
    let parts: Vec<&str> = [user.google_city.as_deref(), user.google_postal_code.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

fn pretty_document(document: &Value) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string())
}

fn wallet_screen(accounts: &[Account]) -> ScreenView<AccountCard> {
    if accounts.is_empty() {
        return ScreenView::Empty {
            message: "No account information found.".into(),
        };
    }
    ScreenView::Ready {
        cards: accounts.iter().map(account_card).collect(),
    }
}

fn account_card(account: &Account) -> AccountCard {
    AccountCard {
        account_id: account.account_id.clone(),
        reference_name: account.reference_name.clone(),
        account_number: account.account_number.clone(),
        account_name: account.account_name.clone(),
        product_name: account.product_name.clone(),
        kyc_compliant: if account.kyc_compliant { "Yes" } else { "No" }.to_string(),
    }
}
