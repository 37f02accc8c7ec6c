//! Capabilities the core asks the shell to perform.
//!
//! Only two are needed: HTTP for the content API and Render to tell the
//! shell the view model changed.
mod http;

pub use self::http::{join_path, HttpError, HttpHeaders, HttpResponse, HttpResult, ValidatedUrl};

pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::app::App;
use crate::event::Event;

// Field types are spelled out so the derived `Effect` variants are named
// `Http` and `Render`.
#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
}
