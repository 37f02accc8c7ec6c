#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod api;
pub mod app;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod event;
pub mod fetch;
pub mod links;
pub mod media;
pub mod model;
pub mod text;
pub mod view;
pub mod wallet;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::ApiConfig;
pub use crux_core::App as CruxApp;
pub use error::{FetchError, FetchErrorKind};
pub use event::{Event, Screen};
pub use fetch::{ListState, RemoteList, Ticket};
pub use model::Model;
pub use view::{ScreenView, ViewModel};
