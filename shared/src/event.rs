use serde::{Deserialize, Serialize};
use std::fmt;

use crate::capabilities::HttpResult;
use crate::config::ApiConfig;
use crate::fetch::Ticket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Home,
    Posts,
    Science,
    Users,
    Wallets,
    Gallery,
    Data,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Self::Home,
        Self::Posts,
        Self::Science,
        Self::Users,
        Self::Wallets,
        Self::Gallery,
        Self::Data,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Posts => "posts",
            Self::Science => "science",
            Self::Users => "users",
            Self::Wallets => "wallets",
            Self::Gallery => "gallery",
            Self::Data => "data",
        }
    }

    /// Whether opening the screen starts a load. Data waits for an explicit
    /// load and Wallets never fetches.
    pub const fn fetches_on_open(self) -> bool {
        !matches!(self, Self::Data | Self::Wallets)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    /// Replace the API client configuration.
    Configure(Box<ApiConfig>),

    ScreenOpened(Screen),
    ScreenClosed(Screen),
    /// Explicit (re)load; always issues a fresh request.
    LoadRequested(Screen),

    FetchBalanceRequested { account_id: String },

    // Capability responses
    #[serde(skip)]
    ListFetched {
        screen: Screen,
        ticket: Ticket,
        result: Box<HttpResult>,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Configure(_) => "configure",
            Self::ScreenOpened(_) => "screen_opened",
            Self::ScreenClosed(_) => "screen_closed",
            Self::LoadRequested(_) => "load_requested",
            Self::FetchBalanceRequested { .. } => "fetch_balance_requested",
            Self::ListFetched { .. } => "list_fetched",
        }
    }

    pub fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::ScreenOpened(_)
                | Self::ScreenClosed(_)
                | Self::LoadRequested(_)
                | Self::FetchBalanceRequested { .. }
        )
    }
}
