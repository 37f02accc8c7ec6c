use tracing::{debug, info, instrument, warn};

use crate::api::{GalleryImages, ListEndpoint, RawDocument, ScienceArticles, SocialPosts, Users};
use crate::capabilities::{Capabilities, HttpResponse, HttpResult};
use crate::error::FetchError;
use crate::event::{Event, Screen};
use crate::fetch::{RemoteList, Settled, Ticket};
use crate::model::Model;
use crate::view::{view_model, ViewModel};

#[derive(Default)]
pub struct App;

/// Picks one screen's list out of the model.
type ListOf<T> = fn(&mut Model) -> &mut RemoteList<T>;

impl App {
    /// Starts a load for `screen`. With `force` unset the load only starts
    /// from idle; otherwise any request in flight is superseded.
    fn load(screen: Screen, force: bool, model: &mut Model, caps: &Capabilities) {
        match screen {
            Screen::Home => {
                Self::load_list::<SocialPosts>(screen, force, model, |m| &mut m.home, caps);
            }
            Screen::Posts => {
                Self::load_list::<SocialPosts>(screen, force, model, |m| &mut m.posts, caps);
            }
            Screen::Science => {
                Self::load_list::<ScienceArticles>(screen, force, model, |m| &mut m.science, caps);
            }
            Screen::Users => {
                Self::load_list::<Users>(screen, force, model, |m| &mut m.users, caps);
            }
            Screen::Gallery => {
                Self::load_list::<GalleryImages>(screen, force, model, |m| &mut m.gallery, caps);
            }
            Screen::Data => {
                Self::load_list::<RawDocument>(screen, force, model, |m| &mut m.data, caps);
            }
            Screen::Wallets => {}
        }
    }

    fn load_list<E: ListEndpoint>(
        screen: Screen,
        force: bool,
        model: &mut Model,
        list: ListOf<E::Item>,
        caps: &Capabilities,
    ) {
        let ticket = if force {
            Some(list(model).reload())
        } else {
            list(model).activate()
        };
        let Some(ticket) = ticket else {
            debug!("{screen} already loaded or loading");
            return;
        };

        let request = model.client().and_then(|client| {
            let url = client.endpoint(E::PATH)?;
            Ok((url, client.headers().clone()))
        });

        match request {
            Ok((url, headers)) => {
                info!("Fetching {} for {screen} (ticket {})", url.as_str(), ticket.value());

                let mut builder = caps.http.get(url.as_str());
                for (name, value) in headers.iter() {
                    builder = builder.header(name, value);
                }
                builder.send(move |result| Event::ListFetched {
                    screen,
                    ticket,
                    result: Box::new(HttpResponse::from_crux(result)),
                });
            }
            Err(e) => {
                warn!("Cannot build request for {screen}: {e}");
                list(model).fail(
                    ticket,
                    FetchError::Transport {
                        message: e.to_string(),
                    },
                );
            }
        }
    }

    fn settle(screen: Screen, ticket: Ticket, result: HttpResult, model: &mut Model) -> Settled {
        match screen {
            Screen::Home => model.home.settle::<SocialPosts>(ticket, result),
            Screen::Posts => model.posts.settle::<SocialPosts>(ticket, result),
            Screen::Science => model.science.settle::<ScienceArticles>(ticket, result),
            Screen::Users => model.users.settle::<Users>(ticket, result),
            Screen::Gallery => model.gallery.settle::<GalleryImages>(ticket, result),
            Screen::Data => model.data.settle::<RawDocument>(ticket, result),
            Screen::Wallets => Settled::Stale,
        }
    }

    fn deactivate(screen: Screen, model: &mut Model) {
        match screen {
            Screen::Home => model.home.deactivate(),
            Screen::Posts => model.posts.deactivate(),
            Screen::Science => model.science.deactivate(),
            Screen::Users => model.users.deactivate(),
            Screen::Gallery => model.gallery.deactivate(),
            Screen::Data => model.data.deactivate(),
            Screen::Wallets => {}
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    #[instrument(skip_all, fields(event = event.name()))]
    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        if event.is_user_initiated() {
            debug!("User action: {}", event.name());
        }

        match event {
            Event::Configure(config) => {
                match model.configure(*config) {
                    Ok(()) => info!("API config updated: {}", model.api_config.base_url),
                    Err(e) => {
                        warn!("Rejected API config, keeping previous: {e}");
                        model.config_error = Some(e.to_string());
                    }
                }
                caps.render.render();
            }

            Event::ScreenOpened(screen) => {
                model.active_screen = Some(screen);
                if screen.fetches_on_open() {
                    Self::load(screen, false, model, caps);
                }
                caps.render.render();
            }

            Event::ScreenClosed(screen) => {
                Self::deactivate(screen, model);
                if model.active_screen == Some(screen) {
                    model.active_screen = None;
                }
                caps.render.render();
            }

            Event::LoadRequested(screen) => {
                Self::load(screen, true, model, caps);
                caps.render.render();
            }

            Event::ListFetched {
                screen,
                ticket,
                result,
            } => {
                match Self::settle(screen, ticket, *result, model) {
                    Settled::Stale => {
                        debug!("Dropped stale response for {screen} (ticket {})", ticket.value());
                    }
                    Settled::Success { count } => {
                        info!("Loaded {count} items for {screen}");
                        caps.render.render();
                    }
                    Settled::Failure { code, status } => {
                        warn!("Fetch failed for {screen}: {code} (status {status:?})");
                        caps.render.render();
                    }
                }
            }

            Event::FetchBalanceRequested { account_id } => {
                info!("Fetching balance for account: {account_id}");
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        view_model(model)
    }
}
