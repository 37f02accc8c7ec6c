use assert_matches::assert_matches;
use crux_core::testing::AppTester;
use crux_http::protocol::{HttpResponse, HttpResult};
use shared::{App, Effect, Event, FetchError, ListState, Model, Screen, ScreenView};

/// Opens `screen`, answers its HTTP effect through crux_http with
/// `response` and applies the resulting events.
fn open_and_resolve(screen: Screen, response: HttpResult) -> (AppTester<App, Effect>, Model) {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(Event::ScreenOpened(screen), &mut model);
    let mut request = update
        .into_effects()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("opening the screen should request HTTP");

    let update = app
        .resolve(&mut request, response)
        .expect("request should resolve");
    assert!(!update.events.is_empty());
    for event in update.events {
        app.update(event, &mut model);
    }

    (app, model)
}

fn respond(status: u16, body: &str) -> HttpResult {
    HttpResult::Ok(HttpResponse::status(status).body(body.as_bytes().to_vec()).build())
}

#[test]
fn test_server_error_surfaces_status_code() {
    let (app, model) = open_and_resolve(Screen::Home, respond(500, "oops"));

    assert_matches!(
        model.home.state(),
        ListState::Failure(FetchError::HttpStatus { status: 500 })
    );
    assert!(model.home.items().is_empty());
    assert_eq!(
        app.view(&model).home,
        ScreenView::Failed {
            message: "Error 500: Failed to fetch posts".into(),
            code: "HTTP_STATUS".into(),
        }
    );
}

#[test]
fn test_not_found_surfaces_status_code() {
    let (app, model) = open_and_resolve(Screen::Users, respond(404, r#"{"data":[]}"#));

    assert_eq!(
        app.view(&model).users,
        ScreenView::Failed {
            message: "Error 404: Failed to fetch users".into(),
            code: "HTTP_STATUS".into(),
        }
    );
}

#[test]
fn test_ok_with_malformed_embedded_field_is_decode_failure() {
    let body = r#"{"data":[{"id": 4, "images": "[unterminated"}]}"#;
    let (app, model) = open_and_resolve(Screen::Posts, respond(200, body));

    assert_matches!(
        model.posts.state(),
        ListState::Failure(FetchError::Decode { item_id, .. }) if item_id == "4"
    );
    assert_matches!(
        app.view(&model).posts,
        ScreenView::Failed { message, code } if message == "Invalid data from API." && code == "DECODE_ERROR"
    );
}

#[test]
fn test_ok_with_empty_data_is_empty_state() {
    let (app, model) = open_and_resolve(Screen::Science, respond(200, r#"{"data":[]}"#));

    assert_eq!(model.science.state(), &ListState::Success(Vec::new()));
    assert_eq!(
        app.view(&model).science,
        ScreenView::Empty {
            message: "No articles found.".into()
        }
    );
}

#[test]
fn test_ok_with_items_is_ready() {
    let body = r#"{"data":[{"id": 12, "images": "[\"a.jpg\"]"}, {"id": 5}]}"#;
    let (app, model) = open_and_resolve(Screen::Home, respond(200, body));

    let ScreenView::Ready { cards } = app.view(&model).home else {
        panic!("home should be ready");
    };
    assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![12, 5]);
}

#[test]
fn test_timeout_is_transport_failure() {
    let (app, model) = open_and_resolve(Screen::Gallery, HttpResult::Err(crux_http::Error::Timeout));

    assert_matches!(
        model.gallery.state(),
        ListState::Failure(FetchError::Transport { .. })
    );
    assert_matches!(
        app.view(&model).gallery,
        ScreenView::Failed { code, .. } if code == "TRANSPORT_ERROR"
    );
}
