use async_trait::async_trait;
use gmaps_point::core::{PageNavigator, Unshortener};
use gmaps_point::{
    ConverterConfig, FailureReason, HttpPageFetcher, HttpUnshortener, MapPointConverter, Point,
    PointSource, Resolution, Result,
};
use httpmock::prelude::*;
use httpmock::Method::HEAD;

fn unshortener(max_redirects: usize) -> HttpUnshortener {
    let config = ConverterConfig {
        max_redirects,
        ..ConverterConfig::default()
    };
    HttpUnshortener::new(&config).unwrap()
}

/// Sends shortened links to the mock server instead of maps.app.goo.gl.
struct LocalShortener {
    inner: HttpUnshortener,
    base: String,
}

#[async_trait]
impl Unshortener for LocalShortener {
    async fn unshorten(&self, url: &str) -> String {
        let path = url.strip_prefix("https://maps.app.goo.gl").unwrap_or(url);
        self.inner.unshorten(&format!("{}{}", self.base, path)).await
    }
}

/// Browser stand-in whose page never moves.
struct StaticPage;

#[async_trait]
impl PageNavigator for StaticPage {
    async fn settled_url(&self, url: &str) -> Result<String> {
        Ok(url.to_string())
    }
}

#[tokio::test]
async fn test_follows_chain_to_final_url() {
    let server = MockServer::start();
    let a = server.mock(|when, then| {
        when.method(HEAD).path("/a");
        then.status(301).header("Location", server.url("/b"));
    });
    let b = server.mock(|when, then| {
        when.method(HEAD).path("/b");
        then.status(302).header("Location", server.url("/c"));
    });
    let c = server.mock(|when, then| {
        when.method(HEAD).path("/c");
        then.status(200);
    });

    let resolved = unshortener(10).unshorten(&server.url("/a")).await;

    assert_eq!(resolved, server.url("/c"));
    a.assert();
    b.assert();
    c.assert();
}

#[tokio::test]
async fn test_stops_on_client_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(HEAD).path("/short");
        then.status(307).header("Location", server.url("/gone"));
    });
    server.mock(|when, then| {
        when.method(HEAD).path("/gone");
        then.status(404);
    });

    let resolved = unshortener(10).unshorten(&server.url("/short")).await;

    assert_eq!(resolved, server.url("/gone"));
}

#[tokio::test]
async fn test_request_error_keeps_last_known_url() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(HEAD).path("/short");
        then.status(302).header("Location", "http://127.0.0.1:1/unreachable");
    });

    let resolved = unshortener(10).unshorten(&server.url("/short")).await;

    assert_eq!(resolved, "http://127.0.0.1:1/unreachable");
}

#[tokio::test]
async fn test_cyclic_redirects_are_bounded() {
    let server = MockServer::start();
    let ping = server.mock(|when, then| {
        when.method(HEAD).path("/ping");
        then.status(302).header("Location", server.url("/pong"));
    });
    let pong = server.mock(|when, then| {
        when.method(HEAD).path("/pong");
        then.status(302).header("Location", server.url("/ping"));
    });

    let resolved = unshortener(4).unshorten(&server.url("/ping")).await;

    // ping, pong, ping, pong followed; the fifth response is not.
    assert_eq!(resolved, server.url("/ping"));
    ping.assert_hits(3);
    pong.assert_hits(2);
}

#[tokio::test]
async fn test_shortened_link_resolves_to_final_coordinates() {
    let server = MockServer::start();
    let short = server.mock(|when, then| {
        when.method(HEAD).path("/QbwD3NE9qmR62nYJ9");
        then.status(302).header(
            "Location",
            server.url("/maps/place/Monas/@-6.1753924,106.8271528,17z"),
        );
    });
    server.mock(|when, then| {
        when.method(HEAD)
            .path("/maps/place/Monas/@-6.1753924,106.8271528,17z");
        then.status(200);
    });

    let converter = MapPointConverter::new(
        LocalShortener {
            inner: unshortener(10),
            base: server.base_url(),
        },
        StaticPage,
    );

    let resolution = converter
        .resolve("https://maps.app.goo.gl/QbwD3NE9qmR62nYJ9?g_st=ipc")
        .await;

    short.assert();
    assert_eq!(
        resolution,
        Resolution::Resolved {
            point: Point::new(-6.1753924, 106.8271528),
            resolved_url: server.url("/maps/place/Monas/@-6.1753924,106.8271528,17z"),
            source: PointSource::ResolvedUrl,
        }
    );
}

#[tokio::test]
async fn test_shortened_link_without_coordinates_yields_nulls() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(HEAD).path("/NoCoords");
        then.status(301).header("Location", server.url("/maps/place/Somewhere"));
    });
    server.mock(|when, then| {
        when.method(HEAD).path("/maps/place/Somewhere");
        then.status(200);
    });

    let converter = MapPointConverter::new(
        LocalShortener {
            inner: unshortener(10),
            base: server.base_url(),
        },
        StaticPage,
    );

    let resolution = converter.resolve("https://maps.app.goo.gl/NoCoords").await;

    assert_eq!(
        resolution,
        Resolution::Unresolvable {
            resolved_url: server.url("/maps/place/Somewhere"),
            reason: FailureReason::BrowserUnchanged,
        }
    );
    let coords = resolution.coordinates();
    assert_eq!(coords.latitude(), None);
    assert_eq!(coords.longitude(), None);
}

fn page_scanning_converter(
    server: &MockServer,
) -> MapPointConverter<LocalShortener, StaticPage> {
    MapPointConverter::new(
        LocalShortener {
            inner: unshortener(10),
            base: server.base_url(),
        },
        StaticPage,
    )
    .with_page_fetcher(HttpPageFetcher::new(&ConverterConfig::default()).unwrap())
}

#[tokio::test]
async fn test_page_body_supplies_coordinates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(HEAD).path("/Share");
        then.status(302).header("Location", server.url("/maps/place/Monas"));
    });
    server.mock(|when, then| {
        when.method(HEAD).path("/maps/place/Monas");
        then.status(200);
    });
    let page = server.mock(|when, then| {
        when.method(GET).path("/maps/place/Monas");
        then.status(200).body(
            "<html><head>\n<meta content=\"https://www.google.com/maps/preview/place/Monas/@-6.1753924,106.8271528,17z/data=!4m2\" itemprop=\"image\">\n</head></html>",
        );
    });

    let resolution = page_scanning_converter(&server)
        .resolve("https://maps.app.goo.gl/Share")
        .await;

    page.assert();
    assert_eq!(
        resolution,
        Resolution::Resolved {
            point: Point::new(-6.1753924, 106.8271528),
            resolved_url: server.url("/maps/place/Monas"),
            source: PointSource::PageBody,
        }
    );
}

#[tokio::test]
async fn test_page_body_without_link_reaches_browser() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(HEAD).path("/maps/place/Somewhere");
        then.status(200);
    });
    let page = server.mock(|when, then| {
        when.method(GET).path("/maps/place/Somewhere");
        then.status(200).body("<html><body>Sign in to continue</body></html>");
    });

    let resolution = page_scanning_converter(&server)
        .resolve("https://maps.app.goo.gl/maps/place/Somewhere")
        .await;

    page.assert();
    assert_eq!(
        resolution,
        Resolution::Unresolvable {
            resolved_url: server.url("/maps/place/Somewhere"),
            reason: FailureReason::BrowserUnchanged,
        }
    );
}
