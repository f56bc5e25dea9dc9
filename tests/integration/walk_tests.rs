//! Pagination walk tests against a mock site

use quotewalk::config::Config;
use quotewalk::crawler::{crawl, Walker};
use quotewalk::{ExtractError, Quote, ScrapeError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Renders one listing page with the given quotes and optional next link
pub fn listing_page(quotes: &[(&str, &str, &[&str])], next: Option<&str>) -> String {
    let mut body = String::from("<html><head><title>Quotes</title></head><body><div class=\"col-md-8\">");
    for (text, author, tags) in quotes {
        body.push_str("<div class=\"quote\">");
        body.push_str(&format!("<span class=\"text\">{}</span>", text));
        body.push_str(&format!("<span>by <small class=\"author\">{}</small></span>", author));
        body.push_str("<div class=\"tags\">Tags: ");
        for tag in *tags {
            body.push_str(&format!("<a class=\"tag\" href=\"/tag/{0}/\">{0}</a>", tag));
        }
        body.push_str("</div></div>");
    }
    body.push_str("<nav><ul class=\"pager\">");
    if let Some(href) = next {
        body.push_str(&format!("<li class=\"next\"><a href=\"{}\">Next</a></li>", href));
    }
    body.push_str("</ul></nav></div></body></html>");
    body
}

/// Mounts a page that must be fetched exactly once
pub async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .expect(1)
        .mount(server)
        .await;
}

/// Config pointing at `route` on the mock server
pub fn config_for(server: &MockServer, route: &str) -> Config {
    let mut config = Config::default();
    config.site.base_url = format!("{}{}", server.uri(), route);
    config
}

/// Serves P1 -> P2 -> P3 with P3 as the last page
pub async fn mount_three_pages(server: &MockServer) {
    mount_page(
        server,
        "/",
        listing_page(
            &[
                ("“One”", "Albert Einstein", &["change", "world"]),
                ("“Two”", "J.K. Rowling", &["abilities"]),
            ],
            Some("/page/2/"),
        ),
    )
    .await;
    mount_page(
        server,
        "/page/2/",
        listing_page(&[("“Three”", "Jane Austen", &[])], Some("/page/3/")),
    )
    .await;
    mount_page(
        server,
        "/page/3/",
        listing_page(&[("“Four”", "Marilyn Monroe", &["life", "love", "life"])], None),
    )
    .await;
}

#[tokio::test]
async fn test_walk_three_pages_in_order() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let outcome = crawl(&config_for(&server, "/")).await.expect("walk failed");

    assert_eq!(outcome.pages_fetched, 3);
    assert_eq!(
        outcome.quotes,
        vec![
            Quote::new("“One”", "Albert Einstein", vec!["change".into(), "world".into()]),
            Quote::new("“Two”", "J.K. Rowling", vec!["abilities".into()]),
            Quote::new("“Three”", "Jane Austen", vec![]),
            Quote::new(
                "“Four”",
                "Marilyn Monroe",
                vec!["life".into(), "love".into(), "life".into()]
            ),
        ]
    );
}

#[tokio::test]
async fn test_single_page_without_next_link() {
    let server = MockServer::start().await;
    mount_page(&server, "/", listing_page(&[("only", "me", &[])], None)).await;

    let outcome = crawl(&config_for(&server, "/")).await.unwrap();

    assert_eq!(outcome.pages_fetched, 1);
    assert_eq!(outcome.quotes.len(), 1);
}

#[tokio::test]
async fn test_page_without_quotes_still_follows_next() {
    let server = MockServer::start().await;
    mount_page(&server, "/", listing_page(&[], Some("/page/2/"))).await;
    mount_page(&server, "/page/2/", listing_page(&[("late", "arrival", &["x"])], None)).await;

    let outcome = crawl(&config_for(&server, "/")).await.unwrap();

    assert_eq!(outcome.pages_fetched, 2);
    assert_eq!(outcome.quotes, vec![Quote::new("late", "arrival", vec!["x".into()])]);
}

#[tokio::test]
async fn test_next_links_resolve_against_base_url() {
    let server = MockServer::start().await;
    // Resolved against the current page, the second link would point at
    // /catalog/sub/sub/page-3.html and never be served.
    mount_page(&server, "/catalog/", listing_page(&[("a", "A", &[])], Some("sub/page-2.html"))).await;
    mount_page(
        &server,
        "/catalog/sub/page-2.html",
        listing_page(&[("b", "B", &[])], Some("sub/page-3.html")),
    )
    .await;
    mount_page(&server, "/catalog/sub/page-3.html", listing_page(&[("c", "C", &[])], None)).await;

    let outcome = crawl(&config_for(&server, "/catalog/")).await.unwrap();

    assert_eq!(outcome.pages_fetched, 3);
    let texts: Vec<&str> = outcome.quotes.iter().map(|q| q.text()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_absolute_next_link_is_followed() {
    let server = MockServer::start().await;
    let absolute = format!("{}/elsewhere/", server.uri());
    mount_page(&server, "/", listing_page(&[], Some(&absolute))).await;
    mount_page(&server, "/elsewhere/", listing_page(&[("far", "away", &[])], None)).await;

    let outcome = crawl(&config_for(&server, "/")).await.unwrap();
    assert_eq!(outcome.pages_fetched, 2);
}

#[tokio::test]
async fn test_malformed_quote_aborts_walk() {
    let server = MockServer::start().await;
    mount_page(&server, "/", listing_page(&[("fine", "A", &[])], Some("/page/2/"))).await;
    mount_page(
        &server,
        "/page/2/",
        r#"<div class="quote"><span class="text">no author</span></div>
           <li class="next"><a href="/page/3/">Next</a></li>"#
            .to_string(),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/page/3/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&[], None)))
        .expect(0)
        .mount(&server)
        .await;

    let result = crawl(&config_for(&server, "/")).await;

    match result {
        Err(ScrapeError::Extract { url, source }) => {
            assert!(url.ends_with("/page/2/"));
            assert_eq!(
                source,
                ExtractError::MissingField {
                    field: "author",
                    index: 0
                }
            );
        }
        other => panic!("expected extraction failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_next_anchor_without_href_aborts_walk() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<ul class="pager"><li class="next"><a>Next</a></li></ul>"#.to_string(),
    )
    .await;

    let result = crawl(&config_for(&server, "/")).await;
    assert!(matches!(
        result,
        Err(ScrapeError::Extract {
            source: ExtractError::MissingHref,
            ..
        })
    ));
}

#[tokio::test]
async fn test_lenient_status_parses_error_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Internal error</h1>"))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = crawl(&config_for(&server, "/")).await.unwrap();

    assert_eq!(outcome.pages_fetched, 1);
    assert!(outcome.quotes.is_empty());
}

#[tokio::test]
async fn test_redirect_counts_as_one_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", "/moved/")
                .set_body_string("<p>Moved Permanently</p>"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/moved/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_page(&[("x", "X", &[])], None)),
        )
        .expect(0)
        .mount(&server)
        .await;

    let outcome = crawl(&config_for(&server, "/")).await.unwrap();

    assert_eq!(outcome.pages_fetched, 1);
    assert!(outcome.quotes.is_empty());
}

#[tokio::test]
async fn test_strict_status_fails_on_error_page() {
    let server = MockServer::start().await;
    mount_page(&server, "/", listing_page(&[("a", "A", &[])], Some("/page/2/"))).await;
    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server, "/");
    config.http.strict_status = true;

    let result = crawl(&config).await;
    assert!(matches!(
        result,
        Err(ScrapeError::UnexpectedStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_custom_selectors_walk() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<article><p class="body">custom</p><em>Writer</em><b>t1</b><b>t2</b></article>
           <a class="more" href="/2">more</a>"#
            .to_string(),
    )
    .await;
    mount_page(&server, "/2", "<p>end</p>".to_string()).await;

    let mut config = config_for(&server, "/");
    config.selectors.quote = "article".to_string();
    config.selectors.text = "p.body".to_string();
    config.selectors.author = "em".to_string();
    config.selectors.tag = "b".to_string();
    config.selectors.next = "a.more".to_string();

    let walker = Walker::from_config(&config).unwrap();
    let outcome = walker.walk().await.unwrap();

    assert_eq!(outcome.pages_fetched, 2);
    assert_eq!(
        outcome.quotes,
        vec![Quote::new("custom", "Writer", vec!["t1".into(), "t2".into()])]
    );
}
