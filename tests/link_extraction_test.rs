//! Integration tests for link extraction.
//!
//! Covers the fixture corpus under `tests/fixtures/` plus the documented
//! whitespace behavior: text leaves are trimmed, container levels insert a
//! joining space, and the anchor itself concatenates its children's text
//! without renormalizing.

use linkharvest::{Link, extract_links, parse_file, parse_str};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// Opt-in debug output: run with RUST_LOG=linkharvest=debug to see the
// adapter and extraction boundary events while a test runs.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn document_without_anchors_yields_no_links() {
    init_tracing();
    let root = parse_str("<html><body><p>just text</p><div><em>markup</em></div></body></html>");
    assert!(extract_links(&root).is_empty());
}

#[test]
fn single_anchor_with_plain_text() {
    init_tracing();
    let root = parse_str(r##"<a href="#">This is my text</a>"##);
    let links = extract_links(&root);
    assert_eq!(
        links,
        vec![Link { href: "#".to_string(), text: "This is my text".to_string() }]
    );
}

#[test]
fn simple_page_has_one_link() {
    init_tracing();
    let root = parse_file(fixture("simple_page.html")).expect("fixture parses");
    let links = extract_links(&root);
    assert_eq!(
        links,
        vec![Link {
            href: "/other-page".to_string(),
            text: "A link to another page".to_string(),
        }]
    );
}

#[test]
fn social_links_page_preserves_document_order() {
    init_tracing();
    let root = parse_file(fixture("social_links.html")).expect("fixture parses");
    let links = extract_links(&root);
    assert_eq!(
        links,
        vec![
            Link {
                href: "https://www.twitter.com/example".to_string(),
                text: "Follow me on Twitter".to_string(),
            },
            Link {
                href: "https://github.com/example".to_string(),
                text: "My projects live on GitHub".to_string(),
            },
        ]
    );
}

#[test]
fn landing_page_collects_links_from_nav_body_and_footer() {
    init_tracing();
    let root = parse_file(fixture("landing_page.html")).expect("fixture parses");
    let links = extract_links(&root);
    assert_eq!(
        links,
        vec![
            Link { href: "#".to_string(), text: "Login".to_string() },
            Link { href: "/lost".to_string(), text: "Lost? Need help?".to_string() },
            Link {
                href: "https://twitter.com/example".to_string(),
                text: "@example".to_string(),
            },
        ]
    );
}

#[test]
fn comment_inside_anchor_contributes_no_text() {
    init_tracing();
    let root = parse_file(fixture("commented_anchor.html")).expect("fixture parses");
    let links = extract_links(&root);
    assert_eq!(
        links,
        vec![Link { href: "/dog-cat".to_string(), text: "dog cat".to_string() }]
    );
}

#[test]
fn text_split_across_inline_children_is_space_joined() {
    init_tracing();
    let root = parse_str(r##"<a href="/dog-cat"><span>dog</span><span>cat</span></a>"##);
    let links = extract_links(&root);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].href, "/dog-cat");
    // Each span contributes one joining space; the anchor does not trim the
    // result, so the leading pad is expected output.
    assert_eq!(links[0].text, " dog cat");
}

#[test]
fn anchor_without_text_yields_empty_string() {
    init_tracing();
    let root = parse_str(r##"<a href="/empty"></a>"##);
    let links = extract_links(&root);
    assert_eq!(links, vec![Link { href: "/empty".to_string(), text: String::new() }]);
}

#[test]
fn extraction_is_idempotent_over_the_same_tree() {
    init_tracing();
    let root = parse_file(fixture("landing_page.html")).expect("fixture parses");
    let first = extract_links(&root);
    let second = extract_links(&root);
    assert_eq!(first, second);
}
