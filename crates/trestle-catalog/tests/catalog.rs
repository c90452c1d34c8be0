//! Every story renders, and args resolve in layer order.

use proptest::prelude::*;
use trestle_catalog::{Catalog, CatalogError, SORTING_HINT};
use trestle_core::Node;
use trestle_widgets::{DEFAULT_PLACEHOLDER, EMPTY_MESSAGE, LOADING_ROW_COUNT};

fn render(id: &str) -> Node {
    Catalog::standard().render(id, None).unwrap()
}

fn render_with(id: &str, overrides: &str) -> Node {
    Catalog::standard().render(id, Some(overrides)).unwrap()
}

fn body_rows(node: &Node) -> usize {
    node.find_by_tag("tbody")[0].children.len()
}

#[test]
fn every_story_renders() {
    let catalog = Catalog::standard();
    for story in catalog.stories() {
        let node = catalog.render(&story.id, None).unwrap();
        assert!(!node.to_html().is_empty(), "{} rendered nothing", story.id);
    }
}

#[test]
fn table_stories() {
    let node = render("components-datatable--default");
    assert_eq!(body_rows(&node), 5);
    assert!(node.find_by_attr("type", "checkbox").is_empty());
    assert_eq!(node.find_by_class("rounded-full").len(), 5);

    let node = render("components-datatable--selectable");
    assert_eq!(node.find_by_attr("type", "checkbox").len(), 6);

    let node = render("components-datatable--loading");
    assert_eq!(body_rows(&node), LOADING_ROW_COUNT);

    let node = render("components-datatable--empty");
    assert_eq!(body_rows(&node), 1);
    assert_eq!(node.find_by_attr("colspan", "4")[0].text_content(), EMPTY_MESSAGE);

    let node = render("components-datatable--with-sorting");
    assert!(node.text_content().starts_with(SORTING_HINT));
}

#[test]
fn field_stories() {
    let node = render("components-inputfield--outlined");
    let input = node.find_by_tag("input")[0];
    assert!(input.has_class("border-gray-300"));
    assert_eq!(input.get_attr("placeholder"), Some("you@example.com"));
    assert_eq!(node.find_by_tag("label")[0].text_content(), "Email Address");

    let node = render("components-inputfield--large");
    assert!(node.find_by_tag("input")[0].has_class("text-lg"));
    assert_eq!(node.find_by_tag("label")[0].text_content(), "Large Input");

    let node = render("components-inputfield--invalid");
    let alert = node.find_by_attr("role", "alert");
    assert_eq!(alert[0].text_content(), "This field is required.");
    assert!(node.find_by_tag("input")[0].has_class("border-red-500"));

    let node = render("components-inputfield--disabled");
    let input = node.find_by_tag("input")[0];
    assert!(input.has_attr("disabled"));
    assert_eq!(input.get_attr("value"), Some("Cannot edit this"));
}

#[test]
fn overrides_win_over_story_and_meta() {
    let node = render_with("components-datatable--empty", "loading: true");
    assert_eq!(body_rows(&node), LOADING_ROW_COUNT);

    let node = render_with(
        "components-inputfield--invalid",
        "{\"disabled\": true, \"placeholder\": null}",
    );
    let input = node.find_by_tag("input")[0];
    assert!(!input.has_class("border-red-500"));
    assert_eq!(input.get_attr("placeholder"), Some(DEFAULT_PLACEHOLDER));
}

#[test]
fn invalid_overrides_are_rejected() {
    let catalog = Catalog::standard();
    let err = catalog
        .render("components-inputfield--small", Some("variant: neon"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidOption { .. }));

    let err = catalog
        .render("components-datatable--default", Some("selectable: 1"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidType { .. }));

    let err = catalog
        .render("components-inputfield--small", Some("colour: red"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgs { .. }));
}

proptest! {
    #[test]
    fn override_label_always_shown(label in "[A-Za-z][A-Za-z ]{0,20}") {
        let overrides = serde_json::json!({ "label": label }).to_string();
        let node = render_with("components-inputfield--medium", &overrides);
        prop_assert_eq!(node.find_by_tag("label")[0].text_content(), label);
    }
}
