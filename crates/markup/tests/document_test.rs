use markup::{Content, Criterion, Document, MarkupSerializer, Node, SerializerConfig};
use serde_json::json;

fn render(doc: &Document) -> String {
    doc.serialize(&SerializerConfig::default())
}

#[test]
fn test_append_extends_rendered_output() {
    let mut doc = Document::from_nodes(vec![
        Node::element("h1").with_text("Header"),
        Node::element("div").with_attr("id", "x"),
    ]);
    let before = render(&doc);

    let extra = Node::element("footer").with_child(Node::element("wbr"));
    let extra_markup = MarkupSerializer::render_node(&extra);
    doc.append(extra);

    let after = render(&doc);
    let insert_at = before.len() - "</html>".len();
    let mut expected = before.clone();
    expected.insert_str(insert_at, &extra_markup);
    assert_eq!(after, expected);
}

#[test]
fn test_void_elements_never_render_content() {
    let doc = Document::from_nodes(vec![
        Node::element("input")
            .with_attr("type", "hidden")
            .with_text("secret"),
        Node::element("meta").with_children(vec![Node::element("p").with_text("nested")]),
    ]);

    assert_eq!(
        render(&doc),
        r#"<!DOCTYPE html><html><input type="hidden" /><meta /></html>"#
    );
}

#[test]
fn test_tag_filter_wins_over_id_filter() {
    let doc = Document::from_nodes(vec![Node::element("div").with_attr("id", "main")]);

    assert_eq!(doc.search(&Criterion::new().id("main")).len(), 1);
    assert!(doc
        .search(&Criterion::new().tag("span").id("main"))
        .is_empty());
    assert_eq!(doc.search(&Criterion::new().tag("div").id("other")).len(), 1);
}

#[test]
fn test_find_by_type_orders_levels() {
    let doc = Document::from_nodes(vec![
        Node::element("head").with_child(Node::element("title").with_text("nested")),
        Node::element("title").with_text("top"),
    ]);

    let titles: Vec<_> = doc
        .find_by_type("title")
        .iter()
        .filter_map(|n| n.text_payload())
        .collect();
    assert_eq!(titles, vec!["top", "nested"]);
}

#[test]
fn test_set_title_twice_keeps_one_title() {
    let mut doc = Document::from_nodes(vec![Node::element("head")]);
    doc.set_title("first").set_title("second");

    let titles = doc.find_by_type("title");
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].text_payload(), Some("second"));
}

#[test]
fn test_set_title_overwrites_first_match_only() {
    let mut doc = Document::from_nodes(vec![
        Node::element("head").with_child(Node::element("title").with_text("a")),
        Node::element("title").with_text("b"),
    ]);
    doc.set_title("new");

    // Same-level matches come first, so the top-level title is the one replaced
    assert_eq!(doc.root_content()[1].text_payload(), Some("new"));
    assert_eq!(doc.root_content()[0].children()[0].text_payload(), Some("a"));
    assert_eq!(doc.find_by_type("title").len(), 2);
}

#[test]
fn test_json_value_keeps_attribute_order() {
    let value = json!([{ "type": "div", "attributes": { "role": "main", "id": "z", "class": "a" } }]);
    let doc: Document = serde_json::from_value(value.clone()).unwrap();

    assert_eq!(
        render(&doc),
        r#"<!DOCTYPE html><html><div role="main" id="z" class="a"></div></html>"#
    );
    assert_eq!(serde_json::to_value(&doc).unwrap(), value);
}

#[test]
fn test_scaffold_twice_nests() {
    let mut doc = Document::from_nodes(vec![Node::element("p")]);
    doc.scaffold().scaffold();

    let root = doc.root_content();
    assert_eq!(root.len(), 2);
    let outer_body = &root[1];
    assert_eq!(outer_body.children().len(), 2);
    assert_eq!(outer_body.children()[0].tag_name(), Some("head"));
    let inner_body = &outer_body.children()[1];
    assert_eq!(inner_body.tag_name(), Some("body"));
    assert_eq!(inner_body.children(), [Node::element("p")]);
}

#[test]
fn test_scaffold_serialization() {
    let mut doc = Document::from_nodes(vec![Node::element("p")]);
    doc.scaffold();

    assert_eq!(
        render(&doc),
        concat!(
            "<!DOCTYPE html><html>",
            r#"<head><meta charset="utf-8" />"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1" /></head>"#,
            "<body><p></p></body>",
            "</html>"
        )
    );
}

#[test]
fn test_append_to_text_target_keeps_text() {
    let mut doc = Document::from_nodes(vec![Node::element("p")
        .with_attr("class", "note")
        .with_text("text")]);
    doc.append_to_class("note", Node::element("span"));

    assert_eq!(
        doc.root_content()[0].content,
        Some(Content::Nodes(vec![Node::text("text"), Node::element("span")]))
    );
    assert!(render(&doc).contains("<p class=\"note\">text<span></span></p>"));
}

#[test]
fn test_json_page_build() {
    let page = json!([
        { "type": "head", "content": [{ "type": "title", "content": "Pay" }] },
        { "type": "body", "content": [
            { "type": "form", "attributes": { "id": "pay", "acceptCharset": "utf-8" } }
        ]}
    ]);
    let mut doc: Document = serde_json::from_value(page).unwrap();

    doc.append_to_id(
        "pay",
        Node::element("input")
            .with_attr("type", "hidden")
            .with_attr("name", "amount")
            .with_attr("value", "10.00"),
    );

    let config = SerializerConfig::from_json(r#"{"htmlTagAttributes": {"lang": "en"}}"#).unwrap();
    assert_eq!(
        doc.serialize(&config),
        concat!(
            r#"<!DOCTYPE html><html lang="en"><head><title>Pay</title></head>"#,
            r#"<body><form id="pay" accept-charset="utf-8">"#,
            r#"<input type="hidden" name="amount" value="10.00" /></form></body></html>"#
        )
    );

    let back = serde_json::to_value(&doc).unwrap();
    assert_eq!(back[1]["content"][0]["content"][0]["attributes"]["name"], "amount");
}
