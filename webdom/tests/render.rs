use webdom::{Element, to_html};

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_attributes_in_fixed_order() {
    let el = Element::td()
        .attribute("colspan", "3")
        .style("color: red;")
        .class("mb-grid-td")
        .id("cell");

    assert_eq!(
        to_html(&el),
        r#"<td id="cell" class="mb-grid-td" style="color: red;" colspan="3"></td>"#
    );
}

#[test]
fn test_class_is_kept_verbatim() {
    let el = Element::td().class("mb-grid-td ");
    assert_eq!(to_html(&el), r#"<td class="mb-grid-td "></td>"#);
}

#[test]
fn test_void_tag_has_no_closing_tag() {
    let el = Element::colgroup()
        .child(Element::col().style("width: 10px;"))
        .child(Element::col());

    assert_eq!(
        to_html(&el),
        r#"<colgroup><col style="width: 10px;"><col></colgroup>"#
    );
}

#[test]
fn test_fragment_emits_children_only() {
    let el = Element::fragment()
        .child(Element::div().id("a"))
        .child(Element::div().id("b"));

    assert_eq!(to_html(&el), r#"<div id="a"></div><div id="b"></div>"#);
}

#[test]
fn test_key_and_flags_not_serialized() {
    let el = Element::tr().key("row-1").clickable(true).scrollable(true);
    assert_eq!(to_html(&el), "<tr></tr>");
}

// ============================================================================
// Escaping Tests
// ============================================================================

#[test]
fn test_text_is_escaped() {
    let el = Element::td().text("a < b & c > d");
    assert_eq!(to_html(&el), "<td>a &lt; b &amp; c &gt; d</td>");
}

#[test]
fn test_attribute_quotes_are_escaped() {
    let el = Element::div().attribute("title", r#"say "hi""#);
    assert_eq!(to_html(&el), r#"<div title="say &quot;hi&quot;"></div>"#);
}

#[test]
fn test_whitespace_text_preserved() {
    let el = Element::td().text("  Group A");
    assert_eq!(to_html(&el), "<td>  Group A</td>");
}
