mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by its `id` attribute.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by its diffing key.
pub fn find_by_key<'a>(root: &'a Element, key: &str) -> Option<&'a Element> {
    if root.key.as_deref() == Some(key) {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_by_key(child, key))
}

/// Collect every element (depth first, document order) matching `predicate`.
pub fn find_all<'a>(root: &'a Element, predicate: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
    fn walk<'a>(el: &'a Element, predicate: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if predicate(el) {
            out.push(el);
        }
        for child in el.child_elements() {
            walk(child, predicate, out);
        }
    }

    let mut out = Vec::new();
    walk(root, &predicate, &mut out);
    out
}

/// Collect every element carrying the class token `class`.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    find_all(root, |el| el.has_class(class))
}
