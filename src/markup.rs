//! String assembly for voice-action elements.

use quick_xml::escape::escape;

use crate::constants::BOOL_TRUE;

const RESPONSE_OPEN: &str = "<Response>";
const RESPONSE_CLOSE: &str = "</Response>";

/// Builder for a single XML element.
///
/// Attributes are written in insertion order, double-quoted and escaped.
/// Optional attributes that are absent, empty or `"0"` are skipped entirely.
pub(crate) struct Element {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    content: String,
    self_closing: bool,
}

impl Element {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            content: String::new(),
            self_closing: false,
        }
    }

    /// Add an attribute unconditionally
    pub(crate) fn attr(mut self, name: &'static str, value: &str) -> Self {
        self.attributes
            .push((name, escape(value).into_owned()));
        self
    }

    /// Add an attribute only when `value` is present, non-empty and not zero
    pub(crate) fn attr_opt<V: ToString>(self, name: &'static str, value: Option<V>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(v) if !v.is_empty() && v != "0" => self.attr(name, &v),
            _ => self,
        }
    }

    /// Add a boolean attribute; `false` is omitted
    pub(crate) fn flag(self, name: &'static str, on: bool) -> Self {
        if on {
            self.attr(name, BOOL_TRUE)
        } else {
            self
        }
    }

    /// Append escaped text content
    pub(crate) fn text(mut self, text: &str) -> Self {
        self.content
            .push_str(&escape(text));
        self
    }

    /// Append an already rendered child fragment
    pub(crate) fn child(mut self, fragment: &str) -> Self {
        self.content
            .push_str(fragment);
        self
    }

    /// Render as `<Name />` when there is no content
    pub(crate) fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    pub(crate) fn build(self) -> String {
        let mut out = String::with_capacity(32 + self.content.len());
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        if self.self_closing && self.content.is_empty() {
            out.push_str(" />");
            return out;
        }
        out.push('>');
        out.push_str(&self.content);
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
        out
    }
}

/// Wrap a fragment in its own `<Response>` element
pub(crate) fn wrap_response(fragment: &str) -> String {
    let mut out = String::with_capacity(RESPONSE_OPEN.len() + fragment.len() + RESPONSE_CLOSE.len());
    out.push_str(RESPONSE_OPEN);
    out.push_str(fragment);
    out.push_str(RESPONSE_CLOSE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_keep_insertion_order() {
        let xml = Element::new("Dial")
            .attr("phoneNumbers", "+254700000000")
            .flag("record", true)
            .flag("sequential", false)
            .attr_opt("callerId", None::<&str>)
            .attr_opt("maxDuration", Some(30))
            .build();
        assert_eq!(
            xml,
            r#"<Dial phoneNumbers="+254700000000" record="1" maxDuration="30"></Dial>"#
        );
    }

    #[test]
    fn empty_optional_attribute_is_skipped() {
        let xml = Element::new("Enqueue")
            .attr_opt("name", Some(""))
            .build();
        assert_eq!(xml, "<Enqueue></Enqueue>");
    }

    #[test]
    fn zero_optional_attribute_is_skipped() {
        let xml = Element::new("Dial")
            .attr("phoneNumbers", "+254700000000")
            .attr_opt("maxDuration", Some(0))
            .attr_opt("name", Some("0"))
            .build();
        assert_eq!(xml, r#"<Dial phoneNumbers="+254700000000"></Dial>"#);
    }

    #[test]
    fn self_closing_without_content() {
        assert_eq!(
            Element::new("Reject")
                .self_closing()
                .build(),
            "<Reject />"
        );
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let xml = Element::new("Say")
            .attr("voice", "a\"b")
            .text("Tom & Jerry <3")
            .build();
        assert_eq!(xml, r#"<Say voice="a&quot;b">Tom &amp; Jerry &lt;3</Say>"#);
    }

    #[test]
    fn response_wrapper() {
        assert_eq!(
            wrap_response("<Conference />"),
            "<Response><Conference /></Response>"
        );
    }
}
