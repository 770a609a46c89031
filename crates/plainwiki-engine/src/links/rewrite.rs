use super::{kinds::BracketLink, parser::parse_links, types::LinkNode};

/// Replaces every `[Target]` in `body` with `<a href="/view/Target">Target</a>`.
///
/// Everything else is copied through byte for byte. The target is not
/// checked against the store and is not HTML-escaped.
pub fn rewrite(body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len());

    for node in parse_links(body) {
        match node {
            LinkNode::Text(span) => out.extend_from_slice(span.slice(body)),
            LinkNode::Link { target, .. } => {
                let target = target.slice(body);
                out.extend_from_slice(b"<a href=\"");
                out.extend_from_slice(BracketLink::VIEW_PREFIX.as_bytes());
                out.extend_from_slice(target);
                out.extend_from_slice(b"\">");
                out.extend_from_slice(target);
                out.extend_from_slice(b"</a>");
            }
        }
    }

    out
}

/// Titles referenced by bracket links, in order of appearance
pub fn link_targets(body: &[u8]) -> Vec<String> {
    parse_links(body)
        .into_iter()
        .filter_map(|node| match node {
            LinkNode::Link { target, .. } => {
                Some(String::from_utf8_lossy(target.slice(body)).into_owned())
            }
            LinkNode::Text(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rewrite_str(body: &str) -> String {
        String::from_utf8(rewrite(body.as_bytes())).unwrap()
    }

    #[test]
    fn rewrites_each_link() {
        assert_eq!(
            rewrite_str("see [Foo] and [Bar]"),
            r#"see <a href="/view/Foo">Foo</a> and <a href="/view/Bar">Bar</a>"#
        );
    }

    #[test]
    fn leaves_digit_titles_alone() {
        assert_eq!(rewrite_str("[foo123]"), "[foo123]");
    }

    #[test]
    fn plain_text_is_unchanged() {
        let body = "no links here, just <b>markup</b> & text\n";
        assert_eq!(rewrite_str(body), body);
    }

    #[test]
    fn empty_body() {
        assert!(rewrite(b"").is_empty());
    }

    #[test]
    fn surrounding_brackets_survive() {
        assert_eq!(
            rewrite_str("[[Foo]]"),
            r#"[<a href="/view/Foo">Foo</a>]"#
        );
    }

    #[test]
    fn does_not_check_target_exists() {
        assert_eq!(
            rewrite_str("[Nowhere]"),
            r#"<a href="/view/Nowhere">Nowhere</a>"#
        );
    }

    #[test]
    fn invalid_utf8_outside_links_passes_through() {
        let body = [0xff, b'[', b'A', b']', 0xfe];
        let mut expected = vec![0xff];
        expected.extend_from_slice(br#"<a href="/view/A">A</a>"#);
        expected.push(0xfe);
        assert_eq!(rewrite(&body), expected);
    }

    /// Known gap: link text is never HTML-escaped. Only letters can reach
    /// the anchor today, so the surrounding markup is what passes through
    /// unescaped.
    #[test]
    fn markup_is_not_escaped() {
        assert_eq!(
            rewrite_str("<script>[X]</script>"),
            r#"<script><a href="/view/X">X</a></script>"#
        );
    }

    #[test]
    fn collects_link_targets() {
        assert_eq!(
            link_targets(b"[One] then [two2] then [Three]"),
            vec!["One".to_string(), "Three".to_string()]
        );
        assert!(link_targets(b"nothing").is_empty());
    }
}
