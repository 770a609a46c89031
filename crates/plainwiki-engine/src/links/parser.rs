use super::{
    cursor::Cursor,
    kinds::BracketLink,
    types::{LinkNode, Span},
};

/// Scans a page body into a sequence of [`LinkNode`]s.
///
/// The nodes cover the entire input in order: concatenating the bytes of
/// every node's full span reproduces `body` exactly. Text between links is
/// emitted as `LinkNode::Text`; adjacent text is never split.
pub fn parse_links(body: &[u8]) -> Vec<LinkNode> {
    let mut cur = Cursor::new(body);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<LinkNode>, start: usize, end: usize) {
        if end > start {
            out.push(LinkNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_bracket_link(&mut cur) {
            let full = node.full();
            flush_text(&mut out, text_start, full.start);
            text_start = full.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse `[Letters]` at the current position.
///
/// On failure the cursor is restored, so the caller advances a single byte
/// and a later `[` inside the rejected candidate can still start a link.
fn try_parse_bracket_link(cur: &mut Cursor<'_>) -> Option<LinkNode> {
    if cur.peek() != Some(BracketLink::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let target_start = cur.pos();
    let target_len = cur.bump_while(BracketLink::is_target_byte);
    let target_end = cur.pos();

    if target_len == 0 || cur.peek() != Some(BracketLink::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // ]

    Some(LinkNode::Link {
        full: Span {
            start,
            end: cur.pos(),
        },
        target: Span {
            start: target_start,
            end: target_end,
        },
    })
}
