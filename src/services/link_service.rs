/// Rewrites `[Name]` tokens into anchors.
///
/// A token is `[` followed by one or more ASCII letters or digits and `]`.
/// Tokens are matched left to right without overlap; anything else is
/// copied through unchanged. The captured name is emitted as-is.
pub struct LinkRewriter;

impl LinkRewriter {
    pub fn new() -> Self {
        Self
    }

    pub fn rewrite(&self, body: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(body.len());
        let mut i = 0usize;
        while i < body.len() {
            if body[i] == b'[' {
                if let Some(len) = token_len(&body[i + 1..]) {
                    let name = &body[i + 1..i + 1 + len];
                    push_anchor(&mut out, name);
                    // skip name and closing bracket
                    i += len + 2;
                    continue;
                }
            }
            out.push(body[i]);
            i += 1;
        }
        out
    }
}

impl Default for LinkRewriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of the alphanumeric run at the start of `rest` if a `]` follows it
fn token_len(rest: &[u8]) -> Option<usize> {
    let len = rest.iter().take_while(|b| b.is_ascii_alphanumeric()).count();
    if len > 0 && rest.get(len) == Some(&b']') {
        Some(len)
    } else {
        None
    }
}

fn push_anchor(out: &mut Vec<u8>, name: &[u8]) {
    out.extend_from_slice(b"<a href=\"");
    out.extend_from_slice(name);
    out.extend_from_slice(b"\">");
    out.extend_from_slice(name);
    out.extend_from_slice(b"</a>");
}
