//! Relaxed JSON: `//` and `/* */` comments and trailing commas.
//!
//! [`strip`] blanks those tokens out with spaces so the text can go through `serde_json` as-is.
//! Newlines are kept, so line and column numbers in parse errors still point into the manifest
//! as written.

pub fn strip(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = bytes.to_vec();
    let mut pending_comma = None;
    //Whether the last significant token ends a value, only then can a comma be trailing
    let mut after_value = false;
    let mut i = 0;

    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'"', _) => {
                pending_comma = None;
                after_value = true;
                i = string_end(bytes, i);
                continue;
            }
            (b'/', Some(b'/')) => {
                let end = bytes[i..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(bytes.len(), |offset| i + offset);
                blank(&mut out[i..end]);
                i = end;
                continue;
            }
            (b'/', Some(b'*')) => {
                let Some(offset) = find(&bytes[i + 2..], b"*/") else {
                    //Unterminated, leave it for serde_json to report
                    break;
                };
                let end = i + 2 + offset + 2;
                blank(&mut out[i..end]);
                i = end;
                continue;
            }
            (b',', _) => {
                pending_comma = after_value.then_some(i);
                after_value = false;
            }
            (b']' | b'}', _) => {
                if let Some(comma) = pending_comma.take() {
                    out[comma] = b' ';
                }
                after_value = true;
            }
            (b'[' | b'{' | b':', _) => {
                pending_comma = None;
                after_value = false;
            }
            (b, _) if b.is_ascii_whitespace() => {}
            _ => {
                pending_comma = None;
                after_value = true;
            }
        }
        i += 1;
    }

    //Only ASCII bytes were replaced (with ASCII), whole multi-byte sequences at a time
    String::from_utf8(out).unwrap_or_else(|_| text.to_owned())
}

/// Index just past the closing quote of the string starting at `start`
fn string_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn blank(bytes: &mut [u8]) {
    for b in bytes.iter_mut().filter(|b| **b != b'\n') {
        *b = b' ';
    }
}
