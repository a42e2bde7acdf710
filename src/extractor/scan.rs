//! Shared scanning primitives for the block parsers.
//!
//! Every parser walks the response line by line (or fence by fence) in a
//! single forward pass. No regex is used, so adversarial model output cannot
//! trigger backtracking blowups.

const FENCE: &str = "```";

/// One line of input with its byte offset in the original text.
///
/// `text` excludes the line terminator (`\n` or `\r\n`); `end` is the offset
/// just past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

/// Iterate lines together with their starting byte offsets.
///
/// # Examples
///
/// ```
/// use response_extract::extractor::scan::lines_with_offsets;
///
/// let lines: Vec<_> = lines_with_offsets("a\r\nbc\n").collect();
/// assert_eq!(lines[1].start, 3);
/// assert_eq!(lines[1].text, "bc");
/// ```
pub fn lines_with_offsets(text: &str) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;
    text.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        let body = raw.strip_suffix('\n').unwrap_or(raw);
        let body = body.strip_suffix('\r').unwrap_or(body);
        Line {
            start,
            end: offset,
            text: body,
        }
    })
}

/// A located fenced block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence<'a> {
    /// Byte offset of the opening backticks.
    pub open: usize,
    /// Raw body between the tag and the closing backticks (untrimmed).
    pub body: &'a str,
}

/// Find the first fenced block opened by `` ``` `` immediately followed by `tag`.
///
/// The first closing `` ``` `` after the tag ends the block. The tag must not
/// run on into further identifier characters, so `chart` does not match a
/// `chart_json` fence. Returns `None` for an empty tag or an unclosed fence.
///
/// # Examples
///
/// ```
/// use response_extract::extractor::scan::find_fence;
///
/// let input = "Here:\n```chart_json\n{\"a\": 1}\n```";
/// let fence = find_fence(input, "chart_json").unwrap();
/// assert_eq!(fence.open, 6);
/// assert_eq!(fence.body.trim(), "{\"a\": 1}");
/// ```
pub fn find_fence<'a>(text: &'a str, tag: &str) -> Option<Fence<'a>> {
    if tag.is_empty() {
        return None;
    }

    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find(FENCE) {
        let open = search_from + offset;
        let after_backticks = open + FENCE.len();
        let rest = &text[after_backticks..];

        if rest.starts_with(tag) && !continues_identifier(&rest[tag.len()..]) {
            let body_start = after_backticks + tag.len();
            // Any later opening would also lack a close, so stop here.
            let close = text[body_start..].find(FENCE)?;
            return Some(Fence {
                open,
                body: &text[body_start..body_start + close],
            });
        }

        search_from = after_backticks;
    }
    None
}

fn continues_identifier(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '-')
}
