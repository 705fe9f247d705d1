//! Whitespace helpers shared by the extraction and parsing stages.

/// Remove the longest common leading whitespace from every line.
///
/// Lines consisting solely of whitespace are ignored when computing the
/// common prefix and are normalized to empty lines in the result.
pub(crate) fn dedent(text: &str) -> String {
    let mut prefix: Option<&str> = None;
    for line in text.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        let ws = &line[..line.len() - line.trim_start().len()];
        prefix = Some(match prefix {
            None => ws,
            Some(p) => common_prefix(p, ws),
        });
    }
    let prefix = prefix.unwrap_or("");
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                &line[prefix.len()..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip exactly `n` leading columns from every line after the first.
///
/// The first line is kept verbatim to preserve an intentional blank or
/// inline opening line. Lines shorter than `n` columns become empty.
pub(crate) fn remove_indent(text: &str, n: usize) -> String {
    let mut lines = text.split('\n');
    let mut out: Vec<&str> = Vec::new();
    if let Some(first) = lines.next() {
        out.push(first);
    }
    for line in lines {
        out.push(strip_columns(line, n));
    }
    out.join("\n")
}

/// The line with its first `n` characters removed, or empty when shorter.
pub(crate) fn strip_columns(line: &str, n: usize) -> &str {
    if n == 0 {
        return line;
    }
    match line.char_indices().nth(n) {
        Some((i, _)) => &line[i..],
        None => "",
    }
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}
