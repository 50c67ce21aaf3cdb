use std::sync::LazyLock;

use regex::Regex;

static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static SIMPLE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(/?)(b|strong|i|em|u)>").unwrap());
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<span\s+style="\s*color\s*:\s*([^";]+);?\s*">(.*?)</span>"#).unwrap()
});
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)<a\s[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#).unwrap());
static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<img\s[^>]*src="([^"]*)"[^>]*>"#).unwrap());
static ANY_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static NEWLINE_PAD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]*\n[ \t]*").unwrap());

/// Convert description markup to BBCode.
pub fn to_bbcode(html: &str) -> String {
    let text = BR_RE.replace_all(html, "\n");
    let text = SIMPLE_TAG_RE.replace_all(&text, |caps: &regex::Captures| {
        let tag = match caps[2].to_ascii_lowercase().as_str() {
            "strong" | "b" => "b",
            "em" | "i" => "i",
            _ => "u",
        };
        format!("[{}{}]", &caps[1], tag)
    });
    let text = COLOR_RE.replace_all(&text, "[color=$1]$2[/color]");
    let text = LINK_RE.replace_all(&text, "[url=$1]$2[/url]");
    let text = IMG_RE.replace_all(&text, "[img]$1[/img]");
    let text = ANY_TAG_RE.replace_all(&text, "");

    let text = decode_entities(&text);
    let text = SPACES_RE.replace_all(&text, " ");
    NEWLINE_PAD_RE.replace_all(&text, "\n").trim().to_string()
}

fn decode_entities(s: &str) -> String {
    // &amp; last so "&amp;lt;" stays "&lt;"
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

// ── Tests ──
