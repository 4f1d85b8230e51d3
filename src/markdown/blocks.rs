//! Text rules applied between code extraction and code restoration.
//!
//! Each rule takes the output of the previous one. Rules are line oriented
//! and never recurse into markup produced by an earlier rule.

use once_cell::sync::Lazy;
use regex::Regex;

static H3_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").expect("valid h3 pattern"));
static H2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").expect("valid h2 pattern"));
static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").expect("valid h1 pattern"));

static BOLD_ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*\*(.*?)\*\*\*").expect("valid bold italic pattern"));
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid italic pattern"));

static UNORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^- (.*)$").expect("valid unordered item pattern"));
static ORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\. (.*)$").expect("valid ordered item pattern"));

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));
static BLOCKQUOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^> (.*)$").expect("valid blockquote pattern"));

/// `# `, `## ` and `### ` lines to `<h1>`..`<h3>`, longest prefix first.
pub(crate) fn headers(text: &str) -> String {
    let text = H3_RE.replace_all(text, "<h3>${1}</h3>");
    let text = H2_RE.replace_all(&text, "<h2>${1}</h2>");
    H1_RE.replace_all(&text, "<h1>${1}</h1>").into_owned()
}

/// `***x***`, then `**x**`, then `*x*`. Spans do not cross lines.
pub(crate) fn emphasis(text: &str) -> String {
    let text = BOLD_ITALIC_RE.replace_all(text, "<strong><em>${1}</em></strong>");
    let text = BOLD_RE.replace_all(&text, "<strong>${1}</strong>");
    ITALIC_RE.replace_all(&text, "<em>${1}</em>").into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

fn list_item(line: &str) -> Option<(ListKind, &str)> {
    if let Some(caps) = UNORDERED_ITEM_RE.captures(line) {
        return caps.get(1).map(|m| (ListKind::Unordered, m.as_str()));
    }
    ORDERED_ITEM_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| (ListKind::Ordered, m.as_str()))
}

/// `- x` and `N. x` lines to `<li>`, each run of one kind wrapped once.
///
/// A run ends at the first line that is not an item of the same kind, so an
/// unordered list directly followed by an ordered one yields two lists.
/// Item lines inside a run stay on their own lines.
pub(crate) fn lists(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run: Option<(ListKind, Vec<String>)> = None;

    for line in text.split('\n') {
        let Some((kind, item)) = list_item(line) else {
            if let Some(finished) = run.take() {
                out.push(wrap_run(finished));
            }
            out.push(line.to_string());
            continue;
        };

        let li = format!("<li>{}</li>", item);
        let continues = matches!(&run, Some((current, _)) if *current == kind);
        if continues {
            if let Some((_, items)) = run.as_mut() {
                items.push(li);
            }
        } else if let Some(finished) = run.replace((kind, vec![li])) {
            out.push(wrap_run(finished));
        }
    }

    if let Some(finished) = run.take() {
        out.push(wrap_run(finished));
    }

    out.join("\n")
}

fn wrap_run((kind, items): (ListKind, Vec<String>)) -> String {
    format!("<{tag}>{}</{tag}>", items.join("\n"), tag = kind.tag())
}

/// `[text](url)` to anchors.
pub(crate) fn links(text: &str) -> String {
    LINK_RE
        .replace_all(text, "<a href=\"${2}\">${1}</a>")
        .into_owned()
}

/// `> x` lines to `<blockquote>`.
pub(crate) fn blockquotes(text: &str) -> String {
    BLOCKQUOTE_RE
        .replace_all(text, "<blockquote>${1}</blockquote>")
        .into_owned()
}

/// Wraps blank-line separated blocks in `<p>` unless they already open with
/// markup. Blocks opening with a bare `<li>` are still wrapped, and so are
/// code placeholders, which are not markup yet at this stage.
pub(crate) fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(|block| {
            let trimmed = block.trim();
            if trimmed.starts_with('<') && !trimmed.starts_with("<li>") {
                block.to_string()
            } else {
                format!("<p>{}</p>", block)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
