use std::path::Path;

use crossterm::style::Color;

/// Per-byte color classification of a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Normal,
    Comment,
    MultilineComment,
    Keyword,
    Type,
    String,
    Number,
    Match,
}

impl Highlight {
    pub fn color(self) -> Color {
        match self {
            Highlight::Comment | Highlight::MultilineComment => Color::DarkCyan,
            Highlight::Keyword => Color::DarkYellow,
            Highlight::Type => Color::DarkGreen,
            Highlight::String => Color::DarkMagenta,
            Highlight::Number => Color::DarkRed,
            Highlight::Match => Color::DarkBlue,
            Highlight::Normal => Color::Reset,
        }
    }
}

/// Highlighting rules for one language, selected by file extension.
///
/// A trailing `|` on a keyword marks it as a type keyword, which gets its
/// own color class.
#[derive(Debug)]
pub struct SyntaxProfile {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub singleline_comment_start: Option<&'static str>,
    pub multiline_comment: Option<(&'static str, &'static str)>,
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
}

pub static PROFILES: &[SyntaxProfile] = &[SyntaxProfile {
    name: "c",
    extensions: &["c", "h", "cpp"],
    keywords: &[
        "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
        "typedef", "static", "enum", "class", "case", "int|", "long|", "double|", "float|",
        "char|", "unsigned|", "signed|", "void|",
    ],
    singleline_comment_start: Some("//"),
    multiline_comment: Some(("/*", "*/")),
    highlight_numbers: true,
    highlight_strings: true,
}];

pub fn profile_for_path(path: &Path) -> Option<&'static SyntaxProfile> {
    let extension = path.extension()?.to_str()?;
    PROFILES
        .iter()
        .find(|profile| profile.extensions.contains(&extension))
}

fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || b",.()+-/*=~%<>[];".contains(&byte)
}

/// Scans one rendered row and produces a tag per byte plus whether the row
/// ends inside an unterminated multi-line comment.
///
/// The scan is seeded with the previous row's exit state; the caller is
/// responsible for propagating a changed exit state to the next row.
pub fn scan_row(
    render: &str,
    starts_in_comment: bool,
    profile: Option<&SyntaxProfile>,
) -> (Vec<Highlight>, bool) {
    let bytes = render.as_bytes();
    let mut tags = vec![Highlight::Normal; bytes.len()];
    let Some(profile) = profile else {
        return (tags, false);
    };

    let singleline = profile.singleline_comment_start.map(str::as_bytes);
    let multiline = profile
        .multiline_comment
        .map(|(start, end)| (start.as_bytes(), end.as_bytes()));

    let mut prev_separator = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = starts_in_comment;

    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        let prev_tag = if i > 0 { tags[i - 1] } else { Highlight::Normal };

        if let Some(marker) = singleline
            && in_string.is_none()
            && !in_comment
            && bytes[i..].starts_with(marker)
        {
            tags[i..].fill(Highlight::Comment);
            break;
        }

        if let Some((start, end)) = multiline
            && in_string.is_none()
        {
            if in_comment {
                tags[i] = Highlight::MultilineComment;
                if bytes[i..].starts_with(end) {
                    tags[i..i + end.len()].fill(Highlight::MultilineComment);
                    i += end.len();
                    in_comment = false;
                    prev_separator = true;
                } else {
                    i += 1;
                }
                continue;
            } else if bytes[i..].starts_with(start) {
                tags[i..i + start.len()].fill(Highlight::MultilineComment);
                i += start.len();
                in_comment = true;
                continue;
            }
        }

        if profile.highlight_strings {
            if let Some(quote) = in_string {
                tags[i] = Highlight::String;
                // A backslash consumes the next byte; no escape interpretation.
                if byte == b'\\' && i + 1 < bytes.len() {
                    tags[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if byte == quote {
                    in_string = None;
                }
                i += 1;
                prev_separator = true;
                continue;
            } else if byte == b'"' || byte == b'\'' {
                in_string = Some(byte);
                tags[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if profile.highlight_numbers
            && ((byte.is_ascii_digit() && (prev_separator || prev_tag == Highlight::Number))
                || (byte == b'.' && prev_tag == Highlight::Number))
        {
            tags[i] = Highlight::Number;
            i += 1;
            prev_separator = false;
            continue;
        }

        if prev_separator {
            let mut matched = false;
            for keyword in profile.keywords {
                let (word, tag) = match keyword.strip_suffix('|') {
                    Some(word) => (word.as_bytes(), Highlight::Type),
                    None => (keyword.as_bytes(), Highlight::Keyword),
                };
                // A keyword only counts when followed by a separator or the
                // end of the row, so `intx` never matches `int`.
                let after = i + word.len();
                if bytes[i..].starts_with(word)
                    && bytes.get(after).is_none_or(|byte| is_separator(*byte))
                {
                    tags[i..after].fill(tag);
                    i = after;
                    matched = true;
                    break;
                }
            }
            if matched {
                prev_separator = false;
                continue;
            }
        }

        prev_separator = is_separator(byte);
        i += 1;
    }

    (tags, in_comment)
}
