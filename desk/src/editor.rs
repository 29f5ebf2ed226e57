//! Rich-text document model behind the console's content editor.
//!
//! DESIGN
//! ======
//! The live editing surface is a `contenteditable` element owned by the
//! browser. This model is the per-session source of truth for the markup that
//! gets saved: `load` seeds it, `sync` pushes the DOM's markup back after the
//! user types, and `serialize` produces the payload. `load` followed by
//! `serialize` is byte-for-byte, so inline base64 images survive untouched.
//!
//! Toolbar actions go through [`EditorDocument::execute`], which validates the
//! command and tells the host what to do to the DOM:
//! - inline formatting becomes a browser editing command ([`DomAction::Exec`])
//! - font sizes wrap the selection in a styled span ([`DomAction::StyleSelection`])
//! - tables and images become an HTML fragment ([`DomAction::InsertHtml`])
//! - whole-content changes update the model first ([`DomAction::Replace`])

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::notify::ErrorCode;

/// Selectable font sizes in pixels.
pub const FONT_SIZES: [u32; 8] = [12, 14, 16, 18, 20, 24, 28, 32];

/// Font size a fresh document renders with.
pub const DEFAULT_FONT_SIZE: u32 = 14;

/// Named text colors offered in the toolbar.
pub const PALETTE: [(&str, &str); 5] = [
    ("기본", "#000000"),
    ("빨강", "#ff0000"),
    ("파랑", "#0000ff"),
    ("녹색", "#008000"),
    ("보라", "#800080"),
];

/// Largest row or column count of an inserted table.
pub const MAX_TABLE_DIM: u32 = 20;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("지원하지 않는 글자 크기입니다: {0}px")]
    UnsupportedFontSize(u32),
    #[error("잘못된 색상입니다: {0}")]
    InvalidColor(String),
    #[error("표 크기는 1~{MAX_TABLE_DIM} 사이여야 합니다: {rows}행 × {cols}열")]
    TableSize { rows: u32, cols: u32 },
    #[error("이미지 데이터가 아닙니다")]
    NotAnImage,
}

impl ErrorCode for EditorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFontSize(_) => "E_FONT_SIZE",
            Self::InvalidColor(_) => "E_COLOR",
            Self::TableSize { .. } => "E_TABLE_SIZE",
            Self::NotAnImage => "E_NOT_IMAGE",
        }
    }
}

impl From<EditorError> for crate::notify::Failure {
    fn from(err: EditorError) -> Self {
        Self::Invalid(err.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    pub const ALL: [Self; 4] = [Self::Left, Self::Center, Self::Right, Self::Justify];

    fn exec_command(self) -> &'static str {
        match self {
            Self::Left => "justifyLeft",
            Self::Center => "justifyCenter",
            Self::Right => "justifyRight",
            Self::Justify => "justifyFull",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "왼쪽 정렬",
            Self::Center => "가운데 정렬",
            Self::Right => "오른쪽 정렬",
            Self::Justify => "양쪽 정렬",
        }
    }
}

/// A toolbar or programmatic edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    Bold,
    Italic,
    Underline,
    Align(Align),
    /// A palette value or any `#rrggbb`.
    Color(String),
    /// Pixel size from [`FONT_SIZES`].
    FontSize(u32),
    InsertTable { rows: u32, cols: u32, header_row: bool },
    /// A `data:image/...` URL, usually from [`image_data_url`].
    InsertImage(String),
    /// Replace the whole document with a template's markup.
    ApplyTemplate(String),
    Clear,
}

/// What the host must do to the live editing surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomAction {
    /// Run `document.execCommand(command, false, value)`.
    Exec { command: &'static str, value: Option<String> },
    /// Wrap the current selection in a span with one inline style.
    StyleSelection { property: &'static str, value: String },
    /// Insert markup at the caret.
    InsertHtml(String),
    /// Replace the surface's markup. The model already holds it.
    Replace(String),
}

/// Markup of one editing session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorDocument {
    markup: String,
}

impl EditorDocument {
    /// Document holding `markup` exactly.
    #[must_use]
    pub fn load(markup: impl Into<String>) -> Self {
        Self { markup: markup.into() }
    }

    /// Markup to persist.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.markup.clone()
    }

    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Record the surface's markup after a DOM-side edit.
    pub fn sync(&mut self, markup: impl Into<String>) {
        self.markup = markup.into();
    }

    /// Validate `command` and translate it into a DOM action.
    ///
    /// # Errors
    ///
    /// The command carries an out-of-range size, a malformed color, or image
    /// data that is not an inline image URL. The document is unchanged.
    pub fn execute(&mut self, command: EditorCommand) -> Result<DomAction, EditorError> {
        let action = match command {
            EditorCommand::Bold => exec("bold", None),
            EditorCommand::Italic => exec("italic", None),
            EditorCommand::Underline => exec("underline", None),
            EditorCommand::Align(align) => exec(align.exec_command(), None),
            EditorCommand::Color(color) => exec("foreColor", Some(normalize_color(&color)?)),
            EditorCommand::FontSize(px) => {
                if !FONT_SIZES.contains(&px) {
                    return Err(EditorError::UnsupportedFontSize(px));
                }
                DomAction::StyleSelection { property: "font-size", value: format!("{px}px") }
            }
            EditorCommand::InsertTable { rows, cols, header_row } => {
                DomAction::InsertHtml(table_html(rows, cols, header_row)?)
            }
            EditorCommand::InsertImage(url) => DomAction::InsertHtml(image_html(&url)?),
            EditorCommand::ApplyTemplate(markup) => {
                self.markup = markup;
                DomAction::Replace(self.markup.clone())
            }
            EditorCommand::Clear => {
                self.markup.clear();
                DomAction::Replace(String::new())
            }
        };
        Ok(action)
    }

    /// True when the markup has no visible text and no image or table.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        let mut text = String::new();
        let mut tag = String::new();
        let mut in_tag = false;
        for ch in self.markup.chars() {
            match (in_tag, ch) {
                (false, '<') => {
                    in_tag = true;
                    tag.clear();
                }
                (true, '>') => {
                    in_tag = false;
                    if is_embed_tag(&tag) {
                        return false;
                    }
                }
                (true, c) => tag.push(c),
                (false, c) => text.push(c),
            }
        }
        text.replace("&nbsp;", " ").trim().is_empty()
    }
}

fn exec(command: &'static str, value: Option<String>) -> DomAction {
    DomAction::Exec { command, value }
}

fn is_embed_tag(tag: &str) -> bool {
    let name = tag
        .trim_start()
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default();
    name.eq_ignore_ascii_case("img") || name.eq_ignore_ascii_case("table")
}

/// Lowercased `#rrggbb`, from a palette label or a hex value.
fn normalize_color(raw: &str) -> Result<String, EditorError> {
    let raw = raw.trim();
    if let Some((_, hex)) = PALETTE.iter().find(|(label, _)| *label == raw) {
        return Ok((*hex).to_owned());
    }
    let valid = raw.len() == 7
        && raw.starts_with('#')
        && raw[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(raw.to_ascii_lowercase())
    } else {
        Err(EditorError::InvalidColor(raw.to_owned()))
    }
}

fn table_html(rows: u32, cols: u32, header_row: bool) -> Result<String, EditorError> {
    let in_range = |n: u32| (1..=MAX_TABLE_DIM).contains(&n);
    if !in_range(rows) || !in_range(cols) {
        return Err(EditorError::TableSize { rows, cols });
    }
    let mut html = String::from("<table><tbody>");
    for row in 0..rows {
        let cell = if header_row && row == 0 { "th" } else { "td" };
        html.push_str("<tr>");
        for _ in 0..cols {
            html.push_str(&format!("<{cell}><br></{cell}>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table><p><br></p>");
    Ok(html)
}

fn image_html(url: &str) -> Result<String, EditorError> {
    if !url.starts_with("data:image/") {
        return Err(EditorError::NotAnImage);
    }
    let escaped = url.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;");
    Ok(format!("<img src=\"{escaped}\">"))
}

/// Inline `data:` URL for an image file's bytes.
///
/// # Errors
///
/// `mime` is not an `image/*` type.
pub fn image_data_url(mime: &str, bytes: &[u8]) -> Result<String, EditorError> {
    let mime = mime.trim();
    if !mime.starts_with("image/") {
        return Err(EditorError::NotAnImage);
    }
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}
