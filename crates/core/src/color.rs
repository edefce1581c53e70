//! Legacy `§`-style color markup used in display names and lore text.
//!
//! Config files embed `$TOKEN$` placeholders which are substituted at
//! definition-compile time; the rendered strings carry the two-byte
//! `§x` escape the host's text renderer understands.

/// Section-sign escape character prefixing every color code.
pub const SECTION: char = '§';

/// The reset escape, prepended to rendered names and lore lines so
/// inherited formatting never bleeds into equipment text.
pub const RESET: &str = "§r";

/// One of the sixteen classic colors, five styles, or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    /// `§0`
    Black,
    /// `§1`
    DarkBlue,
    /// `§2`
    DarkGreen,
    /// `§3`
    DarkAqua,
    /// `§4`
    DarkRed,
    /// `§5`
    DarkPurple,
    /// `§6`
    Gold,
    /// `§7`
    Gray,
    /// `§8`
    DarkGray,
    /// `§9`
    Blue,
    /// `§a`
    Green,
    /// `§b`
    Aqua,
    /// `§c`
    Red,
    /// `§d`
    LightPurple,
    /// `§e`
    Yellow,
    /// `§f`
    White,
    /// `§k`, scrambled text
    Magic,
    /// `§l`
    Bold,
    /// `§m`
    Strikethrough,
    /// `§n`
    Underline,
    /// `§o`
    Italic,
    /// `§r`
    Reset,
}

impl ColorCode {
    /// Parse a `$TOKEN$` name (e.g. "DARK_RED"). Case-insensitive.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "BLACK" => Some(ColorCode::Black),
            "DARK_BLUE" => Some(ColorCode::DarkBlue),
            "DARK_GREEN" => Some(ColorCode::DarkGreen),
            "DARK_AQUA" => Some(ColorCode::DarkAqua),
            "DARK_RED" => Some(ColorCode::DarkRed),
            "DARK_PURPLE" => Some(ColorCode::DarkPurple),
            "GOLD" => Some(ColorCode::Gold),
            "GRAY" => Some(ColorCode::Gray),
            "DARK_GRAY" => Some(ColorCode::DarkGray),
            "BLUE" => Some(ColorCode::Blue),
            "GREEN" => Some(ColorCode::Green),
            "AQUA" => Some(ColorCode::Aqua),
            "RED" => Some(ColorCode::Red),
            "LIGHT_PURPLE" => Some(ColorCode::LightPurple),
            "YELLOW" => Some(ColorCode::Yellow),
            "WHITE" => Some(ColorCode::White),
            "MAGIC" => Some(ColorCode::Magic),
            "BOLD" => Some(ColorCode::Bold),
            "STRIKETHROUGH" => Some(ColorCode::Strikethrough),
            "UNDERLINE" => Some(ColorCode::Underline),
            "ITALIC" => Some(ColorCode::Italic),
            "RESET" => Some(ColorCode::Reset),
            _ => None,
        }
    }

    /// The single character following `§` in the escape.
    pub fn code(self) -> char {
        match self {
            ColorCode::Black => '0',
            ColorCode::DarkBlue => '1',
            ColorCode::DarkGreen => '2',
            ColorCode::DarkAqua => '3',
            ColorCode::DarkRed => '4',
            ColorCode::DarkPurple => '5',
            ColorCode::Gold => '6',
            ColorCode::Gray => '7',
            ColorCode::DarkGray => '8',
            ColorCode::Blue => '9',
            ColorCode::Green => 'a',
            ColorCode::Aqua => 'b',
            ColorCode::Red => 'c',
            ColorCode::LightPurple => 'd',
            ColorCode::Yellow => 'e',
            ColorCode::White => 'f',
            ColorCode::Magic => 'k',
            ColorCode::Bold => 'l',
            ColorCode::Strikethrough => 'm',
            ColorCode::Underline => 'n',
            ColorCode::Italic => 'o',
            ColorCode::Reset => 'r',
        }
    }
}

impl std::fmt::Display for ColorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{SECTION}{}", self.code())
    }
}

/// Substitute every `$TOKEN$` placeholder with its escape sequence,
/// repeatedly until none remain. Multiple tokens per string are fine;
/// an unrecognised token name is returned as the error.
pub fn resolve_color_tokens(input: &str) -> Result<String, String> {
    let mut out = input.to_string();
    while let Some((start, end, token)) = find_token(&out) {
        let color = ColorCode::parse(&token).ok_or(token)?;
        out.replace_range(start..=end, &color.to_string());
    }
    Ok(out)
}

// Locate the first `$WORD$` span where WORD is letters/underscores only.
// Returns byte offsets of both delimiters plus the token between them.
fn find_token(s: &str) -> Option<(usize, usize, String)> {
    let mut start = None;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'$' => {
                if let Some(open) = start {
                    return Some((open, i, s[open + 1..i].to_string()));
                }
                start = Some(i);
            }
            b'A'..=b'Z' | b'a'..=b'z' | b'_' => {}
            _ => start = None,
        }
    }
    None
}

/// Remove every `§x` escape pair from a string.
pub fn strip_color(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == SECTION {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}
