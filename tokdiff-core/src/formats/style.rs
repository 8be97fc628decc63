//! Terminal styles
//!
//! A [`Style`] is a foreground colour, a background colour and a set of attributes,
//! written out as 256-colour ANSI sequences through `crossterm`.
//!
//! Colours are either palette indices (`0..=255`) or RGB triples. RGB is mapped onto
//! the palette: greys go to the 24-step ramp at 232, everything else to the 6x6x6
//! cube at 16.

use crossterm::style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::Command;
use serde::{Deserialize, Serialize};

/// A colour from the 256-colour palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Colour {
    Ansi(u8),
    Rgb([u8; 3]),
}

impl Colour {
    /// Palette index of this colour
    pub fn ansi_index(self) -> u8 {
        match self {
            Colour::Ansi(index) => index,
            Colour::Rgb([r, g, b]) => rgb_to_ansi(r, g, b),
        }
    }
}

/// Map an RGB triple onto the 256-colour palette
pub fn rgb_to_ansi(r: u8, g: u8, b: u8) -> u8 {
    let cube = |v: u8| (f32::from(v) / 51.2) as u8;
    let (cr, cg, cb) = (cube(r), cube(g), cube(b));

    if cr == cg && cg == cb {
        let ramp = |v: u8| u16::from((f32::from(v) / 10.66) as u8);
        let level = (ramp(r) + ramp(g) + ramp(b)) / 3;
        return 232 + level as u8;
    }

    cr * 36 + cg * 6 + cb + 16
}

/// Text attribute toggled by a style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAttribute {
    Bold,
    Italic,
    Underline,
    Blink,
    Reverse,
}

impl From<TextAttribute> for Attribute {
    fn from(attribute: TextAttribute) -> Self {
        match attribute {
            TextAttribute::Bold => Attribute::Bold,
            TextAttribute::Italic => Attribute::Italic,
            TextAttribute::Underline => Attribute::Underlined,
            TextAttribute::Blink => Attribute::SlowBlink,
            TextAttribute::Reverse => Attribute::Reverse,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub foreground: Option<Colour>,
    pub background: Option<Colour>,
    pub attributes: Vec<TextAttribute>,
}

impl Style {
    pub fn fg(index: u8) -> Self {
        Style {
            foreground: Some(Colour::Ansi(index)),
            ..Style::default()
        }
    }

    pub fn with_attribute(mut self, attribute: TextAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn is_plain(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.attributes.is_empty()
    }

    /// Escape sequence that switches this style on. Empty for a plain style.
    pub fn prefix(&self) -> String {
        let mut out = String::new();
        for attribute in &self.attributes {
            write_command(&mut out, SetAttribute((*attribute).into()));
        }
        if let Some(colour) = self.foreground {
            write_command(&mut out, SetForegroundColor(Color::AnsiValue(colour.ansi_index())));
        }
        if let Some(colour) = self.background {
            write_command(&mut out, SetBackgroundColor(Color::AnsiValue(colour.ansi_index())));
        }
        out
    }

    /// Wrap `text` in this style, resetting afterwards
    pub fn paint(&self, text: &str) -> String {
        if self.is_plain() || text.is_empty() {
            return text.to_string();
        }
        let mut out = self.prefix();
        out.push_str(text);
        out.push_str(&reset());
        out
    }
}

/// Escape sequence that resets every attribute and colour
pub fn reset() -> String {
    let mut out = String::new();
    write_command(&mut out, SetAttribute(Attribute::Reset));
    out
}

fn write_command(out: &mut String, command: impl Command) {
    // Writing into a String cannot fail
    let _ = command.write_ansi(out);
}
