// WHY: Canvas that renders painted spans as ANSI-styled terminal text
// Heavier-than-base weight maps to bold, reduced alpha to dim, fill to 24-bit colour

use anyhow::Result;
use std::io::Write;

use crate::glyph::{glyphs_to_text, Glyph};
use crate::render::Canvas;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone)]
struct DrawState {
    font: String,
    alpha: f64,
    fill: String,
}

/// ANSI terminal canvas writing to any `Write`
pub struct TerminalCanvas<W: Write> {
    out: W,
    state: DrawState,
    saved: Vec<DrawState>,
    base_weight: f64,
    base_alpha: f64,
    base_fill: String,
}

impl<W: Write> TerminalCanvas<W> {
    /// `font` is the canvas's resting font, e.g. `"400 16px monospace"`
    pub fn new(out: W, font: &str) -> Self {
        let base_fill = "#000000".to_string();
        Self {
            out,
            base_weight: font_weight(font).unwrap_or(400.0),
            base_alpha: 1.0,
            state: DrawState {
                font: font.to_string(),
                alpha: 1.0,
                fill: base_fill.clone(),
            },
            saved: Vec::new(),
            base_fill,
        }
    }

    pub fn newline(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn escape_codes(&self) -> String {
        let mut codes = String::new();
        if font_weight(&self.state.font).is_some_and(|weight| weight > self.base_weight) {
            codes.push_str("\x1b[1m");
        }
        if self.state.alpha < self.base_alpha {
            codes.push_str("\x1b[2m");
        }
        if self.state.fill != self.base_fill {
            if let Some((r, g, b)) = parse_hex_color(&self.state.fill) {
                codes.push_str(&format!("\x1b[38;2;{r};{g};{b}m"));
            }
        }
        codes
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn font(&self) -> String {
        self.state.font.clone()
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn alpha(&self) -> f64 {
        self.state.alpha
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha;
    }

    fn fill_style(&self) -> String {
        self.state.fill.clone()
    }

    fn set_fill_style(&mut self, style: &str) {
        self.state.fill = style.to_string();
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn show_text(&mut self, glyphs: &[Glyph]) -> Result<()> {
        let text = glyphs_to_text(glyphs);
        let codes = self.escape_codes();
        if codes.is_empty() {
            write!(self.out, "{text}")?;
        } else {
            write!(self.out, "{codes}{text}{RESET}")?;
        }
        Ok(())
    }
}

/// First purely numeric token of a font shorthand
fn font_weight(font: &str) -> Option<f64> {
    font.split_whitespace().find_map(|token| token.parse::<f64>().ok())
}

fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
