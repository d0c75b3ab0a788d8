use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A colour as it appears in inline CSS.
///
/// Alpha is carried for `Oklch` but never emitted: [`Color::to_css`] always
/// produces an opaque `#RRGGBB` value.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    /// A CSS custom property, emitted as `var(--name)`.
    Var(String),
    Transparent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase six digit hex with a leading `#`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Color {
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => oklch_to_rgb(*l, *c, *h),
            Self::Var(_) | Self::Transparent => Rgb::default(),
        }
    }

    /// CSS value for inline styles.
    pub fn to_css(&self) -> String {
        match self {
            Self::Rgb { .. } | Self::Oklch { .. } => self.to_rgb().to_hex(),
            Self::Var(name) => {
                let name = name.trim_start_matches("--");
                format!("var(--{name})")
            }
            Self::Transparent => "transparent".to_string(),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Rgb { r, g, b } => (r, g, b).hash(state),
            Self::Oklch { l, c, h, a } => {
                for v in [l, c, h, a] {
                    v.to_bits().hash(state);
                }
            }
            Self::Var(name) => name.hash(state),
            Self::Transparent => {}
        }
    }
}

/// Error returned when a CSS colour string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour: {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rgb`, `#rrggbb`, `oklch(l c h)`, `transparent`,
    /// `var(--name)` and a few named colours.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseColorError(s.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            let digits: Vec<u8> = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| d as u8))
                .collect::<Option<_>>()
                .ok_or_else(err)?;
            return match digits.as_slice() {
                [r, g, b] => Ok(Self::rgb(r * 17, g * 17, b * 17)),
                [r1, r2, g1, g2, b1, b2] => {
                    Ok(Self::rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2))
                }
                _ => Err(err()),
            };
        }

        if let Some(inner) = trimmed
            .strip_prefix("var(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let name = inner.trim();
            if !name.starts_with("--") || name.len() <= 2 {
                return Err(err());
            }
            return Ok(Self::var(name));
        }

        if let Some(inner) = trimmed
            .strip_prefix("oklch(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_oklch(inner).ok_or_else(err);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "transparent" => Ok(Self::Transparent),
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "red" => Ok(Self::rgb(255, 0, 0)),
            "green" => Ok(Self::rgb(0, 128, 0)),
            "blue" => Ok(Self::rgb(0, 0, 255)),
            "gray" | "grey" => Ok(Self::rgb(128, 128, 128)),
            _ => Err(err()),
        }
    }
}

/// `L C H` or `L C H / A`, where `L` and `A` may be percentages.
fn parse_oklch(inner: &str) -> Option<Color> {
    let (channels, alpha) = match inner.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (inner, None),
    };
    let parts: Vec<&str> = channels.split_whitespace().collect();
    let [l, c, h] = parts.as_slice() else {
        return None;
    };

    let unit = |v: &str| match v.strip_suffix('%') {
        Some(pct) => pct.parse::<f32>().ok().map(|p| p / 100.0),
        None => v.parse::<f32>().ok(),
    };
    let a = match alpha {
        Some(a) => unit(a)?,
        None => 1.0,
    };
    Some(Color::oklcha(unit(l)?, c.parse().ok()?, h.parse().ok()?, a))
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_css_is_uppercase_hex() {
        assert_eq!(Color::rgb(0x1a, 0x2b, 0x3c).to_css(), "#1A2B3C");
        assert_eq!(Color::BLACK.to_css(), "#000000");
    }

    #[test]
    fn test_oklch_white_converts_to_white() {
        assert_eq!(Color::oklch(1.0, 0.0, 0.0).to_css(), "#FFFFFF");
    }

    #[test]
    fn test_var_is_prefixed_once() {
        assert_eq!(Color::var("primary").to_css(), "var(--primary)");
        assert_eq!(Color::var("--primary").to_css(), "var(--primary)");
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("#fff".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!("#FF8000".parse::<Color>(), Ok(Color::rgb(255, 128, 0)));
        assert!("#12".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn test_parse_oklch() {
        assert_eq!("oklch(1 0 0)".parse::<Color>(), Ok(Color::oklch(1.0, 0.0, 0.0)));
        assert_eq!(
            "oklch(70% 0.1 250 / 50%)".parse::<Color>(),
            Ok(Color::oklcha(0.7, 0.1, 250.0, 0.5))
        );
        assert_eq!("oklch(100% 0 0)".parse::<Color>().map(|c| c.to_css()), Ok("#FFFFFF".to_string()));
        assert!("oklch(1 0)".parse::<Color>().is_err());
        assert!("oklch(a b c)".parse::<Color>().is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("Transparent".parse::<Color>(), Ok(Color::Transparent));
        assert_eq!("var(--accent)".parse::<Color>(), Ok(Color::var("--accent")));
        assert!("var(accent)".parse::<Color>().is_err());
        assert!("mauve".parse::<Color>().is_err());
    }
}
