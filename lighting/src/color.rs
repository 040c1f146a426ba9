// STD Dependencies -----------------------------------------------------------
use std::str::FromStr;


// Internal Dependencies ------------------------------------------------------
use crate::error::SceneError;


// Color Name Mapping ---------------------------------------------------------
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColorName {
    Red,
    Green,
    Blue,
    Yellow,
    Gray,
    White,
    Black,
    LightSource
}

impl ColorName {

    pub fn all() -> Vec<ColorName> {
        vec![
            ColorName::Red,
            ColorName::Green,
            ColorName::Blue,
            ColorName::Yellow,
            ColorName::Gray,
            ColorName::White,
            ColorName::Black,
            ColorName::LightSource
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Blue => "blue",
            ColorName::Yellow => "yellow",
            ColorName::Gray => "gray",
            ColorName::White => "white",
            ColorName::Black => "black",
            ColorName::LightSource => "light"
        }
    }

}

impl FromStr for ColorName {

    type Err = SceneError;

    fn from_str(name: &str) -> Result<ColorName, SceneError> {
        let lower = name.to_ascii_lowercase();
        ColorName::all().into_iter().find(|c| c.as_str() == lower).ok_or_else(|| {
            SceneError::UnknownColor(name.to_string())
        })
    }

}


// RGB Color ------------------------------------------------------------------
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Color {

    pub fn new(r: u8, g: u8, b: u8) -> Color {
        Color {
            r: r,
            g: g,
            b: b
        }
    }

    pub fn from_name(name: ColorName) -> Color {
        match name {
            ColorName::Red => Color::new(0xff, 0x64, 0x64),
            ColorName::Green => Color::new(0x64, 0xff, 0x64),
            ColorName::Blue => Color::new(0x64, 0x64, 0xff),
            ColorName::Yellow => Color::new(0xc8, 0xc8, 0x00),
            ColorName::Gray => Color::new(0x50, 0x50, 0x50),
            ColorName::White => Color::new(0xff, 0xff, 0xff),
            ColorName::Black => Color::new(0x00, 0x00, 0x00),
            ColorName::LightSource => Color::new(0xff, 0xff, 0xc8)
        }
    }

    /// Multiplies every channel by `factor`, clamping into `[0, 255]` and
    /// truncating towards zero.
    pub fn scale(&self, factor: f64) -> Color {
        Color::new(
            scale_channel(self.r, factor),
            scale_channel(self.g, factor),
            scale_channel(self.b, factor)
        )
    }

    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Color {
        Color::new(rgb[0], rgb[1], rgb[2])
    }
}

fn scale_channel(c: u8, factor: f64) -> u8 {
    let v = c as f64 * factor;
    if v.is_nan() {
        c

    } else {
        v.max(0.0).min(255.0) as u8
    }
}
