// File: crates/vna-chart-core/src/theme.rs
// Summary: Light/Dark chart palettes as renderer-agnostic RGBA values.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub foreground: Rgba,
    pub text: Rgba,
    pub sweep: Rgba,
    pub reference: Rgba,
    pub swr: Rgba,
    /// Default colors handed to markers 1, 2, 3, ...; cycled when there are more markers.
    pub markers: [Rgba; 3],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            foreground: Rgba::rgb(211, 211, 211),
            text: Rgba::rgb(0, 0, 0),
            sweep: Rgba::rgb(128, 128, 0),
            reference: Rgba::rgba(0, 0, 255, 64),
            swr: Rgba::rgba(255, 0, 0, 128),
            markers: [Rgba::rgb(255, 0, 0), Rgba::rgb(0, 255, 0), Rgba::rgb(0, 0, 128)],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            foreground: Rgba::rgb(80, 80, 90),
            text: Rgba::rgb(235, 235, 245),
            sweep: Rgba::rgb(255, 230, 70),
            reference: Rgba::rgba(64, 160, 255, 96),
            swr: Rgba::rgba(220, 80, 80, 160),
            markers: [Rgba::rgb(220, 80, 80), Rgba::rgb(40, 200, 120), Rgba::rgb(96, 156, 255)],
        }
    }

    /// Color for the marker with 1-based `ordinal`.
    pub fn marker_color(&self, ordinal: usize) -> Rgba {
        self.markers[ordinal.saturating_sub(1) % self.markers.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
