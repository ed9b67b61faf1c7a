use anyhow::{anyhow, Result};

/// WCAG AA minimum contrast ratio for normal text.
pub const WCAG_AA_NORMAL: f64 = 4.5;

/// Display configuration. Threaded explicitly into whatever renders the
/// graph; nothing reads it from ambient global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Bucket colors plus the page colors the heatmap sits on. The five bucket
/// entries map levels 0..=4 in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub buckets: [&'static str; 5],
    pub background: &'static str,
    pub text: &'static str,
}

const LIGHT: Palette = Palette {
    buckets: ["#ebedf0", "#9be9a8", "#40c463", "#30a14e", "#216e39"],
    background: "#ffffff",
    text: "#111827",
};

const DARK: Palette = Palette {
    buckets: ["#161b22", "#0e4429", "#006d32", "#26a641", "#39d353"],
    background: "#0d1117",
    text: "#e6edf3",
};

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Parse a `#rrggbb` color.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    let h = hex.trim_start_matches('#');
    if h.len() != 6 {
        return Err(anyhow!("Expected a #rrggbb color, got '{}'", hex));
    }
    let r = u8::from_str_radix(&h[0..2], 16)?;
    let g = u8::from_str_radix(&h[2..4], 16)?;
    let b = u8::from_str_radix(&h[4..6], 16)?;
    Ok((r, g, b))
}

fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

pub fn relative_luminance(hex: &str) -> Result<f64> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Ok(0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b))
}

/// WCAG contrast ratio between two colors, in 1.0..=21.0.
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    Ok((la.max(lb) + 0.05) / (la.min(lb) + 0.05))
}
