//! Visualization palettes, including the colorblind-safe variant.

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the role (e.g., "impact").
    pub name: &'static str,
    /// Hex RGB value.
    pub hex: &'static str,
}

/// Named set of color roles used by the visualization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier, also used as a CSS class suffix.
    pub id: &'static str,
    /// Color roles in legend order.
    pub tokens: &'static [ColorToken],
}

impl Palette {
    /// Hex value for a named role.
    #[must_use]
    pub fn hex(&self, name: &str) -> Option<&'static str> {
        self.tokens
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.hex)
    }
}

/// Default palette.
pub const DEFAULT: Palette = Palette {
    id: "default",
    tokens: &[
        ColorToken {
            name: "asteroid",
            hex: "#8C8C8C",
        },
        ColorToken {
            name: "trajectory",
            hex: "#1F77B4",
        },
        ColorToken {
            name: "impact",
            hex: "#D62728",
        },
        ColorToken {
            name: "blast",
            hex: "#FF7F0E",
        },
        ColorToken {
            name: "safe",
            hex: "#2CA02C",
        },
        ColorToken {
            name: "water",
            hex: "#17BECF",
        },
    ],
};

/// Okabe-Ito palette, distinguishable under the common color vision deficiencies.
pub const COLORBLIND_SAFE: Palette = Palette {
    id: "colorblind",
    tokens: &[
        ColorToken {
            name: "asteroid",
            hex: "#000000",
        },
        ColorToken {
            name: "trajectory",
            hex: "#0072B2",
        },
        ColorToken {
            name: "impact",
            hex: "#D55E00",
        },
        ColorToken {
            name: "blast",
            hex: "#E69F00",
        },
        ColorToken {
            name: "safe",
            hex: "#009E73",
        },
        ColorToken {
            name: "water",
            hex: "#56B4E9",
        },
    ],
};

/// Palette for the current colorblind preference.
#[must_use]
pub const fn palette_for(colorblind_mode: bool) -> &'static Palette {
    if colorblind_mode {
        &COLORBLIND_SAFE
    } else {
        &DEFAULT
    }
}

/// CSS class applied to the shell root.
#[must_use]
pub const fn body_class(colorblind_mode: bool) -> &'static str {
    if colorblind_mode {
        "palette-colorblind"
    } else {
        "palette-default"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_share_role_names() {
        let default: Vec<_> = DEFAULT.tokens.iter().map(|t| t.name).collect();
        let safe: Vec<_> = COLORBLIND_SAFE.tokens.iter().map(|t| t.name).collect();
        assert_eq!(default, safe);
    }

    #[test]
    fn colorblind_flag_selects_palette() {
        assert_eq!(palette_for(false).id, "default");
        assert_eq!(palette_for(true).id, "colorblind");
        assert_eq!(body_class(true), "palette-colorblind");
        assert_eq!(palette_for(true).hex("impact"), Some("#D55E00"));
        assert_eq!(palette_for(false).hex("missing"), None);
    }
}
