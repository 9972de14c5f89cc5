//! Mode color derivation
//!
//! Each brightness mode is a fixed role table: every semantic role names
//! the ramp step (or constant) it is sourced from. Switching modes picks a
//! different table. No lightness formula is applied anywhere.

use crate::color::{AlphaStep, Color};
use crate::error::ThemeError;
use crate::palette::{get_ramp, gray_ramp, ColorFamily, Shade};
use crate::tokens::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Brightness mode catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BrightnessMode {
    #[default]
    Light,
    Dark,
    /// True black for OLED screens
    Black,
}

impl BrightnessMode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Black => "black",
        }
    }

    pub fn all() -> &'static [BrightnessMode] {
        const MODES: [BrightnessMode; 3] = [
            BrightnessMode::Light,
            BrightnessMode::Dark,
            BrightnessMode::Black,
        ];
        &MODES
    }

    /// Whether text sits on a dark background
    pub fn is_dark(self) -> bool {
        !matches!(self, Self::Light)
    }

    /// Ramp step backing accent-colored roles in this mode
    pub fn accent_shade(self) -> Shade {
        match self {
            Self::Light => Shade::S500,
            Self::Dark => Shade::S400,
            Self::Black => Shade::S300,
        }
    }
}

impl Display for BrightnessMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BrightnessMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownMode(s.to_string()))
    }
}

impl TryFrom<String> for BrightnessMode {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BrightnessMode> for String {
    fn from(mode: BrightnessMode) -> Self {
        mode.id().to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StatusKind {
    Error,
    Warning,
    Success,
    Info,
}

/// Where a role takes its color from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Source {
    Accent(Shade),
    Gray(Shade),
    White,
    Black,
    Status(StatusKind),
    Tinted(&'static Source, AlphaStep),
}

use Source::*;

struct ModeTable {
    roles: SemanticColors<Source>,
    status: StatusColors,
}

const LIGHT: ModeTable = ModeTable {
    roles: SemanticColors {
        background: BackgroundColors {
            primary: White,
            secondary: Gray(Shade::S50),
            tertiary: Gray(Shade::S100),
            elevated: White,
            overlay: Tinted(&Black, AlphaStep::P50),
        },
        surface: SurfaceColors {
            primary: White,
            secondary: Gray(Shade::S50),
            tertiary: Gray(Shade::S100),
            elevated: White,
            overlay: Tinted(&White, AlphaStep::P95),
        },
        text: TextColors {
            primary: Gray(Shade::S900),
            secondary: Gray(Shade::S600),
            tertiary: Gray(Shade::S500),
            disabled: Gray(Shade::S400),
            inverse: White,
        },
        border: BorderColors {
            primary: Gray(Shade::S200),
            secondary: Gray(Shade::S300),
            focus: Accent(Shade::S500),
            error: Status(StatusKind::Error),
            success: Status(StatusKind::Success),
            warning: Status(StatusKind::Warning),
        },
        action: ActionColors {
            primary: Accent(Shade::S500),
            secondary: Accent(Shade::S100),
            tertiary: Gray(Shade::S100),
            hover: Accent(Shade::S600),
            pressed: Accent(Shade::S700),
            disabled: Gray(Shade::S300),
            focus: Tinted(&Accent(Shade::S500), AlphaStep::P40),
        },
        status: StatusColors {
            error: Status(StatusKind::Error),
            warning: Status(StatusKind::Warning),
            success: Status(StatusKind::Success),
            info: Status(StatusKind::Info),
        },
        shadow: ShadowColors {
            small: Tinted(&Black, AlphaStep::P5),
            medium: Tinted(&Black, AlphaStep::P10),
            large: Tinted(&Black, AlphaStep::P20),
            colored: Tinted(&Accent(Shade::S500), AlphaStep::P20),
        },
    },
    status: StatusColors {
        error: Color::from_hex(0xDC2626),
        warning: Color::from_hex(0xD97706),
        success: Color::from_hex(0x16A34A),
        info: Color::from_hex(0x2563EB),
    },
};

const DARK: ModeTable = ModeTable {
    roles: SemanticColors {
        background: BackgroundColors {
            primary: Gray(Shade::S900),
            secondary: Gray(Shade::S800),
            tertiary: Gray(Shade::S700),
            elevated: Gray(Shade::S800),
            overlay: Tinted(&Black, AlphaStep::P70),
        },
        surface: SurfaceColors {
            primary: Gray(Shade::S800),
            secondary: Gray(Shade::S700),
            tertiary: Gray(Shade::S600),
            elevated: Gray(Shade::S700),
            overlay: Tinted(&Gray(Shade::S900), AlphaStep::P95),
        },
        text: TextColors {
            primary: Gray(Shade::S50),
            secondary: Gray(Shade::S300),
            tertiary: Gray(Shade::S400),
            disabled: Gray(Shade::S500),
            inverse: Gray(Shade::S900),
        },
        border: BorderColors {
            primary: Gray(Shade::S700),
            secondary: Gray(Shade::S600),
            focus: Accent(Shade::S400),
            error: Status(StatusKind::Error),
            success: Status(StatusKind::Success),
            warning: Status(StatusKind::Warning),
        },
        action: ActionColors {
            primary: Accent(Shade::S400),
            secondary: Accent(Shade::S900),
            tertiary: Gray(Shade::S700),
            hover: Accent(Shade::S300),
            pressed: Accent(Shade::S200),
            disabled: Gray(Shade::S600),
            focus: Tinted(&Accent(Shade::S400), AlphaStep::P40),
        },
        status: StatusColors {
            error: Status(StatusKind::Error),
            warning: Status(StatusKind::Warning),
            success: Status(StatusKind::Success),
            info: Status(StatusKind::Info),
        },
        shadow: ShadowColors {
            small: Tinted(&Black, AlphaStep::P20),
            medium: Tinted(&Black, AlphaStep::P30),
            large: Tinted(&Black, AlphaStep::P40),
            colored: Tinted(&Accent(Shade::S400), AlphaStep::P30),
        },
    },
    status: StatusColors {
        error: Color::from_hex(0xF87171),
        warning: Color::from_hex(0xFBBF24),
        success: Color::from_hex(0x4ADE80),
        info: Color::from_hex(0x60A5FA),
    },
};

const BLACK: ModeTable = ModeTable {
    roles: SemanticColors {
        background: BackgroundColors {
            primary: Black,
            secondary: Gray(Shade::S950),
            tertiary: Gray(Shade::S900),
            elevated: Gray(Shade::S900),
            overlay: Tinted(&Black, AlphaStep::P80),
        },
        surface: SurfaceColors {
            primary: Gray(Shade::S950),
            secondary: Gray(Shade::S900),
            tertiary: Gray(Shade::S800),
            elevated: Gray(Shade::S900),
            overlay: Tinted(&Black, AlphaStep::P95),
        },
        text: TextColors {
            primary: White,
            secondary: Gray(Shade::S300),
            tertiary: Gray(Shade::S400),
            disabled: Gray(Shade::S600),
            inverse: Black,
        },
        border: BorderColors {
            primary: Gray(Shade::S800),
            secondary: Gray(Shade::S700),
            focus: Accent(Shade::S300),
            error: Status(StatusKind::Error),
            success: Status(StatusKind::Success),
            warning: Status(StatusKind::Warning),
        },
        action: ActionColors {
            primary: Accent(Shade::S300),
            secondary: Accent(Shade::S950),
            tertiary: Gray(Shade::S900),
            hover: Accent(Shade::S200),
            pressed: Accent(Shade::S100),
            disabled: Gray(Shade::S700),
            focus: Tinted(&Accent(Shade::S300), AlphaStep::P40),
        },
        status: StatusColors {
            error: Status(StatusKind::Error),
            warning: Status(StatusKind::Warning),
            success: Status(StatusKind::Success),
            info: Status(StatusKind::Info),
        },
        shadow: ShadowColors {
            small: Tinted(&Black, AlphaStep::P40),
            medium: Tinted(&Black, AlphaStep::P60),
            large: Tinted(&Black, AlphaStep::P80),
            colored: Tinted(&Accent(Shade::S300), AlphaStep::P30),
        },
    },
    status: StatusColors {
        error: Color::from_hex(0xFCA5A5),
        warning: Color::from_hex(0xFCD34D),
        success: Color::from_hex(0x86EFAC),
        info: Color::from_hex(0x93C5FD),
    },
};

fn table(mode: BrightnessMode) -> &'static ModeTable {
    match mode {
        BrightnessMode::Light => &LIGHT,
        BrightnessMode::Dark => &DARK,
        BrightnessMode::Black => &BLACK,
    }
}

impl ModeTable {
    fn resolve(&self, source: Source, family: ColorFamily) -> Color {
        match source {
            Accent(shade) => get_ramp(family).get(shade),
            Gray(shade) => gray_ramp().get(shade),
            White => Color::WHITE,
            Black => Color::BLACK,
            Status(kind) => match kind {
                StatusKind::Error => self.status.error,
                StatusKind::Warning => self.status.warning,
                StatusKind::Success => self.status.success,
                StatusKind::Info => self.status.info,
            },
            Tinted(base, step) => self.resolve(*base, family).with_alpha(step),
        }
    }
}

/// Derive the semantic color set of `family` under `mode`
pub fn derive(mode: BrightnessMode, family: ColorFamily) -> SemanticColors {
    let table = table(mode);
    table.roles.map(|source| table.resolve(source, family))
}

/// Status colors of a mode (independent of the accent family)
pub fn status_colors(mode: BrightnessMode) -> StatusColors {
    table(mode).status
}

/// [`derive`] from user-supplied names; unknown names are an error
pub fn derive_by_name(mode: &str, family: &str) -> Result<SemanticColors, ThemeError> {
    Ok(derive(mode.parse()?, family.parse()?))
}
