/// Icon font registered with the view layer.
pub const DEFAULT_ICON_SET: &str = "mdi";

/// Named colors handed to the component library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub surface: &'static str,
    pub background: &'static str,
    pub on_surface: &'static str,
    pub on_background: &'static str,
}

impl ThemePalette {
    pub const LIGHT: Self = Self {
        primary: "#2d333a",
        secondary: "#6b7280",
        surface: "#ffffff",
        background: "#ffffff",
        on_surface: "#2d333a",
        on_background: "#2d333a",
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellTheme {
    pub name: &'static str,
    pub palette: ThemePalette,
    pub icon_set: &'static str,
}

impl Default for ShellTheme {
    fn default() -> Self {
        Self {
            name: "light",
            palette: ThemePalette::LIGHT,
            icon_set: DEFAULT_ICON_SET,
        }
    }
}

impl ShellTheme {
    /// Palette as `(role, color)` pairs, in the order the view layer registers them.
    pub fn colors(&self) -> [(&'static str, &'static str); 6] {
        let palette = self.palette;
        [
            ("primary", palette.primary),
            ("secondary", palette.secondary),
            ("surface", palette.surface),
            ("background", palette.background),
            ("on-surface", palette.on_surface),
            ("on-background", palette.on_background),
        ]
    }
}
