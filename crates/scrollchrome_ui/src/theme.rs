//! Scrollbar themes.
//!
//! A [`ThemeMetrics`] is a bundle of per-visual-state colors, icons, margins
//! and visibility flags. Drawables turn it into primitives once, when the
//! theme is selected, and reuse those until the next theme change.
//!
//! Built-in themes are created lazily on first access and cached for the
//! lifetime of the process. Each of them can be replaced wholesale.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::{DEFAULT_ARROW_MARGIN, DEFAULT_THUMB_MARGIN};
use crate::drawable::{InteriorDrawable, ScrollBarDrawable};
use crate::error::ThemeError;
use crate::icon::{ArrowDirection, SvgIcon};
use crate::visual_state::{StateArray, VisualState};

/// States that get their own primitives when a theme is applied. Other
/// states fall back to `Normal`.
pub const THEMED_STATES: [VisualState; 3] =
    [VisualState::Normal, VisualState::Hovered, VisualState::Disabled];

/// States whose metric tables are initialized with default values.
pub const INITIALIZED_STATES: [VisualState; 4] = [
    VisualState::Normal,
    VisualState::Hovered,
    VisualState::Disabled,
    VisualState::Pressed,
];

// =============================================================================
// Known themes
// =============================================================================

/// Named built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KnownTheme {
    /// Whatever [`system_theme`] currently is.
    #[default]
    System,
    VisualStudioAuto,
    VisualStudioLight,
    VisualStudioDark,
    WindowsAuto,
    WindowsDark,
    WindowsLight,
    MauiAuto,
    MauiLight,
    MauiDark,
}

impl KnownTheme {
    pub const ALL: [KnownTheme; 10] = [
        KnownTheme::System,
        KnownTheme::VisualStudioAuto,
        KnownTheme::VisualStudioLight,
        KnownTheme::VisualStudioDark,
        KnownTheme::WindowsAuto,
        KnownTheme::WindowsDark,
        KnownTheme::WindowsLight,
        KnownTheme::MauiAuto,
        KnownTheme::MauiLight,
        KnownTheme::MauiDark,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KnownTheme::System => "System",
            KnownTheme::VisualStudioAuto => "VisualStudioAuto",
            KnownTheme::VisualStudioLight => "VisualStudioLight",
            KnownTheme::VisualStudioDark => "VisualStudioDark",
            KnownTheme::WindowsAuto => "WindowsAuto",
            KnownTheme::WindowsDark => "WindowsDark",
            KnownTheme::WindowsLight => "WindowsLight",
            KnownTheme::MauiAuto => "MauiAuto",
            KnownTheme::MauiLight => "MauiLight",
            KnownTheme::MauiDark => "MauiDark",
        }
    }

    /// The concrete (non-auto, non-system) theme this resolves to.
    pub fn resolve(self, is_dark: bool) -> KnownTheme {
        let pick = |dark, light| if is_dark { dark } else { light };
        match self {
            KnownTheme::System => match system_theme() {
                // set_system_theme never stores System
                KnownTheme::System => KnownTheme::WindowsAuto.resolve(is_dark),
                other => other.resolve(is_dark),
            },
            KnownTheme::VisualStudioAuto => {
                pick(KnownTheme::VisualStudioDark, KnownTheme::VisualStudioLight)
            }
            KnownTheme::WindowsAuto => pick(KnownTheme::WindowsDark, KnownTheme::WindowsLight),
            KnownTheme::MauiAuto => pick(KnownTheme::MauiDark, KnownTheme::MauiLight),
            concrete => concrete,
        }
    }

    pub fn is_concrete(self) -> bool {
        !matches!(
            self,
            KnownTheme::System
                | KnownTheme::VisualStudioAuto
                | KnownTheme::WindowsAuto
                | KnownTheme::MauiAuto
        )
    }
}

impl fmt::Display for KnownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KnownTheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        KnownTheme::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

static SYSTEM_THEME: RwLock<KnownTheme> = RwLock::new(KnownTheme::WindowsAuto);

/// The theme [`KnownTheme::System`] resolves to.
pub fn system_theme() -> KnownTheme {
    *SYSTEM_THEME.read().unwrap_or_else(PoisonError::into_inner)
}

/// Change the theme [`KnownTheme::System`] resolves to. Assigning `System`
/// itself is ignored.
pub fn set_system_theme(theme: KnownTheme) {
    if theme == KnownTheme::System {
        log::warn!("Ignoring attempt to set the system theme to System");
        return;
    }
    *SYSTEM_THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
    log::debug!("System scrollbar theme set to {}", theme);
}

// =============================================================================
// Theme initialize hook
// =============================================================================

/// Arguments passed to a [`ThemeInitializeHook`]. Exactly one of
/// `interior` and `scrollbar` is set.
pub struct ThemeInitializeArgs<'a> {
    /// The theme that was just applied.
    pub metrics: &'a ThemeMetrics,
    /// The interior whose primitives were just built.
    pub interior: Option<&'a mut InteriorDrawable>,
    /// A scrollbar themed on its own.
    pub scrollbar: Option<&'a mut ScrollBarDrawable>,
}

/// Callback fired after a theme populated an interior or a standalone
/// scrollbar, before first use.
#[derive(Clone)]
pub struct ThemeInitializeHook(Arc<dyn Fn(&mut ThemeInitializeArgs<'_>) + Send + Sync>);

impl ThemeInitializeHook {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut ThemeInitializeArgs<'_>) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, args: &mut ThemeInitializeArgs<'_>) {
        (self.0)(args)
    }
}

impl fmt::Debug for ThemeInitializeHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ThemeInitializeHook")
    }
}

// =============================================================================
// Theme metrics
// =============================================================================

/// Colors, icons, margins and flags of a scrollbar theme, per visual state.
///
/// Absent colors mean "do not draw" for that state.
#[derive(Debug, Clone)]
pub struct ThemeMetrics {
    pub up_arrow: StateArray<Option<SvgIcon>>,
    pub down_arrow: StateArray<Option<SvgIcon>>,
    pub left_arrow: StateArray<Option<SvgIcon>>,
    pub right_arrow: StateArray<Option<SvgIcon>>,

    pub corner_background: StateArray<Option<Color>>,
    pub background: StateArray<Option<Color>>,
    pub arrow: StateArray<Option<Color>>,
    pub thumb_background: StateArray<Option<Color>>,
    pub thumb_border: StateArray<Option<Color>>,

    pub arrow_margin: StateArray<f32>,
    pub thumb_margin: StateArray<f32>,
    pub use_arrow_size_for_thumb: StateArray<bool>,
    pub arrows_visible: StateArray<bool>,
    pub thumb_visible: StateArray<bool>,
    pub buttons_visible: StateArray<bool>,

    /// Fired by [`InteriorDrawable::set_theme_metrics`] and
    /// [`ScrollBarDrawable::set_theme_metrics`] after population.
    pub on_initialize: Option<ThemeInitializeHook>,
}

impl Default for ThemeMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeMetrics {
    /// Theme without colors: default icons, margins and flags only.
    pub fn new() -> Self {
        let states = &INITIALIZED_STATES;
        let icons = |direction: ArrowDirection| {
            let mut table = StateArray::default();
            table.set_states(states, Some(direction.default_icon()));
            table
        };
        let values = |value| {
            let mut table = StateArray::default();
            table.set_states(states, value);
            table
        };
        let flags = || {
            let mut table = StateArray::default();
            table.set_states(states, true);
            table
        };

        Self {
            up_arrow: icons(ArrowDirection::Up),
            down_arrow: icons(ArrowDirection::Down),
            left_arrow: icons(ArrowDirection::Left),
            right_arrow: icons(ArrowDirection::Right),
            corner_background: StateArray::default(),
            background: StateArray::default(),
            arrow: StateArray::default(),
            thumb_background: StateArray::default(),
            thumb_border: StateArray::default(),
            arrow_margin: values(DEFAULT_ARROW_MARGIN),
            thumb_margin: values(DEFAULT_THUMB_MARGIN),
            use_arrow_size_for_thumb: flags(),
            arrows_visible: flags(),
            thumb_visible: flags(),
            buttons_visible: flags(),
            on_initialize: None,
        }
    }

    /// Set a hook fired after the theme populated an interior or scrollbar.
    pub fn with_initialize_hook(mut self, hook: ThemeInitializeHook) -> Self {
        self.on_initialize = Some(hook);
        self
    }

    /// Fire the initialize hook, if any, for an interior.
    pub fn raise_initialize(&self, interior: &mut InteriorDrawable) {
        if let Some(hook) = &self.on_initialize {
            hook.call(&mut ThemeInitializeArgs {
                metrics: self,
                interior: Some(interior),
                scrollbar: None,
            });
        }
    }

    /// Fire the initialize hook, if any, for a standalone scrollbar.
    pub fn raise_initialize_scrollbar(&self, scrollbar: &mut ScrollBarDrawable) {
        if let Some(hook) = &self.on_initialize {
            hook.call(&mut ThemeInitializeArgs {
                metrics: self,
                interior: None,
                scrollbar: Some(scrollbar),
            });
        }
    }

    fn set_thumb_margins(&mut self, margin: f32, use_arrow_size: bool) {
        self.thumb_margin.set_states(&INITIALIZED_STATES, margin);
        self.use_arrow_size_for_thumb
            .set_states(&INITIALIZED_STATES, use_arrow_size);
    }

    pub fn windows_dark() -> Self {
        let mut theme = Self::new();
        let normal = VisualState::Normal;
        theme.background.set(normal, Some(Color::rgb8(46, 46, 46)));
        theme.corner_background.set(normal, Some(Color::rgb8(102, 102, 102)));
        theme.arrow.set(normal, Some(Color::rgb8(153, 153, 153)));
        theme.arrow.set(VisualState::Hovered, Some(Color::rgb8(153, 153, 153)));
        theme.thumb_background.set(normal, Some(Color::rgb8(77, 77, 77)));
        theme.thumb_border.set(normal, Some(Color::rgb8(77, 77, 77)));
        theme.set_thumb_margins(1.0, true);
        theme
    }

    pub fn windows_light() -> Self {
        let mut theme = Self::new();
        let normal = VisualState::Normal;
        let hovered = VisualState::Hovered;
        theme.background.set(normal, Some(Color::rgb8(226, 226, 226)));
        theme.corner_background.set(normal, Some(Color::rgb8(238, 238, 242)));
        theme.arrow.set(normal, Some(Color::rgb8(194, 195, 201)));
        theme.arrow.set(hovered, Some(Color::rgb8(104, 104, 104)));
        theme.thumb_background.set(normal, Some(Color::rgb8(194, 195, 201)));
        theme.thumb_border.set(normal, Some(Color::rgb8(194, 195, 201)));
        theme.thumb_background.set(hovered, Some(Color::rgb8(104, 104, 104)));
        theme.thumb_border.set(hovered, Some(Color::rgb8(104, 104, 104)));
        theme.set_thumb_margins(1.0, true);
        theme
    }

    pub fn visual_studio_dark() -> Self {
        let mut theme = Self::new();
        let normal = VisualState::Normal;
        theme.background.set(normal, Some(Color::rgb8(62, 62, 66)));
        theme.corner_background.set(normal, Some(Color::rgb8(62, 62, 66)));
        theme.arrow.set(normal, Some(Color::rgb8(153, 153, 153)));
        theme.arrow.set(VisualState::Hovered, Some(Color::rgb8(28, 151, 234)));
        theme.thumb_background.set(normal, Some(Color::rgb8(0, 0, 0)));
        theme.thumb_border.set(normal, Some(Color::rgb8(104, 104, 104)));
        theme.set_thumb_margins(0.0, false);
        theme
    }

    pub fn visual_studio_light() -> Self {
        let mut theme = Self::new();
        let normal = VisualState::Normal;
        theme.background.set(normal, Some(Color::rgb8(245, 245, 245)));
        theme.corner_background.set(normal, Some(Color::rgb8(245, 245, 245)));
        theme.arrow.set(normal, Some(Color::rgb8(134, 137, 153)));
        theme.arrow.set(VisualState::Hovered, Some(Color::rgb8(28, 151, 234)));
        theme.thumb_background.set(normal, Some(Color::rgb8(255, 255, 255)));
        theme.thumb_border.set(normal, Some(Color::rgb8(0, 0, 0)));
        theme.set_thumb_margins(0.0, false);
        theme
    }

    /// The built-in metrics for `theme`, resolving auto themes by `is_dark`.
    pub fn get(theme: KnownTheme, is_dark: bool) -> Arc<ThemeMetrics> {
        let concrete = theme.resolve(is_dark);

        if let Some(found) = lookup_builtin(concrete) {
            return found;
        }

        let built = Arc::new(build_builtin(concrete));
        let mut cache = BUILTINS.write().unwrap_or_else(PoisonError::into_inner);
        // another caller may have filled the slot in between
        if let Some((_, existing)) = cache.iter().find(|(t, _)| *t == concrete) {
            return existing.clone();
        }
        log::debug!("Built scrollbar theme {}", concrete);
        cache.push((concrete, built.clone()));
        built
    }

    /// Replace the built-in metrics that `theme` resolves to.
    pub fn set_builtin(theme: KnownTheme, is_dark: bool, metrics: ThemeMetrics) {
        let concrete = theme.resolve(is_dark);
        let metrics = Arc::new(metrics);
        let mut cache = BUILTINS.write().unwrap_or_else(PoisonError::into_inner);
        match cache.iter_mut().find(|(t, _)| *t == concrete) {
            Some(slot) => slot.1 = metrics,
            None => cache.push((concrete, metrics)),
        }
        log::debug!("Replaced scrollbar theme {}", concrete);
    }
}

static BUILTINS: RwLock<Vec<(KnownTheme, Arc<ThemeMetrics>)>> = RwLock::new(Vec::new());

fn lookup_builtin(theme: KnownTheme) -> Option<Arc<ThemeMetrics>> {
    BUILTINS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .find(|(t, _)| *t == theme)
        .map(|(_, metrics)| metrics.clone())
}

fn build_builtin(theme: KnownTheme) -> ThemeMetrics {
    match theme {
        KnownTheme::VisualStudioDark => ThemeMetrics::visual_studio_dark(),
        KnownTheme::VisualStudioLight => ThemeMetrics::visual_studio_light(),
        KnownTheme::WindowsDark => ThemeMetrics::windows_dark(),
        KnownTheme::MauiDark => ThemeMetrics::get(KnownTheme::WindowsDark, true).as_ref().clone(),
        KnownTheme::MauiLight => ThemeMetrics::get(KnownTheme::WindowsLight, false)
            .as_ref()
            .clone(),
        _ => ThemeMetrics::windows_light(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("windowsdark".parse::<KnownTheme>(), Ok(KnownTheme::WindowsDark));
        assert_eq!(" VisualStudioLight ".parse::<KnownTheme>(), Ok(KnownTheme::VisualStudioLight));
        assert_eq!(
            "Solarized".parse::<KnownTheme>(),
            Err(ThemeError::UnknownTheme("Solarized".into()))
        );
    }

    #[test]
    fn test_auto_resolution() {
        assert_eq!(KnownTheme::WindowsAuto.resolve(true), KnownTheme::WindowsDark);
        assert_eq!(
            KnownTheme::VisualStudioAuto.resolve(false),
            KnownTheme::VisualStudioLight
        );
        assert_eq!(KnownTheme::MauiAuto.resolve(true), KnownTheme::MauiDark);
        assert!(KnownTheme::System.resolve(true).is_concrete());
    }

    #[test]
    fn test_system_theme_ignores_system() {
        let before = system_theme();
        set_system_theme(KnownTheme::System);
        assert_eq!(system_theme(), before);
    }

    #[test]
    fn test_builtin_colors() {
        let dark = ThemeMetrics::get(KnownTheme::WindowsDark, true);
        assert_eq!(
            *dark.background.get(VisualState::Normal),
            Some(Color::rgb8(46, 46, 46))
        );
        assert_eq!(*dark.background.get(VisualState::Hovered), None);

        let vs = ThemeMetrics::get(KnownTheme::VisualStudioDark, true);
        assert_eq!(*vs.thumb_margin.get(VisualState::Normal), 0.0);
        assert!(!*vs.use_arrow_size_for_thumb.get(VisualState::Hovered));
        assert_eq!(
            *vs.arrow.get(VisualState::Hovered),
            Some(Color::rgb8(28, 151, 234))
        );
    }

    #[test]
    fn test_builtins_are_cached() {
        let a = ThemeMetrics::get(KnownTheme::VisualStudioLight, false);
        let b = ThemeMetrics::get(KnownTheme::VisualStudioAuto, false);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_maui_copies_windows() {
        let maui = ThemeMetrics::get(KnownTheme::MauiLight, false);
        let windows = ThemeMetrics::get(KnownTheme::WindowsLight, false);
        assert_eq!(maui.background, windows.background);
        assert_eq!(maui.thumb_background, windows.thumb_background);
    }

    #[test]
    fn test_defaults() {
        let theme = ThemeMetrics::new();
        assert_eq!(*theme.arrow_margin.get(VisualState::Pressed), 1.0);
        assert!(theme.up_arrow.get(VisualState::Disabled).is_some());
        assert!(*theme.thumb_visible.get(VisualState::Normal));
        assert!(theme.background.is_empty());
    }
}
