//! Theme controller: resolve, apply, and toggle the page theme.
//!
//! Two entry points mirror the page lifecycle. [`initialize`] runs once when
//! the document structure is ready; [`toggle`] runs on each activation of the
//! toggle control. Both read the persisted value fresh and look up the icon
//! element themselves, so nothing is cached between invocations.
//!
//! After either returns `Ok`, the persisted value, the root attribute, and
//! the icon class all agree.

use crate::config::ThemeConfig;
use crate::consts::BOUND_ATTRIBUTE;
use crate::error::{ElementRole, ThemeError};
use crate::host::{ColorSchemeProbe, PreferenceStore, ThemeDocument};
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Pick the active theme: a valid persisted value wins, otherwise the system
/// preference. Unparseable values are treated as absent.
#[must_use]
pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
    if let Some(raw) = stored {
        match raw.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(err) => log::warn!("ignoring stored theme: {err}"),
        }
    }
    Theme::from_system(prefers_dark)
}

/// Resolve the theme from storage, falling back to the system preference.
#[must_use]
pub fn read_preference<S, P>(store: &S, probe: &P, config: &ThemeConfig) -> Theme
where
    S: PreferenceStore + ?Sized,
    P: ColorSchemeProbe + ?Sized,
{
    let stored = store.read(&config.storage_key);
    resolve(stored.as_deref(), probe.prefers_dark())
}

/// Make `theme` the visible and persisted theme.
///
/// Writes the preference first, so a refused write leaves the page as it
/// was. Then sets the root attribute and swaps the icon classes so exactly
/// one of the two icon tokens remains.
///
/// # Errors
///
/// Returns [`ThemeError::MissingElement`] if the icon element is absent, or
/// any storage/DOM error from the host.
pub fn apply<D, S>(doc: &mut D, store: &mut S, config: &ThemeConfig, theme: Theme) -> Result<(), ThemeError>
where
    D: ThemeDocument + ?Sized,
    S: PreferenceStore + ?Sized,
{
    require_element(doc, ElementRole::Icon, &config.icon_id)?;

    store.write(&config.storage_key, theme.as_str())?;
    doc.set_root_attribute(&config.root_attribute, theme.as_str())?;

    for stale in Theme::ALL {
        doc.remove_class(&config.icon_id, stale.icon_class(&config.icons))?;
    }
    doc.add_class(&config.icon_id, theme.icon_class(&config.icons))?;

    log::debug!("applied {theme} theme");
    Ok(())
}

/// Page-load setup: check the markup, resolve the theme, and apply it.
///
/// Writing back an already-stored value is harmless, so running this twice
/// leaves the page unchanged.
///
/// # Errors
///
/// Returns [`ThemeError::MissingElement`] before any side effect if either
/// the icon or the toggle control is absent.
pub fn initialize<D, S, P>(doc: &mut D, store: &mut S, probe: &P, config: &ThemeConfig) -> Result<Theme, ThemeError>
where
    D: ThemeDocument + ?Sized,
    S: PreferenceStore + ?Sized,
    P: ColorSchemeProbe + ?Sized,
{
    require_element(doc, ElementRole::Icon, &config.icon_id)?;
    require_element(doc, ElementRole::Toggle, &config.toggle_id)?;

    let theme = read_preference(store, probe, config);
    apply(doc, store, config, theme)?;
    Ok(theme)
}

/// Flip the persisted theme and apply the result.
///
/// If storage was cleared since page load, the current theme is re-resolved
/// from the system preference before flipping.
///
/// # Errors
///
/// Same as [`apply`].
pub fn toggle<D, S, P>(doc: &mut D, store: &mut S, probe: &P, config: &ThemeConfig) -> Result<Theme, ThemeError>
where
    D: ThemeDocument + ?Sized,
    S: PreferenceStore + ?Sized,
    P: ColorSchemeProbe + ?Sized,
{
    let next = read_preference(store, probe, config).toggled();
    apply(doc, store, config, next)?;
    Ok(next)
}

/// Mark the toggle control as bound. Returns `false` if an earlier mount
/// already bound it, in which case the caller must not add another listener.
///
/// # Errors
///
/// Returns [`ThemeError::MissingElement`] if the toggle control is absent, or
/// a DOM error if the marker cannot be set.
pub fn claim_toggle<D>(doc: &mut D, config: &ThemeConfig) -> Result<bool, ThemeError>
where
    D: ThemeDocument + ?Sized,
{
    require_element(doc, ElementRole::Toggle, &config.toggle_id)?;
    if doc.element_attribute(&config.toggle_id, BOUND_ATTRIBUTE).is_some() {
        return Ok(false);
    }
    doc.set_element_attribute(&config.toggle_id, BOUND_ATTRIBUTE, "true")?;
    Ok(true)
}

fn require_element<D>(doc: &D, role: ElementRole, id: &str) -> Result<(), ThemeError>
where
    D: ThemeDocument + ?Sized,
{
    if doc.has_element(id) {
        Ok(())
    } else {
        Err(ThemeError::MissingElement { role, id: id.to_owned() })
    }
}
