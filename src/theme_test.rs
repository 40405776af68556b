use super::*;

#[test]
fn toggled_alternates() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggled_twice_is_identity() {
    for theme in Theme::ALL {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn from_system_maps_preference() {
    assert_eq!(Theme::from_system(true), Theme::Dark);
    assert_eq!(Theme::from_system(false), Theme::Light);
}

#[test]
fn parse_accepts_stored_values() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_and_mixed_case() {
    for raw in ["", "Dark", "LIGHT", " dark", "auto", "true"] {
        let err = raw.parse::<Theme>().unwrap_err();
        assert_eq!(err, ThemeParseError(raw.to_owned()));
    }
}

#[test]
fn display_matches_as_str() {
    for theme in Theme::ALL {
        assert_eq!(theme.to_string(), theme.as_str());
        assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
    }
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let theme: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(theme, Theme::Light);
}

#[test]
fn icon_class_picks_sun_for_light_and_moon_for_dark() {
    let icons = IconClasses::default();
    assert_eq!(Theme::Light.icon_class(&icons), "bi-sun-fill");
    assert_eq!(Theme::Dark.icon_class(&icons), "bi-moon-stars-fill");
}
