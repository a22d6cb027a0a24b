#![cfg(not(feature = "csr"))]

use super::*;

fn with_theme(f: impl FnOnce(ThemeContext)) {
    let owner = Owner::new();
    owner.with(|| f(ThemeContext::install(&SiteConfig::default())));
}

#[test]
fn host_install_resolves_light_and_settles() {
    with_theme(|theme| {
        assert!(!theme.is_dark());
        assert!(!theme.is_pending());
        assert_eq!(theme.theme(), Theme::Light);
    });
}

#[test]
fn toggle_updates_signal_snapshot() {
    with_theme(|theme| {
        theme.toggle();
        assert!(theme.is_dark());
        theme.toggle();
        assert!(!theme.is_dark());
    });
}

#[test]
fn set_explicit_sets_absolute_value() {
    with_theme(|theme| {
        theme.set_explicit(true);
        theme.set_explicit(true);
        assert_eq!(theme.state(), AppearanceState { is_dark: true, is_pending: false });
    });
}

#[test]
fn install_provides_context() {
    with_theme(|_| {
        let provided = use_context::<ThemeContext>();
        assert!(provided.is_some_and(|ctx| !ctx.is_dark()));
    });
}
