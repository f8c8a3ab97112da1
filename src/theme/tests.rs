use super::*;
use crate::interaction::VisualState;
use ratatui::style::Color;

#[test]
fn unknown_theme_keeps_current_selection() {
    let mut themes = Themes::starting_with("nebula");
    assert_eq!(themes.current().name, "nebula");

    assert!(!themes.select("does-not-exist"));
    assert_eq!(themes.current().name, "nebula");

    assert!(themes.select("blue"));
    assert_eq!(themes.current().name, "blue");
}

#[test]
fn starting_with_unknown_name_falls_back_to_default() {
    let themes = Themes::starting_with("sepia");
    assert_eq!(themes.current().name, "default");
}

#[test]
fn names_list_every_builtin_theme_in_order() {
    let names: Vec<&str> = Themes::default().names().collect();
    assert_eq!(names, vec!["default", "blue", "mint", "nebula"]);
}

#[test]
fn derived_themes_inherit_unset_colors_from_default() {
    let mut themes = Themes::default();
    let default_field = themes.current().field_background;
    themes.select("mint");
    assert_eq!(themes.current().field_background, default_field);
    assert_eq!(themes.current().press, Color::Rgb(60, 60, 60));
}

#[test]
fn resolve_visual_tints_each_state() {
    let theme = Themes::default().current().clone();
    let icons = resolve_visual(IconName::Play, &theme.button_colors());

    assert_eq!(icons.pick(VisualState::Normal).tint, theme.normal);
    assert_eq!(icons.pick(VisualState::Hover).tint, theme.hover);
    assert_eq!(icons.pick(VisualState::Pressed).tint, theme.press);
    assert_eq!(icons.normal.glyph, icons.pressed.glyph);
}
