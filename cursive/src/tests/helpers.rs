use cursive::{
    view::Nameable,
    views::{Checkbox, EditView, SelectView},
};
use randgen::session::GenerationMode;

use crate::helpers::{
    get_value_from_input, is_checkbox_checked, parse_number_field, selected_value,
};

#[test]
fn test_get_value_from_input() {
    let mut siv = cursive::default();

    let ev = EditView::new()
        .content("unit test content")
        .with_name("input");

    siv.add_layer(ev);

    assert_eq!(
        Some(String::from("unit test content")),
        get_value_from_input(&mut siv, "input")
    );
}

#[test]
fn get_value_from_missing_input() {
    let mut siv = cursive::default();

    assert_eq!(None, get_value_from_input(&mut siv, "input"));
}

#[test]
fn is_checkbox_checked_false() {
    let mut siv = cursive::default();
    siv.add_layer(Checkbox::new().with_name("unit_test"));

    assert!(!is_checkbox_checked(&mut siv, "unit_test"));
}

#[test]
fn is_checkbox_checked_true() {
    let mut siv = cursive::default();
    let mut c_b = Checkbox::new();
    c_b.set_checked(true);
    siv.add_layer(c_b.with_name("unit_test"));

    assert!(is_checkbox_checked(&mut siv, "unit_test"));
}

#[test]
fn is_checkbox_checked_missing() {
    let mut siv = cursive::default();

    assert!(!is_checkbox_checked(&mut siv, "unit_test"));
}

#[test]
fn selected_value_of_select_view() {
    let mut siv = cursive::default();
    let sv = SelectView::<GenerationMode>::new()
        .item("Unique numbers", GenerationMode::Unique)
        .item("Password generator", GenerationMode::Passwords)
        .selected(1)
        .with_name("mode");
    siv.add_layer(sv);

    assert_eq!(
        Some(GenerationMode::Passwords),
        selected_value::<GenerationMode>(&mut siv, "mode")
    );
}

#[test]
fn selected_value_of_empty_select_view() {
    let mut siv = cursive::default();
    siv.add_layer(SelectView::<GenerationMode>::new().with_name("mode"));

    assert_eq!(None, selected_value::<GenerationMode>(&mut siv, "mode"));
}

#[test]
fn parse_number_field_trims() {
    let v: i64 = parse_number_field("Minimum value", " -42 ").unwrap();

    assert_eq!(-42, v);
}

#[test]
fn parse_number_field_rejects_text() {
    let err = parse_number_field::<i64>("Minimum value", "ten").unwrap_err();

    assert_eq!(
        "Minimum value must be a whole number, got 'ten'",
        format!("{}", err)
    );
}

#[test]
fn parse_number_field_rejects_negative_count() {
    assert!(parse_number_field::<usize>("Count", "-1").is_err());
}
