/*  randgen - a random number and password generator
    Copyright (C) 2019 Joakim Lundborg, Alexander Kjäll

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::str::FromStr;

use cursive::event::Key;
use cursive::views::{Checkbox, Dialog, EditView, OnEventView, SelectView, TextView};
use cursive::Cursive;

use randgen::Error;

/// Displays an error in a dialog that is dismissed with Ok or escape.
pub fn errorbox(ui: &mut Cursive, err: &Error) {
    let d = Dialog::around(TextView::new(format!("{err}")))
        .dismiss_button("Ok")
        .title("Error");

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

pub fn get_value_from_input(s: &mut Cursive, input_name: &str) -> Option<String> {
    s.call_on_name(input_name, |e: &mut EditView| e.get_content().to_string())
}

pub fn is_checkbox_checked(ui: &mut Cursive, name: &str) -> bool {
    ui.call_on_name(name, |l: &mut Checkbox| l.is_checked())
        .unwrap_or(false)
}

/// The value of the selected row of a `SelectView<T>`, if any.
pub fn selected_value<T: Copy + 'static>(ui: &mut Cursive, name: &str) -> Option<T> {
    ui.call_on_name(name, |l: &mut SelectView<T>| l.selection().map(|v| *v))
        .flatten()
}

/// Parses the trimmed text of a form field, naming the field when it isn't a number.
pub fn parse_number_field<T: FromStr>(label: &str, value: &str) -> randgen::Result<T> {
    value.trim().parse().map_err(|_| {
        Error::GenericDyn(format!(
            "{label} must be a whole number, got '{}'",
            value.trim()
        ))
    })
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod helpers_tests;
