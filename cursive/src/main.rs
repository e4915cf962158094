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

use std::path::PathBuf;
use std::process;

use cursive::direction::Orientation;
use cursive::event::{Event, Key};
use cursive::menu::Tree as MenuTree;
use cursive::traits::*;
use cursive::view::View;
use cursive::views::{
    Checkbox, Dialog, EditView, LinearLayout, OnEventView, ScrollView, SelectView, TextView,
};
use cursive::Cursive;

use randgen::generator::{Distribution, NumericKind};
use randgen::password_generator::PasswordPolicy;
use randgen::session::{Form, GenerationMode, Session};
use randgen::settings::{self, Settings};

mod helpers;

static DARK_THEME: &str = include_str!("../res/dark.toml");
static LIGHT_THEME: &str = include_str!("../res/light.toml");

static HELP_TEXT: &str = "1. Choose the minimum and maximum values, between -1000000 and 1000000.\n\
2. Choose the generation mode.\n\
3. Enter how many numbers to generate, up to 1000. In password mode this is the password length.\n\
4. Press Generate to get the result.\n\
\n\
ctrl-g: generate | ctrl-e: export history | ctrl-t: toggle theme | ctrl-s: save settings | esc: quit";

/// The state shared by all callbacks, stored as the cursive user data.
pub struct App {
    session: Session,
    settings: Settings,
    config_path: Option<PathBuf>,
}

impl App {
    fn new(settings: Settings, config_path: Option<PathBuf>) -> App {
        App {
            session: Session::new(settings.dark_theme),
            settings,
            config_path,
        }
    }
}

fn read_form(ui: &mut Cursive) -> randgen::Result<Form> {
    let field = |ui: &mut Cursive, name: &str| -> String {
        helpers::get_value_from_input(ui, name).unwrap_or_default()
    };

    let min = helpers::parse_number_field("Minimum value", &field(ui, "min"))?;
    let max = helpers::parse_number_field("Maximum value", &field(ui, "max"))?;
    let count = helpers::parse_number_field("Count", &field(ui, "count"))?;

    Ok(Form {
        min,
        max,
        count,
        mode: helpers::selected_value(ui, "mode").unwrap_or_default(),
        kind: helpers::selected_value(ui, "kind").unwrap_or_default(),
        distribution: helpers::selected_value(ui, "distribution").unwrap_or_default(),
        policy: PasswordPolicy {
            include_uppercase: helpers::is_checkbox_checked(ui, "uppercase"),
            include_digits: helpers::is_checkbox_checked(ui, "digits"),
            include_symbols: helpers::is_checkbox_checked(ui, "symbols"),
        },
    })
}

fn set_status(ui: &mut Cursive, text: String) {
    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content(text);
    });
}

fn generate(ui: &mut Cursive) {
    let form = match read_form(ui) {
        Ok(form) => form,
        Err(err) => {
            helpers::errorbox(ui, &err);
            return;
        }
    };

    let text = ui
        .with_user_data(|app: &mut App| {
            app.settings.form = form;
            app.session.render(&form)
        })
        .unwrap_or_default();

    ui.call_on_name("result", |l: &mut TextView| {
        l.set_content(text);
    });
}

fn export_history(ui: &mut Cursive) {
    let res = ui.with_user_data(|app: &mut App| {
        let path = app.settings.history_file.clone();
        app.session
            .export_history(&path)
            .map(|_| (path, app.session.history().len()))
    });

    match res {
        Some(Ok((path, entries))) => set_status(
            ui,
            format!("Exported {} history entries to {}", entries, path.display()),
        ),
        Some(Err(err)) => helpers::errorbox(ui, &err),
        None => {}
    }
}

fn apply_theme(ui: &mut Cursive, dark: bool) {
    let theme = if dark { DARK_THEME } else { LIGHT_THEME };
    if let Err(err) = ui.load_toml(theme) {
        log::error!("failed to load theme: {:?}", err);
    }
}

fn toggle_theme(ui: &mut Cursive) {
    let dark = ui.with_user_data(|app: &mut App| {
        let dark = app.session.toggle_theme();
        app.settings.dark_theme = dark;
        dark
    });

    if let Some(dark) = dark {
        apply_theme(ui, dark);
        set_status(
            ui,
            if dark { "Dark theme" } else { "Light theme" }.to_owned(),
        );
    }
}

fn save_settings(ui: &mut Cursive) {
    let form = match read_form(ui) {
        Ok(form) => form,
        Err(err) => {
            helpers::errorbox(ui, &err);
            return;
        }
    };

    let res = ui.with_user_data(|app: &mut App| {
        app.settings.form = form;
        match &app.config_path {
            Some(path) => settings::save_config(&app.settings, path).map(|_| path.clone()),
            None => Err(randgen::Error::Generic(
                "no home directory set, can't save settings",
            )),
        }
    });

    match res {
        Some(Ok(path)) => set_status(ui, format!("Saved settings to {}", path.display())),
        Some(Err(err)) => helpers::errorbox(ui, &err),
        None => {}
    }
}

fn show_help(ui: &mut Cursive) {
    let d = Dialog::around(TextView::new(HELP_TEXT))
        .dismiss_button("Ok")
        .title("Help");

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

fn labeled<V: View>(label: &str, view: V) -> LinearLayout {
    LinearLayout::new(Orientation::Horizontal)
        .child(TextView::new(label).fixed_width(16))
        .child(view)
}

fn checkbox(name: &str, checked: bool) -> impl View {
    let mut c_b = Checkbox::new();
    c_b.set_checked(checked);
    c_b.with_name(name)
}

fn position<T: PartialEq>(all: &[T], value: &T) -> usize {
    all.iter().position(|v| v == value).unwrap_or(0)
}

/// The form, pre-filled from `form`.
fn form_view(form: &Form) -> LinearLayout {
    let mode = SelectView::<GenerationMode>::new()
        .popup()
        .with_all(GenerationMode::ALL.iter().map(|m| (m.to_string(), *m)))
        .selected(position(&GenerationMode::ALL, &form.mode))
        .with_name("mode");

    let kind = SelectView::<NumericKind>::new()
        .popup()
        .with_all(NumericKind::ALL.iter().map(|k| (k.to_string(), *k)))
        .selected(position(&NumericKind::ALL, &form.kind))
        .with_name("kind");

    let distribution = SelectView::<Distribution>::new()
        .popup()
        .with_all(Distribution::ALL.iter().map(|d| (d.to_string(), *d)))
        .selected(position(&Distribution::ALL, &form.distribution))
        .with_name("distribution");

    let number_input = |name: &str, value: String| {
        EditView::new()
            .content(value)
            .with_name(name)
            .fixed_width(22)
    };

    LinearLayout::new(Orientation::Vertical)
        .child(labeled("Minimum value:", number_input("min", form.min.to_string())))
        .child(labeled("Maximum value:", number_input("max", form.max.to_string())))
        .child(labeled("Count:", number_input("count", form.count.to_string())))
        .child(labeled("Mode:", mode))
        .child(labeled("Number type:", kind))
        .child(labeled("Distribution:", distribution))
        .child(
            LinearLayout::new(Orientation::Horizontal)
                .child(checkbox("uppercase", form.policy.include_uppercase))
                .child(TextView::new(" Uppercase  "))
                .child(checkbox("digits", form.policy.include_digits))
                .child(TextView::new(" Digits  "))
                .child(checkbox("symbols", form.policy.include_symbols))
                .child(TextView::new(" Symbols")),
        )
}

fn main_view(form: &Form) -> LinearLayout {
    let results = ScrollView::new(TextView::new("").with_name("result"))
        .full_width()
        .min_height(8);

    LinearLayout::new(Orientation::Vertical)
        .child(
            Dialog::around(
                LinearLayout::new(Orientation::Vertical)
                    .child(results)
                    .child(form_view(form)),
            )
            .title("Random Number Generator")
            .button("Generate", generate)
            .button("Export", export_history),
        )
        .child(
            LinearLayout::new(Orientation::Horizontal)
                .child(TextView::new("F1: Menu | "))
                .child(TextView::new("").with_name("status_bar"))
                .full_width(),
        )
}

fn help() {
    println!("A random number and password generator");
    println!();
    println!("Usage: randgen-cursive [-h|--help]");
    println!();
    println!("Settings are read from $XDG_CONFIG_HOME/randgen/settings.toml and RANDGEN_* environment variables");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => (),
        2 => {
            if args[1] == "-h" || args[1] == "--help" {
                help();
                std::process::exit(0);
            } else {
                eprintln!("Unknown argument, usage: randgen-cursive [-h|--help]");
                process::exit(1);
            }
        }
        _ => {
            eprintln!("Unknown argument, usage: randgen-cursive [-h|--help]");
            process::exit(1);
        }
    }

    let home = std::env::var("HOME").ok().map(PathBuf::from);
    let xdg_config_home = std::env::var("XDG_CONFIG_HOME").ok().map(PathBuf::from);

    let config = match settings::read_config(&home, &xdg_config_home) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error {}", err);
            process::exit(1);
        }
    };
    let config_path = settings::xdg_config_file_location(&home, &xdg_config_home).ok();

    let mut ui = cursive::default();

    apply_theme(&mut ui, config.dark_theme);
    ui.add_layer(main_view(&config.form));
    ui.set_user_data(App::new(config, config_path));

    ui.add_global_callback(Event::CtrlChar('g'), generate);
    ui.add_global_callback(Event::CtrlChar('e'), export_history);
    ui.add_global_callback(Event::CtrlChar('t'), toggle_theme);
    ui.add_global_callback(Event::CtrlChar('s'), save_settings);
    ui.add_global_callback(Event::Key(Key::Esc), |s| s.quit());

    ui.menubar().add_subtree(
        "Operations",
        MenuTree::new()
            .leaf("Generate (ctrl-g)", generate)
            .leaf("Export history (ctrl-e)", export_history)
            .delimiter()
            .leaf("Toggle theme (ctrl-t)", toggle_theme)
            .leaf("Save settings (ctrl-s)", save_settings)
            .delimiter()
            .leaf("Help", show_help)
            .leaf("Quit (esc)", |s| s.quit()),
    );

    ui.add_global_callback(Key::F1, |s| s.select_menubar());

    ui.run();
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod main_tests;
