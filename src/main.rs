mod config;
mod contact;
mod content;
mod date;
mod hero;
mod hooks;
mod modal;
mod navbar;
mod reveal;
mod routes;
#[cfg(any(target_arch = "wasm32", test))]
mod schedule;
mod scroll;
mod sections;
mod theme;
mod typing;
mod ui;

fn main() {
    dioxus::launch(routes::App);
}
