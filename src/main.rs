// to run: `trunk serve --open`
use foodrescue::app::App;
use foodrescue::utils::panic_hook;

pub fn main() {
    panic_hook::init();
    leptos::mount_to_body(App);
}
