//! pathlink web - Routed demo app for `TrackedLink`

use pathlink_web::App;

fn main() {
    dioxus::launch(App);
}
