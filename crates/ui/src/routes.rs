use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AnsweringView, StoreProvider, SubjectMenu, WritingView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", AnsweringView)] Answering {},
        #[route("/write", WritingView)] Writing {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        StoreProvider {
            div { class: "app",
                Sidebar {}
                main { class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        aside { class: "sidebar",
            h1 { "Flashcards" }
            ul { class: "nav",
                li { Link { to: Route::Answering {}, "Answer" } }
                li { Link { to: Route::Writing {}, "Write" } }
            }
            SubjectMenu {}
        }
    }
}
