use dioxus::prelude::*;

use crate::{
    client::{constant::SITE_NAME, model::cache::Cache, router::Route},
    model::{directory::DirectoryCollection, hotel::HotelDto},
};

#[component]
pub fn Header() -> Element {
    let hotel = use_context::<Signal<Cache<HotelDto>>>();

    let title = (*hotel.read())
        .map(|hotel| hotel.name.clone())
        .unwrap_or_else(|| SITE_NAME.to_string());

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl text-wrap font-semibold",
                    "{title}"
                }
            }
        }
        nav {
            class: "hidden md:flex items-center gap-2",
            for collection in DirectoryCollection::ALL {
                Link {
                    key: "{collection}",
                    to: Route::for_collection(collection),
                    class: "btn btn-ghost",
                    "{collection.label()}"
                }
            }
        }
    })
}
