use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBellConcierge, FaBus, FaLandmark, FaUtensils},
    Icon,
};

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::cache::Cache,
        router::Route,
    },
    model::{directory::DirectoryCollection, hotel::HotelDto},
};

#[component]
pub fn Home() -> Element {
    let hotel = use_context::<Signal<Cache<HotelDto>>>();
    let state = hotel.read();

    match &*state {
        Cache::NotFetched | Cache::Loading => rsx!(LoadingPage {}),
        Cache::Error(error) => rsx!(ErrorPage {
            status: error.status,
            message: error.message.clone()
        }),
        Cache::Fetched(hotel) => rsx!(
            Title { "{hotel.name} | {SITE_NAME}" }
            Page {
                class: "flex flex-col items-center",
                div {
                    class: "w-full max-w-4xl flex flex-col gap-6",
                    div {
                        h1 { class: "text-3xl font-bold", "Welcome to {hotel.name}" }
                        p { class: "opacity-70", "Everything you need during your stay" }
                    }
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                        for collection in DirectoryCollection::ALL {
                            SectionCard { key: "{collection}", collection }
                        }
                    }
                }
            }
        ),
    }
}

#[component]
fn SectionCard(collection: DirectoryCollection) -> Element {
    let description = match collection {
        DirectoryCollection::Dining => "Restaurants, bars and room service",
        DirectoryCollection::Services => "Spa, laundry, concierge and more",
        DirectoryCollection::Transportation => "Shuttles, taxis and getting around",
        DirectoryCollection::LocalPlaces => "Things to see nearby",
    };

    rsx!(Link {
        to: Route::for_collection(collection),
        class: "card bg-base-200 hover:bg-base-300 transition-colors",
        div {
            class: "card-body flex-row items-center gap-4",
            match collection {
                DirectoryCollection::Dining => rsx!(Icon { width: 28, height: 28, icon: FaUtensils }),
                DirectoryCollection::Services => rsx!(Icon { width: 28, height: 28, icon: FaBellConcierge }),
                DirectoryCollection::Transportation => rsx!(Icon { width: 28, height: 28, icon: FaBus }),
                DirectoryCollection::LocalPlaces => rsx!(Icon { width: 28, height: 28, icon: FaLandmark }),
            }
            div {
                h2 { class: "card-title", "{collection.label()}" }
                p { class: "opacity-70", "{description}" }
            }
        }
    })
}
