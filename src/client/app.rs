use dioxus::prelude::*;

use crate::{
    client::{constant::SITE_NAME, model::cache::Cache, router::Route},
    model::hotel::HotelDto,
};

#[cfg(feature = "web")]
use crate::client::api::get_current_hotel;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut hotel = use_context_provider(|| Signal::new(Cache::<HotelDto>::NotFetched));

    // Resolve the hotel serving this host once per page load
    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_current_hotel().await });

        use_effect(move || {
            hotel.set(Cache::from((*future.read()).clone()));
        });
    }

    let title = (*hotel.read())
        .map(|hotel| format!("{} | {}", hotel.name, SITE_NAME))
        .unwrap_or_else(|| SITE_NAME.to_string());

    rsx! {
        Title { "{title}" }
        document::Meta {
            name: "description",
            content: "Dining, services, transportation and local attractions for hotel guests"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
