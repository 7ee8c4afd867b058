use dioxus::prelude::*;

use crate::{
    client::{
        component::{Breadcrumb, BreadcrumbItem, ErrorPage, LoadingPage, Markdown, Page},
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::{
        directory::{DirectoryCollection, DirectoryEntryDto},
        hotel::HotelDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::get_hotel_directory;

#[component]
pub fn Dining() -> Element {
    rsx!(DirectoryPage { collection: DirectoryCollection::Dining })
}

#[component]
pub fn Services() -> Element {
    rsx!(DirectoryPage { collection: DirectoryCollection::Services })
}

#[component]
pub fn Transportation() -> Element {
    rsx!(DirectoryPage { collection: DirectoryCollection::Transportation })
}

#[component]
pub fn Attractions() -> Element {
    rsx!(DirectoryPage { collection: DirectoryCollection::LocalPlaces })
}

/// Page listing the entries of one directory collection for the current hotel.
#[component]
pub fn DirectoryPage(collection: DirectoryCollection) -> Element {
    let hotel = use_context::<Signal<Cache<HotelDto>>>();
    #[allow(unused_mut)]
    let mut entries = use_signal(Cache::<Vec<DirectoryEntryDto>>::default);

    // Fetch once the hotel is known; re-runs when the collection prop changes
    #[cfg(feature = "web")]
    {
        let hotel_id = (*hotel.read()).map(|hotel| hotel.id);
        let future = use_resource(use_reactive!(|(hotel_id, collection)| async move {
            match hotel_id {
                Some(hotel_id) => Some(get_hotel_directory(hotel_id, collection).await),
                None => None,
            }
        }));

        use_effect(move || {
            let state = (*future.read()).clone().flatten();
            entries.set(Cache::from(state));
        });
    }

    let breadcrumb = vec![
        BreadcrumbItem::link("Home", "/"),
        BreadcrumbItem::current(collection.label()),
    ];

    if let Cache::Error(error) = &*hotel.read() {
        return rsx!(ErrorPage {
            status: error.status,
            message: error.message.clone()
        });
    }

    let state = entries.read();

    rsx!(
        Title { "{collection.label()} | {SITE_NAME}" }
        match &*state {
            Cache::NotFetched | Cache::Loading => rsx!(LoadingPage {}),
            Cache::Error(error) => rsx!(ErrorPage {
                status: error.status,
                message: error.message.clone()
            }),
            Cache::Fetched(entries) => rsx!(
                Page {
                    class: "flex flex-col items-center",
                    div {
                        class: "w-full max-w-4xl flex flex-col gap-6",
                        Breadcrumb { items: breadcrumb }
                        h1 { class: "text-3xl font-bold", "{collection.label()}" }
                        if entries.is_empty() {
                            p { class: "opacity-70", "Nothing listed here yet." }
                        } else {
                            ul {
                                class: "flex flex-col gap-4",
                                for entry in entries.iter() {
                                    EntryCard { key: "{entry.id}", entry: entry.clone() }
                                }
                            }
                        }
                    }
                }
            ),
        }
    )
}

#[component]
fn EntryCard(entry: DirectoryEntryDto) -> Element {
    rsx!(li {
        class: "card bg-base-200",
        div {
            class: "card-body",
            h2 { class: "card-title", "{entry.title}" }
            if let Some(description) = entry.description {
                Markdown { text: description }
            }
        }
    })
}
