use dioxus::prelude::*;

use crate::{
    client::{
        component::Layout,
        route::{Attractions, Dining, Home, NotFound, Services, Transportation},
    },
    model::directory::DirectoryCollection,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/dining")]
    Dining {},

    #[route("/services")]
    Services {},

    #[route("/transportation")]
    Transportation {},

    #[route("/attractions")]
    Attractions {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Page listing the entries of `collection`.
    pub fn for_collection(collection: DirectoryCollection) -> Self {
        match collection {
            DirectoryCollection::Dining => Route::Dining {},
            DirectoryCollection::Services => Route::Services {},
            DirectoryCollection::Transportation => Route::Transportation {},
            DirectoryCollection::LocalPlaces => Route::Attractions {},
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests that every collection has its own page path.
    ///
    /// Expected: local places served under `/attractions`
    #[test]
    fn collection_paths() {
        let paths: Vec<String> = DirectoryCollection::ALL
            .into_iter()
            .map(|c| Route::for_collection(c).to_string())
            .collect();

        assert_eq!(
            paths,
            ["/dining", "/services", "/transportation", "/attractions"]
        );
    }
}
