use crate::client::model::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    /// Map the inner data to another value, returning None if not fetched successfully
    pub fn map<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(&T) -> U,
    {
        self.data().map(f)
    }
}

impl<T> From<Option<Result<T, ApiError>>> for Cache<T> {
    /// Converts the state of a resource into a cache entry.
    fn from(value: Option<Result<T, ApiError>>) -> Self {
        match value {
            None => Cache::Loading,
            Some(Ok(data)) => Cache::Fetched(data),
            Some(Err(error)) => Cache::Error(error),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests conversion from resource states.
    ///
    /// Expected: pending maps to Loading, results map to Fetched or Error
    #[test]
    fn converts_resource_state() {
        assert_eq!(Cache::<u8>::from(None), Cache::Loading);
        assert_eq!(Cache::from(Some(Ok::<u8, ApiError>(3))).data(), Some(&3));

        let error = ApiError {
            status: 404,
            message: "No hotel found".to_string(),
        };
        assert_eq!(
            Cache::<u8>::from(Some(Err(error.clone()))),
            Cache::Error(error)
        );
    }

    /// Tests mapping over the cached value.
    ///
    /// Expected: Some for fetched data, None for every other state
    #[test]
    fn maps_only_fetched_data() {
        assert_eq!(Cache::Fetched(2u8).map(|n| n * 10), Some(20));
        assert_eq!(Cache::<u8>::Loading.map(|n| n * 10), None);
        assert_eq!(Cache::<u8>::NotFetched.map(|n| n * 10), None);
    }
}
