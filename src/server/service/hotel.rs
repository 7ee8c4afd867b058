use crate::server::{
    data::ContentSource,
    error::AppError,
    model::hotel::{Hotel, HotelFilter, ListHotelsParam},
};

pub struct HotelService<'a> {
    source: &'a dyn ContentSource,
}

impl<'a> HotelService<'a> {
    pub fn new(source: &'a dyn ContentSource) -> Self {
        Self { source }
    }

    /// Lists hotels, optionally restricted to the ones served under a domain.
    ///
    /// A blank domain lists every hotel. A domain that normalises to nothing
    /// (e.g. `"https://"`) matches no hotel.
    pub async fn list(&self, param: ListHotelsParam) -> Result<Vec<Hotel>, AppError> {
        let filter = match param.domain.as_deref().map(str::trim) {
            None | Some("") => HotelFilter::all(),
            Some(domain) => match HotelFilter::by_host(domain) {
                Some(filter) => filter,
                None => return Ok(Vec::new()),
            },
        };

        Ok(self.source.hotels(&filter).await?)
    }

    /// Resolves the hotel serving `host`.
    ///
    /// # Returns
    /// - `Ok(Some(Hotel))` - First hotel, in upstream order, serving the host
    /// - `Ok(None)` - No hotel serves the host
    /// - `Err(AppError::ContentErr)` - Content source failure
    pub async fn get_by_host(&self, host: &str) -> Result<Option<Hotel>, AppError> {
        let Some(filter) = HotelFilter::by_host(host) else {
            return Ok(None);
        };

        Ok(self.source.hotels(&filter).await?.into_iter().next())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Hotel>, AppError> {
        let hotels = self.source.hotels(&HotelFilter::by_id(id)).await?;

        Ok(hotels.into_iter().find(|hotel| hotel.id == id))
    }
}
