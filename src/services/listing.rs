use crate::dto::listing::ListingPageData;
use crate::repository::{ListingReader, ReviewReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads the listing detail page: the listing plus its reviews, newest
/// first.
pub fn load_listing_page<R>(repo: &R, listing_id: i32) -> ServiceResult<ListingPageData>
where
    R: ListingReader + ReviewReader + ?Sized,
{
    let listing = repo
        .get_listing_by_id(listing_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let reviews = repo.list_reviews(listing_id).map_err(ServiceError::from)?;

    Ok(ListingPageData { listing, reviews })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    #[test]
    fn missing_listing_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_listing_by_id().returning(|_| Ok(None));

        let result = load_listing_page(&repo, 404);
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
