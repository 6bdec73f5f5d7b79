//! Listing search: translates raw query parameters into a typed filter and
//! executes the paged query.

use crate::dto::main::{ListingsPageData, ListingsQuery};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ListingReader, ListingSearchQuery};
use crate::services::{ServiceError, ServiceResult};

/// Builds the typed search filter from the raw request parameters, returning
/// it together with the 1-based page number.
///
/// No input is mandatory and nothing here errors: absent or malformed values
/// silently become "no constraint". In particular malformed numbers are
/// treated as absent filters; a stricter contract would reject the request
/// with a 400 instead.
pub fn build_search_query(params: &ListingsQuery) -> (ListingSearchQuery, usize) {
    let mut query = ListingSearchQuery::new();

    if let Some(location) = trimmed(&params.location) {
        query = query.location(location);
    }
    if let Some(min_price) = parse_number(&params.min_price) {
        query = query.min_price(min_price);
    }
    if let Some(max_price) = parse_number(&params.max_price) {
        query = query.max_price(max_price);
    }
    if let Some(room_size) = trimmed(&params.room_size) {
        query = query.room_size(room_size);
    }
    if let Some(amenities) = &params.amenities {
        query = query.amenities(split_amenities(amenities));
    }

    let page = params
        .page
        .as_deref()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(1);

    (query, page)
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_number(value: &Option<String>) -> Option<f64> {
    value.as_deref().and_then(|s| s.trim().parse::<f64>().ok())
}

/// Splits a comma-separated amenity list into de-duplicated labels. Labels
/// pass through verbatim; one outside the catalog simply matches nothing.
fn split_amenities(raw: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for label in raw.split(',') {
        let label = label.trim();
        if !label.is_empty() && !labels.iter().any(|l| l == label) {
            labels.push(label.to_string());
        }
    }
    labels
}

/// Loads one page of listings matching the requested filters.
pub fn load_listings_page<R>(repo: &R, params: ListingsQuery) -> ServiceResult<ListingsPageData>
where
    R: ListingReader + ?Sized,
{
    let (query, page) = build_search_query(&params);

    let (total, items) = repo
        .search_listings(query.paginate(page, DEFAULT_ITEMS_PER_PAGE))
        .map_err(|err| {
            log::error!("Failed to search listings: {err}");
            ServiceError::from(err)
        })?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let listings = Paginated::new(items, total, page, total_pages);

    Ok(ListingsPageData {
        listings,
        filters: params,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::listing::Listing;
    use crate::domain::types::RoomSize;
    use crate::repository::mock::MockRepository;

    fn sample_listing(id: i32) -> Listing {
        let now = Utc::now().naive_utc();
        Listing {
            id,
            title: format!("Listing #{id}"),
            description: String::new(),
            location: "Ayeduase".to_string(),
            price: 300.0,
            room_size: RoomSize::TwoInARoom,
            amenities: vec![],
            images: vec![],
            user_id: "owner-1".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn builds_fully_specified_filter() {
        let params = ListingsQuery {
            location: Some(" Ayeduase ".to_string()),
            min_price: Some("100".to_string()),
            max_price: Some("500.5".to_string()),
            room_size: Some("2 in a room".to_string()),
            amenities: Some("wifi, kitchen,wifi,".to_string()),
            page: Some("3".to_string()),
        };
        let (query, page) = build_search_query(&params);
        assert_eq!(query.location.as_deref(), Some("Ayeduase"));
        assert_eq!(query.min_price, Some(100.0));
        assert_eq!(query.max_price, Some(500.5));
        assert_eq!(query.room_size.as_deref(), Some("2 in a room"));
        assert_eq!(query.amenities, vec!["wifi", "kitchen"]);
        assert_eq!(page, 3);
    }

    #[test]
    fn malformed_values_become_no_constraint() {
        let params = ListingsQuery {
            location: Some("   ".to_string()),
            min_price: Some("cheap".to_string()),
            max_price: Some(String::new()),
            room_size: None,
            amenities: None,
            page: Some("last".to_string()),
        };
        let (query, page) = build_search_query(&params);
        assert!(query.location.is_none());
        assert!(query.min_price.is_none());
        assert!(query.max_price.is_none());
        assert!(query.room_size.is_none());
        assert!(query.amenities.is_empty());
        assert_eq!(page, 1);
    }

    #[test]
    fn min_above_max_is_passed_through_unchecked() {
        let params = ListingsQuery {
            min_price: Some("500".to_string()),
            max_price: Some("100".to_string()),
            ..ListingsQuery::default()
        };
        let (query, _) = build_search_query(&params);
        assert_eq!(query.min_price, Some(500.0));
        assert_eq!(query.max_price, Some(100.0));
    }

    #[test]
    fn load_listings_page_computes_total_pages() {
        let mut repo = MockRepository::new();
        repo.expect_search_listings()
            .withf(|query| {
                query
                    .pagination
                    .as_ref()
                    .is_some_and(|p| p.page == 3 && p.per_page == DEFAULT_ITEMS_PER_PAGE)
            })
            .returning(|_| Ok((22, (19..=22).map(sample_listing).collect())));

        let params = ListingsQuery {
            page: Some("3".to_string()),
            ..ListingsQuery::default()
        };
        let data = load_listings_page(&repo, params).unwrap();
        assert_eq!(data.listings.total, 22);
        assert_eq!(data.listings.total_pages, 3);
        assert_eq!(data.listings.items.len(), 4);
        assert_eq!(data.listings.page, 3);
    }

    #[test]
    fn empty_result_set_has_zero_pages() {
        let mut repo = MockRepository::new();
        repo.expect_search_listings().returning(|_| Ok((0, vec![])));

        let data = load_listings_page(&repo, ListingsQuery::default()).unwrap();
        assert_eq!(data.listings.total_pages, 0);
        assert!(data.listings.items.is_empty());
    }
}
