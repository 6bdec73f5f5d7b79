use crate::domain::listing::Listing;
use crate::domain::review::Review;

/// Data required to render the listing detail template.
pub struct ListingPageData {
    pub listing: Listing,
    /// Reviews left on the listing, newest first.
    pub reviews: Vec<Review>,
}
