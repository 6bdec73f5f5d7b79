use serde::{Deserialize, Serialize};

use crate::domain::listing::Listing;
use crate::pagination::Paginated;

/// Raw query parameters accepted by the listings browse page. Every field is
/// optional and arrives as an uninterpreted string; normalization happens in
/// [`crate::services::main::build_search_query`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListingsQuery {
    pub location: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    #[serde(rename = "roomSize")]
    pub room_size: Option<String>,
    /// Comma-separated amenity labels.
    pub amenities: Option<String>,
    pub page: Option<String>,
}

/// Data required to render the listings browse template.
pub struct ListingsPageData {
    /// Requested page of matching listings plus pagination controls.
    pub listings: Paginated<Listing>,
    /// Raw filter values echoed back so the search form keeps its state.
    pub filters: ListingsQuery,
}
