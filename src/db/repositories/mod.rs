pub mod artists;
pub mod shows;
pub mod venues;

pub use artists::{ArtistRepository, CreateArtistInput, UpdateArtistInput};
pub use shows::{now_to_second, CreateShowInput, ShowListing, ShowRepository, ShowSummary};
pub use venues::{CreateVenueInput, UpdateVenueInput, VenueRepository};

/// Result of a name search: the match count plus the full matching row set.
/// No pagination.
pub struct SearchResult<T> {
    pub count: u64,
    pub items: Vec<T>,
}
