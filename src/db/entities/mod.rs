pub mod state;
pub mod city;
pub mod genre;
pub mod venue;
pub mod artist;
pub mod show;
pub mod venue_genre;
pub mod artist_genre;

pub use state::Entity as State;
pub use city::Entity as City;
pub use genre::Entity as Genre;
pub use venue::Entity as Venue;
pub use artist::Entity as Artist;
pub use show::Entity as Show;
pub use venue_genre::Entity as VenueGenre;
pub use artist_genre::Entity as ArtistGenre;
