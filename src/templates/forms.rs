use maud::{html, Markup};

use crate::templates::base_layout;

/// Genre choices offered by the listing forms. Free-text values submitted
/// outside this list still round-trip through get-or-create untouched.
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub const STATE_CHOICES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Current field values for a venue form; blank for a new listing,
/// prefilled from the row for an edit.
#[derive(Default)]
pub struct VenueFormValues {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub image_link: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub genres: Vec<String>,
}

#[derive(Default)]
pub struct ArtistFormValues {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub image_link: String,
    pub facebook_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
    pub genres: Vec<String>,
}

pub fn new_venue_page() -> Markup {
    venue_form_page("List a Venue", "/venues/create", &VenueFormValues::default())
}

pub fn edit_venue_page(id: i32, values: &VenueFormValues) -> Markup {
    venue_form_page("Edit Venue", &format!("/venues/{id}/edit"), values)
}

pub fn new_artist_page() -> Markup {
    artist_form_page(
        "List an Artist",
        "/artists/create",
        &ArtistFormValues::default(),
    )
}

pub fn edit_artist_page(id: i32, values: &ArtistFormValues) -> Markup {
    artist_form_page("Edit Artist", &format!("/artists/{id}/edit"), values)
}

pub fn new_show_page() -> Markup {
    base_layout(
        "Book a Show",
        html! {
            (form_card("Book a Show", html! {
                form method="post" action="/shows/create" class="space-y-4" {
                    (text_input("venue_id", "Venue ID", ""))
                    (text_input("artist_id", "Artist ID", ""))
                    div {
                        label class="block text-sm font-medium text-gray-700" { "Start time" }
                        input type="datetime-local" name="start_time" required
                            class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm";
                    }
                    (submit_button("Book Show"))
                }
            }))
        },
    )
}

fn venue_form_page(title: &str, action: &str, values: &VenueFormValues) -> Markup {
    base_layout(
        title,
        html! {
            (form_card(title, html! {
                form method="post" action=(action) class="space-y-4" {
                    (text_input("name", "Name", &values.name))
                    div class="grid grid-cols-2 gap-4" {
                        (text_input("city", "City", &values.city))
                        (state_select(&values.state))
                    }
                    (text_input("address", "Address", &values.address))
                    (text_input("phone", "Phone", &values.phone))
                    (text_input("website", "Website", &values.website))
                    (text_input("image_link", "Image link", &values.image_link))
                    (text_input("facebook_link", "Facebook link", &values.facebook_link))
                    (genre_select(&values.genres))
                    div class="flex items-center space-x-2" {
                        input type="checkbox" name="seeking_talent" value="true"
                            checked[values.seeking_talent];
                        label class="text-sm text-gray-700" { "Currently seeking talent" }
                    }
                    (text_input("seeking_description", "Seeking description", &values.seeking_description))
                    (submit_button("Save Venue"))
                }
            }))
        },
    )
}

fn artist_form_page(title: &str, action: &str, values: &ArtistFormValues) -> Markup {
    base_layout(
        title,
        html! {
            (form_card(title, html! {
                form method="post" action=(action) class="space-y-4" {
                    (text_input("name", "Name", &values.name))
                    div class="grid grid-cols-2 gap-4" {
                        (text_input("city", "City", &values.city))
                        (state_select(&values.state))
                    }
                    (text_input("phone", "Phone", &values.phone))
                    (text_input("website", "Website", &values.website))
                    (text_input("image_link", "Image link", &values.image_link))
                    (text_input("facebook_link", "Facebook link", &values.facebook_link))
                    (genre_select(&values.genres))
                    div class="flex items-center space-x-2" {
                        input type="checkbox" name="seeking_venue" value="true"
                            checked[values.seeking_venue];
                        label class="text-sm text-gray-700" { "Currently seeking a venue" }
                    }
                    (text_input("seeking_description", "Seeking description", &values.seeking_description))
                    (submit_button("Save Artist"))
                }
            }))
        },
    )
}

fn form_card(title: &str, body: Markup) -> Markup {
    html! {
        div class="max-w-xl mx-auto bg-white rounded-lg shadow-sm p-6" {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { (title) }
            (body)
        }
    }
}

fn text_input(name: &str, label: &str, value: &str) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700" { (label) }
            input type="text" name=(name) value=(value)
                class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm";
        }
    }
}

fn state_select(selected: &str) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700" { "State" }
            select name="state" class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm" {
                @for choice in STATE_CHOICES {
                    option value=(choice) selected[*choice == selected] { (choice) }
                }
            }
        }
    }
}

fn genre_select(selected: &[String]) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700" { "Genres" }
            select name="genres" multiple size="6"
                class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm" {
                @for choice in GENRE_CHOICES {
                    option value=(choice) selected[selected.iter().any(|g| g.as_str() == *choice)] {
                        (choice)
                    }
                }
            }
        }
    }
}

fn submit_button(label: &str) -> Markup {
    html! {
        button type="submit"
            class="bg-indigo-600 text-white px-5 py-2 rounded-md font-medium hover:bg-indigo-700" {
            (label)
        }
    }
}
