use maud::{html, Markup, PreEscaped};

use crate::db::entities::{artist, venue};
use crate::db::repositories::{SearchResult, ShowListing};
use crate::services::{ArtistDetailView, ArtistListItem, CityGroup, VenueDetailView};
use crate::templates::{
    base_layout, flash_banner, fmt_start_time, genre_badges, seeking_banner, show_summary_list,
};

pub fn home_page(flash: Option<&str>) -> Markup {
    base_layout(
        "Home",
        html! {
            @if let Some(message) = flash {
                (flash_banner(message))
            }
            div class="text-center py-16" {
                h1 class="text-4xl font-bold text-gray-900" { "Showbill" }
                p class="mt-4 text-lg text-gray-600" {
                    "Browse venues and artists, and book the next show in your city."
                }
                div class="mt-8 flex justify-center space-x-4" {
                    a href="/venues" class="bg-indigo-600 text-white px-5 py-3 rounded-md font-medium hover:bg-indigo-700" {
                        "Find a Venue"
                    }
                    a href="/artists" class="bg-white border border-gray-300 px-5 py-3 rounded-md font-medium hover:bg-gray-100" {
                        "Find an Artist"
                    }
                }
            }
        },
    )
}

pub fn venues_page(groups: &[CityGroup]) -> Markup {
    base_layout(
        "Venues",
        html! {
            div class="flex justify-between items-center mb-6" {
                h1 class="text-2xl font-bold text-gray-900" { "Venues" }
                (search_box("/venues/search", "Search venues"))
            }
            @if groups.is_empty() {
                p class="text-gray-500" { "No venues listed yet." }
            }
            @for group in groups {
                section class="mb-8" {
                    h2 class="text-lg font-semibold text-gray-700 mb-3" {
                        (group.city) ", " (group.state)
                    }
                    ul class="grid grid-cols-1 md:grid-cols-3 gap-4" {
                        @for v in &group.venues {
                            li class="bg-white rounded-lg shadow-sm p-4" {
                                a href=(format!("/venues/{}", v.id)) class="font-medium text-indigo-700 hover:underline" {
                                    (v.name)
                                }
                                p class="text-sm text-gray-500 mt-1" {
                                    (v.upcoming_shows_count) " upcoming shows"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_detail_page(view: &VenueDetailView) -> Markup {
    base_layout(
        &view.name,
        html! {
            div class="bg-white rounded-lg shadow-sm p-6" {
                div class="flex items-start justify-between" {
                    div {
                        h1 class="text-3xl font-bold text-gray-900" { (view.name) }
                        p class="text-gray-600 mt-1" { (view.city) ", " (view.state) }
                        @if let Some(address) = &view.address {
                            p class="text-gray-600" { (address) }
                        }
                        @if let Some(phone) = &view.phone {
                            p class="text-gray-600" { (phone) }
                        }
                        div class="mt-3" { (genre_badges(&view.genres)) }
                        div class="mt-3 space-x-3 text-sm" {
                            @if let Some(website) = &view.website {
                                a href=(website) class="text-indigo-600 hover:underline" { "Website" }
                            }
                            @if let Some(fb) = &view.facebook_link {
                                a href=(fb) class="text-indigo-600 hover:underline" { "Facebook" }
                            }
                        }
                    }
                    @if let Some(link) = &view.image_link {
                        img src=(link) alt=(view.name) class="w-40 h-40 rounded-lg object-cover";
                    }
                }
                (seeking_banner(view.seeking_talent, view.seeking_description.as_deref(), "talent"))
                div class="mt-6 space-x-3" {
                    a href=(format!("/venues/{}/edit", view.id)) class="bg-white border border-gray-300 px-4 py-2 rounded-md text-sm font-medium hover:bg-gray-100" {
                        "Edit"
                    }
                    button id="delete-venue" data-venue-id=(view.id)
                        class="bg-red-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-red-700" {
                        "Delete"
                    }
                }
            }
            (show_summary_list("Upcoming Shows", &view.upcoming_shows, "/artists"))
            (show_summary_list("Past Shows", &view.past_shows, "/artists"))
            script {
                (PreEscaped(r#"
                document.getElementById('delete-venue').addEventListener('click', function () {
                    if (!confirm('Delete this venue and all of its shows?')) return;
                    fetch('/venues/' + this.dataset.venueId, { method: 'DELETE' })
                        .then(function (res) { return res.json(); })
                        .then(function (body) {
                            if (body.success) { window.location.href = '/'; }
                            else { alert('Venue could not be deleted.'); }
                        });
                });
                "#))
            }
        },
    )
}

pub fn artists_page(items: &[ArtistListItem]) -> Markup {
    base_layout(
        "Artists",
        html! {
            div class="flex justify-between items-center mb-6" {
                h1 class="text-2xl font-bold text-gray-900" { "Artists" }
                (search_box("/artists/search", "Search artists"))
            }
            @if items.is_empty() {
                p class="text-gray-500" { "No artists listed yet." }
            }
            ul class="space-y-2" {
                @for a in items {
                    li class="bg-white rounded-lg shadow-sm px-4 py-3" {
                        a href=(format!("/artists/{}", a.id)) class="font-medium text-indigo-700 hover:underline" {
                            (a.name)
                        }
                    }
                }
            }
        },
    )
}

pub fn artist_detail_page(view: &ArtistDetailView) -> Markup {
    base_layout(
        &view.name,
        html! {
            div class="bg-white rounded-lg shadow-sm p-6" {
                div class="flex items-start justify-between" {
                    div {
                        h1 class="text-3xl font-bold text-gray-900" { (view.name) }
                        p class="text-gray-600 mt-1" { (view.city) ", " (view.state) }
                        @if let Some(phone) = &view.phone {
                            p class="text-gray-600" { (phone) }
                        }
                        div class="mt-3" { (genre_badges(&view.genres)) }
                        div class="mt-3 space-x-3 text-sm" {
                            @if let Some(website) = &view.website {
                                a href=(website) class="text-indigo-600 hover:underline" { "Website" }
                            }
                            @if let Some(fb) = &view.facebook_link {
                                a href=(fb) class="text-indigo-600 hover:underline" { "Facebook" }
                            }
                        }
                    }
                    @if let Some(link) = &view.image_link {
                        img src=(link) alt=(view.name) class="w-40 h-40 rounded-full object-cover";
                    }
                }
                (seeking_banner(view.seeking_venue, view.seeking_description.as_deref(), "a venue"))
                div class="mt-6" {
                    a href=(format!("/artists/{}/edit", view.id)) class="bg-white border border-gray-300 px-4 py-2 rounded-md text-sm font-medium hover:bg-gray-100" {
                        "Edit"
                    }
                }
            }
            (show_summary_list("Upcoming Shows", &view.upcoming_shows, "/venues"))
            (show_summary_list("Past Shows", &view.past_shows, "/venues"))
        },
    )
}

pub fn shows_page(listings: &[ShowListing]) -> Markup {
    base_layout(
        "Shows",
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { "Shows" }
            @if listings.is_empty() {
                p class="text-gray-500" { "No shows booked yet." }
            }
            ul class="space-y-3" {
                @for show in listings {
                    li class="bg-white rounded-lg shadow-sm p-4 flex items-center space-x-4" {
                        @if let Some(link) = &show.artist_image_link {
                            img src=(link) alt=(show.artist_name) class="w-12 h-12 rounded-full object-cover";
                        }
                        div {
                            a href=(format!("/artists/{}", show.artist_id)) class="font-medium text-indigo-700 hover:underline" {
                                (show.artist_name)
                            }
                            span class="text-gray-500" { " at " }
                            a href=(format!("/venues/{}", show.venue_id)) class="font-medium text-indigo-700 hover:underline" {
                                (show.venue_name)
                            }
                            p class="text-sm text-gray-500" { (fmt_start_time(show.start_time)) }
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_search_page(term: &str, results: &SearchResult<venue::Model>) -> Markup {
    base_layout(
        "Venue Search",
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-2" { "Venue search" }
            p class="text-gray-600 mb-6" {
                (results.count) " results for \"" (term) "\""
            }
            (search_box("/venues/search", "Search venues"))
            ul class="mt-6 space-y-2" {
                @for v in &results.items {
                    li class="bg-white rounded-lg shadow-sm px-4 py-3" {
                        a href=(format!("/venues/{}", v.id)) class="font-medium text-indigo-700 hover:underline" {
                            (v.name)
                        }
                    }
                }
            }
        },
    )
}

pub fn artist_search_page(term: &str, results: &SearchResult<artist::Model>) -> Markup {
    base_layout(
        "Artist Search",
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-2" { "Artist search" }
            p class="text-gray-600 mb-6" {
                (results.count) " results for \"" (term) "\""
            }
            (search_box("/artists/search", "Search artists"))
            ul class="mt-6 space-y-2" {
                @for a in &results.items {
                    li class="bg-white rounded-lg shadow-sm px-4 py-3" {
                        a href=(format!("/artists/{}", a.id)) class="font-medium text-indigo-700 hover:underline" {
                            (a.name)
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found_page() -> Markup {
    base_layout(
        "Not Found",
        html! {
            div class="text-center py-16" {
                h1 class="text-4xl font-bold text-gray-900" { "404" }
                p class="mt-4 text-gray-600" { "That page does not exist." }
                a href="/" class="mt-6 inline-block text-indigo-600 hover:underline" { "Back home" }
            }
        },
    )
}

pub fn server_error_page() -> Markup {
    base_layout(
        "Server Error",
        html! {
            div class="text-center py-16" {
                h1 class="text-4xl font-bold text-gray-900" { "500" }
                p class="mt-4 text-gray-600" { "Something went wrong. Please try again." }
                a href="/" class="mt-6 inline-block text-indigo-600 hover:underline" { "Back home" }
            }
        },
    )
}

fn search_box(action: &str, placeholder: &str) -> Markup {
    html! {
        form method="post" action=(action) class="flex space-x-2" {
            input type="text" name="search_term" placeholder=(placeholder)
                class="border border-gray-300 rounded-md px-3 py-2 text-sm";
            button type="submit" class="bg-indigo-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-indigo-700" {
                "Search"
            }
        }
    }
}
