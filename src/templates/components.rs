use chrono::NaiveDateTime;
use maud::{html, Markup};

use crate::db::repositories::ShowSummary;

pub fn fmt_start_time(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn flash_banner(message: &str) -> Markup {
    html! {
        div class="mb-6 rounded-md bg-blue-50 border border-blue-200 px-4 py-3 text-blue-800" {
            (message)
        }
    }
}

pub fn genre_badges(genres: &[String]) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="inline-block bg-indigo-100 text-indigo-800 text-xs px-2 py-1 rounded-full" {
                    (genre)
                }
            }
        }
    }
}

/// Show list under a venue or artist heading. `counterpart_path` is the
/// route prefix of the other party ("/artists" on a venue page).
pub fn show_summary_list(title: &str, shows: &[ShowSummary], counterpart_path: &str) -> Markup {
    html! {
        section class="mt-8" {
            h2 class="text-lg font-semibold text-gray-900 mb-3" {
                (title) " (" (shows.len()) ")"
            }
            @if shows.is_empty() {
                p class="text-sm text-gray-500" { "No shows." }
            } @else {
                ul class="space-y-3" {
                    @for show in shows {
                        li class="bg-white rounded-lg shadow-sm p-4 flex items-center space-x-4" {
                            @if let Some(link) = &show.counterpart_image_link {
                                img src=(link) alt=(show.counterpart_name) class="w-12 h-12 rounded-full object-cover";
                            }
                            div {
                                a href=(format!("{}/{}", counterpart_path, show.counterpart_id))
                                    class="font-medium text-indigo-700 hover:underline" {
                                    (show.counterpart_name)
                                }
                                p class="text-sm text-gray-500" { (fmt_start_time(show.start_time)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn seeking_banner(seeking: bool, description: Option<&str>, seeking_what: &str) -> Markup {
    html! {
        @if seeking {
            div class="mt-4 rounded-md bg-amber-50 border border-amber-200 px-4 py-3" {
                p class="font-medium text-amber-900" { "Currently seeking " (seeking_what) }
                @if let Some(desc) = description {
                    p class="text-sm text-amber-800 mt-1" { (desc) }
                }
            }
        }
    }
}
