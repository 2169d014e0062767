use maud::{html, Markup, DOCTYPE};

pub fn base_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="h-full" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Showbill" }

                // Compiled TailwindCSS
                link rel="stylesheet" href="/static/css/output.css";
            }
            body class="h-full bg-gray-50" {
                div class="min-h-full" {
                    (nav_bar())

                    main class="container mx-auto px-4 py-8" {
                        (content)
                    }

                    (footer())
                }
            }
        }
    }
}

fn nav_bar() -> Markup {
    html! {
        nav class="bg-white shadow-sm" {
            div class="container mx-auto px-4" {
                div class="flex justify-between items-center h-16" {
                    a href="/" class="flex items-center space-x-3" {
                        span class="text-2xl" { "🎤" }
                        span class="text-xl font-bold text-gray-900" { "Showbill" }
                    }

                    div class="flex space-x-4" {
                        a href="/venues" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "Venues"
                        }
                        a href="/artists" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "Artists"
                        }
                        a href="/shows" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "Shows"
                        }
                        a href="/venues/create" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "List a Venue"
                        }
                        a href="/artists/create" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "List an Artist"
                        }
                        a href="/shows/create" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "Book a Show"
                        }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="bg-white border-t mt-12" {
            div class="container mx-auto px-4 py-6 text-sm text-gray-500" {
                "Showbill: find the next gig in your city."
            }
        }
    }
}
