use yew::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;

/// Delay before freshly filtered cards fade back in. Cosmetic only.
const FILTER_FADE_MS: u32 = 50;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReviewCategory {
    Web,
    Branding,
    Marketing,
}

impl ReviewCategory {
    pub fn as_attr(self) -> &'static str {
        match self {
            ReviewCategory::Web => "web",
            ReviewCategory::Branding => "branding",
            ReviewCategory::Marketing => "marketing",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "web" => Some(ReviewCategory::Web),
            "branding" => Some(ReviewCategory::Branding),
            "marketing" => Some(ReviewCategory::Marketing),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReviewFilter {
    All,
    Category(ReviewCategory),
}

impl ReviewFilter {
    pub const ALL: [ReviewFilter; 4] = [
        ReviewFilter::All,
        ReviewFilter::Category(ReviewCategory::Web),
        ReviewFilter::Category(ReviewCategory::Branding),
        ReviewFilter::Category(ReviewCategory::Marketing),
    ];

    pub fn as_attr(self) -> &'static str {
        match self {
            ReviewFilter::All => "all",
            ReviewFilter::Category(category) => category.as_attr(),
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        if value == "all" {
            Some(ReviewFilter::All)
        } else {
            ReviewCategory::from_attr(value).map(ReviewFilter::Category)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReviewFilter::All => "All",
            ReviewFilter::Category(ReviewCategory::Web) => "Web Design",
            ReviewFilter::Category(ReviewCategory::Branding) => "Branding",
            ReviewFilter::Category(ReviewCategory::Marketing) => "Marketing",
        }
    }

    /// Whether a card with the given category is shown under this filter.
    pub fn shows(self, category: ReviewCategory) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::Category(selected) => selected == category,
        }
    }
}

struct Review {
    author: &'static str,
    company: &'static str,
    category: ReviewCategory,
    quote: &'static str,
}

const REVIEWS: &[Review] = &[
    Review {
        author: "Ananya Rao",
        company: "Kinfolk Interiors",
        category: ReviewCategory::Web,
        quote: "The new site loads instantly and our enquiry volume doubled within a month. \
                Working with the team was effortless from brief to launch.",
    },
    Review {
        author: "Dev Malhotra",
        company: "Malhotra & Sons",
        category: ReviewCategory::Branding,
        quote: "They took a forty-year-old family business and gave it an identity our \
                customers finally recognise on the shelf.",
    },
    Review {
        author: "Sofia Pereira",
        company: "Verde Organics",
        category: ReviewCategory::Marketing,
        quote: "Our campaigns went from guesswork to a predictable pipeline. The monthly \
                reports alone are worth it.",
    },
    Review {
        author: "Rahul Iyer",
        company: "Trailhead Fitness",
        category: ReviewCategory::Web,
        quote: "Booking classes from a phone used to be painful. Now members just tap and go.",
    },
    Review {
        author: "Meera Krishnan",
        company: "Saffron Table",
        category: ReviewCategory::Marketing,
        quote: "Weekend reservations are fully booked two weeks out since the local campaign \
                started running.",
    },
    Review {
        author: "Arjun Bhatt",
        company: "Northwind Labs",
        category: ReviewCategory::Branding,
        quote: "From pitch decks to packaging, everything finally speaks the same language.",
    },
];

#[function_component(Reviews)]
pub fn reviews() -> Html {
    let active_filter = use_state(|| ReviewFilter::All);
    let cards_faded_in = use_state(|| true);

    html! {
        <section id="reviews" class="reviews-section fade-up">
            <h2>{"What Our Clients Say"}</h2>
            <div class="filter-bar">
                {
                    ReviewFilter::ALL.iter().map(|filter| {
                        let filter = *filter;
                        let onclick = {
                            let active_filter = active_filter.clone();
                            let cards_faded_in = cards_faded_in.clone();
                            Callback::from(move |_: MouseEvent| {
                                active_filter.set(filter);
                                cards_faded_in.set(false);
                                let cards_faded_in = cards_faded_in.clone();
                                let timeout = Timeout::new(FILTER_FADE_MS, move || {
                                    cards_faded_in.set(true);
                                });
                                timeout.forget();
                            })
                        };
                        html! {
                            <button
                                class={classes!("filter-btn", (*active_filter == filter).then(|| "active"))}
                                data-filter={filter.as_attr()}
                                onclick={onclick}
                            >
                                {filter.label()}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="reviews-grid">
                {
                    REVIEWS.iter().map(|review| {
                        let style = if active_filter.shows(review.category) {
                            if *cards_faded_in { "opacity: 1;" } else { "opacity: 0;" }
                        } else {
                            "display: none;"
                        };
                        html! {
                            <div class="review-card" data-category={review.category.as_attr()} style={style}>
                                <p class="review-quote">{review.quote}</p>
                                <div class="review-author">
                                    <strong>{review.author}</strong>
                                    <span>{review.company}</span>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_shows_every_category() {
        for category in [
            ReviewCategory::Web,
            ReviewCategory::Branding,
            ReviewCategory::Marketing,
        ] {
            assert!(ReviewFilter::All.shows(category));
        }
    }

    #[test]
    fn category_filter_shows_exact_matches_only() {
        let filter = ReviewFilter::Category(ReviewCategory::Branding);
        assert!(filter.shows(ReviewCategory::Branding));
        assert!(!filter.shows(ReviewCategory::Web));
        assert!(!filter.shows(ReviewCategory::Marketing));
    }

    #[test]
    fn filter_attrs_round_trip() {
        for filter in ReviewFilter::ALL {
            assert_eq!(ReviewFilter::from_attr(filter.as_attr()), Some(filter));
        }
    }

    #[test]
    fn unknown_attrs_are_rejected() {
        assert_eq!(ReviewFilter::from_attr("weddings"), None);
        assert_eq!(ReviewFilter::from_attr(""), None);
        assert_eq!(ReviewCategory::from_attr("All"), None);
    }

    #[test]
    fn exactly_one_filter_is_active() {
        for active in ReviewFilter::ALL {
            let marked = ReviewFilter::ALL.iter().filter(|f| **f == active).count();
            assert_eq!(marked, 1);
        }
    }
}
