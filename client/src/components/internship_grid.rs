//! Internship cards with match score, details and skill tags.

use leptos::prelude::*;

use crate::net::types::Internship;
use crate::state::actions::InternshipAction;
use crate::state::listings::{ListingSource, MatchTier};
use crate::util::effects::PageSignals;

/// Grid of internship cards; the whole grid is replaced on every update.
#[component]
pub fn InternshipGrid() -> impl IntoView {
    let page = PageSignals::from_context();
    let listings = page.listings;

    view! {
        <div
            class="internships-grid"
            id="internshipsGrid"
            data-source=move || match listings.get().internships_source {
                ListingSource::Remote => "remote",
                ListingSource::Default => "default",
            }
        >
            {move || {
                listings
                    .get()
                    .internships
                    .into_iter()
                    .map(|internship| internship_card(internship, page))
                    .collect_view()
            }}
        </div>
    }
}

fn internship_card(internship: Internship, page: PageSignals) -> impl IntoView {
    let id = internship.id;
    let tier = MatchTier::from_score(internship.match_score);
    let on_apply = move |_| page.apply(InternshipAction::Apply(id).effects());
    let on_save = move |_| page.apply(InternshipAction::Save(id).effects());

    view! {
        <div class="internship-card" data-match=internship.match_score.to_string()>
            <div class="card-header">
                <div class="internship-header">
                    <h3>{internship.title}</h3>
                    <div class=format!("match-score {}", tier.css_class())>
                        {format!("{}% Match", internship.match_score)}
                    </div>
                </div>
                <div class="company-info">
                    <span class="company">{internship.company}</span>
                    <span class="location">{format!("📍 {}", internship.location)}</span>
                </div>
            </div>
            <div class="card-content">
                <p class="description">{internship.description}</p>
                <div class="internship-details">
                    <div class="detail-item">
                        <span class="detail-label">"Duration:"</span>
                        <span class="detail-value">{internship.duration}</span>
                    </div>
                    <div class="detail-item">
                        <span class="detail-label">"Stipend:"</span>
                        <span class="detail-value">{internship.stipend}</span>
                    </div>
                </div>
                <div class="skills-required">
                    <span class="detail-label">"Required Skills:"</span>
                    <div class="skills-list">
                        {internship
                            .required_skills
                            .into_iter()
                            .map(|skill| view! { <span class="skill-tag">{skill}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="card-footer">
                <button class="btn btn-primary btn-small" on:click=on_apply>
                    "Apply Now"
                </button>
                <button class="btn btn-outline btn-small" on:click=on_save>
                    "Save"
                </button>
            </div>
        </div>
    }
}
