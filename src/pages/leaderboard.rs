//! Leaderboard Page
//!
//! Podium for the top three plus the full ranking table. Rank follows the
//! order the API sends.

use leptos::prelude::*;
use octofit_domain::format::{plain, thousands};
use octofit_domain::views::leaderboard::{rank_entries, RankedEntry, PODIUM_SIZE};
use octofit_domain::LeaderboardEntry;

use crate::components::CollectionView;
use crate::fetch::use_collection;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let state = use_collection::<LeaderboardEntry>();

    view! {
        <CollectionView
            state=state
            noun="leaderboard"
            populated={move |entries: Vec<LeaderboardEntry>| view! { <Rankings entries=entries /> }.into_any()}
        />
    }
}

#[component]
fn Rankings(entries: Vec<LeaderboardEntry>) -> impl IntoView {
    let ranked = rank_entries(&entries);
    let competitors = ranked.len();

    let podium = ranked
        .iter()
        .take(PODIUM_SIZE)
        .cloned()
        .map(|ranked| view! { <PodiumCard ranked=ranked /> })
        .collect_view();
    let rows = ranked
        .into_iter()
        .map(|ranked| view! { <RankingRow ranked=ranked /> })
        .collect_view();

    view! {
        <div class="container mt-4">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h2>"🏆 Leaderboard"</h2>
                <span class="badge bg-primary">{format!("{} Competitors", competitors)}</span>
            </div>

            {(competitors > 0).then(|| view! { <div class="row mb-4">{podium}</div> })}

            <div class="card">
                <div class="card-header">
                    <h5 class="mb-0">"Full Rankings"</h5>
                </div>
                <div class="card-body">
                    <div class="table-responsive">
                        <table class="table table-striped table-hover mb-0">
                            <thead>
                                <tr>
                                    <th>"Rank"</th>
                                    <th>"User"</th>
                                    <th>"Total Calories"</th>
                                    <th>"Total Activities"</th>
                                    <th>"Avg per Activity"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows}
                                {(competitors == 0).then(|| view! {
                                    <tr>
                                        <td colspan="5" class="text-center text-muted">"No leaderboard data found"</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>

            {(competitors > 0).then(|| view! {
                <div class="alert alert-info mt-4" role="alert">
                    <strong>"Tip:"</strong>
                    " Complete more activities and burn more calories to climb the leaderboard! 🔥"
                </div>
            })}
        </div>
    }
}

#[component]
fn PodiumCard(ranked: RankedEntry) -> impl IntoView {
    let card_class = format!("card text-center {}", ranked.podium_border_class());

    view! {
        <div class="col-md-4 mb-3">
            <div class=card_class style="border-width: 3px;">
                <div class="card-body">
                    <h1 class="display-1">{ranked.rank_label()}</h1>
                    <h5 class="card-title">{ranked.entry.username().unwrap_or_default().to_string()}</h5>
                    <p class="card-text">
                        <strong class="text-danger">{thousands(ranked.entry.total_calories())}</strong>
                        " calories"
                    </p>
                    <p class="text-muted">{format!("{} activities", plain(ranked.entry.activity_count()))}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RankingRow(ranked: RankedEntry) -> impl IntoView {
    let row_class = if ranked.is_podium() { "table-active" } else { "" };
    let badge_class = format!("badge {}", ranked.rank_badge_class());

    view! {
        <tr class=row_class>
            <td><span class=badge_class>{ranked.rank_label()}</span></td>
            <td><strong>{ranked.entry.username().unwrap_or_default().to_string()}</strong></td>
            <td><span class="badge bg-danger">{thousands(ranked.entry.total_calories())}</span></td>
            <td><span class="badge bg-info">{plain(ranked.entry.activity_count())}</span></td>
            <td><span class="text-muted">{format!("{} cal/activity", ranked.average_calories())}</span></td>
        </tr>
    }
}
