//! Teams Page
//!
//! Team cards, an overview table and a detail overlay.

use leptos::prelude::*;
use octofit_domain::format::date_or_na;
use octofit_domain::views::teams::members_label;
use octofit_domain::{Entity, Team};
use reactive_stores::Store;

use crate::components::{CollectionView, DetailModal};
use crate::fetch::use_collection;
use crate::store::{TeamsView, TeamsViewStoreFields};

#[component]
pub fn TeamsPage() -> impl IntoView {
    let state = use_collection::<Team>();
    let store = Store::new(TeamsView::default());

    view! {
        <CollectionView
            state=state
            noun="teams"
            populated={move |teams: Vec<Team>| view! { <TeamsOverview teams=teams store=store /> }.into_any()}
        />
    }
}

#[component]
fn TeamsOverview(teams: Vec<Team>, store: Store<TeamsView>) -> impl IntoView {
    let total = teams.len();
    let open_team = move |team: Team| store.detail().write().open(team);

    let cards = teams
        .iter()
        .cloned()
        .map(|team| view! { <TeamCard team=team on_open=open_team /> })
        .collect_view();
    let rows = teams
        .iter()
        .cloned()
        .map(|team| view! { <TeamRow team=team on_open=open_team /> })
        .collect_view();

    view! {
        <div class="container mt-4">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h2>"👥 Teams"</h2>
                <span class="badge bg-primary">{format!("{} Total Teams", total)}</span>
            </div>

            <div class="row mb-4">{cards}</div>

            {(total == 0).then(|| view! {
                <div class="alert alert-info" role="alert">
                    "No teams found. Create your first team to get started!"
                </div>
            })}

            <div class="card mt-4">
                <div class="card-header">
                    <h5>"Teams Overview"</h5>
                </div>
                <div class="card-body">
                    <div class="table-responsive">
                        <table class="table table-striped table-hover mb-0">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Name"</th>
                                    <th>"Description"</th>
                                    <th>"Members"</th>
                                    <th>"Created At"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows}
                                {(total == 0).then(|| view! {
                                    <tr>
                                        <td colspan="6" class="text-center text-muted">"No teams found"</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>

            {move || store.detail().read().selected().cloned().map(|team| view! {
                <TeamDetail team=team on_close=move |_: ()| store.detail().write().close() />
            })}
        </div>
    }
}

#[component]
fn TeamCard(team: Team, on_open: impl Fn(Team) + Copy + Send + Sync + 'static) -> impl IntoView {
    let name = team.name().unwrap_or_default().to_string();
    let description = team.description().unwrap_or_default().to_string();
    let members = members_label(&team);
    let created = date_or_na(team.created_at());

    view! {
        <div class="col-md-6 col-lg-4 mb-3 team-card">
            <div class="card h-100">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <h5 class="card-title mb-0">{name}</h5>
                    <span class="badge bg-info">{members}</span>
                </div>
                <div class="card-body">
                    <p class="card-text">{description}</p>
                    <p class="text-muted small">
                        <strong>"Created:"</strong>" "{created}
                    </p>
                </div>
                <div class="card-footer bg-transparent">
                    <button class="btn btn-sm btn-primary w-100" on:click=move |_| on_open(team.clone())>
                        "View Details"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TeamRow(team: Team, on_open: impl Fn(Team) + Copy + Send + Sync + 'static) -> impl IntoView {
    view! {
        <tr>
            <td><span class="badge bg-secondary">{team.id().unwrap_or_default()}</span></td>
            <td><strong>{team.name().unwrap_or_default().to_string()}</strong></td>
            <td>{team.description().unwrap_or_default().to_string()}</td>
            <td><span class="badge bg-info">{team.member_count()}</span></td>
            <td>{date_or_na(team.created_at())}</td>
            <td>
                <button class="btn btn-sm btn-info" on:click={
                    let team = team.clone();
                    move |_| on_open(team.clone())
                }>
                    "Details"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn TeamDetail(team: Team, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <DetailModal title=team.name().unwrap_or_default().to_string() on_close=on_close>
            <h6>"Description"</h6>
            <p>{team.description().unwrap_or_default().to_string()}</p>
            <hr />
            <div class="row">
                <div class="col-4">
                    <strong>"Team ID:"</strong>
                    <p class="text-muted">{team.key().unwrap_or_default()}</p>
                </div>
                <div class="col-4">
                    <strong>"Members:"</strong>
                    <p class="text-muted">
                        <span class="badge bg-info">{team.member_count()}</span>
                    </p>
                </div>
                <div class="col-4">
                    <strong>"Created:"</strong>
                    <p class="text-muted">{date_or_na(team.created_at())}</p>
                </div>
            </div>
        </DetailModal>
    }
}
