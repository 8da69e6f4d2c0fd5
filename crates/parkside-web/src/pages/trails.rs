use salvo::writing::{Redirect, Text};
use salvo::{Depot, Request, Response, Router, handler};
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::client::get_client_from_depot;
use crate::model::{NationalPark, Trail, TrailPayload};
use crate::pages::render::{escape_html, flash, layout};
use crate::session::{SessionAccount, current_account, current_token};
use parkside_core::types::Difficulty;

#[derive(Debug, Deserialize)]
struct TrailForm {
    name: String,
    distance_km: f64,
    elevation_gain_m: f64,
    difficulty: String,
    national_park_id: String,
}

fn require_admin(depot: &Depot, res: &mut Response) -> Option<SessionAccount> {
    match current_account(depot) {
        Some(acct) if acct.is_admin() => Some(acct),
        _ => {
            res.render(Redirect::other("/home/accessdenied"));
            None
        }
    }
}

fn parse_path_id(req: &Request) -> Option<uuid::Uuid> {
    req.param::<String>("id")
        .and_then(|s| uuid::Uuid::parse_str(&s).ok())
}

const DIFFICULTIES: [Difficulty; 4] = [
    Difficulty::Trek,
    Difficulty::Moderate,
    Difficulty::Difficult,
    Difficulty::Expert,
];

fn difficulty_options(selected: Option<Difficulty>) -> String {
    DIFFICULTIES
        .iter()
        .map(|d| {
            let marker = if selected == Some(*d) { " selected" } else { "" };
            format!(r#"<option value="{d}"{marker}>{d}</option>"#)
        })
        .collect()
}

fn park_options(parks: &[NationalPark], selected: Option<uuid::Uuid>) -> String {
    parks
        .iter()
        .map(|p| {
            let marker = if selected == Some(p.id) { " selected" } else { "" };
            format!(
                r#"<option value="{}"{marker}>{}</option>"#,
                p.id,
                escape_html(&p.name)
            )
        })
        .collect()
}

fn trail_form(trail: Option<&Trail>, parks: &[NationalPark], message: Option<&str>) -> String {
    let (action, heading) = match trail {
        Some(t) => (format!("/trails/upsert/{}", t.id), "Edit Trail"),
        None => ("/trails/upsert".to_string(), "Create Trail"),
    };
    let name = trail.map(|t| escape_html(&t.name)).unwrap_or_default();
    let distance = trail.map(|t| t.distance_km.to_string()).unwrap_or_default();
    let elevation = trail
        .map(|t| t.elevation_gain_m.to_string())
        .unwrap_or_default();
    let difficulties = difficulty_options(trail.map(|t| t.difficulty));
    let parks_html = park_options(parks, trail.map(|t| t.national_park_id));

    format!(
        r#"{}<h1>{heading}</h1>
<form method="post" action="{action}">
<label>Name <input type="text" name="name" value="{name}"></label>
<label>Distance (km) <input type="number" step="0.1" name="distance_km" value="{distance}"></label>
<label>Elevation gain (m) <input type="number" step="1" name="elevation_gain_m" value="{elevation}"></label>
<label>Difficulty <select name="difficulty">{difficulties}</select></label>
<label>National park <select name="national_park_id">{parks_html}</select></label>
<button type="submit">Save</button>
</form>
"#,
        flash(message)
    )
}

/// ## Summary
/// GET /trails - Trail list with park names resolved from the park list.
#[handler]
async fn index_handler(depot: &mut Depot, res: &mut Response) {
    let client = match get_client_from_depot(depot) {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get API client");
            res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let token = current_token(depot);
    let account = current_account(depot);
    let is_admin = account.as_ref().is_some_and(SessionAccount::is_admin);

    let trails = match client.list_trails(token.as_deref()).await {
        Ok(trails) => trails,
        Err(e) => {
            warn!(error = ?e, "Failed to fetch trail list");
            Vec::new()
        }
    };

    let parks = match client.list_parks(token.as_deref()).await {
        Ok(parks) => parks,
        Err(e) => {
            warn!(error = ?e, "Failed to fetch park list");
            Vec::new()
        }
    };

    let park_names: std::collections::HashMap<uuid::Uuid, &str> =
        parks.iter().map(|p| (p.id, p.name.as_str())).collect();

    let rows: String = trails
        .iter()
        .map(|t| {
            let actions = if is_admin {
                format!(
                    r#"<a href="/trails/upsert/{id}">Edit</a> <a href="/trails/delete/{id}">Delete</a>"#,
                    id = t.id
                )
            } else {
                String::new()
            };
            format!(
                "<tr><td>{}</td><td>{:.1} km</td><td>{:.0} m</td><td>{}</td><td>{}</td><td>{actions}</td></tr>\n",
                escape_html(&t.name),
                t.distance_km,
                t.elevation_gain_m,
                t.difficulty,
                escape_html(park_names.get(&t.national_park_id).copied().unwrap_or("")),
            )
        })
        .collect();

    let create_link = if is_admin {
        r#"<p><a href="/trails/upsert">Create new trail</a></p>"#
    } else {
        ""
    };

    let body = format!(
        "<h1>Trails</h1>\n{create_link}\n\
         <table><tr><th>Name</th><th>Distance</th><th>Elevation gain</th><th>Difficulty</th><th>Park</th><th></th></tr>\n{rows}</table>\n"
    );

    res.render(Text::Html(layout("Trails", account.as_ref(), &body)));
}

/// GET /trails/upsert[/{id}] - Blank form for create, prefilled for edit,
/// with the park drop-down populated from the park list. Admin only.
#[handler]
async fn upsert_page_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(account) = require_admin(depot, res) else {
        return;
    };

    let client = match get_client_from_depot(depot) {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get API client");
            res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let token = current_token(depot);

    let parks = match client.list_parks(token.as_deref()).await {
        Ok(parks) => parks,
        Err(e) => {
            warn!(error = ?e, "Failed to fetch park list");
            Vec::new()
        }
    };

    let existing = match parse_path_id(req) {
        Some(id) => match client.get_trail(token.as_deref(), id).await {
            Ok(trail) => Some(trail),
            Err(e) => {
                warn!(error = ?e, %id, "Failed to fetch trail for edit");
                res.render(Redirect::other("/trails"));
                return;
            }
        },
        None => None,
    };

    let title = if existing.is_some() { "Edit Trail" } else { "Create Trail" };
    res.render(Text::Html(layout(
        title,
        Some(&account),
        &trail_form(existing.as_ref(), &parks, None),
    )));
}

/// ## Summary
/// POST /trails/upsert[/{id}] - Create or update through the API. A failed
/// call re-renders the form with one generic message.
#[handler]
async fn upsert_submit_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(account) = require_admin(depot, res) else {
        return;
    };

    let client = match get_client_from_depot(depot) {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get API client");
            res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let id = parse_path_id(req);
    let token = current_token(depot);

    let form = match req.parse_form::<TrailForm>().await {
        Ok(f) => f,
        Err(e) => {
            debug!(error = ?e, "Failed to parse trail form");
            res.render(Text::Html(layout(
                "Trail",
                Some(&account),
                &trail_form(None, &[], Some("Could not save the trail")),
            )));
            return;
        }
    };

    let parsed = Difficulty::parse(&form.difficulty)
        .zip(uuid::Uuid::parse_str(&form.national_park_id).ok());
    let Some((difficulty, national_park_id)) = parsed else {
        res.render(Text::Html(layout(
            "Trail",
            Some(&account),
            &trail_form(None, &[], Some("Could not save the trail")),
        )));
        return;
    };

    let payload = TrailPayload {
        id,
        name: form.name,
        distance_km: form.distance_km,
        elevation_gain_m: form.elevation_gain_m,
        difficulty,
        national_park_id,
    };

    let outcome = match id {
        Some(id) => client.update_trail(token.as_deref(), id, &payload).await,
        None => client.create_trail(token.as_deref(), &payload).await,
    };

    match outcome {
        Ok(()) => res.render(Redirect::other("/trails")),
        Err(e) => {
            debug!(error = ?e, "Trail save failed");
            res.render(Text::Html(layout(
                "Trail",
                Some(&account),
                &trail_form(None, &[], Some("Could not save the trail")),
            )));
        }
    }
}

/// GET /trails/delete/{id} - Delete through the API, then return to the list
/// either way. Admin only.
#[handler]
async fn delete_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    if require_admin(depot, res).is_none() {
        return;
    }

    let client = match get_client_from_depot(depot) {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get API client");
            res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    if let Some(id) = parse_path_id(req) {
        if let Err(e) = client
            .delete_trail(current_token(depot).as_deref(), id)
            .await
        {
            warn!(error = ?e, %id, "Trail delete failed");
        }
    }

    res.render(Redirect::other("/trails"));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("trails")
        .get(index_handler)
        .push(
            Router::with_path("upsert")
                .get(upsert_page_handler)
                .post(upsert_submit_handler)
                .push(
                    Router::with_path("<id>")
                        .get(upsert_page_handler)
                        .post(upsert_submit_handler),
                ),
        )
        .push(Router::with_path("delete/<id>").get(delete_handler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn difficulty_options_mark_the_selection() {
        let html = difficulty_options(Some(Difficulty::Moderate));
        assert!(html.contains(r#"<option value="moderate" selected>moderate</option>"#));
        assert!(html.contains(r#"<option value="trek">trek</option>"#));
    }

    #[test_log::test]
    fn park_options_escape_names() {
        let parks = vec![NationalPark {
            id: uuid::Uuid::now_v7(),
            name: "A & B".to_string(),
            state: "X".to_string(),
            established: chrono::NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid date"),
            picture: None,
        }];
        let html = park_options(&parks, None);
        assert!(html.contains("A &amp; B"));
    }
}
