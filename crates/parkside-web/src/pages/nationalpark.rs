use salvo::writing::{Redirect, Text};
use salvo::{Depot, Request, Response, Router, handler};
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::client::get_client_from_depot;
use crate::model::{NationalPark, ParkPayload};
use crate::pages::render::{escape_html, flash, layout};
use crate::session::{SessionAccount, current_account, current_token};

#[derive(Debug, Deserialize)]
struct ParkForm {
    name: String,
    state: String,
    established: String,
}

/// Mirrors the API's admin gate for page navigation. The API still enforces
/// the real gate on every relayed call.
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

/// The form carries no picture field, so an edit must relay the stored
/// picture or the PATCH would null it out on the API side.
fn park_payload(
    id: Option<uuid::Uuid>,
    form: ParkForm,
    established: chrono::NaiveDate,
    stored_picture: Option<Vec<u8>>,
) -> ParkPayload {
    ParkPayload {
        id,
        name: form.name,
        state: form.state,
        established,
        picture: stored_picture,
    }
}

fn park_form(park: Option<&NationalPark>, message: Option<&str>) -> String {
    let (action, heading) = match park {
        Some(p) => (format!("/nationalpark/upsert/{}", p.id), "Edit National Park"),
        None => ("/nationalpark/upsert".to_string(), "Create National Park"),
    };
    let name = park.map(|p| escape_html(&p.name)).unwrap_or_default();
    let state = park.map(|p| escape_html(&p.state)).unwrap_or_default();
    let established = park.map(|p| p.established.to_string()).unwrap_or_default();

    format!(
        r#"{}<h1>{heading}</h1>
<form method="post" action="{action}">
<label>Name <input type="text" name="name" value="{name}"></label>
<label>State <input type="text" name="state" value="{state}"></label>
<label>Established <input type="date" name="established" value="{established}"></label>
<button type="submit">Save</button>
</form>
"#,
        flash(message)
    )
}

/// ## Summary
/// GET /nationalpark - Park list with admin actions when the session role
/// allows them.
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

    let parks = match client.list_parks(token.as_deref()).await {
        Ok(parks) => parks,
        Err(e) => {
            warn!(error = ?e, "Failed to fetch park list");
            Vec::new()
        }
    };

    let rows: String = parks
        .iter()
        .map(|p| {
            let actions = if is_admin {
                format!(
                    r#"<a href="/nationalpark/upsert/{id}">Edit</a> <a href="/nationalpark/delete/{id}">Delete</a>"#,
                    id = p.id
                )
            } else {
                String::new()
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{actions}</td></tr>\n",
                escape_html(&p.name),
                escape_html(&p.state),
                p.established
            )
        })
        .collect();

    let create_link = if is_admin {
        r#"<p><a href="/nationalpark/upsert">Create new park</a></p>"#
    } else {
        ""
    };

    let body = format!(
        "<h1>National Parks</h1>\n{create_link}\n\
         <table><tr><th>Name</th><th>State</th><th>Established</th><th></th></tr>\n{rows}</table>\n"
    );

    res.render(Text::Html(layout("National Parks", account.as_ref(), &body)));
}

/// GET /nationalpark/upsert[/{id}] - Blank form for create, prefilled for
/// edit. Admin only.
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

    let existing = match parse_path_id(req) {
        Some(id) => match client.get_park(current_token(depot).as_deref(), id).await {
            Ok(park) => Some(park),
            Err(e) => {
                warn!(error = ?e, %id, "Failed to fetch park for edit");
                res.render(Redirect::other("/nationalpark"));
                return;
            }
        },
        None => None,
    };

    let title = if existing.is_some() { "Edit Park" } else { "Create Park" };
    res.render(Text::Html(layout(
        title,
        Some(&account),
        &park_form(existing.as_ref(), None),
    )));
}

/// ## Summary
/// POST /nationalpark/upsert[/{id}] - Create or update through the API. A
/// failed call re-renders the form with one generic message.
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

    let Ok(form) = req.parse_form::<ParkForm>().await else {
        res.render(Text::Html(layout(
            "Park",
            Some(&account),
            &park_form(None, Some("Could not save the park")),
        )));
        return;
    };

    let Ok(established) = chrono::NaiveDate::parse_from_str(&form.established, "%Y-%m-%d") else {
        res.render(Text::Html(layout(
            "Park",
            Some(&account),
            &park_form(None, Some("Could not save the park")),
        )));
        return;
    };

    let token = current_token(depot);

    let stored_picture = match id {
        Some(id) => match client.get_park(token.as_deref(), id).await {
            Ok(park) => park.picture,
            Err(e) => {
                debug!(error = ?e, %id, "Failed to fetch park before update");
                res.render(Text::Html(layout(
                    "Park",
                    Some(&account),
                    &park_form(None, Some("Could not save the park")),
                )));
                return;
            }
        },
        None => None,
    };

    let payload = park_payload(id, form, established, stored_picture);

    let outcome = match id {
        Some(id) => client.update_park(token.as_deref(), id, &payload).await,
        None => client.create_park(token.as_deref(), &payload).await,
    };

    match outcome {
        Ok(()) => res.render(Redirect::other("/nationalpark")),
        Err(e) => {
            debug!(error = ?e, "Park save failed");
            res.render(Text::Html(layout(
                "Park",
                Some(&account),
                &park_form(None, Some("Could not save the park")),
            )));
        }
    }
}

/// GET /nationalpark/delete/{id} - Delete through the API, then return to the
/// list either way. Admin only.
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
        if let Err(e) = client.delete_park(current_token(depot).as_deref(), id).await {
            warn!(error = ?e, %id, "Park delete failed");
        }
    }

    res.render(Redirect::other("/nationalpark"));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("nationalpark")
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

    fn sample_form() -> ParkForm {
        ParkForm {
            name: "Yellowstone".to_string(),
            state: "Wyoming".to_string(),
            established: "1872-03-01".to_string(),
        }
    }

    fn sample_date() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(1872, 3, 1).expect("valid date")
    }

    #[test_log::test]
    fn edit_payload_keeps_stored_picture() {
        let id = uuid::Uuid::now_v7();
        let stored = vec![0x89, 0x50, 0x4e, 0x47];

        let payload = park_payload(Some(id), sample_form(), sample_date(), Some(stored.clone()));

        assert_eq!(payload.id, Some(id));
        assert_eq!(payload.picture, Some(stored));
    }

    #[test_log::test]
    fn create_payload_has_no_picture() {
        let payload = park_payload(None, sample_form(), sample_date(), None);

        assert_eq!(payload.id, None);
        assert_eq!(payload.picture, None);
    }
}
