use salvo::writing::{Redirect, Text};
use salvo::{Depot, Request, Response, Router, handler};
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::client::get_client_from_depot;
use crate::model::Credentials;
use crate::pages::render::{escape_html, flash, layout};
use crate::session::{clear_login, current_account, current_token, store_login};

#[derive(Debug, Deserialize)]
struct CredentialsForm {
    username: String,
    password: String,
}

fn render_error_page(res: &mut Response, message: &str) {
    res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
    res.render(Text::Html(layout(
        "Error",
        None,
        &format!("<p>{}</p>", escape_html(message)),
    )));
}

/// ## Summary
/// GET / - Overview listing parks and trails side by side. Renders whatever
/// the API returns for the session's token; an unauthenticated visitor still
/// sees the public lists.
#[handler]
pub async fn index_handler(depot: &mut Depot, res: &mut Response) {
    let client = match get_client_from_depot(depot) {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get API client");
            render_error_page(res, "Service unavailable");
            return;
        }
    };

    let token = current_token(depot);
    let account = current_account(depot);

    let parks = match client.list_parks(token.as_deref()).await {
        Ok(parks) => parks,
        Err(e) => {
            warn!(error = ?e, "Failed to fetch park list");
            Vec::new()
        }
    };

    let trails = match client.list_trails(token.as_deref()).await {
        Ok(trails) => trails,
        Err(e) => {
            warn!(error = ?e, "Failed to fetch trail list");
            Vec::new()
        }
    };

    let park_names: std::collections::HashMap<uuid::Uuid, &str> =
        parks.iter().map(|p| (p.id, p.name.as_str())).collect();

    let park_rows: String = parks
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&p.name),
                escape_html(&p.state),
                p.established
            )
        })
        .collect();

    let trail_rows: String = trails
        .iter()
        .map(|t| {
            format!(
                "<tr><td>{}</td><td>{:.1} km</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&t.name),
                t.distance_km,
                t.difficulty,
                escape_html(park_names.get(&t.national_park_id).copied().unwrap_or("")),
            )
        })
        .collect();

    let body = format!(
        "<h1>National Parks</h1>\n\
         <table><tr><th>Name</th><th>State</th><th>Established</th></tr>\n{park_rows}</table>\n\
         <h1>Trails</h1>\n\
         <table><tr><th>Name</th><th>Distance</th><th>Difficulty</th><th>Park</th></tr>\n{trail_rows}</table>\n"
    );

    res.render(Text::Html(layout("Home", account.as_ref(), &body)));
}

fn login_form(message: Option<&str>) -> String {
    format!(
        r#"{}<h1>Login</h1>
<form method="post" action="/home/login">
<label>Username <input type="text" name="username"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Login</button>
</form>
"#,
        flash(message)
    )
}

fn register_form(message: Option<&str>) -> String {
    format!(
        r#"{}<h1>Register</h1>
<form method="post" action="/home/register">
<label>Username <input type="text" name="username"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Register</button>
</form>
"#,
        flash(message)
    )
}

#[handler]
async fn login_page_handler(depot: &mut Depot, res: &mut Response) {
    let account = current_account(depot);
    res.render(Text::Html(layout("Login", account.as_ref(), &login_form(None))));
}

/// ## Summary
/// POST /home/login - Exchange the form credentials for a token and store it
/// in the session. Any failure re-renders the form with one generic message.
#[handler]
async fn login_submit_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Ok(form) = req.parse_form::<CredentialsForm>().await else {
        res.render(Text::Html(layout(
            "Login",
            None,
            &login_form(Some("Invalid username or password")),
        )));
        return;
    };

    let client = match get_client_from_depot(depot) {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get API client");
            render_error_page(res, "Service unavailable");
            return;
        }
    };

    let credentials = Credentials {
        username: form.username,
        password: form.password,
    };

    match client.authenticate(&credentials).await {
        Ok(auth) => {
            if let Err(e) = store_login(depot, &auth) {
                error!(error = ?e, "Failed to store session login");
                render_error_page(res, "Service unavailable");
                return;
            }
            debug!(user = %auth.username, "Login succeeded");
            res.render(Redirect::other("/"));
        }
        Err(e) => {
            debug!(error = ?e, "Login failed");
            res.render(Text::Html(layout(
                "Login",
                None,
                &login_form(Some("Invalid username or password")),
            )));
        }
    }
}

#[handler]
async fn register_page_handler(depot: &mut Depot, res: &mut Response) {
    let account = current_account(depot);
    res.render(Text::Html(layout(
        "Register",
        account.as_ref(),
        &register_form(None),
    )));
}

/// ## Summary
/// POST /home/register - Relay registration to the API; success redirects to
/// the login page, failure re-renders with a generic message.
#[handler]
async fn register_submit_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Ok(form) = req.parse_form::<CredentialsForm>().await else {
        res.render(Text::Html(layout(
            "Register",
            None,
            &register_form(Some("Registration failed")),
        )));
        return;
    };

    let client = match get_client_from_depot(depot) {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get API client");
            render_error_page(res, "Service unavailable");
            return;
        }
    };

    let credentials = Credentials {
        username: form.username,
        password: form.password,
    };

    match client.register(&credentials).await {
        Ok(()) => res.render(Redirect::other("/home/login")),
        Err(e) => {
            debug!(error = ?e, "Registration failed");
            res.render(Text::Html(layout(
                "Register",
                None,
                &register_form(Some("Registration failed")),
            )));
        }
    }
}

/// ## Summary
/// GET /home/logout - Drop the account entry and blank the token, then return
/// home. The token stays valid on the API side.
#[handler]
async fn logout_handler(depot: &mut Depot, res: &mut Response) {
    if let Err(e) = clear_login(depot) {
        error!(error = ?e, "Failed to clear session login");
    }
    res.render(Redirect::other("/"));
}

#[handler]
async fn access_denied_handler(depot: &mut Depot, res: &mut Response) {
    let account = current_account(depot);
    res.render(Text::Html(layout(
        "Access Denied",
        account.as_ref(),
        "<h1>Access Denied</h1>\n<p>You do not have permission to view this page.</p>",
    )));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("home")
        .push(
            Router::with_path("login")
                .get(login_page_handler)
                .post(login_submit_handler),
        )
        .push(
            Router::with_path("register")
                .get(register_page_handler)
                .post(register_submit_handler),
        )
        .push(Router::with_path("logout").get(logout_handler))
        .push(Router::with_path("accessdenied").get(access_denied_handler))
}
