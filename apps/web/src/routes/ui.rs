//! Page handlers. Every response re-renders the whole page from the caller's
//! session.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use uuid::Uuid;

use crate::errors::AppError;
use crate::form::FormView;
use crate::results::ResultsPanel;
use crate::session::store::{submit_form, SharedSession};
use crate::session::{Session, SubmitRejected};
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "match_session";

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    form: FormView,
    /// Pre-rendered results panel; `None` until a response has arrived.
    results_html: Option<String>,
    error: Option<&'a str>,
    loading: bool,
}

fn render_page(session: &Session) -> Result<Html<String>, AppError> {
    let results_html = session
        .matches()
        .map(|matches| ResultsPanel::new(matches).render())
        .transpose()?;

    let page = IndexPage {
        form: session.form.view(session.is_loading()),
        results_html,
        error: session.error(),
        loading: session.is_loading(),
    };

    Ok(Html(page.render()?))
}

async fn resolve_session(state: &AppState, jar: CookieJar) -> (CookieJar, SharedSession) {
    let requested = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

    let (id, session) = state.sessions.get_or_create(requested).await;

    let jar = if requested == Some(id) {
        jar
    } else {
        jar.add(
            Cookie::build((SESSION_COOKIE, id.to_string()))
                .path("/")
                .http_only(true),
        )
    };

    (jar, session)
}

/// GET /
pub async fn index_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let (jar, session) = resolve_session(&state, jar).await;
    let page = render_page(&*session.lock().await)?;
    Ok((jar, page))
}

/// POST /match
///
/// Applies the posted fields to the draft, validates, and runs one match
/// request. 422 when validation fails, 409 when a request is already in
/// flight for this session.
pub async fn submit_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<(StatusCode, CookieJar, Html<String>), AppError> {
    let (jar, session) = resolve_session(&state, jar).await;

    let status = match submit_form(session.clone(), &fields, state.matcher.clone()).await {
        Ok(()) => StatusCode::OK,
        Err(SubmitRejected::Invalid) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(SubmitRejected::InFlight) => {
            tracing::warn!("Rejected submission while a request is in flight");
            StatusCode::CONFLICT
        }
    };

    let page = render_page(&*session.lock().await)?;
    Ok((status, jar, page))
}
