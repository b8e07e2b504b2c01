// User-facing operations. Each one resolves credentials, performs a single
// request, prints the response diagnostics to `out` and then does whatever
// extra work the command needs (storing the token, building the summary).

use std::io::Write;

use log::info;
use reqwest::StatusCode;

use crate::api::{RawResponse, Transport};
use crate::config::Config;
use crate::credentials::{resolve_login, resolve_token, Identity, SecretInput};
use crate::dashboard::{DashboardResponse, LoginResponse};
use crate::error::Result;
use crate::token::TokenStore;
use crate::ui;

/// Log in with email and password, prompting for whichever is blank. On a
/// 200 answer the returned token is written to the token file and returned.
pub fn login<T, I, W>(
    api: &T,
    config: &Config,
    input: &mut I,
    email: &str,
    password: &str,
    out: &mut W,
) -> Result<Option<String>>
where
    T: Transport + ?Sized,
    I: SecretInput + ?Sized,
    W: Write,
{
    let identity = resolve_login(email, password, input)?;
    let res = request(api, &config.token_url(), &identity, "Logging in...")?;
    out.write_all(res.render_diagnostic().as_bytes())?;

    if res.status != StatusCode::OK {
        info!("login answered {}, no token stored", res.status);
        return Ok(None);
    }

    let LoginResponse { token } = res.parse()?;
    TokenStore::new(&config.token_file).store(&token, out)?;
    Ok(Some(token))
}

/// Ask the server whether a token is still valid. Uses `token` when given,
/// the token file otherwise.
pub fn verify<T, W>(api: &T, config: &Config, token: &str, out: &mut W) -> Result<RawResponse>
where
    T: Transport + ?Sized,
    W: Write,
{
    let identity = resolve_token(token, &TokenStore::new(&config.token_file))?;
    let res = request(api, &config.verify_url(), &identity, "Verifying token...")?;
    out.write_all(res.render_diagnostic().as_bytes())?;
    Ok(res)
}

/// Fetch the full dashboard with the stored token.
pub fn dashboard<T, W>(api: &T, config: &Config, out: &mut W) -> Result<RawResponse>
where
    T: Transport + ?Sized,
    W: Write,
{
    let identity = resolve_token("", &TokenStore::new(&config.token_file))?;
    let res = request(api, &config.dashboard_url(), &identity, "Fetching dashboard...")?;
    out.write_all(res.render_diagnostic().as_bytes())?;
    Ok(res)
}

/// Fetch the dashboard and print the one-line summary after its diagnostics.
pub fn short_stats<T, W>(api: &T, config: &Config, out: &mut W) -> Result<String>
where
    T: Transport + ?Sized,
    W: Write,
{
    let res = dashboard(api, config, out)?;
    let DashboardResponse { dashboard } = res.parse()?;
    let summary = dashboard.summary();
    writeln!(out, "{}", summary)?;
    Ok(summary)
}

/// Forget the stored token.
pub fn logout(config: &Config) -> Result<()> {
    TokenStore::new(&config.token_file).delete()?;
    info!("token file {} removed", config.token_file.display());
    Ok(())
}

fn request<T: Transport + ?Sized>(
    api: &T,
    url: &str,
    identity: &Identity,
    msg: &str,
) -> Result<RawResponse> {
    let spinner = ui::spinner(msg);
    let res = api.get(url, identity);
    spinner.finish_and_clear();
    res
}
