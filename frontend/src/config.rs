use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Rows requested per page by both admin listings.
pub const PAGE_SIZE: u32 = 10;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_string(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__ADMIN_CONSOLE_ENV = { API_BASE_URL: "..." } (env.js) wins over
    // window.__ADMIN_CONSOLE_CONFIG = { api_base_url: "..." }
    read_global_string("__ADMIN_CONSOLE_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_string("__ADMIN_CONSOLE_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let page = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .context("no page location")?;
    let url = reqwest::Url::parse(&page)
        .and_then(|base| base.join("./config.json"))
        .context("resolving ./config.json")?;
    let resp = reqwest::get(url)
        .await
        .context("requesting ./config.json")?;
    if !resp.status().is_success() {
        bail!("./config.json returned {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("decoding ./config.json")
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(RuntimeConfig {
            api_base_url: Some(url),
        }) => return cache_base_url(&url),
        Ok(_) => log::debug!("config.json has no api_base_url"),
        Err(err) => log::debug!("runtime config unavailable: {:#}", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {}", url);
}
