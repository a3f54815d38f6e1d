#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};

use serde::{Deserialize, Serialize};
use serde_json::json;
use tauri::{AppHandle, Manager, State};
use tauri_plugin_opener::OpenerExt;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use parivartan_core::domain::{
    DashboardConfig, Department, JobOffer, Ltc, OfferStatus, StudentPortfolio, Zone,
};
use parivartan_core::export;
use parivartan_core::filter::{self, FilterCriteria};
use parivartan_core::recruitment::{self, RecruitmentBoard};
use parivartan_core::snapshot::{AppSnapshot, SNAPSHOT_FILE};
use parivartan_core::stats::{self, Distributions, HomeStats, PlacementReport};
use parivartan_core::wizard;

const LOCK_POISONED: &str = "Dashboard state is unavailable.";

const BIO_EMPTY_FALLBACK: &str = "Passionate student dedicated to professional growth.";
const BIO_ERROR_FALLBACK: &str = "Enthusiastic learner focusing on excellence in my field.";
const DEFAULT_GENERATION_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";

/// The whole persisted snapshot, held in memory for the lifetime of the
/// process and written back after every mutation.
struct DashboardState(Mutex<AppSnapshot>);

/// Mock recruitment data; session-only, never persisted.
struct RecruitmentState(Mutex<RecruitmentBoard>);

// ---------------------------------------------------------------------------
// Command payloads
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct IdRequest {
    id: String,
}

#[derive(Deserialize)]
struct NameRequest {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LtcAddRequest {
    name: String,
    zone_id: String,
}

#[derive(Deserialize)]
struct PortfolioCreateRequest {
    draft: StudentPortfolio,
}

#[derive(Deserialize)]
struct PortfolioUpdateRequest {
    id: String,
    draft: StudentPortfolio,
}

#[derive(Deserialize)]
struct LtcOptionsRequest {
    zone: Option<String>,
}

#[derive(Deserialize)]
struct ExportReportRequest {
    kind: String,
}

#[derive(Deserialize)]
struct SaveCsvRequest {
    filename: String,
    content: String,
}

#[derive(Serialize)]
struct SaveCsvResult {
    ok: bool,
    canceled: bool,
    filename: String,
    path: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct BioRequest {
    name: String,
    domain: String,
    skills: Vec<String>,
}

#[derive(Deserialize)]
struct SkillsSuggestRequest {
    domain: String,
}

#[derive(Deserialize)]
struct OfferStatusRequest {
    id: String,
    status: OfferStatus,
}

#[derive(Deserialize)]
struct OpenExternalRequest {
    url: String,
}

// ---------------------------------------------------------------------------
// Shell info
// ---------------------------------------------------------------------------

#[tauri::command]
fn app_version(app: AppHandle) -> String {
    app.package_info().version.to_string()
}

#[tauri::command]
fn platform_name() -> String {
    match std::env::consts::OS {
        "windows" => "win32",
        "macos" => "darwin",
        "android" => "android",
        _ => "linux",
    }
    .to_string()
}

// ---------------------------------------------------------------------------
// State and record store
// ---------------------------------------------------------------------------

fn dashboard<'a>(
    state: &'a State<'_, DashboardState>,
) -> Result<MutexGuard<'a, AppSnapshot>, String> {
    state.0.lock().map_err(|_| LOCK_POISONED.to_string())
}

#[tauri::command]
fn state_get(state: State<'_, DashboardState>) -> Result<AppSnapshot, String> {
    Ok(dashboard(&state)?.clone())
}

#[tauri::command]
fn portfolio_create(
    app: AppHandle,
    state: State<'_, DashboardState>,
    payload: PortfolioCreateRequest,
) -> Result<StudentPortfolio, String> {
    let mut snap = dashboard(&state)?;
    wizard::validate_assignment(&payload.draft, &snap.zones, &snap.ltcs)
        .map_err(|err| err.to_string())?;
    let created = snap.create_portfolio(payload.draft).clone();
    persist(&app, &snap)?;
    Ok(created)
}

#[tauri::command]
fn portfolio_update(
    app: AppHandle,
    state: State<'_, DashboardState>,
    payload: PortfolioUpdateRequest,
) -> Result<StudentPortfolio, String> {
    let mut snap = dashboard(&state)?;
    wizard::validate_assignment(&payload.draft, &snap.zones, &snap.ltcs)
        .map_err(|err| err.to_string())?;
    let updated = snap
        .update_portfolio(payload.id.as_str(), payload.draft)
        .map_err(|err| err.to_string())?
        .clone();
    persist(&app, &snap)?;
    Ok(updated)
}

#[tauri::command]
fn portfolio_approve(
    app: AppHandle,
    state: State<'_, DashboardState>,
    payload: IdRequest,
) -> Result<StudentPortfolio, String> {
    let mut snap = dashboard(&state)?;
    let updated = snap
        .approve_portfolio(payload.id.as_str())
        .map_err(|err| err.to_string())?
        .clone();
    persist(&app, &snap)?;
    Ok(updated)
}

#[tauri::command]
fn portfolio_reject(
    app: AppHandle,
    state: State<'_, DashboardState>,
    payload: IdRequest,
) -> Result<StudentPortfolio, String> {
    let mut snap = dashboard(&state)?;
    let updated = snap
        .reject_portfolio(payload.id.as_str())
        .map_err(|err| err.to_string())?
        .clone();
    persist(&app, &snap)?;
    Ok(updated)
}

// ---------------------------------------------------------------------------
// Filtering and statistics
// ---------------------------------------------------------------------------

#[tauri::command]
fn portfolios_filter(
    state: State<'_, DashboardState>,
    payload: FilterCriteria,
) -> Result<Vec<StudentPortfolio>, String> {
    let snap = dashboard(&state)?;
    Ok(filter::filter_portfolios(&snap.portfolios, &payload)
        .into_iter()
        .cloned()
        .collect())
}

#[tauri::command]
fn ltc_options(
    state: State<'_, DashboardState>,
    payload: LtcOptionsRequest,
) -> Result<Vec<Ltc>, String> {
    let snap = dashboard(&state)?;
    Ok(filter::ltc_options(&snap.ltcs, payload.zone.as_deref())
        .into_iter()
        .cloned()
        .collect())
}

#[tauri::command]
fn stats_home(state: State<'_, DashboardState>) -> Result<HomeStats, String> {
    Ok(stats::home_stats(&dashboard(&state)?))
}

#[tauri::command]
fn stats_distributions(state: State<'_, DashboardState>) -> Result<Distributions, String> {
    Ok(stats::distributions(&dashboard(&state)?))
}

#[tauri::command]
fn stats_placement(state: State<'_, DashboardState>) -> Result<PlacementReport, String> {
    Ok(stats::placement_report(&dashboard(&state)?))
}

// ---------------------------------------------------------------------------
// Master data and configuration
// ---------------------------------------------------------------------------

#[tauri::command]
fn zone_add(
    app: AppHandle,
    state: State<'_, DashboardState>,
    payload: NameRequest,
) -> Result<Vec<Zone>, String> {
    let mut snap = dashboard(&state)?;
    snap.add_zone(payload.name.as_str())
        .map_err(|err| err.to_string())?;
    persist(&app, &snap)?;
    Ok(snap.zones.clone())
}

#[tauri::command]
fn zone_remove(
    app: AppHandle,
    state: State<'_, DashboardState>,
    payload: IdRequest,
) -> Result<Vec<Zone>, String> {
    let mut snap = dashboard(&state)?;
    snap.remove_zone(payload.id.as_str());
    persist(&app, &snap)?;
    Ok(snap.zones.clone())
}

#[tauri::command]
fn ltc_add(
    app: AppHandle,
    state: State<'_, DashboardState>,
    payload: LtcAddRequest,
) -> Result<Vec<Ltc>, String> {
    let mut snap = dashboard(&state)?;
    snap.add_ltc(payload.name.as_str(), payload.zone_id.as_str())
        .map_err(|err| err.to_string())?;
    persist(&app, &snap)?;
    Ok(snap.ltcs.clone())
}

#[tauri::command]
fn ltc_remove(
    app: AppHandle,
    state: State<'_, DashboardState>,
    payload: IdRequest,
) -> Result<Vec<Ltc>, String> {
    let mut snap = dashboard(&state)?;
    snap.remove_ltc(payload.id.as_str());
    persist(&app, &snap)?;
    Ok(snap.ltcs.clone())
}

#[tauri::command]
fn department_add(
    app: AppHandle,
    state: State<'_, DashboardState>,
    payload: NameRequest,
) -> Result<Vec<Department>, String> {
    let mut snap = dashboard(&state)?;
    snap.add_department(payload.name.as_str())
        .map_err(|err| err.to_string())?;
    persist(&app, &snap)?;
    Ok(snap.departments.clone())
}

#[tauri::command]
fn department_remove(
    app: AppHandle,
    state: State<'_, DashboardState>,
    payload: IdRequest,
) -> Result<Vec<Department>, String> {
    let mut snap = dashboard(&state)?;
    snap.remove_department(payload.id.as_str());
    persist(&app, &snap)?;
    Ok(snap.departments.clone())
}

#[tauri::command]
fn config_set(
    app: AppHandle,
    state: State<'_, DashboardState>,
    payload: DashboardConfig,
) -> Result<DashboardConfig, String> {
    let mut snap = dashboard(&state)?;
    snap.set_config(payload);
    persist(&app, &snap)?;
    Ok(snap.config.clone())
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

#[tauri::command]
fn export_report_csv(
    state: State<'_, DashboardState>,
    payload: ExportReportRequest,
) -> Result<SaveCsvResult, String> {
    let (filename, content) = {
        let snap = dashboard(&state)?;
        match payload.kind.as_str() {
            "full" => (
                export::report_filename("placement"),
                export::placement_report_csv(&snap),
            ),
            "unplaced" => (
                export::report_filename("unplaced"),
                export::unplaced_report_csv(&snap),
            ),
            _ => return Err("Invalid report type.".to_string()),
        }
    };
    save_csv_file(SaveCsvRequest { filename, content })
}

#[tauri::command]
fn save_csv_file(payload: SaveCsvRequest) -> Result<SaveCsvResult, String> {
    let default_name = sanitize_filename(payload.filename.as_str());
    let path = rfd::FileDialog::new()
        .set_file_name(default_name.as_str())
        .save_file();

    let Some(path) = path else {
        return Ok(SaveCsvResult {
            ok: false,
            canceled: true,
            filename: default_name,
            path: None,
            error: None,
        });
    };

    write_text_file(path.clone(), payload.content.as_str())?;
    Ok(SaveCsvResult {
        ok: true,
        canceled: false,
        filename: default_name,
        path: Some(path.to_string_lossy().to_string()),
        error: None,
    })
}

#[tauri::command]
fn open_external(app: AppHandle, payload: OpenExternalRequest) -> Result<bool, String> {
    app.opener()
        .open_url(payload.url, Option::<String>::None)
        .map_err(|err: tauri_plugin_opener::Error| err.to_string())?;
    Ok(true)
}

// ---------------------------------------------------------------------------
// Text generation (untrusted external collaborator)
// ---------------------------------------------------------------------------

#[tauri::command]
async fn bio_generate(payload: BioRequest) -> String {
    let prompt = format!(
        "Generate a professional, crisp LinkedIn-style bio for a student named {} in the {} \
         department. They have the following skills: {}. Keep it under 60 words.",
        payload.name,
        payload.domain,
        payload.skills.join(", ")
    );
    match generate_text(prompt.as_str(), 0.7).await {
        Ok(text) if !text.is_empty() => text,
        Ok(_) => BIO_EMPTY_FALLBACK.to_string(),
        Err(err) => {
            warn!(error = %err, "bio generation failed, using fallback");
            BIO_ERROR_FALLBACK.to_string()
        }
    }
}

#[tauri::command]
async fn skills_suggest(payload: SkillsSuggestRequest) -> Vec<String> {
    let prompt = format!(
        "List 5 high-demand professional skills for a student studying {} at a vocational \
         training school. Respond in a simple comma-separated list.",
        payload.domain
    );
    match generate_text(prompt.as_str(), 0.5).await {
        Ok(text) => text
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect(),
        Err(err) => {
            warn!(error = %err, "skill suggestion failed");
            Vec::new()
        }
    }
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

fn generation_endpoint() -> Option<String> {
    let key = std::env::var("GEMINI_API_KEY").ok()?;
    if key.trim().is_empty() {
        return None;
    }
    let base =
        std::env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_GENERATION_URL.to_string());
    Some(format!("{base}?key={key}"))
}

async fn generate_text(prompt: &str, temperature: f64) -> Result<String, String> {
    let endpoint =
        generation_endpoint().ok_or_else(|| "Text generation is not configured.".to_string())?;
    let body = json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": { "temperature": temperature },
    });
    let response = http_client()
        .post(endpoint.as_str())
        .json(&body)
        .send()
        .await
        .map_err(|err| err.to_string())?
        .error_for_status()
        .map_err(|err| err.to_string())?;
    let payload: serde_json::Value = response.json().await.map_err(|err| err.to_string())?;
    let text = payload
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .trim()
        .to_string();
    Ok(text)
}

// ---------------------------------------------------------------------------
// Recruitment board (mock, session-only)
// ---------------------------------------------------------------------------

#[tauri::command]
fn recruitment_board(state: State<'_, RecruitmentState>) -> Result<RecruitmentBoard, String> {
    Ok(state
        .0
        .lock()
        .map_err(|_| LOCK_POISONED.to_string())?
        .clone())
}

#[tauri::command]
fn offer_set_status(
    state: State<'_, RecruitmentState>,
    payload: OfferStatusRequest,
) -> Result<Vec<JobOffer>, String> {
    let mut board = state.0.lock().map_err(|_| LOCK_POISONED.to_string())?;
    board
        .set_offer_status(payload.id.as_str(), payload.status)
        .map_err(|err| err.to_string())?;
    Ok(board.offers.clone())
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

fn storage_root_dir(app: &AppHandle) -> Result<PathBuf, String> {
    static RESOLVED_ROOT: OnceLock<PathBuf> = OnceLock::new();
    if let Some(root) = RESOLVED_ROOT.get() {
        return Ok(root.clone());
    }

    let base = app.path().app_data_dir().map_err(|err| err.to_string())?;
    let root = base.join("Parivartan");
    fs::create_dir_all(root.as_path()).map_err(|err| err.to_string())?;
    let _ = RESOLVED_ROOT.set(root.clone());
    Ok(root)
}

fn snapshot_path(app: &AppHandle) -> Result<PathBuf, String> {
    Ok(storage_root_dir(app)?.join(SNAPSHOT_FILE))
}

fn load_snapshot(app: &AppHandle) -> Result<AppSnapshot, String> {
    let path = snapshot_path(app)?;
    if !path.exists() {
        info!("no snapshot on disk, seeding demo data");
        return Ok(AppSnapshot::default());
    }
    let raw = fs::read_to_string(path).map_err(|err| err.to_string())?;
    Ok(AppSnapshot::from_json(raw.as_str()))
}

/// Full-snapshot overwrite after every mutation. Last write wins.
fn persist(app: &AppHandle, snapshot: &AppSnapshot) -> Result<(), String> {
    let path = snapshot_path(app)?;
    let content = snapshot.to_json().map_err(|err| err.to_string())?;
    write_text_file(path, content.as_str())?;
    debug!(portfolios = snapshot.portfolios.len(), "snapshot persisted");
    Ok(())
}

fn write_text_file(path: PathBuf, content: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| err.to_string())?;
    }
    fs::write(path, content).map_err(|err| err.to_string())?;
    Ok(())
}

fn sanitize_filename(value: &str) -> String {
    let mut out = String::new();
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.' {
            out.push(ch);
        } else {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "impact-export.csv".to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let snapshot = load_snapshot(app.handle())?;
            info!(
                portfolios = snapshot.portfolios.len(),
                zones = snapshot.zones.len(),
                ltcs = snapshot.ltcs.len(),
                "dashboard state loaded"
            );
            app.manage(DashboardState(Mutex::new(snapshot)));
            app.manage(RecruitmentState(Mutex::new(recruitment::mock_board())));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            app_version,
            platform_name,
            state_get,
            portfolio_create,
            portfolio_update,
            portfolio_approve,
            portfolio_reject,
            portfolios_filter,
            ltc_options,
            stats_home,
            stats_distributions,
            stats_placement,
            zone_add,
            zone_remove,
            ltc_add,
            ltc_remove,
            department_add,
            department_remove,
            config_set,
            export_report_csv,
            save_csv_file,
            open_external,
            bio_generate,
            skills_suggest,
            recruitment_board,
            offer_set_status
        ])
        .run(tauri::generate_context!())
        .expect("failed to run Parivartan Impact Dashboard")
}
