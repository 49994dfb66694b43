use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use tauri::{Emitter, Manager, State};
use tauri_plugin_dialog::DialogExt;

use crate::core::{
    config::{ConfigManager, Settings},
    model::{DosingCondition, MedicationRecord, TrackedMedication},
    notify::engine::ReminderEngine,
    reminder::ReminderTime,
    search,
    store::{AddOutcome, MedStore, RemoveOutcome, UpdateOutcome},
};

struct AppState {
    store: Mutex<MedStore>,
    settings: Mutex<Settings>,
    config_manager: ConfigManager,
}

// ============================================
// Catalog & search commands
// ============================================

#[tauri::command]
fn search_catalog(query: String, state: State<'_, AppState>) -> Vec<MedicationRecord> {
    let store = state.store.lock().unwrap();
    search::filter(&query, store.catalog())
        .into_iter()
        .cloned()
        .collect()
}

#[tauri::command]
fn get_catalog_entry(
    product_name: String,
    state: State<'_, AppState>,
) -> Option<MedicationRecord> {
    let store = state.store.lock().unwrap();
    store.find_catalog(&product_name).cloned()
}

#[tauri::command]
fn list_tracked(state: State<'_, AppState>) -> Vec<TrackedMedication> {
    state.store.lock().unwrap().tracked().to_vec()
}

/// Dosing condition metadata for the editor's radio buttons.
#[derive(serde::Serialize)]
struct DosingConditionInfo {
    id: DosingCondition,
    name: &'static str,
    description: &'static str,
}

#[tauri::command]
fn list_dosing_conditions() -> Vec<DosingConditionInfo> {
    DosingCondition::all()
        .iter()
        .map(|condition| DosingConditionInfo {
            id: *condition,
            name: condition.display_name(),
            description: condition.description(),
        })
        .collect()
}

// ============================================
// Tracked-list commands
// ============================================
// Each dialog flow returns a typed result; the frontend decides how to
// render warnings and retry prompts.

/// Result of the add flow.
#[derive(serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum AddResponse {
    Added,
    Duplicate { product_name: String },
    UnknownProduct { product_name: String },
    InvalidTime { input: String },
}

#[tauri::command]
fn add_tracked(
    product_name: String,
    time: String,
    condition: DosingCondition,
    state: State<'_, AppState>,
) -> Result<AddResponse, String> {
    let reminder = match time.parse::<ReminderTime>() {
        Ok(reminder) => reminder,
        Err(_) => return Ok(AddResponse::InvalidTime { input: time }),
    };

    let mut store = state.store.lock().unwrap();
    let record = match store.find_catalog(&product_name) {
        Some(record) => record.clone(),
        None => return Ok(AddResponse::UnknownProduct { product_name }),
    };

    match store
        .add(record, reminder, condition)
        .map_err(|e| e.to_string())?
    {
        AddOutcome::Added => {
            log::info!("Now tracking {} at {}", product_name, reminder);
            Ok(AddResponse::Added)
        }
        AddOutcome::Duplicate => Ok(AddResponse::Duplicate { product_name }),
    }
}

/// Result of the change-time flow.
#[derive(serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum UpdateResponse {
    Saved,
    NotTracked { product_name: String },
    InvalidTime { input: String },
}

#[tauri::command]
fn set_reminder(
    product_name: String,
    time: String,
    condition: DosingCondition,
    state: State<'_, AppState>,
) -> Result<UpdateResponse, String> {
    let reminder = match time.parse::<ReminderTime>() {
        Ok(reminder) => reminder,
        Err(_) => return Ok(UpdateResponse::InvalidTime { input: time }),
    };

    let mut store = state.store.lock().unwrap();
    match store
        .set_reminder(&product_name, reminder, condition)
        .map_err(|e| e.to_string())?
    {
        UpdateOutcome::Updated => {
            log::info!("Reminder for {} moved to {}", product_name, reminder);
            Ok(UpdateResponse::Saved)
        }
        UpdateOutcome::NotTracked => Ok(UpdateResponse::NotTracked { product_name }),
    }
}

/// Result of the delete flow.
#[derive(serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum RemoveResponse {
    Removed,
    NotTracked { product_name: String },
}

#[tauri::command]
fn remove_tracked(
    product_name: String,
    state: State<'_, AppState>,
) -> Result<RemoveResponse, String> {
    let mut store = state.store.lock().unwrap();
    match store.remove(&product_name).map_err(|e| e.to_string())? {
        RemoveOutcome::Removed => {
            log::info!("Stopped tracking {}", product_name);
            Ok(RemoveResponse::Removed)
        }
        RemoveOutcome::NotTracked => Ok(RemoveResponse::NotTracked { product_name }),
    }
}

// ============================================
// Settings commands
// ============================================

#[tauri::command]
fn get_settings(state: State<'_, AppState>) -> Settings {
    state.settings.lock().unwrap().clone()
}

#[tauri::command]
fn save_settings(settings: Settings, state: State<'_, AppState>) -> Result<(), String> {
    // Re-open the store first so a bad data directory never half-applies.
    let dir_changed = {
        let current = state.settings.lock().unwrap();
        current.data_dir != settings.data_dir
    };
    if dir_changed {
        let store = MedStore::open(settings.data_dir.clone()).map_err(|e| e.to_string())?;
        *state.store.lock().unwrap() = store;
        log::info!("Data directory changed to {:?}", settings.data_dir);
    }

    let mut current = state.settings.lock().unwrap();
    *current = settings.clone();
    state
        .config_manager
        .save(&settings)
        .map_err(|e| e.to_string())
}

#[tauri::command]
async fn pick_data_dir(app: tauri::AppHandle) -> Result<Option<PathBuf>, String> {
    // Run blocking dialog on a separate thread to avoid freezing the UI
    let result = tauri::async_runtime::spawn_blocking(move || {
        app.dialog().file().blocking_pick_folder()
    })
    .await
    .map_err(|e| e.to_string())?;

    match result {
        Some(file_path) => file_path.into_path().map(Some).map_err(|e| e.to_string()),
        None => Ok(None),
    }
}

pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            let handle = app.handle().clone();

            // Initialize Config
            let config_dir = app.path().app_config_dir().unwrap_or(PathBuf::from("."));
            let config_manager = ConfigManager::new(config_dir);
            let settings = config_manager.load();
            let initial_settings = settings.clone();

            // The catalog is required; without it there is nothing to show.
            let store = match MedStore::open(settings.data_dir.clone()) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Failed to load medication catalog: {}", e);
                    std::process::exit(1);
                }
            };

            app.manage(AppState {
                store: Mutex::new(store),
                settings: Mutex::new(settings),
                config_manager,
            });

            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            app.handle().plugin(tauri_plugin_dialog::init())?;
            app.handle()
                .plugin(tauri_plugin_window_state::Builder::default().build())?;

            // Start the background reminder poller
            tauri::async_runtime::spawn(async move {
                let mut current_interval = initial_settings.poll_interval_seconds.max(1);
                let mut engine = ReminderEngine::new(Duration::from_secs(current_interval));
                log::info!(
                    "Reminder poller started, polling every {}s",
                    current_interval
                );

                loop {
                    // Hot-reload: poll interval and master switch
                    let (interval, enabled) = {
                        let app_state = handle.state::<AppState>();
                        let settings = app_state.settings.lock().unwrap();
                        (settings.poll_interval_seconds.max(1), settings.reminders_enabled)
                    };

                    if interval != current_interval {
                        current_interval = interval;
                        // The tolerance window tracks the interval, so start over.
                        engine = ReminderEngine::new(Duration::from_secs(current_interval));
                        log::info!("Poll interval changed to {}s", current_interval);
                    }

                    if enabled {
                        let now = chrono::Local::now().naive_local();
                        let due = {
                            let app_state = handle.state::<AppState>();
                            let store = app_state.store.lock().unwrap();
                            engine.tick(now, store.tracked())
                        };

                        for event in due {
                            log::info!("Reminder due: {}", event.message);
                            let _ = handle.emit("reminder-due", &event);
                        }
                    }

                    tokio::time::sleep(Duration::from_secs(current_interval)).await;
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            search_catalog,
            get_catalog_entry,
            list_tracked,
            list_dosing_conditions,
            add_tracked,
            set_reminder,
            remove_tracked,
            get_settings,
            save_settings,
            pick_data_dir
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
