// Thin packaging shell; all commands and state live in the medminder crate.

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    medminder::run();
}
