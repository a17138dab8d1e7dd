//! office-shell entry point.
//!
//! With the `gui` feature (default) this opens the window. Without it, the
//! binary prints what a GUI run would use: app catalog, directories,
//! settings, shortcuts and the persisted cookie state.

#[cfg(feature = "gui")]
fn main() {
    office_shell::logging::init();
    if let Err(err) = office_shell::ui::webview_app::run() {
        tracing::error!(error = %err, "office-shell failed to start");
        eprintln!("office-shell: {}", err);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use office_shell::app::App;

    office_shell::logging::init();

    println!();
    println!("office-shell v{} (headless)", env!("CARGO_PKG_VERSION"));
    println!();

    let mut app = App::from_platform();
    if let Err(err) = app.startup() {
        eprintln!("office-shell: {}", err);
        std::process::exit(1);
    }

    report_catalog();
    report_paths(&app);
    report_settings(&app);
    report_shortcuts(&app);
    report_cookies(&app);
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("---------------------------------------------------------------");
    println!("  {}", name);
    println!("---------------------------------------------------------------");
}

#[cfg(not(feature = "gui"))]
fn report_catalog() {
    use office_shell::types::office_app::OfficeApp;
    section("Apps");
    for app in OfficeApp::ALL {
        println!("  {:<11} {}", app.label(), app.launch_url());
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn report_paths(app: &office_shell::app::App) {
    section("Directories");
    println!("  data     {}", app.paths.data_dir.display());
    println!("  config   {}", app.paths.config_dir.display());
    println!("  sandbox  {}", office_shell::platform::is_sandboxed());
    println!();
}

#[cfg(not(feature = "gui"))]
fn report_settings(app: &office_shell::app::App) {
    section("Settings");
    let settings = app.settings();
    println!("  file     {}", app.paths.settings_file().display());
    println!(
        "  window   {} ({}x{})",
        settings.window.title, settings.window.width, settings.window.height
    );
    println!("  startup  {}", settings.startup_app);
    println!(
        "  zoom     step {} within [{}, {}]",
        settings.zoom.step, settings.zoom.min, settings.zoom.max
    );
    println!(
        "  theme    {:?}, accent {}",
        settings.appearance.theme, settings.appearance.accent_color
    );
    println!();
}

#[cfg(not(feature = "gui"))]
fn report_shortcuts(app: &office_shell::app::App) {
    use office_shell::managers::shortcut_manager::ShortcutManagerTrait;
    section("Shortcuts");
    for (chord, action) in app.shortcut_manager.list_shortcuts() {
        println!("  {:<18} {}", chord, action.name());
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn report_cookies(app: &office_shell::app::App) {
    section("Cookies");
    println!("  file     {}", app.cookie_store.path().display());
    match app.cookie_store.summary() {
        Ok(summary) => {
            println!("  cookies  {} across {} hosts", summary.total, summary.hosts);
            println!("  signed in: {}", summary.has_sign_in_session());
        }
        Err(err) => println!("  unreadable: {}", err),
    }
    println!();
}
