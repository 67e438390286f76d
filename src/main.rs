use anyhow::Result;
use console::{Term, style};
use log::{info, warn};
use rust_i18n::t;
use share_video_organize::config::Config;
use share_video_organize::init;
use share_video_organize::menu::show_main_menu;

rust_i18n::i18n!("locales", fallback = "en-US");

fn main() -> Result<()> {
    init::init();
    let term = Term::stdout();

    // Load config and set locale
    let mut config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    loop {
        match show_main_menu(&term, &mut config) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style(t!("main_menu.goodbye")).green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style(t!("main_menu.error_prefix")).red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
