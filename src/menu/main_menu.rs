use crate::config::save::save_settings;
use crate::config::types::{Config, Language, RenameDefaults};
use crate::menu::handlers::run_share_renamer;
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use rust_i18n::t;

pub fn show_main_menu(term: &Term, config: &mut Config) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_renamer"),
        t!("main_menu.opt_settings"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_share_renamer(term, config)?;
            Ok(true)
        }
        Some(1) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(2) => Ok(false),
        None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style(t!("settings.title")).cyan().bold());
        println!("{}", style(t!("common.esc_hint")).dim());

        let options = vec![
            t!("settings.opt_language"),
            t!("settings.opt_reset_rename"),
            t!("settings.back"),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("settings.prompt"))
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => show_language_menu(term, config)?,
            Some(1) => reset_rename_defaults(config)?,
            Some(2) | None => break, // ESC or back
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// 將整理參數恢復為預設值
fn reset_rename_defaults(config: &mut Config) -> Result<()> {
    let current = &config.settings.rename;
    println!();
    println!("  {} {}", style(t!("settings.rename.template")).dim(), current.template);
    println!("  {} {}", style(t!("settings.rename.dvr_label")).dim(), current.dvr_label);
    println!(
        "  {} \"{}\"",
        style(t!("settings.rename.space_char")).dim(),
        current.space_char
    );
    println!();

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.rename.confirm_reset"))
        .default(false)
        .interact()?;

    if confirmed {
        config.settings.rename = RenameDefaults::default();
        save_settings(&config.settings)?;
        println!("\n{}", style(t!("settings.saved")).green());
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 語言設定選單
fn show_language_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.language.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let languages = [Language::EnUs, Language::ZhTw];

    let items: Vec<String> = languages.iter().map(ToString::to_string).collect();

    let default_index = languages
        .iter()
        .position(|&l| l == config.settings.language)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.language.prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    // ESC pressed - return without saving
    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_lang = languages[selection];

    if selected_lang != config.settings.language {
        config.settings.language = selected_lang;
        rust_i18n::set_locale(selected_lang.as_str());
        save_settings(&config.settings)?;
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            selected_lang
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}
