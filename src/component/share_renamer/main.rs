//! Share 錄影整理主模組
//!
//! 以互動方式收集設定，先預覽再實際移動

use super::move_log::MoveLog;
use super::name_formatter::{NameTemplate, TOKEN_HELP};
use super::options::RenameOptions;
use super::pipeline::{MSG_COMPLETED, MSG_CRITICAL_EXIT, MSG_SIMULATED, process};
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::tools::validate_directory_exists;
use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use log::{info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};

/// Share 錄影整理元件
pub struct ShareRenamer<'a> {
    config: &'a mut Config,
}

impl<'a> ShareRenamer<'a> {
    pub fn new(config: &'a mut Config) -> Self {
        Self { config }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", style(t!("renamer.title")).cyan().bold());

        let Some(input_path) = self.prompt_input_path()? else {
            return Ok(()); // ESC pressed
        };
        let input_dir = PathBuf::from(&input_path);
        validate_directory_exists(&input_dir)?;

        add_recent_path(&mut self.config.settings, &input_path);

        let target_dir = PathBuf::from(prompt_text(&t!("renamer.prompt_target"), None, false)?);
        validate_directory_exists(&target_dir)?;

        let dvr_path = prompt_optional_dir(&t!("renamer.prompt_dvr_path"))?;
        let nodvr_path = prompt_optional_dir(&t!("renamer.prompt_nodvr_path"))?;

        let options = self.prompt_options(input_dir, target_dir, dvr_path, nodvr_path)?;

        self.config.settings.rename.remember(&options);
        if let Err(e) = save_settings(&self.config.settings) {
            warn!("無法儲存設定: {e:#}");
        }

        if options.simulate {
            let log = process(&options)?;
            print_log(&log);
            return Ok(());
        }

        // 先以模擬模式預覽
        let preview = process(&RenameOptions {
            simulate: true,
            ..options.clone()
        })?;
        print_log(&preview);

        if preview.last() != Some(MSG_SIMULATED) {
            println!("{}", style(t!("renamer.preview_failed")).red());
            return Ok(());
        }
        if preview.len() == 1 {
            println!("{}", style(t!("renamer.nothing_to_move")).yellow());
            return Ok(());
        }

        if !confirm(&t!("renamer.confirm_move"), false)? {
            println!("{}", style(t!("common.cancelled")).yellow());
            return Ok(());
        }

        let log = process(&options)?;
        print_log(&log);
        info!(
            "整理完成: {} -> {}",
            options.input_path.display(),
            options.target_path.display()
        );

        Ok(())
    }

    fn prompt_input_path(&self) -> Result<Option<String>> {
        let recent_paths = &self.config.settings.recent_paths;

        if recent_paths.is_empty() {
            return prompt_text(&t!("renamer.prompt_input"), None, false).map(Some);
        }

        let mut items: Vec<String> = recent_paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let indicator = if Path::new(p).exists() { "✓" } else { "✗" };
                format!("{} [{}] {}", i + 1, indicator, p)
            })
            .collect();
        items.push(t!("common.new_path").to_string());

        println!("{}", style(t!("common.esc_hint")).dim());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("common.select_path"))
            .items(&items)
            .default(0)
            .interact_opt()?;

        match selection {
            None => Ok(None),
            Some(idx) if idx < recent_paths.len() => Ok(Some(recent_paths[idx].clone())),
            Some(_) => prompt_text(&t!("renamer.prompt_input"), None, false).map(Some),
        }
    }

    fn prompt_options(
        &self,
        input_path: PathBuf,
        target_path: PathBuf,
        dvr_path: Option<PathBuf>,
        nodvr_path: Option<PathBuf>,
    ) -> Result<RenameOptions> {
        let defaults = &self.config.settings.rename;

        println!();
        println!("{}", style(t!("renamer.token_help")).dim());
        println!("{}", style(TOKEN_HELP).dim());
        println!();

        let template: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("renamer.prompt_template"))
            .default(defaults.template.clone())
            .validate_with(|input: &String| -> Result<(), String> {
                NameTemplate::parse(input)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?;

        let dvr_label = prompt_text(
            &t!("renamer.prompt_dvr_label"),
            Some(&defaults.dvr_label),
            true,
        )?;
        let space_char = prompt_text(
            &t!("renamer.prompt_space_char"),
            Some(&defaults.space_char),
            true,
        )?;
        let validate = confirm(&t!("renamer.confirm_validate"), defaults.validate)?;
        let simulate = confirm(&t!("renamer.confirm_simulate"), false)?;

        Ok(RenameOptions {
            input_path,
            target_path,
            dvr_path,
            nodvr_path,
            template,
            dvr_label,
            space_char,
            validate,
            simulate,
        })
    }
}

fn prompt_text(prompt: &str, default: Option<&str>, allow_empty: bool) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(allow_empty);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

/// 空白輸入代表不指定
fn prompt_optional_dir(prompt: &str) -> Result<Option<PathBuf>> {
    let path = prompt_text(prompt, None, true)?;
    let path = path.trim();
    if path.is_empty() {
        return Ok(None);
    }

    let dir = PathBuf::from(path);
    validate_directory_exists(&dir)?;
    Ok(Some(dir))
}

fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn print_log(log: &MoveLog) {
    println!();
    for line in log {
        let styled = if line == MSG_COMPLETED || line == MSG_SIMULATED {
            style(line).green().bold()
        } else if line == MSG_CRITICAL_EXIT || line.starts_with("Can't move") {
            style(line).red()
        } else if line.starts_with("Skipping") {
            style(line).yellow()
        } else if line.starts_with("[Simulated]") {
            style(line).dim()
        } else {
            style(line).cyan()
        };
        println!("  {styled}");
    }
    println!();
}
