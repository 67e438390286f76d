use crate::component::ShareRenamer;
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use rust_i18n::t;

pub fn run_share_renamer(term: &Term, config: &mut Config) -> Result<()> {
    let mut renamer = ShareRenamer::new(config);

    if let Err(e) = renamer.run() {
        eprintln!("{} {:#}", style(t!("common.error_prefix")).red().bold(), e);
    }

    pause(term)?;
    Ok(())
}
