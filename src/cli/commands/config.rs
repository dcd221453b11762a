use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

/// Without flags the effective configuration is printed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *edit_config {
            ConfigLogic::edit(&Config::config_file(), editor)?;
        }
        if *print_config || !*edit_config {
            ConfigLogic::print(cfg)?;
        }
    }

    Ok(())
}
