use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::build_calendar_url;
use crate::core::extract::ExtractLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::ui::messages::warning;
use crate::utils::date::reference_date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Extract {
        files,
        format,
        out,
        force,
        links,
        today,
    } = cmd
    {
        let today = reference_date(today.as_deref())?;
        let opts = cfg.extract_options(today);

        let format = match format {
            Some(f) => *f,
            None => ExportFormat::from_config(&cfg.default_format).unwrap_or_else(|| {
                warning(format!(
                    "Unknown default_format '{}' in config, using table",
                    cfg.default_format
                ));
                ExportFormat::Table
            }),
        };

        let inputs = ExtractLogic::read_inputs(files)?;
        let docs = ExtractLogic::run(&inputs, &opts);

        // Log interno: non blocca l'estrazione se il DB non è disponibile
        match DbPool::new(&cfg.database) {
            Ok(pool) => ExtractLogic::audit(&pool, &docs),
            Err(e) => warning(format!("Audit log unavailable: {e}")),
        }

        let events = ExtractLogic::flatten(&docs);

        let urls: Option<Vec<String>> = links.then(|| {
            events
                .iter()
                .map(|ev| build_calendar_url(ev, &cfg.calendar_base_url))
                .collect()
        });

        let out_path = out
            .as_deref()
            .map(|o| expand_tilde(o).to_string_lossy().to_string());

        ExportLogic::export(
            &events,
            format,
            out_path.as_deref(),
            *force,
            urls.as_deref(),
        )?;
    }

    Ok(())
}
