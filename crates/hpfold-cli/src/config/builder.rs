use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::{EnumerateArgs, FoldArgs, SearchArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use hpfold::core::scoring::ContactPolicy;
use hpfold::engine::config::{
    EnumerateConfig, EnumerateConfigBuilder, SearchConfig, SearchConfigBuilder,
};
use tracing::debug;

pub fn build_fold_config(args: &FoldArgs) -> Result<SearchConfig> {
    let mut file_config = load_file_config(&args.search)?;
    merge_search(&args.search, &mut file_config, &DefaultsConfig::default())
}

pub fn build_enumerate_config(args: &EnumerateArgs) -> Result<EnumerateConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.search)?;
    let search = merge_search(&args.search, &mut file_config, &defaults)?;

    let enumerate_file = file_config.enumerate.take().unwrap_or_default();
    let keep_best = args
        .show_best
        .or(enumerate_file.show_best)
        .unwrap_or(defaults.show_best);

    EnumerateConfigBuilder::new()
        .search(search)
        .sequence_length(args.length)
        .keep_best(keep_best)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn load_file_config(args: &SearchArgs) -> Result<FileConfig> {
    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    apply_set_values(file_config, &args.set_values)
}

fn merge_search(
    args: &SearchArgs,
    file_config: &mut FileConfig,
    defaults: &DefaultsConfig,
) -> Result<SearchConfig> {
    let search_file = file_config.search.take().unwrap_or_default();

    let contact_policy = args
        .policy
        .map(ContactPolicy::from)
        .or(search_file.contact_policy)
        .unwrap_or(defaults.contact_policy);

    let bound_pruning = if args.no_bound_pruning {
        false
    } else {
        search_file.bound_pruning.unwrap_or(defaults.bound_pruning)
    };

    debug!(?contact_policy, bound_pruning, "Resolved search configuration.");

    SearchConfigBuilder::new()
        .contact_policy(contact_policy)
        .bound_pruning(bound_pruning)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "search.contact-policy" => {
                config.search.get_or_insert_with(Default::default).contact_policy = Some(
                    parser::parse_contact_policy(value)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "search.bound-pruning" => {
                config.search.get_or_insert_with(Default::default).bound_pruning = Some(
                    parser::parse_typed(key, "boolean", value)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "enumerate.show-best" => {
                config.enumerate.get_or_insert_with(Default::default).show_best = Some(
                    parser::parse_typed(key, "integer", value)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
